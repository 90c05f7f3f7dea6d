use crate::filter::filter_by_keyword;
use crate::view_model::{AppViewModel, ResultView};
use buzz_model::AnalysisResult;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    query_input: String,
    loading: bool,
    result: Option<AnalysisResult>,
    error: Option<String>,
    selected_keyword: Option<String>,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the full presentation snapshot, including the keyword-filtered
    /// view, from the current state. Nothing here is cached.
    pub fn view(&self) -> AppViewModel {
        let filtered = match (&self.result, &self.selected_keyword) {
            (Some(result), Some(keyword)) => filter_by_keyword(result, keyword),
            _ => None,
        };
        AppViewModel {
            loading: self.loading,
            query_input: self.query_input.clone(),
            error: self.error.clone(),
            result: self
                .result
                .as_ref()
                .map(|result| ResultView::build(result, self.selected_keyword.as_deref())),
            filtered,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub(crate) fn set_query_input(&mut self, text: String) {
        if self.query_input != text {
            self.query_input = text;
            self.dirty = true;
        }
    }

    /// Clears the previous outcome, allocates the token for the new request
    /// and enters the loading state.
    pub(crate) fn begin_search(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        self.loading = true;
        self.result = None;
        self.error = None;
        self.selected_keyword = None;
        self.dirty = true;
        request_id
    }

    /// A response is applied only when it carries the current in-flight
    /// token; anything else belongs to a superseded request.
    pub(crate) fn accepts_response(&self, request_id: RequestId) -> bool {
        self.in_flight == Some(request_id)
    }

    pub(crate) fn finish_search(&mut self, result: AnalysisResult) {
        self.in_flight = None;
        self.loading = false;
        self.error = None;
        self.result = Some(result);
        self.dirty = true;
    }

    pub(crate) fn fail_search(&mut self, message: String) {
        self.in_flight = None;
        self.loading = false;
        self.result = None;
        self.error = Some(message);
        self.dirty = true;
    }

    pub(crate) fn toggle_keyword(&mut self, keyword: &str) {
        if self.result.is_none() {
            return;
        }
        if self.selected_keyword.as_deref() == Some(keyword) {
            self.selected_keyword = None;
        } else {
            self.selected_keyword = Some(keyword.to_string());
        }
        self.dirty = true;
    }

    pub(crate) fn clear_filter(&mut self) {
        if self.selected_keyword.take().is_some() {
            self.dirty = true;
        }
    }
}
