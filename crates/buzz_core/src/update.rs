use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query_input(text);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let query = state.query_input().trim().to_string();
            if query.is_empty() {
                return (state, Vec::new());
            }
            // The submit path is disabled while a request is in flight; a
            // second submit must not supersede the pending one.
            if state.is_loading() {
                return (state, Vec::new());
            }
            let request_id = state.begin_search();
            vec![Effect::FetchAnalysis { request_id, query }]
        }
        Msg::SearchCompleted { request_id, result } => {
            if state.accepts_response(request_id) {
                state.finish_search(result);
            }
            Vec::new()
        }
        Msg::SearchFailed {
            request_id,
            message,
        } => {
            if state.accepts_response(request_id) {
                state.fail_search(message);
            }
            Vec::new()
        }
        Msg::KeywordToggled(keyword) => {
            state.toggle_keyword(&keyword);
            Vec::new()
        }
        Msg::FilterCleared => {
            state.clear_filter();
            Vec::new()
        }
    };

    (state, effects)
}
