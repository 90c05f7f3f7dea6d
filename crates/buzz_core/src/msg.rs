use buzz_model::AnalysisResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the pending query text.
    QueryChanged(String),
    /// User submitted the current query for analysis.
    SearchSubmitted,
    /// Engine finished the fetch for a request.
    SearchCompleted {
        request_id: crate::RequestId,
        result: AnalysisResult,
    },
    /// Engine failed the fetch for a request.
    SearchFailed {
        request_id: crate::RequestId,
        message: String,
    },
    /// User picked a keyword chip; picking the active one deselects it.
    KeywordToggled(String),
    /// User cleared the keyword filter.
    FilterCleared,
}
