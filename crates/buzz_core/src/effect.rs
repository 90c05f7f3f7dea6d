#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchAnalysis {
        request_id: crate::RequestId,
        query: String,
    },
}
