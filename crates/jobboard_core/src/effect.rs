pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage {
        request_id: RequestId,
        page: i64,
        location: String,
    },
}
