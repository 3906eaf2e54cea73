use crate::{Category, RequestId};

/// Side effects requested by `update`; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestToken {
        username: String,
        password: String,
    },
    FetchStats {
        request_id: RequestId,
        token: String,
        category: Category,
    },
    DraftEmail {
        request_id: RequestId,
        prompt: String,
    },
}
