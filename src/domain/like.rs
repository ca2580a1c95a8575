use serde::{Deserialize, Serialize};

/// Response of the like-toggle endpoint.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeStatus {
    pub is_liked: bool,
    pub like_count: i64,
}

/// State-changing request issued for one like affordance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeRequest {
    /// Per-record toggle URL, e.g. `/api/campsites/5/like/`.
    pub url: String,
    /// Value for the `X-CSRFToken` header.
    pub csrf_token: String,
}
