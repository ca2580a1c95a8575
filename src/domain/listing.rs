use serde::{Deserialize, Serialize};

use crate::domain::types::CampsiteId;

/// One campsite as returned by the paginated listing endpoint.
///
/// Every field besides `id` may be missing or `null` in the payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ListingRecord {
    pub id: CampsiteId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_premium: Option<bool>,
    #[serde(default)]
    pub like_count: Option<i64>,
    #[serde(default)]
    pub has_liked: Option<bool>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl ListingRecord {
    /// Minimal record with only the identifier set.
    #[must_use]
    pub fn new(id: CampsiteId) -> Self {
        Self {
            id,
            name: None,
            country: None,
            country_name: None,
            town: None,
            description: None,
            image_url: None,
            is_premium: None,
            like_count: None,
            has_liked: None,
            phone_number: None,
            website: None,
        }
    }

    pub fn premium(&self) -> bool {
        self.is_premium.unwrap_or(false)
    }

    pub fn liked(&self) -> bool {
        self.has_liked.unwrap_or(false)
    }

    pub fn likes(&self) -> i64 {
        self.like_count.unwrap_or(0)
    }

    /// Human readable country label, preferring the full name over the code.
    pub fn country_label(&self) -> Option<&str> {
        non_empty(self.country_name.as_deref()).or_else(|| non_empty(self.country.as_deref()))
    }
}

/// Returns `Some` only for values that are present and not empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// One page of the listing endpoint response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ListingPage {
    #[serde(default)]
    pub results: Vec<ListingRecord>,
    #[serde(default)]
    pub count: u64,
    /// Page the server actually served; may be absent.
    #[serde(default)]
    pub current_page: Option<usize>,
    #[serde(default)]
    pub total_pages: Option<usize>,
}
