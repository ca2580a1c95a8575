use serde::{Deserialize, Serialize};

/// Payload of the filter-changed notification.
///
/// Both values are trimmed on construction.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterChange {
    pub country: String,
    pub search: String,
}

impl FilterChange {
    #[must_use]
    pub fn new(country: &str, search: &str) -> Self {
        Self {
            country: country.trim().to_string(),
            search: search.trim().to_string(),
        }
    }
}
