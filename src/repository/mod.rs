use serde::Serialize;

use crate::domain::like::{LikeRequest, LikeStatus};
use crate::domain::listing::ListingPage;
use crate::domain::types::CountryFilter;
use crate::repository::errors::{FetchResult, LikeResult};

pub mod errors;
#[cfg(feature = "http")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Query against the paginated listing endpoint.
///
/// `country` and `search` are only sent when they actually filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingQuery {
    #[serde(skip)]
    pub endpoint: String,
    pub page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListingQuery {
    pub fn new(endpoint: impl Into<String>, page: usize) -> Self {
        Self {
            endpoint: endpoint.into(),
            page,
            country: None,
            search: None,
        }
    }

    pub fn country(mut self, country: &str) -> Self {
        self.country = CountryFilter::new(country).as_query().map(str::to_string);
        self
    }

    pub fn search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Encoded query string, e.g. `page=2&country=hr`.
    pub fn query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_else(|_| format!("page={}", self.page))
    }

    /// Endpoint with the query string appended.
    pub fn url(&self) -> String {
        format!("{}?{}", self.endpoint, self.query_string())
    }
}

pub trait ListingReader {
    fn fetch_listing_page(&self, query: &ListingQuery) -> FetchResult<ListingPage>;
}

pub trait LikeWriter {
    fn toggle_like(&self, request: &LikeRequest) -> LikeResult<LikeStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_page_without_filters() {
        let query = ListingQuery::new("/api/campsites/", 3).country("all").search("   ");
        assert_eq!(query.url(), "/api/campsites/?page=3");
    }

    #[test]
    fn includes_active_filters() {
        let query = ListingQuery::new("/api/campsites/", 1)
            .country(" hr ")
            .search(" pine bay ");
        assert_eq!(query.country.as_deref(), Some("hr"));
        assert_eq!(query.search.as_deref(), Some("pine bay"));
        assert_eq!(
            query.url(),
            "/api/campsites/?page=1&country=hr&search=pine+bay"
        );
    }

    #[test]
    fn encodes_reserved_characters() {
        let query = ListingQuery::new("/api/campsites/", 1).search("a&b=c");
        assert_eq!(query.query_string(), "page=1&search=a%26b%3Dc");
    }
}
