//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::like::{LikeRequest, LikeStatus};
use crate::domain::listing::ListingPage;
use crate::repository::errors::{FetchResult, LikeResult};
use crate::repository::{LikeWriter, ListingQuery, ListingReader};

mock! {
    pub Repository {}

    impl ListingReader for Repository {
        fn fetch_listing_page(&self, query: &ListingQuery) -> FetchResult<ListingPage>;
    }

    impl LikeWriter for Repository {
        fn toggle_like(&self, request: &LikeRequest) -> LikeResult<LikeStatus>;
    }
}
