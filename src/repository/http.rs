//! Blocking HTTP implementations of the repository traits.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::domain::like::{LikeRequest, LikeStatus};
use crate::domain::listing::ListingPage;
use crate::repository::errors::{FetchError, FetchResult, LikeError, LikeResult};
use crate::repository::{LikeWriter, ListingQuery, ListingReader};

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Talks to the campsite API of one site.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: Client,
    base_url: Url,
}

impl HttpRepository {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> FetchResult<Self> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }
}

impl ListingReader for HttpRepository {
    fn fetch_listing_page(&self, query: &ListingQuery) -> FetchResult<ListingPage> {
        let url = self.base_url.join(&query.url())?;
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<ListingPage>()
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl LikeWriter for HttpRepository {
    fn toggle_like(&self, request: &LikeRequest) -> LikeResult<LikeStatus> {
        let url = self.base_url.join(&request.url)?;
        log::debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(CSRF_HEADER, &request.csrf_token)
            .body("{}")
            .send()
            .map_err(|e| LikeError::Transport(e.to_string()))?;

        if let Some(err) = LikeError::from_status(response.status().as_u16()) {
            return Err(err);
        }

        response
            .json::<LikeStatus>()
            .map_err(|e| LikeError::Decode(e.to_string()))
    }
}
