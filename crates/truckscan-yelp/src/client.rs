//! HTTP client for the Yelp Fusion business endpoints.
//!
//! Wraps `reqwest` with bearer authentication, typed response
//! deserialization, and status handling. Failures are returned as
//! [`YelpError`] values; deciding what a failure means for the run is left to
//! the caller.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::YelpError;
use crate::types::{BusinessDetail, BusinessSummary, SearchParams, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.yelp.com/v3";

/// Client for the Yelp Fusion REST API.
///
/// Use [`YelpClient::new`] for production or [`YelpClient::with_base_url`] to
/// point at a mock server in tests.
pub struct YelpClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YelpClient {
    /// Creates a new client pointed at the production Yelp API.
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, YelpError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YelpError::InvalidBaseUrl`] if `base_url`
    /// is not an absolute hierarchical URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, YelpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| YelpError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(YelpError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot carry a path".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Searches for businesses around `location` (e.g. `"Laredo, TX"`).
    ///
    /// A response without a `businesses` array yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`YelpError::Http`] on network failure or timeout.
    /// - [`YelpError::UnexpectedStatus`] on a non-2xx status.
    /// - [`YelpError::Deserialize`] if the body does not match the expected shape.
    pub async fn search_businesses(
        &self,
        location: &str,
        params: &SearchParams,
    ) -> Result<Vec<BusinessSummary>, YelpError> {
        let url = self.search_url(location, params);
        let response: SearchResponse = self
            .request_json(&url, &format!("search(location={location})"))
            .await?;
        Ok(response.businesses)
    }

    /// Fetches full details for a single business by its Yelp id.
    ///
    /// # Errors
    ///
    /// - [`YelpError::Http`] on network failure or timeout.
    /// - [`YelpError::UnexpectedStatus`] on a non-2xx status.
    /// - [`YelpError::Deserialize`] if the body does not match the expected shape.
    pub async fn get_business(&self, business_id: &str) -> Result<BusinessDetail, YelpError> {
        let url = self.endpoint_url(&["businesses", business_id]);
        self.request_json(&url, &format!("business(id={business_id})"))
            .await
    }

    /// Builds the search URL with properly percent-encoded query parameters.
    fn search_url(&self, location: &str, params: &SearchParams) -> Url {
        let mut url = self.endpoint_url(&["businesses", "search"]);
        url.query_pairs_mut()
            .append_pair("location", location)
            .append_pair("categories", &params.categories)
            .append_pair("limit", &params.limit.to_string())
            .append_pair("sort_by", &params.sort_by)
            .append_pair("radius", &params.radius.to_string())
            .append_pair("attributes", &params.attributes);
        url
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    ///
    /// The constructor rejects cannot-be-a-base URLs, so the path is always
    /// writable here.
    fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends an authenticated GET, asserts a 2xx status, and parses the body.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, YelpError> {
        tracing::debug!(%url, "requesting");
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(YelpError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| YelpError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
