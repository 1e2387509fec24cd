//! HTTP client for the profile API.
//!
//! Used by the dashboard to fetch profiles for a time range. The server's
//! generic error body is surfaced as [`ClientError::Server`].

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::USER_BEHAVIOR_PATH;
use crate::model::{CustomerProfile, ErrorResponse, ProfilesResponse, TimeRange};

/// Default API location for a locally running server.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Server { status: StatusCode, message: String },
}

/// Client for the `/api/user_behavior` endpoint.
#[derive(Clone)]
pub struct ProfileClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for ProfileClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ProfileClient {
    /// Create a client for the API at `base_url` (no trailing slash needed).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the profile set for a time range.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = ProfileClient::new("http://127.0.0.1:3000");
    /// let profiles = client.fetch_profiles(TimeRange::ThirtyDays).await?;
    /// ```
    pub async fn fetch_profiles(
        &self,
        range: TimeRange,
    ) -> Result<Vec<CustomerProfile>, ClientError> {
        let url = format!(
            "{}{}?timeRange={}",
            self.base_url,
            USER_BEHAVIOR_PATH,
            urlencoding::encode(range.as_param())
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(ClientError::Server { status, message });
        }

        let data = response.json::<ProfilesResponse>().await?;
        Ok(data.profiles)
    }
}
