pub mod dto;
pub mod widget;

pub use dto::{RatingSummary, SubmitRatingRequest, SubmitRatingResponse, SubmitStatus};
pub use widget::{RatingDisplay, RatingInput, RatingWidget, StatusKind};

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct RatingConfig {
    pub base_url: String,
}

impl RatingConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var("RATING_API_URL")
            .map_err(|_| AppError::Config("RATING_API_URL is not set".to_string()))?;
        Ok(Self::new(base_url))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

/// External rating collaborator. The site only reads aggregates and
/// forwards submissions; storage lives behind this trait.
#[async_trait]
pub trait RatingService: Send + Sync {
    async fn fetch_ratings(&self, course_id: u32) -> Result<RatingSummary, AppError>;
    async fn submit_rating(&self, course_id: u32, value: u8) -> Result<SubmitRatingResponse, AppError>;

    fn is_available(&self) -> bool {
        true
    }
}

pub struct HttpRatingService {
    client: Client,
    config: RatingConfig,
}

impl HttpRatingService {
    pub fn new(config: RatingConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn ratings_url(&self, course_id: u32) -> String {
        format!("{}/ratings/{}", self.config.base_url, course_id)
    }
}

#[async_trait]
impl RatingService for HttpRatingService {
    async fn fetch_ratings(&self, course_id: u32) -> Result<RatingSummary, AppError> {
        let url = self.ratings_url(course_id);
        debug!(%url, "fetching ratings");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!("Rating API error {}: {}", status, body)));
        }

        response
            .json::<RatingSummary>()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse rating response: {}", e)))
    }

    async fn submit_rating(&self, course_id: u32, value: u8) -> Result<SubmitRatingResponse, AppError> {
        let url = self.ratings_url(course_id);
        debug!(%url, value, "submitting rating");

        let response = self
            .client
            .post(&url)
            .json(&SubmitRatingRequest { rating: value })
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        // The service reports rejections in the body, so non-2xx responses
        // with a readable body are still passed through.
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<SubmitRatingResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(AppError::Upstream(format!(
                "Rating API error {}: {}",
                status, body
            ))),
            Err(e) => Err(AppError::Upstream(format!("Failed to parse rating response: {}", e))),
        }
    }
}

/// Used when no rating service is configured.
pub struct NoopRatingService;

#[async_trait]
impl RatingService for NoopRatingService {
    async fn fetch_ratings(&self, _course_id: u32) -> Result<RatingSummary, AppError> {
        Err(AppError::Unavailable)
    }

    async fn submit_rating(&self, _course_id: u32, _value: u8) -> Result<SubmitRatingResponse, AppError> {
        Err(AppError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}
