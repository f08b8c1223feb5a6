use std::sync::Arc;

use chrono::{Datelike, Local};
use tracing::info;

use crate::config::AppConfig;
use crate::data;
use crate::error::AppError;
use crate::models::SiteConfig;
use crate::pages::PageContext;
use crate::rating::{HttpRatingService, NoopRatingService, RatingService};
use crate::services::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub catalog: Arc<Catalog>,
    pub ratings: Arc<dyn RatingService>,
}

impl AppState {
    pub fn new(site: SiteConfig, catalog: Catalog, ratings: Arc<dyn RatingService>) -> Self {
        Self {
            site: Arc::new(site),
            catalog: Arc::new(catalog),
            ratings,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };

        let ratings: Arc<dyn RatingService> = match &config.rating {
            Some(rating) => {
                info!("Using rating service at {}", rating.base_url);
                Arc::new(HttpRatingService::new(rating.clone())?)
            }
            None => {
                info!("RATING_API_URL not set, ratings are disabled");
                Arc::new(NoopRatingService)
            }
        };

        Ok(Self::new(data::builtin_site(), catalog, ratings))
    }

    /// Rendering context for the current request; the copyright year
    /// follows the local clock.
    pub fn page_context(&self) -> PageContext<'_> {
        PageContext::new(&self.site, &self.catalog, Local::now().year())
    }
}
