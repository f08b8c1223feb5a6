use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;
use crate::rating::RatingConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_ASSETS_DIR: &str = "./assets";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub assets_dir: PathBuf,
    /// Alternative dataset; the built-in courses are used when unset.
    pub catalog_path: Option<PathBuf>,
    /// No rating service is contacted when unset.
    pub rating: Option<RatingConfig>,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is invalid: {}", e)))?;
        let assets_dir = env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ASSETS_DIR));
        let catalog_path = non_empty_var("CATALOG_PATH").map(PathBuf::from);
        let rating = RatingConfig::new_from_env()
            .ok()
            .filter(|rating| !rating.base_url.trim().is_empty());

        Ok(Self {
            bind_addr,
            assets_dir,
            catalog_path,
            rating,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
