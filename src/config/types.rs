use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::mock::DEMO_OWNER_ID;
use crate::engine::DEFAULT_MATCH_RATE;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Brand id of the session owner; never shown in the deck.
    #[serde(default = "default_owner_brand_id")]
    pub owner_brand_id: String,
    /// Probability in [0, 1] that a positive swipe declares a match.
    #[serde(default = "default_match_rate")]
    pub match_rate: f64,
    /// How long the match banner stays up before auto-hiding.
    #[serde(default = "default_banner_seconds")]
    pub banner_seconds: u64,
    /// Seed for the match policy RNG; unset means entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// JSON catalog to load instead of the built-in demo brands.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

fn default_owner_brand_id() -> String {
    DEMO_OWNER_ID.to_string()
}

fn default_match_rate() -> f64 {
    DEFAULT_MATCH_RATE
}

fn default_banner_seconds() -> u64 {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owner_brand_id: default_owner_brand_id(),
            match_rate: default_match_rate(),
            banner_seconds: default_banner_seconds(),
            seed: None,
            catalog_path: None,
        }
    }
}
