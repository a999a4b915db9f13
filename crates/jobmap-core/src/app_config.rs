use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// A point the map is centered on, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

impl MapCenter {
    /// Central London, the initial view before any search has run.
    pub const LONDON: MapCenter = MapCenter {
        lat: 51.5074,
        lng: -0.1278,
    };
}

impl Default for MapCenter {
    fn default() -> Self {
        Self::LONDON
    }
}

impl fmt::Display for MapCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the job-search provider, without the `/api/...` path.
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on location queries in flight at once during one search.
    pub max_concurrent_locations: usize,
    pub default_radius_km: f64,
    pub default_center: MapCenter,
}
