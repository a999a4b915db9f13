use crate::app_config::{AppConfig, Environment, MapCenter};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_radius = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let radius = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(invalid(var, format!("radius must be positive, got '{raw}'")));
        }
        Ok(radius)
    };

    let env = parse_environment(&or_default("JOBMAP_ENV", "development"))?;
    let log_level = or_default("JOBMAP_LOG_LEVEL", "info");
    let api_url = or_default("JOBMAP_API_URL", "http://localhost:5000");
    if api_url.trim().is_empty() {
        return Err(invalid("JOBMAP_API_URL", "must not be empty".to_string()));
    }

    let request_timeout_secs = parse_u64("JOBMAP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("JOBMAP_USER_AGENT", "jobmap/0.1 (job-search)");
    let max_concurrent_locations = parse_usize("JOBMAP_MAX_CONCURRENT_LOCATIONS", "4")?.max(1);
    let default_radius_km = parse_radius("JOBMAP_DEFAULT_RADIUS_KM", "10")?;
    let default_center = match lookup("JOBMAP_DEFAULT_CENTER") {
        Ok(raw) => parse_center(&raw).map_err(|reason| invalid("JOBMAP_DEFAULT_CENTER", reason))?,
        Err(_) => MapCenter::LONDON,
    };

    Ok(AppConfig {
        env,
        log_level,
        api_url,
        request_timeout_secs,
        user_agent,
        max_concurrent_locations,
        default_radius_km,
        default_center,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "JOBMAP_ENV".to_string(),
            reason: format!("expected development, test, or production, got '{other}'"),
        }),
    }
}

/// Parse a `"lat,lng"` pair in decimal degrees.
fn parse_center(raw: &str) -> Result<MapCenter, String> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected 'lat,lng', got '{raw}'"))?;
    let lat = lat.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let lng = lng.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(format!("coordinates out of range: {lat},{lng}"));
    }
    Ok(MapCenter { lat, lng })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
