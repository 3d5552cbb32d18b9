use crate::app_config::{AppConfig, Environment, LocalDealsLocation, SHEET_ID_PLACEHOLDER};
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
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("BKFRESH_ENV", "development"))?;
    let bind_addr = parse_addr("BKFRESH_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("BKFRESH_LOG_LEVEL", "info");
    let sheet_id = normalize_sheet_id(lookup("BKFRESH_SHEET_ID").ok());
    let sheets_base_url = or_default("BKFRESH_SHEETS_BASE_URL", "https://docs.google.com")
        .trim_end_matches('/')
        .to_string();
    let local_deals = LocalDealsLocation::parse(&or_default(
        "BKFRESH_LOCAL_DEALS",
        "./public/deals.json",
    ));

    let source_timeout_secs = parse_u64("BKFRESH_SOURCE_TIMEOUT_SECS", "10")?;
    if source_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BKFRESH_SOURCE_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }

    let user_agent = or_default("BKFRESH_USER_AGENT", "bkfresh/0.1 (community-grocery)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        sheet_id,
        sheets_base_url,
        local_deals,
        source_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BKFRESH_ENV".to_string(),
            reason: format!(
                "unrecognized environment \"{other}\"; expected development, test, or production"
            ),
        }),
    }
}

/// Blank and placeholder ids both mean "remote stage disabled".
fn normalize_sheet_id(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != SHEET_ID_PLACEHOLDER)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
