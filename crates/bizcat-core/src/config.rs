use std::path::PathBuf;

use crate::app_config::{
    BusinessConfig, DEFAULT_CATALOG_PAGE_LIMIT, DEFAULT_COLLECTION_LIMIT,
    DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_MEDIA_HOST_SUFFIX, DEFAULT_UPLOAD_TIMEOUT_MS,
};
use crate::ConfigError;

/// Load catalog client configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// Every variable is optional; unset ones fall back to [`BusinessConfig::default`].
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparsable value.
pub fn load_business_config() -> Result<BusinessConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_business_config_from_env()
}

/// Load configuration from environment variables already in the process.
///
/// Unlike [`load_business_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparsable value.
pub fn load_business_config_from_env() -> Result<BusinessConfig, ConfigError> {
    build_business_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function, so tests
/// can pass a plain `HashMap` instead of mutating the process environment.
fn build_business_config<F>(lookup: F) -> Result<BusinessConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: u32| -> Result<u32, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(default);
        };
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(default);
        };
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let media_host_suffix = or_default("BIZCAT_MEDIA_HOST_SUFFIX", DEFAULT_MEDIA_HOST_SUFFIX);
    if media_host_suffix.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "BIZCAT_MEDIA_HOST_SUFFIX".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let upload_timeout_ms = parse_u64("BIZCAT_UPLOAD_TIMEOUT_MS", DEFAULT_UPLOAD_TIMEOUT_MS)?;
    let temp_dir = lookup("BIZCAT_TEMP_DIR").map_or_else(|_| std::env::temp_dir(), PathBuf::from);
    let download_timeout_secs =
        parse_u64("BIZCAT_DOWNLOAD_TIMEOUT_SECS", DEFAULT_DOWNLOAD_TIMEOUT_SECS)?;
    let catalog_page_limit = parse_u32("BIZCAT_CATALOG_PAGE_LIMIT", DEFAULT_CATALOG_PAGE_LIMIT)?;
    let collection_limit = parse_u32("BIZCAT_COLLECTION_LIMIT", DEFAULT_COLLECTION_LIMIT)?;

    Ok(BusinessConfig {
        media_host_suffix,
        upload_timeout_ms,
        temp_dir,
        download_timeout_secs,
        catalog_page_limit,
        collection_limit,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
