//! Configuration loader
//!
//! Builds a `CadenceConfig` by layering sources over the domain
//! defaults: an optional config file first, then environment variables
//! on top.
//!
//! ## Environment Variables
//! - `CADENCE_API_BASE_URL`: scheduling service base URL
//! - `CADENCE_API_TIMEOUT_SECS`: per-request timeout in seconds
//! - `CADENCE_API_MAX_ATTEMPTS`: attempts per request (try + retries)
//! - `CADENCE_WEEK_START`: first day of the week (e.g. "monday")
//! - `CADENCE_DUPLICATE_OFFSET_HOURS`: duplicate time shift in hours
//! - `CADENCE_ALLOW_LOCAL_COMMIT`: local-commit fallback (true/false)
//!
//! ## File Locations
//! The loader probes `./cadence.toml` then `./config.toml` in the
//! working directory.

use std::path::Path;

use cadence_domain::{CadenceConfig, CadenceError, Result};
use chrono::Weekday;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api: FileApiConfig,
    #[serde(default)]
    calendar: FileCalendarConfig,
}

#[derive(Debug, Default, Deserialize)]
struct FileApiConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    max_attempts: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct FileCalendarConfig {
    week_start: Option<String>,
    duplicate_offset_hours: Option<i64>,
    allow_local_commit: Option<bool>,
}

const PROBE_PATHS: [&str; 2] = ["cadence.toml", "config.toml"];

/// Load configuration: defaults, overlaid by the first config file
/// found, overlaid by environment variables.
pub fn load() -> Result<CadenceConfig> {
    dotenvy::dotenv().ok();

    let mut config = CadenceConfig::default();
    for candidate in PROBE_PATHS {
        let path = Path::new(candidate);
        if path.exists() {
            config = load_from_path(path)?;
            tracing::info!(path = %path.display(), "configuration loaded from file");
            break;
        }
    }
    apply_env(&mut config)?;
    Ok(config)
}

/// Load configuration from a TOML file, over the defaults.
pub fn load_from_path(path: &Path) -> Result<CadenceConfig> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        CadenceError::Config(format!("failed to read {}: {err}", path.display()))
    })?;
    let file: FileConfig = toml::from_str(&raw).map_err(|err| {
        CadenceError::Config(format!("failed to parse {}: {err}", path.display()))
    })?;

    let mut config = CadenceConfig::default();
    if let Some(base_url) = file.api.base_url {
        config.api.base_url = base_url;
    }
    if let Some(timeout_secs) = file.api.timeout_secs {
        config.api.timeout_secs = timeout_secs;
    }
    if let Some(max_attempts) = file.api.max_attempts {
        config.api.max_attempts = max_attempts;
    }
    if let Some(week_start) = file.calendar.week_start {
        config.calendar.week_start = parse_weekday(&week_start)?;
    }
    if let Some(hours) = file.calendar.duplicate_offset_hours {
        config.calendar.duplicate_offset_hours = hours;
    }
    if let Some(allow) = file.calendar.allow_local_commit {
        config.calendar.allow_local_commit = allow;
    }
    Ok(config)
}

/// Overlay environment variables on the defaults only.
pub fn load_from_env() -> Result<CadenceConfig> {
    let mut config = CadenceConfig::default();
    apply_env(&mut config)?;
    Ok(config)
}

fn apply_env(config: &mut CadenceConfig) -> Result<()> {
    if let Ok(base_url) = std::env::var("CADENCE_API_BASE_URL") {
        config.api.base_url = base_url;
    }
    if let Some(timeout_secs) = env_parse::<u64>("CADENCE_API_TIMEOUT_SECS")? {
        config.api.timeout_secs = timeout_secs;
    }
    if let Some(max_attempts) = env_parse::<usize>("CADENCE_API_MAX_ATTEMPTS")? {
        config.api.max_attempts = max_attempts;
    }
    if let Ok(week_start) = std::env::var("CADENCE_WEEK_START") {
        config.calendar.week_start = parse_weekday(&week_start)?;
    }
    if let Some(hours) = env_parse::<i64>("CADENCE_DUPLICATE_OFFSET_HOURS")? {
        config.calendar.duplicate_offset_hours = hours;
    }
    if let Ok(raw) = std::env::var("CADENCE_ALLOW_LOCAL_COMMIT") {
        config.calendar.allow_local_commit = matches!(
            raw.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        );
    }
    Ok(())
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|err| CadenceError::Config(format!("invalid {name}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn parse_weekday(raw: &str) -> Result<Weekday> {
    match raw.trim().to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        other => Err(CadenceError::Config(format!("invalid week start: {other}"))),
    }
}
