use crate::summary::SummaryMode;
use std::env;
use thiserror::Error;

pub const DEFAULT_FORECAST_URL: &str = "http://127.0.0.1:5000/api/beaches-forecast";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Static presentation switches, fixed for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub summary_mode: SummaryMode,
    /// Show the probability percentage inside each day badge.
    pub percent_badges: bool,
    /// Thumbnail and external link on each location cell.
    pub media_thumbnails: bool,
    /// Location and day counters above the summary cards.
    pub show_stats: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            summary_mode: SummaryMode::Days,
            percent_badges: false,
            media_thumbnails: true,
            show_stats: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub forecast_url: String,
    pub render: RenderOptions,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = RenderOptions::default();

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let forecast_url = lookup("FORECAST_API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_FORECAST_URL.to_string());

        let summary_mode = match lookup("SUMMARY_MODE") {
            Some(value) => value.parse::<SummaryMode>().map_err(|reason| ConfigError::Invalid {
                name: "SUMMARY_MODE",
                reason,
            })?,
            None => defaults.summary_mode,
        };

        Ok(Self {
            port,
            forecast_url,
            render: RenderOptions {
                summary_mode,
                percent_badges: flag(&lookup, "PERCENT_BADGES", defaults.percent_badges)?,
                media_thumbnails: flag(&lookup, "MEDIA_THUMBNAILS", defaults.media_thumbnails)?,
                show_stats: flag(&lookup, "SHOW_STATS", defaults.show_stats)?,
            },
        })
    }
}

fn flag(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            name,
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.forecast_url, DEFAULT_FORECAST_URL);
        assert_eq!(cfg.render, RenderOptions::default());
    }

    #[test]
    fn values_are_read_from_lookup() {
        let cfg = config(&[
            ("PORT", "9000"),
            ("FORECAST_API_URL", "http://backend/api/beaches-forecast"),
            ("SUMMARY_MODE", "prob"),
            ("PERCENT_BADGES", "yes"),
            ("MEDIA_THUMBNAILS", "0"),
        ])
        .unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.forecast_url, "http://backend/api/beaches-forecast");
        assert_eq!(cfg.render.summary_mode, SummaryMode::Probability);
        assert!(cfg.render.percent_badges);
        assert!(!cfg.render.media_thumbnails);
        assert!(cfg.render.show_stats);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("SUMMARY_MODE", "ratio")]).is_err());
        let err = config(&[("SHOW_STATS", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("SHOW_STATS"));
    }
}
