// Runtime configuration.
// Parses environment variables into a typed config with defaults.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use reqwest::Url;
use tracing_subscriber::EnvFilter;

use crate::error::{AdminError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:9000/api";
pub const DEFAULT_TITLE: &str = "TinyHouse Listings";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "info";

const LOG_FILE_NAME: &str = "listings-admin.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// GraphQL endpoint all operations are posted to.
    pub api_url: String,
    /// Heading shown above the list.
    pub title: String,
    /// Per-request timeout handed to the HTTP client.
    pub request_timeout: Duration,
    /// Tracing filter directive.
    pub log_filter: String,
    /// Log file destination; `None` when no data directory can be resolved.
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `LISTINGS_API_URL`: default `http://localhost:9000/api`
    /// - `LISTINGS_TITLE`: default `TinyHouse Listings`
    /// - `LISTINGS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `LISTINGS_LOG`: default `info`
    /// - `LISTINGS_LOG_FILE`: default `<data dir>/listings-admin.log`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = parse_api_url(lookup("LISTINGS_API_URL"))?;
        let title = lookup("LISTINGS_TITLE")
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let request_timeout = parse_timeout(lookup("LISTINGS_REQUEST_TIMEOUT_SECS"))?;
        let log_filter = parse_log_filter(lookup("LISTINGS_LOG"))?;
        let log_path = lookup("LISTINGS_LOG_FILE")
            .map(PathBuf::from)
            .or_else(default_log_path);

        Ok(Self {
            api_url,
            title,
            request_timeout,
            log_filter,
            log_path,
        })
    }
}

/// Default log location (~/.local/share/listings-admin on Linux).
pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "listings-admin").map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
}

fn parse_api_url(raw: Option<String>) -> Result<String> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_URL.to_string());
    };

    let invalid = || AdminError::InvalidConfig {
        var: "LISTINGS_API_URL",
        value: raw.clone(),
    };
    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(url.to_string())
}

fn parse_timeout(raw: Option<String>) -> Result<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(AdminError::InvalidConfig {
            var: "LISTINGS_REQUEST_TIMEOUT_SECS",
            value: raw,
        }),
    }
}

fn parse_log_filter(raw: Option<String>) -> Result<String> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LOG_FILTER.to_string());
    };

    match EnvFilter::try_new(raw.trim()) {
        Ok(_) => Ok(raw.trim().to_string()),
        Err(_) => Err(AdminError::InvalidConfig {
            var: "LISTINGS_LOG",
            value: raw,
        }),
    }
}

/// Build the tracing filter for a validated config.
pub fn log_filter(config: &Config) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.log_filter).map_err(|_| AdminError::InvalidConfig {
        var: "LISTINGS_LOG",
        value: config.log_filter.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("LISTINGS_API_URL", "https://rentals.example.test/graphql"),
            ("LISTINGS_TITLE", "Admin"),
            ("LISTINGS_REQUEST_TIMEOUT_SECS", "5"),
            ("LISTINGS_LOG", "listings_admin=debug"),
            ("LISTINGS_LOG_FILE", "/tmp/admin.log"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://rentals.example.test/graphql");
        assert_eq!(config.title, "Admin");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.log_filter, "listings_admin=debug");
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/admin.log")));
    }

    #[test]
    fn test_blank_title_falls_back() {
        let config = Config::from_lookup(lookup(&[("LISTINGS_TITLE", "  ")])).unwrap();
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_rejects_bad_url() {
        for bad in ["not a url", "ftp://example.test/api"] {
            let err = Config::from_lookup(lookup(&[("LISTINGS_API_URL", bad)])).unwrap_err();
            assert!(matches!(
                err,
                AdminError::InvalidConfig {
                    var: "LISTINGS_API_URL",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_rejects_bad_timeout() {
        for bad in ["0", "-3", "soon"] {
            let err = Config::from_lookup(lookup(&[("LISTINGS_REQUEST_TIMEOUT_SECS", bad)]))
                .unwrap_err();
            assert!(matches!(
                err,
                AdminError::InvalidConfig {
                    var: "LISTINGS_REQUEST_TIMEOUT_SECS",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_rejects_bad_log_filter() {
        for bad in ["foo=notalevel[[", "listings_admin=loud"] {
            let err = Config::from_lookup(lookup(&[("LISTINGS_LOG", bad)])).unwrap_err();
            assert!(matches!(
                err,
                AdminError::InvalidConfig {
                    var: "LISTINGS_LOG",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_accepts_log_directives() {
        for good in ["warn", "listings_admin=debug,reqwest=warn"] {
            let config = Config::from_lookup(lookup(&[("LISTINGS_LOG", good)])).unwrap();
            assert_eq!(config.log_filter, good);
            assert!(log_filter(&config).is_ok());
        }
    }

    #[test]
    fn test_log_filter_rejects_unvalidated_value() {
        let mut config = Config::from_lookup(lookup(&[])).unwrap();
        config.log_filter = "foo=notalevel[[".to_string();
        assert!(matches!(
            log_filter(&config),
            Err(AdminError::InvalidConfig {
                var: "LISTINGS_LOG",
                ..
            })
        ));
    }

    #[test]
    fn test_default_log_path_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with(LOG_FILE_NAME));
        }
    }
}
