// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

/// Tunables for the HTTP surface. Values come from `FAUNA_*` environment
/// variables in `main`; tests construct these directly.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    pub stats_ttl: Duration,
    pub shutdown_drain: Duration,
    pub readiness_requires_seed: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            stats_ttl: Duration::from_secs(60),
            shutdown_drain: Duration::from_millis(5000),
            readiness_requires_seed: true,
        }
    }
}

/// Rejects configurations that would make the server silently useless.
pub fn validate_startup_config(cfg: &ApiConfig) -> Result<(), String> {
    if cfg.max_body_bytes == 0 {
        return Err("max_body_bytes must be positive".to_string());
    }
    if cfg.max_body_bytes > 4 * 1024 * 1024 {
        return Err(format!(
            "max_body_bytes {} exceeds the 4 MiB request ceiling",
            cfg.max_body_bytes
        ));
    }
    if cfg.stats_ttl > Duration::from_secs(3600) {
        return Err("stats_ttl must be at most one hour".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        validate_startup_config(&ApiConfig::default()).unwrap();
    }

    #[test]
    fn zero_body_limit_is_rejected() {
        let cfg = ApiConfig {
            max_body_bytes: 0,
            ..ApiConfig::default()
        };
        assert!(validate_startup_config(&cfg).is_err());
    }

    #[test]
    fn oversized_body_limit_is_rejected() {
        let cfg = ApiConfig {
            max_body_bytes: 64 * 1024 * 1024,
            ..ApiConfig::default()
        };
        assert!(validate_startup_config(&cfg).is_err());
    }

    #[test]
    fn excessive_stats_ttl_is_rejected() {
        let cfg = ApiConfig {
            stats_ttl: Duration::from_secs(7200),
            ..ApiConfig::default()
        };
        assert!(validate_startup_config(&cfg).is_err());
    }
}
