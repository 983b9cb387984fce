//! Application configuration loaded from environment variables.

use anyhow::Context;

/// Runtime environment, controls how much fault detail reaches the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn from_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind (e.g., "0.0.0.0").
    pub bind_host: String,

    /// Port to listen on.
    pub port: u16,

    /// Development or production error verbosity.
    pub environment: Environment,

    /// Directory static assets are served from.
    pub public_dir: String,

    /// Site name shown in page titles and the header.
    pub site_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 3000,
            environment: Environment::Development,
            public_dir: "public".to_string(),
            site_name: "Philosophy Hub".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: Listen port (default: 3000)
    /// - `HUB_BIND_HOST`: Listen host (default: "0.0.0.0")
    /// - `APP_ENV`: "production" hides fault details (default: development)
    /// - `HUB_PUBLIC_DIR`: Static asset directory (default: "public")
    /// - `HUB_SITE_NAME`: Site name (default: "Philosophy Hub")
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw:?}"))?,
            Err(_) => defaults.port,
        };

        let bind_host = std::env::var("HUB_BIND_HOST").unwrap_or(defaults.bind_host);

        let environment = std::env::var("APP_ENV")
            .map(|v| Environment::from_value(&v))
            .unwrap_or(defaults.environment);

        let public_dir = std::env::var("HUB_PUBLIC_DIR").unwrap_or(defaults.public_dir);

        let site_name = std::env::var("HUB_SITE_NAME").unwrap_or(defaults.site_name);

        tracing::info!(
            bind_host = %bind_host,
            port,
            environment = ?environment,
            public_dir = %public_dir,
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_host,
            port,
            environment,
            public_dir,
            site_name,
        })
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "PORT",
        "HUB_BIND_HOST",
        "APP_ENV",
        "HUB_PUBLIC_DIR",
        "HUB_SITE_NAME",
    ];

    /// Helper to run config tests with isolated env vars.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.port, 3000);
            assert_eq!(config.bind_addr(), "0.0.0.0:3000");
            assert_eq!(config.environment, Environment::Development);
            assert_eq!(config.public_dir, "public");
            assert_eq!(config.site_name, "Philosophy Hub");
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("PORT", "8080"),
                ("HUB_BIND_HOST", "127.0.0.1"),
                ("APP_ENV", "production"),
                ("HUB_PUBLIC_DIR", "/srv/hub/public"),
                ("HUB_SITE_NAME", "Agora"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr(), "127.0.0.1:8080");
                assert!(config.environment.is_production());
                assert_eq!(config.public_dir, "/srv/hub/public");
                assert_eq!(config.site_name, "Agora");
            },
        );
    }

    #[test]
    fn config_invalid_port_is_an_error() {
        with_env_vars(&[("PORT", "not-a-port")], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn environment_only_production_is_production() {
        assert_eq!(Environment::from_value("Production"), Environment::Production);
        assert_eq!(Environment::from_value("staging"), Environment::Development);
        assert_eq!(Environment::from_value(""), Environment::Development);
    }
}
