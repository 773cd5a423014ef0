// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SIGNATURE_SECRET` | HMAC key for cookie signing | Required for production |
//! | `COOKIE_DOMAIN` | Domain attribute on auth cookies | unset |
//! | `NONCE_EXPIRY` | Nonce TTL in seconds | `86400` |
//! | `SESSION_EXPIRY` | Session TTL in seconds | `3600` |
//! | `CORS_ALLOW_ORIGINS` | Comma-separated allowed origins | none |
//! | `APP_MODE` | `debug` or `release`; debug drops the `Secure` cookie attribute and honors the signer bypass header | `release` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Cookie-session settings shared by the nonce and session managers.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Domain attribute set on every auth cookie; empty means host-only.
    pub cookie_domain: String,
    /// HMAC key the cookie signatures are computed under.
    pub signature_secret: String,
    /// Seconds a nonce stays valid after issuance.
    pub nonce_expiry: i64,
    /// Seconds a session stays valid after verification.
    pub session_expiry: i64,
}

/// Cross-origin settings for the browser client.
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
}

/// Full server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub session: SessionConfig,
    pub cors: CorsConfig,
    /// Debug mode: cookies lose the `Secure` attribute and the
    /// `x-magic-user-address` bypass header is honored. Never enable in
    /// production.
    pub debug: bool,
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_seconds(name: &str, default: i64) -> i64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from the environment, applying defaults.
    pub fn from_env() -> Self {
        let allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::to_string)
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            session: SessionConfig {
                cookie_domain: env_or("COOKIE_DOMAIN", ""),
                signature_secret: env_or("SIGNATURE_SECRET", ""),
                nonce_expiry: env_seconds("NONCE_EXPIRY", 86400),
                session_expiry: env_seconds("SESSION_EXPIRY", 3600),
            },
            cors: CorsConfig { allow_origins },
            debug: env_or("APP_MODE", "release") == "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests construct Config directly rather than via from_env so they do
    // not race over process-global environment variables.
    pub fn test_config(secret: &str, debug: bool) -> Config {
        Config {
            session: SessionConfig {
                cookie_domain: String::new(),
                signature_secret: secret.to_string(),
                nonce_expiry: 86400,
                session_expiry: 3600,
            },
            cors: CorsConfig::default(),
            debug,
        }
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = test_config("secret", false);
        assert_eq!(config.session.nonce_expiry, 86400);
        assert_eq!(config.session.session_expiry, 3600);
        assert!(!config.debug);
    }
}
