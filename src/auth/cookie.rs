// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signed cookie pairs.
//!
//! Every logical cookie travels as two HTTP cookies: `<name>` holding the
//! value and `<name>.sig` holding its base64 HMAC-SHA256 under the server
//! secret. A value is trusted only when both cookies are present and the
//! signature verifies against the exact value; anything else reads as
//! absent. Both cookies share max-age, path, and domain.

use axum_extra::extract::cookie::{Cookie, CookieJar};

use super::{error::AuthError, hmac};
use crate::config::Config;

/// Name of the nonce cookie, path-scoped to the auth endpoints.
pub const NONCE_COOKIE: &str = "auth_nonce";
/// Name of the session cookie, scoped to the whole application.
pub const SESSION_COOKIE: &str = "auth_session";

/// Path the nonce cookie is scoped to.
pub const AUTH_PATH: &str = "/auth";
/// Path the session cookie is scoped to.
pub const ROOT_PATH: &str = "/";

fn signature_name(name: &str) -> String {
    format!("{name}.sig")
}

/// Read a signed cookie's value, verifying its companion signature.
pub fn get_signed(jar: &CookieJar, config: &Config, name: &str) -> Result<String, AuthError> {
    let value = jar
        .get(name)
        .map(|cookie| cookie.value().to_string())
        .ok_or(AuthError::MalformedCookie)?;
    let signature = jar
        .get(&signature_name(name))
        .map(|cookie| cookie.value().to_string())
        .ok_or(AuthError::MalformedCookie)?;

    if !hmac::verify(&config.session.signature_secret, &value, &signature) {
        return Err(AuthError::MalformedCookie);
    }

    Ok(value)
}

fn build_cookie(
    config: &Config,
    name: String,
    value: String,
    max_age_seconds: i64,
    path: &str,
) -> Cookie<'static> {
    let mut builder = Cookie::build((name, value))
        .path(path.to_string())
        .max_age(time::Duration::seconds(max_age_seconds))
        .http_only(true)
        .secure(!config.debug);

    if !config.session.cookie_domain.is_empty() {
        builder = builder.domain(config.session.cookie_domain.clone());
    }

    builder.build()
}

/// Set a signed cookie pair: the value cookie plus its `.sig` companion.
pub fn set_signed(
    jar: CookieJar,
    config: &Config,
    name: &str,
    value: &str,
    max_age_seconds: i64,
    path: &str,
) -> CookieJar {
    let signature = hmac::sign(&config.session.signature_secret, value);

    jar.add(build_cookie(
        config,
        name.to_string(),
        value.to_string(),
        max_age_seconds,
        path,
    ))
    .add(build_cookie(
        config,
        signature_name(name),
        signature,
        max_age_seconds,
        path,
    ))
}

/// Expire a signed cookie pair immediately.
pub fn remove_signed(jar: CookieJar, config: &Config, name: &str, path: &str) -> CookieJar {
    jar.add(build_cookie(config, name.to_string(), String::new(), -1, path))
        .add(build_cookie(
            config,
            signature_name(name),
            String::new(),
            -1,
            path,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, CorsConfig, SessionConfig};

    fn test_config(secret: &str, debug: bool) -> Config {
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
    fn set_then_get_round_trips() {
        let config = test_config("secret", false);
        let jar = set_signed(
            CookieJar::new(),
            &config,
            NONCE_COOKIE,
            "abcd1234|2030-01-01T00:00:00Z",
            60,
            AUTH_PATH,
        );

        let value = get_signed(&jar, &config, NONCE_COOKIE).unwrap();
        assert_eq!(value, "abcd1234|2030-01-01T00:00:00Z");
    }

    #[test]
    fn missing_signature_cookie_reads_as_absent() {
        let config = test_config("secret", false);
        let jar = CookieJar::new().add(Cookie::new(NONCE_COOKIE, "value"));

        assert_eq!(
            get_signed(&jar, &config, NONCE_COOKIE),
            Err(AuthError::MalformedCookie)
        );
    }

    #[test]
    fn tampered_value_fails_verification() {
        let config = test_config("secret", false);
        let jar = set_signed(CookieJar::new(), &config, SESSION_COOKIE, "original", 60, ROOT_PATH);

        let tampered = jar.add(Cookie::new(SESSION_COOKIE, "tampered"));
        assert_eq!(
            get_signed(&tampered, &config, SESSION_COOKIE),
            Err(AuthError::MalformedCookie)
        );
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let signing = test_config("secret-a", false);
        let verifying = test_config("secret-b", false);
        let jar = set_signed(CookieJar::new(), &signing, SESSION_COOKIE, "value", 60, ROOT_PATH);

        assert_eq!(
            get_signed(&jar, &verifying, SESSION_COOKIE),
            Err(AuthError::MalformedCookie)
        );
    }

    #[test]
    fn cookies_carry_security_attributes() {
        let config = test_config("secret", false);
        let jar = set_signed(CookieJar::new(), &config, SESSION_COOKIE, "value", 60, ROOT_PATH);

        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(cookie.path(), Some(ROOT_PATH));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));

        let sig = jar.get("auth_session.sig").unwrap();
        assert_eq!(sig.path(), Some(ROOT_PATH));
        assert_eq!(sig.http_only(), Some(true));
    }

    #[test]
    fn debug_mode_drops_secure_attribute() {
        let config = test_config("secret", true);
        let jar = set_signed(CookieJar::new(), &config, SESSION_COOKIE, "value", 60, ROOT_PATH);

        assert_ne!(jar.get(SESSION_COOKIE).unwrap().secure(), Some(true));
    }

    #[test]
    fn remove_expires_both_cookies() {
        let config = test_config("secret", false);
        let jar = set_signed(CookieJar::new(), &config, SESSION_COOKIE, "value", 60, ROOT_PATH);
        let jar = remove_signed(jar, &config, SESSION_COOKIE, ROOT_PATH);

        for name in [SESSION_COOKIE, "auth_session.sig"] {
            let cookie = jar.get(name).unwrap();
            assert_eq!(cookie.value(), "");
            assert!(cookie.max_age().unwrap() < time::Duration::ZERO);
        }
    }
}
