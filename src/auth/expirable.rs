// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Value-plus-expiry codec for cookie payloads.
//!
//! Both the nonce and the session are carried as an `ExpirableValue`: the
//! payload string joined to an RFC 3339 expiry timestamp by a delimiter.
//! Authenticity comes from the HMAC companion cookie, not from this
//! encoding; this layer only answers "what is the value and is it fresh".

use chrono::{DateTime, SecondsFormat, Utc};

use super::error::AuthError;

const DELIMITER: &str = "|";

/// A payload string with an expiry timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpirableValue {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl ExpirableValue {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Encode as `value|expiry`, with the expiry at second precision.
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}",
            self.value,
            DELIMITER,
            self.expires_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }

    /// Parse an encoded string back into value and expiry.
    ///
    /// Fails with [`AuthError::MalformedCookie`] unless the input splits
    /// into exactly two parts and the second parses as RFC 3339.
    pub fn parse(encoded: &str) -> Result<Self, AuthError> {
        let parts: Vec<&str> = encoded.split(DELIMITER).collect();
        let [value, expiry] = parts.as_slice() else {
            return Err(AuthError::MalformedCookie);
        };

        let expires_at = DateTime::parse_from_rfc3339(expiry)
            .map_err(|_| AuthError::MalformedCookie)?
            .with_timezone(&Utc);

        Ok(Self {
            value: (*value).to_string(),
            expires_at,
        })
    }

    /// Whether the expiry lies in the past.
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}
