// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Semantic model of the sign-in message.
//!
//! The grammar in [`crate::abnf::message`] only decides shape; this layer
//! walks the parse tree into a typed value and applies the checks the
//! grammar cannot express, chiefly that timestamps which look like RFC
//! 3339 are real calendar instants.

use chrono::{DateTime, FixedOffset};

use super::error::AuthError;
use crate::abnf::{
    self,
    message::{authentication_message, Field},
};

/// A parsed and semantically validated sign-in message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationMessage {
    /// Requesting origin, e.g. `likedao.com`.
    pub authority: String,
    /// Bech32 account address the wallet claims to sign in as.
    pub address: String,
    /// Optional human-readable statement shown to the user.
    pub statement: Option<String>,
    pub uri: String,
    pub chain_id: String,
    /// The 8-character nonce echoed back from the nonce cookie.
    pub nonce: String,
    pub issued_at: DateTime<FixedOffset>,
    pub expiration_time: Option<DateTime<FixedOffset>>,
    pub not_before: Option<DateTime<FixedOffset>>,
    pub request_id: Option<String>,
    /// Resource URIs in message order.
    pub resources: Vec<String>,
}

fn parse_date(raw: &str) -> Result<DateTime<FixedOffset>, AuthError> {
    // The grammar already vetted the shape; chrono rejects impossible
    // calendar values such as month 13 or second 61.
    DateTime::parse_from_rfc3339(raw).map_err(|_| AuthError::MalformedDate)
}

impl AuthenticationMessage {
    /// Parse `input` against the sign-in grammar and build the model.
    ///
    /// A grammar mismatch fails with [`AuthError::MalformedMessage`]; a
    /// shape-valid but impossible timestamp with [`AuthError::MalformedDate`].
    pub fn parse(input: &str) -> Result<Self, AuthError> {
        let tree =
            abnf::parse(&authentication_message(), input).ok_or(AuthError::MalformedMessage)?;

        let capture = |field: Field| {
            tree.capture(field.key())
                .map(str::to_string)
                .ok_or(AuthError::MalformedMessage)
        };

        let statement = tree
            .capture(Field::Statement.key())
            .filter(|statement| !statement.is_empty())
            .map(str::to_string);

        let issued_at = parse_date(&capture(Field::IssuedAt)?)?;
        let expiration_time = tree
            .capture(Field::ExpirationTime.key())
            .map(parse_date)
            .transpose()?;
        let not_before = tree
            .capture(Field::NotBefore.key())
            .map(parse_date)
            .transpose()?;

        Ok(Self {
            authority: capture(Field::Authority)?,
            address: capture(Field::Address)?,
            statement,
            uri: capture(Field::Uri)?,
            chain_id: capture(Field::ChainId)?,
            nonce: capture(Field::Nonce)?,
            issued_at,
            expiration_time,
            not_before,
            request_id: tree.capture(Field::RequestId.key()).map(str::to_string),
            resources: tree
                .captures(Field::Resource.key())
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }
}
