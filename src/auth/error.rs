// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.
//!
//! Every failure of the sign-in pipeline maps to one of these variants.
//! Responses carry the human-readable message only — deliberately not a
//! machine-parseable code, so the error surface leaks as little structure
//! as possible at this boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure modes of nonce issuance, message verification, and session
/// validation. The verification pipeline stops at the first failure; no
/// partial session is ever issued.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// A cookie (or its `.sig` companion) is missing, unparsable, or its
    /// HMAC does not verify.
    #[error("cookie is either missing or invalid")]
    MalformedCookie,

    /// A nonce or session value was present and well-formed but past its
    /// expiry; treated the same as absent.
    #[error("credential has expired")]
    ExpiredCredential,

    /// The request body could not be decoded into a signed envelope.
    #[error("data or signature is empty or invalid")]
    MalformedRequestBody,

    /// The sign-in message did not match the grammar.
    #[error("failed to parse authentication message")]
    MalformedMessage,

    /// A date field matched the grammar's shape but is not a valid
    /// calendar date-time.
    #[error("malformed date in authentication message")]
    MalformedDate,

    /// The public key carries an unrecognized algorithm tag.
    #[error("unknown pubkey type: {0}")]
    UnknownKeyAlgorithm(String),

    /// The public key bytes could not be decoded for the tagged algorithm.
    #[error("failed to parse pubkey")]
    UnknownPublicKeyEncoding,

    /// The address derived from the public key does not equal the address
    /// claimed in the message.
    #[error("signer address does not match the public key")]
    AddressMismatch,

    /// The message's nonce does not equal the issued nonce cookie value.
    #[error("nonce is either missing or invalid")]
    NonceMismatch,

    /// The signature does not verify over the canonical signed document.
    #[error("signature invalid")]
    SignatureInvalid,
}

impl AuthError {
    /// Status used when the error aborts a verification request.
    pub fn status_code(&self) -> StatusCode {
        // Everything in the verification pipeline is the client's fault.
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
