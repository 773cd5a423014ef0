// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractors for the authenticated wallet address.
//!
//! Use `CurrentUser` in handlers that require a signed-in wallet:
//!
//! ```rust,ignore
//! async fn my_handler(CurrentUser(address): CurrentUser) -> impl IntoResponse {
//!     // address is the verified bech32 account address
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use axum_extra::extract::CookieJar;

use super::{
    cookie::{self, SESSION_COOKIE},
    error::AuthError,
    expirable::ExpirableValue,
};
use crate::state::AppState;

/// Debug-only header that substitutes for a real session.
const MAGIC_ADDRESS_HEADER: &str = "x-magic-user-address";

fn session_address(parts: &Parts, state: &AppState) -> Result<String, AuthError> {
    let jar = CookieJar::from_headers(&parts.headers);
    let session_value = cookie::get_signed(&jar, &state.config, SESSION_COOKIE)?;
    let session = ExpirableValue::parse(&session_value)?;

    if session.is_expired() {
        return Err(AuthError::ExpiredCredential);
    }

    Ok(session.value)
}

/// Extractor for the verified wallet address of the current session.
///
/// In debug mode the `x-magic-user-address` header overrides the session
/// lookup entirely, so frontend work does not need a wallet in the loop.
pub struct CurrentUser(pub String);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.config.debug {
            if let Some(address) = parts
                .headers
                .get(MAGIC_ADDRESS_HEADER)
                .and_then(|value| value.to_str().ok())
            {
                return Ok(CurrentUser(address.to_string()));
            }
        }

        session_address(parts, state)
            .map(CurrentUser)
            .map_err(|err| (StatusCode::UNAUTHORIZED, err.to_string()))
    }
}

/// Like [`CurrentUser`] but yields `None` instead of rejecting.
pub struct OptionalCurrentUser(pub Option<String>);

impl FromRequestParts<AppState> for OptionalCurrentUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match CurrentUser::from_request_parts(parts, state).await {
            Ok(CurrentUser(address)) => Ok(OptionalCurrentUser(Some(address))),
            Err(_) => Ok(OptionalCurrentUser(None)),
        }
    }
}
