// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Auth endpoint handlers.
//!
//! The sign-in flow is a strict pipeline: issue a nonce, receive a signed
//! sign-in message echoing that nonce, verify it, and only then mint the
//! session cookie. Any failure aborts the request without touching
//! cookies; the client restarts from nonce issuance.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use base64ct::{Base64, Encoding};
use chrono::{Duration, Utc};
use rand::{rngs::OsRng, RngCore};

use super::{
    cookie::{self, AUTH_PATH, NONCE_COOKIE, ROOT_PATH, SESSION_COOKIE},
    error::AuthError,
    expirable::ExpirableValue,
    message::AuthenticationMessage,
    pubkey::PublicKey,
};
use crate::{
    error::ApiError,
    models::{AuthenticationRequest, TokenValidationRequest},
    state::AppState,
};

/// Issue a fresh sign-in nonce.
///
/// The nonce is 4 random bytes hex-encoded, so it always satisfies the
/// message grammar's 8-alphanumeric nonce rule. It is returned in the
/// body and set as a signed cookie pair scoped to the auth endpoints.
#[utoipa::path(
    get,
    path = "/auth/nonce",
    tag = "Auth",
    responses(
        (status = 200, description = "Nonce issued; body is the plaintext nonce", body = String)
    )
)]
pub async fn issue_nonce(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, String), ApiError> {
    let mut nonce_bytes = [0u8; 4];
    OsRng
        .try_fill_bytes(&mut nonce_bytes)
        .map_err(|err| ApiError::internal(format!("failed to generate nonce: {err}")))?;
    let nonce = hex::encode(nonce_bytes);

    let expiry = state.config.session.nonce_expiry;
    let encoded = ExpirableValue::new(&nonce, Utc::now() + Duration::seconds(expiry)).encode();

    let jar = cookie::set_signed(jar, &state.config, NONCE_COOKIE, &encoded, expiry, AUTH_PATH);
    Ok((jar, nonce))
}

/// Verify a signed sign-in message and mint a session.
///
/// Runs the verification pipeline in order: nonce cookie, body decode,
/// message grammar, public key, address, nonce echo, signature. The first
/// failure aborts with a plaintext reason and no cookie mutation.
#[utoipa::path(
    post,
    path = "/auth/verify",
    tag = "Auth",
    request_body = AuthenticationRequest,
    responses(
        (status = 204, description = "Signature verified; session cookie set, nonce cookie cleared"),
        (status = 400, description = "Verification failed; plaintext reason", body = String)
    )
)]
pub async fn verify(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<AuthenticationRequest>, JsonRejection>,
) -> Result<(CookieJar, StatusCode), AuthError> {
    let nonce_value = cookie::get_signed(&jar, &state.config, NONCE_COOKIE)?;
    let nonce = ExpirableValue::parse(&nonce_value)?;
    if nonce.is_expired() {
        return Err(AuthError::ExpiredCredential);
    }

    let Json(request) = body.map_err(|_| AuthError::MalformedRequestBody)?;

    let first_message = request
        .sign_doc
        .msgs
        .first()
        .ok_or(AuthError::MalformedRequestBody)?;
    let message_bytes = Base64::decode_vec(&first_message.value.data)
        .map_err(|_| AuthError::MalformedRequestBody)?;
    let message_text =
        String::from_utf8(message_bytes).map_err(|_| AuthError::MalformedRequestBody)?;

    let message = AuthenticationMessage::parse(&message_text)?;

    let public_key = PublicKey::from_tagged(
        &request.signature.pub_key.type_tag,
        &request.signature.pub_key.value,
    )?;

    // The grammar only vets the address's shape; the bech32 decode here is
    // what ties the claimed address to actual key material.
    let (_, claimed_address) =
        bech32::decode(&message.address).map_err(|_| AuthError::AddressMismatch)?;
    if claimed_address != public_key.address_bytes() {
        return Err(AuthError::AddressMismatch);
    }

    if nonce.value != message.nonce {
        return Err(AuthError::NonceMismatch);
    }

    let signature = Base64::decode_vec(&request.signature.signature)
        .map_err(|_| AuthError::SignatureInvalid)?;
    let canonical =
        serde_json::to_vec(&request.sign_doc).map_err(|_| AuthError::SignatureInvalid)?;
    if !public_key.verify_signature(&canonical, &signature) {
        return Err(AuthError::SignatureInvalid);
    }

    tracing::debug!(address = %message.address, "sign-in verified");

    let expiry = state.config.session.session_expiry;
    let session =
        ExpirableValue::new(&message.address, Utc::now() + Duration::seconds(expiry)).encode();

    let jar = cookie::remove_signed(jar, &state.config, NONCE_COOKIE, AUTH_PATH);
    let jar = cookie::set_signed(jar, &state.config, SESSION_COOKIE, &session, expiry, ROOT_PATH);

    Ok((jar, StatusCode::NO_CONTENT))
}

fn check_session(state: &AppState, jar: &CookieJar, address: &str) -> Result<(), AuthError> {
    let session_value = cookie::get_signed(jar, &state.config, SESSION_COOKIE)?;
    let session = ExpirableValue::parse(&session_value)?;

    if session.is_expired() {
        return Err(AuthError::ExpiredCredential);
    }
    if session.value != address {
        return Err(AuthError::AddressMismatch);
    }

    Ok(())
}

/// Validate the current session against a claimed address.
///
/// Any credential failure answers 401 and clears the session cookie pair
/// so a broken cookie does not linger in the browser. A malformed body is
/// the caller's mistake and does not clear anything.
#[utoipa::path(
    post,
    path = "/auth/validate",
    tag = "Auth",
    request_body = TokenValidationRequest,
    responses(
        (status = 200, description = "Session is valid for the given address"),
        (status = 400, description = "Malformed request body", body = String),
        (status = 401, description = "Session missing, expired, or for another address; session cookie cleared", body = String)
    )
)]
pub async fn validate(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<TokenValidationRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = body else {
        return AuthError::MalformedRequestBody.into_response();
    };

    match check_session(&state, &jar, &request.address) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => {
            let jar = cookie::remove_signed(jar, &state.config, SESSION_COOKIE, ROOT_PATH);
            (StatusCode::UNAUTHORIZED, jar, err.to_string()).into_response()
        }
    }
}

/// Clear the session cookie pair. Idempotent.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Session cookie cleared")
    )
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = cookie::remove_signed(jar, &state.config, SESSION_COOKIE, ROOT_PATH);
    (jar, StatusCode::OK)
}
