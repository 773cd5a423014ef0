// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::handlers,
    models::{
        AuthenticationRequest, Fee, MessageSignData, PubKey, SignDoc, SignMessage, Signature,
        TokenValidationRequest,
    },
    state::AppState,
};

/// Liveness response.
#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
}

/// Liveness probe handler.
#[utoipa::path(
    get,
    path = "/ping",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = PingResponse)
    )
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
    })
}

/// Cross-origin layer for the browser client.
///
/// Credentials are required because the whole protocol rides on cookies,
/// which in turn forbids wildcard origins; only the configured list is
/// allowed.
fn cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .cors
        .allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/nonce", get(handlers::issue_nonce))
        .route("/verify", post(handlers::verify))
        .route("/validate", post(handlers::validate))
        .route("/logout", post(handlers::logout));

    Router::new()
        .nest("/auth", auth_routes)
        .route("/ping", get(ping))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::issue_nonce,
        handlers::verify,
        handlers::validate,
        handlers::logout,
        ping
    ),
    components(
        schemas(
            AuthenticationRequest,
            TokenValidationRequest,
            SignDoc,
            SignMessage,
            MessageSignData,
            Fee,
            Signature,
            PubKey,
            PingResponse
        )
    ),
    tags(
        (name = "Auth", description = "Wallet sign-in, session validation, and logout"),
        (name = "Health", description = "Liveness probe")
    )
)]
struct ApiDoc;
