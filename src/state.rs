// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::config::Config;

/// Shared application state.
///
/// The auth protocol keeps no server-side session table — all state rides
/// in signed cookies — so the only shared resource is the read-only
/// configuration, including the cookie signing secret.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
