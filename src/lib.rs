// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # LikeDAO Server
//!
//! Cookie-based wallet authentication for the LikeDAO web app.
//!
//! A wallet proves control of its address by signing an EIP-4361-style
//! plaintext message that echoes a server-issued nonce. The message is
//! validated against a formal grammar ([`abnf`]), the signature against
//! the canonical sign doc bytes ([`auth::pubkey`]), and the resulting
//! session rides entirely in HMAC-signed cookies ([`auth::cookie`]).

pub mod abnf;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
