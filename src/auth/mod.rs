// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Wallet Authentication Module
//!
//! Cookie-based sign-in-with-wallet for the LikeDAO API.
//!
//! ## Auth Flow
//!
//! 1. Client calls `GET /auth/nonce`; the server returns a random nonce
//!    and sets it as a signed, expiring cookie pair scoped to `/auth`
//! 2. Client builds the plaintext sign-in message embedding that nonce,
//!    wraps it in an Amino `StdSignDoc`, and signs it with the wallet
//! 3. Client posts doc + signature to `POST /auth/verify`; the server
//!    parses the message against the formal grammar, checks the address
//!    against the public key, the nonce against the cookie, and the
//!    signature against the canonical doc bytes
//! 4. On success the nonce cookie is cleared and a signed session cookie
//!    (holding the verified address) is set for the whole application
//!
//! ## Security
//!
//! - All protocol state rides in HMAC-signed cookies; there is no
//!   server-side session table
//! - Cookies are always `HttpOnly` and `Secure` outside debug mode
//! - A nonce is single-use only insofar as verification deletes it; an
//!   unused nonce stays replayable until its TTL elapses

pub mod cookie;
pub mod error;
pub mod expirable;
pub mod extractor;
pub mod handlers;
pub mod hmac;
pub mod message;
pub mod pubkey;

pub use error::AuthError;
pub use expirable::ExpirableValue;
pub use extractor::{CurrentUser, OptionalCurrentUser};
pub use message::AuthenticationMessage;
pub use pubkey::PublicKey;
