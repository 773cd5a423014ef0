// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HMAC-SHA256 signing of opaque cookie values.

use base64ct::{Base64, Encoding};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the base64-encoded HMAC-SHA256 of `value` keyed by `secret`.
pub fn sign(secret: &str, value: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(value.as_bytes());
    Base64::encode_string(&mac.finalize().into_bytes())
}

/// Check that `signature` is the HMAC of exactly `value` under `secret`.
pub fn verify(secret: &str, value: &str, signature: &str) -> bool {
    sign(secret, value) == signature
}
