// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wire types for the auth endpoints.
//!
//! The verification body is an Amino-JSON `StdSignDoc` envelope as browser
//! wallets produce it from `signArbitrary`. Field declaration order here is
//! the canonical (alphabetical) Amino order; re-serializing a deserialized
//! [`SignDoc`] must reproduce the exact bytes the wallet signed.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Transaction fee. Always zero for a sign-in document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Fee {
    pub amount: Vec<String>,
    pub gas: String,
}

/// Payload of a single sign message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageSignData {
    /// Base64-encoded sign-in message text.
    pub data: String,
    /// Bech32 address of the signer.
    pub signer: String,
}

/// A single message inside the sign doc.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignMessage {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub value: MessageSignData,
}

/// Amino-JSON `StdSignDoc`. Serialization order is the declaration order
/// below, which is the canonical order the wallet signed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignDoc {
    pub account_number: String,
    pub chain_id: String,
    pub fee: Fee,
    pub memo: String,
    pub msgs: Vec<SignMessage>,
    pub sequence: String,
}

/// Tagged, base64-encoded public key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Base64-encoded key bytes.
    pub value: String,
}

/// Public key plus base64-encoded signature over the canonical sign doc.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Signature {
    pub pub_key: PubKey,
    /// Base64-encoded signature bytes.
    pub signature: String,
}

/// Body of `POST /auth/verify`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticationRequest {
    pub sign_doc: SignDoc,
    pub signature: Signature,
}

/// Body of `POST /auth/validate`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenValidationRequest {
    /// Address the client believes it holds a session for.
    pub address: String,
}
