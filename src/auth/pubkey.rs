// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet public keys.
//!
//! The protocol accepts the three Tendermint/Cosmos key algorithms. Each
//! key can do exactly two things: derive the account address bytes and
//! verify a signature over a byte string. Address derivation follows the
//! Tendermint conventions:
//!
//! - secp256k1: `RIPEMD160(SHA256(33-byte compressed key))`
//! - ed25519 / sr25519: first 20 bytes of `SHA256(32-byte key)`

use base64ct::{Base64, Encoding};
use k256::ecdsa::signature::Verifier;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use super::error::AuthError;

/// Amino type tag for secp256k1 public keys.
pub const SECP256K1_TYPE: &str = "tendermint/PubKeySecp256k1";
/// Amino type tag for ed25519 public keys.
pub const ED25519_TYPE: &str = "tendermint/PubKeyEd25519";
/// Amino type tag for sr25519 public keys.
pub const SR25519_TYPE: &str = "tendermint/PubKeySr25519";

/// A decoded wallet public key.
#[derive(Debug, Clone)]
pub enum PublicKey {
    Secp256k1(k256::ecdsa::VerifyingKey),
    Ed25519(ed25519_dalek::VerifyingKey),
    Sr25519(schnorrkel::PublicKey),
}

impl PublicKey {
    /// Decode a key from its algorithm tag and base64-encoded bytes.
    ///
    /// An unrecognized tag fails with [`AuthError::UnknownKeyAlgorithm`];
    /// bad base64 or key bytes that do not decode for the tagged algorithm
    /// fail with [`AuthError::UnknownPublicKeyEncoding`].
    pub fn from_tagged(type_tag: &str, base64_value: &str) -> Result<Self, AuthError> {
        let bytes = Base64::decode_vec(base64_value)
            .map_err(|_| AuthError::UnknownPublicKeyEncoding)?;

        match type_tag {
            SECP256K1_TYPE => k256::ecdsa::VerifyingKey::from_sec1_bytes(&bytes)
                .map(PublicKey::Secp256k1)
                .map_err(|_| AuthError::UnknownPublicKeyEncoding),
            ED25519_TYPE => {
                let bytes: [u8; 32] = bytes
                    .try_into()
                    .map_err(|_| AuthError::UnknownPublicKeyEncoding)?;
                ed25519_dalek::VerifyingKey::from_bytes(&bytes)
                    .map(PublicKey::Ed25519)
                    .map_err(|_| AuthError::UnknownPublicKeyEncoding)
            }
            SR25519_TYPE => schnorrkel::PublicKey::from_bytes(&bytes)
                .map(PublicKey::Sr25519)
                .map_err(|_| AuthError::UnknownPublicKeyEncoding),
            other => Err(AuthError::UnknownKeyAlgorithm(other.to_string())),
        }
    }

    /// Derive the 20-byte account address for this key.
    pub fn address_bytes(&self) -> Vec<u8> {
        match self {
            PublicKey::Secp256k1(key) => {
                let compressed = key.to_encoded_point(true);
                let sha = Sha256::digest(compressed.as_bytes());
                Ripemd160::digest(sha).to_vec()
            }
            PublicKey::Ed25519(key) => Sha256::digest(key.as_bytes())[..20].to_vec(),
            PublicKey::Sr25519(key) => Sha256::digest(key.to_bytes())[..20].to_vec(),
        }
    }

    /// Verify `signature` over `message` with this key.
    pub fn verify_signature(&self, message: &[u8], signature: &[u8]) -> bool {
        match self {
            PublicKey::Secp256k1(key) => {
                // 64-byte r||s signature over the SHA-256 digest of the message.
                let Ok(signature) = k256::ecdsa::Signature::from_slice(signature) else {
                    return false;
                };
                key.verify(message, &signature).is_ok()
            }
            PublicKey::Ed25519(key) => {
                let Ok(signature) = ed25519_dalek::Signature::from_slice(signature) else {
                    return false;
                };
                key.verify(message, &signature).is_ok()
            }
            PublicKey::Sr25519(key) => {
                let Ok(signature) = schnorrkel::Signature::from_bytes(signature) else {
                    return false;
                };
                // Tendermint signs sr25519 under an empty signing context.
                key.verify_simple(b"", message, &signature).is_ok()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::Signer;
    use k256::ecdsa::signature::Signer as _;
    use rand::rngs::OsRng;

    fn encode_key(bytes: &[u8]) -> String {
        Base64::encode_string(bytes)
    }

    #[test]
    fn unknown_tag_is_rejected_with_the_tag_named() {
        let result = PublicKey::from_tagged("tendermint/PubKeyBn254", "AAAA");
        assert_eq!(
            result.unwrap_err(),
            AuthError::UnknownKeyAlgorithm("tendermint/PubKeyBn254".to_string())
        );
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let result = PublicKey::from_tagged(SECP256K1_TYPE, "not base64!!!");
        assert_eq!(result.unwrap_err(), AuthError::UnknownPublicKeyEncoding);
    }

    #[test]
    fn wrong_length_key_bytes_are_rejected() {
        let result = PublicKey::from_tagged(ED25519_TYPE, &encode_key(&[0u8; 16]));
        assert_eq!(result.unwrap_err(), AuthError::UnknownPublicKeyEncoding);
    }

    #[test]
    fn secp256k1_verifies_and_derives_a_20_byte_address() {
        let signing_key = k256::ecdsa::SigningKey::random(&mut OsRng);
        let compressed = signing_key.verifying_key().to_encoded_point(true);

        let key =
            PublicKey::from_tagged(SECP256K1_TYPE, &encode_key(compressed.as_bytes())).unwrap();
        assert_eq!(key.address_bytes().len(), 20);

        let message = b"canonical sign doc bytes";
        let signature: k256::ecdsa::Signature = signing_key.sign(message);
        assert!(key.verify_signature(message, &signature.to_bytes()));
        assert!(!key.verify_signature(b"different message", &signature.to_bytes()));
    }

    #[test]
    fn ed25519_verifies_and_derives_a_20_byte_address() {
        let signing_key = ed25519_dalek::SigningKey::generate(&mut OsRng);
        let verifying_key = signing_key.verifying_key();

        let key =
            PublicKey::from_tagged(ED25519_TYPE, &encode_key(verifying_key.as_bytes())).unwrap();
        assert_eq!(key.address_bytes().len(), 20);

        let message = b"canonical sign doc bytes";
        let signature = signing_key.sign(message);
        assert!(key.verify_signature(message, &signature.to_bytes()));
        assert!(!key.verify_signature(message, &[0u8; 64]));
    }

    #[test]
    fn sr25519_verifies_and_derives_a_20_byte_address() {
        let keypair = schnorrkel::Keypair::generate_with(&mut OsRng);

        let key =
            PublicKey::from_tagged(SR25519_TYPE, &encode_key(&keypair.public.to_bytes())).unwrap();
        assert_eq!(key.address_bytes().len(), 20);

        let message = b"canonical sign doc bytes";
        let signature = keypair.sign_simple(b"", message);
        assert!(key.verify_signature(message, &signature.to_bytes()));
        assert!(!key.verify_signature(b"different message", &signature.to_bytes()));
    }

    #[test]
    fn addresses_differ_between_algorithms_for_same_seed() {
        let ed = ed25519_dalek::SigningKey::from_bytes(&[7u8; 32]);
        let ed_key =
            PublicKey::from_tagged(ED25519_TYPE, &encode_key(ed.verifying_key().as_bytes()))
                .unwrap();

        let sk = k256::ecdsa::SigningKey::from_slice(&[7u8; 32]).unwrap();
        let compressed = sk.verifying_key().to_encoded_point(true);
        let secp_key =
            PublicKey::from_tagged(SECP256K1_TYPE, &encode_key(compressed.as_bytes())).unwrap();

        assert_ne!(ed_key.address_bytes(), secp_key.address_bytes());
    }
}
