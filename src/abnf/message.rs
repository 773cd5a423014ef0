// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Composite grammar for the wallet sign-in message.
//!
//! The message is an EIP-4361-style plaintext statement the wallet signs:
//!
//! ```text
//! authority %s" wants you to sign in with your LikeCoin account:" LF
//! address LF
//! LF
//! [ statement LF ]
//! LF
//! %s"URI: " uri LF
//! %s"Version: " version LF
//! %s"Chain ID: " chain-id LF
//! %s"Nonce: " nonce LF
//! %s"Issued At: " issued-at
//! [ LF %s"Expiration Time: " expiration-time ]
//! [ LF %s"Not Before: " not-before ]
//! [ LF %s"Request ID: " request-id ]
//! [ LF %s"Resources:" *( LF "- " uri ) ]
//! ```
//!
//! <https://eips.ethereum.org/EIPS/eip-4361>

use super::{rfc3339, rfc3986, Rule};

/// Capture keys for the labeled fields of the sign-in message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Authority,
    Address,
    Statement,
    Uri,
    ChainId,
    Nonce,
    IssuedAt,
    ExpirationTime,
    NotBefore,
    RequestId,
    Resources,
    Resource,
}

impl Field {
    /// The integer key used to label and look up this field's capture.
    pub const fn key(self) -> usize {
        self as usize
    }
}

/// The full sign-in message grammar, anchored to the end of input.
pub fn authentication_message() -> Rule {
    Rule::seq(vec![
        Rule::label(Field::Authority.key(), rfc3986::authority()),
        Rule::sp(),
        Rule::literal("wants you to sign in with your LikeCoin account:"),
        Rule::lf(),
        Rule::label(Field::Address.key(), address()),
        Rule::lf(),
        Rule::lf(),
        Rule::opt(Rule::seq(vec![
            Rule::label(Field::Statement.key(), statement()),
            Rule::lf(),
        ])),
        Rule::lf(),
        Rule::literal("URI:"),
        Rule::sp(),
        Rule::label(Field::Uri.key(), rfc3986::uri()),
        Rule::lf(),
        Rule::literal("Version:"),
        Rule::sp(),
        version(),
        Rule::lf(),
        Rule::literal("Chain ID:"),
        Rule::sp(),
        Rule::label(Field::ChainId.key(), chain_id()),
        Rule::lf(),
        Rule::literal("Nonce:"),
        Rule::sp(),
        Rule::label(Field::Nonce.key(), nonce()),
        Rule::lf(),
        Rule::literal("Issued At:"),
        Rule::sp(),
        Rule::label(Field::IssuedAt.key(), rfc3339::date_time()),
        Rule::opt(Rule::seq(vec![
            Rule::lf(),
            Rule::literal("Expiration Time:"),
            Rule::sp(),
            Rule::label(Field::ExpirationTime.key(), rfc3339::date_time()),
        ])),
        Rule::opt(Rule::seq(vec![
            Rule::lf(),
            Rule::literal("Not Before:"),
            Rule::sp(),
            Rule::label(Field::NotBefore.key(), rfc3339::date_time()),
        ])),
        Rule::opt(Rule::seq(vec![
            Rule::lf(),
            Rule::literal("Request ID:"),
            Rule::sp(),
            Rule::label(Field::RequestId.key(), request_id()),
        ])),
        Rule::opt(Rule::seq(vec![
            Rule::lf(),
            Rule::literal("Resources:"),
            Rule::label(Field::Resources.key(), resources()),
        ])),
        Rule::end(),
    ])
}

/// `statement = *( reserved / unreserved / SP )`
fn statement() -> Rule {
    Rule::many0(Rule::alt(vec![
        rfc3986::unreserved(),
        rfc3986::reserved(),
        Rule::sp(),
    ]))
}

/// `address = 1*ALPHA "1" 1*( ALPHA / DIGIT )` — bech32-shaped, unchecksummed
fn address() -> Rule {
    Rule::seq(vec![
        Rule::many1(Rule::alpha()),
        Rule::byte(b'1'),
        Rule::many1(Rule::alphanum()),
    ])
}

/// `version = "1"` — any other value fails the whole parse
fn version() -> Rule {
    Rule::byte(b'1')
}

/// `chain-id = 1*( ALPHA / DIGIT / "-" )`
fn chain_id() -> Rule {
    Rule::many1(Rule::alt(vec![Rule::alphanum(), Rule::byte(b'-')]))
}

/// `nonce = 8( ALPHA / DIGIT )`
fn nonce() -> Rule {
    Rule::exactly(8, Rule::alphanum())
}

/// `request-id = *pchar`
fn request_id() -> Rule {
    Rule::many0(rfc3986::pchar())
}

/// `resources = *( LF "- " uri )`
fn resources() -> Rule {
    Rule::many0(Rule::seq(vec![
        Rule::lf(),
        Rule::byte(b'-'),
        Rule::sp(),
        Rule::label(Field::Resource.key(), rfc3986::uri()),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abnf::parse;

    const ADDRESS: &str = "like1cq425wdjy0lg6zswt38j06kepq782mxzsuveua";

    fn minimal_message(
        authority: &str,
        address: &str,
        uri: &str,
        version: &str,
        chain_id: &str,
        nonce: &str,
        issued_at: &str,
    ) -> String {
        format!(
            "{authority} wants you to sign in with your LikeCoin account:\n\
             {address}\n\
             \n\n\n\
             URI: {uri}\n\
             Version: {version}\n\
             Chain ID: {chain_id}\n\
             Nonce: {nonce}\n\
             Issued At: {issued_at}"
        )
    }

    #[test]
    fn fields_round_trip_to_exact_substrings() {
        let message = minimal_message(
            "likedao.com",
            ADDRESS,
            "https://likedao.com",
            "1",
            "likecoin-mainnet-2",
            "12345678",
            "2006-01-02T15:04:05Z",
        );
        let tree = parse(&authentication_message(), &message).expect("should parse");

        assert_eq!(tree.capture(Field::Authority.key()), Some("likedao.com"));
        assert_eq!(tree.capture(Field::Address.key()), Some(ADDRESS));
        assert_eq!(tree.capture(Field::Uri.key()), Some("https://likedao.com"));
        assert_eq!(
            tree.capture(Field::ChainId.key()),
            Some("likecoin-mainnet-2")
        );
        assert_eq!(tree.capture(Field::Nonce.key()), Some("12345678"));
        assert_eq!(
            tree.capture(Field::IssuedAt.key()),
            Some("2006-01-02T15:04:05Z")
        );
        assert_eq!(tree.capture(Field::ExpirationTime.key()), None);
        assert_eq!(tree.capture(Field::RequestId.key()), None);
    }

    #[test]
    fn parses_official_sample_with_statement_and_resources() {
        let message = format!(
            "service.org wants you to sign in with your LikeCoin account:\n\
             {ADDRESS}\n\
             \n\
             I accept the ServiceOrg Terms of Service: https://service.org/tos\n\
             \n\
             URI: https://service.org/login\n\
             Version: 1\n\
             Chain ID: 1\n\
             Nonce: 32891756\n\
             Issued At: 2021-09-30T16:25:24Z\n\
             Resources:\n\
             - ipfs://bafybeiemxf5abjwjbikoz4mc3a3dla6ual3jsgpdr4cjr3oz3evfyavhwq/\n\
             - https://example.com/my-web2-claim.json"
        );
        let tree = parse(&authentication_message(), &message).expect("should parse");

        assert_eq!(
            tree.capture(Field::Statement.key()),
            Some("I accept the ServiceOrg Terms of Service: https://service.org/tos")
        );
        assert_eq!(
            tree.captures(Field::Resource.key()),
            vec![
                "ipfs://bafybeiemxf5abjwjbikoz4mc3a3dla6ual3jsgpdr4cjr3oz3evfyavhwq/",
                "https://example.com/my-web2-claim.json",
            ]
        );
    }

    #[test]
    fn parses_optional_timestamp_and_request_id_lines() {
        let message = format!(
            "likedao.com wants you to sign in with your LikeCoin account:\n\
             {ADDRESS}\n\
             \n\n\n\
             URI: https://likedao.com\n\
             Version: 1\n\
             Chain ID: likecoin-mainnet-2\n\
             Nonce: 12345678\n\
             Issued At: 2021-09-30T16:25:24Z\n\
             Expiration Time: 2021-10-01T16:25:24Z\n\
             Not Before: 2021-09-30T17:00:00Z\n\
             Request ID: req-00042"
        );
        let tree = parse(&authentication_message(), &message).expect("should parse");

        assert_eq!(
            tree.capture(Field::ExpirationTime.key()),
            Some("2021-10-01T16:25:24Z")
        );
        assert_eq!(
            tree.capture(Field::NotBefore.key()),
            Some("2021-09-30T17:00:00Z")
        );
        assert_eq!(tree.capture(Field::RequestId.key()), Some("req-00042"));
    }

    #[test]
    fn rejects_invalid_fields() {
        let cases = [
            // authority with a bare percent sign
            minimal_message(
                "cos%mos.com",
                ADDRESS,
                "https://cosmos.com",
                "1",
                "cosmoshub-4",
                "alskw01k",
                "2020-01-02T15:04:05Z",
            ),
            // address without the bech32 separator shape
            minimal_message(
                "cosmos.com",
                "address",
                "https://cosmos.com",
                "1",
                "cosmoshub-4",
                "alskw01k",
                "2020-01-02T15:04:05Z",
            ),
            // scheme-less URI
            minimal_message(
                "cosmos.com",
                ADDRESS,
                "//cosmos.com",
                "1",
                "cosmoshub-4",
                "alskw01k",
                "2020-01-02T15:04:05Z",
            ),
            // chain id with a forbidden character
            minimal_message(
                "cosmos.com",
                ADDRESS,
                "https://cosmos.com",
                "1",
                "*chain",
                "alskw01k",
                "2020-01-02T15:04:05Z",
            ),
            // nine-character nonce
            minimal_message(
                "cosmos.com",
                ADDRESS,
                "https://cosmos.com",
                "1",
                "cosmoshub-4",
                "123919292",
                "2020-01-02T15:04:05Z",
            ),
            // five-digit year
            minimal_message(
                "cosmos.com",
                ADDRESS,
                "https://cosmos.com",
                "1",
                "cosmoshub-4",
                "12345678",
                "20200-01-02T15:04:05Z",
            ),
            // version other than "1"
            minimal_message(
                "cosmos.com",
                ADDRESS,
                "https://cosmos.com",
                "2",
                "cosmoshub-4",
                "12345678",
                "2020-01-02T15:04:05Z",
            ),
        ];

        for message in &cases {
            assert!(
                parse(&authentication_message(), message).is_none(),
                "expected parse failure for:\n{message}"
            );
        }
    }

    #[test]
    fn literal_prefix_is_case_insensitive() {
        let message = format!(
            "likedao.com wants you to sign in with your Likecoin account:\n\
             {ADDRESS}\n\
             \n\n\n\
             URI: https://likedao.com\n\
             Version: 1\n\
             Chain ID: likecoin-mainnet-2\n\
             Nonce: 12345678\n\
             Issued At: 2006-01-02T15:04:05Z"
        );
        assert!(parse(&authentication_message(), &message).is_some());
    }
}
