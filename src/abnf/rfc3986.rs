// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! RFC 3986 URI grammar (generic syntax), one rule per production.
//!
//! Percent-encodings are recognized structurally but not decoded, and the
//! IPv6 host form is omitted; hosts are IPv4 literals or reg-names.
//!
//! <https://datatracker.ietf.org/doc/html/rfc3986#appendix-A>

use super::Rule;

/// `URI = scheme ":" hier-part [ "?" query ] [ "#" fragment ]`
pub fn uri() -> Rule {
    Rule::seq(vec![
        scheme(),
        Rule::byte(b':'),
        hier_part(),
        Rule::opt(Rule::seq(vec![Rule::byte(b'?'), query()])),
        Rule::opt(Rule::seq(vec![Rule::byte(b'#'), fragment()])),
    ])
}

/// `hier-part = "//" authority ( path-abempty / path-absolute / path-rootless / path-empty )`
pub fn hier_part() -> Rule {
    Rule::seq(vec![
        Rule::literal("//"),
        authority(),
        Rule::alt(vec![
            path_abempty(),
            path_absolute(),
            path_rootless(),
            path_empty(),
        ]),
    ])
}

/// `path-abempty = *( "/" segment )`
pub fn path_abempty() -> Rule {
    Rule::many0(Rule::seq(vec![Rule::byte(b'/'), segment()]))
}

/// `path-absolute = "/" [ segment-nz *( "/" segment ) ]`
pub fn path_absolute() -> Rule {
    Rule::seq(vec![
        Rule::byte(b'/'),
        Rule::opt(Rule::seq(vec![
            segment_nz(),
            Rule::many0(Rule::seq(vec![Rule::byte(b'/'), segment()])),
        ])),
    ])
}

/// `path-rootless = segment-nz *( "/" segment )`
pub fn path_rootless() -> Rule {
    Rule::seq(vec![
        segment_nz(),
        Rule::many0(Rule::seq(vec![Rule::byte(b'/'), segment()])),
    ])
}

/// `path-empty = 0<pchar>`
pub fn path_empty() -> Rule {
    Rule::repeat(0, Some(0), pchar())
}

/// `segment = *pchar`
pub fn segment() -> Rule {
    Rule::many0(pchar())
}

/// `segment-nz = 1*pchar`
pub fn segment_nz() -> Rule {
    Rule::many1(pchar())
}

/// `fragment = *( pchar / "/" / "?" )`
pub fn fragment() -> Rule {
    Rule::many0(Rule::alt(vec![pchar(), Rule::byte(b'/'), Rule::byte(b'?')]))
}

/// `query = *( pchar / "/" / "?" )`
pub fn query() -> Rule {
    Rule::many0(Rule::alt(vec![pchar(), Rule::byte(b'/'), Rule::byte(b'?')]))
}

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
pub fn pchar() -> Rule {
    Rule::alt(vec![
        unreserved(),
        pct_encoded(),
        sub_delims(),
        Rule::byte(b':'),
        Rule::byte(b'@'),
    ])
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub fn scheme() -> Rule {
    Rule::seq(vec![
        Rule::alpha(),
        Rule::many0(Rule::alt(vec![
            Rule::alphanum(),
            Rule::byte(b'+'),
            Rule::byte(b'-'),
            Rule::byte(b'.'),
        ])),
    ])
}

/// `authority = [ userinfo "@" ] host [ ":" port ]`
pub fn authority() -> Rule {
    Rule::seq(vec![
        Rule::opt(Rule::seq(vec![userinfo(), Rule::byte(b'@')])),
        host(),
        Rule::opt(Rule::seq(vec![Rule::byte(b':'), port()])),
    ])
}

/// `port = *DIGIT`
pub fn port() -> Rule {
    Rule::many0(Rule::digit())
}

/// `host = IPv4address / reg-name` (IPv6 omitted)
pub fn host() -> Rule {
    Rule::alt(vec![ipv4_address(), reg_name()])
}

/// `reg-name = *( unreserved / pct-encoded / sub-delims )`
pub fn reg_name() -> Rule {
    Rule::many0(Rule::alt(vec![unreserved(), pct_encoded(), sub_delims()]))
}

/// `IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet`
pub fn ipv4_address() -> Rule {
    Rule::seq(vec![
        dec_octet(),
        Rule::byte(b'.'),
        dec_octet(),
        Rule::byte(b'.'),
        dec_octet(),
        Rule::byte(b'.'),
        dec_octet(),
    ])
}

/// ```text
/// dec-octet = DIGIT              ; 0-9
///           / %x31-39 DIGIT      ; 10-99
///           / "1" 2DIGIT         ; 100-199
///           / "2" %x30-34 DIGIT  ; 200-249
///           / "25" %x30-35       ; 250-255
/// ```
pub fn dec_octet() -> Rule {
    Rule::alt(vec![
        Rule::digit(),
        Rule::seq(vec![Rule::range(0x31, 0x39), Rule::digit()]),
        Rule::seq(vec![Rule::byte(b'1'), Rule::exactly(2, Rule::digit())]),
        Rule::seq(vec![Rule::byte(b'2'), Rule::range(0x30, 0x34), Rule::digit()]),
        Rule::seq(vec![Rule::literal("25"), Rule::range(0x30, 0x35)]),
    ])
}

/// `userinfo = 1*( unreserved / pct-encoded / sub-delims / ":" )`
pub fn userinfo() -> Rule {
    Rule::many1(Rule::alt(vec![
        unreserved(),
        pct_encoded(),
        sub_delims(),
        Rule::byte(b':'),
    ]))
}

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub fn unreserved() -> Rule {
    Rule::alt(vec![
        Rule::alphanum(),
        Rule::byte(b'-'),
        Rule::byte(b'_'),
        Rule::byte(b'.'),
        Rule::byte(b'~'),
    ])
}

/// `reserved = gen-delims / sub-delims`
pub fn reserved() -> Rule {
    Rule::alt(vec![gen_delims(), sub_delims()])
}

/// `pct-encoded = "%" HEXDIG HEXDIG`
pub fn pct_encoded() -> Rule {
    Rule::seq(vec![Rule::byte(b'%'), Rule::hexdig(), Rule::hexdig()])
}

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub fn gen_delims() -> Rule {
    Rule::alt(vec![
        Rule::byte(b':'),
        Rule::byte(b'/'),
        Rule::byte(b'?'),
        Rule::byte(b'#'),
        Rule::byte(b'['),
        Rule::byte(b']'),
        Rule::byte(b'@'),
    ])
}

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
pub fn sub_delims() -> Rule {
    Rule::alt(vec![
        Rule::byte(b'!'),
        Rule::byte(b'$'),
        Rule::byte(b'&'),
        Rule::byte(b'\''),
        Rule::byte(b'('),
        Rule::byte(b')'),
        Rule::byte(b'*'),
        Rule::byte(b'+'),
        Rule::byte(b','),
        Rule::byte(b';'),
        Rule::byte(b'='),
    ])
}
