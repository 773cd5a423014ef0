// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # ABNF-Style Grammar Engine
//!
//! A small interpreter for composable parsing rules, used to validate the
//! wallet sign-in message against a formal grammar. Rules are ordinary
//! values combined with the constructors on [`Rule`]; [`parse`] runs a rule
//! against an input string and produces a tree of labeled captures.
//!
//! Matching is all-or-nothing: a rule either matches a prefix of the input
//! or it does not. There is no error recovery and no diagnostics beyond
//! "no match" — intentional for a security boundary, where the only useful
//! answer is a clean yes or no.
//!
//! Semantics follow classic ABNF (RFC 5234) conventions:
//! - literals match ASCII case-insensitively,
//! - repetition is greedy and never backtracks,
//! - alternatives are ordered; the first match wins.

pub mod message;
pub mod rfc3339;
pub mod rfc3986;

/// A single parsing rule.
///
/// Build rules with the associated constructors ([`Rule::literal`],
/// [`Rule::seq`], [`Rule::many1`], ...) rather than the variants directly;
/// grammars then read close to their ABNF productions.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Match exactly one octet.
    Byte(u8),
    /// Match one octet in an inclusive range.
    Range(u8, u8),
    /// Match a string, ASCII case-insensitively.
    Literal(&'static str),
    /// Match every rule in order.
    Sequence(Vec<Rule>),
    /// Match the first rule that succeeds.
    Alternative(Vec<Rule>),
    /// Match the inner rule, or nothing.
    Optional(Box<Rule>),
    /// Match the inner rule between `min` and `max` times (greedy).
    Repeat {
        min: usize,
        max: Option<usize>,
        inner: Box<Rule>,
    },
    /// Match the inner rule and record the matched substring under `key`.
    Label(usize, Box<Rule>),
    /// Match only at the end of the input.
    EndOfInput,
}

impl Rule {
    pub fn byte(value: u8) -> Rule {
        Rule::Byte(value)
    }

    pub fn range(low: u8, high: u8) -> Rule {
        Rule::Range(low, high)
    }

    pub fn literal(value: &'static str) -> Rule {
        Rule::Literal(value)
    }

    pub fn seq(rules: Vec<Rule>) -> Rule {
        Rule::Sequence(rules)
    }

    pub fn alt(rules: Vec<Rule>) -> Rule {
        Rule::Alternative(rules)
    }

    pub fn opt(inner: Rule) -> Rule {
        Rule::Optional(Box::new(inner))
    }

    /// `min` to `max` repetitions; `None` means unbounded.
    pub fn repeat(min: usize, max: Option<usize>, inner: Rule) -> Rule {
        Rule::Repeat {
            min,
            max,
            inner: Box::new(inner),
        }
    }

    /// Exactly `n` repetitions.
    pub fn exactly(n: usize, inner: Rule) -> Rule {
        Rule::repeat(n, Some(n), inner)
    }

    /// Zero or more repetitions.
    pub fn many0(inner: Rule) -> Rule {
        Rule::repeat(0, None, inner)
    }

    /// One or more repetitions.
    pub fn many1(inner: Rule) -> Rule {
        Rule::repeat(1, None, inner)
    }

    pub fn label(key: usize, inner: Rule) -> Rule {
        Rule::Label(key, Box::new(inner))
    }

    pub fn end() -> Rule {
        Rule::EndOfInput
    }

    // Core character classes (RFC 5234 appendix B.1).

    /// `ALPHA` = A-Z / a-z
    pub fn alpha() -> Rule {
        Rule::alt(vec![Rule::range(b'A', b'Z'), Rule::range(b'a', b'z')])
    }

    /// `DIGIT` = 0-9
    pub fn digit() -> Rule {
        Rule::range(b'0', b'9')
    }

    /// `ALPHA / DIGIT`
    pub fn alphanum() -> Rule {
        Rule::alt(vec![Rule::alpha(), Rule::digit()])
    }

    /// `HEXDIG` = DIGIT / A-F / a-f
    pub fn hexdig() -> Rule {
        Rule::alt(vec![
            Rule::digit(),
            Rule::range(b'A', b'F'),
            Rule::range(b'a', b'f'),
        ])
    }

    /// A single space.
    pub fn sp() -> Rule {
        Rule::Byte(b' ')
    }

    /// A single line feed.
    pub fn lf() -> Rule {
        Rule::Byte(b'\n')
    }
}

/// A labeled capture in a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The key given to [`Rule::label`].
    pub key: usize,
    /// The exact substring the labeled rule matched.
    pub value: String,
    /// Captures made inside this labeled rule.
    pub children: Vec<Node>,
}

/// The result of a successful parse: the matched prefix plus all captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    /// The full substring matched by the root rule.
    pub matched: String,
    /// Top-level captures in document order.
    pub children: Vec<Node>,
}

impl ParseTree {
    /// The first capture recorded under `key`, searching depth-first.
    pub fn capture(&self, key: usize) -> Option<&str> {
        find(&self.children, key).map(|node| node.value.as_str())
    }

    /// All captures recorded under `key`, in document order.
    pub fn captures(&self, key: usize) -> Vec<&str> {
        let mut out = Vec::new();
        collect(&self.children, key, &mut out);
        out
    }
}

fn find(nodes: &[Node], key: usize) -> Option<&Node> {
    for node in nodes {
        if node.key == key {
            return Some(node);
        }
        if let Some(found) = find(&node.children, key) {
            return Some(found);
        }
    }
    None
}

fn collect<'a>(nodes: &'a [Node], key: usize, out: &mut Vec<&'a str>) {
    for node in nodes {
        if node.key == key {
            out.push(node.value.as_str());
        } else {
            collect(&node.children, key, out);
        }
    }
}

/// Run `rule` against `input`.
///
/// Returns the parse tree if the rule matches starting at the first byte,
/// `None` otherwise. The rule decides how much input it consumes; grammars
/// that must cover the whole input anchor themselves with [`Rule::end`].
pub fn parse(rule: &Rule, input: &str) -> Option<ParseTree> {
    let bytes = input.as_bytes();
    let (end, children) = eval(rule, bytes, 0)?;
    Some(ParseTree {
        matched: String::from_utf8_lossy(&bytes[..end]).into_owned(),
        children,
    })
}

/// Interpret one rule at `pos`, returning the new position and any captures.
fn eval(rule: &Rule, input: &[u8], pos: usize) -> Option<(usize, Vec<Node>)> {
    match rule {
        Rule::Byte(value) => match input.get(pos) {
            Some(b) if b == value => Some((pos + 1, Vec::new())),
            _ => None,
        },
        Rule::Range(low, high) => match input.get(pos) {
            Some(b) if *low <= *b && *b <= *high => Some((pos + 1, Vec::new())),
            _ => None,
        },
        Rule::Literal(value) => {
            let bytes = value.as_bytes();
            let end = pos + bytes.len();
            let window = input.get(pos..end)?;
            if window.eq_ignore_ascii_case(bytes) {
                Some((end, Vec::new()))
            } else {
                None
            }
        }
        Rule::Sequence(rules) => {
            let mut at = pos;
            let mut nodes = Vec::new();
            for inner in rules {
                let (next, mut captured) = eval(inner, input, at)?;
                nodes.append(&mut captured);
                at = next;
            }
            Some((at, nodes))
        }
        Rule::Alternative(rules) => rules.iter().find_map(|inner| eval(inner, input, pos)),
        Rule::Optional(inner) => Some(eval(inner, input, pos).unwrap_or((pos, Vec::new()))),
        Rule::Repeat { min, max, inner } => {
            let mut at = pos;
            let mut nodes = Vec::new();
            let mut count = 0;
            while max.map_or(true, |m| count < m) {
                match eval(inner, input, at) {
                    // A rule that consumed nothing would repeat forever.
                    Some((next, _)) if next == at => break,
                    Some((next, mut captured)) => {
                        nodes.append(&mut captured);
                        at = next;
                        count += 1;
                    }
                    None => break,
                }
            }
            if count >= *min {
                Some((at, nodes))
            } else {
                None
            }
        }
        Rule::Label(key, inner) => {
            let (next, children) = eval(inner, input, pos)?;
            let value = String::from_utf8_lossy(&input[pos..next]).into_owned();
            Some((
                next,
                vec![Node {
                    key: *key,
                    value,
                    children,
                }],
            ))
        }
        Rule::EndOfInput => {
            if pos == input.len() {
                Some((pos, Vec::new()))
            } else {
                None
            }
        }
    }
}
