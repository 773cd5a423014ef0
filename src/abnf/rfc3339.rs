// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! RFC 3339 date-time grammar, character shape only.
//!
//! Every field is matched as a digit run of the right width; range checks
//! (month 1-12, day vs. calendar, leap seconds) are deliberately out of
//! scope here and happen in the semantic pass of the message model. A month
//! of "13" parses fine at this layer.

use super::Rule;

/// `date-fullyear = 4DIGIT`
pub fn date_fullyear() -> Rule {
    Rule::exactly(4, Rule::digit())
}

/// `date-month = 2DIGIT` ; 01-12
pub fn date_month() -> Rule {
    Rule::exactly(2, Rule::digit())
}

/// `date-mday = 2DIGIT` ; 01-28, 01-29, 01-30, 01-31 based on month/year
pub fn date_mday() -> Rule {
    Rule::exactly(2, Rule::digit())
}

/// `time-hour = 2DIGIT` ; 00-23
pub fn time_hour() -> Rule {
    Rule::exactly(2, Rule::digit())
}

/// `time-minute = 2DIGIT` ; 00-59
pub fn time_minute() -> Rule {
    Rule::exactly(2, Rule::digit())
}

/// `time-second = 2DIGIT` ; 00-58, 00-59, 00-60 based on leap second rules
pub fn time_second() -> Rule {
    Rule::exactly(2, Rule::digit())
}

/// `time-secfrac = "." 1*DIGIT`
pub fn time_secfrac() -> Rule {
    Rule::seq(vec![Rule::byte(b'.'), Rule::many1(Rule::digit())])
}

/// `time-numoffset = ("+" / "-") time-hour ":" time-minute`
pub fn time_numoffset() -> Rule {
    Rule::seq(vec![
        Rule::alt(vec![Rule::byte(b'+'), Rule::byte(b'-')]),
        time_hour(),
        Rule::byte(b':'),
        time_minute(),
    ])
}

/// `time-offset = "Z" / time-numoffset`
pub fn time_offset() -> Rule {
    Rule::alt(vec![Rule::byte(b'Z'), time_numoffset()])
}

/// `full-date = date-fullyear "-" date-month "-" date-mday`
pub fn full_date() -> Rule {
    Rule::seq(vec![
        date_fullyear(),
        Rule::byte(b'-'),
        date_month(),
        Rule::byte(b'-'),
        date_mday(),
    ])
}

/// `partial-time = time-hour ":" time-minute ":" time-second [ time-secfrac ]`
pub fn partial_time() -> Rule {
    Rule::seq(vec![
        time_hour(),
        Rule::byte(b':'),
        time_minute(),
        Rule::byte(b':'),
        time_second(),
        Rule::opt(time_secfrac()),
    ])
}

/// `full-time = partial-time time-offset`
pub fn full_time() -> Rule {
    Rule::seq(vec![partial_time(), time_offset()])
}

/// `date-time = full-date "T" full-time`
pub fn date_time() -> Rule {
    Rule::seq(vec![full_date(), Rule::byte(b'T'), full_time()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abnf::{parse, Rule};

    fn anchored() -> Rule {
        Rule::seq(vec![Rule::label(0, date_time()), Rule::end()])
    }

    #[test]
    fn parses_utc_date_time_with_fraction() {
        let input = "1937-12-31T23:59:58.123Z";
        let tree = parse(&anchored(), input).expect("should parse");
        assert_eq!(tree.capture(0), Some(input));
    }

    #[test]
    fn parses_numeric_offset() {
        let input = "1937-12-31T23:59:58.123+09:00";
        let tree = parse(&anchored(), input).expect("should parse");
        assert_eq!(tree.capture(0), Some(input));
    }

    #[test]
    fn rejects_malformed_shapes() {
        for input in [
            "1937-12-31T23:59:581.123K",
            "20200-01-02T15:04:05Z",
            "2020-1-02T15:04:05Z",
            "2020-01-02 15:04:05Z",
            "2020-01-02T15:04:05",
        ] {
            assert!(parse(&anchored(), input).is_none(), "accepted {input}");
        }
    }

    #[test]
    fn shape_valid_but_calendar_invalid_still_parses() {
        // Range checking belongs to the semantic pass, not the grammar.
        assert!(parse(&anchored(), "2021-13-32T25:61:61Z").is_some());
    }
}
