//! Locates the numeric token on a line once its label has matched. Each
//! function receives the remainder of the line after the label.

use crate::catalog::Anchor;
use crate::snapshot::is_valid;

const TOTAL: &str = "total:";

pub fn token(anchor: Anchor, rest: &str) -> Option<&str> {
    match anchor {
        Anchor::Colon => colon(rest),
        Anchor::Total => total(rest),
        Anchor::Percent => percent(rest),
    }
}

/// `label: 1047`
fn colon(rest: &str) -> Option<&str> {
    rest.trim_start().strip_prefix(':')?.split_whitespace().next()
}

/// `label  0.0/sec  0.000/sec  0.0000/sec   total: 5`
///
/// The last `total:` on the line is used. It must stand on its own, so
/// `subtotal:` does not count.
fn total(rest: &str) -> Option<&str> {
    let mut haystack = rest;

    while let Some(pos) = haystack.rfind(TOTAL) {
        let standalone = haystack[..pos]
            .chars()
            .last()
            .map(char::is_whitespace)
            .unwrap_or(true);

        if standalone {
            return haystack[pos + TOTAL.len()..].split_whitespace().next();
        }

        haystack = &haystack[..pos];
    }

    None
}

/// `label: 731072761249336 (99.80%)`, the value inside the last bracketed
/// percentage.
fn percent(rest: &str) -> Option<&str> {
    let close = rest.rfind("%)")?;
    let open = rest[..close].rfind('(')?;

    Some(rest[open + 1..close].trim())
}

/// Parses a token as a field value. Integers and decimals are accepted alike;
/// negative and non-finite numbers are rejected.
pub fn parse(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| is_valid(*v))
}
