//! Duration strings such as `200ms`, `1.5s` or `1h2m3s`.
//!
//! A string is an optional sign and a run of `<decimal><unit>` terms with
//! units `ns`, `us` (`µs`, `μs`), `ms`, `s`, `m` and `h`. A bare `0` is also
//! accepted. Negative values are rejected since `Duration` is unsigned.

use std::time::Duration;

use anyhow::{bail, ensure, Context, Result};

const UNITS: [(&str, u128); 8] = [
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("μs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 60 * 60 * 1_000_000_000),
];

/// Longest representable value, matching a signed 64-bit nanosecond count.
const MAX_NANOS: u128 = i64::MAX as u128;

pub fn parse(s: &str) -> Result<Duration> {
    let orig = s;
    let (neg, mut s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    ensure!(!s.is_empty(), "invalid duration {:?}", orig);

    let mut total: u128 = 0;
    while !s.is_empty() {
        let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
        let (int, rest) = s.split_at(int_len);
        let (frac, rest) = match rest.strip_prefix('.') {
            Some(r) => r.split_at(r.bytes().take_while(u8::is_ascii_digit).count()),
            None => ("", rest),
        };
        ensure!(
            !(int.is_empty() && frac.is_empty()),
            "invalid duration {:?}",
            orig
        );

        let unit_len = rest
            .char_indices()
            .find(|(_, c)| *c == '.' || c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        let (unit, rest) = rest.split_at(unit_len);
        let Some(&(_, scale)) = UNITS.iter().find(|(name, _)| *name == unit) else {
            if unit.is_empty() {
                bail!("missing unit in duration {:?}", orig);
            }
            bail!("unknown unit {:?} in duration {:?}", unit, orig);
        };

        let whole: u128 = if int.is_empty() {
            0
        } else {
            int.parse()
                .with_context(|| format!("invalid duration {:?}", orig))?
        };
        let mut nanos = whole
            .checked_mul(scale)
            .filter(|n| *n <= MAX_NANOS)
            .with_context(|| format!("invalid duration {:?}", orig))?;
        // digits past the unit's resolution cannot change the result
        let mut place = scale;
        for d in frac.bytes() {
            if place < 10 {
                break;
            }
            place /= 10;
            nanos += (d - b'0') as u128 * place;
        }

        total = total
            .checked_add(nanos)
            .filter(|n| *n <= MAX_NANOS)
            .with_context(|| format!("invalid duration {:?}", orig))?;
        s = rest;
    }

    ensure!(!neg || total == 0, "negative duration {:?}", orig);
    Ok(Duration::from_nanos(total as u64))
}
