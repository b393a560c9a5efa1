//! Plain-text encoding of coefficient vectors.
//!
//! Inputs are sequences of integer tokens separated by whitespace and/or commas.  A token may be
//! decimal, `0x`-prefixed hex, or bare hex (recognized by the presence of any of `a-f`), with an
//! optional sign.  Every token is reduced modulo a caller-chosen modulus as it is read, digit by
//! digit, so tokens of any length are handled exactly.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Display, Write};
use hybrid_array::Array;
use module_lattice::Truncate;

use crate::Error;
use crate::algebra::{Coefficients, Int, N, Q};
use crate::trace::ZetaTrace;

/// Modulus applied by the 16-bit converters
pub const HEX16_MODULUS: u32 = 1 << 16;

/// How the digits of a token are interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Radix {
    /// `0x` prefix or any of `a-f` selects hex, otherwise decimal
    #[default]
    Auto,
    /// Base 10 only
    Decimal,
    /// Base 16, with or without a `0x` prefix
    Hex,
}

/// Parse one token and reduce it modulo `modulus`.
///
/// Returns `None` if the token is empty, holds a digit that is invalid for the selected radix,
/// or if `modulus` is zero.
#[allow(clippy::integer_division_remainder_used)]
pub fn parse_token(token: &str, radix: Radix, modulus: u32) -> Option<u32> {
    if modulus == 0 {
        return None;
    }

    let lower = token.trim().trim_end_matches(',').to_ascii_lowercase();
    let (negative, s) = match lower.as_bytes().first() {
        Some(b'-') => (true, &lower[1..]),
        Some(b'+') => (false, &lower[1..]),
        _ => (false, lower.as_str()),
    };

    let (digits, base) = match radix {
        Radix::Decimal => (s, 10),
        Radix::Hex => (s.strip_prefix("0x").unwrap_or(s), 16),
        Radix::Auto => match s.strip_prefix("0x") {
            Some(hex) => (hex, 16),
            None if s.bytes().any(|c| matches!(c, b'a'..=b'f')) => (s, 16),
            None => (s, 10),
        },
    };
    if digits.is_empty() {
        return None;
    }

    let m = u64::from(modulus);
    let mut acc = 0u64;
    for c in digits.chars() {
        let d = c.to_digit(base)?;
        acc = (acc * u64::from(base) + u64::from(d)) % m;
    }
    if negative {
        acc = (m - acc) % m;
    }

    Some(Truncate::truncate(acc))
}

/// Parse every token in `text`, reducing each one modulo `modulus`.
///
/// # Errors
///
/// Returns [`Error::InvalidToken`] for the first token that does not parse.
pub fn parse_tokens(text: &str, radix: Radix, modulus: u32) -> Result<Vec<u32>, Error> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            parse_token(token, radix, modulus).ok_or_else(|| Error::InvalidToken {
                index: i + 1,
                token: token.into(),
            })
        })
        .collect()
}

/// Parse exactly 256 coefficients, reducing each one modulo `Q`.
///
/// # Errors
///
/// Returns [`Error::InvalidToken`] for a malformed token and [`Error::TokenCount`] when the
/// text does not hold exactly 256 tokens.  Short or long inputs are never padded or truncated.
pub fn parse_coefficients(text: &str) -> Result<Coefficients, Error> {
    let values = parse_tokens(text, Radix::Auto, u32::from(Q))?;
    if values.len() != N {
        return Err(Error::TokenCount {
            expected: N,
            got: values.len(),
        });
    }

    Ok(Array::from_fn(|i| <Int as Truncate<u32>>::truncate(values[i])))
}

/// Render values as decimal, one per line.
pub fn format_decimal<T: Display>(values: &[T]) -> String {
    let mut out = String::new();
    for x in values {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{x}");
    }
    out
}

/// Render transformed values annotated with the twiddle factor recorded for each index.
pub fn format_traced(values: &[Int], trace: &ZetaTrace) -> String {
    let mut out = String::new();
    for (i, x) in values.iter().enumerate() {
        let _ = match trace.get(i) {
            None => writeln!(out, "{i:3}: {x}"),
            Some(entry) => {
                let position = match entry.position {
                    Some(p) => alloc::format!("{p}"),
                    None => String::from("None"),
                };
                writeln!(
                    out,
                    "{i:3}: {x:5}   (zeta^{} = {}, pos={position})",
                    entry.exponent, entry.zeta
                )
            }
        };
    }
    out
}

/// Render `value mod 2^16` as four uppercase hex digits.
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::as_conversions)]
pub fn to_u16_hex(value: i64) -> String {
    alloc::format!("{:04X}", value.rem_euclid(i64::from(HEX16_MODULUS)) as u32)
}

/// Render values as 16-bit hex, one per line.
pub fn format_hex16(values: &[u32]) -> String {
    let mut out = String::new();
    for &x in values {
        out.push_str(&to_u16_hex(i64::from(x)));
        out.push('\n');
    }
    out
}
