//! Decimal / 16-bit hex converters.

use std::error::Error;

use kyber_ntt::text::{self, HEX16_MODULUS, Radix};

use crate::files;

pub fn dec2hex(input: &str, output: &str) -> Result<(), Box<dyn Error>> {
    let content = files::read(input)?;
    let values = text::parse_tokens(&content, Radix::Decimal, HEX16_MODULUS)
        .map_err(|e| format!("'{input}': {e}"))?;
    files::write(output, &text::format_hex16(&values), values.len())
}

pub fn hex2dec(input: &str, output: &str) -> Result<(), Box<dyn Error>> {
    let content = files::read(input)?;
    let values = text::parse_tokens(&content, Radix::Hex, HEX16_MODULUS)
        .map_err(|e| format!("'{input}': {e}"))?;
    files::write(output, &text::format_decimal(&values), values.len())
}
