// Grouped binary rendering, e.g. 16 at width 8 -> "[0001 0000]"

use super::error::{BitsError, Result};
use super::types::{Endianness, FormatOptions};
use num::{BigInt, Integer, One, Signed};

/// Widest Bitfield accepted; wider values would only allocate huge integers
pub const MAX_WIDTH: usize = 1 << 16;

/// Widths must be in `1..=MAX_WIDTH`
pub fn validate_width(width: usize) -> Result<()> {
    if width == 0 || width > MAX_WIDTH {
        return Err(BitsError::InvalidWidth(width));
    }
    Ok(())
}

/// 2^width, the number of patterns representable in `width` bits
pub fn modulus(width: usize) -> BigInt {
    BigInt::one() << width
}

/// Zero-pad the binary digits of `pattern` (already in `[0, 2^width)`) to `width`
pub fn pad_bits(pattern: &BigInt, width: usize) -> String {
    format!("{:0>width$}", pattern.to_str_radix(2), width = width)
}

/// Reverse a digit string character by character
pub fn mirror_bits(bits: &str) -> String {
    bits.chars().rev().collect()
}

/// Render `value` as exactly `width` binary digits, MSB first, with no grouping.
///
/// Negative values are rendered in two's complement: only the lowest `width`
/// bits are kept, so a negative value that needs more bits loses its high bits.
/// Non-negative values must be below 2^width.
pub fn raw_bits(value: &BigInt, width: usize) -> Result<String> {
    validate_width(width)?;

    let modulus = modulus(width);
    if *value >= modulus {
        return Err(BitsError::Overflow {
            value: value.clone(),
            width,
        });
    }

    if value.is_negative() {
        Ok(pad_bits(&value.mod_floor(&modulus), width))
    } else {
        Ok(pad_bits(value, width))
    }
}

/// Insert `separator` every `grouping` characters, counting from the left
pub fn group_bits(bits: &str, grouping: Option<usize>, separator: char) -> String {
    let n = match grouping.filter(|&n| n > 0) {
        Some(n) => n,
        None => return bits.to_string(),
    };

    let mut out = String::with_capacity(bits.len() + bits.len() / n);
    for (i, c) in bits.chars().enumerate() {
        if i > 0 && i % n == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Swap every '0' for '1' and vice versa; other characters are kept
pub fn invert_bits(bits: &str) -> String {
    bits.chars()
        .map(|c| match c {
            '0' => '1',
            '1' => '0',
            other => other,
        })
        .collect()
}

/// Apply grouping and brackets to an unbroken digit string
pub fn decorate(bits: &str, options: &FormatOptions) -> String {
    let grouped = group_bits(bits, options.group_size(), options.separator);
    if options.brackets {
        format!("[{}]", grouped)
    } else {
        grouped
    }
}

/// Big-endian (MSB first) rendering
pub fn format_big_endian(value: &BigInt, width: usize, options: &FormatOptions) -> Result<String> {
    let bits = raw_bits(value, width)?;
    Ok(decorate(&bits, options))
}

/// Little-endian rendering: the raw big-endian digits reversed as a string,
/// then grouped. Groups are mirrored, not byte-swapped.
pub fn format_little_endian(
    value: &BigInt,
    width: usize,
    options: &FormatOptions,
) -> Result<String> {
    let bits = mirror_bits(&raw_bits(value, width)?);
    Ok(decorate(&bits, options))
}

/// Render with the requested bit ordering
pub fn format_binary(
    value: &BigInt,
    width: usize,
    endianness: Endianness,
    options: &FormatOptions,
) -> Result<String> {
    match endianness {
        Endianness::Big => format_big_endian(value, width, options),
        Endianness::Little => format_little_endian(value, width, options),
    }
}
