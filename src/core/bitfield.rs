// Fixed-width binary value
//
// A Bitfield pairs an integer with a bit width. Construction enforces the
// overflow policy; after that the value never changes.

use crate::bitwise::format::{decorate, mirror_bits, modulus, pad_bits, validate_width};
use crate::bitwise::{self, BitsError, Endianness, FormatOptions, Result};
use num::{BigInt, Integer, Signed};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Anything a Bitfield can be built from
#[derive(Debug, Clone)]
pub enum Source<'a> {
    /// A plain integer, checked against the width
    Int(BigInt),
    /// A binary literal, `0b0001` or `[0001]`
    Str(&'a str),
    /// An existing Bitfield, copied as-is
    Bitfield(&'a Bitfield),
}

macro_rules! impl_source_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Source<'_> {
                fn from(value: $t) -> Self {
                    Source::Int(BigInt::from(value))
                }
            }
        )*
    };
}

impl_source_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Source<'_> {
    fn from(value: BigInt) -> Self {
        Source::Int(value)
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(value: &'a str) -> Self {
        Source::Str(value)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(value: &'a String) -> Self {
        Source::Str(value.as_str())
    }
}

impl<'a> From<&'a Bitfield> for Source<'a> {
    fn from(value: &'a Bitfield) -> Self {
        Source::Bitfield(value)
    }
}

/// Immutable integer with a fixed bit width.
///
/// Invariant: `-(2^(width-1)) <= value < 2^width`. Negative values are shown in
/// two's complement, non-negative ones as unsigned. Two Bitfields are equal when
/// they have the same width and the same bit pattern, so `-1` and `15` are equal
/// at width 4.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BitfieldRepr", into = "BitfieldRepr")]
pub struct Bitfield {
    value: BigInt,
    width: usize,
    overflow: bool,
}

/// True when `value` is inside the two's-complement bounds of `width`.
/// Always false for widths outside `1..=MAX_WIDTH`.
pub fn fits(value: &BigInt, width: usize) -> bool {
    if validate_width(width).is_err() {
        return false;
    }
    let upper = modulus(width);
    let lower = -(&upper >> 1usize);
    *value < upper && *value >= lower
}

impl Bitfield {
    /// Build from an integer.
    ///
    /// Without `overflow`, values outside `[-(2^(width-1)), 2^width)` are
    /// rejected. With `overflow`, they are reduced modulo 2^width into
    /// `[0, 2^width)`; values already inside the bounds are kept as given.
    pub fn new(value: impl Into<BigInt>, width: usize, overflow: bool) -> Result<Self> {
        validate_width(width)?;

        let value = value.into();
        if fits(&value, width) {
            return Ok(Self {
                value,
                width,
                overflow,
            });
        }

        if overflow {
            let wrapped = value.mod_floor(&modulus(width));
            tracing::debug!("Wrapped {} into {} bits as {}", value, width, wrapped);
            Ok(Self {
                value: wrapped,
                width,
                overflow,
            })
        } else {
            tracing::debug!("Rejected {} for {} bits", value, width);
            Err(BitsError::Overflow { value, width })
        }
    }

    /// Build from a `0b...` or `[....]` binary literal
    pub fn from_binary_str(s: &str, width: usize, overflow: bool) -> Result<Self> {
        let value = bitwise::parse(s)?;
        Self::new(value, width, overflow)
    }

    /// Copy another Bitfield, including its width and overflow policy
    pub fn from_bitfield(other: &Bitfield) -> Self {
        other.clone()
    }

    /// Build from any [`Source`]. Copying a Bitfield ignores `width` and `overflow`.
    pub fn from_source<'a>(
        source: impl Into<Source<'a>>,
        width: usize,
        overflow: bool,
    ) -> Result<Self> {
        match source.into() {
            Source::Int(value) => Self::new(value, width, overflow),
            Source::Str(s) => Self::from_binary_str(s, width, overflow),
            Source::Bitfield(other) => Ok(Self::from_bitfield(other)),
        }
    }

    /// Wrap `value` into `width` bits without failing; `width` must be valid.
    /// The stored overflow flag is `overflow` regardless of whether wrapping happened.
    pub(crate) fn wrapping(value: BigInt, width: usize, overflow: bool) -> Self {
        let value = if fits(&value, width) {
            value
        } else {
            value.mod_floor(&modulus(width))
        };
        Self {
            value,
            width,
            overflow,
        }
    }

    /// Store only the bit pattern of `value`, in `[0, 2^width)`; `width` must be valid.
    /// Results of AND, OR and XOR are kept in this form so equal patterns have equal values.
    pub(crate) fn from_pattern(value: BigInt, width: usize) -> Self {
        Self {
            value: value.mod_floor(&modulus(width)),
            width,
            overflow: false,
        }
    }

    /// The stored value, possibly negative
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether this value was built with wrapping enabled
    pub fn overflow(&self) -> bool {
        self.overflow
    }

    /// The bit pattern as a value in `[0, 2^width)`
    pub fn unsigned_value(&self) -> BigInt {
        if self.value.is_negative() {
            self.value.mod_floor(&modulus(self.width))
        } else {
            self.value.clone()
        }
    }

    /// Exactly `width` digits, e.g. `00010000`
    pub fn to_raw_string(&self) -> String {
        pad_bits(&self.unsigned_value(), self.width)
    }

    pub fn to_big_endian_string(&self, options: &FormatOptions) -> String {
        decorate(&self.to_raw_string(), options)
    }

    /// Character-reversed rendering, e.g. 1 at width 4 -> `[1000]`
    pub fn to_little_endian_string(&self, options: &FormatOptions) -> String {
        decorate(&mirror_bits(&self.to_raw_string()), options)
    }

    pub fn render(&self, endianness: Endianness, options: &FormatOptions) -> String {
        match endianness {
            Endianness::Big => self.to_big_endian_string(options),
            Endianness::Little => self.to_little_endian_string(options),
        }
    }
}

impl fmt::Display for Bitfield {
    /// Big-endian, grouped by four, bracketed: `[0000 1111]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_big_endian_string(&FormatOptions::default()))
    }
}

impl fmt::Binary for Bitfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_raw_string())
    }
}

impl PartialEq for Bitfield {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.unsigned_value() == other.unsigned_value()
    }
}

impl Eq for Bitfield {}

impl Hash for Bitfield {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.unsigned_value().hash(state);
    }
}

/// Serialized form: `{ "bits": "0001", "width": 4 }`
#[derive(Serialize, Deserialize)]
struct BitfieldRepr {
    bits: String,
    width: usize,
}

impl From<Bitfield> for BitfieldRepr {
    fn from(value: Bitfield) -> Self {
        Self {
            bits: value.to_raw_string(),
            width: value.width,
        }
    }
}

impl TryFrom<BitfieldRepr> for Bitfield {
    type Error = BitsError;

    fn try_from(repr: BitfieldRepr) -> Result<Self> {
        if repr.bits.len() != repr.width {
            return Err(BitsError::Format(repr.bits));
        }
        Bitfield::from_binary_str(&format!("0b{}", repr.bits), repr.width, false)
    }
}
