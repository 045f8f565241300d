// Shorthand constructors for common widths, overflow disabled

use super::bitfield::{Bitfield, Source};
use crate::bitwise::Result;

pub fn b4<'a>(source: impl Into<Source<'a>>) -> Result<Bitfield> {
    Bitfield::from_source(source, 4, false)
}

pub fn b8<'a>(source: impl Into<Source<'a>>) -> Result<Bitfield> {
    Bitfield::from_source(source, 8, false)
}

pub fn b16<'a>(source: impl Into<Source<'a>>) -> Result<Bitfield> {
    Bitfield::from_source(source, 16, false)
}

pub fn b32<'a>(source: impl Into<Source<'a>>) -> Result<Bitfield> {
    Bitfield::from_source(source, 32, false)
}

pub fn b64<'a>(source: impl Into<Source<'a>>) -> Result<Bitfield> {
    Bitfield::from_source(source, 64, false)
}

pub fn b128<'a>(source: impl Into<Source<'a>>) -> Result<Bitfield> {
    Bitfield::from_source(source, 128, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitwise::BitsError;
    use crate::trace::BufferSink;

    #[test]
    fn test_b4() {
        assert_eq!(b4(0).unwrap().to_string(), "[0000]");
        assert_eq!(b4(1).unwrap().to_string(), "[0001]");
        assert_eq!(b4(0xf).unwrap().to_string(), "[1111]");
        assert_eq!(b4(-1).unwrap().to_string(), "[1111]");
        assert_eq!(b4(-8).unwrap().to_string(), "[1000]");
        assert!(matches!(b4(-9), Err(BitsError::Overflow { .. })));
        assert!(matches!(b4(16), Err(BitsError::Overflow { .. })));
    }

    #[test]
    fn test_b4_from_strings() {
        assert_eq!(b4("0b0001").unwrap().to_string(), "[0001]");
        assert!(matches!(b4("0b10001"), Err(BitsError::Overflow { .. })));
        assert_eq!(b4("[0001]").unwrap().to_string(), "[0001]");
        assert!(matches!(b4("garbage"), Err(BitsError::Format(_))));
    }

    #[test]
    fn test_b4_from_bitfield() {
        let inner = b4("[0001]").unwrap();
        assert_eq!(b4(&inner).unwrap().to_string(), "[0001]");
    }

    #[test]
    fn test_b8() {
        assert_eq!(b8(16).unwrap().to_string(), "[0001 0000]");
        assert_eq!(b8("[0001 0000]").unwrap().to_string(), "[0001 0000]");
    }

    #[test]
    fn test_wider_widths() {
        assert_eq!(b16(0xbeefu16).unwrap().to_string(), "[1011 1110 1110 1111]");
        assert_eq!(b32(1).unwrap().width(), 32);
        assert_eq!(b64(u64::MAX).unwrap().to_raw_string(), "1".repeat(64));
        assert_eq!(b128(u128::MAX).unwrap().to_raw_string(), "1".repeat(128));
        assert!(b64(u128::from(u64::MAX) + 1).is_err());
    }

    #[test]
    fn test_width_mismatch_between_shorthands() {
        let sink = BufferSink::new();
        let err = b4(1).unwrap().bit_and_to(&b8(1).unwrap(), &sink).unwrap_err();
        assert_eq!(err, BitsError::WidthMismatch { left: 4, right: 8 });
    }
}
