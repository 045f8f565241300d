// Error type shared by the formatter and the Bitfield value type

use num::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitsError {
    #[error("Unrecognized binary string: {0:?}")]
    Format(String),

    #[error("Value {value} does not fit in {width} bits")]
    Overflow { value: BigInt, width: usize },

    #[error("Bit widths do not match: {left} vs {right}")]
    WidthMismatch { left: usize, right: usize },

    #[error("Invalid operand: {0}")]
    Type(String),

    #[error("Invalid bit width: {0}")]
    InvalidWidth(usize),
}

pub type Result<T> = std::result::Result<T, BitsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BitsError::Overflow {
            value: BigInt::from(16),
            width: 4,
        };
        assert_eq!(err.to_string(), "Value 16 does not fit in 4 bits");

        let err = BitsError::WidthMismatch { left: 4, right: 8 };
        assert_eq!(err.to_string(), "Bit widths do not match: 4 vs 8");

        let err = BitsError::Format("garbage".to_string());
        assert_eq!(err.to_string(), "Unrecognized binary string: \"garbage\"");
    }
}
