// BITS-RS: fixed-width bitfields that trace every bitwise operation
// Copyright 2024 - Licensed under GPLv3

pub mod bitwise;
pub mod core;
pub mod trace;

// Re-export commonly used types
pub use bitwise::{
    format_big_endian, format_little_endian, parse, BitsError, Endianness, FormatOptions, Result,
};
pub use crate::core::{b128, b16, b32, b64, b4, b8, Bitfield, Operand, Operator, Source};
pub use trace::{default_sink, set_default_sink, BufferSink, StdoutSink, TraceSink, TracingSink};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_sink_receives_operator_traces() {
        let sink = Arc::new(BufferSink::new());
        set_default_sink(sink.clone());

        let x = b4("[0101]").unwrap();
        let y = b4("[1010]").unwrap();
        let result = (&x | &y).unwrap();
        let shifted = (&result >> 2).unwrap();
        let inverted = (!&shifted).unwrap();

        trace::reset_default_sink();

        assert_eq!(inverted.to_string(), "[1100]");
        let output = sink.contents();
        assert!(output.contains(
            "Left            : [0101]\nRight           : [1010]\n|               : [1111]\n\n"
        ));
        assert!(output.contains("Operand         : [1111]\n>>              : [0011]\n\n"));
        assert!(output.contains("Operand         : [0011]\n~               : [1100]\n\n"));
    }
}
