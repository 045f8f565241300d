// Binary string formatting and parsing
// Pure functions: integer + width <-> grouped binary text

pub mod error;
pub mod format;
pub mod parser;
pub mod types;

pub use error::{BitsError, Result};
pub use format::{
    format_big_endian, format_binary, format_little_endian, group_bits, invert_bits, raw_bits,
};
pub use parser::parse;
pub use types::{Endianness, FormatOptions};
