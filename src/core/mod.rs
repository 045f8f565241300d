// Core module: the Bitfield value type and its operators
pub mod bitfield;
pub mod ops;
pub mod widths;

// Re-export commonly used types
pub use bitfield::{Bitfield, Source};
pub use ops::{evaluate, evaluate_not, Operand, Operator};
pub use widths::{b128, b16, b32, b64, b4, b8};
