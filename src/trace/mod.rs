// Operator trace output: block layout and sinks

pub mod block;
pub mod sink;

pub use block::{binary_block, trace_line, unary_block};
pub use sink::{
    default_sink, reset_default_sink, set_default_sink, BufferSink, NullSink, StdoutSink,
    TraceSink, TracingSink,
};
