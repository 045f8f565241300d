// Destinations for operator traces
//
// A sink receives one complete block per operator call and writes it in one go,
// so blocks from different threads never interleave.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, RwLock};

/// Receives trace blocks produced by Bitfield operators
pub trait TraceSink: Send + Sync {
    /// Emit one complete block (all lines plus the trailing blank line)
    fn emit(&self, block: &str);
}

/// Writes blocks to standard output.
///
/// Delivery is best effort: a failed write is logged with `tracing::warn!`
/// and dropped, and the operator that produced the block still returns its
/// result. Use `BufferSink` or `TracingSink` when the trace must not be lost.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn emit(&self, block: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = write_block(&mut handle, block) {
            tracing::warn!("Failed to write trace to stdout: {}", e);
        }
    }
}

/// Write a whole block and flush
fn write_block(writer: &mut impl Write, block: &str) -> io::Result<()> {
    writer.write_all(block.as_bytes())?;
    writer.flush()
}

/// Forwards blocks to `tracing` as info events on the `bits_rs::trace` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn emit(&self, block: &str) {
        tracing::info!(target: "bits_rs::trace", "\n{}", block.trim_end());
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn emit(&self, _block: &str) {}
}

/// Collects blocks in memory
#[derive(Debug, Default)]
pub struct BufferSink {
    buffer: Mutex<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Return everything emitted so far and clear the buffer
    pub fn take(&self) -> String {
        std::mem::take(
            &mut *self
                .buffer
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }
}

impl TraceSink for BufferSink {
    fn emit(&self, block: &str) {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_str(block);
    }
}

lazy_static::lazy_static! {
    static ref DEFAULT_SINK: RwLock<Arc<dyn TraceSink>> = RwLock::new(Arc::new(StdoutSink));
}

/// Sink used by the traced Bitfield operators (standard output unless replaced)
pub fn default_sink() -> Arc<dyn TraceSink> {
    DEFAULT_SINK
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Replace the process-wide default sink
pub fn set_default_sink(sink: Arc<dyn TraceSink>) {
    *DEFAULT_SINK
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = sink;
}

/// Restore standard output as the default sink
pub fn reset_default_sink() {
    set_default_sink(Arc::new(StdoutSink));
}
