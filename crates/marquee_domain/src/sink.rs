use std::io;
use std::sync::Arc;

/// Append-only destination the progress line and ordinary output are
/// rendered to, conventionally the process error stream.
/// Implementors must ensure thread-safe writes.
pub trait TerminalSink: Send + Sync {
    /// Appends the whole buffer.
    fn write(&self, buf: &[u8]) -> io::Result<()>;
    /// Flushes buffered output.
    fn flush(&self) -> io::Result<()>;
}

impl<T: TerminalSink + ?Sized> TerminalSink for Arc<T> {
    fn write(&self, buf: &[u8]) -> io::Result<()> {
        (**self).write(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}
