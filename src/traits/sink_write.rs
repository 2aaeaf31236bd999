//!
//! sink_write.rs
//!
//! Trait definition for all types that can back a registered sink.
//!

use crate::error::LogError;

/// The write side of a sink handle. Handles are write-only from the
/// logger's perspective; the registry owns them exclusively once
/// registered.
pub trait SinkWrite {
	/// Write as much of `buf` as possible, returning the number of bytes
	/// accepted.
	fn write(&mut self, buf: &[u8]) -> Result<usize, LogError>;

	/// Push any buffered bytes down to the underlying destination.
	fn flush(&mut self) -> Result<(), LogError>;

	/// Release the handle at teardown. Sinks registered with
	/// [`SinkFlags::DONT_CLOSE`](crate::flags::SinkFlags::DONT_CLOSE)
	/// never see this call.
	fn close(&mut self) -> Result<(), LogError> {
		self.flush()
	}

	/// Write the whole of `buf`, retrying short writes.
	fn write_all(&mut self, mut buf: &[u8]) -> Result<(), LogError> {
		while !buf.is_empty() {
			let written = self.write(buf)?;
			if written == 0 {
				return Err(LogError::Write);
			}
			buf = &buf[written..];
		}
		Ok(())
	}
}
