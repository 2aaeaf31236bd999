//!
//! memory.rs
//!
//! Shared in-memory sink, usable in both execution environments.
//!

use alloc::{sync::Arc, vec::Vec};

use spin::Mutex;

use crate::{error::LogError, traits::sink_write::SinkWrite};

/// Sink appending into a shared byte buffer. This is the concrete
/// restricted-context implementation: the embedder keeps a clone and
/// drains the buffer to its own console or storage. It also doubles as
/// the natural test double.
///
/// Clones share one buffer, so register a clone and read through the
/// original. The buffer outlives teardown; register with `DONT_CLOSE`
/// when the embedder still wants to drain it afterwards.
#[derive(Clone)]
pub struct MemorySink {
	buf: Arc<Mutex<Vec<u8>>>
}

impl MemorySink {
	pub fn new() -> Self {
		Self {
			buf: Arc::new(Mutex::new(Vec::new()))
		}
	}

	/// Snapshot of everything written so far.
	pub fn contents(&self) -> Vec<u8> {
		self.buf.lock().clone()
	}

	/// Drains the buffer, returning everything written so far.
	pub fn drain(&self) -> Vec<u8> {
		core::mem::take(&mut *self.buf.lock())
	}
}

impl Default for MemorySink {
	fn default() -> Self {
		MemorySink::new()
	}
}

impl SinkWrite for MemorySink {
	fn write(&mut self, buf: &[u8]) -> Result<usize, LogError> {
		let mut inner = self.buf.lock();
		inner.try_reserve(buf.len()).map_err(|_| LogError::Write)?;
		inner.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> Result<(), LogError> {
		Ok(())
	}
}
