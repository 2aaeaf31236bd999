//!
//! stdout.rs
//!
//! Standard output sink for user-space builds.
//!

use std::io::{self, Write};

use crate::{error::LogError, traits::sink_write::SinkWrite};

/// Sink over the process's already-open standard output. The logger
/// never opens or closes this handle; register it with
/// [`SinkFlags::DONT_CLOSE`](crate::flags::SinkFlags::DONT_CLOSE).
pub struct StdoutSink {
	out: io::Stdout
}

impl StdoutSink {
	pub fn new() -> Self {
		Self {
			out: io::stdout()
		}
	}
}

impl Default for StdoutSink {
	fn default() -> Self {
		StdoutSink::new()
	}
}

impl SinkWrite for StdoutSink {
	fn write(&mut self, buf: &[u8]) -> Result<usize, LogError> {
		self.out.write(buf).map_err(|_| LogError::Write)
	}

	fn flush(&mut self) -> Result<(), LogError> {
		self.out.flush().map_err(|_| LogError::Write)
	}
}
