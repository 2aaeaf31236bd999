//!
//! file.rs
//!
//! File-path sink for user-space builds.
//!

use std::{
	fs::File,
	io::Write,
	path::Path
};

use crate::{error::LogError, traits::sink_write::SinkWrite};

/// Sink over a truncating write handle at a filesystem path. Owned by
/// the registry once registered; closed at teardown unless the sink was
/// flagged `DONT_CLOSE`.
pub struct FileSink {
	file: File
}

impl FileSink {
	/// Opens `path` for writing, truncating any existing file.
	pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
		let file = File::create(path).map_err(|_| LogError::Open)?;
		Ok(Self {
			file
		})
	}
}

impl SinkWrite for FileSink {
	fn write(&mut self, buf: &[u8]) -> Result<usize, LogError> {
		self.file.write(buf).map_err(|_| LogError::Write)
	}

	fn flush(&mut self) -> Result<(), LogError> {
		self.file.flush().map_err(|_| LogError::Write)
	}

	fn close(&mut self) -> Result<(), LogError> {
		self.file.sync_all().map_err(|_| LogError::Write)
	}
}
