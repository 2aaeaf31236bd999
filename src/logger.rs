//!
//! logger.rs
//!
//! The sink registry, dispatch engine and lifecycle controller.
//!

use alloc::{boxed::Box, fmt, string::String, vec::Vec};

use spin::Mutex;

use crate::{
	color::{self, Color},
	config::LoggerConfig,
	error::LogError,
	flags::SinkFlags,
	time,
	traits::{clock::Clock, sink_write::SinkWrite}
};

const INFO_TAG: &str = "INFO";
const WARN_TAG: &str = "WARN";
const ERROR_TAG: &str = "ERROR";

/// A registered output destination plus its formatting/behavior flags.
struct Sink {
	handle: Box<dyn SinkWrite + Send>,
	flags: SinkFlags
}

impl Sink {
	/// Writes one dispatch's worth of fields to this sink, honoring the
	/// flag mask. Field order: time, space, tag, `": "`, message,
	/// newline. A failed field write is recorded and the remaining
	/// fields are still attempted.
	fn write_line(&mut self, time_field: &[u8], tag_field: &[u8], msg: &[u8]) -> Result<(), LogError> {
		let flags = self.flags;
		let mut result = Ok(());
		let mut wrote_header = false;

		if flags.contains(SinkFlags::PRINT_TIME) {
			result = result.and(self.handle.write_all(time_field));
			wrote_header = true;
		}
		if flags.contains(SinkFlags::PRINT_TIME | SinkFlags::PRINT_TYPE) {
			result = result.and(self.handle.write_all(b" "));
		}
		if flags.contains(SinkFlags::PRINT_TYPE) {
			result = result.and(self.handle.write_all(tag_field));
			wrote_header = true;
		}
		if flags.contains(SinkFlags::PRINT_MSG) {
			if wrote_header {
				result = result.and(self.handle.write_all(b": "));
			}
			result = result.and(self.handle.write_all(msg));
		}
		if flags.contains(SinkFlags::PRINT_ENDL) {
			result = result.and(self.handle.write_all(b"\n"));
		}
		if !flags.contains(SinkFlags::DONT_FLUSH) {
			result = result.and(self.handle.flush());
		}

		result
	}
}

/// The process-wide logging context: an insertion-ordered sink registry
/// behind one lock, plus the time source.
///
/// Every operation takes `&self`; the registry lock serializes both
/// mutations and dispatch. There is no uninitialized state to misuse —
/// [`init`](Logger::init) hands out the only handle, and dropping it
/// tears the registry down.
pub struct Logger {
	sinks: Mutex<Vec<Sink>>,
	clock: Box<dyn Clock + Send + Sync>,
	enabled: bool
}

impl Logger {
	/// Builds a logger from `config`: registers the default sinks it
	/// asks for, then writes the baseline color to whatever is
	/// colorable.
	///
	/// A registration failure aborts init and propagates; sinks already
	/// registered are released when the partially built logger drops.
	pub fn init(config: LoggerConfig) -> Result<Logger, LogError> {
		let logger = Logger {
			sinks: Mutex::new(Vec::new()),
			clock: config.clock,
			enabled: config.enabled
		};

		#[cfg(feature = "std")]
		{
			if config.stdout {
				logger.register_sink(
					Box::new(crate::sinks::stdout::StdoutSink::new()),
					config.platform.stdout_flags(config.force_color)
				)?;
			}
			if let Some(path) = &config.file_path {
				logger.register_file_sink(path)?;
			}
		}

		logger.set_color(Some(Color::Reset));
		Ok(logger)
	}

	/// Appends a sink to the registry. Registration order determines
	/// dispatch order. Fails with [`LogError::Alloc`] when the backing
	/// storage cannot grow; the attempt is abandoned, nothing else is.
	pub fn register_sink(
		&self,
		handle: Box<dyn SinkWrite + Send>,
		flags: SinkFlags
	) -> Result<(), LogError> {
		let mut sinks = self.sinks.lock();
		sinks.try_reserve(1).map_err(|_| LogError::Alloc)?;
		sinks.push(Sink {
			handle,
			flags
		});
		Ok(())
	}

	/// Opens a write handle at `path` and registers it with the default
	/// file mask. When registration itself fails, the freshly opened
	/// handle drops closed before the error propagates.
	#[cfg(feature = "std")]
	pub fn register_file_sink<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), LogError> {
		let file = crate::sinks::file::FileSink::create(path)?;
		self.register_sink(Box::new(file), SinkFlags::FILE_DEFAULT)
	}

	/// True iff logging is enabled and at least one sink is registered.
	/// Advisory only: sinks can be added between this check and a later
	/// `emit`. The registry is strictly additive outside teardown, so
	/// the race never loses a sink mid-line.
	pub fn can_emit(&self) -> bool {
		self.enabled && !self.sinks.lock().is_empty()
	}

	/// Writes `color`'s escape sequence to every colorable sink.
	/// `None` is a no-op. Write failures here are best-effort ignored.
	pub fn set_color(&self, color: Option<Color>) {
		if !self.enabled {
			return;
		}
		if let Some(color) = color {
			let mut sinks = self.sinks.lock();
			Self::paint(&mut *sinks, color);
		}
	}

	/// Formats one line and fans it out to every registered sink.
	///
	/// The message body is resolved to a string before the registry
	/// lock is taken; the lock is then held for the whole dispatch, so
	/// lines from concurrent callers never interleave byte-by-byte on
	/// any sink. A write failure on one sink does not stop delivery to
	/// the others; if any sink failed, [`LogError::Write`] comes back
	/// once after all sinks were attempted.
	pub fn emit(
		&self,
		color: Option<Color>,
		tag: &str,
		args: fmt::Arguments<'_>
	) -> Result<(), LogError> {
		if !self.enabled {
			return Ok(());
		}

		let msg = fmt::format(args);
		let tag_field = Self::tag_field(tag);

		let mut sinks = self.sinks.lock();

		let stamp = time::format_elapsed(self.clock.elapsed_seconds());
		let mut time_field = [0u8; 10];
		time_field[0] = b'[';
		time_field[1..9].copy_from_slice(&stamp);
		time_field[9] = b']';

		if let Some(color) = color {
			Self::paint(&mut *sinks, color);
		}

		let mut failed = false;
		for sink in sinks.iter_mut() {
			if sink
				.write_line(&time_field, tag_field.as_bytes(), msg.as_bytes())
				.is_err()
			{
				failed = true;
			}
		}

		if failed {
			Err(LogError::Write)
		} else {
			Ok(())
		}
	}

	/// Info-severity shorthand: cyan, `INFO` tag.
	pub fn info(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
		self.emit(Some(color::INFO_COLOR), INFO_TAG, args)
	}

	/// Warn-severity shorthand: yellow, `WARN` tag.
	pub fn warn(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
		self.emit(Some(color::WARN_COLOR), WARN_TAG, args)
	}

	/// Error-severity shorthand: red, `ERROR` tag.
	pub fn error(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
		self.emit(Some(color::ERROR_COLOR), ERROR_TAG, args)
	}

	/// Drains the registry in reverse insertion order, closing every
	/// sink not flagged `DONT_CLOSE`. Idempotent; a second call finds
	/// an empty registry and does nothing. Registrations afterwards are
	/// permitted and start a fresh sink list.
	pub fn shutdown(&self) {
		let mut sinks = self.sinks.lock();
		while let Some(mut sink) = sinks.pop() {
			if !sink.flags.contains(SinkFlags::DONT_CLOSE) {
				let _ = sink.handle.close();
			}
		}
	}

	fn paint(sinks: &mut [Sink], color: Color) {
		for sink in sinks.iter_mut() {
			if sink.flags.contains(SinkFlags::COLORABLE) {
				let _ = sink.handle.write_all(color.code().as_bytes());
			}
		}
	}

	#[cfg(feature = "std")]
	fn tag_field(tag: &str) -> String {
		let current = std::thread::current();
		format!("[{}/{}]", current.name().unwrap_or("?"), tag)
	}

	#[cfg(not(feature = "std"))]
	fn tag_field(tag: &str) -> String {
		format!("[{}]", tag)
	}
}

impl Drop for Logger {
	fn drop(&mut self) {
		self.shutdown();
	}
}
