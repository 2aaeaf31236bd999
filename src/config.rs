//!
//! config.rs
//!
//! Runtime configuration consumed by `Logger::init`.
//!

use alloc::boxed::Box;

use crate::{flags::SinkFlags, traits::clock::Clock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The flavor of terminal the standard-output sink talks to. Windows
/// consoles only get color escapes when the caller forces them.
pub enum Platform {
	Unix,
	Windows
}

impl Platform {
	/// The platform this crate was built for.
	pub fn current() -> Self {
		if cfg!(windows) {
			Platform::Windows
		} else {
			Platform::Unix
		}
	}

	/// Default flag mask for the standard-output sink on this platform.
	/// Stdout is always a borrowed handle, so `DONT_CLOSE` is part of
	/// the mask.
	pub fn stdout_flags(self, force_color: bool) -> SinkFlags {
		let base = SinkFlags::FILE_DEFAULT.union(SinkFlags::DONT_CLOSE);
		match self {
			Platform::Unix => base | SinkFlags::COLORABLE,
			Platform::Windows if force_color => base | SinkFlags::COLORABLE,
			Platform::Windows => base
		}
	}
}

/// Options wired into a logger at init time.
///
/// Everything that could tempt a build-time switch is a runtime value
/// here: the target platform, forced color, the logs-enabled switch, the
/// default sinks, and the time source.
pub struct LoggerConfig {
	/// Terminal flavor used for the stdout default mask.
	pub platform: Platform,
	/// Treat the console as color-capable even on Windows. Enabling VT
	/// processing on the hosting console is the embedder's job.
	pub force_color: bool,
	/// When false, `emit` is a defined no-op and `can_emit` is false.
	pub enabled: bool,
	/// Register a standard-output sink at init.
	#[cfg(feature = "std")]
	pub stdout: bool,
	/// Register a default file-path sink at init.
	#[cfg(feature = "std")]
	pub file_path: Option<std::path::PathBuf>,
	/// Time source for the elapsed-time field.
	pub clock: Box<dyn Clock + Send + Sync>
}

impl LoggerConfig {
	/// A default configuration around the given time source. Restricted
	/// environments use this with their tick-driven clock.
	pub fn with_clock(clock: Box<dyn Clock + Send + Sync>) -> Self {
		Self {
			platform: Platform::current(),
			force_color: false,
			enabled: true,
			#[cfg(feature = "std")]
			stdout: true,
			#[cfg(feature = "std")]
			file_path: None,
			clock
		}
	}
}

#[cfg(feature = "std")]
impl Default for LoggerConfig {
	fn default() -> Self {
		Self::with_clock(Box::new(crate::time::StdClock::new()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unix_stdout_is_colorable() {
		let mask = Platform::Unix.stdout_flags(false);
		assert!(mask.contains(SinkFlags::COLORABLE));
		assert!(mask.contains(SinkFlags::DONT_CLOSE));
	}

	#[test]
	fn windows_stdout_needs_forced_color() {
		assert!(
			!Platform::Windows
				.stdout_flags(false)
				.contains(SinkFlags::COLORABLE)
		);
		assert!(
			Platform::Windows
				.stdout_flags(true)
				.contains(SinkFlags::COLORABLE)
		);
	}
}
