//!
//! flags.rs
//!
//! Per-sink behavior flags for the fan-out logger.
//!

use bitflags::bitflags;

bitflags! {
	/// Flags controlling what a registered sink receives and how it
	/// behaves on write and teardown.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct SinkFlags: u8 {
		/// Teardown skips closing this sink's underlying handle.
		const DONT_CLOSE = 0x01;
		/// Writes to this sink are not flushed immediately.
		const DONT_FLUSH = 0x02;
		/// The sink receives the elapsed-time field.
		const PRINT_TIME = 0x04;
		/// The sink receives the severity-tag field.
		const PRINT_TYPE = 0x08;
		/// The sink receives the formatted message body.
		const PRINT_MSG = 0x10;
		/// The sink receives a trailing line terminator.
		const PRINT_ENDL = 0x20;
		/// The sink accepts ANSI color escape sequences.
		const COLORABLE = 0x80;
	}
}

impl SinkFlags {
	/// Default mask for file-path sinks: full line, closed at teardown.
	pub const FILE_DEFAULT: SinkFlags = SinkFlags::PRINT_TIME
		.union(SinkFlags::PRINT_TYPE)
		.union(SinkFlags::PRINT_MSG)
		.union(SinkFlags::PRINT_ENDL);
}
