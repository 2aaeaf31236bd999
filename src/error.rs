//! error.rs
//!
//! Error handling module for the fan-out logger.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// An enum representing all fanlog errors.
pub enum LogError {
	/// The sink registry could not grow. Fatal to the registration
	/// attempt only, never to the process.
	#[error("sink registry could not grow")]
	Alloc,
	/// A file-path sink could not be opened for writing.
	#[error("log file could not be opened for writing")]
	Open,
	/// At least one sink write did not complete during a dispatch.
	/// Delivery to the remaining sinks is unaffected.
	#[error("write to a registered sink failed")]
	Write
}
