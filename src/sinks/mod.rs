//!
//! sinks/mod.rs
//!
//! Concrete sink handle implementations for the fan-out logger.
//!

#[cfg(feature = "std")]
pub mod file;
pub mod memory;
#[cfg(feature = "std")]
pub mod stdout;
