// lib.rs

/*
Embeddable fan-out logging facility. One mutex-guarded sink registry,
severity-classified format-string messages in, structured lines out to
every registered sink that asked for them. Builds as a normal std crate
and as no_std + alloc for kernel-style execution contexts.
*/

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate alloc;

pub mod color;
pub mod config;
pub mod error;
pub mod flags;
pub mod logger;
pub mod macros;
pub mod sinks;
pub mod time;
pub mod traits;

pub use color::Color;
pub use config::{LoggerConfig, Platform};
pub use error::LogError;
pub use flags::SinkFlags;
pub use logger::Logger;
pub use sinks::memory::MemorySink;
#[cfg(feature = "std")]
pub use sinks::{file::FileSink, stdout::StdoutSink};
pub use time::TickClock;
#[cfg(feature = "std")]
pub use time::StdClock;
pub use traits::{clock::Clock, sink_write::SinkWrite};
