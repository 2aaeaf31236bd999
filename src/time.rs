//!
//! time.rs
//!
//! Clock implementations and elapsed-time formatting.
//!

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::traits::clock::Clock;

/// Formats elapsed seconds as `HH:MM:SS`, wrapping at 24 hours.
///
/// The result is exactly 8 bytes with no terminator; callers sizing
/// buffers must use all 8.
pub fn format_elapsed(elapsed: u64) -> [u8; 8] {
	let sec = elapsed % 60;
	let min = (elapsed / 60) % 60;
	let hour = (elapsed / 3600) % 24;

	[
		b'0' + (hour / 10) as u8,
		b'0' + (hour % 10) as u8,
		b':',
		b'0' + (min / 10) as u8,
		b'0' + (min % 10) as u8,
		b':',
		b'0' + (sec / 10) as u8,
		b'0' + (sec % 10) as u8
	]
}

/// Clock backed by a shared tick counter, for environments without an
/// OS time source. The embedder clones the clock into its timer
/// interrupt and calls [`tick`](TickClock::tick) once per period.
#[derive(Clone)]
pub struct TickClock {
	ticks: Arc<AtomicU64>,
	ticks_per_second: u64
}

impl TickClock {
	/// Creates a clock expecting `ticks_per_second` calls to `tick` per
	/// second. A zero rate is treated as one tick per second.
	pub fn new(ticks_per_second: u64) -> Self {
		Self {
			ticks: Arc::new(AtomicU64::new(0)),
			ticks_per_second: ticks_per_second.max(1)
		}
	}

	/// Advances the clock by one tick.
	pub fn tick(&self) {
		self.ticks.fetch_add(1, Ordering::Relaxed);
	}
}

impl Clock for TickClock {
	fn elapsed_seconds(&self) -> u64 {
		self.ticks.load(Ordering::Relaxed) / self.ticks_per_second
	}
}

/// Monotonic std clock anchored at construction time.
#[cfg(feature = "std")]
pub struct StdClock {
	start: std::time::Instant
}

#[cfg(feature = "std")]
impl StdClock {
	pub fn new() -> Self {
		Self {
			start: std::time::Instant::now()
		}
	}
}

#[cfg(feature = "std")]
impl Default for StdClock {
	fn default() -> Self {
		StdClock::new()
	}
}

#[cfg(feature = "std")]
impl Clock for StdClock {
	fn elapsed_seconds(&self) -> u64 {
		self.start.elapsed().as_secs()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn elapsed_zero_is_midnight() {
		assert_eq!(&format_elapsed(0), b"00:00:00");
	}

	#[test]
	fn elapsed_fields_are_zero_padded() {
		// 1h 2m 3s
		assert_eq!(&format_elapsed(3723), b"01:02:03");
	}

	#[test]
	fn elapsed_wraps_at_24_hours() {
		let day = 24 * 3600;
		assert_eq!(&format_elapsed(day), b"00:00:00");
		assert_eq!(&format_elapsed(day + 59), b"00:00:59");
		assert_eq!(&format_elapsed(2 * day + 3661), b"01:01:01");
	}

	#[test]
	fn elapsed_last_second_of_day() {
		assert_eq!(&format_elapsed(24 * 3600 - 1), b"23:59:59");
	}

	#[test]
	fn tick_clock_counts_whole_seconds() {
		let clock = TickClock::new(4);
		assert_eq!(clock.elapsed_seconds(), 0);
		for _ in 0..7 {
			clock.tick();
		}
		assert_eq!(clock.elapsed_seconds(), 1);
		clock.tick();
		assert_eq!(clock.elapsed_seconds(), 2);
	}

	#[test]
	fn tick_clock_clones_share_state() {
		let clock = TickClock::new(1);
		let isr_side = clock.clone();
		isr_side.tick();
		isr_side.tick();
		assert_eq!(clock.elapsed_seconds(), 2);
	}

	#[cfg(feature = "std")]
	#[test]
	fn std_clock_starts_at_zero() {
		let clock = StdClock::new();
		assert_eq!(clock.elapsed_seconds(), 0);
	}
}
