//! Severity-level logging macros.
//!
//! Each level is controlled by a cargo feature (`log-info`, `log-warn`,
//! `log-error`, higher levels implying lower ones). A disabled level's
//! macro expands to `()`, removing all formatting and allocation
//! overhead at compile time. The macros discard the dispatch result;
//! callers that care about delivery call the `Logger` methods directly.

#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info {
	($logger:expr, $($arg:tt)*) => {{
		let _ = $logger.info(format_args!($($arg)*));
	}};
}

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
	($($arg:tt)*) => {
		()
	};
}

#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warn {
	($logger:expr, $($arg:tt)*) => {{
		let _ = $logger.warn(format_args!($($arg)*));
	}};
}

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warn {
	($($arg:tt)*) => {
		()
	};
}

#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error {
	($logger:expr, $($arg:tt)*) => {{
		let _ = $logger.error(format_args!($($arg)*));
	}};
}

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
	($($arg:tt)*) => {
		()
	};
}
