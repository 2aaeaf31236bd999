//!
//! logs.rs
//!
//! End-to-end checks: real files, real threads, full lifecycle.
//!

#![cfg(feature = "std")]

use std::{fs, sync::Arc, thread};

use fanlog::{LogError, Logger, LoggerConfig, MemorySink, SinkFlags};

fn quiet_config() -> LoggerConfig {
	LoggerConfig {
		stdout: false,
		..Default::default()
	}
}

#[test]
fn file_round_trip_ends_with_message_and_one_newline() {
	let dir = tempfile::tempdir().unwrap();
	let boot_log = dir.path().join("boot.log");

	let config = LoggerConfig {
		stdout: false,
		file_path: Some(boot_log.clone()),
		..Default::default()
	};
	let logger = Logger::init(config).unwrap();
	logger.info(format_args!("Test Log")).unwrap();

	let msg = "register_file_sink check!";
	let extra_log = dir.path().join("extra.log");
	logger.register_file_sink(&extra_log).unwrap();
	logger.info(format_args!("{}", msg)).unwrap();
	drop(logger);

	let text = fs::read_to_string(&extra_log).unwrap();
	assert!(text.ends_with(&format!("{}\n", msg)));
	assert_eq!(text.matches('\n').count(), 1);

	let boot = fs::read_to_string(&boot_log).unwrap();
	assert_eq!(boot.lines().count(), 2);
	assert!(boot.contains("Test Log"));
	assert!(boot.contains(msg));
}

#[test]
fn register_file_sink_reports_open_failure() {
	let dir = tempfile::tempdir().unwrap();
	let logger = Logger::init(quiet_config()).unwrap();

	let missing = dir.path().join("no-such-dir").join("x.log");
	assert_eq!(logger.register_file_sink(&missing), Err(LogError::Open));
	assert!(!logger.can_emit());
}

#[test]
fn default_init_registers_stdout_and_shuts_down_clean() {
	let logger = Logger::init(LoggerConfig::default()).unwrap();
	assert!(logger.can_emit());

	logger.shutdown();
	assert!(!logger.can_emit());
	// drop runs shutdown again; must stay a no-op
}

#[test]
fn concurrent_emits_never_interleave_within_a_line() {
	const WRITERS: u8 = 8;
	const LINES_EACH: usize = 50;

	let logger = Arc::new(Logger::init(quiet_config()).unwrap());
	let buffer = MemorySink::new();
	logger
		.register_sink(
			Box::new(buffer.clone()),
			SinkFlags::PRINT_MSG | SinkFlags::PRINT_ENDL | SinkFlags::DONT_CLOSE
		)
		.unwrap();

	let mut handles = Vec::new();
	for i in 0..WRITERS {
		let logger = Arc::clone(&logger);
		handles.push(thread::spawn(move || {
			let label = char::from(b'a' + i);
			for _ in 0..LINES_EACH {
				logger.emit(None, "T", format_args!("{}", label)).unwrap();
			}
		}));
	}
	for handle in handles {
		handle.join().unwrap();
	}

	let text = String::from_utf8(buffer.contents()).unwrap();
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines.len(), WRITERS as usize * LINES_EACH);
	for line in &lines {
		assert_eq!(line.len(), 1, "interleaved line: {:?}", line);
	}
	for i in 0..WRITERS {
		let label = char::from(b'a' + i).to_string();
		assert_eq!(
			lines.iter().filter(|l| **l == label).count(),
			LINES_EACH
		);
	}
}

#[test]
fn borrowed_sink_survives_teardown() {
	let logger = Logger::init(quiet_config()).unwrap();
	let buffer = MemorySink::new();
	logger
		.register_sink(
			Box::new(buffer.clone()),
			SinkFlags::PRINT_MSG | SinkFlags::PRINT_ENDL | SinkFlags::DONT_CLOSE
		)
		.unwrap();

	logger.emit(None, "T", format_args!("kept")).unwrap();
	drop(logger);

	// The registry released its clone, ours still reads the bytes.
	assert_eq!(buffer.contents(), b"kept\n");
}
