//!
//! color.rs
//!
//! ANSI color vocabulary and the severity color bindings.
//!

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An ANSI terminal color, written to colorable sinks as a raw escape
/// sequence.
pub enum Color {
	Reset,
	Black,
	Red,
	Green,
	Yellow,
	Blue,
	Magenta,
	Cyan,
	White,
	BoldBlack,
	BoldRed,
	BoldGreen,
	BoldYellow,
	BoldBlue,
	BoldMagenta,
	BoldCyan,
	BoldWhite
}

/// Color bound to the `INFO` severity.
pub const INFO_COLOR: Color = Color::Cyan;
/// Color bound to the `WARN` severity.
pub const WARN_COLOR: Color = Color::Yellow;
/// Color bound to the `ERROR` severity.
pub const ERROR_COLOR: Color = Color::Red;

impl Color {
	/// The raw escape sequence for this color.
	pub const fn code(self) -> &'static str {
		match self {
			Color::Reset => "\x1b[0m",
			Color::Black => "\x1b[0;30m",
			Color::Red => "\x1b[0;31m",
			Color::Green => "\x1b[0;32m",
			Color::Yellow => "\x1b[0;33m",
			Color::Blue => "\x1b[0;34m",
			Color::Magenta => "\x1b[0;35m",
			Color::Cyan => "\x1b[0;36m",
			Color::White => "\x1b[0;37m",
			Color::BoldBlack => "\x1b[1;30m",
			Color::BoldRed => "\x1b[1;31m",
			Color::BoldGreen => "\x1b[1;32m",
			Color::BoldYellow => "\x1b[1;33m",
			Color::BoldBlue => "\x1b[1;34m",
			Color::BoldMagenta => "\x1b[1;35m",
			Color::BoldCyan => "\x1b[1;36m",
			Color::BoldWhite => "\x1b[1;37m"
		}
	}
}
