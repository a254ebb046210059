//! ANSI color table for console output.
//!
//! Colors are applied unconditionally. This is a developer convenience
//! wrapper; it does not probe terminal capabilities.

pub const RESET: &str = "\x1b[0m";
pub const BRIGHT: &str = "\x1b[1m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";

pub fn paint(color: &str, message: &str) -> String {
    format!("{color}{message}{RESET}")
}

/// Print a line wrapped in the given color.
pub fn cprintln(color: &str, message: &str) {
    println!("{}", paint(color, message));
}
