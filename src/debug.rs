//! Diagnostic logging for trueno-color.
//!
//! Off by default. Enabled with [`enable`] or by setting
//! `TRUENO_COLOR_DEBUG=1` and calling [`init_from_env`]. Output goes to
//! stderr and never influences computed values.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Environment variable read by [`init_from_env`].
pub const ENV_VAR: &str = "TRUENO_COLOR_DEBUG";

/// Global debug mode flag.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Start time stored as millis since UNIX epoch (atomic-safe).
static START_TIME_MS: AtomicU64 = AtomicU64::new(0);

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Enables debug mode globally.
pub fn enable() {
    START_TIME_MS.store(now_ms(), Ordering::SeqCst);
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disables debug mode globally.
pub fn disable() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Returns true if debug mode is enabled.
#[inline]
pub fn is_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Whether a `TRUENO_COLOR_DEBUG` value switches logging on.
///
/// Accepts `1`, `true`, `yes` and `on` (case-insensitive).
pub fn parse_switch(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Enables debug mode if [`ENV_VAR`] is set to a truthy value.
///
/// Returns the resulting state.
pub fn init_from_env() -> bool {
    if std::env::var(ENV_VAR).is_ok_and(|v| parse_switch(&v)) {
        enable();
    }
    is_enabled()
}

fn elapsed_ms() -> u64 {
    let start = START_TIME_MS.load(Ordering::Relaxed);
    if start == 0 {
        return 0;
    }
    now_ms().saturating_sub(start)
}

/// Debug log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Numeric fallbacks taken inside conversions
    Trace,
    /// Suspicious but accepted input
    Warn,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Warn => "WARN",
        }
    }

    fn color_code(self) -> &'static str {
        match self {
            Level::Trace => "\x1b[90m", // Gray
            Level::Warn => "\x1b[33m",  // Yellow
        }
    }
}

fn format_line(elapsed: u64, level: Level, component: &str, message: &str) -> String {
    // Format: [+0000ms] [LEVEL] [component] message
    format!(
        "[+{:04}ms] {}[{:5}]\x1b[0m [{}] {}",
        elapsed,
        level.color_code(),
        level.as_str(),
        component,
        message
    )
}

/// Logs a message to stderr if debug mode is enabled.
pub fn log(level: Level, component: &str, message: &str) {
    let _ = log_to(&mut io::stderr().lock(), level, component, message);
}

/// Writes one log line to `out` if debug mode is enabled.
///
/// Returns whether a line was written.
pub fn log_to(out: &mut impl Write, level: Level, component: &str, message: &str) -> io::Result<bool> {
    if !is_enabled() {
        return Ok(false);
    }

    let line = format_line(elapsed_ms(), level, component, message);
    writeln!(out, "{line}")?;
    Ok(true)
}

/// Logs with format arguments. Arguments are only formatted when enabled.
#[macro_export]
macro_rules! debug_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debug::is_enabled() {
            $crate::debug::log($level, $component, &format!($($arg)*));
        }
    };
}

/// Convenience macro for trace level.
#[macro_export]
macro_rules! trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Trace, $component, $($arg)*)
    };
}

/// Convenience macro for warn level.
#[macro_export]
macro_rules! warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Warn, $component, $($arg)*)
    };
}
