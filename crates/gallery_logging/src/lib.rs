#![deny(missing_docs)]
//! Shared logging utilities for the gallery workspace.
//!
//! Every `gallery_*` macro forwards to the `log` facade and prefixes the
//! message with the current event-loop turn, so the order in which page
//! fetches resolve can be read back from the log.

use std::cell::Cell;

thread_local! {
    /// Event-loop turn counter for the current thread.
    static LOOP_TURN: Cell<u64> = const { Cell::new(0) };
}

/// Sets the event-loop turn for the current thread.
/// The application loop calls this once per processed message.
pub fn set_loop_turn(turn: u64) {
    LOOP_TURN.with(|v| v.set(turn));
}

/// Returns the event-loop turn for the current thread, 0 if never set.
pub fn current_loop_turn() -> u64 {
    LOOP_TURN.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! gallery_trace {
    ($($arg:tt)*) => {{
        log::trace!("[turn {}] {}", $crate::current_loop_turn(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! gallery_debug {
    ($($arg:tt)*) => {{
        log::debug!("[turn {}] {}", $crate::current_loop_turn(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! gallery_info {
    ($($arg:tt)*) => {{
        log::info!("[turn {}] {}", $crate::current_loop_turn(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! gallery_warn {
    ($($arg:tt)*) => {{
        log::warn!("[turn {}] {}", $crate::current_loop_turn(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! gallery_error {
    ($($arg:tt)*) => {{
        log::error!("[turn {}] {}", $crate::current_loop_turn(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
