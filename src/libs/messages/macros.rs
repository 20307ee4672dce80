//! Convenient macros for application messaging and logging.
//!
//! The macros route every user-facing message through one of two sinks:
//!
//! - **Normal mode**: plain `println!` / `eprintln!`, so output stays clean
//!   for users and scripts.
//! - **Debug mode**: `tracing` events, so messages interleave with the
//!   diagnostic spans emitted while loading and saving the store.
//!
//! Debug mode is on when either `TASK_CLI_DEBUG` or `RUST_LOG` is set. The
//! check is done once and cached.
//!
//! ```text
//! msg_info!(..) ──▶ is_debug_mode()? ──yes──▶ tracing::info!
//!                                    └─no───▶ println!
//! ```
//!
//! ## Macros
//!
//! - **`msg_print!`**: plain line
//! - **`msg_success!`**: confirmation with ✅ prefix
//! - **`msg_info!`**: informational line with ℹ️ prefix
//! - **`msg_error!`**: `Error: ...` on stderr
//! - **`msg_debug!`**: only emitted in debug mode
//!
//! ```rust
//! use task_tracker::{msg_info, msg_success};
//! use task_tracker::libs::messages::Message;
//!
//! msg_success!(Message::TaskAdded(1));
//! msg_info!(Message::NoTasks);
//! ```

use std::sync::OnceLock;

/// Environment variable that switches on debug output.
pub const DEBUG_ENV: &str = "TASK_CLI_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching.
///
/// Debug mode is considered enabled if either `TASK_CLI_DEBUG` or `RUST_LOG`
/// is present in the environment when this is first called.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message with automatic debug mode routing.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
///
/// ```text
/// ✅ Task added successfully (ID: 1)
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message as `Error: <message>` to stderr.
///
/// In debug mode the message becomes a `tracing::error!` event instead.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("Error: {}", $msg);
        } else {
            eprintln!("Error: {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
///
/// Used for outcomes that are not errors, like an empty store.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Emits a debug message. Silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
