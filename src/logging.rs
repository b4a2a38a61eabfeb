//! # Tracing Module
//!
//! Environment-aware console logging using the tracing ecosystem.
//!
//! The admin layer itself only emits `tracing` events and spans; installing a
//! subscriber is the host's choice. Hosts without their own subscriber can
//! call [`init_console_only`], which is idempotent and never panics when a
//! global subscriber already exists.
//!
//! ## Configuration
//!
//! ```bash
//! # Explicit filter wins
//! export RUST_LOG=federation_admin=trace
//!
//! # Otherwise the level follows the environment name
//! export FEDERATION_ADMIN_ENV=production   # info
//! ```

use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize console logging for the environment named in the process
/// environment (`FEDERATION_ADMIN_ENV`, then `APP_ENV`).
pub fn init_console_only() {
    init_for_environment(&get_environment());
}

/// Initialize console logging for an explicit environment name, typically
/// [`AdminConfig::environment`](crate::config::AdminConfig::environment).
///
/// Safe to call repeatedly and from hosts that already installed a
/// subscriber; only the first call has any effect.
pub fn init_for_environment(environment: &str) {
    TRACING_INITIALIZED.get_or_init(|| {
        let filter = std::env::var("RUST_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| get_log_level(environment).to_string());

        let use_ansi = IsTerminal::is_terminal(&std::io::stdout());

        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_level(true)
            .with_ansi(use_ansi)
            .with_filter(EnvFilter::new(&filter));

        let subscriber = tracing_subscriber::registry().with(console_layer);

        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        } else {
            tracing::info!(
                environment = %environment,
                filter = %filter,
                ansi_colors = use_ansi,
                "Console logging initialized"
            );
        }
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("FEDERATION_ADMIN_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "test" => "debug",
        "development" => "debug",
        "production" => "info",
        _ => "debug",
    }
}
