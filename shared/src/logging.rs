//! Shared logging utilities for consistent tracing across the service

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{error, info};

/// Part of the service an event originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// HTTP listener and router lifecycle
    Server,
    /// Request handlers
    Api,
    /// Catalog data access
    Store,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Server => write!(f, "server"),
            Component::Api => write!(f, "api"),
            Component::Store => write!(f, "store"),
        }
    }
}

/// Default filter directives for a base level, e.g. `info`
pub fn filter_directives(base_level: &str) -> String {
    format!(
        "jewel_webserver={base_level},jewel_shared={base_level},tower_http={base_level},axum={base_level}"
    )
}

/// Initialize the stdout tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the per-crate directives from
/// [`filter_directives`] are used with `log_level` (default `info`).
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(base_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for component-aware info logging
#[macro_export]
macro_rules! component_info {
    ($component:expr, $($arg:tt)*) => {
        tracing::info!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware warning logging
#[macro_export]
macro_rules! component_warn {
    ($component:expr, $($arg:tt)*) => {
        tracing::warn!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware error logging
#[macro_export]
macro_rules! component_error {
    ($component:expr, $($arg:tt)*) => {
        tracing::error!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware debug logging
#[macro_export]
macro_rules! component_debug {
    ($component:expr, $($arg:tt)*) => {
        tracing::debug!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: Component, details: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: Component, reason: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: Component, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = %component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: Component, message: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_display() {
        assert_eq!(Component::Server.to_string(), "server");
        assert_eq!(Component::Api.to_string(), "api");
        assert_eq!(Component::Store.to_string(), "store");
    }

    #[test]
    fn test_filter_directives_cover_both_crates() {
        let directives = filter_directives("debug");
        assert!(directives.contains("jewel_webserver=debug"));
        assert!(directives.contains("jewel_shared=debug"));
        assert!(tracing_subscriber::EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn test_timestamp_format() {
        let stamp = format_timestamp();
        assert_eq!(stamp.len(), "12:34:56.789".len());
        assert_eq!(stamp.matches(':').count(), 2);
    }
}
