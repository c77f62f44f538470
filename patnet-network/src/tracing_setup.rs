//! Tracing initialization.
//!
//! One subscriber per process. The first call picks the output format;
//! later calls report the format already active instead of switching.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "PATNET_LOG";
const FORMAT_ENV: &str = "PATNET_LOG_FORMAT";
const DEFAULT_DIRECTIVE: &str = "patnet=info";

/// Output format of the patnet subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines with target, thread, file and line.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// `PATNET_LOG_FORMAT=json` selects JSON; anything else is text.
    pub fn from_env() -> Self {
        match std::env::var(FORMAT_ENV) {
            Ok(v) if v.trim().eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// `None` when a subscriber from the host application was already set.
static ACTIVE: OnceLock<Option<LogFormat>> = OnceLock::new();

/// Install the patnet subscriber in the format named by
/// `PATNET_LOG_FORMAT`.
///
/// `PATNET_LOG` holds per-crate levels, e.g.
/// `PATNET_LOG=patnet_identity=debug,patnet_edges=warn`, falling back to
/// `patnet=info`.
pub fn init_tracing() -> Option<LogFormat> {
    init_tracing_with(LogFormat::from_env())
}

/// Install the patnet subscriber emitting JSON lines.
pub fn init_json_tracing() -> Option<LogFormat> {
    init_tracing_with(LogFormat::Json)
}

/// Install the patnet subscriber in `format`. Returns the format actually
/// active, which differs from `format` when an earlier call won.
pub fn init_tracing_with(format: LogFormat) -> Option<LogFormat> {
    let active = *ACTIVE.get_or_init(|| install(format).then_some(format));
    if let Some(current) = active.filter(|&current| current != format) {
        tracing::warn!(
            requested = ?format,
            active = ?current,
            "tracing already initialized; format unchanged"
        );
    }
    active
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn install(format: LogFormat) -> bool {
    let registry = tracing_subscriber::registry().with(env_filter());
    let installed = match format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .try_init(),
    };
    installed.is_ok()
}
