//! Tracing initialization and span names.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Span for one entity's full assessment.
#[macro_export]
macro_rules! assess_span {
    ($entity_id:expr) => {
        tracing::info_span!("vigil.assess", entity_id = %$entity_id)
    };
}

/// Span for continuing a stored snapshot sequence.
#[macro_export]
macro_rules! resume_span {
    ($entity_id:expr, $history_len:expr) => {
        tracing::info_span!("vigil.resume", entity_id = %$entity_id, history = $history_len)
    };
}

/// Span for a parallel batch.
#[macro_export]
macro_rules! batch_span {
    ($entity_count:expr) => {
        tracing::info_span!("vigil.batch", entities = $entity_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ASSESS: &str = "vigil.assess";
    pub const RESUME: &str = "vigil.resume";
    pub const BATCH: &str = "vigil.batch";
}

/// Initialize the Vigil tracing/logging system.
///
/// Reads the `VIGIL_LOG` environment variable for per-module levels, e.g.
/// `VIGIL_LOG=vigil_posterior=debug,vigil_evidence=info`.
/// Falls back to `<crate>=<log_level>` for every vigil crate when unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("VIGIL_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        // The host application may already own the global subscriber.
        if let Err(err) = result {
            tracing::debug!(error = %err, "keeping existing global tracing subscriber");
        }
    });
}

fn default_directive(level: &str) -> String {
    ["vigil_core", "vigil_evidence", "vigil_posterior"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
