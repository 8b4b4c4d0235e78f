pub mod comorbidity;
pub mod config;
pub mod engine;
pub mod knowledge;
pub mod models;
pub mod personalization;
pub mod scoring;
pub mod severity;

pub use engine::{TriageEngine, TriageError, TriageReport, TriageRequest};

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` wins over the default filter.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} v{} tracing initialized", config::APP_NAME, config::APP_VERSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
