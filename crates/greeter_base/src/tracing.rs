use crate::error::{GreeterError, GreeterResult};
pub use tracing::instrument;
pub use tracing::{debug, error, info, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the global subscriber: env filter, fmt layer on stderr and the error layer.
///
/// Stdout is left alone so greetings can be piped. Fails if a subscriber is already set.
pub fn init_tracing() -> GreeterResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|err| {
            Box::new(GreeterError::message(format!(
                "failed to install tracing subscriber: {err}"
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_error() {
        // the first call may lose the race against other tests, the second never succeeds
        let _ = init_tracing();
        let err = init_tracing().unwrap_err();
        assert!(
            err.to_string()
                .starts_with("failed to install tracing subscriber")
        );
    }
}
