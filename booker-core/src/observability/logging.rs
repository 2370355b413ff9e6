use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install the global subscriber (only once).
///
/// `RUST_LOG` takes precedence over `log_level`. Output goes through the test
/// writer so cargo captures it per test.
pub fn init_tracing(log_level: &str) {
    INIT.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

        let result = tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .with_test_writer(),
            )
            .try_init();

        if let Err(e) = result {
            eprintln!("Tracing subscriber already installed: {}", e);
        }
    });
}
