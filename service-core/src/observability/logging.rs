use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global JSON log subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when set. Calling this twice
/// is harmless: the second install attempt is ignored.
pub fn init_tracing(service_name: &str, log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init();

    match result {
        Ok(()) => tracing::info!(service = service_name, "Tracing initialized"),
        Err(e) => eprintln!(
            "Tracing for service '{}' already initialized: {}",
            service_name, e
        ),
    }
}
