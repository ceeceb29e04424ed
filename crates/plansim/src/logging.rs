use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a `--log-level` value
#[must_use]
pub fn default_filter(level: &str) -> String {
    format!("plansim={level},plansim_core=warn")
}

/// Initialize logging to stderr so stdout carries only the JSON report.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = default_filter(level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!(filter = %default_filter, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter("debug"), "plansim=debug,plansim_core=warn");
    }
}
