use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs a JSON subscriber for CloudWatch. `RUST_LOG` overrides the
/// default filter; timestamps are left to the log ingestion side.
pub fn init_logging() -> Result<(), lambda_runtime::Error> {
    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_target(false)
        .without_time()
        .try_init()
}

fn log_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
