use std::str::FromStr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn setup_logging(log_level: &str, json_format: bool) {
    let filter = EnvFilter::from_str(log_level.trim()).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries the lineup, so logs go to stderr
    if json_format {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_current_span(false);
        subscriber.with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact();
        subscriber.with(fmt_layer).init();
    }

    tracing::debug!(
        "Logging initialized (filter: {}, format: {})",
        log_level.trim(),
        if json_format { "json" } else { "compact" }
    );
}
