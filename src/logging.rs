// src/logging.rs
use tracing_subscriber::{
    EnvFilter, fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::context::Verbosity;

const VERBOSE_DIRECTIVES: &str = "warn,modern_cli=debug,modern_cli_usecase=debug,modern_cli_infra=debug";

/// Install the process-wide subscriber. Logs always go to stderr.
pub fn init_logging(verbosity: Verbosity) {
    let filter = if verbosity.is_verbose() {
        EnvFilter::new(VERBOSE_DIRECTIVES)
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(ChronoLocal::new("%H:%M:%S".to_string()))
                .with_target(verbosity.is_verbose())
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
