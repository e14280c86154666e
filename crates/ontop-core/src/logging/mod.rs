use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for the `ontop` and `ontop_core` targets.
///
/// `RUST_LOG` is still honored for other targets.
pub fn log_directive(quiet: bool) -> &'static str {
    if quiet { "ontop=error" } else { "ontop=info" }
}

/// Install the JSON subscriber on stderr.
///
/// stdout stays reserved for command output (`list --json`, `config`), so
/// piping ontop never mixes log lines into results. Quiet mode keeps only
/// errors; the daemon's per-window debug events need `RUST_LOG=ontop=debug`.
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(log_directive(quiet).parse().expect("Invalid log directive")),
        )
        .init();
}
