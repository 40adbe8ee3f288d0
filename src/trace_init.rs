#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install the global subscriber. With `log_dir`, events go to
/// `<log_dir>/t9-trace.jsonl` as JSON lines; otherwise to stderr.
///
/// `RUST_LOG` overrides the default `t9_engine=info` filter.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("t9_engine=info"));

        match log_dir {
            Some(dir) => {
                // Blocking writer: short CLI runs exit before a background
                // flush would happen.
                let file_appender = tracing_appender::rolling::never(dir, "t9-trace.jsonl");

                tracing_subscriber::fmt()
                    .json()
                    .with_writer(file_appender)
                    .with_target(true)
                    .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) {}
