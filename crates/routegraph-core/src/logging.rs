use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", start_node = node.id());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Crates whose events the default filter lets through
const LOG_TARGETS: [&str; 2] = ["routegraph", "routegraph_core"];

/// Filter directive for the CLI flags.
///
/// A `--log-level` holding a full directive (anything with `=`) is used as
/// is; a bare level is applied to every crate in [`LOG_TARGETS`].
fn default_directive(verbose: bool, log_level: Option<&str>) -> String {
    let level = match (verbose, log_level) {
        (_, Some(directive)) if directive.contains('=') => return directive.to_string(),
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize structured logging on stderr.
///
/// `RUST_LOG`, then `ROUTEGRAPH_LOG`, win over the flags. Traversal output
/// goes to stdout, so log lines never mix with it.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("ROUTEGRAPH_LOG"))
        .or_else(|_| EnvFilter::try_new(default_directive(verbose, log_level)))?;

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
