use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single lines.
    Compact,
    /// JSON lines, for CI runs that collect the lint output.
    Json,
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "portfolio_catalog=debug,info"
    } else {
        "portfolio_catalog=info"
    }
}

fn base_layer<S>() -> tracing_subscriber::fmt::Layer<
    S,
    tracing_subscriber::fmt::format::DefaultFields,
    tracing_subscriber::fmt::format::Format,
    fn() -> std::io::Stderr,
> {
    tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr as fn() -> std::io::Stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
}

/// Logs go to stderr so `export` and `deploy` output stays pipeable. `RUST_LOG` wins over `verbose`.
pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // 只會啟用其中一種輸出格式
    let (compact, json) = match format {
        LogFormat::Compact => (Some(base_layer().compact()), None),
        LogFormat::Json => (None, Some(base_layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .init();
}
