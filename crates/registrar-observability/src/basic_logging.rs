use registrar_config::LogConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at the configured level.
const REGISTRAR_TARGETS: [&str; 5] = [
    "registrar",
    "registrar_cli",
    "registrar_config",
    "registrar_core",
    "registrar_models",
];

/// Filter directives for `level`, e.g. `registrar=debug,registrar_cli=debug,...`.
pub fn default_directives(level: &str) -> String {
    REGISTRAR_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize console logging, plus a daily-rolling JSON file when `log_dir` is set.
///
/// # Configuration
///
/// - **Log Level**: `RUST_LOG` wins when set, otherwise `LogConfig::level` for the registrar crates
/// - **Console**: compact format on stderr, so stdout stays free for command output
/// - **File**: `registrar.json` under `LogConfig::log_dir`, one JSON object per event
pub fn init_console_logging(config: &LogConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let json_layer = config.log_dir.as_ref().map(|dir| {
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, "registrar.json");
        fmt::layer()
            .json()
            .with_writer(appender)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new(default_directives(&config.level)))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .try_init()?;

    Ok(())
}
