use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialise logging. With `debug` the default level is `debug` and can be
/// overridden via `RUST_LOG`; otherwise `info` is forced.
///
/// Console output goes to stderr because stdout carries the selected
/// coordinate. When `file` is given the log is also appended there.
pub fn init(debug: bool, file: Option<PathBuf>) {
    let level = if debug { "debug" } else { "info" };
    let filter = || {
        if debug {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
        } else {
            EnvFilter::new(level)
        }
    };

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter());

    let file_layer = file.and_then(|path| {
        let dir = path.parent().map(PathBuf::from).unwrap_or_default();
        let name = path.file_name()?.to_owned();
        let appender = tracing_appender::rolling::never(dir, name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(filter()),
        )
    });

    let _ = tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init();
}
