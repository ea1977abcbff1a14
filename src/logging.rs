use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keeps the non-blocking file writer alive; dropping it flushes and stops
/// file logging.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

pub fn init_tracing(log_level: &str) -> Option<FileLogGuard> {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_target(true);

    let file_logs = std::env::var("ENABLE_FILE_LOGS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    if file_logs {
        let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string());
        match std::fs::create_dir_all(&log_dir) {
            Ok(()) => {
                let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "adaptive.log");
                let (file_writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .with_target(true);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(stdout_layer)
                    .with(file_layer)
                    .init();

                return Some(FileLogGuard { _guard: guard });
            }
            Err(err) => {
                eprintln!("failed to create log directory {log_dir}: {err}");
            }
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .init();

    None
}
