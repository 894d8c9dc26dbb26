//! Logging bridge for par-case.
//!
//! Routes the `log` facade to standard error. Off by default so the success
//! path only ever prints the converted word on stdout.
//!
//! Level precedence:
//! - `--log-level` CLI flag
//! - `RUST_LOG` environment variable (a bare level name, e.g. `debug`)
//! - off

use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Stderr logger installed once per process.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{}",
            format_line(
                &get_timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_line(
    timestamp: &str,
    level: log::Level,
    target: &str,
    args: &std::fmt::Arguments<'_>,
) -> String {
    format!("[{}] [{:<5}] [{}] {}", timestamp, level, target, args)
}

/// Parse a `RUST_LOG`-style value. Only bare level names are understood;
/// anything else is ignored.
pub fn level_from_env_value(value: &str) -> Option<LevelFilter> {
    value.trim().parse::<LevelFilter>().ok()
}

/// Resolve the effective level from the CLI override and `RUST_LOG`.
pub fn resolve_level(cli_level: Option<LevelFilter>) -> LevelFilter {
    cli_level
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|v| level_from_env_value(&v))
        })
        .unwrap_or(LevelFilter::Off)
}

/// Install the stderr logger. Safe to call more than once; only the first
/// call takes effect.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let level = resolve_level(cli_level);
    let logger = LOGGER.get_or_init(|| StderrLogger { level });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}
