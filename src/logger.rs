use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, Sink, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger};

use crate::config::{Config, Log, LogLevel};

const KEPT_LOG_FILES: usize = 60;

impl LogLevel {
    pub fn severity(self) -> Level {
        match self {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

pub fn default_log_location() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("Postlist")
        .join("log")
        .join("server.log")
}

fn console_sink(stream: StdStream, filter: LevelFilter) -> spdlog::Result<Arc<dyn Sink>> {
    let sink = StdStreamSink::builder()
        .std_stream(stream)
        .level_filter(filter)
        .build()?;
    Ok(Arc::new(sink))
}

/// One daily file plus, when asked for, warnings on stderr and the rest on stdout.
fn log_sinks(log: &Log) -> spdlog::Result<Vec<Arc<dyn Sink>>> {
    let location = log.location.clone().unwrap_or_else(default_log_location);
    let daily: Arc<dyn Sink> = Arc::new(RotatingFileSink::builder()
        .base_path(location)
        .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
        .max_files(KEPT_LOG_FILES)
        .rotate_on_open(false)
        .build()?);

    let mut sinks = vec![daily];
    if log.log_to_console {
        sinks.push(console_sink(StdStream::Stdout, LevelFilter::MoreVerbose(Level::Warn))?);
        sinks.push(console_sink(StdStream::Stderr, LevelFilter::MoreSevereEqual(Level::Warn))?);
    }
    Ok(sinks)
}

/// Without a `[log]` section the default console logger stays in place.
pub fn configure_logger(config: &Config) -> spdlog::Result<()> {
    let Some(ref log) = config.log else {
        return Ok(());
    };

    let logger = Arc::new(Logger::builder().sinks(log_sinks(log)?).build()?);
    logger.set_level_filter(LevelFilter::MoreSevereEqual(log.level.severity()));
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_period(Some(Duration::from_secs(2)));

    spdlog::set_default_logger(logger);
    Ok(())
}
