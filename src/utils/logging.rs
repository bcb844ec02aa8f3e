// Mon Oct 19 2026 - Alex

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs the colored stderr logger. `RUST_LOG`, when set, takes over via env_logger.
    pub fn init_logger(level: LevelFilter, use_color: bool) {
        if std::env::var_os("RUST_LOG").is_some() {
            env_logger::try_init().ok();
            return;
        }

        let logger = Box::new(ColoredLogger::new(level, use_color));
        log::set_boxed_logger(logger).ok();
        log::set_max_level(level);
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }

    pub fn level_from_verbosity(verbosity: usize) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

struct ColoredLogger {
    level: LevelFilter,
    use_color: bool,
}

impl ColoredLogger {
    fn new(level: LevelFilter, use_color: bool) -> Self {
        Self {
            level,
            use_color,
        }
    }

    fn format_level(&self, level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }
}

impl Log for ColoredLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if self.use_color {
            let target = format!("[{}]", record.target());
            eprintln!("{} {} {}", self.format_level(record.level()), target.dimmed(), record.args());
        } else {
            eprintln!("{:5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

pub struct ScopedTimer {
    name: String,
    start: std::time::Instant,
}

impl ScopedTimer {
    pub fn new(name: &str) -> Self {
        log::debug!("[TIMER] {} started", name);
        Self {
            name: name.to_string(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        log::debug!("[TIMER] {} took {}", self.name, super::format_duration(self.start.elapsed()));
    }
}

pub fn scoped_timer(name: &str) -> ScopedTimer {
    ScopedTimer::new(name)
}
