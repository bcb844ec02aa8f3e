// Mon Oct 19 2026 - Alex

pub mod logging;
pub mod string;

pub use logging::LoggingUtils;
pub use string::StringUtils;

use std::time::Duration;

pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs_f64();

    if total_secs < 0.001 {
        format!("{}µs", duration.as_micros())
    } else if total_secs < 1.0 {
        format!("{:.2}ms", total_secs * 1000.0)
    } else {
        format!("{:.2}s", total_secs)
    }
}
