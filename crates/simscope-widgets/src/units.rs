#![forbid(unsafe_code)]

//! Number formatting for the summary strip.

use std::time::Duration;

const KILO: f64 = 1024.0;
const MEGA: f64 = 1_024_000.0;

/// Scale a byte count to kB, or to MB above ten megabytes.
pub fn format_memory(bytes: usize) -> (f64, &'static str) {
    let bytes = bytes as f64;
    if bytes <= 10.0 * MEGA {
        (bytes / KILO, "kB")
    } else {
        (bytes / MEGA, "MB")
    }
}

/// Elapsed time rounded to whole seconds: "0s", "45s", "2m5s", "1h0m30s".
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = (elapsed + Duration::from_millis(500)).as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_units() {
        assert_eq!(format_memory(2048), (2.0, "kB"));
        assert_eq!(format_memory(10 * 1_024_000), (10_000.0, "kB"));
        assert_eq!(format_memory(20 * 1_024_000), (20.0, "MB"));
    }

    #[test]
    fn elapsed_rounding() {
        assert_eq!(format_elapsed(Duration::ZERO), "0s");
        assert_eq!(format_elapsed(Duration::from_millis(1499)), "1s");
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "2s");
        assert_eq!(format_elapsed(Duration::from_secs(125)), "2m5s");
        assert_eq!(format_elapsed(Duration::from_secs(3630)), "1h0m30s");
    }
}
