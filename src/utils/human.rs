//! Human-readable formatting for durations, byte counts, and rates.
//!
//! These are pure functions with bucketed precision rules: the unit and the
//! number of digits shown depend on the magnitude of the value, so the
//! rendered text stays compact at every scale.

use std::time::Duration;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const KILO: f64 = 1024.0;

/// Format a duration with magnitude-dependent precision.
///
/// Sub-millisecond durations collapse to `0s`. Below one second the value
/// is shown in whole milliseconds, below one minute as seconds with
/// zero-padded milliseconds, below one hour as minutes with zero-padded
/// seconds, and from one hour on as hours and minutes.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use headway::utils::human;
///
/// assert_eq!(human::duration(Duration::from_secs(61)), "1.01m");
/// ```
pub fn duration(d: Duration) -> String {
    let millis = d.as_millis();
    if millis < 1 {
        return "0s".to_string();
    }
    if millis < 1000 {
        return format!("{millis}ms");
    }
    let secs = d.as_secs();
    if secs < 60 {
        return format!("{}.{:03}s", secs, d.subsec_millis());
    }
    if secs < 3600 {
        return format!("{}.{:02}m", secs / 60, secs % 60);
    }
    format!("{}h{:02}m", secs / 3600, (secs % 3600) / 60)
}

/// Format a byte count in base-1024 tiers.
///
/// Values below 1024 are shown as whole bytes; larger values are scaled to
/// the smallest tier that keeps them below the next threshold and shown
/// with two decimal places. TB is the catch-all ceiling.
///
/// # Example
///
/// ```rust
/// use headway::utils::human;
///
/// assert_eq!(human::size(2048), "2.00KB");
/// ```
pub fn size(n: i64) -> String {
    bytes(n as f64)
}

/// Format a per-second byte rate.
///
/// Same tiers as [`size`], with a `/s` suffix.
pub fn rate(bytes_per_sec: f64) -> String {
    format!("{}/s", bytes(bytes_per_sec))
}

fn bytes(value: f64) -> String {
    if value < KILO {
        return format!("{}B", value as i64);
    }
    let mut scaled = value;
    let mut tier = 0;
    while scaled >= KILO && tier < UNITS.len() - 1 {
        scaled /= KILO;
        tier += 1;
    }
    format!("{:.2}{}", scaled, UNITS[tier])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_buckets() {
        assert_eq!(duration(Duration::from_micros(500)), "0s");
        assert_eq!(duration(Duration::from_millis(1)), "1ms");
        assert_eq!(duration(Duration::from_millis(999)), "999ms");
        assert_eq!(duration(Duration::from_secs(1)), "1.000s");
        assert_eq!(duration(Duration::from_millis(1500)), "1.500s");
        assert_eq!(duration(Duration::from_secs(59)), "59.000s");
        assert_eq!(duration(Duration::from_secs(61)), "1.01m");
        assert_eq!(duration(Duration::from_secs(3599)), "59.59m");
        assert_eq!(duration(Duration::from_secs(3661)), "1h01m");
        assert_eq!(duration(Duration::from_secs(90061)), "25h01m");
    }

    #[test]
    fn test_size_tiers() {
        assert_eq!(size(0), "0B");
        assert_eq!(size(512), "512B");
        assert_eq!(size(1023), "1023B");
        assert_eq!(size(1024), "1.00KB");
        assert_eq!(size(2048), "2.00KB");
        assert_eq!(size(1_048_576), "1.00MB");
        assert_eq!(size(5 * 1024 * 1024 * 1024), "5.00GB");
        // TB is the ceiling: anything larger stays in TB.
        assert_eq!(size(1024i64.pow(4) * 2000), "2000.00TB");
    }

    #[test]
    fn test_rate_suffix() {
        assert_eq!(rate(512.0), "512B/s");
        assert_eq!(rate(2048.0), "2.00KB/s");
        assert_eq!(rate(0.0), "0B/s");
    }
}
