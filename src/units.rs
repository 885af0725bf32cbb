// SPDX-License-Identifier: MPL-2.0

//! Human-readable time and byte formatting

/// Format an elapsed time in seconds as a readable string
///
/// Durations of an hour or more render as `H:MM:SS`, durations of a minute
/// or more as `"N minutes and M seconds"`, anything shorter with two
/// decimal places.
pub fn formatted_time(elapsed: f64) -> String {
    if elapsed >= 3600.0 {
        let total = elapsed as u64;
        format!(
            "{}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    } else if elapsed >= 60.0 {
        format!(
            "{:.0} minutes and {:.0} seconds",
            (elapsed / 60.0).floor(),
            elapsed % 60.0
        )
    } else {
        format!("{:.2} seconds", elapsed)
    }
}

/// Format a byte count with the largest binary unit of magnitude >= 1
///
/// Raw bytes print as an integer; larger units keep one decimal place.
pub fn formatted_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} kB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_time_seconds() {
        assert_eq!(formatted_time(45.0), "45.00 seconds");
        assert_eq!(formatted_time(0.0), "0.00 seconds");
        assert_eq!(formatted_time(59.99), "59.99 seconds");
    }

    #[test]
    fn test_formatted_time_minutes() {
        assert_eq!(formatted_time(125.0), "2 minutes and 5 seconds");
        assert_eq!(formatted_time(60.0), "1 minutes and 0 seconds");
    }

    #[test]
    fn test_formatted_time_hours() {
        assert_eq!(formatted_time(3725.0), "1:02:05");
        assert_eq!(formatted_time(3600.0), "1:00:00");
        assert_eq!(formatted_time(7325.0), "2:02:05");
    }

    #[test]
    fn test_formatted_bytes() {
        assert_eq!(formatted_bytes(500), "500 bytes");
        assert_eq!(formatted_bytes(2048), "2.0 kB");
        assert_eq!(formatted_bytes(3 * 1024 * 1024), "3.0 MB");
        assert_eq!(formatted_bytes(5 * 1024 * 1024 * 1024), "5.0 GB");
        assert_eq!(formatted_bytes(2 * 1024 * 1024 * 1024 * 1024), "2.0 TB");
    }

    #[test]
    fn test_formatted_bytes_boundaries() {
        assert_eq!(formatted_bytes(1023), "1023 bytes");
        assert_eq!(formatted_bytes(1024), "1.0 kB");
        assert_eq!(formatted_bytes(1536), "1.5 kB");
    }
}
