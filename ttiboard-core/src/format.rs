//! Value formatting shared by the terminal views and the CLI.

/// Milliseconds as seconds with two decimals: `1234.0` → `"1.23s"`.
pub fn format_seconds(ms: f64) -> String {
    format!("{:.2}s", ms / 1000.0)
}

/// Milliseconds with no decimals: `812.4` → `"812ms"`.
pub fn format_ms(ms: f64) -> String {
    format!("{:.0}ms", ms)
}

/// A `[0, 1]` ratio as a whole percentage.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_use_two_decimals() {
        assert_eq!(format_seconds(1234.0), "1.23s");
        assert_eq!(format_seconds(0.0), "0.00s");
        assert_eq!(format_seconds(999.0), "1.00s");
    }

    #[test]
    fn millis_and_ratio() {
        assert_eq!(format_ms(812.4), "812ms");
        assert_eq!(format_ratio(0.75), "75%");
        assert_eq!(format_ratio(0.0), "0%");
    }
}
