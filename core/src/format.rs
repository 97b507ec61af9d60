use regex::Regex;
use std::sync::OnceLock;

/// Placeholder shown for absent or unrenderable values
pub const NOT_AVAILABLE: &str = "N/A";

/// C0/C1 control characters plus the Unicode replacement character,
/// which the upstream text decoder leaks into malformed values
fn junk_chars() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"[\x00-\x1F\x7F-\x{9F}\x{FFFD}]").expect("Failed to compile regex")
    })
}

/// Formats a raw textual value for display
///
/// Pure and total: every input maps to a display string.
///
/// 1. Absent value -> `"N/A"`.
/// 2. Control characters and U+FFFD are stripped, surrounding whitespace
///    trimmed; an empty result -> `"N/A"`.
/// 3. `DA` values of exactly eight characters render as `YYYY-MM-DD`;
///    `TM` values of six or more render their first six characters as
///    `HH:MM:SS` (fractional seconds are dropped for display). Values
///    not matching the expected shape pass through unchanged.
pub fn format_value(value: Option<&str>, vr: Option<&str>) -> String {
    let raw = match value {
        Some(raw) => raw,
        None => return NOT_AVAILABLE.to_string(),
    };

    let sanitized = junk_chars().replace_all(raw, "");
    let sanitized = sanitized.trim();
    if sanitized.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    match vr {
        Some("DA") if sanitized.len() == 8 && sanitized.is_ascii() => {
            format!(
                "{}-{}-{}",
                &sanitized[0..4],
                &sanitized[4..6],
                &sanitized[6..8]
            )
        }
        Some("TM") if sanitized.len() >= 6 && sanitized.is_ascii() => {
            format!(
                "{}:{}:{}",
                &sanitized[0..2],
                &sanitized[2..4],
                &sanitized[4..6]
            )
        }
        _ => sanitized.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("20230115", "DA", "2023-01-15")]
    #[case("143000", "TM", "14:30:00")]
    #[case("143000.123456", "TM", "14:30:00")]
    #[case("Smith^Jane", "PN", "Smith^Jane")]
    #[case("  CT  ", "CS", "CT")]
    fn test_vr_formatting(#[case] input: &str, #[case] vr: &str, #[case] expected: &str) {
        assert_eq!(format_value(Some(input), Some(vr)), expected);
    }

    #[rstest]
    #[case("2023011", "DA")] // seven chars, shape mismatch
    #[case("202301159", "DA")] // nine chars
    #[case("1430", "TM")] // too short for HHMMSS
    fn test_shape_mismatch_passes_through(#[case] input: &str, #[case] vr: &str) {
        assert_eq!(format_value(Some(input), Some(vr)), input);
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(format_value(None, Some("LO")), "N/A");
        assert_eq!(format_value(Some(""), Some("LO")), "N/A");
        assert_eq!(format_value(Some("   "), None), "N/A");
    }

    #[test]
    fn test_sanitization() {
        assert_eq!(format_value(Some("CT\u{0000}\u{001F}"), Some("CS")), "CT");
        assert_eq!(format_value(Some("\u{FFFD}MR\u{009F}"), Some("CS")), "MR");
        assert_eq!(format_value(Some("\u{0007}\u{FFFD}"), Some("LO")), "N/A");
    }

    #[test]
    fn test_no_vr_passes_through() {
        assert_eq!(format_value(Some("20230115"), None), "20230115");
    }
}
