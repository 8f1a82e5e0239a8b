//! Minute-of-day display formatting.

/// Format a minute count as zero-padded `"HH:MM"`.
///
/// Hours are NOT wrapped modulo 24: minute 1377 renders as `"22:57"`, and an
/// event running past midnight keeps counting (`1500` → `"25:00"`). Should
/// the hour component ever exceed two digits it widens rather than truncates.
pub fn format_minute(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}
