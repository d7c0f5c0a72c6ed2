//! Game-clock string helpers.
//!
//! Clock values travel as `m:ss` strings typed by the scorekeeper. The
//! clock counts down, so a drive that starts at "15:00" and ends at
//! "12:34" lasted 2:26.

/// Parse an `m:ss` clock string into total seconds. Returns `None` for
/// anything that is not exactly two numeric fields separated by a colon.
pub fn parse_clock(text: &str) -> Option<u32> {
    let mut parts = text.split(':');
    let minutes = parts.next()?.parse::<u32>().ok()?;
    let seconds = parts.next()?.parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(minutes * 60 + seconds)
}

/// Format total seconds as `m:ss`.
pub fn format_clock(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Elapsed possession between two countdown clock readings, clamped at
/// zero. `None` when either reading fails to parse.
pub fn possession_between(start: &str, end: &str) -> Option<String> {
    let start_seconds = parse_clock(start)?;
    let end_seconds = parse_clock(end)?;
    Some(format_clock(start_seconds.saturating_sub(end_seconds)))
}

/// Normalize a free-form digits entry into a clock string: "43" becomes
/// "0:43", "835" becomes "8:35". Digits beyond the first four are
/// dropped; non-digits are stripped first.
pub fn format_clock_input(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return "0:00".to_string();
    }

    let digits = if digits.len() > 4 { &digits[..4] } else { digits.as_str() };
    if digits.len() <= 2 {
        format!("0:{:0>2}", digits)
    } else {
        let (minutes, seconds) = digits.split_at(digits.len() - 2);
        format!("{}:{}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("15:00"), Some(900));
        assert_eq!(parse_clock("0:43"), Some(43));
        assert_eq!(parse_clock("12:34"), Some(754));
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("15"), None);
        assert_eq!(parse_clock("a:b"), None);
        assert_eq!(parse_clock("1:2:3"), None);
        assert_eq!(parse_clock("-1:30"), None);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(146), "2:26");
        assert_eq!(format_clock(900), "15:00");
    }

    #[test]
    fn test_possession_between() {
        assert_eq!(possession_between("15:00", "12:34").as_deref(), Some("2:26"));
        // Clock readings out of order clamp to zero.
        assert_eq!(possession_between("2:00", "5:00").as_deref(), Some("0:00"));
        assert_eq!(possession_between("15:00", "garbage"), None);
        assert_eq!(possession_between("junk", "12:34"), None);
    }

    #[test]
    fn test_format_clock_input() {
        assert_eq!(format_clock_input(""), "0:00");
        assert_eq!(format_clock_input("4"), "0:04");
        assert_eq!(format_clock_input("43"), "0:43");
        assert_eq!(format_clock_input("835"), "8:35");
        assert_eq!(format_clock_input("1234"), "12:34");
        assert_eq!(format_clock_input("123456"), "12:34");
        assert_eq!(format_clock_input("8m35"), "8:35");
    }
}
