use regex::Regex;
use std::sync::OnceLock;

fn duration_regex() -> &'static Regex {
    static DURATION_REGEX: OnceLock<Regex> = OnceLock::new();
    DURATION_REGEX.get_or_init(|| {
        Regex::new(r"^(?:(\d+):(\d{1,2})|(\d+)):(\d{2})$").expect("duration pattern is valid")
    })
}

/// 将展示用的时长（`5:32`、`123:45`、`01:02:03`）解析为秒数
///
/// 无法识别的格式或超出 `u64` 范围时返回 `None`
pub fn parse_duration(value: &str) -> Option<u64> {
    let captures = duration_regex().captures(value.trim())?;

    let (hours, minutes): (u64, u64) = match (captures.get(1), captures.get(2)) {
        (Some(h), Some(m)) => (h.as_str().parse().ok()?, m.as_str().parse().ok()?),
        // 没有小时部分时分钟数不设上限
        _ => (0, captures.get(3)?.as_str().parse().ok()?),
    };
    let seconds: u64 = captures.get(4)?.as_str().parse().ok()?;

    if seconds >= 60 || (captures.get(1).is_some() && minutes >= 60) {
        return None;
    }

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// 格式化时长为 HH:MM:SS
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("5:32"), Some(332));
        assert_eq!(parse_duration("12:18"), Some(738));
        assert_eq!(parse_duration("01:02:03"), Some(3723));
        assert_eq!(parse_duration(" 0:07 "), Some(7));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("five minutes"), None);
        assert_eq!(parse_duration("3:75"), None);
        assert_eq!(parse_duration("1:75:00"), None);
    }

    #[test]
    fn test_parse_duration_long_minutes() {
        assert_eq!(parse_duration("123:45"), Some(7425));
        assert_eq!(parse_duration("100:00"), Some(6000));
        // 有小时部分时分钟仍需小于60
        assert_eq!(parse_duration("1:123:45"), None);
    }

    #[test]
    fn test_parse_duration_overflow() {
        assert_eq!(parse_duration("9999999999999999:00:00"), None);
        assert_eq!(parse_duration("99999999999999999999:00"), None);
        assert_eq!(parse_duration("5124095576030431:00:15"), Some(u64::MAX));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(61), "00:01:01");
        assert_eq!(format_duration(3661), "01:01:01");
    }
}
