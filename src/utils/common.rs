use regex::Regex;
use std::sync::OnceLock;

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// 辅助函数：格式化文件大小
pub fn format_size(bytes: u64) -> String {
    if bytes >= GB {
        format!("{:.2} GB", (bytes as f64) / (GB as f64))
    } else if bytes >= MB {
        format!("{:.2} MB", (bytes as f64) / (MB as f64))
    } else if bytes >= KB {
        format!("{:.2} KB", (bytes as f64) / (KB as f64))
    } else {
        format!("{} B", bytes)
    }
}

fn size_regex() -> &'static Regex {
    static SIZE_REGEX: OnceLock<Regex> = OnceLock::new();
    SIZE_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(B|KB|MB|GB)$").expect("size pattern is valid")
    })
}

/// 辅助函数：解析 `45.2 MB` 这类展示用的文件大小，返回字节数
///
/// 超出 `u64` 范围时返回 `None`
pub fn parse_size(value: &str) -> Option<u64> {
    let captures = size_regex().captures(value.trim())?;
    let amount: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = match captures.get(2)?.as_str().to_uppercase().as_str() {
        "B" => 1,
        "KB" => KB,
        "MB" => MB,
        "GB" => GB,
        _ => return None,
    };
    let bytes = (amount * unit as f64).round();
    if !bytes.is_finite() || bytes >= u64::MAX as f64 {
        return None;
    }
    Some(bytes as u64)
}
