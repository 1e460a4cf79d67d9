//! Display formatting for resource cards.

use chrono::{DateTime, TimeZone, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SIZE_UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Human-readable size with binary (1024) steps.
///
/// The value is rounded to `decimals` places and trailing zeros are dropped:
/// `1024 → "1 KB"`, `2500 → "2.44 KB"`, `0 → "0 Bytes"`.
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u128;
    while unit + 1 < SIZE_UNITS.len() && u128::from(bytes) >= divisor * 1024 {
        divisor *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / divisor as f64;
    let rounded = format!("{value:.decimals$}");
    let trimmed = if rounded.contains('.') {
        rounded.trim_end_matches('0').trim_end_matches('.')
    } else {
        rounded.as_str()
    };
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// Relative age of a unix timestamp, or its UTC date once a week old.
pub fn format_created_date(timestamp: i64, now: DateTime<Utc>) -> String {
    let elapsed = now.timestamp().saturating_sub(timestamp);

    if elapsed >= WEEK {
        return match Utc.timestamp_opt(timestamp, 0).single() {
            Some(created) => created.format("%Y-%m-%d").to_string(),
            None => String::new(),
        };
    }

    let (count, unit) = if elapsed >= DAY {
        (elapsed / DAY, "day")
    } else if elapsed >= HOUR {
        (elapsed / HOUR, "hour")
    } else if elapsed >= MINUTE {
        (elapsed / MINUTE, "min")
    } else {
        return "just now".to_string();
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

/// Younger than a week. Accented on cards.
pub fn is_recent(timestamp: i64, now: DateTime<Utc>) -> bool {
    now.timestamp().saturating_sub(timestamp) < WEEK
}

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
