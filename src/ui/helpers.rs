//! Helper functions for UI rendering
//!
//! Formatting of ages, domains and widths.

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthChar;

/// "3 hours ago" style age of a unix timestamp relative to `now`.
pub fn format_age(time: i64, now: DateTime<Utc>) -> String {
    let Some(then) = DateTime::from_timestamp(time, 0) else {
        return String::new();
    };
    let elapsed = now.signed_duration_since(then);

    let (count, unit) = if elapsed.num_days() >= 365 {
        (elapsed.num_days() / 365, "year")
    } else if elapsed.num_days() >= 30 {
        (elapsed.num_days() / 30, "month")
    } else if elapsed.num_days() >= 1 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() >= 1 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() >= 1 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// Host of `url` without a leading `www.`.
pub fn domain_of(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// Truncate `s` to at most `max_width` terminal columns, ending in "…" if
/// anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// "1 comment" / "N comments".
pub fn plural(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
