//! Human-readable (Japanese) schedule descriptions.
//!
//! `describe` assumes the expression shape was already validated; it does
//! no range checking of its own and can phrase numerically invalid fields
//! verbatim. Callers wanting semantic guarantees run `validate` first.

use crate::field::LIST_RE;

/// Sentinel returned when the input does not split into 5 fields.
const INVALID: &str = "Invalid cron expression";

const DAY_NAMES: [&str; 7] = ["日曜", "月曜", "火曜", "水曜", "木曜", "金曜", "土曜"];

/// Weekday name for a numeric day-of-week value. 7 is the POSIX alias
/// for Sunday and maps to the same name as 0.
fn weekday_name(n: u32) -> Option<&'static str> {
    match n {
        0..=6 => Some(DAY_NAMES[n as usize]),
        7 => Some(DAY_NAMES[0]),
        _ => None,
    }
}

/// Phrase for the day-of-week field, checked in order: wildcard, the two
/// recognized literal shortcuts, single value, list, verbatim fallback.
fn weekday_phrase(value: &str) -> String {
    if value == "*" {
        return "毎日".to_string();
    }
    // Only these literal spellings get the shortcut names.
    if value == "1-5" {
        return "平日".to_string();
    }
    if value == "0,6" || value == "6,0" {
        return "週末".to_string();
    }

    if value.len() == 1 && value.chars().all(|c| c.is_ascii_digit()) {
        if let Some(name) = value.parse().ok().and_then(weekday_name) {
            return name.to_string();
        }
    }

    if LIST_RE.is_match(value) {
        return value
            .split(',')
            .map(|d| match d.parse().ok().and_then(weekday_name) {
                Some(name) => name.to_string(),
                // No table entry (8, 9, ...) — keep the digit as written.
                None => d.to_string(),
            })
            .collect::<Vec<_>>()
            .join("、");
    }

    value.to_string()
}

/// Describe a 5-field cron expression in plain language.
///
/// Time phrase first (minute/hour), then the day phrase. A wildcard
/// minute with a concrete hour deliberately yields no time phrase, and
/// the day-of-week branch takes priority over the month branch whenever
/// the day field is a wildcard.
pub fn describe(expression: &str) -> String {
    let parts: Vec<&str> = expression.split_whitespace().collect();
    if parts.len() != 5 {
        return INVALID.to_string();
    }
    let (minute, hour, day, month, day_of_week) =
        (parts[0], parts[1], parts[2], parts[3], parts[4]);

    let mut description = String::new();

    if minute == "*" && hour == "*" {
        description.push_str("毎分");
    } else if minute != "*" && hour == "*" {
        description.push_str(&format!("毎時{minute}分"));
    } else if minute != "*" && hour != "*" {
        description.push_str(&format!("{hour}:{minute:0>2}"));
    }

    if day == "*" && month == "*" && day_of_week == "*" {
        description.push_str(" に毎日実行");
    } else if day != "*" && month == "*" && day_of_week == "*" {
        description.push_str(&format!(" に毎月{day}日実行"));
    } else if day_of_week != "*" && day == "*" {
        description.push_str(&format!(" に{}実行", weekday_phrase(day_of_week)));
    } else if month != "*" {
        description.push_str(&format!(" に{month}月実行"));
    }

    description
}
