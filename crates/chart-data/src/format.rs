// File: crates/chart-data/src/format.rs
// Summary: Deterministic axis and tooltip value formatting per measurement type.

use crate::units::{Unit, ValueType};

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60_000.0;
const HOUR_MS: f64 = 3_600_000.0;
const DAY_MS: f64 = 86_400_000.0;
const WEEK_MS: f64 = 604_800_000.0;

/// Format one value for axis ticks and tooltip rows.
///
/// `value` is expected in `unit` where one applies. Same input always
/// yields the same string.
pub fn format_value(value: f64, value_type: ValueType, unit: Option<Unit>) -> String {
    match value_type {
        ValueType::Duration => {
            let factor = match unit {
                Some(Unit::Duration(u)) => u.factor(),
                _ => 1.0,
            };
            format_duration(value * factor)
        }
        ValueType::Size => {
            let factor = match unit {
                Some(Unit::Size(u)) => u.factor(),
                _ => 1.0,
            };
            format_size(value * factor)
        }
        ValueType::Rate => {
            let suffix = match unit {
                Some(Unit::Rate(u)) => u.suffix(),
                _ => "/s",
            };
            format!("{}{}", abbreviated(value), suffix)
        }
        ValueType::Percentage => format!("{}%", fixed(value * 100.0, 1)),
        ValueType::Number => abbreviated(value),
    }
}

/// Duration in milliseconds, rendered in the largest unit of magnitude >= 1.
fn format_duration(ms: f64) -> String {
    if ms == 0.0 {
        return "0ms".to_string();
    }
    let abs = ms.abs();
    let (scaled, suffix) = if abs >= WEEK_MS {
        (ms / WEEK_MS, "wk")
    } else if abs >= DAY_MS {
        (ms / DAY_MS, "d")
    } else if abs >= HOUR_MS {
        (ms / HOUR_MS, "hr")
    } else if abs >= MINUTE_MS {
        (ms / MINUTE_MS, "min")
    } else if abs >= SECOND_MS {
        (ms / SECOND_MS, "s")
    } else if abs >= 1.0 {
        (ms, "ms")
    } else if abs >= 1e-3 {
        (ms * 1e3, "\u{b5}s")
    } else {
        (ms * 1e6, "ns")
    };
    format!("{}{}", fixed(scaled, 2), suffix)
}

/// Size in bytes, rendered with base-1000 suffixes.
fn format_size(bytes: f64) -> String {
    let abs = bytes.abs();
    let (scaled, suffix) = if abs >= 1e15 {
        (bytes / 1e15, "PB")
    } else if abs >= 1e12 {
        (bytes / 1e12, "TB")
    } else if abs >= 1e9 {
        (bytes / 1e9, "GB")
    } else if abs >= 1e6 {
        (bytes / 1e6, "MB")
    } else if abs >= 1e3 {
        (bytes / 1e3, "KB")
    } else {
        (bytes, "B")
    };
    format!("{} {}", fixed(scaled, 1), suffix)
}

/// Abbreviated notation for plain numbers: k / m / b at 1e3 / 1e6 / 1e9.
fn abbreviated(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{}b", fixed(value / 1e9, 1))
    } else if abs >= 1e6 {
        format!("{}m", fixed(value / 1e6, 1))
    } else if abs >= 1e3 {
        format!("{}k", fixed(value / 1e3, 1))
    } else {
        fixed(value, 2)
    }
}

/// Fixed-precision rendering with trailing zeros (and a bare dot) trimmed.
fn fixed(value: f64, places: usize) -> String {
    let s = format!("{value:.places$}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}
