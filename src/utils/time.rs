//! Duration parsing and formatting for timer input.

use crate::errors::{AppError, AppResult};

/// Parse a duration given as user input, returning whole seconds.
///
/// Accepted forms:
/// - `25`        → minutes (bare numbers are minutes)
/// - `90s`, `25m`, `2h` → single unit
/// - `1h30m`, `10m30s`  → combined units
/// - `1:30`      → H:MM
pub fn parse_duration(input: &str) -> AppResult<i64> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AppError::InvalidDuration(input.to_string()));
    }

    if let Some((h, m)) = s.split_once(':') {
        let hours: i64 = h
            .parse()
            .map_err(|_| AppError::InvalidDuration(input.to_string()))?;
        let minutes: i64 = m
            .parse()
            .map_err(|_| AppError::InvalidDuration(input.to_string()))?;
        if !(0..60).contains(&minutes) {
            return Err(AppError::InvalidDuration(input.to_string()));
        }
        let secs = hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60))
            .ok_or_else(|| AppError::InvalidDuration(input.to_string()))?;
        return checked(secs, input);
    }

    if s.chars().all(|c| c.is_ascii_digit()) {
        let minutes: i64 = s
            .parse()
            .map_err(|_| AppError::InvalidDuration(input.to_string()))?;
        let secs = minutes
            .checked_mul(60)
            .ok_or_else(|| AppError::InvalidDuration(input.to_string()))?;
        return checked(secs, input);
    }

    // Unit-suffixed segments: e.g. "1h30m", "90s"
    let mut total = 0i64;
    let mut num = String::new();
    for c in s.chars() {
        if c.is_ascii_digit() {
            num.push(c);
            continue;
        }
        let value: i64 = num
            .parse()
            .map_err(|_| AppError::InvalidDuration(input.to_string()))?;
        num.clear();
        let factor = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(AppError::InvalidDuration(input.to_string())),
        };
        total = value
            .checked_mul(factor)
            .and_then(|part| total.checked_add(part))
            .ok_or_else(|| AppError::InvalidDuration(input.to_string()))?;
    }
    if !num.is_empty() {
        // trailing digits without a unit, e.g. "1h30"
        return Err(AppError::InvalidDuration(input.to_string()));
    }
    checked(total, input)
}

fn checked(secs: i64, input: &str) -> AppResult<i64> {
    if secs > 0 {
        Ok(secs)
    } else {
        Err(AppError::InvalidDuration(input.to_string()))
    }
}

/// Human-readable duration, e.g. "1h 05m" or "45s".
pub fn format_duration(secs: i64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else if minutes > 0 && seconds > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", seconds)
    }
}
