//! Formatting utilities for dates, initials, and counters.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO date string ("2025-03-11") as "Mar 11, 2025".
///
/// Anything that doesn't parse is returned unchanged; the backend stores the
/// date exactly as typed into the creation form.
pub fn format_date(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return date.to_string();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return date.to_string();
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return date.to_string();
    }
    format!("{} {}, {}", MONTHS[month - 1], day, year)
}

/// Initials for an avatar fallback: first letter of the first two words.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Seconds since the Unix epoch.
///
/// Browser clock on wasm; the system clock elsewhere (unit tests).
fn now_secs() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() / 1000.0
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// Whole days elapsed since a Unix timestamp, clamped at zero.
pub fn days_since(start_unix: f64) -> u32 {
    let days = (now_secs() - start_unix) / 86_400.0;
    days.max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-11"), "Mar 11, 2025");
        assert_eq!(format_date("2025-01-05"), "Jan 5, 2025");
        // Unparseable input passes through untouched.
        assert_eq!(format_date("last week"), "last week");
        assert_eq!(format_date("2025-13-01"), "2025-13-01");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("jean-luc piccard the third"), "JP");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_days_since_clamps_future_dates() {
        // A start date far in the future must not underflow.
        assert_eq!(days_since(now_secs() + 1_000_000.0), 0);
    }
}
