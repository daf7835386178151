//! Formatting helpers for presenting chat and profile values.

use time::{macros::format_description, Date, OffsetDateTime, UtcOffset};

/// `HH:MM` in the given offset, e.g. `14:05`.
pub fn format_clock(ts: OffsetDateTime, offset: UtcOffset) -> String {
    ts.to_offset(offset)
        .format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "--:--".to_string())
}

/// Integer with thousands separators, e.g. `1337` -> `1,337`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short numeric date, month first: `1/15/2024`.
pub fn format_short_date(date: Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}

/// First character of a display name, or `?` when it is blank.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, offset};

    #[test]
    fn clock_uses_offset() {
        let ts = datetime!(2024-01-15 13:05 UTC);
        assert_eq!(format_clock(ts, UtcOffset::UTC), "13:05");
        assert_eq!(format_clock(ts, offset!(+2)), "15:05");
    }

    #[test]
    fn count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1337), "1,337");
        assert_eq!(format_count(1_200_000), "1,200,000");
    }

    #[test]
    fn short_date_is_month_first() {
        assert_eq!(format_short_date(date!(2024 - 01 - 15)), "1/15/2024");
    }

    #[test]
    fn initial_falls_back_for_blank_names() {
        assert_eq!(initial("MortySmith137"), "M");
        assert_eq!(initial("   "), "?");
        assert_eq!(initial(""), "?");
    }
}
