// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Russian date phrase parsing.
//!
//! Questions spell dates as "28 ноября 2025" (day, genitive month name,
//! four-digit year). The parser assembles `YYYY-MM-DD` and refuses anything
//! it cannot fully match, rather than returning a partial or guessed values.

use std::sync::LazyLock;

use regex::Regex;

/// The twelve genitive month names, in calendar order.
const MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\s+([а-яё]+)\s+(\d{4})$").expect("date regex must compile")
});

static DATE_SCAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})\s+([а-яё]+)\s+(\d{4})").expect("date scan regex must compile")
});

/// Zero-padded numeric month for a genitive month name, if known.
fn month_number(name: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == name).map(|i| i + 1)
}

/// Parses a full "D месяц YYYY" phrase into `YYYY-MM-DD`.
///
/// The whole input must match: a day, a known month name, and a four-digit
/// year. Anything else (unknown month, missing component, trailing text)
/// yields `None`.
pub fn parse_date(text: &str) -> Option<String> {
    let caps = DATE_RE.captures(text.trim())?;
    let day: u32 = caps[1].parse().ok()?;
    if day == 0 || day > 31 {
        return None;
    }
    let month = month_number(&caps[2])?;
    let year = &caps[3];
    Some(format!("{year}-{month:02}-{day:02}"))
}

/// Scans free text for date phrases, in order of appearance.
///
/// Digit-month-year triples whose month name is unknown are skipped rather
/// than guessed.
pub fn find_dates(text: &str) -> Vec<String> {
    DATE_SCAN_RE
        .captures_iter(text)
        .filter_map(|caps| parse_date(caps.get(0).map(|m| m.as_str())?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_twelve_months_round_trip() {
        let expected = [
            "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
        ];
        for (name, num) in MONTHS.iter().zip(expected) {
            let phrase = format!("5 {name} 2025");
            assert_eq!(parse_date(&phrase).as_deref(), Some(format!("2025-{num}-05").as_str()));
        }
    }

    #[test]
    fn pads_single_digit_days() {
        assert_eq!(parse_date("1 ноября 2025").as_deref(), Some("2025-11-01"));
        assert_eq!(parse_date("28 ноября 2025").as_deref(), Some("2025-11-28"));
    }

    #[test]
    fn rejects_missing_components() {
        assert_eq!(parse_date("ноября 2025"), None); // no day
        assert_eq!(parse_date("5 2025"), None); // no month
        assert_eq!(parse_date("5 ноября"), None); // no year
        assert_eq!(parse_date("5 ноября 25"), None); // two-digit year
    }

    #[test]
    fn rejects_unknown_month_names() {
        assert_eq!(parse_date("5 мартобря 2025"), None);
        assert_eq!(parse_date("5 november 2025"), None);
    }

    #[test]
    fn rejects_out_of_range_days() {
        assert_eq!(parse_date("0 ноября 2025"), None);
        assert_eq!(parse_date("32 ноября 2025"), None);
    }

    #[test]
    fn rejects_trailing_text() {
        assert_eq!(parse_date("5 ноября 2025 года ровно"), None);
    }

    #[test]
    fn scan_finds_dates_in_order() {
        let text = "с 1 ноября 2025 по 5 ноября 2025 включительно";
        assert_eq!(find_dates(text), vec!["2025-11-01", "2025-11-05"]);
    }

    #[test]
    fn scan_skips_unknown_months() {
        let text = "с 1 мартобря 2025 по 5 ноября 2025";
        assert_eq!(find_dates(text), vec!["2025-11-05"]);
    }
}
