// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Travel date extraction.
//!
//! Each strategy looks at the lowercased utterance on its own and either
//! produces a date or passes. [`resolve_date`] walks them in priority order
//! and falls back to tomorrow, so it always returns a date.

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

type Strategy = fn(&str, NaiveDate) -> Option<NaiveDate>;

/// Priority order matters: "tomorrow 7/8/25" is tomorrow.
const STRATEGIES: [(&str, Strategy); 4] = [
    ("relative", relative_keyword),
    ("numeric", numeric_date),
    ("month-name", month_name_date),
    ("day-month", bare_day_month),
];

// Full names are listed before abbreviations so "july" is never cut to "jul".
const MONTH_ALTERNATION: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec";

const MONTHS: [(&str, u32); 23] = [
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// Resolves the travel date mentioned in `utterance`, relative to `today`.
/// Defaults to tomorrow when nothing date-like is found.
pub fn resolve_date(utterance: &str, today: NaiveDate) -> NaiveDate {
    let text = utterance.to_lowercase();
    for (name, strategy) in STRATEGIES {
        if let Some(date) = strategy(&text, today) {
            log::debug!("[Dates] '{}' resolved by {} strategy to {}", utterance, name, date);
            return date;
        }
    }
    log::debug!("[Dates] No date expression in '{}', defaulting to tomorrow", utterance);
    tomorrow(today)
}

pub fn tomorrow(today: NaiveDate) -> NaiveDate {
    days_after(today, 1)
}

/// The Monday strictly after `today`: 1 to 7 days ahead, never today itself.
pub fn next_monday(today: NaiveDate) -> NaiveDate {
    let weekday = today.weekday().num_days_from_sunday();
    let ahead = match (8 - weekday) % 7 {
        0 => 7,
        n => n,
    };
    days_after(today, u64::from(ahead))
}

fn days_after(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}

pub fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, month)| month)
}

/// Two-digit years below 50 are 20xx, the rest 19xx.
fn expand_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.parse().ok()?;
    Some(match (raw.len(), year) {
        (2, y) if y < 50 => 2000 + y,
        (2, y) => 1900 + y,
        (_, y) => y,
    })
}

/// "tomorrow" (and its usual misspelling) or "next week ... monday".
pub fn relative_keyword(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    if text.contains("tomorrow") || text.contains("tommorow") {
        return Some(tomorrow(today));
    }
    if text.contains("next week") && text.contains("monday") {
        return Some(next_monday(today));
    }
    None
}

/// `D/M/Y` then `D-M-Y`, day first. Only the first match of each form is
/// considered, and it must be a real calendar date. The day may be glued to
/// the preceding word ("on7/8/2025").
pub fn numeric_date(text: &str, _today: NaiveDate) -> Option<NaiveDate> {
    static SLASH_RE: OnceLock<Regex> = OnceLock::new();
    static DASH_RE: OnceLock<Regex> = OnceLock::new();
    let slash_re = SLASH_RE
        .get_or_init(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})\b").unwrap());
    let dash_re =
        DASH_RE.get_or_init(|| Regex::new(r"(\d{1,2})-(\d{1,2})-(\d{4}|\d{2})\b").unwrap());

    [slash_re, dash_re].into_iter().find_map(|re| {
        let caps = re.captures(text)?;
        let day = caps[1].parse::<u32>().ok()?;
        let month = caps[2].parse::<u32>().ok()?;
        let year = expand_year(&caps[3])?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

/// `D/<month name>/Y`, e.g. "7/jul/25" or "7/july/2025".
pub fn month_name_date(text: &str, _today: NaiveDate) -> Option<NaiveDate> {
    static MONTH_NAME_RE: OnceLock<Regex> = OnceLock::new();
    let re = MONTH_NAME_RE.get_or_init(|| {
        Regex::new(&format!(
            r"(\d{{1,2}})/({})/(\d{{4}}|\d{{2}})\b",
            MONTH_ALTERNATION
        ))
        .unwrap()
    });

    let caps = re.captures(text)?;
    let day = caps[1].parse::<u32>().ok()?;
    let month = month_number(&caps[2])?;
    let year = expand_year(&caps[3])?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// "6 jul" or "july 6" with no year. The current year is assumed unless that
/// lands before today, in which case the date moves one year ahead.
pub fn bare_day_month(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    static DAY_MONTH_RE: OnceLock<Regex> = OnceLock::new();
    static MONTH_DAY_RE: OnceLock<Regex> = OnceLock::new();
    let day_month = DAY_MONTH_RE.get_or_init(|| {
        Regex::new(&format!(r"\b(\d{{1,2}})\s+({})\b", MONTH_ALTERNATION)).unwrap()
    });
    let month_day = MONTH_DAY_RE.get_or_init(|| {
        Regex::new(&format!(r"\b({})\s+(\d{{1,2}})\b", MONTH_ALTERNATION)).unwrap()
    });

    let day_first = day_month.captures(text).and_then(|caps| {
        let day = caps[1].parse::<u32>().ok()?;
        upcoming(day, month_number(&caps[2])?, today)
    });
    day_first.or_else(|| {
        month_day.captures(text).and_then(|caps| {
            let day = caps[2].parse::<u32>().ok()?;
            upcoming(day, month_number(&caps[1])?, today)
        })
    })
}

/// `day`/`month` in the current year, or the next one if already past or
/// not a date this year (29 February outside a leap year).
/// Assumes travel is never more than a year out.
fn upcoming(day: u32, month: u32, today: NaiveDate) -> Option<NaiveDate> {
    if !(1..=31).contains(&day) {
        return None;
    }
    match NaiveDate::from_ymd_opt(today.year(), month, day) {
        Some(this_year) if this_year >= today => Some(this_year),
        _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_tomorrow_and_misspelling() {
        let today = ymd(2025, 1, 10);
        assert_eq!(resolve_date("tomorrow", today), ymd(2025, 1, 11));
        assert_eq!(resolve_date("fly Tommorow please", today), ymd(2025, 1, 11));
    }

    #[test]
    fn test_tomorrow_crosses_year_end() {
        assert_eq!(resolve_date("tomorrow", ymd(2025, 12, 31)), ymd(2026, 1, 1));
    }

    #[test]
    fn test_next_week_monday_every_weekday() {
        let mut today = ymd(2025, 1, 5); // Sunday
        for _ in 0..14 {
            let got = resolve_date("next week monday", today);
            let ahead = (got - today).num_days();
            assert_eq!(got.weekday(), Weekday::Mon, "from {}", today);
            assert!((1..=7).contains(&ahead), "from {} got {} days", today, ahead);
            today = today.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_next_monday_from_monday_wraps_full_week() {
        assert_eq!(next_monday(ymd(2025, 1, 13)), ymd(2025, 1, 20));
        assert_eq!(next_monday(ymd(2025, 1, 12)), ymd(2025, 1, 13));
    }

    #[test]
    fn test_monday_alone_is_not_relative() {
        let today = ymd(2025, 1, 10);
        assert_eq!(relative_keyword("monday", today), None);
        assert_eq!(relative_keyword("next week", today), None);
    }

    #[test]
    fn test_numeric_two_digit_year() {
        let today = ymd(2025, 1, 10);
        assert_eq!(resolve_date("07/08/25", today), ymd(2025, 8, 7));
        assert_eq!(resolve_date("on 7/8/25 please", today), ymd(2025, 8, 7));
        assert_eq!(resolve_date("7-8-75", today), ymd(1975, 8, 7));
        assert_eq!(resolve_date("7-8-49", today), ymd(2049, 8, 7));
    }

    #[test]
    fn test_numeric_four_digit_year() {
        let today = ymd(2025, 1, 10);
        assert_eq!(resolve_date("flight on 15/3/2026", today), ymd(2026, 3, 15));
        assert_eq!(resolve_date("flight on 15-03-2026", today), ymd(2026, 3, 15));
    }

    #[test]
    fn test_numeric_slash_beats_dash() {
        let today = ymd(2025, 1, 10);
        assert_eq!(resolve_date("1-2-26 or 3/4/26", today), ymd(2026, 4, 3));
    }

    #[test]
    fn test_invalid_calendar_date_falls_through() {
        let today = ymd(2025, 1, 10);
        // 31 February is rejected; the bare "5 mar" is used instead.
        assert_eq!(resolve_date("31/02/25 or 5 mar", today), ymd(2025, 3, 5));
        // Nothing else usable: tomorrow.
        assert_eq!(resolve_date("31/02/25", today), ymd(2025, 1, 11));
    }

    #[test]
    fn test_three_digit_year_is_not_a_date() {
        assert_eq!(numeric_date("7/8/202", ymd(2025, 1, 10)), None);
    }

    #[test]
    fn test_month_name_formats() {
        let today = ymd(2025, 1, 10);
        assert_eq!(resolve_date("7/jul/25", today), ymd(2025, 7, 7));
        assert_eq!(resolve_date("7/July/2025", today), ymd(2025, 7, 7));
        assert_eq!(resolve_date("12/SEP/26", today), ymd(2026, 9, 12));
    }

    #[test]
    fn test_bare_day_month_rolls_over() {
        // After July 6: next year.
        assert_eq!(resolve_date("6 jul", ymd(2025, 8, 1)), ymd(2026, 7, 6));
        // Before July 6: this year.
        assert_eq!(resolve_date("6 jul", ymd(2025, 3, 1)), ymd(2025, 7, 6));
        // On the day itself the date is today, not a year away.
        assert_eq!(resolve_date("6 jul", ymd(2025, 7, 6)), ymd(2025, 7, 6));
    }

    #[test]
    fn test_leap_day_moves_to_next_leap_year() {
        assert_eq!(resolve_date("29 feb", ymd(2027, 6, 1)), ymd(2028, 2, 29));
        assert_eq!(resolve_date("fly on 29 feb", ymd(2027, 6, 1)), ymd(2028, 2, 29));
        // In a leap year before the day itself, the same year is kept.
        assert_eq!(resolve_date("feb 29", ymd(2028, 1, 15)), ymd(2028, 2, 29));
        // Past it in a leap year, next year has no 29 February.
        assert_eq!(bare_day_month("29 feb", ymd(2028, 3, 1)), None);
    }

    #[test]
    fn test_numeric_date_glued_to_word() {
        let today = ymd(2025, 1, 10);
        assert_eq!(
            resolve_date("book flight on7/8/2025 from delhi to goa", today),
            ymd(2025, 8, 7)
        );
        assert_eq!(resolve_date("on15-03-2026", today), ymd(2026, 3, 15));
        assert_eq!(resolve_date("leaving on7/jul/25", today), ymd(2025, 7, 7));
    }

    #[test]
    fn test_month_day_order() {
        let today = ymd(2025, 3, 1);
        assert_eq!(resolve_date("July 6", today), ymd(2025, 7, 6));
        assert_eq!(resolve_date("on december 25", today), ymd(2025, 12, 25));
        // Ordinal suffixes are outside the lexicon.
        assert_eq!(resolve_date("on december 25th", today), ymd(2025, 3, 2));
    }

    #[test]
    fn test_day_month_preferred_over_month_day() {
        // "5 june 10": day-month pattern is tried first.
        assert_eq!(resolve_date("5 june 10", ymd(2025, 3, 1)), ymd(2025, 6, 5));
    }

    #[test]
    fn test_bare_day_out_of_range_is_ignored() {
        assert_eq!(bare_day_month("0 jul", ymd(2025, 3, 1)), None);
        assert_eq!(bare_day_month("31 jun", ymd(2025, 3, 1)), None);
    }

    #[test]
    fn test_relative_beats_explicit_date() {
        let today = ymd(2025, 1, 10);
        assert_eq!(resolve_date("tomorrow, not 7/8/25", today), ymd(2025, 1, 11));
    }

    #[test]
    fn test_default_is_tomorrow() {
        let today = ymd(2025, 1, 10);
        assert_eq!(resolve_date("chennai to mumbai", today), ymd(2025, 1, 11));
        assert_eq!(resolve_date("", today), ymd(2025, 1, 11));
    }

    #[test]
    fn test_month_number_lexicon() {
        assert_eq!(month_number("Jan"), Some(1));
        assert_eq!(month_number("september"), Some(9));
        assert_eq!(month_number("may"), Some(5));
        assert_eq!(month_number("sept"), None);
    }
}
