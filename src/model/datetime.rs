// File: src/model/datetime.rs
//! Date and time recognition for free-form task text.
//!
//! Each extractor returns the recognized value together with the residual text
//! (first match removed, edges trimmed). When nothing is recognized the input
//! comes back unchanged.

use crate::model::patterns::{
    AT_TIME, DATE_DASH, DATE_SLASH, NEXT_WEEK, TIME_12H, TIME_24H, TODAY, TOMORROW, WEEKDAYS,
};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use regex::{Captures, Regex};

fn remove_first(re: &Regex, text: &str) -> String {
    re.replace(text, "").trim().to_string()
}

/// Finds the first date expression in `text`, resolving relative forms
/// against `today`.
pub fn extract_date(text: &str, today: NaiveDate) -> (Option<NaiveDate>, String) {
    if TODAY.is_match(text) {
        return (Some(today), remove_first(&TODAY, text));
    }
    if TOMORROW.is_match(text) {
        return (Some(today + Duration::days(1)), remove_first(&TOMORROW, text));
    }
    if NEXT_WEEK.is_match(text) {
        return (Some(today + Duration::days(7)), remove_first(&NEXT_WEEK, text));
    }

    for (day, re) in WEEKDAYS.iter() {
        if re.is_match(text) {
            return (Some(next_weekday(today, *day)), remove_first(re, text));
        }
    }

    // The first numeric form that is a real calendar date wins.
    for re in [&*DATE_SLASH, &*DATE_DASH] {
        let found = re
            .captures_iter(text)
            .find_map(|caps| numeric_date(&caps, today.year()).map(|d| (d, caps)));
        if let Some((date, caps)) = found {
            return (Some(date), splice_out(text, &caps));
        }
    }

    (None, text.to_string())
}

/// The next occurrence of `target` strictly after `from`.
/// On the target weekday itself this is one week out.
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let mut d = from + Duration::days(1);
    while d.weekday() != target {
        d += Duration::days(1);
    }
    d
}

fn numeric_date(caps: &Captures, current_year: i32) -> Option<NaiveDate> {
    let month = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let day = caps.get(2)?.as_str().parse::<u32>().ok()?;
    let year = match caps.get(3) {
        Some(y) if y.as_str().len() == 2 => 2000 + y.as_str().parse::<i32>().ok()?,
        Some(y) => y.as_str().parse::<i32>().ok()?,
        None => current_year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Finds one time of day in `text`.
///
/// `at H[:MM][am|pm]` is tried first (no period means am), then a bare
/// `H[:MM]am|pm`, then a 24-hour `HH:MM`.
pub fn extract_time(text: &str) -> (Option<NaiveTime>, String) {
    if let Some(caps) = AT_TIME.captures(text)
        && let Some(t) = twelve_hour(&caps, "am")
    {
        return (Some(t), splice_out(text, &caps));
    }

    if let Some(caps) = TIME_12H.captures(text)
        && let Some(t) = twelve_hour(&caps, "am")
    {
        return (Some(t), splice_out(text, &caps));
    }

    if let Some(caps) = TIME_24H.captures(text) {
        let h = caps[1].parse::<u32>().ok();
        let m = caps[2].parse::<u32>().ok();
        if let (Some(h), Some(m)) = (h, m)
            && let Some(t) = NaiveTime::from_hms_opt(h, m, 0)
        {
            return (Some(t), splice_out(text, &caps));
        }
    }

    (None, text.to_string())
}

fn twelve_hour(caps: &Captures, default_period: &str) -> Option<NaiveTime> {
    let hour = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let minute = caps.get(2).map_or(Some(0), |m| m.as_str().parse::<u32>().ok())?;
    let period = caps
        .get(3)
        .map_or(default_period.to_string(), |p| p.as_str().to_lowercase());
    NaiveTime::from_hms_opt(to_24_hour(hour, &period), minute, 0)
}

/// Converts a 12-hour clock reading. Hours outside 1..=12 pass through so
/// `at 14` still reads as 14:00.
pub fn to_24_hour(hour: u32, period: &str) -> u32 {
    match period {
        "pm" if hour != 12 => hour + 12,
        "am" if hour == 12 => 0,
        _ => hour,
    }
}

fn splice_out(text: &str, caps: &Captures) -> String {
    let whole = caps.get(0).map_or(0..0, |m| m.range());
    format!("{}{}", &text[..whole.start], &text[whole.end..])
        .trim()
        .to_string()
}
