// Natural-language task input: dates, times, priorities and reminder phrases.
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Weekday};
use taskwise::model::parser::final_cleanup;
use taskwise::model::{Priority, extract_date, parse_task, parse_task_on};

// A Wednesday.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

#[test]
fn test_buy_groceries_tomorrow() {
    let out = parse_task_on("Buy groceries tomorrow", today());
    assert_eq!(out.draft.due_date, Some(today() + Duration::days(1)));
    assert_eq!(out.draft.clean_title, "Buy groceries");
    assert_eq!(out.suggestions.len(), 1);
    assert!(out.suggestions[0].contains("Due date"));
}

#[test]
fn test_priority_keyword_leaves_tag_in_title() {
    let out = parse_task_on("Call dentist urgent #health", today());
    assert_eq!(out.draft.priority, Some(Priority::High));
    assert_eq!(out.draft.clean_title, "Call dentist #health");
    assert_eq!(out.draft.tags, None);
}

#[test]
fn test_plain_text_is_only_cleaned() {
    for input in [
        "Water the plants",
        "  Fix   the   fence!! ",
        "...read chapter 4",
        "",
        "Return library books",
    ] {
        let out = parse_task_on(input, today());
        assert_eq!(out.draft.clean_title, final_cleanup(input), "input: {input:?}");
        assert!(out.suggestions.is_empty(), "input: {input:?}");
        assert_eq!(out.draft.due_date, None);
        assert_eq!(out.draft.priority, None);
    }
}

#[test]
fn test_current_weekday_rolls_a_full_week() {
    let t = today();
    assert_eq!(t.weekday(), Weekday::Wed);
    let (d, rest) = extract_date("gym wednesday", t);
    assert_eq!(d, Some(t + Duration::days(7)));
    assert_eq!(rest, "gym");
}

#[test]
fn test_next_weekday_same_as_bare() {
    let a = parse_task_on("Dinner next friday", today());
    let b = parse_task_on("Dinner friday", today());
    assert_eq!(a.draft.due_date, b.draft.due_date);
    assert_eq!(a.draft.clean_title, "Dinner");
}

#[test]
fn test_date_with_time() {
    let out = parse_task_on("Dentist 11/3 at 4:30pm", today());
    assert_eq!(out.draft.due_date, NaiveDate::from_ymd_opt(2026, 11, 3));
    assert!(out.draft.has_time_specified);
    assert_eq!(out.draft.due_time, NaiveTime::from_hms_opt(16, 30, 0));
    assert_eq!(out.draft.clean_title, "Dentist");
    assert_eq!(out.suggestions[1], "⏰ Time set to: 16:30");
}

#[test]
fn test_time_without_date_stays_in_title() {
    let out = parse_task_on("Standup 9:15", today());
    assert_eq!(out.draft.clean_title, "Standup 9:15");
    assert!(!out.draft.has_time_specified);
    assert_eq!(out.draft.due_time, None);
}

#[test]
fn test_reminder_phrase_after_other_extractions() {
    let out = parse_task_on("Don't forget to pay rent tomorrow asap", today());
    assert_eq!(out.draft.clean_title, "pay rent");
    assert_eq!(out.draft.priority, Some(Priority::High));
    assert_eq!(out.suggestions.len(), 3);
    assert_eq!(out.suggestions[2], "🔔 Reminder language detected and cleaned");
}

#[test]
fn test_low_priority_phrase() {
    let out = parse_task_on("Clean garage when I can", today());
    assert_eq!(out.draft.priority, Some(Priority::Low));
    assert_eq!(out.draft.clean_title, "Clean garage");
}

#[test]
fn test_today_is_first_in_precedence() {
    let out = parse_task_on("Move monday meeting to today", today());
    assert_eq!(out.draft.due_date, Some(today()));
    assert_eq!(out.draft.clean_title, "Move monday meeting to");
}

#[test]
fn test_skips_impossible_date_for_a_later_one() {
    let out = parse_task_on("ratio 2/30 due 3/4", today());
    assert_eq!(out.draft.due_date, NaiveDate::from_ymd_opt(2026, 3, 4));
    assert_eq!(out.draft.clean_title, "ratio 2/30 due");
}

#[test]
fn test_two_digit_year() {
    let out = parse_task_on("Renew passport 3/1/28", today());
    assert_eq!(out.draft.due_date, NaiveDate::from_ymd_opt(2028, 3, 1));
    assert_eq!(out.draft.clean_title, "Renew passport");
}

#[test]
fn test_local_clock_entry_point() {
    let before = Local::now().date_naive();
    let out = parse_task("Submit form today");
    let due = out.draft.due_date.unwrap();
    // The clock may cross midnight between the two reads.
    assert!(due == before || due == before + Duration::days(1), "due: {due}");
}
