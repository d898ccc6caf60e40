// File: src/model/parser.rs
use crate::model::datetime::{extract_date, extract_time};
use crate::model::item::Priority;
use crate::model::patterns::{EDGE_NON_WORD, WHITESPACE_RUN};
use crate::model::phrases::{clean_reminder_phrase, extract_priority};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;
use std::fmt;

/// Structured result of reading one line of task text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedTaskDraft {
    pub clean_title: String,
    pub due_date: Option<NaiveDate>,
    /// The time of day found next to the date. Kept so callers can rebuild a
    /// full timestamp; `due_date` alone is day-granular.
    pub due_time: Option<NaiveTime>,
    pub has_time_specified: bool,
    pub priority: Option<Priority>,
    /// Never filled by the parser; tags come from the rest of the app.
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub draft: ParsedTaskDraft,
    pub suggestions: Vec<String>,
}

/// One recognized piece of the input, in the order it was peeled off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    DueDate(NaiveDate),
    Time(NaiveTime),
    Priority(Priority),
    Reminder,
}

impl fmt::Display for Extraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extraction::DueDate(d) => write!(f, "📅 Due date set to: {}", d.format("%a %b %-d, %Y")),
            Extraction::Time(t) => write!(f, "⏰ Time set to: {}", t.format("%H:%M")),
            Extraction::Priority(p) => write!(f, "⭐ Priority set to: {}", p),
            Extraction::Reminder => write!(f, "🔔 Reminder language detected and cleaned"),
        }
    }
}

/// Parses task text against the local calendar date.
pub fn parse_task(input: &str) -> ParseOutcome {
    parse_task_on(input, Local::now().date_naive())
}

/// Runs the extraction pipeline: date, time (only alongside a date),
/// priority, reminder phrase, then cleanup.
pub fn parse_task_on(input: &str, today: NaiveDate) -> ParseOutcome {
    let mut draft = ParsedTaskDraft::default();
    let mut events = Vec::new();
    let mut text = input.trim().to_string();

    let (date, rest) = extract_date(&text, today);
    if let Some(d) = date {
        draft.due_date = Some(d);
        text = rest;
        events.push(Extraction::DueDate(d));
    }

    if draft.due_date.is_some() {
        let (time, rest) = extract_time(&text);
        if let Some(t) = time {
            draft.due_time = Some(t);
            draft.has_time_specified = true;
            text = rest;
            events.push(Extraction::Time(t));
        }
    }

    let (priority, rest) = extract_priority(&text);
    if let Some(p) = priority {
        draft.priority = Some(p);
        text = rest;
        events.push(Extraction::Priority(p));
    }

    let (rest, was_reminder) = clean_reminder_phrase(&text);
    text = rest;
    if was_reminder {
        events.push(Extraction::Reminder);
    }

    draft.clean_title = final_cleanup(&text);

    log::debug!(
        "parse_task: {:?} -> {:?} ({} extraction(s))",
        input,
        draft.clean_title,
        events.len()
    );

    ParseOutcome {
        draft,
        suggestions: events.iter().map(ToString::to_string).collect(),
    }
}

/// Collapses whitespace runs, then strips non-word characters from both ends.
pub fn final_cleanup(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    EDGE_NON_WORD.replace_all(&collapsed, "").trim().to_string()
}
