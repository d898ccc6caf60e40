// File: src/model/patterns.rs
//! Static keyword tables and compiled patterns shared by every parse.
//!
//! Everything here is built once per process and only ever read afterwards.
//! The extractors in `datetime` and `phrases`, the filter parser, the
//! suggestion engine and the suggestion applier all draw from these tables so
//! that what the autocomplete offers and what the parser understands stay in
//! one place.

use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid pattern {pattern:?}: {e}"))
}

// --- DATES ---

pub static TODAY: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\btoday\b"));
pub static TOMORROW: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\btomorrow\b"));
pub static NEXT_WEEK: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bnext\s+week\b"));

/// Weekday patterns in lookup order. `next` is accepted and ignored.
pub static WEEKDAYS: Lazy<Vec<(Weekday, Regex)>> = Lazy::new(|| {
    [
        (Weekday::Mon, "monday"),
        (Weekday::Tue, "tuesday"),
        (Weekday::Wed, "wednesday"),
        (Weekday::Thu, "thursday"),
        (Weekday::Fri, "friday"),
        (Weekday::Sat, "saturday"),
        (Weekday::Sun, "sunday"),
    ]
    .into_iter()
    .map(|(day, name)| (day, compile(&format!(r"(?i)\b(?:next\s+)?{name}\b"))))
    .collect()
});

pub static DATE_SLASH: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?\b"));
pub static DATE_DASH: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(\d{1,2})-(\d{1,2})(?:-(\d{2,4}))?\b"));

// --- TIMES ---

pub static AT_TIME: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\bat\s+(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\b"));
pub static TIME_12H: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)\b"));
pub static TIME_24H: Lazy<Regex> = Lazy::new(|| compile(r"\b(\d{1,2}):(\d{2})\b"));

// --- PRIORITY & REMINDERS ---

pub static HIGH_PRIORITY: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(?:urgent|important|asap|high priority|critical)\b"));
pub static MEDIUM_PRIORITY: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bmedium priority\b"));
pub static LOW_PRIORITY: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(?:low priority|when i can|sometime|eventually)\b"));

pub static REMINDER: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(?:remind me to|reminder to|don['’]t forget to)\b"));

// --- CLEANUP ---

pub static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| compile(r"\s+"));
pub static EDGE_NON_WORD: Lazy<Regex> = Lazy::new(|| compile(r"^\W+|\W+$"));

// --- FILTER DSL ---

pub const TAG_SIGIL: char = '#';

// --- SUGGESTION KEYWORDS ---

pub const PRIORITY_KEYWORDS: &[&str] = &[
    "urgent",
    "important",
    "asap",
    "critical",
    "high priority",
    "medium priority",
    "low priority",
    "normal",
    "moderate",
    "minor",
];

pub const TIME_KEYWORDS: &[&str] = &[
    "at 9am",
    "at 10am",
    "at 11am",
    "at 12pm",
    "at 1pm",
    "at 2pm",
    "at 3pm",
    "at 4pm",
    "at 5pm",
    "at 6pm",
    "at 7pm",
    "at 8pm",
    "morning",
    "afternoon",
    "evening",
    "noon",
    "midnight",
];

pub const DATE_KEYWORDS: &[&str] = &[
    "today",
    "tomorrow",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "next week",
    "this weekend",
    "next weekend",
    "next monday",
    "next tuesday",
    "next wednesday",
    "next thursday",
    "next friday",
    "next saturday",
    "next sunday",
];

pub const COMMON_TAGS: &[&str] = &[
    "#work",
    "#personal",
    "#shopping",
    "#health",
    "#finance",
    "#family",
    "#urgent",
    "#meeting",
    "#call",
    "#email",
    "#research",
    "#project",
    "#home",
    "#office",
    "#travel",
    "#study",
    "#exercise",
    "#appointment",
];

pub const PROJECT_KEYWORDS: &[&str] = &[
    "for work",
    "for personal",
    "for project",
    "work project",
    "side project",
    "team project",
    "client work",
];

/// Minimum length of the typed token before a table is consulted.
pub const MIN_DATE_TOKEN: usize = 1;
pub const MIN_TIME_TOKEN: usize = 1;
pub const MIN_PRIORITY_TOKEN: usize = 2;
pub const MIN_TAG_TOKEN: usize = 2;
pub const MIN_PROJECT_TOKEN: usize = 2;

/// A semantic cluster: if any trigger occurs anywhere in the input, the hints
/// are offered after the pattern-matched candidates.
pub struct ContextCluster {
    pub triggers: &'static [&'static str],
    pub hints: &'static [&'static str],
}

pub const CONTEXT_CLUSTERS: &[ContextCluster] = &[
    ContextCluster {
        triggers: &["meeting", "call", "interview"],
        hints: &["at 10am", "at 2pm", "at 3pm", "#meeting", "urgent"],
    },
    ContextCluster {
        triggers: &["buy", "shop", "pick up"],
        hints: &["#shopping", "#errands", "today", "tomorrow"],
    },
    ContextCluster {
        triggers: &["email", "report", "review"],
        hints: &["#work", "urgent", "today", "#office"],
    },
];

/// Builds a whole-word, case-insensitive alternation over a keyword table.
/// Longer keywords come first so `next monday` is consumed before `monday`.
fn keyword_alternation(keywords: &[&str]) -> Regex {
    let mut sorted: Vec<&str> = keywords.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    let body = sorted
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    compile(&format!(r"(?i)\b(?:{body})\b"))
}

pub static PRIORITY_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| keyword_alternation(PRIORITY_KEYWORDS));
pub static TIME_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| keyword_alternation(TIME_KEYWORDS));
pub static DATE_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| keyword_alternation(DATE_KEYWORDS));
