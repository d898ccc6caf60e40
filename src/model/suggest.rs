// File: src/model/suggest.rs
//! Autocompletion for the shared input field.
//!
//! The completion target is the last space-delimited token; the rest of the
//! input only matters for the create-mode context hints. Candidates are plain
//! strings ready to be spliced back in with `apply::apply_suggestion`.

use crate::model::item::{Mode, Priority};
use crate::model::patterns::{
    COMMON_TAGS, CONTEXT_CLUSTERS, DATE_KEYWORDS, MIN_DATE_TOKEN, MIN_PRIORITY_TOKEN,
    MIN_PROJECT_TOKEN, MIN_TAG_TOKEN, MIN_TIME_TOKEN, PRIORITY_KEYWORDS, PROJECT_KEYWORDS,
    TAG_SIGIL, TIME_KEYWORDS,
};
use crate::model::query::{DueFilter, FilterField, StatusFilter};
use std::collections::HashSet;
use strum::IntoEnumIterator;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Tunables for a suggestion pass.
#[derive(Debug, Clone)]
pub struct SuggestOptions {
    pub limit: usize,
    /// Extra create-mode tag words (without `#`) offered after the built-in ones.
    pub extra_tags: Vec<String>,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUGGESTION_LIMIT,
            extra_tags: Vec::new(),
        }
    }
}

/// How a candidate will be treated once chosen. Derived from the string
/// itself, candidates carry no type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Tag,
    Priority,
    Time,
    Date,
    FilterPrefix,
    Keyword,
}

impl SuggestionKind {
    pub fn classify(candidate: &str) -> Self {
        let in_table = |table: &[&str]| table.iter().any(|k| k.eq_ignore_ascii_case(candidate));
        if candidate.starts_with(TAG_SIGIL) {
            SuggestionKind::Tag
        } else if FilterField::from_stub(candidate).is_some() {
            SuggestionKind::FilterPrefix
        } else if in_table(PRIORITY_KEYWORDS) {
            SuggestionKind::Priority
        } else if in_table(TIME_KEYWORDS) {
            SuggestionKind::Time
        } else if in_table(DATE_KEYWORDS) {
            SuggestionKind::Date
        } else {
            SuggestionKind::Keyword
        }
    }
}

/// Ordered set: first insertion wins, later duplicates are ignored.
#[derive(Default)]
struct Candidates {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl Candidates {
    fn push(&mut self, candidate: impl Into<String>) {
        let candidate = candidate.into();
        if self.seen.insert(candidate.clone()) {
            self.items.push(candidate);
        }
    }

    fn finish(mut self, limit: usize) -> Vec<String> {
        self.items.truncate(limit);
        self.items
    }
}

/// The token being completed. An input ending in a space has an empty last
/// token, which produces no candidates.
pub fn last_token(input: &str) -> &str {
    input.rsplit(' ').next().unwrap_or("")
}

pub fn suggest(
    partial_input: &str,
    mode: Mode,
    live_tags: &[String],
    live_project_names: &[String],
) -> Vec<String> {
    suggest_with(
        partial_input,
        mode,
        live_tags,
        live_project_names,
        &SuggestOptions::default(),
    )
}

pub fn suggest_with(
    partial_input: &str,
    mode: Mode,
    live_tags: &[String],
    live_project_names: &[String],
    options: &SuggestOptions,
) -> Vec<String> {
    let token = last_token(partial_input);
    if token.is_empty() {
        return Vec::new();
    }

    let out = match mode {
        Mode::Search => search_candidates(token, live_tags, live_project_names),
        Mode::Create => create_candidates(partial_input, token, live_tags, options),
    };
    let out = out.finish(options.limit);
    log::debug!("suggest[{}] {:?} -> {:?}", mode, token, out);
    out
}

fn search_candidates(token: &str, live_tags: &[String], live_project_names: &[String]) -> Candidates {
    let mut out = Candidates::default();
    let lower = token.to_lowercase();

    if let Some(tag_query) = lower.strip_prefix(TAG_SIGIL) {
        for tag in live_tags {
            if tag.to_lowercase().contains(tag_query) {
                out.push(format!("{TAG_SIGIL}{tag}"));
            }
        }
        return out;
    }

    if let Some((field, partial)) = FilterField::split_token(token) {
        let partial = partial.to_lowercase();
        for value in secondary_options(field, live_project_names) {
            if value.starts_with(&partial) {
                out.push(format!("{}:{}", field, value));
            }
        }
        return out;
    }

    for field in FilterField::iter() {
        if field.as_ref().contains(lower.as_str()) {
            out.push(field.stub());
        }
    }
    for tag in live_tags {
        if tag.to_lowercase().starts_with(&lower) {
            out.push(format!("{TAG_SIGIL}{tag}"));
        }
    }
    out
}

fn create_candidates(
    input: &str,
    token: &str,
    live_tags: &[String],
    options: &SuggestOptions,
) -> Candidates {
    let mut out = Candidates::default();
    let lower = token.to_lowercase();
    let len = lower.chars().count();

    if len >= MIN_DATE_TOKEN {
        DATE_KEYWORDS
            .iter()
            .filter(|k| k.starts_with(lower.as_str()))
            .for_each(|k| out.push(*k));
    }
    if len >= MIN_PRIORITY_TOKEN {
        PRIORITY_KEYWORDS
            .iter()
            .filter(|k| k.contains(lower.as_str()))
            .for_each(|k| out.push(*k));
    }
    if len >= MIN_TIME_TOKEN {
        TIME_KEYWORDS
            .iter()
            .filter(|k| k.contains(lower.as_str()))
            .for_each(|k| out.push(*k));
    }

    // Built-in tags first, then the caller's extras and the live ones.
    let tag_words = COMMON_TAGS
        .iter()
        .map(|t| t.trim_start_matches(TAG_SIGIL).to_string())
        .chain(options.extra_tags.iter().cloned())
        .chain(live_tags.iter().cloned());
    match lower.strip_prefix(TAG_SIGIL) {
        Some(tag_query) => {
            for word in tag_words {
                if word.to_lowercase().starts_with(tag_query) {
                    out.push(format!("{TAG_SIGIL}{word}"));
                }
            }
        }
        None if len >= MIN_TAG_TOKEN => {
            for word in tag_words {
                if word.to_lowercase().starts_with(lower.as_str()) {
                    out.push(format!("{TAG_SIGIL}{word}"));
                }
            }
        }
        None => {}
    }

    if len >= MIN_PROJECT_TOKEN {
        PROJECT_KEYWORDS
            .iter()
            .filter(|k| k.contains(lower.as_str()))
            .for_each(|k| out.push(*k));
    }

    for hint in context_hints(input) {
        out.push(hint);
    }
    out
}

/// Hints unlocked by semantic clusters anywhere in the input.
pub fn context_hints(input: &str) -> Vec<&'static str> {
    let lower = input.to_lowercase();
    CONTEXT_CLUSTERS
        .iter()
        .filter(|c| c.triggers.iter().any(|t| lower.contains(t)))
        .flat_map(|c| c.hints.iter().copied())
        .collect()
}

/// Legal values for a filter prefix, offered once its stub is chosen.
pub fn secondary_options(field: FilterField, live_project_names: &[String]) -> Vec<String> {
    match field {
        FilterField::Priority => [Priority::High, Priority::Medium, Priority::Low]
            .iter()
            .map(ToString::to_string)
            .collect(),
        FilterField::Status => StatusFilter::iter().map(|s| s.to_string()).collect(),
        FilterField::Due => DueFilter::iter().map(|d| d.to_string()).collect(),
        FilterField::Project => {
            let mut values: Vec<String> = Vec::new();
            for value in live_project_names.iter().map(|p| project_filter_value(p)) {
                if !value.is_empty() && !values.contains(&value) {
                    values.push(value);
                }
            }
            values
        }
    }
}

/// A `project:` value for `name` that survives whitespace tokenization: the
/// longest whitespace-free run of the lowercased name (first one on ties).
/// Project matching is by substring, so the run still selects the project.
pub fn project_filter_value(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut best = "";
    for word in lower.split_whitespace() {
        if word.chars().count() > best.chars().count() {
            best = word;
        }
    }
    best.to_string()
}
