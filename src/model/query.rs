// File: src/model/query.rs
//! Search-mode filter language.
//!
//! A query is a whitespace-separated list of tokens. `#tag` and the four
//! `name:value` prefixes become structured filters, everything else is free
//! text:
//!
//!   buy milk #errands priority:high project:home status:incomplete due:today
//!
//! A recognized prefix with an unknown value (`priority:bogus`) is dropped.

use crate::model::item::Priority;
use crate::model::patterns::TAG_SIGIL;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatusFilter {
    Completed,
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DueFilter {
    Today,
    Overdue,
}

/// The `name:` prefixes of the filter language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum FilterField {
    Priority,
    Project,
    Status,
    Due,
}

impl FilterField {
    /// `priority:` etc.
    pub fn stub(&self) -> String {
        format!("{}:", self.as_ref())
    }

    /// Recognizes a completed stub such as `status:`.
    pub fn from_stub(candidate: &str) -> Option<Self> {
        candidate
            .strip_suffix(':')
            .and_then(|name| FilterField::from_str(name).ok())
    }

    /// Splits `priority:hi` into the field and the value typed so far.
    /// The prefix is matched case-sensitively, like the parser does.
    pub fn split_token(token: &str) -> Option<(Self, &str)> {
        FilterField::iter().find_map(|field| {
            token
                .strip_prefix(field.as_ref())
                .and_then(|rest| rest.strip_prefix(':'))
                .map(|value| (field, value))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilters {
    pub text: String,
    pub tags: Vec<String>,
    pub priority: Option<Priority>,
    pub project_name: Option<String>,
    pub status: Option<StatusFilter>,
    pub due: Option<DueFilter>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        *self == SearchFilters::default()
    }

    fn push_text(&mut self, word: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(word);
    }
}

/// Renders the canonical query form. Parsing the output yields the same
/// filters again.
impl fmt::Display for SearchFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if !self.text.is_empty() {
            parts.push(self.text.clone());
        }
        parts.extend(self.tags.iter().map(|t| format!("{TAG_SIGIL}{t}")));
        if let Some(p) = self.priority {
            parts.push(format!("priority:{p}"));
        }
        if let Some(name) = &self.project_name {
            parts.push(format!("project:{name}"));
        }
        if let Some(s) = self.status {
            parts.push(format!("status:{s}"));
        }
        if let Some(d) = self.due {
            parts.push(format!("due:{d}"));
        }
        write!(f, "{}", parts.join(" "))
    }
}

pub fn parse_filters(query: &str) -> SearchFilters {
    let mut filters = SearchFilters::default();

    for part in query.split_whitespace() {
        if let Some(tag) = part.strip_prefix(TAG_SIGIL) {
            let tag = tag.to_lowercase();
            if !tag.is_empty() {
                filters.tags.push(tag);
            }
            continue;
        }

        let Some((field, raw)) = FilterField::split_token(part) else {
            filters.push_text(part);
            continue;
        };
        let value = raw.to_lowercase();
        match field {
            FilterField::Priority => {
                if let Ok(p) = Priority::from_str(&value) {
                    filters.priority = Some(p);
                }
            }
            FilterField::Project => {
                filters.project_name = (!value.is_empty()).then_some(value);
            }
            FilterField::Status => {
                if let Ok(s) = StatusFilter::from_str(&value) {
                    filters.status = Some(s);
                }
            }
            FilterField::Due => {
                if let Ok(d) = DueFilter::from_str(&value) {
                    filters.due = Some(d);
                }
            }
        }
    }

    log::debug!("parse_filters: {:?} -> {:?}", query, filters);
    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_query() {
        let f = parse_filters("priority:high #urgent project:work");
        assert_eq!(f.priority, Some(Priority::High));
        assert_eq!(f.tags, vec!["urgent".to_string()]);
        assert_eq!(f.project_name.as_deref(), Some("work"));
        assert_eq!(f.text, "");
    }

    #[test]
    fn test_invalid_value_is_dropped() {
        let f = parse_filters("priority:bogus buy milk");
        assert_eq!(f.text, "buy milk");
        assert_eq!(f.priority, None);
    }

    #[test]
    fn test_last_valid_value_wins() {
        let f = parse_filters("priority:low priority:HIGH priority:nope due:today due:overdue");
        assert_eq!(f.priority, Some(Priority::High));
        assert_eq!(f.due, Some(DueFilter::Overdue));
    }

    #[test]
    fn test_tags_keep_order_and_duplicates() {
        let f = parse_filters("#Work # #home #work");
        assert_eq!(f.tags, vec!["work", "home", "work"]);
        assert_eq!(f.text, "");
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let f = parse_filters("Status:completed Report");
        assert_eq!(f.status, None);
        assert_eq!(f.text, "Status:completed Report");
    }

    #[test]
    fn test_canonical_form_reparses() {
        let q = "  Fix   BUG #api status:incomplete project:Backend priority:medium #Api ";
        let once = parse_filters(q);
        assert_eq!(
            once.to_string(),
            "Fix BUG #api #api priority:medium project:backend status:incomplete"
        );
        assert_eq!(parse_filters(&once.to_string()), once);
    }

    #[test]
    fn test_stub_helpers() {
        assert_eq!(FilterField::from_stub("due:"), Some(FilterField::Due));
        assert_eq!(FilterField::from_stub("due"), None);
        assert_eq!(FilterField::Project.stub(), "project:");
        assert_eq!(
            FilterField::split_token("status:comp"),
            Some((FilterField::Status, "comp"))
        );
    }
}
