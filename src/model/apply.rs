// File: src/model/apply.rs
// Splicing a chosen suggestion back into the input field.
use crate::model::patterns::{DATE_KEYWORD_RE, PRIORITY_KEYWORD_RE, TIME_KEYWORD_RE, WHITESPACE_RUN};
use crate::model::query::FilterField;
use crate::model::suggest::{SuggestionKind, last_token, project_filter_value};
use regex::Regex;

/// Returns the new input text after choosing `chosen`.
///
/// Priority, time and date keywords are exclusive per category: any keyword
/// of the same category already in the text is removed before the new one is
/// appended. Everything else replaces the token being typed. A filter stub
/// (`due:`) is left open, without a trailing space, so its value can follow.
pub fn apply_suggestion(current: &str, chosen: &str) -> String {
    let category: Option<&Regex> = match SuggestionKind::classify(chosen) {
        SuggestionKind::Priority => Some(&*PRIORITY_KEYWORD_RE),
        SuggestionKind::Time => Some(&*TIME_KEYWORD_RE),
        SuggestionKind::Date => Some(&*DATE_KEYWORD_RE),
        _ => None,
    };

    let result = match category {
        Some(re) => {
            let base = drop_partial_token(current, chosen);
            let stripped = re.replace_all(&base, "");
            let text = WHITESPACE_RUN.replace_all(&stripped, " ");
            let text = text.trim();
            if text.is_empty() {
                format!("{chosen} ")
            } else {
                format!("{text} {chosen} ")
            }
        }
        None if FilterField::from_stub(chosen).is_some() => replace_last_token(current, chosen),
        None => format!("{} ", replace_last_token(current, chosen)),
    };
    log::debug!("apply_suggestion: {:?} + {:?} -> {:?}", current, chosen, result);
    result
}

/// Completes a pending `field:` stub with one of its values. A project name
/// is reduced to a single token so the query parses back to it.
pub fn apply_filter_value(current: &str, field: FilterField, value: &str) -> String {
    let value = match field {
        FilterField::Project => project_filter_value(value),
        _ => value.to_string(),
    };
    format!("{} ", replace_last_token(current, &format!("{}:{}", field, value)))
}

fn replace_last_token(current: &str, replacement: &str) -> String {
    match current.rfind(' ') {
        Some(idx) => format!("{}{}", &current[..=idx], replacement),
        None => replacement.to_string(),
    }
}

// A half-typed word the keyword completes ("tom" -> "tomorrow") goes away
// with the completion. Any other word stays.
fn drop_partial_token(current: &str, chosen: &str) -> String {
    let raw = last_token(current);
    let token = raw.to_lowercase();
    if !token.is_empty() && chosen.to_lowercase().starts_with(&token) {
        current[..current.len() - raw.len()].to_string()
    } else {
        current.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_replaces_partial_word() {
        assert_eq!(apply_suggestion("Buy milk tom", "tomorrow"), "Buy milk tomorrow ");
        assert_eq!(apply_suggestion("Buy milk #sh", "#shopping"), "Buy milk #shopping ");
        assert_eq!(apply_suggestion("toda", "today"), "today ");
    }

    #[test]
    fn test_category_exclusivity() {
        let step1 = apply_suggestion("Buy milk monday ", "tomorrow");
        assert_eq!(step1, "Buy milk tomorrow ");
        let step2 = apply_suggestion("Call mom next monday at 9am ", "friday");
        assert_eq!(step2, "Call mom at 9am friday ");
        let step3 = apply_suggestion("Call mom at 9am friday ", "at 2pm");
        assert_eq!(step3, "Call mom friday at 2pm ");
    }

    #[test]
    fn test_priority_keywords_are_exclusive() {
        assert_eq!(
            apply_suggestion("Fix leak URGENT ", "low priority"),
            "Fix leak low priority "
        );
    }

    #[test]
    fn test_filter_stub_stays_open() {
        assert_eq!(apply_suggestion("milk pri", "priority:"), "milk priority:");
        assert_eq!(
            apply_filter_value("milk priority:", FilterField::Priority, "high"),
            "milk priority:high "
        );
    }

    #[test]
    fn test_only_a_prefix_is_dropped() {
        assert_eq!(apply_suggestion("Buy a", "today"), "Buy a today ");
        assert_eq!(apply_suggestion("Fix gent", "urgent"), "Fix gent urgent ");
        assert_eq!(apply_suggestion("Fix urg", "urgent"), "Fix urgent ");
    }

    #[test]
    fn test_context_hint_keeps_complete_word() {
        assert_eq!(apply_suggestion("Review the day", "today"), "Review the day today ");
    }

    #[test]
    fn test_project_value_with_spaces_stays_one_token() {
        assert_eq!(
            apply_filter_value("invoice project:", FilterField::Project, "Side Hustle"),
            "invoice project:hustle "
        );
    }

    #[test]
    fn test_context_hint_appends_after_full_word() {
        assert_eq!(
            apply_suggestion("Team meeting ", "#meeting"),
            "Team meeting #meeting "
        );
    }
}
