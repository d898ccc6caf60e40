// File: src/model/phrases.rs
// Priority keywords and conversational reminder prefixes.
use crate::model::item::Priority;
use crate::model::patterns::{HIGH_PRIORITY, LOW_PRIORITY, MEDIUM_PRIORITY, REMINDER};

/// High keywords win over medium, medium over low. Only the first occurrence
/// of the winning set is removed.
pub fn extract_priority(text: &str) -> (Option<Priority>, String) {
    let tiers = [
        (Priority::High, &*HIGH_PRIORITY),
        (Priority::Medium, &*MEDIUM_PRIORITY),
        (Priority::Low, &*LOW_PRIORITY),
    ];
    for (priority, re) in tiers {
        if re.is_match(text) {
            return (Some(priority), re.replace(text, "").trim().to_string());
        }
    }
    (None, text.to_string())
}

/// Strips "remind me to", "reminder to" or "don't forget to".
pub fn clean_reminder_phrase(text: &str) -> (String, bool) {
    let was_reminder = REMINDER.is_match(text);
    (REMINDER.replace(text, "").trim().to_string(), was_reminder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_beats_low() {
        let (p, rest) = extract_priority("eventually fix the urgent leak");
        assert_eq!(p, Some(Priority::High));
        assert_eq!(rest, "eventually fix the  leak");
    }

    #[test]
    fn test_multi_word_keywords() {
        assert_eq!(
            extract_priority("water plants low priority"),
            (Some(Priority::Low), "water plants".to_string())
        );
        assert_eq!(
            extract_priority("Medium Priority: sort mail").0,
            Some(Priority::Medium)
        );
        assert_eq!(extract_priority("just text"), (None, "just text".to_string()));
    }

    #[test]
    fn test_reminder_phrase() {
        assert_eq!(
            clean_reminder_phrase("Remind me to water plants"),
            ("water plants".to_string(), true)
        );
        assert_eq!(
            clean_reminder_phrase("water plants"),
            ("water plants".to_string(), false)
        );
    }
}
