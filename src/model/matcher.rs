// Logic for checking if tasks match a parsed search query.
//
// Every criterion present in `SearchFilters` must hold (implicit AND):
//   text        -> substring of title or description (case-insensitive)
//   #tags       -> any query tag is a substring of any task tag
//   priority:   -> exact
//   project:    -> substring of the task's project name
//   status:     -> completed flag
//   due:        -> due date equals today, or is before today on an open task

use crate::model::item::Task;
use crate::model::query::{DueFilter, SearchFilters, StatusFilter};
use chrono::NaiveDate;

impl SearchFilters {
    /// `project_name` is the name of the project the task belongs to, if any;
    /// resolving it is up to the caller's project list.
    pub fn matches(&self, task: &Task, project_name: Option<&str>, today: NaiveDate) -> bool {
        if !self.text.is_empty() {
            let needle = self.text.to_lowercase();
            let title_match = task.title.to_lowercase().contains(&needle);
            let desc_match = task.description.to_lowercase().contains(&needle);
            if !title_match && !desc_match {
                return false;
            }
        }

        if !self.tags.is_empty() {
            let any_tag = self.tags.iter().any(|wanted| {
                task.tags
                    .iter()
                    .any(|t| t.to_lowercase().contains(wanted.as_str()))
            });
            if !any_tag {
                return false;
            }
        }

        if let Some(p) = self.priority
            && task.priority != p
        {
            return false;
        }

        if let Some(wanted) = &self.project_name {
            let hit = project_name.is_some_and(|n| n.to_lowercase().contains(wanted.as_str()));
            if !hit {
                return false;
            }
        }

        match self.status {
            Some(StatusFilter::Completed) if !task.completed => return false,
            Some(StatusFilter::Incomplete) if task.completed => return false,
            _ => {}
        }

        match self.due {
            Some(DueFilter::Today) => task.due_date == Some(today),
            Some(DueFilter::Overdue) => task.is_overdue(today),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::item::{Priority, Task};
    use crate::model::query::parse_filters;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn sample() -> Task {
        let mut t = Task::new("Write quarterly Report");
        t.description = "numbers from finance".to_string();
        t.tags = vec!["Work".to_string(), "finance-q4".to_string()];
        t.priority = Priority::High;
        t.due_date = NaiveDate::from_ymd_opt(2026, 10, 10);
        t
    }

    #[test]
    fn test_text_matches_title_or_description() {
        let t = sample();
        assert!(parse_filters("report").matches(&t, None, today()));
        assert!(parse_filters("FINANCE").matches(&t, None, today()));
        assert!(!parse_filters("holiday").matches(&t, None, today()));
    }

    #[test]
    fn test_tags_are_substring_any() {
        let t = sample();
        assert!(parse_filters("#fin").matches(&t, None, today()));
        assert!(parse_filters("#nope #wor").matches(&t, None, today()));
        assert!(!parse_filters("#home").matches(&t, None, today()));
    }

    #[test]
    fn test_project_needs_a_project() {
        let t = sample();
        let f = parse_filters("project:work");
        assert!(f.matches(&t, Some("Work Stuff"), today()));
        assert!(!f.matches(&t, Some("Home"), today()));
        assert!(!f.matches(&t, None, today()));
    }

    #[test]
    fn test_due_buckets() {
        let mut t = sample();
        assert!(parse_filters("due:overdue").matches(&t, None, today()));
        assert!(!parse_filters("due:today").matches(&t, None, today()));
        t.completed = true;
        assert!(!parse_filters("due:overdue").matches(&t, None, today()));
        assert!(parse_filters("status:completed").matches(&t, None, today()));
        t.due_date = Some(today());
        assert!(parse_filters("due:today").matches(&t, None, today()));
        t.due_date = None;
        assert!(!parse_filters("due:today").matches(&t, None, today()));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(parse_filters("").matches(&Task::new("anything"), None, today()));
    }
}
