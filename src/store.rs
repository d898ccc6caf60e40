// File: src/store.rs
// Read-only snapshot of tasks and projects, the live data suggestions and
// search filters run against.
use crate::model::{Project, SearchFilters, Task};
use crate::storage::LocalStorage;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskStore {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>, projects: Vec<Project>) -> Self {
        Self { tasks, projects }
    }

    /// Loads `{ "tasks": [...], "projects": [...] }`. A missing file is an
    /// empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let Some(json) = LocalStorage::read_locked(path)? else {
            log::debug!("No snapshot at {}, starting empty", path.display());
            return Ok(Self::default());
        };
        let store: TaskStore = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse task snapshot '{}'", path.display()))?;
        log::debug!(
            "Loaded {} task(s), {} project(s) from {}",
            store.tasks.len(),
            store.projects.len(),
            path.display()
        );
        Ok(store)
    }

    /// Every tag in use, unique, in first-seen order.
    pub fn live_tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.tasks
            .iter()
            .flat_map(|t| t.tags.iter())
            .filter(|tag| seen.insert(tag.as_str()))
            .cloned()
            .collect()
    }

    pub fn project_names(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.name.clone()).collect()
    }

    pub fn project_by_id(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_name_for(&self, task: &Task) -> Option<&str> {
        task.project_id
            .and_then(|id| self.project_by_id(id))
            .map(|p| p.name.as_str())
    }

    /// Tasks matching `filters`, earliest due date first, undated last.
    pub fn filter(&self, filters: &SearchFilters, today: NaiveDate) -> Vec<&Task> {
        let mut hits: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| filters.matches(t, self.project_name_for(t), today))
            .collect();
        hits.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_filters;

    fn store() -> TaskStore {
        let mut a = Task::new("Email landlord");
        a.tags = vec!["home".into(), "email".into()];
        a.project_id = Some(1);
        let mut b = Task::new("Ship release");
        b.tags = vec!["work".into(), "home".into()];
        b.due_date = NaiveDate::from_ymd_opt(2026, 10, 20);
        b.project_id = Some(2);
        let mut c = Task::new("Book flights");
        c.due_date = NaiveDate::from_ymd_opt(2026, 10, 12);
        let projects = vec![
            Project {
                id: 1,
                name: "Personal".into(),
                color: "#ff0000".into(),
                description: None,
            },
            Project {
                id: 2,
                name: "Work Projects".into(),
                color: "#00ff00".into(),
                description: None,
            },
        ];
        TaskStore::new(vec![a, b, c], projects)
    }

    #[test]
    fn test_live_tags_unique_in_order() {
        assert_eq!(store().live_tags(), vec!["home", "email", "work"]);
    }

    #[test]
    fn test_filter_sorts_by_due_date() {
        let s = store();
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let titles: Vec<&str> = s
            .filter(&parse_filters(""), today)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Book flights", "Ship release", "Email landlord"]);
    }

    #[test]
    fn test_filter_by_project_name() {
        let s = store();
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let hits = s.filter(&parse_filters("project:work #home"), today);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Ship release");
    }
}
