// File: ./src/model/mod.rs
pub mod apply;
pub mod datetime;
pub mod item;
pub mod matcher;
pub mod parser;
pub mod patterns;
pub mod phrases;
pub mod query;
pub mod suggest;

pub use apply::{apply_filter_value, apply_suggestion};
pub use datetime::{extract_date, extract_time};
pub use item::{Mode, Priority, Project, Task};
pub use parser::{Extraction, ParseOutcome, ParsedTaskDraft, parse_task, parse_task_on};
pub use phrases::{clean_reminder_phrase, extract_priority};
pub use query::{DueFilter, FilterField, SearchFilters, StatusFilter, parse_filters};
pub use suggest::{
    SuggestOptions, SuggestionKind, project_filter_value, secondary_options, suggest,
    suggest_with,
};
