use serde::{Deserialize, Serialize};

use super::task::{Task, TaskStatus};

/// Sort key for task listings.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Title,
    CreatedAt,
    DaysRemaining,
    #[default]
    DueDate,
}

impl SortBy {
    /// Parses a wire-format sort key. Unrecognised keys fall back to the
    /// default rather than failing the whole query.
    pub fn parse(value: &str) -> Self {
        match value {
            "title" => Self::Title,
            "createdAt" => Self::CreatedAt,
            "daysRemaining" => Self::DaysRemaining,
            "dueDate" => Self::DueDate,
            _ => Self::default(),
        }
    }
}

impl<'de> Deserialize<'de> for SortBy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Optional filters, combined with AND semantics.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskFilters {
    pub status: Option<TaskStatus>,
    pub is_urgent: Option<bool>,
    /// Case-insensitive substring match against title or description.
    pub search: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TaskListParams {
    /// 1-based page index.
    pub page: usize,
    /// Page size; must be positive.
    pub limit: usize,
    #[serde(default)]
    pub filters: TaskFilters,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for TaskListParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            filters: TaskFilters::default(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

/// One page of a filtered, sorted task listing.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
    pub items: Vec<Task>,
    /// Count after filtering, before pagination.
    pub total: usize,
    pub page: usize,
    /// `ceil(total / limit)`; zero when there are no matches.
    pub total_pages: usize,
}

/// Counts over an owner's full task set, ignoring filters and pagination.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
    pub urgent: usize,
}
