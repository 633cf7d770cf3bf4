use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Define task status enum
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub is_urgent: bool,
    pub created_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub user_id: String,
    /// Derived on every read, never persisted.
    #[serde(skip)]
    pub days_remaining: i64,
}

const DAY_MS: i64 = 86_400_000;

/// Days left until `due_date`, computed as `ceil((due_date - now) / 1 day)`.
///
/// Negative means overdue by that many days, zero means due today.
pub fn days_remaining(due_date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let diff = (due_date - now).num_milliseconds();
    diff.div_euclid(DAY_MS) + i64::from(diff.rem_euclid(DAY_MS) != 0)
}

impl Task {
    /// Recomputes the derived field against the supplied instant.
    pub fn refresh_days_remaining(&mut self, now: DateTime<Utc>) {
        self.days_remaining = days_remaining(self.due_date, now);
    }
}

/// Fields supplied when creating a task; id, owner, and creation time are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub is_urgent: bool,
    pub due_date: DateTime<Utc>,
}

/// Partial update; only `Some` fields are merged into the stored task.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub is_urgent: Option<bool>,
    pub due_date: Option<DateTime<Utc>>,
}
