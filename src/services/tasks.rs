use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use super::query;
use crate::errors::{AppError, AppResult};
use crate::models::{
    CreateTask, Task, TaskListParams, TaskPage, TaskStats, TaskStatus, UpdateTask,
};
use crate::storage::Storage;

/// Task CRUD plus the list and stats read paths, generic over the storage
/// backend.
///
/// Every read recomputes the derived days-remaining field against the moment
/// of the call, so repeated reads shift as real time passes.
pub struct TaskService<S> {
    storage: Arc<S>,
    latency: Duration,
}

impl<S: Storage> TaskService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            latency: Duration::ZERO,
        }
    }

    /// Adds a fixed delay before every operation to mimic a network backend.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    // Loads the owner's tasks with the derived field recomputed against now.
    fn load_owned(&self, owner_id: &str) -> AppResult<Vec<Task>> {
        let now = Utc::now();
        let mut tasks: Vec<Task> = self
            .storage
            .load_tasks()?
            .into_iter()
            .filter(|task| task.user_id == owner_id)
            .collect();
        for task in &mut tasks {
            task.refresh_days_remaining(now);
        }
        Ok(tasks)
    }

    /// Filtered, sorted, paginated view of the owner's tasks. Pages past the
    /// end come back empty rather than failing.
    pub async fn list_tasks(&self, owner_id: &str, params: &TaskListParams) -> AppResult<TaskPage> {
        self.simulate_latency().await;
        let page = query::run(self.load_owned(owner_id)?, params);
        tracing::debug!(
            "Listed tasks for user {}: {} matched, page {}/{}",
            owner_id,
            page.total,
            page.page,
            page.total_pages
        );
        Ok(page)
    }

    /// Every task the owner has, unfiltered and unpaginated.
    pub async fn get_all_tasks(&self, owner_id: &str) -> AppResult<Vec<Task>> {
        self.simulate_latency().await;
        self.load_owned(owner_id)
    }

    /// Stores a new task for the owner. Callers are responsible for rejecting
    /// empty titles before reaching the store; data fields are kept verbatim.
    pub async fn create_task(&self, owner_id: &str, data: CreateTask) -> AppResult<Task> {
        self.simulate_latency().await;
        let now = Utc::now();
        let mut task = Task {
            id: Uuid::new_v4().to_string(),
            title: data.title,
            description: data.description,
            status: data.status,
            is_urgent: data.is_urgent,
            created_at: now,
            due_date: data.due_date,
            user_id: owner_id.to_string(),
            days_remaining: 0,
        };
        task.refresh_days_remaining(now);

        let mut tasks = self.storage.load_tasks()?;
        tasks.push(task.clone());
        self.storage.save_tasks(&tasks)?;

        tracing::info!("Created task {} for user {}", task.id, owner_id);
        Ok(task)
    }

    /// Merges the provided fields into an existing task. The owner and the
    /// creation time are never touched by updates.
    pub async fn update_task(&self, task_id: &str, data: UpdateTask) -> AppResult<Task> {
        self.simulate_latency().await;
        let mut tasks = self.storage.load_tasks()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| AppError::TaskNotFound(task_id.to_string()))?;

        if let Some(title) = data.title {
            task.title = title;
        }
        if let Some(description) = data.description {
            task.description = description;
        }
        if let Some(status) = data.status {
            task.status = status;
        }
        if let Some(is_urgent) = data.is_urgent {
            task.is_urgent = is_urgent;
        }
        if let Some(due_date) = data.due_date {
            task.due_date = due_date;
        }
        task.refresh_days_remaining(Utc::now());
        let updated = task.clone();

        self.storage.save_tasks(&tasks)?;
        tracing::info!("Updated task {}", task_id);
        Ok(updated)
    }

    /// Removes the task if present; deleting a missing id is a no-op.
    pub async fn delete_task(&self, task_id: &str) -> AppResult<()> {
        self.simulate_latency().await;
        let mut tasks = self.storage.load_tasks()?;
        let before = tasks.len();
        tasks.retain(|task| task.id != task_id);
        if tasks.len() == before {
            tracing::debug!("Delete skipped, task {} not found", task_id);
            return Ok(());
        }

        self.storage.save_tasks(&tasks)?;
        tracing::info!("Deleted task {}", task_id);
        Ok(())
    }

    /// Counts over the owner's full task set, ignoring filters and pagination.
    pub async fn task_stats(&self, owner_id: &str) -> AppResult<TaskStats> {
        self.simulate_latency().await;
        let tasks = self.load_owned(owner_id)?;
        Ok(TaskStats {
            total: tasks.len(),
            todo: tasks.iter().filter(|t| t.status == TaskStatus::Todo).count(),
            in_progress: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::InProgress)
                .count(),
            done: tasks.iter().filter(|t| t.status == TaskStatus::Done).count(),
            urgent: tasks.iter().filter(|t| t.is_urgent).count(),
        })
    }
}
