//! Demo bootstrap data: one `demo` account and eight example tasks covering
//! every status, mixed urgency, and due dates on both sides of today.

use chrono::{Duration, Utc};

use crate::errors::AppResult;
use crate::models::{Task, TaskStatus, User};
use crate::storage::Storage;

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo";
pub const DEMO_USER_ID: &str = "demo-user-1";

// (id, title, description, status, is_urgent, created days ago, due in days)
type SeedTask = (
    &'static str,
    &'static str,
    &'static str,
    TaskStatus,
    bool,
    i64,
    i64,
);

const DEMO_TASKS: [SeedTask; 8] = [
    (
        "task-1",
        "Design System Implementation",
        "Create a comprehensive design system with reusable components, color schemes, and typography guidelines.",
        TaskStatus::InProgress,
        true,
        5,
        2,
    ),
    (
        "task-2",
        "API Documentation",
        "Write comprehensive API documentation using Swagger/OpenAPI specification.",
        TaskStatus::Todo,
        false,
        3,
        7,
    ),
    (
        "task-3",
        "User Authentication Flow",
        "Implement secure user authentication with login, registration, and session management.",
        TaskStatus::Done,
        false,
        10,
        -2,
    ),
    (
        "task-4",
        "Performance Optimization",
        "Optimize application performance by implementing lazy loading, code splitting, and caching strategies.",
        TaskStatus::Todo,
        true,
        1,
        5,
    ),
    (
        "task-5",
        "Mobile Responsiveness",
        "Ensure the application works seamlessly across all device sizes and orientations.",
        TaskStatus::InProgress,
        false,
        7,
        3,
    ),
    (
        "task-6",
        "Testing Suite Setup",
        "Set up comprehensive testing including unit tests, integration tests, and end-to-end tests.",
        TaskStatus::Todo,
        false,
        2,
        10,
    ),
    (
        "task-7",
        "Database Migration",
        "Plan and execute database schema migration for the new features.",
        TaskStatus::Done,
        true,
        15,
        -5,
    ),
    (
        "task-8",
        "Code Review Process",
        "Establish code review guidelines and implement peer review process for all changes.",
        TaskStatus::Todo,
        false,
        0,
        14,
    ),
];

/// Seeds the demo account and its tasks once per storage location.
///
/// Idempotent: keyed on the existence of the `demo` username, so a second
/// call (or a restart) leaves the data untouched. Returns whether anything
/// was written.
pub fn seed_demo_data<S: Storage>(storage: &S) -> AppResult<bool> {
    let mut users = storage.load_users()?;
    if users.iter().any(|user| user.username == DEMO_USERNAME) {
        return Ok(false);
    }

    let now = Utc::now();
    users.push(User {
        id: DEMO_USER_ID.to_string(),
        username: DEMO_USERNAME.to_string(),
        email: "demo@taskflow.com".to_string(),
        password: DEMO_PASSWORD.to_string(),
        created_at: now,
    });
    storage.save_users(&users)?;

    let mut tasks = storage.load_tasks()?;
    for (id, title, description, status, is_urgent, created_days_ago, due_in_days) in DEMO_TASKS {
        tasks.push(Task {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            status,
            is_urgent,
            created_at: now - Duration::days(created_days_ago),
            due_date: now + Duration::days(due_in_days),
            user_id: DEMO_USER_ID.to_string(),
            days_remaining: 0,
        });
    }
    storage.save_tasks(&tasks)?;

    tracing::info!("Seeded demo user and {} example tasks", DEMO_TASKS.len());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn seeding_is_idempotent() {
        let storage = MemoryStorage::new();
        assert!(seed_demo_data(&storage).unwrap());
        assert!(!seed_demo_data(&storage).unwrap());

        assert_eq!(storage.load_users().unwrap().len(), 1);
        assert_eq!(storage.load_tasks().unwrap().len(), 8);
    }

    #[test]
    fn seeded_due_dates_span_past_and_future() {
        let storage = MemoryStorage::new();
        seed_demo_data(&storage).unwrap();

        let now = Utc::now();
        let tasks = storage.load_tasks().unwrap();
        assert!(tasks.iter().any(|t| t.due_date < now));
        assert!(tasks.iter().any(|t| t.due_date > now));
    }
}
