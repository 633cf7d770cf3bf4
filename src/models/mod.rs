mod query;
mod task;
mod user;

pub use query::{SortBy, SortOrder, TaskFilters, TaskListParams, TaskPage, TaskStats};
pub use task::{days_remaining, CreateTask, Task, TaskStatus, UpdateTask};
pub use user::{Session, User};
