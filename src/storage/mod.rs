// Typed persistence boundary. Each collection loads and saves as a whole,
// mirroring the blob-per-collection layout of the durable medium.
mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::errors::AppResult;
use crate::models::{Session, Task, User};

/// Storage backend for the three durable collections: users, tasks, and the
/// single active session.
///
/// All writes are whole-collection read-modify-write; there is at most one
/// logical session per process, so no concurrency control is layered on top.
pub trait Storage: Send + Sync {
    fn load_users(&self) -> AppResult<Vec<User>>;
    fn save_users(&self, users: &[User]) -> AppResult<()>;

    fn load_tasks(&self) -> AppResult<Vec<Task>>;
    fn save_tasks(&self, tasks: &[Task]) -> AppResult<()>;

    /// Returns the persisted session, or `None` when absent or unreadable.
    fn load_session(&self) -> Option<Session>;
    fn save_session(&self, session: &Session) -> AppResult<()>;
    fn clear_session(&self) -> AppResult<()>;
}
