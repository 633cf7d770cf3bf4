use std::sync::Mutex;

use super::Storage;
use crate::errors::AppResult;
use crate::models::{Session, Task, User};

/// Ephemeral backend holding every collection in memory. Used by tests and
/// throwaway sessions.
#[derive(Default)]
pub struct MemoryStorage {
    users: Mutex<Vec<User>>,
    tasks: Mutex<Vec<Task>>,
    session: Mutex<Option<Session>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

// Lock poisoning only happens if a panic occurred mid-write; the data itself
// is still a consistent snapshot, so recover the guard rather than propagate.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Storage for MemoryStorage {
    fn load_users(&self) -> AppResult<Vec<User>> {
        Ok(lock(&self.users).clone())
    }

    fn save_users(&self, users: &[User]) -> AppResult<()> {
        *lock(&self.users) = users.to_vec();
        Ok(())
    }

    fn load_tasks(&self) -> AppResult<Vec<Task>> {
        Ok(lock(&self.tasks).clone())
    }

    fn save_tasks(&self, tasks: &[Task]) -> AppResult<()> {
        *lock(&self.tasks) = tasks.to_vec();
        Ok(())
    }

    fn load_session(&self) -> Option<Session> {
        lock(&self.session).clone()
    }

    fn save_session(&self, session: &Session) -> AppResult<()> {
        *lock(&self.session) = Some(session.clone());
        Ok(())
    }

    fn clear_session(&self) -> AppResult<()> {
        *lock(&self.session) = None;
        Ok(())
    }
}
