use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{Session, User};
use crate::storage::Storage;

/// Registration, login, and session persistence over the storage backend.
///
/// The established session is returned to the caller instead of being held in
/// process-wide state; task operations take the resolved owner id.
pub struct AuthService<S> {
    storage: Arc<S>,
}

impl<S: Storage> AuthService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Creates a user and establishes a session for it. Usernames are unique
    /// and compared exactly, case included.
    pub fn register(&self, username: &str, email: &str, password: &str) -> AppResult<Session> {
        let mut users = self.storage.load_users()?;
        if users.iter().any(|user| user.username == username) {
            tracing::debug!("Registration rejected, username {} taken", username);
            return Err(AppError::UsernameTaken);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
        };
        let session = Session::from(&user);
        users.push(user);
        self.storage.save_users(&users)?;
        self.storage.save_session(&session)?;

        tracing::info!("Registered user {}", username);
        Ok(session)
    }

    pub fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        let users = self.storage.load_users()?;
        // One error for both unknown usernames and wrong passwords.
        let user = users
            .iter()
            .find(|user| user.username == username && user.password == password)
            .ok_or(AppError::InvalidCredentials)?;

        let session = Session::from(user);
        self.storage.save_session(&session)?;
        tracing::info!("User {} logged in", username);
        Ok(session)
    }

    /// Clears the persisted session unconditionally.
    pub fn logout(&self) -> AppResult<()> {
        self.storage.clear_session()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Restores a previously persisted session. Unreadable stored data means
    /// logged out, never an error.
    pub fn current_session(&self) -> Option<Session> {
        self.storage.load_session()
    }
}
