use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Storage;
use crate::errors::AppResult;
use crate::models::{Session, Task, User};

const USERS_FILE: &str = "users.json";
const TASKS_FILE: &str = "tasks.json";
const SESSION_FILE: &str = "session.json";

/// JSON-file backend: one file per collection under a data directory.
///
/// Writes go through a temporary file and a rename so a crash mid-write leaves
/// the previous contents intact. Unreadable or corrupt files are logged and
/// treated as empty rather than surfaced as errors.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens the data directory, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn read_collection<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.dir.join(name);
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("Discarding malformed {}: {}", name, e);
                    T::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => T::default(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", name, e);
                T::default()
            }
        }
    }

    fn write_collection<T: Serialize>(&self, name: &str, value: &T) -> AppResult<()> {
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn load_users(&self) -> AppResult<Vec<User>> {
        Ok(self.read_collection(USERS_FILE))
    }

    fn save_users(&self, users: &[User]) -> AppResult<()> {
        self.write_collection(USERS_FILE, &users)
    }

    fn load_tasks(&self) -> AppResult<Vec<Task>> {
        Ok(self.read_collection(TASKS_FILE))
    }

    fn save_tasks(&self, tasks: &[Task]) -> AppResult<()> {
        self.write_collection(TASKS_FILE, &tasks)
    }

    fn load_session(&self) -> Option<Session> {
        self.read_collection(SESSION_FILE)
    }

    fn save_session(&self, session: &Session) -> AppResult<()> {
        self.write_collection(SESSION_FILE, session)
    }

    fn clear_session(&self) -> AppResult<()> {
        match fs::remove_file(self.dir.join(SESSION_FILE)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
