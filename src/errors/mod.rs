// Defines a custom error type and a result type alias for the application using the thiserror crate.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Username already taken")]
    UsernameTaken,

    // Deliberately the same for an unknown username and a wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    // The #[from] attribute automatically converts a std::io::Error into an AppError::Io using the From trait.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed stored data: {0}")]
    MalformedData(#[from] serde_json::Error),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
