//! Personal task-management core: registration and login, task CRUD, and an
//! in-memory filter/sort/paginate query engine, all over a pluggable JSON
//! storage backend.

pub mod config;
pub mod errors;
pub mod models;
pub mod seed;
pub mod services;
pub mod storage;

pub use errors::{AppError, AppResult};
