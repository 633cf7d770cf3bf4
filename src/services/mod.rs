mod auth;
mod query;
mod tasks;

pub use auth::AuthService;
pub use tasks::TaskService;
