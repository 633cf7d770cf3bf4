use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String, // Stored in plain text; securing credentials is out of scope
    pub created_at: DateTime<Utc>,
}

/// The authenticated user's public projection. Never carries the password.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_projection_excludes_password() {
        let user = User {
            id: "u-1".into(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "hunter2".into(),
            created_at: Utc::now(),
        };

        let session = Session::from(&user);
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "alice");
        assert!(json.get("createdAt").is_some());
    }
}
