use std::fs;
use std::sync::Arc;

use taskflow::seed;
use taskflow::services::AuthService;
use taskflow::storage::{FileStorage, MemoryStorage};
use taskflow::AppError;

fn service() -> AuthService<MemoryStorage> {
    AuthService::new(Arc::new(MemoryStorage::new()))
}

#[test]
fn register_establishes_a_session() {
    let auth = service();
    let session = auth.register("alice", "alice@example.com", "pw").unwrap();

    assert_eq!(session.username, "alice");
    assert_eq!(session.email, "alice@example.com");
    assert_eq!(auth.current_session(), Some(session));
}

#[test]
fn registering_a_taken_username_fails() {
    let storage = Arc::new(MemoryStorage::new());
    seed::seed_demo_data(storage.as_ref()).unwrap();
    let auth = AuthService::new(storage);

    let err = auth
        .register("demo", "someone@example.com", "pw")
        .unwrap_err();
    assert!(matches!(err, AppError::UsernameTaken));
}

#[test]
fn login_succeeds_for_the_seeded_demo_account() {
    let storage = Arc::new(MemoryStorage::new());
    seed::seed_demo_data(storage.as_ref()).unwrap();
    let auth = AuthService::new(storage);

    let session = auth.login(seed::DEMO_USERNAME, seed::DEMO_PASSWORD).unwrap();
    assert_eq!(session.id, seed::DEMO_USER_ID);
    assert_eq!(auth.current_session(), Some(session));
}

#[test]
fn bad_password_and_unknown_user_are_indistinguishable() {
    let storage = Arc::new(MemoryStorage::new());
    seed::seed_demo_data(storage.as_ref()).unwrap();
    let auth = AuthService::new(storage);

    let wrong_password = auth.login("demo", "wrong").unwrap_err();
    let unknown_user = auth.login("nobody", "wrong").unwrap_err();

    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert_eq!(
        std::mem::discriminant(&wrong_password),
        std::mem::discriminant(&unknown_user)
    );
}

#[test]
fn logout_clears_the_session() {
    let auth = service();
    auth.register("bob", "bob@example.com", "pw").unwrap();
    assert!(auth.current_session().is_some());

    auth.logout().unwrap();
    assert!(auth.current_session().is_none());

    // Logging out while already logged out is fine.
    auth.logout().unwrap();
}

#[test]
fn corrupt_persisted_session_means_logged_out() {
    let dir = tempfile::TempDir::new().unwrap();
    let storage = Arc::new(FileStorage::new(dir.path()).unwrap());
    let auth = AuthService::new(storage.clone());
    auth.register("carol", "carol@example.com", "pw").unwrap();

    fs::write(dir.path().join("session.json"), "{{ not json").unwrap();
    assert!(auth.current_session().is_none());
}
