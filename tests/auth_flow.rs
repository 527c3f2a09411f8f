//! End-to-end authentication flow tests
//!
//! Drives register, login, and identity resolution through `AuthService`
//! against an in-memory credential store, so the full flow runs without a
//! database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use taskboard::auth::{AuthError, AuthService, CredentialStore, PrincipalDraft};
use taskboard::server::config::{Algorithm, AuthConfig};
use taskboard::users::User;

/// In-memory credential store keyed by email.
#[derive(Default)]
struct MemoryStore {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryStore {
    /// Flip an account's active flag, as an admin update would.
    fn set_active(&self, email: &str, active: bool) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.get_mut(email) {
            user.is_active = active;
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_key(&self, key: &str) -> Result<Option<User>, AuthError> {
        Ok(self.users.lock().unwrap().get(key).cloned())
    }

    async fn insert(&self, draft: PrincipalDraft) -> Result<User, AuthError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&draft.email) {
            return Err(AuthError::DuplicateKey(draft.email));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email.clone(),
            password_hash: draft.password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        users.insert(draft.email, user.clone());
        Ok(user)
    }
}

fn test_config() -> AuthConfig {
    // bcrypt cost 4 keeps the hashing fast in tests
    AuthConfig::new("integration-test-secret", Algorithm::HS256, 30, 4).unwrap()
}

fn service_with_store() -> (AuthService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = AuthService::new(store.clone(), test_config());
    (service, store)
}

#[tokio::test]
async fn test_register_login_resolve_round_trip() {
    let (service, _store) = service_with_store();

    let registered = service
        .register("Alice", "alice@example.com", "correct-horse")
        .await
        .unwrap();
    assert_eq!(registered.email, "alice@example.com");
    assert!(registered.is_active);

    let token = service
        .login("alice@example.com", "correct-horse")
        .await
        .unwrap();

    let principal = service.current_principal(&token).await.unwrap();
    assert_eq!(principal.id, registered.id);
    assert_eq!(principal.email, "alice@example.com");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (service, _store) = service_with_store();
    service
        .register("Alice", "alice@example.com", "correct-horse")
        .await
        .unwrap();

    let wrong_password = service
        .login("alice@example.com", "battery-staple")
        .await
        .unwrap_err();
    let unknown_user = service
        .login("nobody@example.com", "correct-horse")
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert!(matches!(unknown_user, AuthError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn test_disabled_account_rejected_with_live_token() {
    let (service, store) = service_with_store();
    service
        .register("Alice", "alice@example.com", "correct-horse")
        .await
        .unwrap();

    let token = service
        .login("alice@example.com", "correct-horse")
        .await
        .unwrap();
    assert!(service.current_principal(&token).await.is_ok());

    store.set_active("alice@example.com", false);

    // Same token, still unexpired, but the account is now inactive
    let err = service.current_principal(&token).await.unwrap_err();
    assert!(matches!(err, AuthError::InactiveAccount));

    store.set_active("alice@example.com", true);
    assert!(service.current_principal(&token).await.is_ok());
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let (service, _store) = service_with_store();
    service
        .register("Alice", "alice@example.com", "correct-horse")
        .await
        .unwrap();

    let err = service
        .register("Other Alice", "alice@example.com", "another-password")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::DuplicateKey(email) if email == "alice@example.com"));

    // The original record is untouched
    let token = service
        .login("alice@example.com", "correct-horse")
        .await
        .unwrap();
    let principal = service.current_principal(&token).await.unwrap();
    assert_eq!(principal.name, "Alice");
}

#[tokio::test]
async fn test_token_from_other_secret_rejected() {
    let (service, _) = service_with_store();

    let other_store = Arc::new(MemoryStore::default());
    let other_service = AuthService::new(
        other_store,
        AuthConfig::new("some-other-secret", Algorithm::HS256, 30, 4).unwrap(),
    );
    other_service
        .register("Alice", "alice@example.com", "correct-horse")
        .await
        .unwrap();
    let foreign_token = other_service
        .login("alice@example.com", "correct-horse")
        .await
        .unwrap();

    let err = service.current_principal(&foreign_token).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidSignature));
}

#[tokio::test]
async fn test_expired_token_rejected() {
    // A service configured with a negative lifetime issues tokens that
    // are already past expiry, standing in for a clock advance.
    let store = Arc::new(MemoryStore::default());
    let service = AuthService::new(
        store,
        AuthConfig::new("integration-test-secret", Algorithm::HS256, -1, 4).unwrap(),
    );
    service
        .register("Alice", "alice@example.com", "correct-horse")
        .await
        .unwrap();

    let token = service
        .login("alice@example.com", "correct-horse")
        .await
        .unwrap();

    let err = service.current_principal(&token).await.unwrap_err();
    assert!(matches!(err, AuthError::TokenExpired));
}

#[tokio::test]
async fn test_deleted_subject_rejected() {
    let (service, store) = service_with_store();
    service
        .register("Alice", "alice@example.com", "correct-horse")
        .await
        .unwrap();
    let token = service
        .login("alice@example.com", "correct-horse")
        .await
        .unwrap();

    store.users.lock().unwrap().remove("alice@example.com");

    let err = service.current_principal(&token).await.unwrap_err();
    assert!(matches!(err, AuthError::UnknownSubject));
}

#[tokio::test]
async fn test_garbage_tokens_rejected() {
    let (service, _store) = service_with_store();

    for garbage in ["", "not-a-token", "Bearer abc"] {
        let err = service.current_principal(garbage).await.unwrap_err();
        assert!(
            matches!(err, AuthError::MalformedToken),
            "expected MalformedToken for {garbage:?}"
        );
    }
}
