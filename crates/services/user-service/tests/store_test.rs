//! Integration tests for the user store and service against SQLite.

mod support;

use support::{ada, manager, memory_db, store};
use domain::{User, FIND_ALL_LIMIT};
use user_service_lib::repository::UserRepository;
use user_service_lib::service::UserService;

use common::AppError;

// =============================================================================
// Service Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_create_then_read_back() {
    let db = memory_db().await;
    let service = manager(&db);

    let created = service.create_user(ada()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.role, "user");
    assert!(created.active);
    assert_ne!(created.password, "secret123");

    let fetched = service.get_user(created.id).await.unwrap();
    assert_eq!(fetched.email, "ada@example.com");
    assert!(fetched.verify_password("secret123").is_ok());

    let found = store(&db)
        .find_by_email("ada@example.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn test_create_trims_email() {
    let db = memory_db().await;
    let service = manager(&db);

    let mut user = ada();
    user.email = "  ada@example.com\n".to_string();

    let created = service.create_user(user).await.unwrap();
    assert_eq!(created.email, "ada@example.com");
}

#[tokio::test]
async fn test_blank_role_defaults_to_user_on_create_and_update() {
    let db = memory_db().await;
    let service = manager(&db);

    let created = service
        .create_user(User {
            role: String::new(),
            ..ada()
        })
        .await
        .unwrap();
    assert_eq!(created.role, "user");

    service
        .update_user(
            created.id,
            User {
                role: "admin".to_string(),
                ..ada()
            },
        )
        .await
        .unwrap();
    let updated = service
        .update_user(
            created.id,
            User {
                role: "   ".to_string(),
                ..ada()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.role, "user");

    let stored = service.get_user(created.id).await.unwrap();
    assert_eq!(stored.role, "user");
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_by_store() {
    let db = memory_db().await;
    let service = manager(&db);

    service.create_user(ada()).await.unwrap();
    let err = service.create_user(ada()).await.unwrap_err();

    assert!(matches!(err, AppError::Database(_)));
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn test_get_missing_user() {
    let db = memory_db().await;
    let service = manager(&db);

    assert!(matches!(service.get_user(999).await, Err(AppError::NotFound)));
    assert!(store(&db).find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_overwrites_and_rehashes() {
    let db = memory_db().await;
    let service = manager(&db);
    let created = service.create_user(ada()).await.unwrap();

    let replacement = User {
        role: "admin".to_string(),
        photo: Some("https://robohash.org/ada?set=set2".to_string()),
        ..User::new("Augusta", "King", "countess@example.com", "new-secret")
    };
    let updated = service.update_user(created.id, replacement).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.email, "countess@example.com");
    assert_eq!(updated.role, "admin");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.verify_password("new-secret").is_ok());
    assert!(updated.verify_password("secret123").is_err());
}

#[tokio::test]
async fn test_update_missing_user() {
    let db = memory_db().await;
    let service = manager(&db);

    let result = service.update_user(404, ada()).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_reports_rows() {
    let db = memory_db().await;
    let service = manager(&db);
    let created = service.create_user(ada()).await.unwrap();

    assert_eq!(service.delete_user(created.id).await.unwrap(), 1);
    assert_eq!(service.delete_user(created.id).await.unwrap(), 0);
    assert!(matches!(service.get_user(created.id).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_verify_credentials() {
    let db = memory_db().await;
    let service = manager(&db);
    let created = service.create_user(ada()).await.unwrap();

    let user = service
        .verify_credentials("ada@example.com".to_string(), "secret123".to_string())
        .await
        .unwrap();
    assert_eq!(user.id, created.id);

    let wrong = service
        .verify_credentials("ada@example.com".to_string(), "nope".to_string())
        .await;
    assert!(matches!(wrong, Err(AppError::InvalidCredentials)));
}

// =============================================================================
// Repository Tests
// =============================================================================

#[tokio::test]
async fn test_find_all_is_capped() {
    let db = memory_db().await;
    let repo = store(&db);

    let total = FIND_ALL_LIMIT as usize + 5;
    for i in 0..total {
        let user = User::new("User", i.to_string(), format!("user{i}@example.com"), "hash");
        repo.create(user).await.unwrap();
    }

    let users = repo.find_all().await.unwrap();
    assert_eq!(users.len(), FIND_ALL_LIMIT as usize);
}

#[tokio::test]
async fn test_repository_update_missing_returns_none() {
    let db = memory_db().await;
    let repo = store(&db);

    assert!(repo.update(7, ada()).await.unwrap().is_none());
    assert_eq!(repo.delete(7).await.unwrap(), 0);
}

#[tokio::test]
async fn test_ids_beyond_storage_range_do_not_exist() {
    let db = memory_db().await;
    let repo = store(&db);

    assert!(repo.find_by_id(u32::MAX).await.unwrap().is_none());
    assert!(repo.update(u32::MAX, ada()).await.unwrap().is_none());
    assert_eq!(repo.delete(u32::MAX).await.unwrap(), 0);
}
