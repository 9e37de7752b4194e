//! Integration tests for the development seed loader.

mod support;

use support::{ada, manager, memory_db};
use user_service_lib::seed::{self, SEED_PASSWORD};
use user_service_lib::service::UserService;

#[tokio::test]
async fn test_seed_loads_four_hashed_users() {
    let db = memory_db().await;
    let service = manager(&db);

    let count = seed::load(&db, &service).await.unwrap();
    assert_eq!(count, 4);

    let users = service.list_users().await.unwrap();
    assert_eq!(users.len(), 4);

    let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
    assert!(emails.contains(&"valentergs@gmail.com"));
    assert!(emails.contains(&"batman@gmail.com"));
    assert!(emails.contains(&"spiderman@gmail.com"));
    assert!(emails.contains(&"pele@gmail.com"));

    for user in &users {
        assert_ne!(user.password, SEED_PASSWORD);
        assert!(user.verify_password(SEED_PASSWORD).is_ok());
        assert!(user.active);
    }
}

#[tokio::test]
async fn test_seed_replaces_existing_users() {
    let db = memory_db().await;
    let service = manager(&db);
    service.create_user(ada()).await.unwrap();

    seed::load(&db, &service).await.unwrap();
    // Loading twice must not hit the unique email constraint
    seed::load(&db, &service).await.unwrap();

    let users = service.list_users().await.unwrap();
    assert_eq!(users.len(), 4);
    assert!(users.iter().all(|u| u.email != "ada@example.com"));
}

#[tokio::test]
async fn test_seeded_admin_can_log_in() {
    let db = memory_db().await;
    let service = manager(&db);
    seed::load(&db, &service).await.unwrap();

    let admin = service
        .verify_credentials("valentergs@gmail.com".to_string(), SEED_PASSWORD.to_string())
        .await
        .unwrap();

    assert_eq!(admin.role, "admin");
    assert_eq!(admin.first_name, "Rodrigo");
}
