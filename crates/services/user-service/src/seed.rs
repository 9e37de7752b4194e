//! Development seed data.
//!
//! Loading is destructive: the `users` table is dropped and recreated
//! before the fixed set of accounts is inserted.

use domain::User;

use common::AppResult;

use crate::infra::Database;
use crate::service::UserService;

/// Plaintext password shared by every seeded account
pub const SEED_PASSWORD: &str = "password";

/// The fixed development accounts, not yet prepared or hashed.
pub fn seed_users() -> Vec<User> {
    [
        ("Rodrigo", "Valente", "valentergs@gmail.com", "admin", "rodrigo+valente"),
        ("Bruce", "Wayne", "batman@gmail.com", "staff", "bruce+wayne"),
        ("Peter", "Parker", "spiderman@gmail.com", "customer", "peter+parker"),
        ("Edson", "Arantes do Nascimento", "pele@gmail.com", "user", "edson+arantes"),
    ]
    .into_iter()
    .map(|(first_name, last_name, email, role, avatar)| User {
        role: role.to_string(),
        photo: Some(format!("https://robohash.org/{avatar}?set=set2")),
        active: true,
        ..User::new(first_name, last_name, email, SEED_PASSWORD)
    })
    .collect()
}

/// Reset the `users` table and insert the seed accounts through `service`.
///
/// Stops at the first failing insert; rows created before it stay.
pub async fn load(db: &Database, service: &dyn UserService) -> AppResult<usize> {
    tracing::warn!("Seeding: all existing users will be removed");
    db.reset_schema().await?;

    let mut created = 0;
    for user in seed_users() {
        let email = user.email.clone();
        service.create_user(user).await.inspect_err(|e| {
            tracing::error!(email = %email, error = %e, "Failed to seed user");
        })?;
        created += 1;
    }

    tracing::info!(count = created, "Seed users loaded");
    Ok(created)
}
