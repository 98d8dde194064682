#![allow(dead_code)]

use tn_core::{Note, Role, Tenant, User};
use tn_db::{TenantRepository, UserRepository, create_in_memory_pool};

use sqlx::SqlitePool;
use uuid::Uuid;

/// In-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    create_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a free tenant with the given slug
pub async fn create_test_tenant(pool: &SqlitePool, slug: &str) -> Tenant {
    let tenant = Tenant::new(format!("Tenant {}", slug), slug.to_string());
    TenantRepository::new(pool.clone())
        .create(&tenant)
        .await
        .expect("Failed to create test tenant");
    tenant
}

/// Inserts a user in `tenant_id`. The hash is not a real PHC string.
pub async fn create_test_user(pool: &SqlitePool, tenant_id: Uuid, role: Role) -> User {
    let user = User::new(
        format!("user-{}@example.test", Uuid::new_v4()),
        "not-a-real-hash".to_string(),
        role,
        tenant_id,
    );
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

pub fn create_test_note(tenant_id: Uuid, user_id: Uuid, title: &str) -> Note {
    Note::new(tenant_id, user_id, title.to_string(), "body".to_string())
}
