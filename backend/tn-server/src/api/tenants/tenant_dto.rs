use tn_core::{Plan, Tenant};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TenantDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub plan: Plan,
}

impl From<Tenant> for TenantDto {
    fn from(t: Tenant) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name,
            slug: t.slug,
            plan: t.plan,
        }
    }
}
