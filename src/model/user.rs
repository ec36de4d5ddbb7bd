use serde::{Deserialize, Serialize};

use crate::model::role::AdminType;

/// A dashboard account. `password` holds an argon2 hash once the store is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub admin_type: AdminType,
    pub company_id: u64,
}
