use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::role::AdminType;

/// Grants the user with `email` access to `company_id` under `role`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserCompany {
    #[schema(example = "super@timeclock.test")]
    pub email: String,
    #[schema(example = 2)]
    pub company_id: u64,
    pub role: AdminType,
}
