use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A physical check-in terminal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Device {
    #[schema(example = 1)]
    pub device_id: u64,

    #[schema(example = "Front door")]
    pub name: String,

    #[schema(example = "America/Chicago")]
    pub timezone: String,

    #[schema(example = 1)]
    pub company_id: u64,
}
