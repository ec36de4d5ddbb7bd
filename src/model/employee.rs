use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "emp_id": 1,
        "pin": "1234",
        "name": "John Doe",
        "phone": "2175550101",
        "email": "john.doe@acme.test",
        "admin_level": 0,
        "company_id": 1,
        "active": true
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub emp_id: u64,

    /// Code typed at the check-in device.
    #[schema(example = "1234")]
    pub pin: String,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "2175550101")]
    pub phone: String,

    #[schema(example = "john.doe@acme.test")]
    pub email: String,

    /// 0 for regular staff.
    #[schema(example = 0)]
    pub admin_level: u8,

    #[schema(example = 1)]
    pub company_id: u64,

    #[schema(example = true)]
    pub active: bool,
}
