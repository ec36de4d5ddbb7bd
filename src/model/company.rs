use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::role::Frequency;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "company_id": 1,
        "name": "Acme Bakery",
        "logo": "https://cdn.timeclock.test/logos/acme.png",
        "street": "12 Main St",
        "city": "Springfield",
        "state": "IL",
        "zip": "62701",
        "report_type": "weekly"
    })
)]
pub struct Company {
    #[schema(example = 1)]
    pub company_id: u64,

    #[schema(example = "Acme Bakery")]
    pub name: String,

    #[schema(example = "https://cdn.timeclock.test/logos/acme.png")]
    pub logo: String,

    pub street: String,
    pub city: String,
    pub state: String,

    #[schema(example = "62701")]
    pub zip: String,

    pub report_type: Frequency,
}
