use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::role::Frequency;

/// Who receives report summaries for a company, and how often.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportEmailSetting {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "payroll@acme.test")]
    pub email: String,

    #[schema(example = 1)]
    pub company_id: u64,

    pub is_daily: bool,
    pub is_weekly: bool,
    pub is_biweekly: bool,
    pub is_monthly: bool,
    pub is_bimonthly: bool,
}

impl ReportEmailSetting {
    pub fn receives(&self, frequency: Frequency) -> bool {
        match frequency {
            Frequency::Daily => self.is_daily,
            Frequency::Weekly => self.is_weekly,
            Frequency::Biweekly => self.is_biweekly,
            Frequency::Monthly => self.is_monthly,
            Frequency::Bimonthly => self.is_bimonthly,
        }
    }
}
