use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    db::{Store, next_id},
    error::ServiceError,
    model::{report_email::ReportEmailSetting, role::Frequency},
    service::same_email,
};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateReportSetting {
    #[schema(example = "payroll@acme.test", format = "email")]
    pub email: String,
    #[serde(default)]
    pub is_daily: bool,
    #[serde(default)]
    pub is_weekly: bool,
    #[serde(default)]
    pub is_biweekly: bool,
    #[serde(default)]
    pub is_monthly: bool,
    #[serde(default)]
    pub is_bimonthly: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReportSetting {
    pub email: Option<String>,
    pub is_daily: Option<bool>,
    pub is_weekly: Option<bool>,
    pub is_biweekly: Option<bool>,
    pub is_monthly: Option<bool>,
    pub is_bimonthly: Option<bool>,
}

/// Recipients of the company, optionally only those on `frequency`'s
/// mailing list.
pub fn list_report_settings(
    store: &Store,
    company_id: u64,
    frequency: Option<Frequency>,
) -> Vec<ReportEmailSetting> {
    store
        .report_settings
        .iter()
        .filter(|s| s.company_id == company_id)
        .filter(|s| frequency.is_none_or(|f| s.receives(f)))
        .cloned()
        .collect()
}

fn email_taken(store: &Store, company_id: u64, email: &str, skip: Option<u64>) -> bool {
    store
        .report_settings
        .iter()
        .any(|s| s.company_id == company_id && Some(s.id) != skip && same_email(&s.email, email))
}

pub fn create_report_setting(
    store: &mut Store,
    company_id: u64,
    input: CreateReportSetting,
) -> Result<ReportEmailSetting, ServiceError> {
    if email_taken(store, company_id, &input.email, None) {
        return Err(ServiceError::already_exists("Email"));
    }

    let setting = ReportEmailSetting {
        id: next_id(store.report_settings.iter().map(|s| s.id)),
        email: input.email.trim().to_string(),
        company_id,
        is_daily: input.is_daily,
        is_weekly: input.is_weekly,
        is_biweekly: input.is_biweekly,
        is_monthly: input.is_monthly,
        is_bimonthly: input.is_bimonthly,
    };
    store.report_settings.push(setting.clone());
    Ok(setting)
}

pub fn update_report_setting(
    store: &mut Store,
    company_id: u64,
    id: u64,
    patch: UpdateReportSetting,
) -> Result<ReportEmailSetting, ServiceError> {
    let idx = store
        .report_settings
        .iter()
        .position(|s| s.id == id && s.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Report setting"))?;

    if let Some(email) = &patch.email {
        if email_taken(store, company_id, email, Some(id)) {
            return Err(ServiceError::already_exists("Email"));
        }
    }

    let setting = &mut store.report_settings[idx];
    if let Some(email) = patch.email {
        setting.email = email.trim().to_string();
    }
    setting.is_daily = patch.is_daily.unwrap_or(setting.is_daily);
    setting.is_weekly = patch.is_weekly.unwrap_or(setting.is_weekly);
    setting.is_biweekly = patch.is_biweekly.unwrap_or(setting.is_biweekly);
    setting.is_monthly = patch.is_monthly.unwrap_or(setting.is_monthly);
    setting.is_bimonthly = patch.is_bimonthly.unwrap_or(setting.is_bimonthly);
    Ok(setting.clone())
}

pub fn delete_report_setting(store: &mut Store, company_id: u64, id: u64) -> Result<(), ServiceError> {
    let idx = store
        .report_settings
        .iter()
        .position(|s| s.id == id && s.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Report setting"))?;
    store.report_settings.remove(idx);
    Ok(())
}
