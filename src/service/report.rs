use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    db::{Store, next_id},
    error::ServiceError,
    model::report::{DailyReportEntry, format_minutes},
    service::device::find_device,
};

/// Row of the daily report table, named the way the dashboard renders it.
#[derive(Debug, Serialize, ToSchema)]
pub struct DailyReportRow {
    #[serde(rename = "Pin")]
    pub pin: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub entry_type: String,
    #[serde(rename = "EmpID")]
    pub emp_id: u64,
    #[serde(rename = "CheckIn")]
    #[schema(value_type = Option<String>)]
    pub check_in: Option<NaiveDateTime>,
    #[serde(rename = "CheckOut")]
    #[schema(value_type = Option<String>)]
    pub check_out: Option<NaiveDateTime>,
    #[serde(rename = "TimeWorked")]
    pub time_worked: Option<String>,
    #[serde(rename = "DeviceID")]
    pub device_id: u64,
}

impl From<&DailyReportEntry> for DailyReportRow {
    fn from(e: &DailyReportEntry) -> Self {
        Self {
            pin: e.pin.clone(),
            name: e.name.clone(),
            entry_type: e.entry_type.clone(),
            emp_id: e.emp_id,
            check_in: e.check_in,
            check_out: e.check_out,
            time_worked: e.time_worked.clone(),
            device_id: e.device_id,
        }
    }
}

/// Per-employee totals over a date range.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeTotal {
    pub emp_id: u64,
    pub pin: String,
    pub name: String,
    pub days_worked: usize,
    pub total_minutes: i64,
    #[schema(example = "38:15")]
    pub time_worked: String,
    /// Entries still waiting for a check-out.
    pub open_entries: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PunchAction {
    CheckIn,
    CheckOut,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PunchOutcome {
    pub action: PunchAction,
    pub entry: DailyReportEntry,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReportEntry {
    #[schema(value_type = Option<String>, example = "2026-10-01T08:00:00")]
    pub check_in: Option<NaiveDateTime>,
    #[schema(value_type = Option<String>, example = "2026-10-01T16:30:00")]
    pub check_out: Option<NaiveDateTime>,
    pub entry_type: Option<String>,
}

pub fn daily_report(store: &Store, company_id: u64, date: NaiveDate) -> Vec<DailyReportRow> {
    store
        .reports
        .iter()
        .filter(|e| e.company_id == company_id && e.date == date)
        .map(DailyReportRow::from)
        .collect()
}

/// Sums worked time per employee for `from..=to`, ordered by employee id.
pub fn report_range(
    store: &Store,
    company_id: u64,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<EmployeeTotal>, ServiceError> {
    if from > to {
        return Err(ServiceError::Validation(
            "Start date must not be after end date".into(),
        ));
    }

    let mut totals: BTreeMap<u64, (EmployeeTotal, Vec<NaiveDate>)> = BTreeMap::new();
    for entry in store
        .reports
        .iter()
        .filter(|e| e.company_id == company_id && e.date >= from && e.date <= to)
    {
        let (total, days) = totals.entry(entry.emp_id).or_insert_with(|| {
            (
                EmployeeTotal {
                    emp_id: entry.emp_id,
                    pin: entry.pin.clone(),
                    name: entry.name.clone(),
                    days_worked: 0,
                    total_minutes: 0,
                    time_worked: String::new(),
                    open_entries: 0,
                },
                Vec::new(),
            )
        });

        match entry.worked_minutes() {
            Some(minutes) => total.total_minutes += minutes,
            None => total.open_entries += 1,
        }
        if !days.contains(&entry.date) {
            days.push(entry.date);
        }
    }

    Ok(totals
        .into_values()
        .map(|(mut total, days)| {
            total.days_worked = days.len();
            total.time_worked = format_minutes(total.total_minutes);
            total
        })
        .collect())
}

/// Records a PIN typed at a device: closes the employee's open entry for
/// that day, or opens a new one.
pub fn punch(
    store: &mut Store,
    company_id: u64,
    device_id: u64,
    pin: &str,
    at: NaiveDateTime,
) -> Result<PunchOutcome, ServiceError> {
    find_device(store, company_id, device_id)?;

    let employee = store
        .employees
        .iter()
        .find(|e| e.company_id == company_id && e.pin == pin.trim())
        .ok_or_else(|| ServiceError::not_found("Employee"))?;
    if !employee.active {
        return Err(ServiceError::Forbidden("Employee is inactive".into()));
    }
    let (emp_id, pin, name) = (employee.emp_id, employee.pin.clone(), employee.name.clone());

    let open = store.reports.iter_mut().find(|e| {
        e.emp_id == emp_id && e.company_id == company_id && e.date == at.date() && e.check_out.is_none()
    });

    if let Some(entry) = open {
        if entry.check_in.is_some_and(|start| at < start) {
            return Err(ServiceError::Validation(
                "Check-out cannot be earlier than check-in".into(),
            ));
        }
        entry.check_out = Some(at);
        entry.refresh_time_worked();
        info!(emp_id, device_id, "Checked out");
        return Ok(PunchOutcome {
            action: PunchAction::CheckOut,
            entry: entry.clone(),
        });
    }

    let entry = DailyReportEntry {
        entry_id: next_id(store.reports.iter().map(|e| e.entry_id)),
        pin,
        name,
        entry_type: "Regular".into(),
        emp_id,
        check_in: Some(at),
        check_out: None,
        time_worked: None,
        device_id,
        company_id,
        date: at.date(),
    };
    store.reports.push(entry.clone());
    info!(emp_id, device_id, "Checked in");

    Ok(PunchOutcome {
        action: PunchAction::CheckIn,
        entry,
    })
}

pub fn update_report_entry(
    store: &mut Store,
    company_id: u64,
    entry_id: u64,
    patch: UpdateReportEntry,
) -> Result<DailyReportEntry, ServiceError> {
    let entry = store
        .reports
        .iter_mut()
        .find(|e| e.entry_id == entry_id && e.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Report entry"))?;

    let check_in = patch.check_in.or(entry.check_in);
    let check_out = patch.check_out.or(entry.check_out);
    if let (Some(start), Some(end)) = (check_in, check_out) {
        if end < start {
            return Err(ServiceError::Validation(
                "Check-out cannot be earlier than check-in".into(),
            ));
        }
    }

    entry.check_in = check_in;
    entry.check_out = check_out;
    if let Some(start) = check_in {
        entry.date = start.date();
    }
    if let Some(entry_type) = patch.entry_type {
        entry.entry_type = entry_type;
    }
    entry.refresh_time_worked();
    Ok(entry.clone())
}

pub fn delete_report_entry(store: &mut Store, company_id: u64, entry_id: u64) -> Result<(), ServiceError> {
    let idx = store
        .reports
        .iter()
        .position(|e| e.entry_id == entry_id && e.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Report entry"))?;
    store.reports.remove(idx);
    Ok(())
}
