use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One check-in/check-out pair recorded by a device.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DailyReportEntry {
    #[schema(example = 1)]
    pub entry_id: u64,

    #[schema(example = "1234")]
    pub pin: String,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "Regular")]
    pub entry_type: String,

    #[schema(example = 1)]
    pub emp_id: u64,

    #[schema(value_type = Option<String>, example = "2026-10-01T08:00:00")]
    pub check_in: Option<NaiveDateTime>,

    #[schema(value_type = Option<String>, example = "2026-10-01T16:30:00")]
    pub check_out: Option<NaiveDateTime>,

    #[schema(example = "08:30")]
    pub time_worked: Option<String>,

    #[schema(example = 1)]
    pub device_id: u64,

    #[schema(example = 1)]
    pub company_id: u64,

    #[schema(value_type = String, format = "date", example = "2026-10-01")]
    pub date: NaiveDate,
}

impl DailyReportEntry {
    /// Minutes between check-in and check-out, when both are known.
    pub fn worked_minutes(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(start), Some(end)) if end >= start => Some((end - start).num_minutes()),
            _ => None,
        }
    }

    pub fn refresh_time_worked(&mut self) {
        self.time_worked = self.worked_minutes().map(format_minutes);
    }
}

/// Renders minutes as `HH:MM`.
pub fn format_minutes(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn entry(check_in: Option<NaiveDateTime>, check_out: Option<NaiveDateTime>) -> DailyReportEntry {
        DailyReportEntry {
            entry_id: 1,
            pin: "1234".into(),
            name: "John Doe".into(),
            entry_type: "Regular".into(),
            emp_id: 1,
            check_in,
            check_out,
            time_worked: None,
            device_id: 1,
            company_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        }
    }

    #[test]
    fn time_worked_needs_both_timestamps() {
        let mut open = entry(Some(at(8, 0)), None);
        open.refresh_time_worked();
        assert_eq!(open.time_worked, None);

        let mut closed = entry(Some(at(8, 0)), Some(at(16, 45)));
        closed.refresh_time_worked();
        assert_eq!(closed.time_worked.as_deref(), Some("08:45"));
    }

    #[test]
    fn checkout_before_checkin_is_ignored() {
        let e = entry(Some(at(9, 0)), Some(at(8, 0)));
        assert_eq!(e.worked_minutes(), None);
    }
}
