use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use crate::model::{
    company::Company,
    device::Device,
    employee::Employee,
    report::DailyReportEntry,
    report_email::ReportEmailSetting,
    role::{AdminType, Frequency},
    user::User,
    user_company::UserCompany,
};

/// Initial contents of every store. Passwords are plaintext here and get
/// hashed when a store is built from this data.
pub struct SeedData {
    pub companies: Vec<Company>,
    pub users: Vec<User>,
    pub employees: Vec<Employee>,
    pub devices: Vec<Device>,
    pub reports: Vec<DailyReportEntry>,
    pub report_settings: Vec<ReportEmailSetting>,
    pub user_companies: Vec<UserCompany>,
}

pub static SEED: Lazy<SeedData> = Lazy::new(|| {
    let employees = vec![
        employee(1, "1234", "John Doe", "2175550101", "john.doe@acme.test", 0, 1),
        employee(2, "2345", "Jane Roe", "2175550102", "jane.roe@acme.test", 1, 1),
        employee(3, "3456", "Mark Lee", "2175550103", "mark.lee@acme.test", 0, 1),
        employee(4, "1234", "Ana Cruz", "5625550104", "ana.cruz@bluebird.test", 0, 2),
        employee(5, "5678", "Raj Patel", "5625550105", "raj.patel@bluebird.test", 0, 2),
    ];
    let reports = vec![
        report(&employees, 1, 1, "2026-10-01 08:00", Some("2026-10-01 16:30"), 1),
        report(&employees, 2, 2, "2026-10-01 09:15", Some("2026-10-01 17:00"), 2),
        report(&employees, 3, 3, "2026-10-01 07:45", None, 1),
        report(&employees, 4, 1, "2026-10-02 08:05", Some("2026-10-02 12:05"), 1),
        report(&employees, 5, 4, "2026-10-01 06:00", Some("2026-10-01 14:00"), 3),
    ];

    SeedData {
        employees,
        reports,
        companies: vec![
            company(
                1,
                "Acme Bakery",
                "https://cdn.timeclock.test/logos/acme.png",
                ("12 Main St", "Springfield", "IL", "62701"),
                Frequency::Weekly,
            ),
            company(
                2,
                "Bluebird Logistics",
                "https://cdn.timeclock.test/logos/bluebird.png",
                ("400 Harbor Blvd", "Long Beach", "CA", "90802"),
                Frequency::Biweekly,
            ),
        ],
        users: vec![
            user(1, "owner@acme.test", "owner123", "Olivia Owner", AdminType::Owner, 1),
            user(2, "admin@acme.test", "admin123", "Adam Admin", AdminType::Admin, 1),
            user(
                3,
                "super@timeclock.test",
                "super123",
                "Sam Super",
                AdminType::SuperAdmin,
                1,
            ),
            user(4, "owner@bluebird.test", "bluebird123", "Bea Bird", AdminType::Owner, 2),
        ],
        devices: vec![
            device(1, "Front door", "America/Chicago", 1),
            device(2, "Back office", "America/Chicago", 1),
            device(3, "Dock 4", "America/Los_Angeles", 2),
        ],
        report_settings: vec![
            ReportEmailSetting {
                id: 1,
                email: "payroll@acme.test".into(),
                company_id: 1,
                is_daily: false,
                is_weekly: true,
                is_biweekly: false,
                is_monthly: true,
                is_bimonthly: false,
            },
            ReportEmailSetting {
                id: 2,
                email: "ops@bluebird.test".into(),
                company_id: 2,
                is_daily: true,
                is_weekly: false,
                is_biweekly: true,
                is_monthly: false,
                is_bimonthly: false,
            },
        ],
        user_companies: vec![
            user_company("owner@acme.test", 1, AdminType::Owner),
            user_company("admin@acme.test", 1, AdminType::Admin),
            user_company("super@timeclock.test", 1, AdminType::SuperAdmin),
            user_company("super@timeclock.test", 2, AdminType::SuperAdmin),
            user_company("owner@bluebird.test", 2, AdminType::Owner),
        ],
    }
});

fn company(
    company_id: u64,
    name: &str,
    logo: &str,
    (street, city, state, zip): (&str, &str, &str, &str),
    report_type: Frequency,
) -> Company {
    Company {
        company_id,
        name: name.into(),
        logo: logo.into(),
        street: street.into(),
        city: city.into(),
        state: state.into(),
        zip: zip.into(),
        report_type,
    }
}

fn user(
    id: u64,
    email: &str,
    password: &str,
    name: &str,
    admin_type: AdminType,
    company_id: u64,
) -> User {
    User {
        id,
        email: email.into(),
        password: password.into(),
        name: name.into(),
        admin_type,
        company_id,
    }
}

fn employee(
    emp_id: u64,
    pin: &str,
    name: &str,
    phone: &str,
    email: &str,
    admin_level: u8,
    company_id: u64,
) -> Employee {
    Employee {
        emp_id,
        pin: pin.into(),
        name: name.into(),
        phone: phone.into(),
        email: email.into(),
        admin_level,
        company_id,
        active: true,
    }
}

fn device(device_id: u64, name: &str, timezone: &str, company_id: u64) -> Device {
    Device {
        device_id,
        name: name.into(),
        timezone: timezone.into(),
        company_id,
    }
}

fn user_company(email: &str, company_id: u64, role: AdminType) -> UserCompany {
    UserCompany {
        email: email.into(),
        company_id,
        role,
    }
}

fn timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").ok()
}

fn report(
    employees: &[Employee],
    entry_id: u64,
    emp_id: u64,
    check_in: &str,
    check_out: Option<&str>,
    device_id: u64,
) -> DailyReportEntry {
    let (pin, name, company_id) = employees
        .iter()
        .find(|e| e.emp_id == emp_id)
        .map(|e| (e.pin.clone(), e.name.clone(), e.company_id))
        .unwrap_or_default();
    let check_in = timestamp(check_in);

    let mut entry = DailyReportEntry {
        entry_id,
        pin,
        name,
        entry_type: "Regular".into(),
        emp_id,
        check_in,
        check_out: check_out.and_then(timestamp),
        time_worked: None,
        device_id,
        company_id,
        date: check_in.map(|t| t.date()).unwrap_or(NaiveDate::MIN),
    };
    entry.refresh_time_worked();
    entry
}
