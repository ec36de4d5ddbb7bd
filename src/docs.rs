use crate::api::device::PunchRequest;
use crate::model::{
    company::Company,
    device::Device,
    employee::Employee,
    report::DailyReportEntry,
    report_email::ReportEmailSetting,
    role::{AdminType, Frequency},
    user_company::UserCompany,
};
use crate::models::{GoogleLoginReqDto, LoginReqDto, LoginResponse, Session};
use crate::service::{
    company::{CompanyResponse, UpdateCompany},
    device::{CreateDevice, UpdateDevice},
    employee::{BulkImportFailure, BulkImportResult, CreateEmployee, UpdateEmployee},
    report::{DailyReportRow, EmployeeTotal, PunchAction, PunchOutcome, UpdateReportEntry},
    report_email::{CreateReportSetting, UpdateReportSetting},
};
use crate::utils::{contact::ContactForm, zip_lookup::Place};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Timeclock API",
        version = "1.0.0",
        description = r#"
## Employee Time Tracking

Back office for companies whose staff punch in and out on time clock devices.

### Key Features
- **Company profile** with address lookup by ZIP code
- **Employees** with per-company PINs, including bulk import
- **Devices** that record check-ins and check-outs
- **Reports** per day or per date range, with corrections
- **Report emails** sent daily, weekly, biweekly, monthly or bimonthly

### Security
All `/api` endpoints need a **JWT Bearer** token from `/auth/login` or `/auth/google`.
A session ends on logout, when the token expires, or after a period of inactivity.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::google_login,
        crate::auth::handlers::logout,

        crate::api::company::current_session,
        crate::api::company::list_user_companies,
        crate::api::company::switch_company,
        crate::api::company::get_company,
        crate::api::company::update_company,

        crate::api::employee::create_employee,
        crate::api::employee::bulk_import,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::device::list_devices,
        crate::api::device::create_device,
        crate::api::device::update_device,
        crate::api::device::delete_device,
        crate::api::device::punch,

        crate::api::report::daily_report,
        crate::api::report::report_range,
        crate::api::report::update_report_entry,
        crate::api::report::delete_report_entry,

        crate::api::report_email::list_report_settings,
        crate::api::report_email::create_report_setting,
        crate::api::report_email::update_report_setting,
        crate::api::report_email::delete_report_setting,

        crate::api::zip::lookup_zip,
        crate::api::contact::submit_contact
    ),
    components(
        schemas(
            LoginReqDto,
            GoogleLoginReqDto,
            LoginResponse,
            Session,
            AdminType,
            Frequency,
            Company,
            CompanyResponse,
            UpdateCompany,
            UserCompany,
            Employee,
            CreateEmployee,
            UpdateEmployee,
            BulkImportFailure,
            BulkImportResult,
            Device,
            CreateDevice,
            UpdateDevice,
            PunchRequest,
            PunchAction,
            PunchOutcome,
            DailyReportEntry,
            DailyReportRow,
            EmployeeTotal,
            UpdateReportEntry,
            ReportEmailSetting,
            CreateReportSetting,
            UpdateReportSetting,
            Place,
            ContactForm
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Sign-in and sign-out"),
        (name = "Company", description = "Session, company profile and company switching"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Device", description = "Time clock devices and punches"),
        (name = "Report", description = "Check-in and check-out reports"),
        (name = "Report email", description = "Recipients of scheduled reports"),
        (name = "Zip", description = "ZIP code lookup"),
        (name = "Contact", description = "Marketing site contact form"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
