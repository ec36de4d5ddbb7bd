pub mod company;
pub mod device;
pub mod employee;
pub mod report;
pub mod report_email;
pub mod role;
pub mod user;
pub mod user_company;
