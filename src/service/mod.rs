//! Queries and mutations over the [`Store`](crate::db::Store).
//!
//! Functions here never sleep or lock; callers go through
//! [`Db`](crate::db::Db) which does both.

pub mod auth;
pub mod company;
pub mod device;
pub mod employee;
pub mod report;
pub mod report_email;

/// Case-insensitive comparison used for every email lookup.
pub(crate) fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
