//! Back office for employee time tracking: companies, employees, time clock
//! devices, check-in/out reports and report-email recipients, served over
//! actix-web from a typed in-memory store.
//!
//! The [`utils`] module also carries the client-side behaviors the dashboard
//! relies on (debounced ZIP lookup, idle logout, modal dismissal).

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod models;
pub mod routes;
pub mod seed;
pub mod service;
pub mod utils;

pub use utils::{
    auto_logout::AutoLogout,
    debounce::Debouncer,
    modal_close::{ModalDismiss, UiEvent},
    zip_lookup::{HttpZipResolver, Place, ZIP_DEBOUNCE, ZipLookup, ZipResolver},
};
