use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    auth::password::hash_password,
    error::ServiceError,
    model::{
        company::Company, device::Device, employee::Employee, report::DailyReportEntry,
        report_email::ReportEmailSetting, user::User, user_company::UserCompany,
    },
    seed::SeedData,
};

/// The in-memory tables. Lookups are linear scans; nothing cascades.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub companies: Vec<Company>,
    pub users: Vec<User>,
    pub employees: Vec<Employee>,
    pub devices: Vec<Device>,
    pub reports: Vec<DailyReportEntry>,
    pub report_settings: Vec<ReportEmailSetting>,
    pub user_companies: Vec<UserCompany>,
}

impl Store {
    /// Copies the seed tables, hashing every seeded password.
    pub fn from_seed(seed: &SeedData) -> Result<Self, ServiceError> {
        let users = seed
            .users
            .iter()
            .map(|u| {
                let password = hash_password(&u.password)
                    .map_err(|e| ServiceError::Internal(format!("hashing seed password: {}", e)))?;
                Ok(User {
                    password,
                    ..u.clone()
                })
            })
            .collect::<Result<Vec<_>, ServiceError>>()?;

        Ok(Self {
            companies: seed.companies.clone(),
            users,
            employees: seed.employees.clone(),
            devices: seed.devices.clone(),
            reports: seed.reports.clone(),
            report_settings: seed.report_settings.clone(),
            user_companies: seed.user_companies.clone(),
        })
    }
}

/// Next integer id after the largest existing one.
pub fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

/// Shared handle to the store. Every access first waits out the simulated
/// backend latency.
pub struct Db {
    store: RwLock<Store>,
    latency: Duration,
}

impl Db {
    pub fn new(store: Store, latency: Duration) -> Self {
        Self {
            store: RwLock::new(store),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        self.simulate_latency().await;
        let store = self.store.read().await;
        f(&store)
    }

    pub async fn write<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        self.simulate_latency().await;
        let mut store = self.store.write().await;
        f(&mut store)
    }
}

pub fn init_db(seed: &SeedData, latency: Duration) -> Result<Db, ServiceError> {
    let store = Store::from_seed(seed)?;
    debug!(
        companies = store.companies.len(),
        employees = store.employees.len(),
        devices = store.devices.len(),
        "Store seeded"
    );
    Ok(Db::new(store, latency))
}
