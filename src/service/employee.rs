use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::{
    db::{Store, next_id},
    error::ServiceError,
    model::employee::Employee,
    service::same_email,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "4321")]
    pub pin: String,
    #[schema(example = "Lucy Park")]
    pub name: String,
    #[schema(example = "2175550199")]
    pub phone: String,
    #[schema(example = "lucy.park@acme.test", format = "email")]
    pub email: String,
    #[serde(default)]
    #[schema(example = 0)]
    pub admin_level: u8,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEmployee {
    pub pin: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub admin_level: Option<u8>,
    pub active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkImportFailure {
    #[schema(example = "john.doe@acme.test")]
    pub email: String,
    #[schema(example = "Email already exists")]
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkImportResult {
    pub created: Vec<Employee>,
    pub failed: Vec<BulkImportFailure>,
}

pub fn list_employees(store: &Store, company_id: u64) -> Vec<Employee> {
    store
        .employees
        .iter()
        .filter(|e| e.company_id == company_id)
        .cloned()
        .collect()
}

pub fn get_employee(store: &Store, company_id: u64, emp_id: u64) -> Result<Employee, ServiceError> {
    store
        .employees
        .iter()
        .find(|e| e.emp_id == emp_id && e.company_id == company_id)
        .cloned()
        .ok_or_else(|| ServiceError::not_found("Employee"))
}

/// Email and phone are unique across all employees, the PIN only inside
/// one company. `skip` excludes the employee being edited.
fn ensure_unique(
    store: &Store,
    company_id: u64,
    skip: Option<u64>,
    email: Option<&str>,
    phone: Option<&str>,
    pin: Option<&str>,
) -> Result<(), ServiceError> {
    let others = || store.employees.iter().filter(move |e| Some(e.emp_id) != skip);

    if let Some(email) = email {
        if others().any(|e| same_email(&e.email, email)) {
            return Err(ServiceError::already_exists("Email"));
        }
    }
    if let Some(phone) = phone {
        if others().any(|e| e.phone == phone.trim()) {
            return Err(ServiceError::already_exists("Phone"));
        }
    }
    if let Some(pin) = pin {
        if others().any(|e| e.company_id == company_id && e.pin == pin.trim()) {
            return Err(ServiceError::already_exists("PIN"));
        }
    }
    Ok(())
}

pub fn create_employee(
    store: &mut Store,
    company_id: u64,
    input: CreateEmployee,
) -> Result<Employee, ServiceError> {
    ensure_unique(
        store,
        company_id,
        None,
        Some(&input.email),
        Some(&input.phone),
        Some(&input.pin),
    )?;

    let employee = Employee {
        emp_id: next_id(store.employees.iter().map(|e| e.emp_id)),
        pin: input.pin.trim().to_string(),
        name: input.name.trim().to_string(),
        phone: input.phone.trim().to_string(),
        email: input.email.trim().to_string(),
        admin_level: input.admin_level,
        company_id,
        active: true,
    };

    debug!(emp_id = employee.emp_id, company_id, "Employee created");
    store.employees.push(employee.clone());
    Ok(employee)
}

pub fn update_employee(
    store: &mut Store,
    company_id: u64,
    emp_id: u64,
    patch: UpdateEmployee,
) -> Result<Employee, ServiceError> {
    let idx = store
        .employees
        .iter()
        .position(|e| e.emp_id == emp_id && e.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Employee"))?;

    ensure_unique(
        store,
        company_id,
        Some(emp_id),
        patch.email.as_deref(),
        patch.phone.as_deref(),
        patch.pin.as_deref(),
    )?;

    let employee = &mut store.employees[idx];
    if let Some(pin) = patch.pin {
        employee.pin = pin.trim().to_string();
    }
    if let Some(name) = patch.name {
        employee.name = name.trim().to_string();
    }
    if let Some(phone) = patch.phone {
        employee.phone = phone.trim().to_string();
    }
    if let Some(email) = patch.email {
        employee.email = email.trim().to_string();
    }
    if let Some(admin_level) = patch.admin_level {
        employee.admin_level = admin_level;
    }
    if let Some(active) = patch.active {
        employee.active = active;
    }

    Ok(employee.clone())
}

pub fn delete_employee(store: &mut Store, company_id: u64, emp_id: u64) -> Result<(), ServiceError> {
    let idx = store
        .employees
        .iter()
        .position(|e| e.emp_id == emp_id && e.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Employee"))?;

    store.employees.remove(idx);
    debug!(emp_id, company_id, "Employee deleted");
    Ok(())
}

/// Creates each row independently; a failing row is recorded and skipped.
pub fn bulk_import(store: &mut Store, company_id: u64, rows: Vec<CreateEmployee>) -> BulkImportResult {
    let mut result = BulkImportResult {
        created: Vec::new(),
        failed: Vec::new(),
    };

    for row in rows {
        let email = row.email.clone();
        match create_employee(store, company_id, row) {
            Ok(employee) => result.created.push(employee),
            Err(e) => result.failed.push(BulkImportFailure {
                email,
                error: e.to_string(),
            }),
        }
    }

    info!(
        company_id,
        created = result.created.len(),
        failed = result.failed.len(),
        "Bulk employee import finished"
    );
    result
}
