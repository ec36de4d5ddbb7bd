use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::{
    db::Store,
    error::ServiceError,
    model::{
        company::Company,
        role::{AdminType, Frequency},
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyResponse {
    #[serde(flatten)]
    pub company: Company,
    #[schema(example = 3)]
    pub employee_count: usize,
    #[schema(example = 2)]
    pub device_count: usize,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub report_type: Option<Frequency>,
}

pub fn get_company(store: &Store, company_id: u64) -> Result<CompanyResponse, ServiceError> {
    let company = store
        .companies
        .iter()
        .find(|c| c.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Company"))?;

    Ok(CompanyResponse {
        company: company.clone(),
        employee_count: store
            .employees
            .iter()
            .filter(|e| e.company_id == company_id)
            .count(),
        device_count: store
            .devices
            .iter()
            .filter(|d| d.company_id == company_id)
            .count(),
    })
}

/// Applies the supplied fields. Admins may only change the address and the
/// report type; owners and super admins may edit everything.
pub fn update_company(
    store: &mut Store,
    company_id: u64,
    patch: UpdateCompany,
    editor: AdminType,
) -> Result<Company, ServiceError> {
    let company = store
        .companies
        .iter_mut()
        .find(|c| c.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Company"))?;

    // Resubmitting the current name or logo is not an edit.
    let renames = patch.name.as_ref().is_some_and(|n| *n != company.name)
        || patch.logo.as_ref().is_some_and(|l| *l != company.logo);
    if renames && !editor.can_edit_full_profile() {
        return Err(ServiceError::Forbidden(
            "Admins may only edit the company address and report type".into(),
        ));
    }

    if let Some(name) = patch.name {
        company.name = name;
    }
    if let Some(logo) = patch.logo {
        company.logo = logo;
    }
    if let Some(street) = patch.street {
        company.street = street;
    }
    if let Some(city) = patch.city {
        company.city = city;
    }
    if let Some(state) = patch.state {
        company.state = state;
    }
    if let Some(zip) = patch.zip {
        company.zip = zip;
    }
    if let Some(report_type) = patch.report_type {
        company.report_type = report_type;
    }

    debug!(company_id, %editor, "Company profile updated");
    Ok(company.clone())
}
