use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{company::Company, role::AdminType, role::Frequency, user::User};

#[derive(Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "owner@acme.test")]
    pub email: String,
    #[schema(example = "owner123")]
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct GoogleLoginReqDto {
    #[schema(example = "admin@acme.test")]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: u64,
    pub sub: String,
    pub exp: usize,
    /// Session id; keys the server-side [`Session`].
    pub jti: String,
}

/// Profile of the signed-in user and the company they are working in.
///
/// Everything the dashboard needs to render its header and decide which
/// profile fields are editable lives here instead of loose string keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub user_id: u64,
    #[schema(example = "owner@acme.test")]
    pub email: String,
    #[schema(example = "Olivia Owner")]
    pub user_name: String,
    pub admin_type: AdminType,

    #[schema(example = 1)]
    pub company_id: u64,
    #[schema(example = "Acme Bakery")]
    pub company_name: String,
    pub company_logo: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub report_type: Frequency,
}

impl Session {
    pub fn new(user: &User, company: &Company) -> Self {
        let mut session = Self {
            user_id: user.id,
            email: user.email.clone(),
            user_name: user.name.clone(),
            admin_type: user.admin_type,
            company_id: 0,
            company_name: String::new(),
            company_logo: String::new(),
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            report_type: Frequency::default(),
        };
        session.apply_company(company);
        session
    }

    /// Copies the company-derived fields, e.g. after a profile edit or a
    /// company switch.
    pub fn apply_company(&mut self, company: &Company) {
        self.company_id = company.company_id;
        self.company_name = company.name.clone();
        self.company_logo = company.logo.clone();
        self.street = company.street.clone();
        self.city = company.city.clone();
        self.state = company.state.clone();
        self.zip = company.zip.clone();
        self.report_type = company.report_type;
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub session: Session,
}
