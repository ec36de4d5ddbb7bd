use crate::models::Session;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, error::ErrorUnauthorized};
use futures::future::{Ready, ready};

/// The caller of a protected route, as resolved by the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub session_id: String,
    pub session: Session,
}

impl AuthUser {
    /// Company the user is currently working in.
    pub fn company_id(&self) -> u64 {
        self.session.company_id
    }
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(ErrorUnauthorized("Missing session"))),
        }
    }
}
