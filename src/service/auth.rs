use crate::{
    auth::password::verify_password,
    db::Store,
    error::ServiceError,
    model::{role::AdminType, user::User, user_company::UserCompany},
    models::Session,
    service::same_email,
};

/// Email/password check. `None` for an unknown email or a wrong password.
pub fn check_auth<'a>(store: &'a Store, email: &str, password: &str) -> Option<&'a User> {
    store
        .users
        .iter()
        .find(|u| same_email(&u.email, email))
        .filter(|u| verify_password(password, &u.password))
}

/// Email-only sign-in used by the Google flow. Owners must use a password.
pub fn google_auth<'a>(store: &'a Store, email: &str) -> Result<&'a User, ServiceError> {
    let user = store
        .users
        .iter()
        .find(|u| same_email(&u.email, email))
        .ok_or_else(|| ServiceError::Unauthorized("No account for this email".into()))?;

    if user.admin_type == AdminType::Owner {
        return Err(ServiceError::Forbidden(
            "Owner accounts must sign in with a password".into(),
        ));
    }

    Ok(user)
}

/// Builds the session for a freshly authenticated user.
pub fn open_session(store: &Store, user: &User) -> Result<Session, ServiceError> {
    let company = store
        .companies
        .iter()
        .find(|c| c.company_id == user.company_id)
        .ok_or_else(|| ServiceError::not_found("Company"))?;

    Ok(Session::new(user, company))
}

pub fn user_companies(store: &Store, email: &str) -> Vec<UserCompany> {
    store
        .user_companies
        .iter()
        .filter(|uc| same_email(&uc.email, email))
        .cloned()
        .collect()
}

/// Moves `session` to another company the user is associated with. The role
/// recorded for that company replaces the session's admin type.
pub fn switch_company(
    store: &Store,
    session: &Session,
    company_id: u64,
) -> Result<Session, ServiceError> {
    let link = store
        .user_companies
        .iter()
        .find(|uc| uc.company_id == company_id && same_email(&uc.email, &session.email))
        .ok_or_else(|| ServiceError::Forbidden("No access to this company".into()))?;

    let company = store
        .companies
        .iter()
        .find(|c| c.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Company"))?;

    let mut next = session.clone();
    next.admin_type = link.role;
    next.apply_company(company);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seed::SEED, service::test_support};

    #[test]
    fn known_credentials_pass_and_wrong_password_fails() {
        let store = Store::from_seed(&SEED).unwrap();

        let user = check_auth(&store, "owner@acme.test", "owner123").expect("valid login");
        assert_eq!(user.company_id, 1);

        assert!(check_auth(&store, "owner@acme.test", "wrong").is_none());
        assert!(check_auth(&store, "nobody@acme.test", "owner123").is_none());
    }

    #[test]
    fn session_carries_company_fields() {
        let store = test_support::store();
        let user = &store.users[0];
        let session = open_session(&store, user).unwrap();

        assert_eq!(session.company_id, 1);
        assert_eq!(session.company_name, "Acme Bakery");
        assert_eq!(session.city, "Springfield");
        assert_eq!(session.admin_type, AdminType::Owner);
    }

    #[test]
    fn google_sign_in_rejects_owners() {
        let store = test_support::store();

        let err = google_auth(&store, "owner@acme.test").unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));

        let admin = google_auth(&store, "ADMIN@acme.test").unwrap();
        assert_eq!(admin.admin_type, AdminType::Admin);

        let err = google_auth(&store, "ghost@acme.test").unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
    }

    #[test]
    fn switch_requires_an_association() {
        let store = test_support::store();
        let superadmin = store.users.iter().find(|u| u.id == 3).unwrap();
        let session = open_session(&store, superadmin).unwrap();

        assert_eq!(user_companies(&store, &session.email).len(), 2);

        let moved = switch_company(&store, &session, 2).unwrap();
        assert_eq!(moved.company_id, 2);
        assert_eq!(moved.company_name, "Bluebird Logistics");
        assert_eq!(moved.email, session.email);

        let owner = open_session(&store, &store.users[0]).unwrap();
        let err = switch_company(&store, &owner, 2).unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
    }
}
