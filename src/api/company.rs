use actix_web::{HttpResponse, web};
use tracing::info;

use crate::{
    auth::{auth::AuthUser, session::SessionStore},
    db::Db,
    error::ServiceError,
    service::{
        auth::{switch_company as switch_session_company, user_companies},
        company::{UpdateCompany, get_company as find_company, update_company as apply_update},
    },
};

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Profile of the signed-in user", body = crate::models::Session),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Company",
    security(("bearer_auth" = []))
)]
pub async fn current_session(auth: AuthUser) -> HttpResponse {
    HttpResponse::Ok().json(auth.session)
}

#[utoipa::path(
    get,
    path = "/api/companies",
    responses((status = 200, description = "Companies the user can switch to", body = [crate::model::user_company::UserCompany])),
    tag = "Company",
    security(("bearer_auth" = []))
)]
pub async fn list_user_companies(
    auth: AuthUser,
    db: web::Data<Db>,
) -> actix_web::Result<HttpResponse> {
    let companies = db.read(|store| user_companies(store, &auth.session.email)).await;
    Ok(HttpResponse::Ok().json(companies))
}

#[utoipa::path(
    post,
    path = "/api/companies/{company_id}/switch",
    params(("company_id", Path, description = "Company ID")),
    responses(
        (status = 200, description = "Session now points at the company", body = crate::models::Session),
        (status = 403, description = "No access to this company")
    ),
    tag = "Company",
    security(("bearer_auth" = []))
)]
pub async fn switch_company(
    auth: AuthUser,
    db: web::Data<Db>,
    sessions: web::Data<SessionStore>,
    path: web::Path<u64>,
) -> actix_web::Result<HttpResponse> {
    let company_id = path.into_inner();
    let session = db
        .read(|store| switch_session_company(store, &auth.session, company_id))
        .await?;

    if !sessions.update(&auth.session_id, session.clone()).await {
        return Err(ServiceError::Unauthorized("Session expired".into()).into());
    }

    info!(user_id = session.user_id, company_id, "Switched company");
    Ok(HttpResponse::Ok().json(session))
}

#[utoipa::path(
    get,
    path = "/api/company",
    responses(
        (status = 200, description = "Active company profile", body = crate::service::company::CompanyResponse),
        (status = 404, description = "Company not found")
    ),
    tag = "Company",
    security(("bearer_auth" = []))
)]
pub async fn get_company(auth: AuthUser, db: web::Data<Db>) -> actix_web::Result<HttpResponse> {
    let company = db.read(|store| find_company(store, auth.company_id())).await?;
    Ok(HttpResponse::Ok().json(company))
}

/// Update the active company's profile and refresh the caller's session.
#[utoipa::path(
    put,
    path = "/api/company",
    request_body = UpdateCompany,
    responses(
        (status = 200, description = "Updated session", body = crate::models::Session),
        (status = 403, description = "Field not editable for this admin type"),
        (status = 404, description = "Company not found")
    ),
    tag = "Company",
    security(("bearer_auth" = []))
)]
pub async fn update_company(
    auth: AuthUser,
    db: web::Data<Db>,
    sessions: web::Data<SessionStore>,
    payload: web::Json<UpdateCompany>,
) -> actix_web::Result<HttpResponse> {
    let company_id = auth.company_id();
    let editor = auth.session.admin_type;
    let company = db
        .write(|store| apply_update(store, company_id, payload.into_inner(), editor))
        .await?;

    let mut session = auth.session;
    session.apply_company(&company);
    if !sessions.update(&auth.session_id, session.clone()).await {
        return Err(ServiceError::Unauthorized("Session expired".into()).into());
    }

    Ok(HttpResponse::Ok().json(session))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::Method, http::StatusCode, test};
    use serde_json::{Value, json};

    use super::*;
    use crate::api::testing::{self, NoZip, login, request, test_app};

    #[actix_web::test]
    async fn session_reflects_profile_edits() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);
        let token = login!(app, "owner@acme.test", "owner123");

        let req = request(Method::PUT, "/api/company", Some(&token))
            .set_json(json!({ "name": "Acme Bread Co", "zip": "62702" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["company_name"], "Acme Bread Co");

        let req = request(Method::GET, "/api/session", Some(&token)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["company_name"], "Acme Bread Co");
        assert_eq!(body["zip"], "62702");

        let req = request(Method::GET, "/api/company", Some(&token)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["employee_count"], 3);
        assert_eq!(body["device_count"], 2);
    }

    #[actix_web::test]
    async fn admin_cannot_rename_company() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);
        let token = login!(app, "admin@acme.test", "admin123");

        let req = request(Method::PUT, "/api/company", Some(&token))
            .set_json(json!({ "name": "Hijacked" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn admin_saves_the_full_profile_form() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);
        let token = login!(app, "admin@acme.test", "admin123");

        let req = request(Method::GET, "/api/company", Some(&token)).to_request();
        let current: Value = test::call_and_read_body_json(&app, req).await;

        let req = request(Method::PUT, "/api/company", Some(&token))
            .set_json(json!({
                "name": current["name"],
                "logo": current["logo"],
                "city": "Chicago"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["city"], "Chicago");
        assert_eq!(body["company_name"], "Acme Bakery");
    }

    #[actix_web::test]
    async fn profile_update_on_a_closed_session_is_unauthorized() {
        let state = testing::state(Arc::new(NoZip));
        let session = state
            .db
            .read(|store| {
                let user = store.users.iter().find(|u| u.email == "owner@acme.test").unwrap();
                crate::service::auth::open_session(store, user).unwrap()
            })
            .await;
        let session_id = state.sessions.open(session.clone()).await;
        state.sessions.close(&session_id).await;

        let err = super::update_company(
            AuthUser {
                session_id,
                session,
            },
            state.db.clone(),
            state.sessions.clone(),
            web::Json(UpdateCompany {
                city: Some("Chicago".into()),
                ..Default::default()
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn superadmin_switches_company() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);
        let token = login!(app, "super@timeclock.test", "super123");

        let req = request(Method::GET, "/api/companies", Some(&token)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 2);

        let req = request(Method::POST, "/api/companies/2/switch", Some(&token)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = request(Method::GET, "/api/employee", Some(&token)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let emails: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["email"].as_str().unwrap())
            .collect();
        assert_eq!(emails, vec!["ana.cruz@bluebird.test", "raj.patel@bluebird.test"]);

        let req = request(Method::POST, "/api/companies/3/switch", Some(&token)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
