use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::{
    auth::auth::AuthUser,
    db::Db,
    model::role::Frequency,
    service::report_email::{self as settings, CreateReportSetting, UpdateReportSetting},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipientQuery {
    /// Only recipients of this report cadence.
    pub frequency: Option<Frequency>,
}

#[utoipa::path(
    get,
    path = "/api/report-email",
    params(RecipientQuery),
    responses((status = 200, description = "Report recipients of the active company", body = [crate::model::report_email::ReportEmailSetting])),
    tag = "Report email",
    security(("bearer_auth" = []))
)]
pub async fn list_report_settings(
    auth: AuthUser,
    db: web::Data<Db>,
    query: web::Query<RecipientQuery>,
) -> actix_web::Result<HttpResponse> {
    let company_id = auth.company_id();
    let frequency = query.frequency;
    let list = db
        .read(|store| settings::list_report_settings(store, company_id, frequency))
        .await;
    Ok(HttpResponse::Ok().json(list))
}

#[utoipa::path(
    post,
    path = "/api/report-email",
    request_body = CreateReportSetting,
    responses(
        (status = 201, description = "Recipient added", body = crate::model::report_email::ReportEmailSetting),
        (status = 409, description = "Email already exists")
    ),
    tag = "Report email",
    security(("bearer_auth" = []))
)]
pub async fn create_report_setting(
    auth: AuthUser,
    db: web::Data<Db>,
    payload: web::Json<CreateReportSetting>,
) -> actix_web::Result<HttpResponse> {
    let company_id = auth.company_id();
    let setting = db
        .write(|store| settings::create_report_setting(store, company_id, payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(setting))
}

#[utoipa::path(
    put,
    path = "/api/report-email/{id}",
    params(("id", Path, description = "Report setting ID")),
    request_body = UpdateReportSetting,
    responses(
        (status = 200, description = "Recipient updated", body = crate::model::report_email::ReportEmailSetting),
        (status = 404, description = "Report setting not found"),
        (status = 409, description = "Email already exists")
    ),
    tag = "Report email",
    security(("bearer_auth" = []))
)]
pub async fn update_report_setting(
    auth: AuthUser,
    db: web::Data<Db>,
    path: web::Path<u64>,
    payload: web::Json<UpdateReportSetting>,
) -> actix_web::Result<HttpResponse> {
    let id = path.into_inner();
    let company_id = auth.company_id();
    let setting = db
        .write(|store| settings::update_report_setting(store, company_id, id, payload.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(setting))
}

#[utoipa::path(
    delete,
    path = "/api/report-email/{id}",
    params(("id", Path, description = "Report setting ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Report setting not found")
    ),
    tag = "Report email",
    security(("bearer_auth" = []))
)]
pub async fn delete_report_setting(
    auth: AuthUser,
    db: web::Data<Db>,
    path: web::Path<u64>,
) -> actix_web::Result<HttpResponse> {
    let id = path.into_inner();
    let company_id = auth.company_id();
    db.write(|store| settings::delete_report_setting(store, company_id, id))
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::Method, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::api::testing::{self, NoZip, login, request, test_app};

    #[actix_web::test]
    async fn recipients_are_scoped_to_the_company() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);
        let token = login!(app, "owner@bluebird.test", "bluebird123");

        let req = request(Method::GET, "/api/report-email", Some(&token)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["email"], "ops@bluebird.test");

        let req = request(Method::GET, "/api/report-email?frequency=weekly", Some(&token)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body.as_array().unwrap().is_empty());

        let req = request(Method::GET, "/api/report-email?frequency=biweekly", Some(&token)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        let req = request(Method::POST, "/api/report-email", Some(&token))
            .set_json(json!({ "email": "ops@bluebird.test", "is_weekly": true }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

        let req = request(Method::PUT, "/api/report-email/1", Some(&token))
            .set_json(json!({ "is_daily": true }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = request(Method::PUT, "/api/report-email/2", Some(&token))
            .set_json(json!({ "is_weekly": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["is_weekly"], true);
        assert_eq!(body["is_daily"], true);
    }
}
