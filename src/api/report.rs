use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::{
    auth::auth::AuthUser,
    db::Db,
    service::report::{
        self as reports, UpdateReportEntry,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DailyQuery {
    /// Day to report, `YYYY-MM-DD`.
    #[param(value_type = String, format = Date, example = "2026-10-01")]
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangeQuery {
    #[param(value_type = String, format = Date, example = "2026-10-01")]
    pub from: NaiveDate,
    #[param(value_type = String, format = Date, example = "2026-10-07")]
    pub to: NaiveDate,
}

#[utoipa::path(
    get,
    path = "/api/report/daily",
    params(DailyQuery),
    responses((status = 200, description = "Entries of the day", body = [crate::service::report::DailyReportRow])),
    tag = "Report",
    security(("bearer_auth" = []))
)]
pub async fn daily_report(
    auth: AuthUser,
    db: web::Data<Db>,
    query: web::Query<DailyQuery>,
) -> actix_web::Result<HttpResponse> {
    let company_id = auth.company_id();
    let rows = db
        .read(|store| reports::daily_report(store, company_id, query.date))
        .await;
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    get,
    path = "/api/report/range",
    params(RangeQuery),
    responses(
        (status = 200, description = "Worked time per employee", body = [crate::service::report::EmployeeTotal]),
        (status = 400, description = "Start date after end date")
    ),
    tag = "Report",
    security(("bearer_auth" = []))
)]
pub async fn report_range(
    auth: AuthUser,
    db: web::Data<Db>,
    query: web::Query<RangeQuery>,
) -> actix_web::Result<HttpResponse> {
    let company_id = auth.company_id();
    let totals = db
        .read(|store| reports::report_range(store, company_id, query.from, query.to))
        .await?;
    Ok(HttpResponse::Ok().json(totals))
}

#[utoipa::path(
    put,
    path = "/api/report/{entry_id}",
    params(("entry_id", Path, description = "Report entry ID")),
    request_body = UpdateReportEntry,
    responses(
        (status = 200, description = "Entry updated", body = crate::model::report::DailyReportEntry),
        (status = 400, description = "Check-out before check-in"),
        (status = 404, description = "Report entry not found")
    ),
    tag = "Report",
    security(("bearer_auth" = []))
)]
pub async fn update_report_entry(
    auth: AuthUser,
    db: web::Data<Db>,
    path: web::Path<u64>,
    payload: web::Json<UpdateReportEntry>,
) -> actix_web::Result<HttpResponse> {
    let entry_id = path.into_inner();
    let company_id = auth.company_id();
    let entry = db
        .write(|store| reports::update_report_entry(store, company_id, entry_id, payload.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(entry))
}

#[utoipa::path(
    delete,
    path = "/api/report/{entry_id}",
    params(("entry_id", Path, description = "Report entry ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Report entry not found")
    ),
    tag = "Report",
    security(("bearer_auth" = []))
)]
pub async fn delete_report_entry(
    auth: AuthUser,
    db: web::Data<Db>,
    path: web::Path<u64>,
) -> actix_web::Result<HttpResponse> {
    let entry_id = path.into_inner();
    let company_id = auth.company_id();
    db.write(|store| reports::delete_report_entry(store, company_id, entry_id))
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
