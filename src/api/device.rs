use actix_web::{HttpResponse, web};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::{
    auth::auth::AuthUser,
    db::Db,
    service::{
        device::{self as devices, CreateDevice, UpdateDevice},
        report::punch as record_punch,
    },
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct PunchRequest {
    #[schema(example = "1234")]
    pub pin: String,
    /// Defaults to the server's local time.
    #[schema(value_type = Option<String>, example = "2026-10-05T08:58:00")]
    pub at: Option<NaiveDateTime>,
}

#[utoipa::path(
    get,
    path = "/api/device",
    responses((status = 200, description = "Devices of the active company", body = [crate::model::device::Device])),
    tag = "Device",
    security(("bearer_auth" = []))
)]
pub async fn list_devices(auth: AuthUser, db: web::Data<Db>) -> actix_web::Result<HttpResponse> {
    let company_id = auth.company_id();
    let list = db.read(|store| devices::list_devices(store, company_id)).await;
    Ok(HttpResponse::Ok().json(list))
}

#[utoipa::path(
    post,
    path = "/api/device",
    request_body = CreateDevice,
    responses((status = 201, description = "Device registered", body = crate::model::device::Device)),
    tag = "Device",
    security(("bearer_auth" = []))
)]
pub async fn create_device(
    auth: AuthUser,
    db: web::Data<Db>,
    payload: web::Json<CreateDevice>,
) -> actix_web::Result<HttpResponse> {
    let company_id = auth.company_id();
    let device = db
        .write(|store| devices::create_device(store, company_id, payload.into_inner()))
        .await;
    Ok(HttpResponse::Created().json(device))
}

#[utoipa::path(
    put,
    path = "/api/device/{device_id}",
    params(("device_id", Path, description = "Device ID")),
    request_body = UpdateDevice,
    responses(
        (status = 200, description = "Device updated", body = crate::model::device::Device),
        (status = 404, description = "Device not found")
    ),
    tag = "Device",
    security(("bearer_auth" = []))
)]
pub async fn update_device(
    auth: AuthUser,
    db: web::Data<Db>,
    path: web::Path<u64>,
    payload: web::Json<UpdateDevice>,
) -> actix_web::Result<HttpResponse> {
    let device_id = path.into_inner();
    let company_id = auth.company_id();
    let device = db
        .write(|store| devices::update_device(store, company_id, device_id, payload.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(device))
}

#[utoipa::path(
    delete,
    path = "/api/device/{device_id}",
    params(("device_id", Path, description = "Device ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Device not found")
    ),
    tag = "Device",
    security(("bearer_auth" = []))
)]
pub async fn delete_device(
    auth: AuthUser,
    db: web::Data<Db>,
    path: web::Path<u64>,
) -> actix_web::Result<HttpResponse> {
    let device_id = path.into_inner();
    let company_id = auth.company_id();
    db.write(|store| devices::delete_device(store, company_id, device_id))
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}

/// Check-in or check-out, depending on whether the employee has an open
/// entry for the day.
#[utoipa::path(
    post,
    path = "/api/device/{device_id}/punch",
    params(("device_id", Path, description = "Device ID")),
    request_body = PunchRequest,
    responses(
        (status = 200, description = "Punch recorded", body = crate::service::report::PunchOutcome),
        (status = 403, description = "Employee is inactive"),
        (status = 404, description = "Device or employee not found")
    ),
    tag = "Device",
    security(("bearer_auth" = []))
)]
pub async fn punch(
    auth: AuthUser,
    db: web::Data<Db>,
    path: web::Path<u64>,
    payload: web::Json<PunchRequest>,
) -> actix_web::Result<HttpResponse> {
    let device_id = path.into_inner();
    let company_id = auth.company_id();
    let at = payload
        .at
        .unwrap_or_else(|| chrono::Local::now().naive_local());

    let outcome = db
        .write(|store| record_punch(store, company_id, device_id, &payload.pin, at))
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}
