use crate::{
    auth::auth::AuthUser,
    db::Db,
    service::employee::{
        self as employees, CreateEmployee, UpdateEmployee,
    },
};
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::info;

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employee",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = crate::model::employee::Employee),
        (status = 409, description = "Email, phone or PIN already exists", body = Object, example = json!({
            "error": "Email already exists"
        }))
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_employee(
    auth: AuthUser,
    db: web::Data<Db>,
    payload: web::Json<CreateEmployee>,
) -> actix_web::Result<HttpResponse> {
    let company_id = auth.company_id();
    let employee = db
        .write(|store| employees::create_employee(store, company_id, payload.into_inner()))
        .await?;

    Ok(HttpResponse::Created().json(employee))
}

#[utoipa::path(
    post,
    path = "/api/employee/bulk",
    request_body = Vec<CreateEmployee>,
    responses(
        (status = 200, description = "Per-row outcome of the import", body = crate::service::employee::BulkImportResult)
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn bulk_import(
    auth: AuthUser,
    db: web::Data<Db>,
    payload: web::Json<Vec<CreateEmployee>>,
) -> actix_web::Result<HttpResponse> {
    let company_id = auth.company_id();
    let rows = payload.into_inner();
    info!(company_id, rows = rows.len(), "Bulk employee import requested");

    let result = db
        .write(|store| employees::bulk_import(store, company_id, rows))
        .await;

    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/employee",
    responses(
        (status = 200, description = "Employees of the active company", body = [crate::model::employee::Employee])
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_employees(auth: AuthUser, db: web::Data<Db>) -> actix_web::Result<HttpResponse> {
    let company_id = auth.company_id();
    let list = db
        .read(|store| employees::list_employees(store, company_id))
        .await;

    Ok(HttpResponse::Ok().json(list))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employee/{emp_id}",
    params(
        ("emp_id", Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = crate::model::employee::Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        })),
        (status = 409, description = "Email, phone or PIN already exists")
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_employee(
    auth: AuthUser,
    db: web::Data<Db>,
    path: web::Path<u64>,
    body: web::Json<UpdateEmployee>,
) -> actix_web::Result<HttpResponse> {
    let emp_id = path.into_inner();
    let company_id = auth.company_id();

    let employee = db
        .write(|store| employees::update_employee(store, company_id, emp_id, body.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employee/{emp_id}",
    params(
        ("emp_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        }))
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_employee(
    auth: AuthUser,
    db: web::Data<Db>,
    path: web::Path<u64>,
) -> actix_web::Result<HttpResponse> {
    let emp_id = path.into_inner();
    let company_id = auth.company_id();

    db.write(|store| employees::delete_employee(store, company_id, emp_id))
        .await?;

    info!(emp_id, company_id, "Employee deleted");
    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted"
    })))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employee/{emp_id}",
    params(
        ("emp_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = crate::model::employee::Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        }))
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_employee(
    auth: AuthUser,
    db: web::Data<Db>,
    path: web::Path<u64>,
) -> actix_web::Result<HttpResponse> {
    let emp_id = path.into_inner();
    let company_id = auth.company_id();

    let employee = db
        .read(|store| employees::get_employee(store, company_id, emp_id))
        .await?;

    Ok(HttpResponse::Ok().json(employee))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::Method, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::api::testing::{self, NoZip, login, request, test_app};

    #[actix_web::test]
    async fn requests_without_a_session_are_rejected() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);

        let resp = test::call_service(&app, request(Method::GET, "/api/employee", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = test::call_service(
            &app,
            request(Method::GET, "/api/employee", Some("not-a-token")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_duplicate_then_unique_employee() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);
        let token = login!(app, "owner@acme.test", "owner123");

        let req = request(Method::POST, "/api/employee", Some(&token))
            .set_json(json!({
                "pin": "9001",
                "name": "Copy Cat",
                "phone": "2175550999",
                "email": "john.doe@acme.test"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Email already exists");

        let req = request(Method::POST, "/api/employee", Some(&token))
            .set_json(json!({
                "pin": "9001",
                "name": "Lucy Park",
                "phone": "2175550999",
                "email": "lucy.park@acme.test"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["emp_id"], 6);
        assert_eq!(body["company_id"], 1);

        let req = request(Method::GET, "/api/employee/6", Some(&token)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Lucy Park");
    }

    #[actix_web::test]
    async fn delete_unknown_employee_is_not_found() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);
        let token = login!(app, "owner@acme.test", "owner123");

        let req = request(Method::DELETE, "/api/employee/99", Some(&token)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Employee not found");

        let count = state.db.read(|s| s.employees.len()).await;
        assert_eq!(count, 5);
    }

    #[actix_web::test]
    async fn bulk_import_reports_each_row() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);
        let token = login!(app, "owner@acme.test", "owner123");

        let req = request(Method::POST, "/api/employee/bulk", Some(&token))
            .set_json(json!([
                { "pin": "7001", "name": "A", "phone": "1110000001", "email": "a@acme.test" },
                { "pin": "1234", "name": "B", "phone": "1110000002", "email": "b@acme.test" }
            ]))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["created"].as_array().unwrap().len(), 1);
        assert_eq!(body["failed"][0]["email"], "b@acme.test");
        assert_eq!(body["failed"][0]["error"], "PIN already exists");
    }

    #[actix_web::test]
    async fn update_employee_merges_fields() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);
        let token = login!(app, "owner@acme.test", "owner123");

        let req = request(Method::PUT, "/api/employee/2", Some(&token))
            .set_json(json!({ "active": false }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["active"], false);
        assert_eq!(body["email"], "jane.roe@acme.test");

        // Employee 4 belongs to Bluebird.
        let req = request(Method::PUT, "/api/employee/4", Some(&token))
            .set_json(json!({ "name": "X" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
