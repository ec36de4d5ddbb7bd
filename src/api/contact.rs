use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::{
    error::ServiceError,
    utils::contact::{ContactClient, ContactForm},
};

#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Message forwarded"),
        (status = 400, description = "Email or message missing"),
        (status = 502, description = "Message could not be delivered")
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    client: Option<web::Data<ContactClient>>,
    payload: web::Json<ContactForm>,
) -> actix_web::Result<HttpResponse> {
    let client = client.ok_or_else(|| {
        ServiceError::Upstream("Contact form is not configured".into())
    })?;
    client.submit(&payload).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Thanks, we will be in touch" })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::Method, http::StatusCode, test};
    use serde_json::json;

    use crate::api::testing::{self, NoZip, request, test_app};

    #[actix_web::test]
    async fn unconfigured_contact_endpoint_reports_upstream_failure() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);

        let req = request(Method::POST, "/contact", None)
            .set_json(json!({
                "name": "Pat",
                "email": "pat@example.com",
                "phone": null,
                "message": "Hello"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    }
}
