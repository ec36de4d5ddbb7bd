use crate::{
    auth::{jwt::generate_access_token, jwt::verify_token, session::SessionStore},
    config::Config,
    db::Db,
    error::ServiceError,
    models::{GoogleLoginReqDto, LoginReqDto, LoginResponse, Session},
    service::auth::{check_auth, google_auth, open_session},
};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, error, info, instrument};

/// Opens a server-side session for `session` and signs a token for it.
async fn start_session(
    session: Session,
    sessions: &SessionStore,
    config: &Config,
) -> Result<HttpResponse, ServiceError> {
    let user_id = session.user_id;
    let email = session.email.clone();
    let session_id = sessions.open(session.clone()).await;

    debug!(user_id, "Generating access token");
    let access_token = generate_access_token(
        user_id,
        email,
        session_id.clone(),
        &config.jwt_secret,
        config.access_token_ttl,
    )
    .map_err(|e| {
        error!(error = %e, "Failed to sign access token");
        ServiceError::Internal(e.to_string())
    });

    let access_token = match access_token {
        Ok(token) => token,
        Err(e) => {
            sessions.close(&session_id).await;
            return Err(e);
        }
    };

    info!("Login successful");
    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token,
        session,
    }))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 400, description = "Email or password missing"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(db, sessions, config, user),
    fields(email = %user.email)
)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    db: web::Data<Db>,
    sessions: web::Data<SessionStore>,
    config: web::Data<Config>,
) -> actix_web::Result<HttpResponse> {
    info!("Login request received");

    if user.email.trim().is_empty() || user.password.is_empty() {
        info!("Validation failed: empty email or password");
        return Err(ServiceError::Validation("Email and password are required".into()).into());
    }

    let session = db
        .read(|store| match check_auth(store, &user.email, &user.password) {
            Some(found) => open_session(store, found).map(Some),
            None => Ok(None),
        })
        .await?;

    let Some(session) = session else {
        info!("Invalid credentials");
        return Err(ServiceError::Unauthorized("Invalid credentials".into()).into());
    };

    Ok(start_session(session, &sessions, &config).await?)
}

#[utoipa::path(
    post,
    path = "/auth/google",
    request_body = GoogleLoginReqDto,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 401, description = "No account for this email"),
        (status = 403, description = "Owner accounts must sign in with a password")
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_google", skip(db, sessions, config, user), fields(email = %user.email))]
pub async fn google_login(
    user: web::Json<GoogleLoginReqDto>,
    db: web::Data<Db>,
    sessions: web::Data<SessionStore>,
    config: web::Data<Config>,
) -> actix_web::Result<HttpResponse> {
    info!("Google sign-in request received");

    let session = db
        .read(|store| google_auth(store, &user.email).and_then(|found| open_session(store, found)))
        .await
        .inspect_err(|e| info!(error = %e, "Google sign-in refused"))?;

    Ok(start_session(session, &sessions, &config).await?)
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses((status = 204, description = "Signed out (also when the token was unknown)")),
    tag = "Auth",
    security(("bearer_auth" = []))
)]
pub async fn logout(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    config: web::Data<Config>,
) -> HttpResponse {
    let header = match req.headers().get("Authorization") {
        Some(h) => h.to_str().unwrap_or(""),
        None => return HttpResponse::NoContent().finish(),
    };

    let token = match header.strip_prefix("Bearer ") {
        Some(t) => t,
        None => return HttpResponse::NoContent().finish(),
    };

    let claims = match verify_token(token, &config.jwt_secret) {
        Ok(c) => c,
        Err(_) => return HttpResponse::NoContent().finish(),
    };

    sessions.close(&claims.jti).await;

    HttpResponse::NoContent().finish()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::Method, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::api::testing::{self, NoZip, login, request, test_app};

    #[actix_web::test]
    async fn wrong_password_is_unauthorized() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);

        let req = request(Method::POST, "/auth/login", None)
            .set_json(json!({ "email": "owner@acme.test", "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid credentials");

        let req = request(Method::POST, "/auth/login", None)
            .set_json(json!({ "email": "owner@acme.test", "password": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn login_returns_token_and_company_session() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);

        let req = request(Method::POST, "/auth/login", None)
            .set_json(json!({ "email": "owner@acme.test", "password": "owner123" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
        assert_eq!(body["session"]["company_id"], 1);
        assert_eq!(body["session"]["company_name"], "Acme Bakery");
        assert_eq!(body["session"]["admin_type"], "owner");
    }

    #[actix_web::test]
    async fn google_sign_in_over_http() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);

        let req = request(Method::POST, "/auth/google", None)
            .set_json(json!({ "email": "admin@acme.test" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let token = body["access_token"].as_str().unwrap().to_string();

        let req = request(Method::GET, "/api/session", Some(&token)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["email"], "admin@acme.test");

        let req = request(Method::POST, "/auth/google", None)
            .set_json(json!({ "email": "owner@acme.test" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = request(Method::POST, "/auth/google", None)
            .set_json(json!({ "email": "nobody@acme.test" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn logout_ends_the_session() {
        let state = testing::state(Arc::new(NoZip));
        let app = test_app!(state);
        let token = login!(app, "admin@acme.test", "admin123");

        let req = request(Method::GET, "/api/session", Some(&token)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = request(Method::POST, "/auth/logout", Some(&token)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = request(Method::GET, "/api/session", Some(&token)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Session expired");

        // Logging out again, or without a token, is harmless.
        for token in [Some(token.as_str()), None] {
            let req = request(Method::POST, "/auth/logout", token).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
        }
    }
}
