pub mod company;
pub mod contact;
pub mod device;
pub mod employee;
pub mod report;
pub mod report_email;
pub mod zip;

#[cfg(test)]
pub(crate) mod testing {
    use std::{sync::Arc, time::Duration};

    use actix_web::{http::Method, test::TestRequest, web::Data};

    use crate::{
        auth::session::SessionStore,
        config::Config,
        db::{Db, init_db},
        seed::SEED,
        utils::zip_lookup::ZipResolver,
    };

    pub const SECRET: &str = "test-secret";

    pub fn config() -> Config {
        Config {
            jwt_secret: SECRET.into(),
            server_addr: "127.0.0.1:0".into(),
            access_token_ttl: 3600,
            session_idle_timeout: Duration::from_secs(900),
            simulated_latency: Duration::ZERO,
            zip_lookup_url: "http://127.0.0.1:9".into(),
            contact_url: None,
            rate_login_per_min: 600,
            rate_protected_per_min: 6000,
            api_prefix: "/api".into(),
        }
    }

    pub struct TestState {
        pub config: Config,
        pub db: Data<Db>,
        pub sessions: Data<SessionStore>,
        pub zip: Data<dyn ZipResolver>,
    }

    pub fn state(zip: Arc<dyn ZipResolver>) -> TestState {
        let config = config();
        TestState {
            db: Data::new(init_db(&SEED, config.simulated_latency).unwrap()),
            sessions: Data::new(SessionStore::new(
                Duration::from_secs(config.access_token_ttl as u64),
                config.session_idle_timeout,
            )),
            zip: Data::from(zip),
            config,
        }
    }

    /// Request with a peer address (needed by the rate limiter) and an
    /// optional bearer token.
    pub fn request(method: Method, uri: &str, token: Option<&str>) -> TestRequest {
        let req = TestRequest::default()
            .method(method)
            .uri(uri)
            .peer_addr("127.0.0.1:40000".parse().unwrap());
        match token {
            Some(token) => req.insert_header(("Authorization", format!("Bearer {}", token))),
            None => req,
        }
    }

    /// Builds the full application around a [`TestState`].
    macro_rules! test_app {
        ($state:expr) => {{
            let state = &$state;
            let config = state.config.clone();
            actix_web::test::init_service(
                actix_web::App::new()
                    .app_data(state.db.clone())
                    .app_data(state.sessions.clone())
                    .app_data(state.zip.clone())
                    .app_data(actix_web::web::Data::new(state.config.clone()))
                    .configure(|cfg| crate::routes::configure(cfg, config)),
            )
            .await
        }};
    }

    /// Signs in through `/auth/login` and yields the access token.
    macro_rules! login {
        ($app:expr, $email:expr, $password:expr) => {{
            let req = crate::api::testing::request(actix_web::http::Method::POST, "/auth/login", None)
                .set_json(serde_json::json!({ "email": $email, "password": $password }))
                .to_request();
            let body: serde_json::Value = actix_web::test::call_and_read_body_json(&$app, req).await;
            body["access_token"].as_str().expect("access token").to_string()
        }};
    }

    pub(crate) use login;
    pub(crate) use test_app;

    /// Resolver that knows no ZIP codes.
    pub struct NoZip;

    impl ZipResolver for NoZip {
        fn resolve<'a>(
            &'a self,
            _zip: &'a str,
        ) -> futures::future::BoxFuture<'a, anyhow::Result<Option<crate::utils::zip_lookup::Place>>>
        {
            Box::pin(async { Ok(None) })
        }
    }
}
