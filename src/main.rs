use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use std::sync::Arc;

use anyhow::Context;
use timeclock::{
    auth::session::SessionStore,
    config::Config,
    db::init_db,
    docs::ApiDoc,
    routes,
    seed::SEED,
    utils::contact::ContactClient,
    HttpZipResolver, ZipResolver,
};
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Timeclock API"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    let config = Config::from_env()?;

    info!("Server starting...");

    let db = Data::new(init_db(&SEED, config.simulated_latency).context("seeding store")?);
    let sessions = Data::new(SessionStore::new(
        std::time::Duration::from_secs(config.access_token_ttl as u64),
        config.session_idle_timeout,
    ));

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .context("building HTTP client")?;
    let zip: Data<dyn ZipResolver> = Data::from(Arc::new(HttpZipResolver::new(
        client.clone(),
        config.zip_lookup_url.clone(),
    )) as Arc<dyn ZipResolver>);
    let contact = config
        .contact_url
        .clone()
        .map(|url| Data::new(ContactClient::new(client, url)));
    if contact.is_none() {
        info!("CONTACT_URL not set, contact form disabled");
    }

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard matches the JS/CSS assets
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(db.clone())
            .app_data(sessions.clone())
            .app_data(zip.clone())
            .app_data(Data::new(config.clone()));
        if let Some(contact) = &contact {
            app = app.app_data(contact.clone());
        }

        app.service(index)
            // Configure auth + protected routes with rate limiting
            .configure(|cfg| routes::configure(cfg, config_data.clone()))
    })
    .bind(&server_addr)
    .with_context(|| format!("binding {}", server_addr))?
    .run()
    .await?;

    Ok(())
}
