use crate::{
    api::{company, contact, device, employee, report, report_email, zip},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = (60_000 / requests_per_min as u64).max(1);
        let cfg = GovernorConfigBuilder::default()
            .milliseconds_per_request(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .expect("non-zero period and burst size");
        Governor::new(&cfg)
    }

    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login")
                    .wrap(login_limiter.clone())
                    .route(web::post().to(handlers::login)),
            )
            .service(
                web::resource("/google")
                    .wrap(login_limiter.clone())
                    .route(web::post().to(handlers::google_login)),
            )
            .service(
                web::resource("/logout")
                    .wrap(login_limiter.clone())
                    .route(web::post().to(handlers::logout)),
            ),
    );
    cfg.service(
        web::resource("/contact")
            .wrap(login_limiter)
            .route(web::post().to(contact::submit_contact)),
    );

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware))
            .wrap(protected_limiter)
            .service(web::resource("/session").route(web::get().to(company::current_session)))
            .service(
                web::resource("/companies").route(web::get().to(company::list_user_companies)),
            )
            .service(
                web::resource("/companies/{company_id}/switch")
                    .route(web::post().to(company::switch_company)),
            )
            .service(
                web::resource("/company")
                    .route(web::get().to(company::get_company))
                    .route(web::put().to(company::update_company)),
            )
            .service(
                web::scope("/employee")
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // before /{id} so "bulk" is not taken for an id
                    .service(
                        web::resource("/bulk").route(web::post().to(employee::bulk_import)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(employee::update_employee))
                            .route(web::get().to(employee::get_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/device")
                    .service(
                        web::resource("")
                            .route(web::post().to(device::create_device))
                            .route(web::get().to(device::list_devices)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(device::update_device))
                            .route(web::delete().to(device::delete_device)),
                    )
                    .service(web::resource("/{id}/punch").route(web::post().to(device::punch))),
            )
            .service(
                web::scope("/report-email")
                    .service(
                        web::resource("")
                            .route(web::get().to(report_email::list_report_settings))
                            .route(web::post().to(report_email::create_report_setting)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(report_email::update_report_setting))
                            .route(web::delete().to(report_email::delete_report_setting)),
                    ),
            )
            .service(
                web::scope("/report")
                    .service(web::resource("/daily").route(web::get().to(report::daily_report)))
                    .service(web::resource("/range").route(web::get().to(report::report_range)))
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(report::update_report_entry))
                            .route(web::delete().to(report::delete_report_entry)),
                    ),
            )
            .service(web::resource("/zip/{zip}").route(web::get().to(zip::lookup_zip))),
    );
}

// LOGIN
//  └─ access_token (jti = session id)

// API REQUEST
//  └─ Authorization: Bearer access_token
//       └─ session still open? (idle logout closes it)
