use actix_web::{HttpResponse, web};
use tracing::warn;

use crate::{
    error::ServiceError,
    utils::zip_lookup::{ZipResolver, is_zip},
};

/// Resolves a ZIP code for the company address form. Unknown codes and
/// lookup failures both answer `null` so the form simply stays as typed.
#[utoipa::path(
    get,
    path = "/api/zip/{zip}",
    params(("zip", Path, description = "Five digit US ZIP code", example = "62701")),
    responses(
        (status = 200, description = "City and state, or null when unknown", body = crate::utils::zip_lookup::Place),
        (status = 400, description = "Not a ZIP code")
    ),
    tag = "Zip",
    security(("bearer_auth" = []))
)]
pub async fn lookup_zip(
    resolver: web::Data<dyn ZipResolver>,
    path: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let zip = path.into_inner();
    if !is_zip(&zip) {
        return Err(ServiceError::Validation("ZIP code must be five digits".into()).into());
    }

    let place = match resolver.resolve(&zip).await {
        Ok(place) => place,
        Err(e) => {
            warn!(error = %e, zip = %zip, "ZIP lookup failed");
            None
        }
    };
    Ok(HttpResponse::Ok().json(place))
}
