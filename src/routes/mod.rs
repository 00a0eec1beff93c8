use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /api/v1/health`: liveness with version and timestamp.
pub mod health;

/// # Email Validation Endpoints
///
/// - `POST /api/v1/validate-email`: one value, optionally a list of addresses
/// - `POST /api/v1/validate-emails-bulk`: many values, one result each
/// - `POST /api/v1/extract-emails`: addresses found in free text
pub mod email;

#[cfg(test)]
mod email_test;

/// # API Route Configuration
///
/// Mounts every endpoint under the `/api/v1` base path. The email routes
/// expect a [`ValidationService`] in app data.
///
/// [`ValidationService`]: crate::routes::email::ValidationService
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes),
    );
}
