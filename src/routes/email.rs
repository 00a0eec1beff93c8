use crate::models::email::{
    BulkEmailRequest, BulkEmailValidationResponse, BulkEmailValidationResult, EmailRequest,
    EmailValidationResponse, ExtractRequest, ExtractResponse, ValidationOptions,
};
use crate::validation::{
    self, ValidationConfig,
    dnsmx::{DomainResolver, SystemResolver},
};
use actix_web::{HttpResponse, Responder, error::BlockingError, post, web};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// Shared per-app validation state: the baseline options and the resolver
/// used when a request asks for a domain check.
#[derive(Clone)]
pub struct ValidationService {
    config: ValidationConfig,
    resolver: Arc<dyn DomainResolver>,
}

impl ValidationService {
    pub fn new(config: ValidationConfig, resolver: Arc<dyn DomainResolver>) -> Self {
        Self { config, resolver }
    }

    /// Service backed by the host's DNS resolver.
    pub fn system(config: ValidationConfig) -> Self {
        let resolver = Arc::new(SystemResolver::new(config.dns_timeout));
        Self::new(config, resolver)
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates one value on the blocking pool, since a domain check waits on DNS.
    pub async fn check(
        &self,
        email: String,
        options: ValidationOptions,
    ) -> Result<EmailValidationResponse, BlockingError> {
        let config = options.apply(self.config.clone());
        let resolver = Arc::clone(&self.resolver);
        let outcome =
            web::block(move || validation::errors_on_with(&email, &config, resolver.as_ref()))
                .await?;
        Ok(outcome.into())
    }
}

/// # Email Validation Endpoint
///
/// Validates one value, optionally holding several separated addresses,
/// against the address grammar and length limits, then optionally checks
/// that the domain publishes MX records.
///
/// ## Responses
/// - **200 OK**: the value is valid
/// - **400 Bad Request**: `INVALID_FORMAT`, `INVALID_MULTIPLE` or `UNROUTABLE`
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com", "options": { "check_mx": true } }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Email is valid", body = EmailValidationResponse),
        (status = 400, description = "Invalid email", body = EmailValidationResponse),
        (status = 500, description = "Server error")
    ),
    tag = "Email Validation"
)]
#[post("/validate-email")]
pub async fn validate_email(
    req: web::Json<EmailRequest>,
    service: web::Data<ValidationService>,
) -> Result<impl Responder, actix_web::Error> {
    let EmailRequest { email, options } = req.into_inner();
    let response = service.check(email, options).await?;

    if response.is_valid {
        Ok(HttpResponse::Ok().json(response))
    } else {
        debug!(code = ?response.error.as_ref().map(|e| &e.code), "rejected e-mail value");
        Ok(HttpResponse::BadRequest().json(response))
    }
}

/// # Bulk Email Validation Endpoint
///
/// Validates each value of `emails` independently and concurrently with the
/// same options. Always answers 200 with per-value results and counts.
#[utoipa::path(
    post,
    path = "/api/v1/validate-emails-bulk",
    request_body = BulkEmailRequest,
    responses(
        (status = 200, description = "Bulk validation results", body = BulkEmailValidationResponse)
    ),
    tag = "Email Validation"
)]
#[post("/validate-emails-bulk")]
pub async fn validate_emails_bulk(
    req: web::Json<BulkEmailRequest>,
    service: web::Data<ValidationService>,
) -> Result<impl Responder, actix_web::Error> {
    let BulkEmailRequest { emails, options } = req.into_inner();
    info!(count = emails.len(), "bulk validation");

    let checks = emails
        .iter()
        .map(|email| service.check(email.clone(), options.clone()))
        .collect::<Vec<_>>();
    let validations = join_all(checks)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let valid_count = validations.iter().filter(|v| v.is_valid).count();
    let results = emails
        .into_iter()
        .zip(validations)
        .map(|(email, validation)| BulkEmailValidationResult { email, validation })
        .collect::<Vec<_>>();

    Ok(HttpResponse::Ok().json(BulkEmailValidationResponse {
        invalid_count: results.len() - valid_count,
        valid_count,
        results,
    }))
}

/// # Address Extraction Endpoint
///
/// Returns every address found in free text, in order of appearance.
#[utoipa::path(
    post,
    path = "/api/v1/extract-emails",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Addresses found in the text", body = ExtractResponse)
    ),
    tag = "Email Validation"
)]
#[post("/extract-emails")]
pub async fn extract_emails(req: web::Json<ExtractRequest>) -> impl Responder {
    HttpResponse::Ok().json(ExtractResponse {
        emails: validation::extract(&req.text),
    })
}

/// Configures email validation routes under /api/v1
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email)
        .service(validate_emails_bulk)
        .service(extract_emails);
}
