use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa` annotations on the route
/// handlers and models; served at `/api-docs/openapi.json`.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Email Validation: `POST /api/v1/validate-email`
/// - Bulk Validation: `POST /api/v1/validate-emails-bulk`
/// - Extraction: `POST /api/v1/extract-emails`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email,
        crate::routes::email::validate_emails_bulk,
        crate::routes::email::extract_emails,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::ValidationOptions,
            crate::models::email::EmailRequest,
            crate::models::email::BulkEmailRequest,
            crate::models::email::ExtractRequest,
            crate::models::email::ExtractResponse,
            crate::models::email::EmailValidationError,
            crate::models::email::EmailValidationResponse,
            crate::models::email::BulkEmailValidationResult,
            crate::models::email::BulkEmailValidationResponse,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "E-mail address format and routability checks")
    ),
    info(
        description = "Validates the format of e-mail addresses and optionally their domain's MX records",
        title = "Email Format Validator API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
