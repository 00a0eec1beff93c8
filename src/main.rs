use actix_web::{App, HttpServer, web::Data};
use email_format_validator::config::ServerSettings;
use email_format_validator::openapi::ApiDoc;
use email_format_validator::routes::email::ValidationService;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Format Validator Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Validation endpoints under `/api/v1`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// See [`ServerSettings`]; logging is filtered through `RUST_LOG`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = ServerSettings::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    let service = ValidationService::system(settings.validation_config());

    info!(
        host = %settings.host,
        port = settings.port,
        policy = ?settings.record_policy,
        "starting server"
    );

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(service.clone()))
            .configure(email_format_validator::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
