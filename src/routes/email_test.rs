#[cfg(test)]
mod email_route_tests {
    use crate::models::email::{BulkEmailValidationResponse, EmailValidationResponse, ExtractResponse};
    use crate::routes::configure;
    use crate::routes::email::ValidationService;
    use crate::validation::ValidationConfig;
    use crate::validation::dnsmx::{DnsAnswer, DomainResolver, RecordPolicy};
    use actix_web::{App, test, web};
    use serde_json::json;
    use std::sync::Arc;

    /// Resolver that gives the same answer for every domain.
    struct FixedResolver(DnsAnswer);

    impl DomainResolver for FixedResolver {
        fn answer(&self, _domain: &str, _policy: RecordPolicy) -> DnsAnswer {
            self.0
        }
    }

    async fn create_test_app(
        answer: DnsAnswer,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let service =
            ValidationService::new(ValidationConfig::default(), Arc::new(FixedResolver(answer)));
        test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure),
        )
        .await
    }

    #[actix_web::test]
    async fn test_valid_email() {
        let app = create_test_app(DnsAnswer::NotFound).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/validate-email")
            .set_json(json!({ "email": "valid@example.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: EmailValidationResponse = test::read_body_json(resp).await;
        assert!(body.is_valid);
        assert_eq!(body.status.as_deref(), Some("VALID"));
    }

    #[actix_web::test]
    async fn test_invalid_format() {
        let app = create_test_app(DnsAnswer::Records(1)).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/validate-email")
            .set_json(json!({ "email": "antani" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: EmailValidationResponse = test::read_body_json(resp).await;
        let error = body.error.expect("error should be present");
        assert_eq!(error.code, "INVALID_FORMAT");
        assert_eq!(error.message, "does not appear to be a valid e-mail address");
    }

    #[actix_web::test]
    async fn test_unroutable_domain() {
        let app = create_test_app(DnsAnswer::NotFound).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/validate-email")
            .set_json(json!({
                "email": "test@somethingthathasntbeenregistered.com",
                "options": { "check_mx": true, "mx_message": "has no mail server" }
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: EmailValidationResponse = test::read_body_json(resp).await;
        let error = body.error.expect("error should be present");
        assert_eq!(error.code, "UNROUTABLE");
        assert_eq!(error.message, "has no mail server");
    }

    #[actix_web::test]
    async fn test_unreachable_dns_passes() {
        let app = create_test_app(DnsAnswer::Unreachable).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/validate-email")
            .set_json(json!({ "email": "valid@example.com", "options": { "check_mx": true } }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
    }

    #[actix_web::test]
    async fn test_multiple_addresses() {
        let app = create_test_app(DnsAnswer::Records(1)).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/validate-email")
            .set_json(json!({
                "email": "valid@example.com, invalid@ex_mple.com",
                "options": { "multiple": true }
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: EmailValidationResponse = test::read_body_json(resp).await;
        let error = body.error.expect("error should be present");
        assert_eq!(error.code, "INVALID_MULTIPLE");
        assert_eq!(error.message, "appears to contain an invalid e-mail address");
    }

    #[actix_web::test]
    async fn test_local_length_override() {
        let app = create_test_app(DnsAnswer::Records(1)).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/validate-email")
            .set_json(json!({ "email": "valid@example.com", "options": { "local_length": 1 } }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_blank_email_is_valid() {
        let app = create_test_app(DnsAnswer::NotFound).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/validate-email")
            .set_json(json!({ "email": "" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
    }

    #[actix_web::test]
    async fn test_missing_email_field() {
        let app = create_test_app(DnsAnswer::NotFound).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/validate-email")
            .set_json(json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_bulk_validation() {
        let app = create_test_app(DnsAnswer::Records(1)).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/validate-emails-bulk")
            .set_json(json!({
                "emails": ["valid@example.com", "invalid@example.", "\"Fred\\ Bloggs\"@example.com"]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: BulkEmailValidationResponse = test::read_body_json(resp).await;
        assert_eq!(body.valid_count, 2);
        assert_eq!(body.invalid_count, 1);
        assert_eq!(body.results[1].email, "invalid@example.");
        assert!(!body.results[1].validation.is_valid);
        assert!(body.results[2].validation.is_valid);
    }

    #[actix_web::test]
    async fn test_bulk_validation_empty() {
        let app = create_test_app(DnsAnswer::Records(1)).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/validate-emails-bulk")
            .set_json(json!({ "emails": [] }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let body: BulkEmailValidationResponse = test::read_body_json(resp).await;
        assert!(body.results.is_empty());
        assert_eq!(body.valid_count, 0);
        assert_eq!(body.invalid_count, 0);
    }

    #[actix_web::test]
    async fn test_extract_emails() {
        let app = create_test_app(DnsAnswer::Records(1)).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/extract-emails")
            .set_json(json!({ "text": "ping alice@example.com and bob@example.org" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: ExtractResponse = test::read_body_json(resp).await;
        assert_eq!(body.emails, vec!["alice@example.com", "bob@example.org"]);
    }
}
