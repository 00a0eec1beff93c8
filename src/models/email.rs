use crate::validation::{ValidationConfig, ValidationOutcome, dnsmx::RecordPolicy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-request overrides of the service's baseline validation options.
///
/// Length limits are signed so that a non-positive value can be expressed;
/// such a limit rejects every address.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct ValidationOptions {
    pub check_mx: Option<bool>,
    pub multiple: Option<bool>,
    pub local_length: Option<i64>,
    pub domain_length: Option<i64>,
    pub message: Option<String>,
    pub multiple_message: Option<String>,
    pub mx_message: Option<String>,
    #[schema(value_type = Option<String>, example = "mx_or_address")]
    pub record_policy: Option<RecordPolicy>,
}

impl ValidationOptions {
    pub fn apply(self, mut config: ValidationConfig) -> ValidationConfig {
        if let Some(check_mx) = self.check_mx {
            config.check_domain = check_mx;
        }
        if let Some(multiple) = self.multiple {
            config.allow_multiple = multiple;
        }
        if let Some(length) = self.local_length {
            config.local_max_length = non_negative(length);
        }
        if let Some(length) = self.domain_length {
            config.domain_max_length = non_negative(length);
        }
        if let Some(message) = self.message {
            config.single_error_message = message;
        }
        if let Some(message) = self.multiple_message {
            config.multiple_error_message = message;
        }
        if let Some(message) = self.mx_message {
            config.domain_unroutable_message = message;
        }
        if let Some(policy) = self.record_policy {
            config.record_policy = policy;
        }
        config
    }
}

fn non_negative(length: i64) -> usize {
    usize::try_from(length).unwrap_or(0)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: String,
    #[serde(default)]
    pub options: ValidationOptions,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkEmailRequest {
    pub emails: Vec<String>,
    #[serde(default)]
    pub options: ValidationOptions,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractResponse {
    pub emails: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct EmailValidationError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct EmailValidationResponse {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EmailValidationError>,
}

impl From<ValidationOutcome> for EmailValidationResponse {
    fn from(outcome: ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Valid => Self {
                is_valid: true,
                status: Some("VALID".to_string()),
                error: None,
            },
            ValidationOutcome::Invalid(error) => Self {
                is_valid: false,
                status: None,
                error: Some(EmailValidationError {
                    code: error.code().to_string(),
                    message: error.message().to_string(),
                }),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkEmailValidationResult {
    pub email: String,
    pub validation: EmailValidationResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkEmailValidationResponse {
    pub results: Vec<BulkEmailValidationResult>,
    pub valid_count: usize,
    pub invalid_count: usize,
}
