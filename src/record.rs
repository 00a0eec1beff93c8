//! Per-field adapter for record-style hosts.
//!
//! A host that keeps errors per attribute calls
//! [`EmailValidator::validate_each`] for every e-mail field it owns; the
//! validator only ever adds a message, never clears one.

use crate::validation::{self, ValidationConfig, ValidationOutcome, dnsmx::DomainResolver};

/// Error messages collected per attribute, in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordErrors {
    entries: Vec<(String, String)>,
}

impl RecordErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: &str, message: impl Into<String>) {
        self.entries.push((attribute.to_owned(), message.into()));
    }

    /// Messages recorded against `attribute`.
    pub fn get(&self, attribute: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(name, _)| name == attribute)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Field validator bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
    config: ValidationConfig,
}

impl EmailValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates one attribute value, recording a message on failure.
    /// Missing and blank values are left to a presence check.
    pub fn validate_each(&self, errors: &mut RecordErrors, attribute: &str, value: Option<&str>) {
        let Some(value) = value else { return };
        record(errors, attribute, validation::errors_on(value, &self.config));
    }

    pub fn validate_each_with(
        &self,
        errors: &mut RecordErrors,
        attribute: &str,
        value: Option<&str>,
        resolver: &dyn DomainResolver,
    ) {
        let Some(value) = value else { return };
        record(
            errors,
            attribute,
            validation::errors_on_with(value, &self.config, resolver),
        );
    }
}

fn record(errors: &mut RecordErrors, attribute: &str, outcome: ValidationOutcome) {
    if let ValidationOutcome::Invalid(error) = outcome {
        errors.add(attribute, error.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::dnsmx::{DnsAnswer, MockDomainResolver};

    #[test]
    fn valid_value_adds_nothing() {
        let mut errors = RecordErrors::new();
        EmailValidator::default().validate_each(&mut errors, "email", Some("valid@example.com"));
        assert!(errors.is_empty());
    }

    #[test]
    fn nil_and_blank_values_are_skipped() {
        let mut errors = RecordErrors::new();
        let validator = EmailValidator::default();
        validator.validate_each(&mut errors, "email", None);
        validator.validate_each(&mut errors, "email", Some(""));
        assert!(errors.is_empty());
    }

    #[test]
    fn invalid_value_adds_exactly_one_message() {
        let mut errors = RecordErrors::new();
        let validator = EmailValidator::new(
            ValidationConfig::default().with_single_error_message("fails with custom message"),
        );
        validator.validate_each(&mut errors, "email", Some("invalid@example."));
        assert_eq!(errors.get("email"), vec!["fails with custom message"]);
        assert!(errors.get("backup_email").is_empty());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unroutable_value_records_mx_message() {
        let mut errors = RecordErrors::new();
        let mut resolver = MockDomainResolver::new();
        resolver
            .expect_answer()
            .return_const(DnsAnswer::NotFound);
        let validator = EmailValidator::new(ValidationConfig::default().with_check_domain(true));

        validator.validate_each_with(
            &mut errors,
            "email",
            Some("test@somethingthathasntbeenregistered.com"),
            &resolver,
        );
        assert_eq!(errors.get("email"), vec!["is not routable"]);
    }
}
