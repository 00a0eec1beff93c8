//! E-mail address validation.
//!
//! The entry points are [`errors_on`], [`is_valid`] and [`extract`]. They are
//! pure apart from the optional DNS check and never return an error: a rejected
//! value is reported as a [`ValidationOutcome::Invalid`] carrying one message.
//!
//! # Examples
//! ```
//! use email_format_validator::validation::{ValidationConfig, is_valid};
//!
//! let config = ValidationConfig::default();
//! assert!(is_valid("valid@example.com", &config));
//! assert!(!is_valid("antani", &config));
//! assert!(!is_valid("valid@example.com", &config.clone().with_local_max_length(1)));
//! ```

/// Checks that an address's domain publishes mail records.
///
/// The lookup goes through the [`dnsmx::DomainResolver`] trait; the default
/// [`dnsmx::SystemResolver`] uses the host's resolver configuration with a
/// bounded timeout. An unreachable resolver counts as routable.
pub mod dnsmx;

pub mod error;

/// Address grammar: the whole-string matcher, the scanning matcher and the
/// multi-address separator, each compiled once per process.
pub mod grammar;

pub mod length;

/// Single- and multi-address validators.
pub mod validator;


use regex::bytes::Regex;
use std::time::Duration;

use self::dnsmx::{DomainResolver, RecordPolicy, SystemResolver};
use self::length::LengthLimits;

pub use self::error::ValidationError;

/// Result of validating one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.error().map(ValidationError::message)
    }
}

/// Whether a value holds one address or a delimited list of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Multiple,
}

/// Options for one validation call.
///
/// Defaults: no DNS check, single address, 64-character local part,
/// 255-character domain, English messages.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Replacement for the built-in whole-string matcher.
    pub pattern: Option<Regex>,
    pub check_domain: bool,
    pub allow_multiple: bool,
    pub local_max_length: usize,
    pub domain_max_length: usize,
    pub single_error_message: String,
    pub multiple_error_message: String,
    pub domain_unroutable_message: String,
    pub record_policy: RecordPolicy,
    pub dns_timeout: Duration,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let limits = LengthLimits::default();
        Self {
            pattern: None,
            check_domain: false,
            allow_multiple: false,
            local_max_length: limits.local,
            domain_max_length: limits.domain,
            single_error_message: "does not appear to be a valid e-mail address".to_string(),
            multiple_error_message: "appears to contain an invalid e-mail address".to_string(),
            domain_unroutable_message: "is not routable".to_string(),
            record_policy: RecordPolicy::default(),
            dns_timeout: Duration::from_secs(5),
        }
    }
}

impl ValidationConfig {
    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_check_domain(mut self, check_domain: bool) -> Self {
        self.check_domain = check_domain;
        self
    }

    pub fn with_allow_multiple(mut self, allow_multiple: bool) -> Self {
        self.allow_multiple = allow_multiple;
        self
    }

    pub fn with_local_max_length(mut self, length: usize) -> Self {
        self.local_max_length = length;
        self
    }

    pub fn with_domain_max_length(mut self, length: usize) -> Self {
        self.domain_max_length = length;
        self
    }

    pub fn with_single_error_message(mut self, message: impl Into<String>) -> Self {
        self.single_error_message = message.into();
        self
    }

    pub fn with_multiple_error_message(mut self, message: impl Into<String>) -> Self {
        self.multiple_error_message = message.into();
        self
    }

    pub fn with_domain_unroutable_message(mut self, message: impl Into<String>) -> Self {
        self.domain_unroutable_message = message.into();
        self
    }

    pub fn with_record_policy(mut self, policy: RecordPolicy) -> Self {
        self.record_policy = policy;
        self
    }

    pub fn with_dns_timeout(mut self, timeout: Duration) -> Self {
        self.dns_timeout = timeout;
        self
    }

    pub fn mode(&self) -> Mode {
        if self.allow_multiple {
            Mode::Multiple
        } else {
            Mode::Single
        }
    }

    pub fn limits(&self) -> LengthLimits {
        LengthLimits {
            local: self.local_max_length,
            domain: self.domain_max_length,
        }
    }

    /// The whole-string matcher in effect: the custom pattern, if any, else the
    /// built-in grammar.
    pub fn matcher(&self) -> &Regex {
        self.pattern.as_ref().unwrap_or(&*grammar::PATTERN)
    }
}

/// Validates `value` against `config`, checking domains with the system resolver.
///
/// Blank values (empty or whitespace only) are valid; requiring a value is the
/// caller's business.
///
/// With `check_domain` set this blocks for up to `dns_timeout`. The lookup runs
/// on its own thread, so calling from inside an async runtime is safe, though
/// async handlers should prefer moving the call to a blocking pool.
pub fn errors_on(value: &str, config: &ValidationConfig) -> ValidationOutcome {
    let resolver = SystemResolver::new(config.dns_timeout);
    errors_on_with(value, config, &resolver)
}

/// Same as [`errors_on`] with a caller-supplied resolver.
pub fn errors_on_with(
    value: &str,
    config: &ValidationConfig,
    resolver: &dyn DomainResolver,
) -> ValidationOutcome {
    if value.trim().is_empty() {
        return ValidationOutcome::Valid;
    }

    match config.mode() {
        Mode::Single => validator::validate_one(value, config, resolver),
        Mode::Multiple => validator::validate_many(value, config, resolver),
    }
}

pub fn is_valid(value: &str, config: &ValidationConfig) -> bool {
    errors_on(value, config).is_valid()
}

pub fn is_valid_with(
    value: &str,
    config: &ValidationConfig,
    resolver: &dyn DomainResolver,
) -> bool {
    errors_on_with(value, config, resolver).is_valid()
}

/// Finds every address embedded in free text.
pub fn extract(text: &str) -> Vec<String> {
    grammar::extract(text)
}
