use super::dnsmx::{self, DomainResolver};
use super::error::ValidationError;
use super::grammar;
use super::length;
use super::{ValidationConfig, ValidationOutcome};

/// Validates a single address.
///
/// The split on the first `@` only feeds the length gate; the grammar then
/// re-reads the whole string on its own. The DNS check runs last and only for
/// addresses that are already well-formed.
pub fn validate_one(
    address: &str,
    config: &ValidationConfig,
    resolver: &dyn DomainResolver,
) -> ValidationOutcome {
    let (local, domain) = match address.split_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (address, None),
    };

    let domain = match domain {
        Some(domain)
            if length::within_limits(local, Some(domain), config.limits())
                && config.matcher().is_match(address.as_bytes()) =>
        {
            domain
        }
        _ => {
            return ValidationOutcome::Invalid(ValidationError::FormatInvalid(
                config.single_error_message.clone(),
            ));
        }
    };

    if config.check_domain && !dnsmx::is_routable(resolver, domain, config.record_policy) {
        return ValidationOutcome::Invalid(ValidationError::DomainUnroutable(
            config.domain_unroutable_message.clone(),
        ));
    }

    ValidationOutcome::Valid
}

/// Validates a separator-delimited list of addresses.
///
/// Every token is checked. Any failure collapses into one message: the
/// single-address one when the value held exactly one token, the
/// multiple-address one otherwise.
pub fn validate_many(
    text: &str,
    config: &ValidationConfig,
    resolver: &dyn DomainResolver,
) -> ValidationOutcome {
    let tokens = grammar::split_addresses(text);
    let failures = tokens
        .iter()
        .map(|token| validate_one(token, config, resolver))
        .filter(|outcome| !outcome.is_valid())
        .count();

    match (failures, tokens.len()) {
        (0, _) => ValidationOutcome::Valid,
        (_, 1) => ValidationOutcome::Invalid(ValidationError::FormatInvalid(
            config.single_error_message.clone(),
        )),
        _ => ValidationOutcome::Invalid(ValidationError::MultipleFormatInvalid(
            config.multiple_error_message.clone(),
        )),
    }
}
