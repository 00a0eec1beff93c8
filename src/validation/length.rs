/// Maximum sizes, in characters, of the two halves of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthLimits {
    pub local: usize,
    pub domain: usize,
}

impl Default for LengthLimits {
    fn default() -> Self {
        Self {
            local: 64,
            domain: 255,
        }
    }
}

impl LengthLimits {
    /// Builds limits from signed values as they arrive from outside.
    /// Anything non-positive becomes `0`, which no address can satisfy.
    pub fn from_signed(local: i64, domain: i64) -> Self {
        Self {
            local: clamp(local),
            domain: clamp(domain),
        }
    }
}

fn clamp(limit: i64) -> usize {
    usize::try_from(limit.max(0)).unwrap_or(usize::MAX)
}

/// Length gate run ahead of the grammar.
///
/// Lengths are measured on the raw substrings around the first `@`. A missing
/// domain part fails outright.
pub fn within_limits(local: &str, domain: Option<&str>, limits: LengthLimits) -> bool {
    match domain {
        Some(domain) => {
            local.chars().count() <= limits.local && domain.chars().count() <= limits.domain
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        let limits = LengthLimits::default();
        assert!(within_limits(&"a".repeat(64), Some("example.com"), limits));
        assert!(!within_limits(&"a".repeat(65), Some("example.com"), limits));
        assert!(within_limits("a", Some(&"b".repeat(255)), limits));
        assert!(!within_limits("a", Some(&"b".repeat(256)), limits));
    }

    #[test]
    fn missing_domain_fails() {
        assert!(!within_limits("antani", None, LengthLimits::default()));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let limits = LengthLimits { local: 3, domain: 255 };
        assert!(within_limits("äöü", Some("example.com"), limits));
    }

    #[test]
    fn non_positive_limits_clamp_to_zero() {
        let limits = LengthLimits::from_signed(-5, 0);
        assert_eq!(limits, LengthLimits { local: 0, domain: 0 });
        assert!(!within_limits("a", Some("b.com"), limits));
    }
}
