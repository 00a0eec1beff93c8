use thiserror::Error;

/// Why a value was rejected. Exactly one is reported per validation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Grammar or length failure.
    #[error("{0}")]
    FormatInvalid(String),
    /// At least one bad address in a value holding two or more.
    #[error("{0}")]
    MultipleFormatInvalid(String),
    /// Well-formed, but the domain has no mail records.
    #[error("{0}")]
    DomainUnroutable(String),
}

impl ValidationError {
    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FormatInvalid(_) => "INVALID_FORMAT",
            Self::MultipleFormatInvalid(_) => "INVALID_MULTIPLE",
            Self::DomainUnroutable(_) => "UNROUTABLE",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::FormatInvalid(message)
            | Self::MultipleFormatInvalid(message)
            | Self::DomainUnroutable(message) => message,
        }
    }
}
