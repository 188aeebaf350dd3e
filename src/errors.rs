//! Error types for construction, record decoding, and trace verification
//!
//! Every failure is fatal to the operation that raised it; nothing in the
//! crate retries or silently corrects. Errors carry the context needed to
//! diagnose them (tag name, field name, step index).

use crate::math::Scalar;
use std::fmt;

/// Arithmetic request with no defined result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Direction of a zero-magnitude vector
    ZeroMagnitudeDirection,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::ZeroMagnitudeDirection => {
                write!(f, "the direction of a zero-magnitude vector is undefined")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Invalid construction of a body, hook, or simulator
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// Body ids must be non-empty
    EmptyBodyId,
    /// Body mass must be strictly positive
    NonPositiveMass { id: String, mass: Scalar },
    /// A body with the same id already exists in the simulator
    DuplicateBodyId(String),
    /// The fixed per-step duration must be non-negative
    NegativeTimestep(Scalar),
    /// A variant parameter is outside its valid range
    InvalidParameter { name: &'static str, value: Scalar },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::EmptyBodyId => write!(f, "body id must not be empty"),
            ConstructionError::NonPositiveMass { id, mass } => {
                write!(f, "body '{id}' must have positive mass, got {mass}")
            }
            ConstructionError::DuplicateBodyId(id) => {
                write!(f, "a body with id '{id}' already exists")
            }
            ConstructionError::NegativeTimestep(dt) => {
                write!(f, "per-step duration must be non-negative, got {dt}")
            }
            ConstructionError::InvalidParameter { name, value } => {
                write!(f, "invalid value {value} for parameter '{name}'")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Failure to decode a declarative record into a concrete instance
#[derive(Debug, Clone, PartialEq)]
pub enum DecodingError {
    /// Record is not an object carrying a string `type` tag
    MissingTag,
    /// No builder is registered for the record's tag
    UnknownTag(String),
    /// A required field is absent
    MissingField { tag: String, field: String },
    /// A field is present but not of the expected shape
    MistypedField {
        tag: String,
        field: String,
        expected: &'static str,
    },
    /// The decoded values failed entity construction
    Construction(ConstructionError),
}

impl DecodingError {
    pub fn missing(tag: &str, field: &str) -> Self {
        DecodingError::MissingField {
            tag: tag.to_string(),
            field: field.to_string(),
        }
    }

    pub fn mistyped(tag: &str, field: &str, expected: &'static str) -> Self {
        DecodingError::MistypedField {
            tag: tag.to_string(),
            field: field.to_string(),
            expected,
        }
    }
}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodingError::MissingTag => {
                write!(f, "record does not carry a string 'type' tag")
            }
            DecodingError::UnknownTag(tag) => write!(f, "unknown type tag '{tag}'"),
            DecodingError::MissingField { tag, field } => {
                write!(f, "record '{tag}' is missing required field '{field}'")
            }
            DecodingError::MistypedField {
                tag,
                field,
                expected,
            } => {
                write!(f, "field '{field}' of record '{tag}' must be {expected}")
            }
            DecodingError::Construction(e) => write!(f, "decoded record is invalid: {e}"),
        }
    }
}

impl std::error::Error for DecodingError {}

impl From<ConstructionError> for DecodingError {
    fn from(e: ConstructionError) -> Self {
        DecodingError::Construction(e)
    }
}

/// Produced state diverged from the expected trace
///
/// `step` is the 1-based index of the first diverging step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationFailure {
    pub step: usize,
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "produced state diverged from the expected trace at step {}",
            self.step
        )
    }
}

impl std::error::Error for VerificationFailure {}

/// Umbrella error for controller operations
#[derive(Debug)]
pub enum ControlError {
    Decoding(DecodingError),
    Construction(ConstructionError),
    Verification(VerificationFailure),
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::Decoding(e) => write!(f, "failed to decode record: {e}"),
            ControlError::Construction(e) => write!(f, "failed to build entity: {e}"),
            ControlError::Verification(e) => write!(f, "{e}"),
            ControlError::Io(e) => write!(f, "output sink failure: {e}"),
            ControlError::Serialization(e) => write!(f, "state serialization failure: {e}"),
        }
    }
}

impl std::error::Error for ControlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControlError::Decoding(e) => Some(e),
            ControlError::Construction(e) => Some(e),
            ControlError::Verification(e) => Some(e),
            ControlError::Io(e) => Some(e),
            ControlError::Serialization(e) => Some(e),
        }
    }
}

impl From<DecodingError> for ControlError {
    fn from(e: DecodingError) -> Self {
        ControlError::Decoding(e)
    }
}

impl From<ConstructionError> for ControlError {
    fn from(e: ConstructionError) -> Self {
        ControlError::Construction(e)
    }
}

impl From<VerificationFailure> for ControlError {
    fn from(e: VerificationFailure) -> Self {
        ControlError::Verification(e)
    }
}

impl From<std::io::Error> for ControlError {
    fn from(e: std::io::Error) -> Self {
        ControlError::Io(e)
    }
}

impl From<serde_json::Error> for ControlError {
    fn from(e: serde_json::Error) -> Self {
        ControlError::Serialization(e)
    }
}
