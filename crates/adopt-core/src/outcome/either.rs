//! Either - two-variant outcome of a business operation
//!
//! `Failure` carries an expected, user-correctable problem; `Success` carries the result.
//! Infrastructure faults never travel through this type: services return them as `Err`.

use serde::Serialize;
use std::fmt;

/// Outcome of a service operation
///
/// Serializes untagged, so only the populated payload appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
#[must_use = "an outcome may be a failure that has to be reported"]
pub enum Either<F, S> {
    Failure(F),
    Success(S),
}

impl<F, S> Either<F, S> {
    /// Build the failure variant
    pub const fn failure(value: F) -> Self {
        Self::Failure(value)
    }

    /// Build the success variant
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrow whichever payload is populated
    pub const fn as_ref(&self) -> Either<&F, &S> {
        match self {
            Self::Failure(value) => Either::Failure(value),
            Self::Success(value) => Either::Success(value),
        }
    }

    /// Failure payload, if this is a failure
    pub fn failure_value(&self) -> Option<&F> {
        match self {
            Self::Failure(value) => Some(value),
            Self::Success(_) => None,
        }
    }

    /// Success payload, if this is a success
    pub fn success_value(&self) -> Option<&S> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    /// Transform the success payload, leaving a failure untouched
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Either<F, T> {
        match self {
            Self::Failure(value) => Either::Failure(value),
            Self::Success(value) => Either::Success(f(value)),
        }
    }

    /// Transform the failure payload, leaving a success untouched
    pub fn map_failure<G>(self, f: impl FnOnce(F) -> G) -> Either<G, S> {
        match self {
            Self::Failure(value) => Either::Failure(f(value)),
            Self::Success(value) => Either::Success(value),
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Self::Failure(value) => Err(value),
            Self::Success(value) => Ok(value),
        }
    }
}

impl<F, S> From<Result<S, F>> for Either<F, S> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(value) => Self::Failure(value),
        }
    }
}

/// Failure payload shared by every service: a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainFailure {
    pub message: String,
}

impl DomainFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome whose failure side is a [`DomainFailure`]
pub type Outcome<S> = Either<DomainFailure, S>;
