//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty codes, well-formed
//! idempotency keys) so that once a value reaches the domain layer it can be
//! treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

macro_rules! code_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty code.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the code as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

code_newtype!(
    ServiceCode,
    "Identifier selecting a priced offering from the service catalog."
);

code_newtype!(
    PlanCode,
    "Identifier selecting a recurring billing plan."
);

/// Caller-supplied token letting the billing backend recognize and
/// deduplicate retried requests for the same logical payment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    /// Mints a fresh key for a new logical payment intent.
    ///
    /// Keys are random, not derived from wall-clock time, so two rapid
    /// submissions of distinct intents can never collide and retries of the
    /// same intent reuse the same stored key.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an already-issued key, rejecting empty input.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for IdempotencyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_code_trims_and_rejects_empty() {
        let code = ServiceCode::new("  signaux-premium  ").expect("valid code");
        assert_eq!(code.as_str(), "signaux-premium");
        assert_eq!(
            ServiceCode::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn generated_keys_are_unique() {
        let first = IdempotencyKey::generate();
        let second = IdempotencyKey::generate();
        assert_ne!(first, second);
        assert!(!first.as_str().is_empty());
    }
}
