use indexmap::IndexMap;
use std::fmt;

use super::rule::RuleFault;
use crate::session::SessionError;

/// A mapping of field names to their validation error messages, in the
/// order the fields were validated
pub type ValidationErrors = IndexMap<String, Vec<String>>;

pub trait ValidationErrorsExt {
    /// Get a comma-separated list of all error messages
    fn to_string_list(&self) -> String;
}

impl ValidationErrorsExt for ValidationErrors {
    fn to_string_list(&self) -> String {
        self.values()
            .flatten()
            .cloned()
            .collect::<Vec<String>>()
            .join(", ")
    }
}

/// Something went wrong while validating that is not a verdict on the
/// user's input
#[derive(Debug)]
pub enum ValidationFault {
    /// A rule could not be evaluated
    Rule { field: String, fault: RuleFault },
    /// The error map could not be stored in the session
    Session(SessionError),
}

impl From<SessionError> for ValidationFault {
    fn from(e: SessionError) -> Self {
        ValidationFault::Session(e)
    }
}

impl fmt::Display for ValidationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFault::Rule { field, fault } => {
                write!(f, "rule for field `{}` failed to run: {}", field, fault)
            }
            ValidationFault::Session(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ValidationFault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationFault::Rule { fault, .. } => Some(fault),
            ValidationFault::Session(e) => Some(e),
        }
    }
}
