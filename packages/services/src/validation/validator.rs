use indexmap::IndexMap;
use serde_json::Value;

use super::errors::{ValidationErrors, ValidationFault};
use super::input::ParamSource;
use super::rule::{Assertion, ValidationRule};
use crate::session::SessionStore;

/// Session key the error map is stored under
pub const ERRORS_KEY: &str = "errors";

/// Rules to run against a request, keyed by field name.
///
/// Fields are validated in insertion order. Adding a rule for a field
/// that already has one replaces it in place.
#[derive(Default)]
pub struct FieldRules {
    rules: IndexMap<String, Box<dyn ValidationRule>>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule<R>(mut self, field: &str, rule: R) -> Self
    where
        R: ValidationRule + 'static,
    {
        self.insert(field, Box::new(rule));
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, rule: Box<dyn ValidationRule>) {
        self.rules.insert(field.into(), rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl IntoIterator for FieldRules {
    type Item = (String, Box<dyn ValidationRule>);
    type IntoIter = indexmap::map::IntoIter<String, Box<dyn ValidationRule>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

/// Runs field rules against request input and records the failures in
/// the session so the form can be redisplayed after a redirect.
pub struct Validator<S> {
    session: S,
    errors: ValidationErrors,
}

impl<S: SessionStore> Validator<S> {
    pub fn new(session: S) -> Self {
        Self {
            session,
            errors: ValidationErrors::new(),
        }
    }

    /// Validates `input` against `rules`, replacing the errors of any
    /// earlier call, and stores the new error map in the session even
    /// when it is empty.
    ///
    /// A rule that cannot run aborts validation before anything is
    /// written; the previous errors are left untouched in that case.
    pub fn validate<P>(&mut self, input: &P, rules: FieldRules) -> Result<&mut Self, ValidationFault>
    where
        P: ParamSource + ?Sized,
    {
        let field_count = rules.len();
        let mut errors = ValidationErrors::new();

        for (field, rule) in rules {
            let rule = rule.with_name(&display_name(&field));
            match rule.assert(input.get_param(&field)) {
                Ok(Assertion::Passed) => {}
                Ok(Assertion::Failed(messages)) => {
                    errors.insert(field, messages);
                }
                Err(fault) => {
                    tracing::error!(field = %field, error = %fault, "validation rule could not run");
                    return Err(ValidationFault::Rule { field, fault });
                }
            }
        }

        self.errors = errors;
        self.session.set(ERRORS_KEY, errors_to_value(&self.errors))?;

        tracing::debug!(
            fields = field_count,
            failed = self.errors.len(),
            "validated request input"
        );
        Ok(self)
    }

    /// True when the last `validate` call recorded at least one error
    pub fn fails(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }
}

/// Display name handed to a field's rule: the field name with its first
/// character upper-cased.
pub fn display_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reads back the errors a previous validation stored in `session`.
/// Missing or unreadable entries yield an empty map.
pub fn stored_errors<S: SessionStore + ?Sized>(session: &S) -> ValidationErrors {
    let Some(value) = session.get(ERRORS_KEY) else {
        return ValidationErrors::new();
    };
    match serde_json::from_value(value) {
        Ok(errors) => errors,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed validation errors in session");
            ValidationErrors::new()
        }
    }
}

fn errors_to_value(errors: &ValidationErrors) -> Value {
    Value::Object(
        errors
            .iter()
            .map(|(field, messages)| (field.clone(), Value::from(messages.clone())))
            .collect(),
    )
}
