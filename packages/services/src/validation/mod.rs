pub mod errors;
pub mod input;
pub mod password;
pub mod rule;
pub mod rules;
pub mod validator;

// Re-export common types and functions
pub use errors::{ValidationErrors, ValidationErrorsExt, ValidationFault};
pub use input::ParamSource;
pub use password::{check_password_strength, PasswordWeakness};
pub use rule::{Assertion, RuleFault, ValidationRule};
pub use rules::Rule;
pub use validator::{display_name, stored_errors, FieldRules, Validator, ERRORS_KEY};
