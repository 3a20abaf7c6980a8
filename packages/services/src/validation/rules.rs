use regex::Regex;

use super::password::check_password_strength;
use super::rule::{Assertion, RuleFault, ValidationRule};

const DEFAULT_NAME: &str = "Value";

#[derive(Debug, Clone)]
enum Constraint {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
    Numeric,
    OneOf(Vec<String>),
    /// Compiled once when the rule is built; a bad pattern is kept as the fault
    Matches {
        regex: Result<Regex, RuleFault>,
        description: String,
    },
    Password,
}

impl Constraint {
    fn fault(&self) -> Option<&RuleFault> {
        match self {
            Constraint::Matches { regex: Err(fault), .. } => Some(fault),
            _ => None,
        }
    }

    /// Checks a present, non-blank value. `None` means it passed.
    fn check(&self, name: &str, value: &str) -> Option<String> {
        match self {
            Constraint::Required => None,
            Constraint::Email => {
                (!is_valid_email(value)).then(|| format!("{name} must be a valid email address"))
            }
            Constraint::MinLength(min) => (value.chars().count() < *min)
                .then(|| format!("{name} must be at least {min} characters long")),
            Constraint::MaxLength(max) => (value.chars().count() > *max)
                .then(|| format!("{name} must not exceed {max} characters")),
            Constraint::Numeric => {
                let numeric = value
                    .trim()
                    .parse::<f64>()
                    .map(|n| n.is_finite())
                    .unwrap_or(false);
                (!numeric).then(|| format!("{name} must be numeric"))
            }
            Constraint::OneOf(allowed) => (!allowed.iter().any(|a| a == value))
                .then(|| format!("{name} must be one of: {}", allowed.join(", "))),
            Constraint::Matches { regex, description } => match regex {
                Ok(regex) => {
                    (!regex.is_match(value)).then(|| format!("{name} must be {description}"))
                }
                Err(_) => None,
            },
            Constraint::Password => check_password_strength(value)
                .err()
                .map(|weakness| weakness.describe(name)),
        }
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// A composite rule built from chained constraints.
///
/// ```
/// use services::validation::Rule;
///
/// let rule = Rule::new().required().email();
/// ```
///
/// An absent or blank value fails only `required`; every other constraint
/// leaves presence to it. When the value is present, every failing
/// constraint is reported, in the order the constraints were added.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    name: Option<String>,
    constraints: Vec<Constraint>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn required(self) -> Self {
        self.with(Constraint::Required)
    }

    pub fn email(self) -> Self {
        self.with(Constraint::Email)
    }

    pub fn min_length(self, min: usize) -> Self {
        self.with(Constraint::MinLength(min))
    }

    pub fn max_length(self, max: usize) -> Self {
        self.with(Constraint::MaxLength(max))
    }

    pub fn numeric(self) -> Self {
        self.with(Constraint::Numeric)
    }

    pub fn one_of<I, V>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.with(Constraint::OneOf(
            allowed.into_iter().map(Into::into).collect(),
        ))
    }

    /// The whole value must match `pattern`. `description` completes the
    /// sentence "{Name} must be ...".
    ///
    /// An invalid pattern makes every later `assert` fail with a
    /// `RuleFault`, whatever the value.
    pub fn matches(self, pattern: &str, description: &str) -> Self {
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|e| RuleFault::new(format!("invalid pattern `{pattern}`: {e}")));
        self.with(Constraint::Matches {
            regex,
            description: description.to_string(),
        })
    }

    pub fn password(self) -> Self {
        self.with(Constraint::Password)
    }

    fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    fn is_required(&self) -> bool {
        self.constraints
            .iter()
            .any(|c| matches!(c, Constraint::Required))
    }
}

impl ValidationRule for Rule {
    fn with_name(mut self: Box<Self>, name: &str) -> Box<dyn ValidationRule> {
        self.name = Some(name.to_string());
        self
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn assert(&self, value: Option<&str>) -> Result<Assertion, RuleFault> {
        if let Some(fault) = self.constraints.iter().find_map(Constraint::fault) {
            return Err(fault.clone());
        }

        let name = self.name.as_deref().unwrap_or(DEFAULT_NAME);

        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            if self.is_required() {
                return Ok(Assertion::Failed(vec![format!("{name} is required")]));
            }
            return Ok(Assertion::Passed);
        };

        let messages: Vec<String> = self
            .constraints
            .iter()
            .filter_map(|constraint| constraint.check(name, value))
            .collect();

        if messages.is_empty() {
            Ok(Assertion::Passed)
        } else {
            Ok(Assertion::Failed(messages))
        }
    }
}
