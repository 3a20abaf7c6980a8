use std::fmt;

/// Result of asserting a rule against a single value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assertion {
    Passed,
    /// The value was rejected; messages are in the order the rule produced them
    Failed(Vec<String>),
}

/// A rule that could not be evaluated at all, e.g. because it was built
/// with an invalid pattern. Never a statement about the value itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFault {
    pub message: String,
}

impl RuleFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RuleFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl std::error::Error for RuleFault {}

/// A validation rule the `Validator` can run against one request field.
///
/// Implementations decide their own messages. The validator only names
/// the rule after the field and records whatever it reports.
pub trait ValidationRule: Send {
    /// Returns the rule configured to report failures using `name`
    fn with_name(self: Box<Self>, name: &str) -> Box<dyn ValidationRule>;

    fn name(&self) -> Option<&str>;

    fn assert(&self, value: Option<&str>) -> Result<Assertion, RuleFault>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NonEmpty {
        name: Option<String>,
    }

    impl ValidationRule for NonEmpty {
        fn with_name(mut self: Box<Self>, name: &str) -> Box<dyn ValidationRule> {
            self.name = Some(name.to_string());
            self
        }

        fn name(&self) -> Option<&str> {
            self.name.as_deref()
        }

        fn assert(&self, value: Option<&str>) -> Result<Assertion, RuleFault> {
            match value {
                Some(v) if !v.is_empty() => Ok(Assertion::Passed),
                _ => Ok(Assertion::Failed(vec![format!(
                    "{} is empty",
                    self.name().unwrap_or("Value")
                )])),
            }
        }
    }

    #[test]
    fn test_custom_rule_uses_configured_name() {
        let rule: Box<dyn ValidationRule> = Box::new(NonEmpty { name: None });
        let rule = rule.with_name("Title");

        assert_eq!(rule.name(), Some("Title"));
        assert_eq!(
            rule.assert(None).unwrap(),
            Assertion::Failed(vec!["Title is empty".to_string()])
        );
        assert_eq!(rule.assert(Some("x")).unwrap(), Assertion::Passed);
    }

    #[test]
    fn test_rule_fault_display() {
        let fault = RuleFault::new("bad pattern");
        assert_eq!(fault.to_string(), "bad pattern");
    }
}
