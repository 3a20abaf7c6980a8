use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub message: String,
}

impl SessionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session error: {}", self.message)
    }
}

impl std::error::Error for SessionError {}

/// Key-value storage scoped to one user session
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    fn set(&mut self, key: &str, value: Value) -> Result<(), SessionError>;

    fn get(&self, key: &str) -> Option<Value>;

    /// Deletes `key`, returning what it held
    fn remove(&mut self, key: &str) -> Option<Value>;
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn set(&mut self, key: &str, value: Value) -> Result<(), SessionError> {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        (**self).remove(key)
    }
}
