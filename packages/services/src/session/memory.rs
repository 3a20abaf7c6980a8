use serde_json::Value;
use std::collections::HashMap;

use super::store::{SessionError, SessionStore};

/// Session data held in process memory
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    values: HashMap<String, Value>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn set(&mut self, key: &str, value: Value) -> Result<(), SessionError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut session = MemorySession::new();
        session.set("errors", json!({ "email": ["bad"] })).unwrap();
        session.set("errors", json!({})).unwrap();

        assert_eq!(session.get("errors"), Some(json!({})));
        assert_eq!(session.get("missing"), None);
    }

    #[test]
    fn test_remove() {
        let mut session = MemorySession::new();
        session.set("flash", json!("saved")).unwrap();

        assert_eq!(session.remove("flash"), Some(json!("saved")));
        assert_eq!(session.get("flash"), None);
        assert_eq!(session.remove("flash"), None);
    }

    #[test]
    fn test_writes_through_mutable_reference() {
        fn store<S: SessionStore>(mut session: S) {
            session.set("k", json!(1)).unwrap();
        }

        let mut session = MemorySession::new();
        store(&mut session);
        assert_eq!(session.get("k"), Some(json!(1)));
    }
}
