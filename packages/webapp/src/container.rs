use services::validation::Validator;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::sessions::{SessionHandle, SessionRegistry};

/// Shared application services, handed to every request as app data
#[derive(Clone)]
pub struct AppContainer {
    config: Arc<AppConfig>,
    sessions: SessionRegistry,
}

impl AppContainer {
    pub fn new(config: AppConfig) -> Self {
        let sessions = SessionRegistry::new(config.session_ttl());
        AppContainer {
            config: Arc::new(config),
            sessions,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// A fresh validator that records into the given session
    pub fn validator_for(&self, session_id: Uuid) -> Validator<SessionHandle> {
        Validator::new(self.sessions.handle(session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::session::SessionStore;
    use services::validation::{FieldRules, Rule, ERRORS_KEY};
    use std::collections::HashMap;

    #[test]
    fn test_validator_writes_into_registry_session() {
        let container = AppContainer::new(AppConfig::default());
        let id = Uuid::new_v4();

        let rules = FieldRules::new().rule("name", Rule::new().required());
        let mut validator = container.validator_for(id);
        assert!(validator
            .validate(&HashMap::<String, String>::new(), rules)
            .unwrap()
            .fails());

        let clone = container.clone();
        assert_eq!(
            clone.sessions().handle(id).get(ERRORS_KEY),
            Some(serde_json::json!({ "name": ["Name is required"] }))
        );
        assert_eq!(clone.config().app_name, "formcheck");
    }
}
