use serde_json::Value;

use super::store::{SessionError, SessionStore};

/// Session key holding messages meant for the next page the user sees
pub const FLASH_KEY: &str = "flash";

/// Queues `message` behind any flash messages not yet shown
pub fn add_flash<S: SessionStore + ?Sized>(session: &mut S, message: &str) -> Result<(), SessionError> {
    let mut messages = session.get(FLASH_KEY).map(parse_messages).unwrap_or_default();
    messages.push(message.to_string());
    session.set(FLASH_KEY, Value::from(messages))
}

/// Returns the queued flash messages and clears them, so each is shown once
pub fn take_flash<S: SessionStore + ?Sized>(session: &mut S) -> Vec<String> {
    session.remove(FLASH_KEY).map(parse_messages).unwrap_or_default()
}

fn parse_messages(value: Value) -> Vec<String> {
    match serde_json::from_value(value) {
        Ok(messages) => messages,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed flash messages in session");
            Vec::new()
        }
    }
}
