use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponseBuilder};
use dashmap::DashMap;
use serde_json::Value;
use services::session::{MemorySession, SessionError, SessionStore};
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "session_id";

struct SessionEntry {
    session: MemorySession,
    last_seen: Instant,
}

impl SessionEntry {
    fn new(now: Instant) -> Self {
        SessionEntry {
            session: MemorySession::new(),
            last_seen: now,
        }
    }

    fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) >= ttl
    }
}

/// All live sessions, keyed by the id carried in the session cookie.
///
/// A session idle for longer than the ttl is treated as gone. Expired
/// sessions are dropped when touched and swept whenever a new session is
/// created, so abandoned cookies do not pile up.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<DashMap<Uuid, SessionEntry>>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        SessionRegistry {
            sessions: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn handle(&self, id: Uuid) -> SessionHandle {
        SessionHandle {
            id,
            registry: self.clone(),
        }
    }

    /// Drops every session idle for at least the ttl as of `now`,
    /// returning how many went
    pub fn sweep_expired_at(&self, now: Instant) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| !entry.is_expired_at(now, self.ttl));
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            tracing::debug!(removed, remaining = self.sessions.len(), "swept expired sessions");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// One session in the registry. Writes go straight to the shared map; the
/// session is created on first write. Every access refreshes its idle timer.
pub struct SessionHandle {
    id: Uuid,
    registry: SessionRegistry,
}

impl SessionHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Runs `f` on the live session, or returns `None` when there is none
    fn with_live<T>(&self, f: impl FnOnce(&mut MemorySession) -> T) -> Option<T> {
        let now = Instant::now();
        let ttl = self.registry.ttl;
        let sessions = &self.registry.sessions;

        let mut entry = sessions.get_mut(&self.id)?;
        if entry.is_expired_at(now, ttl) {
            drop(entry);
            sessions.remove_if(&self.id, |_, entry| entry.is_expired_at(now, ttl));
            tracing::debug!(session_id = %self.id, "session expired");
            return None;
        }
        entry.last_seen = now;
        Some(f(&mut entry.session))
    }
}

impl SessionStore for SessionHandle {
    fn set(&mut self, key: &str, value: Value) -> Result<(), SessionError> {
        let now = Instant::now();
        let registry = &self.registry;
        // Sweeping takes every shard lock, so it must happen before `entry`
        if !registry.sessions.contains_key(&self.id) {
            registry.sweep_expired_at(now);
        }

        let mut entry = registry
            .sessions
            .entry(self.id)
            .or_insert_with(|| SessionEntry::new(now));
        if entry.is_expired_at(now, registry.ttl) {
            *entry = SessionEntry::new(now);
        }
        entry.last_seen = now;
        entry.session.set(key, value)
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.with_live(|session| session.get(key)).flatten()
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.with_live(|session| session.remove(key)).flatten()
    }
}

/// The session a request belongs to
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    pub id: Uuid,
    pub is_new: bool,
}

impl SessionCookie {
    /// Uses the id from the request's cookie, or starts a new session when
    /// the cookie is missing or unreadable
    pub fn from_request(req: &HttpRequest) -> Self {
        let existing = req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

        match existing {
            Some(id) => SessionCookie { id, is_new: false },
            None => SessionCookie {
                id: Uuid::new_v4(),
                is_new: true,
            },
        }
    }

    /// Sets the cookie on the response when the session was just started
    pub fn attach(&self, response: &mut HttpResponseBuilder) {
        if self.is_new {
            response.cookie(self.to_cookie());
        }
    }

    fn to_cookie(&self) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, self.id.to_string())
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .finish()
    }
}
