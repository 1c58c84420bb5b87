use crate::types::{AppError, Session, SessionDefaults};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Shared handle to one session. The mutex serializes turns for that session.
pub type SessionHandle = Arc<Mutex<Session>>;

struct Entry {
    handle: SessionHandle,
    last_seen: Instant,
}

/// In-memory registry of live sessions, bounded by `max_sessions`.
pub struct SessionManager {
    sessions: HashMap<String, Entry>,
    defaults: SessionDefaults,
    max_sessions: usize,
}

impl SessionManager {
    pub fn new(defaults: SessionDefaults, max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            defaults,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Create a fresh session, evicting the least recently used one when full.
    pub fn create_session(&mut self) -> (String, SessionHandle) {
        if self.sessions.len() >= self.max_sessions {
            self.evict_oldest();
        }

        let session = Session::new(&self.defaults);
        let id = session.id.clone();
        let handle = Arc::new(Mutex::new(session));
        self.sessions.insert(
            id.clone(),
            Entry {
                handle: handle.clone(),
                last_seen: Instant::now(),
            },
        );
        tracing::info!("[SESSIONS] Created session {} ({} live)", id, self.sessions.len());
        (id, handle)
    }

    pub fn get(&mut self, id: &str) -> Option<SessionHandle> {
        self.sessions.get_mut(id).map(|entry| {
            entry.last_seen = Instant::now();
            entry.handle.clone()
        })
    }

    pub fn require(&mut self, id: &str) -> Result<SessionHandle, AppError> {
        self.get(id)
            .ok_or_else(|| AppError::SessionNotFound(id.to_string()))
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|(_, entry)| entry.last_seen)
            .map(|(id, _)| id.clone());

        if let Some(id) = oldest {
            self.sessions.remove(&id);
            tracing::info!("[SESSIONS] Evicted idle session {}", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompts::Mode;

    #[tokio::test]
    async fn test_create_and_get() {
        let mut manager = SessionManager::new(SessionDefaults::default(), 10);
        let (id, handle) = manager.create_session();

        assert_eq!(manager.count(), 1);
        let fetched = manager.get(&id).unwrap();
        assert!(Arc::ptr_eq(&handle, &fetched));
        assert_eq!(fetched.lock().await.id, id);
        assert!(manager.get("missing").is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let mut manager = SessionManager::new(SessionDefaults::default(), 10);
        let (_, a) = manager.create_session();
        let (_, b) = manager.create_session();

        a.lock().await.select_mode(Mode::RolePlay);
        assert_eq!(b.lock().await.mode(), Mode::ZeroShot);
    }

    #[test]
    fn test_defaults_apply_to_new_sessions() {
        let defaults = SessionDefaults {
            mode: Mode::FewShot,
            role: "Nurse".to_string(),
            temperature: 0.2,
        };
        let mut manager = SessionManager::new(defaults, 10);
        let (_, handle) = manager.create_session();
        let session = handle.try_lock().unwrap();
        assert_eq!(session.mode(), Mode::FewShot);
        assert_eq!(session.role(), "Nurse");
        assert_eq!(session.temperature(), 0.2);
    }

    #[test]
    fn test_least_recently_used_is_evicted() {
        let mut manager = SessionManager::new(SessionDefaults::default(), 2);
        let (first, _) = manager.create_session();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let (second, _) = manager.create_session();
        std::thread::sleep(std::time::Duration::from_millis(2));

        // Touch the first so the second becomes the oldest.
        manager.get(&first);
        let (third, _) = manager.create_session();

        assert_eq!(manager.count(), 2);
        assert!(manager.get(&first).is_some());
        assert!(manager.get(&second).is_none());
        assert!(manager.get(&third).is_some());
    }

    #[test]
    fn test_require_missing_session() {
        let mut manager = SessionManager::new(SessionDefaults::default(), 2);
        assert!(matches!(
            manager.require("nope"),
            Err(AppError::SessionNotFound(id)) if id == "nope"
        ));
    }
}
