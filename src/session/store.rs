// src/session/store.rs — Session store abstraction and in-memory TTL implementation

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use super::ConversationSession;
use crate::infra::errors::ScreenpassError;

/// Keyed storage for active sessions.
///
/// Writes are last-write-wins; callers do not lock a session across a turn.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<ConversationSession>, ScreenpassError>;

    /// Insert or replace the session under `session.id`.
    fn put(&self, session: ConversationSession) -> Result<(), ScreenpassError>;

    /// Returns whether a session was removed.
    fn delete(&self, id: &str) -> Result<bool, ScreenpassError>;

    fn active_count(&self) -> usize;
}

struct Entry {
    session: ConversationSession,
    touched: Instant,
}

/// Process-local store. Sessions are lost on restart.
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, Entry>>,
    ttl: Option<Duration>,
}

impl InMemorySessionStore {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Entry>>, ScreenpassError> {
        self.entries
            .lock()
            .map_err(|_| ScreenpassError::SessionStore("session map lock poisoned".into()))
    }

    /// Drop sessions idle for at least the TTL. Returns how many were removed.
    pub fn evict_expired(&self) -> usize {
        let Some(ttl) = self.ttl else {
            return 0;
        };
        let Ok(mut entries) = self.entries.lock() else {
            return 0;
        };
        let before = entries.len();
        entries.retain(|_, e| e.touched.elapsed() < ttl);
        before - entries.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, id: &str) -> Result<Option<ConversationSession>, ScreenpassError> {
        Ok(self.lock()?.get(id).map(|e| e.session.clone()))
    }

    fn put(&self, session: ConversationSession) -> Result<(), ScreenpassError> {
        self.lock()?.insert(
            session.id.clone(),
            Entry {
                session,
                touched: Instant::now(),
            },
        );
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool, ScreenpassError> {
        Ok(self.lock()?.remove(id).is_some())
    }

    fn active_count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}

/// Periodically evict idle sessions until the runtime shuts down.
pub fn spawn_sweeper(
    store: Arc<InMemorySessionStore>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let evicted = store.evict_expired();
            if evicted > 0 {
                tracing::info!(evicted, "Evicted idle sessions");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::CompanyConfig;

    fn session(id: &str) -> ConversationSession {
        ConversationSession::new(
            id,
            "direct",
            "companyA",
            CompanyConfig::new("Company A", 4, 4),
            chrono::Local::now().naive_local(),
        )
    }

    #[test]
    fn test_put_get_delete() {
        let store = InMemorySessionStore::default();
        assert!(store.get("s1").unwrap().is_none());

        store.put(session("s1")).unwrap();
        assert_eq!(store.active_count(), 1);
        assert_eq!(store.get("s1").unwrap().unwrap().id, "s1");

        assert!(store.delete("s1").unwrap());
        assert!(!store.delete("s1").unwrap());
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn test_put_replaces_existing() {
        let store = InMemorySessionStore::default();
        store.put(session("s1")).unwrap();

        let mut updated = session("s1");
        updated.history = vec![">Trucker: hello".into()];
        store.put(updated).unwrap();

        assert_eq!(store.active_count(), 1);
        assert_eq!(store.get("s1").unwrap().unwrap().history.len(), 1);
    }

    #[test]
    fn test_evict_with_zero_ttl_removes_all() {
        let store = InMemorySessionStore::new(Some(Duration::ZERO));
        store.put(session("a")).unwrap();
        store.put(session("b")).unwrap();
        assert_eq!(store.evict_expired(), 2);
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn test_evict_keeps_fresh_sessions() {
        let store = InMemorySessionStore::new(Some(Duration::from_secs(3600)));
        store.put(session("a")).unwrap();
        assert_eq!(store.evict_expired(), 0);
        assert_eq!(store.active_count(), 1);
    }

    #[test]
    fn test_no_ttl_never_evicts() {
        let store = InMemorySessionStore::new(None);
        store.put(session("a")).unwrap();
        assert_eq!(store.evict_expired(), 0);
    }

    #[tokio::test]
    async fn test_sweeper_evicts() {
        let store = Arc::new(InMemorySessionStore::new(Some(Duration::ZERO)));
        store.put(session("a")).unwrap();

        let handle = spawn_sweeper(store.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.abort();

        assert_eq!(store.active_count(), 0);
    }
}
