use std::time::Duration;

use landing_core::session::SessionState;
use moka::sync::Cache;
use uuid::Uuid;

use crate::presenter::LoadingIndicator;

/// Everything kept for one interactive session.
#[derive(Debug, Clone, Default)]
pub struct SessionEntry {
    pub state: SessionState,
    pub loading: LoadingIndicator,
}

/// Isolated per-session storage.
///
/// Backed by Moka, so concurrent sessions never contend on a global lock and
/// abandoned sessions disappear after `idle` without manual cleanup.
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<Uuid, SessionEntry>,
}

impl SessionStore {
    pub fn new(idle: Duration, max_sessions: u64) -> Self {
        Self {
            cache: Cache::builder()
                .time_to_idle(idle)
                .max_capacity(max_sessions)
                .build(),
        }
    }

    /// Page load: clear the stored result of `id`, creating the session if
    /// needed. A live loading indicator survives the reset.
    pub fn reset(&self, id: Uuid) -> SessionEntry {
        let mut entry = self.cache.get(&id).unwrap_or_default();
        entry.state.reset();
        self.cache.insert(id, entry.clone());
        entry
    }

    /// Fetch `id`, recreating it empty if it expired or never existed.
    pub fn get_or_open(&self, id: Uuid) -> SessionEntry {
        self.cache.get_with(id, SessionEntry::default)
    }

    pub fn get(&self, id: &Uuid) -> Option<SessionEntry> {
        self.cache.get(id)
    }

    /// Write back the state produced by a cycle. The loading indicator of a
    /// live entry is kept so overlapping cycles keep sharing it.
    pub fn store(&self, id: Uuid, state: SessionState) {
        let loading = self
            .cache
            .get(&id)
            .map(|entry| entry.loading)
            .unwrap_or_default();
        self.cache.insert(id, SessionEntry { state, loading });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Duration::from_secs(60), 100)
    }

    #[test]
    fn sessions_are_isolated() {
        let store = store();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        store.reset(a);
        store.reset(b);

        let mut state = SessionState::new();
        state.record_result("<html>a</html>");
        store.store(a, state);

        assert_eq!(store.get(&a).unwrap().state.generated_markup(), "<html>a</html>");
        assert_eq!(store.get(&b).unwrap().state, SessionState::new());
    }

    #[test]
    fn reset_clears_a_stored_result() {
        let store = store();
        let id = Uuid::new_v4();
        let mut state = SessionState::new();
        state.record_result("<html>old</html>");
        store.store(id, state);

        let entry = store.reset(id);
        assert_eq!(entry.state, SessionState::new());
        assert_eq!(store.get(&id).unwrap().state, SessionState::new());
    }

    #[test]
    fn unknown_session_is_opened_empty() {
        let store = store();
        let entry = store.get_or_open(Uuid::new_v4());
        assert_eq!(entry.state, SessionState::new());
        assert!(!entry.loading.is_visible());
    }

    #[test]
    fn store_keeps_the_live_loading_indicator() {
        let store = store();
        let id = Uuid::new_v4();
        let loading = store.reset(id).loading;
        let _guard = loading.show();

        store.store(id, SessionState::new());
        assert!(store.get(&id).unwrap().loading.is_visible());
    }
}
