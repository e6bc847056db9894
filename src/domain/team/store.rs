use std::sync::{PoisonError, RwLock};

/// Currently selected vendor team id, shared by every request in the process.
///
/// Written by the routes that discover a team (`/organization`,
/// `/create-team`) and read by the routes that act on one. Last writer wins.
#[derive(Debug, Default)]
pub struct TeamIdStore {
    current: RwLock<Option<String>>,
}

impl TeamIdStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a team id, e.g. from configuration
    pub fn with_team_id(team_id: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(Some(team_id.into())),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the selected team id, returning the previous one
    pub fn set(&self, team_id: impl Into<String>) -> Option<String> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        current.replace(team_id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_empty_store() {
        let store = TeamIdStore::new();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_seeded_store() {
        let store = TeamIdStore::with_team_id("team-1");
        assert_eq!(store.get(), Some("team-1".to_string()));
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let store = TeamIdStore::new();

        assert_eq!(store.set("team-1"), None);
        assert_eq!(store.set("team-2"), Some("team-1".to_string()));
        assert_eq!(store.get(), Some("team-2".to_string()));
    }

    #[test]
    fn test_concurrent_writers_leave_a_written_value() {
        let store = Arc::new(TeamIdStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.set(format!("team-{}", i));
                    store.get()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_some());
        }

        let last = store.get().unwrap();
        assert!(last.starts_with("team-"));
    }
}
