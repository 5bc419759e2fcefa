//! # Settings State
//!
//! Shared, thread-safe access to a [`SettingsStore`], plus the process-wide
//! global instance.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple threads may read settings concurrently
//! 2. Only one thread should modify the store at a time
//! 3. Read and write windows are both short
//!
//! ## One Global, Constructed Once
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Global Settings Initialization                          │
//! │                                                                         │
//! │  Thread A ──┐                                                           │
//! │             ├──► SettingsState::global() ──► OnceLock::get_or_init      │
//! │  Thread B ──┘                    │                                      │
//! │                                  ▼                                      │
//! │             first caller constructs the store, everyone else            │
//! │             blocks briefly and then observes the same instance          │
//! │                                                                         │
//! │  • Exactly one store is ever constructed, even under a race             │
//! │  • Warm calls take an unsynchronized fast path (no lock cost)           │
//! │  • No destruction path: the store lives until process exit              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `OnceLock` is the standard-library one-shot initialization primitive;
//! it provides the same guarantee a hand-rolled double-checked lock would,
//! without the ordering pitfalls.
//!
//! Prefer passing a [`SettingsState`] (or plain [`SettingsStore`]) into the
//! code that needs it; reach for [`SettingsState::global`] only where a true
//! process-wide instance is required. Tests construct isolated instances.

use std::sync::{Arc, Mutex, OnceLock};

use crate::store::SettingsStore;

/// Shared settings state.
///
/// ## Why Mutex, not RwLock?
/// Settings operations are quick, and the demonstration workload is tiny.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug, Default)]
pub struct SettingsState {
    store: Arc<Mutex<SettingsStore>>,
}

impl SettingsState {
    /// Creates a new state wrapping an empty store.
    pub fn new() -> Self {
        SettingsState {
            store: Arc::new(Mutex::new(SettingsStore::new())),
        }
    }

    /// Returns the process-wide settings state, creating it on first call.
    ///
    /// Safe when called concurrently before the instance exists: exactly
    /// one store is constructed, and every caller (whether it triggered
    /// construction or arrived after) observes the same instance.
    pub fn global() -> &'static SettingsState {
        static GLOBAL: OnceLock<SettingsState> = OnceLock::new();
        GLOBAL.get_or_init(SettingsState::new)
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use orderdesk_settings::SettingsState;
    ///
    /// let state = SettingsState::new();
    /// let count = state.with_settings(|s| s.len());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_settings<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SettingsStore) -> R,
    {
        let store = self.store.lock().expect("Settings mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use orderdesk_settings::SettingsState;
    ///
    /// let state = SettingsState::new();
    /// state.with_settings_mut(|s| s.set("theme", "dark"));
    /// ```
    pub fn with_settings_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SettingsStore) -> R,
    {
        let mut store = self.store.lock().expect("Settings mutex poisoned");
        f(&mut store)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_isolated_instances_do_not_share_state() {
        let a = SettingsState::new();
        let b = SettingsState::new();

        a.with_settings_mut(|s| s.set("only_in_a", "yes"));

        assert!(b.with_settings(|s| s.get("only_in_a").is_err()));
    }

    /// All concurrent first-time callers must observe the same instance:
    /// pairwise identity over the addresses returned from racing threads.
    #[test]
    fn test_global_identity_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| SettingsState::global() as *const SettingsState as usize))
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(
            addresses[0],
            SettingsState::global() as *const SettingsState as usize
        );
    }

    #[test]
    fn test_concurrent_reads_after_population() {
        let state = SettingsState::global();
        state.with_settings_mut(|s| s.set("state_test_username", "user1"));

        let readers: Vec<_> = (0..2)
            .map(|_| {
                thread::spawn(|| {
                    SettingsState::global()
                        .with_settings(|s| s.get("state_test_username").unwrap())
                })
            })
            .collect();

        for reader in readers {
            assert_eq!(reader.join().unwrap(), "user1");
        }
    }
}
