//! # orderdesk-settings: Settings Layer for Orderdesk
//!
//! This crate provides settings storage for the Orderdesk system:
//! an in-memory key/value store, flat-file persistence, and a shared
//! (optionally process-wide) state wrapper.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Orderdesk Settings Flow                           │
//! │                                                                         │
//! │  apps/demo (reader tasks, seeding)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 orderdesk-settings (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐    ┌────────────────┐    ┌────────────┐   │   │
//! │  │   │ SettingsState  │    │ SettingsStore  │    │  Errors    │   │   │
//! │  │   │  (state.rs)    │    │  (store.rs)    │    │ (error.rs) │   │   │
//! │  │   │                │    │                │    │            │   │   │
//! │  │   │ Arc<Mutex<_>>  │───►│ BTreeMap       │    │ NotFound   │   │   │
//! │  │   │ global()       │    │ load/save      │    │ Io         │   │   │
//! │  │   └────────────────┘    └────────────────┘    └────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Flat text file: one `key value` pair per line                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The key/value store and its file format
//! - [`state`] - Shared state wrapper and the process-wide global
//! - [`error`] - Settings error types
//!
//! ## Usage
//!
//! ```rust
//! use orderdesk_settings::{SettingsState, SettingsStore};
//!
//! // Isolated store (tests, dependency injection)
//! let mut store = SettingsStore::new();
//! store.set("username", "user1");
//! assert_eq!(store.get("username").unwrap(), "user1");
//!
//! // Process-wide shared instance
//! SettingsState::global().with_settings_mut(|s| s.set("theme", "dark"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod state;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{SettingsError, SettingsResult};
pub use state::SettingsState;
pub use store::SettingsStore;
