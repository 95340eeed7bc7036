//! tasklist: the state behind a small to-do list application.
//!
//! This crate holds everything that is not drawing: the task model, the
//! in-memory store both screens share, and the persisted light/dark flag.
//!
//! # Overview
//!
//! - [`TaskStore`] owns the ordered task sequence and the pending input text
//! - [`ThemeFlag`] is the one value that survives a restart, written through a
//!   [`PreferenceStore`] on every change
//!
//! # Example
//!
//! ```
//! use tasklist::{MemoryPreferences, TaskStore, ThemeFlag};
//!
//! let mut store = TaskStore::new();
//! let id = store.add_task("buy milk").unwrap();
//! assert_eq!(store.incomplete_count(), 1);
//!
//! store.toggle(id);
//! assert_eq!(store.completed_count(), 1);
//!
//! let mut theme = ThemeFlag::load(MemoryPreferences::default());
//! assert!(!theme.is_dark());
//! theme.toggle().unwrap();
//! assert!(theme.is_dark());
//! ```

mod error;
pub mod prefs;
pub mod store;
pub mod task;
pub mod theme;

pub use error::PrefsError;
pub use prefs::{JsonFilePreferences, MemoryPreferences, PreferenceStore};
pub use store::{InputPolicy, TaskStore};
pub use task::{Task, TaskId};
pub use theme::{DARK_MODE_KEY, SubscriptionId, ThemeFlag};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        InputPolicy, JsonFilePreferences, MemoryPreferences, PreferenceStore, PrefsError, Task,
        TaskId, TaskStore, ThemeFlag,
    };
}
