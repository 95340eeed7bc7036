//! The persisted light/dark flag.
//!
//! [`ThemeFlag`] is read once at startup and written through to its
//! [`PreferenceStore`] on every change. Observers register callbacks with
//! [`ThemeFlag::subscribe`] and are called synchronously, before the change is
//! persisted.

use std::fmt;

use crate::{PreferenceStore, PrefsError};

/// Key the flag is stored under.
pub const DARK_MODE_KEY: &str = "isDarkMode";

/// Handle returned by [`ThemeFlag::subscribe`].
pub type SubscriptionId = usize;

type Subscriber = Box<dyn FnMut(bool)>;

/// Whether the application renders in dark mode.
pub struct ThemeFlag {
    is_dark: bool,
    store: Box<dyn PreferenceStore>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
}

impl ThemeFlag {
    /// Read the flag from `store`, defaulting to light mode when the key is
    /// absent or cannot be read.
    pub fn load(store: impl PreferenceStore + 'static) -> Self {
        let is_dark = match store.get_bool(DARK_MODE_KEY) {
            Ok(value) => value.unwrap_or(false),
            Err(e) => {
                tracing::warn!("couldn't read theme preference, using light: {e}");
                false
            }
        };
        tracing::debug!(is_dark, "loaded theme preference");

        Self {
            is_dark,
            store: Box::new(store),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Set the flag and write it through.
    ///
    /// Setting the current value is a no-op. If the write fails the new value
    /// is still in effect for this session and the error is returned.
    pub fn set(&mut self, is_dark: bool) -> Result<(), PrefsError> {
        if self.is_dark == is_dark {
            return Ok(());
        }
        self.is_dark = is_dark;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(is_dark);
        }
        self.store.set_bool(DARK_MODE_KEY, is_dark)
    }

    /// Flip the flag, returning the new value.
    pub fn toggle(&mut self) -> Result<bool, PrefsError> {
        let next = !self.is_dark;
        self.set(next)?;
        Ok(next)
    }

    /// Call `f` with the new value after every change.
    pub fn subscribe(&mut self, f: impl FnMut(bool) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }
}

impl fmt::Debug for ThemeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeFlag")
            .field("is_dark", &self.is_dark)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JsonFilePreferences, MemoryPreferences};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Store whose writes always fail.
    struct ReadOnlyPreferences;

    impl PreferenceStore for ReadOnlyPreferences {
        fn get_bool(&self, _key: &str) -> Result<Option<bool>, PrefsError> {
            Ok(Some(true))
        }

        fn set_bool(&mut self, _key: &str, _value: bool) -> Result<(), PrefsError> {
            Err(PrefsError::Io {
                path: "/read-only".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }
    }

    /// Store whose reads always fail.
    struct BrokenPreferences;

    impl PreferenceStore for BrokenPreferences {
        fn get_bool(&self, _key: &str) -> Result<Option<bool>, PrefsError> {
            Err(PrefsError::Io {
                path: "/broken".into(),
                source: std::io::Error::from(std::io::ErrorKind::Other),
            })
        }

        fn set_bool(&mut self, _key: &str, _value: bool) -> Result<(), PrefsError> {
            Ok(())
        }
    }

    #[test]
    fn defaults_to_light_when_absent() {
        let theme = ThemeFlag::load(MemoryPreferences::default());
        assert!(!theme.is_dark());
    }

    #[test]
    fn reads_stored_value() {
        let mut prefs = MemoryPreferences::default();
        prefs.set_bool(DARK_MODE_KEY, true).unwrap();
        assert!(ThemeFlag::load(prefs).is_dark());
    }

    #[test]
    fn unreadable_store_defaults_to_light() {
        assert!(!ThemeFlag::load(BrokenPreferences).is_dark());
    }

    #[test]
    fn toggle_flips_and_returns_new_value() {
        let mut theme = ThemeFlag::load(MemoryPreferences::default());
        assert!(theme.toggle().unwrap());
        assert!(theme.is_dark());
        assert!(!theme.toggle().unwrap());
        assert!(!theme.is_dark());
    }

    #[test]
    fn toggle_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut theme = ThemeFlag::load(JsonFilePreferences::open(&path).unwrap());
        theme.toggle().unwrap();
        drop(theme);

        let theme = ThemeFlag::load(JsonFilePreferences::open(&path).unwrap());
        assert!(theme.is_dark());
    }

    #[test]
    fn subscribers_see_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut theme = ThemeFlag::load(MemoryPreferences::default());
        theme.subscribe({
            let seen = seen.clone();
            move |dark| seen.borrow_mut().push(dark)
        });

        theme.toggle().unwrap();
        theme.toggle().unwrap();
        theme.set(false).unwrap();

        assert_eq!(*seen.borrow(), [true, false]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut theme = ThemeFlag::load(MemoryPreferences::default());
        let id = theme.subscribe({
            let count = count.clone();
            move |_| *count.borrow_mut() += 1
        });

        theme.toggle().unwrap();
        assert!(theme.unsubscribe(id));
        assert!(!theme.unsubscribe(id));
        theme.toggle().unwrap();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn failed_write_still_changes_value() {
        let mut theme = ThemeFlag::load(ReadOnlyPreferences);
        assert!(theme.is_dark());

        let err = theme.toggle().unwrap_err();
        assert!(matches!(err, PrefsError::Io { .. }));
        assert!(!theme.is_dark());
    }
}
