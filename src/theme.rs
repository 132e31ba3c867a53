// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session-scoped light/dark theme store.
//!
//! The store follows the operating system's color-scheme preference until
//! the user toggles the theme by hand; from then on the manual choice wins
//! for the rest of the session. Views receive the store by reference and
//! can subscribe to be told when the effective mode changes.

use serde::{Deserialize, Serialize};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl From<eframe::Theme> for ThemeMode {
    fn from(theme: eframe::Theme) -> Self {
        match theme {
            eframe::Theme::Dark => ThemeMode::Dark,
            eframe::Theme::Light => ThemeMode::Light,
        }
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(ThemeMode)>;

pub struct ThemeStore {
    mode: ThemeMode,
    manual_override: Option<ThemeMode>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("manual_override", &self.manual_override)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ThemeStore {
    /// Create the store from the system preference read at startup.
    /// An unknown preference starts in dark mode.
    pub fn initialize(system: Option<ThemeMode>) -> Self {
        let mode = system.unwrap_or(ThemeMode::Dark);
        log::info!("Theme initialized to {:?} (system preference: {:?})", mode, system);
        Self {
            mode,
            manual_override: None,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn manual_override(&self) -> Option<ThemeMode> {
        self.manual_override
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Flip the theme and pin the result as a manual override.
    pub fn toggle(&mut self) -> ThemeMode {
        let target = self.mode.toggled();
        self.manual_override = Some(target);
        log::info!("Theme toggled to {:?}", target);
        self.set_mode(target);
        target
    }

    /// Follow a system preference change unless the user has overridden it.
    pub fn on_system_preference_changed(&mut self, mode: ThemeMode) {
        if self.manual_override.is_some() {
            log::debug!("Ignoring system theme {:?}: manual override active", mode);
            return;
        }
        self.set_mode(mode);
    }

    /// Register a callback run whenever the effective mode changes.
    pub fn subscribe(&mut self, listener: impl FnMut(ThemeMode) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn set_mode(&mut self, mode: ThemeMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        for (_, listener) in &mut self.listeners {
            listener(mode);
        }
    }
}

/// Turns the per-frame system theme report into change notifications.
#[derive(Debug, Default)]
pub struct SystemThemeWatcher {
    last: Option<ThemeMode>,
}

impl SystemThemeWatcher {
    pub fn new(initial: Option<ThemeMode>) -> Self {
        Self { last: initial }
    }

    /// Returns the new preference when it differs from the last one seen.
    pub fn observe(&mut self, current: Option<ThemeMode>) -> Option<ThemeMode> {
        let current = current?;
        if self.last == Some(current) {
            return None;
        }
        self.last = Some(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initialize_from_system() {
        let store = ThemeStore::initialize(Some(ThemeMode::Light));
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.manual_override(), None);

        let store = ThemeStore::initialize(None);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_override_wins_over_system() {
        let mut store = ThemeStore::initialize(Some(ThemeMode::Dark));
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.manual_override(), None);

        store.toggle();
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.manual_override(), Some(ThemeMode::Light));

        store.on_system_preference_changed(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_follows_system_without_override() {
        let mut store = ThemeStore::initialize(Some(ThemeMode::Light));
        store.on_system_preference_changed(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert!(store.is_dark());
    }

    #[test]
    fn test_toggle_twice() {
        let mut store = ThemeStore::initialize(Some(ThemeMode::Light));
        store.toggle();
        store.toggle();
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.manual_override(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_subscribers_notified_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::initialize(Some(ThemeMode::Dark));

        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |mode| sink.borrow_mut().push(mode));

        store.on_system_preference_changed(ThemeMode::Dark);
        store.on_system_preference_changed(ThemeMode::Light);
        store.toggle();
        assert_eq!(*seen.borrow(), vec![ThemeMode::Light, ThemeMode::Dark]);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_system_watcher_reports_changes() {
        let mut watcher = SystemThemeWatcher::new(Some(ThemeMode::Dark));
        assert_eq!(watcher.observe(Some(ThemeMode::Dark)), None);
        assert_eq!(watcher.observe(None), None);
        assert_eq!(watcher.observe(Some(ThemeMode::Light)), Some(ThemeMode::Light));
        assert_eq!(watcher.observe(Some(ThemeMode::Light)), None);
    }
}
