//! Explicit navigation-state model consumed by the shell view.
//!
//! # Responsibility
//! - Describe an in-flight page transition as a plain value.
//! - Derive the "searching", "detail loading" and link-state signals.
//! - Decide history push/replace for live search submissions.
//! - Reconcile the search input with `q` only when `q` changes.
//!
//! # Invariants
//! - A navigation counts as a search when its target has a `q` key,
//!   regardless of the value.
//! - The detail pane never shows loading for search navigations.

use crate::query::{has_param, search_param, SEARCH_PARAM};

/// Phase of the current page transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationStatus {
    #[default]
    Idle,
    Loading,
    Submitting,
}

/// Snapshot of the in-flight navigation, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub status: NavigationStatus,
    /// Destination as `path[?query]`; `None` while idle.
    pub location: Option<String>,
}

impl NavigationState {
    /// No transition in flight. Server-rendered pages always use this.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading(location: impl Into<String>) -> Self {
        Self {
            status: NavigationStatus::Loading,
            location: Some(location.into()),
        }
    }

    pub fn submitting(location: impl Into<String>) -> Self {
        Self {
            status: NavigationStatus::Submitting,
            location: Some(location.into()),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status == NavigationStatus::Idle
    }

    /// Path component of the pending destination.
    pub fn pending_path(&self) -> Option<&str> {
        if self.is_idle() {
            return None;
        }
        self.location
            .as_deref()
            .map(|location| location.split_once('?').map_or(location, |(path, _)| path))
    }

    /// Search term the pending navigation is loading, if it is a search.
    pub fn pending_search(&self) -> Option<String> {
        search_param(self.pending_query())
    }

    /// Whether the pending destination carries a `q` parameter.
    pub fn is_searching(&self) -> bool {
        self.pending_query()
            .is_some_and(|query| has_param(query, SEARCH_PARAM))
    }

    /// Loading state for the detail pane: any transition except a search.
    pub fn shows_detail_loading(&self) -> bool {
        !self.is_idle() && !self.is_searching()
    }

    fn pending_query(&self) -> Option<&str> {
        if self.is_idle() {
            return None;
        }
        self.location
            .as_deref()
            .and_then(|location| location.split_once('?'))
            .map(|(_, query)| query)
    }
}

/// Visual state of a sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Active,
    Pending,
    None,
}

impl LinkState {
    /// Resolves the state of a link to `target`.
    ///
    /// A link is active for its own path and every path below it.
    pub fn resolve(target: &str, current_path: &str, navigation: &NavigationState) -> Self {
        if path_matches(target, current_path) {
            return Self::Active;
        }
        match navigation.pending_path() {
            Some(pending) if path_matches(target, pending) => Self::Pending,
            _ => Self::None,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::None => "",
        }
    }
}

fn path_matches(target: &str, path: &str) -> bool {
    let target = target.trim_end_matches('/');
    path == target
        || path
            .strip_prefix(target)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// How a live search submission touches browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

impl HistoryMode {
    /// The first search (no previous `q`) pushes; later keystrokes replace.
    pub fn for_search(previous_q: Option<&str>) -> Self {
        match previous_q {
            None => Self::Push,
            Some(_) => Self::Replace,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Replace => "replace",
        }
    }
}

/// Keeps the search input in step with `q` across out-of-band navigation
/// such as back/forward.
///
/// Scoped to one mounted shell; dropping it is the teardown.
#[derive(Debug, Default)]
pub struct SearchInputSync {
    synced: Option<Option<String>>,
}

impl SearchInputSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value to write into the input when `q` differs from the
    /// last reconciled value, or `None` to leave in-progress typing alone.
    pub fn reconcile(&mut self, q: Option<&str>) -> Option<String> {
        let next = q.map(str::to_string);
        if self.synced.as_ref() == Some(&next) {
            return None;
        }
        let value = next.clone().unwrap_or_default();
        self.synced = Some(next);
        Some(value)
    }
}
