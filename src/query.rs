//! Query State
//!
//! The "fetch → local state → render" lifecycle shared by the screens:
//! a tri-state for rendering, request tickets to drop stale responses, and a
//! small keyed cache with scope-wide invalidation.

use std::collections::HashMap;

/// What a data-backed view should render
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> LoadState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Same branch without the payload, for render switches that should
    /// not rebuild when only the data changes
    pub fn phase(&self) -> LoadState<()> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Failed(message) => LoadState::Failed(message.clone()),
            Self::Loaded(_) => LoadState::Loaded(()),
        }
    }
}

/// Identity of one fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Hands out tickets; only the most recent one is current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    scope: &'static str,
    variant: String,
}

impl QueryKey {
    pub fn new(scope: &'static str, variant: impl ToString) -> Self {
        Self {
            scope,
            variant: variant.to_string(),
        }
    }
}

/// Response cache keyed by query
#[derive(Debug, Clone)]
pub struct QueryCache<V> {
    entries: HashMap<QueryKey, V>,
    version: u64,
}

impl<V> Default for QueryCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            version: 0,
        }
    }
}

impl<V> QueryCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryKey) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: QueryKey, value: V) {
        self.entries.insert(key, value);
    }

    /// Drop every entry in `scope`. Returns how many were dropped.
    pub fn invalidate_scope(&mut self, scope: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.scope != scope);
        self.version += 1;
        before - self.entries.len()
    }

    /// Bumped on every invalidation
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// View state of a cached query that keeps the previous data on screen
/// while the next one loads.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    data: Option<T>,
    error: Option<String>,
    fetching: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            fetching: false,
        }
    }
}

impl<T> QueryState<T> {
    /// A fetch started. `cached` replaces the shown data when present.
    pub fn start(&mut self, cached: Option<T>) {
        if cached.is_some() {
            self.data = cached;
        }
        self.error = None;
        self.fetching = true;
    }

    pub fn resolve(&mut self, value: T) {
        self.data = Some(value);
        self.error = None;
        self.fetching = false;
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.fetching = false;
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Error first, then data, otherwise still loading
    pub fn view(&self) -> LoadState<&T> {
        match (&self.error, &self.data) {
            (Some(message), _) => LoadState::Failed(message.clone()),
            (None, Some(data)) => LoadState::Loaded(data),
            (None, None) => LoadState::Loading,
        }
    }
}
