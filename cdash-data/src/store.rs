//! Global application store.
//!
//! State is an immutable [`AppState`] snapshot. Every [`Action`] goes through
//! the pure [`reduce`] function to produce the next snapshot, which is then
//! pushed to all subscribers before [`Store::dispatch`] returns.
//!
//! # Architecture
//!
//! - `Rc<RefCell<_>>` wrapper for interior mutability in single-threaded WASM
//! - Snapshots are `Rc<AppState>` and the collections inside are `Rc<Vec<_>>`,
//!   so a selection change never copies the record list
//! - Listeners run outside the `RefCell` borrow, so a listener may dispatch

use crate::columns::ColumnDescriptor;
use crate::record::Record;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Snapshot of everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub records: Rc<Vec<Record>>,
    pub column_config: Rc<Vec<ColumnDescriptor>>,
    /// `None` until the first selection.
    pub selected_record: Option<Record>,
}

/// The closed set of state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append descriptors to `column_config`. Dispatching twice duplicates
    /// every column, so startup goes through [`Store::initialize`].
    LoadColumns(Vec<ColumnDescriptor>),
    /// Append records to `records`.
    LoadRecords(Vec<Record>),
    /// Replace the current selection.
    SelectRecord(Record),
}

/// Apply `action` to `state`, producing the next snapshot.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::LoadColumns(columns) => AppState {
            column_config: Rc::new(append(&state.column_config, columns)),
            ..state.clone()
        },
        Action::LoadRecords(records) => AppState {
            records: Rc::new(append(&state.records, records)),
            ..state.clone()
        },
        Action::SelectRecord(record) => AppState {
            selected_record: Some(record),
            ..state.clone()
        },
    }
}

fn append<T: Clone>(existing: &[T], more: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(existing.len() + more.len());
    out.extend_from_slice(existing);
    out.extend(more);
    out
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&Rc<AppState>)>;

struct Inner {
    state: Rc<AppState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
    initialized: bool,
}

/// Process-wide state container.
///
/// Cheaply cloneable (via `Rc`); clones share the same state and listeners.
#[derive(Clone)]
pub struct Store {
    inner: Rc<RefCell<Inner>>,
}

impl Store {
    /// Create a store holding an empty [`AppState`].
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: Rc::new(AppState::default()),
                listeners: Vec::new(),
                next_id: 0,
                initialized: false,
            })),
        }
    }

    /// Current snapshot.
    pub fn get_state(&self) -> Rc<AppState> {
        self.inner.borrow().state.clone()
    }

    /// Reduce `action` into a new snapshot and notify every subscriber
    /// synchronously.
    pub fn dispatch(&self, action: Action) {
        let (state, listeners) = {
            let mut inner = self.inner.borrow_mut();
            if matches!(action, Action::LoadColumns(_)) && !inner.state.column_config.is_empty() {
                log::warn!(
                    "[CDash] store: LoadColumns dispatched with {} columns already loaded; entries will duplicate",
                    inner.state.column_config.len()
                );
            }
            let next = Rc::new(reduce(&inner.state, action));
            inner.state = next.clone();
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (next, listeners)
        };

        for listener in listeners {
            listener(&state);
        }
    }

    /// Register `listener`; it is called with every new snapshot.
    pub fn subscribe(&self, listener: impl Fn(&Rc<AppState>) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(sid, _)| *sid != id);
        inner.listeners.len() != before
    }

    /// Startup sequence: load columns, load records, select the first record.
    ///
    /// Runs once per store; later calls (re-mount, hot reload) are ignored
    /// and return false.
    pub fn initialize(&self, columns: Vec<ColumnDescriptor>, records: Vec<Record>) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.initialized {
                log::warn!("[CDash] store: initialize called twice; ignoring");
                return false;
            }
            inner.initialized = true;
        }

        let first = records.first().cloned();
        self.dispatch(Action::LoadColumns(columns));
        self.dispatch(Action::LoadRecords(records));
        if let Some(record) = first {
            self.dispatch(Action::SelectRecord(record));
        }
        let state = self.get_state();
        log::info!(
            "[CDash] store: Initialized with {} columns, {} records",
            state.column_config.len(),
            state.records.len()
        );
        true
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("records", &inner.state.records.len())
            .field("columns", &inner.state.column_config.len())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{sample_record, RecordField};
    use std::cell::Cell;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new(RecordField::CompanyName, "Company Name", Some(150)),
            ColumnDescriptor::new(RecordField::Turnover, "Turnover", None),
        ]
    }

    #[test]
    fn store_starts_empty() {
        let store = Store::new();
        let state = store.get_state();
        assert!(state.records.is_empty());
        assert!(state.column_config.is_empty());
        assert!(state.selected_record.is_none());
    }

    #[test]
    fn load_records_appends_in_dispatch_order() {
        let store = Store::new();
        let batch = vec![sample_record("r1", 100), sample_record("r2", 200)];
        store.dispatch(Action::LoadRecords(batch.clone()));
        store.dispatch(Action::LoadRecords(batch.clone()));

        let state = store.get_state();
        assert_eq!(state.records.len(), 4);
        let names: Vec<&str> = state.records.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(names, ["r1", "r2", "r1", "r2"]);
    }

    #[test]
    fn load_columns_appends() {
        let store = Store::new();
        store.dispatch(Action::LoadColumns(columns()));
        store.dispatch(Action::LoadColumns(columns()));
        assert_eq!(store.get_state().column_config.len(), 4);
    }

    #[test]
    fn select_record_replaces_selection() {
        let store = Store::new();
        let first = sample_record("first", 100);
        let second = sample_record("second", 200);

        store.dispatch(Action::SelectRecord(first.clone()));
        assert_eq!(store.get_state().selected_record.as_ref(), Some(&first));

        store.dispatch(Action::SelectRecord(second.clone()));
        assert_eq!(store.get_state().selected_record.as_ref(), Some(&second));

        store.dispatch(Action::SelectRecord(first.clone()));
        assert_eq!(store.get_state().selected_record.as_ref(), Some(&first));
    }

    #[test]
    fn reduce_leaves_previous_snapshot_untouched() {
        let before = AppState::default();
        let after = reduce(&before, Action::LoadRecords(vec![sample_record("a", 1)]));
        assert!(before.records.is_empty());
        assert_eq!(after.records.len(), 1);
    }

    #[test]
    fn select_shares_record_list() {
        let state = reduce(
            &AppState::default(),
            Action::LoadRecords(vec![sample_record("a", 1)]),
        );
        let selected = reduce(&state, Action::SelectRecord(sample_record("a", 1)));
        assert!(Rc::ptr_eq(&state.records, &selected.records));
    }

    #[test]
    fn listeners_see_new_state_before_dispatch_returns() {
        let store = Store::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in = seen.clone();
        store.subscribe(move |state| {
            let name = state
                .selected_record
                .as_ref()
                .map(|r| r.company_name.clone());
            seen_in.borrow_mut().push(name);
        });

        store.dispatch(Action::SelectRecord(sample_record("x", 1)));
        assert_eq!(*seen.borrow(), vec![Some("x".to_string())]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = Store::new();
        let calls = Rc::new(Cell::new(0));
        let calls_in = calls.clone();
        let id = store.subscribe(move |_| calls_in.set(calls_in.get() + 1));

        store.dispatch(Action::SelectRecord(sample_record("a", 1)));
        assert!(store.unsubscribe(id));
        store.dispatch(Action::SelectRecord(sample_record("b", 1)));

        assert_eq!(calls.get(), 1);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn listener_may_dispatch() {
        let store = Store::new();
        let inner_store = store.clone();
        store.subscribe(move |state| {
            if state.selected_record.is_none() && !state.records.is_empty() {
                inner_store.dispatch(Action::SelectRecord(state.records[0].clone()));
            }
        });

        store.dispatch(Action::LoadRecords(vec![sample_record("only", 1)]));
        let state = store.get_state();
        assert_eq!(
            state.selected_record.as_ref().map(|r| r.company_name.as_str()),
            Some("only")
        );
    }

    #[test]
    fn initialize_selects_first_record_once() {
        let store = Store::new();
        let records = vec![sample_record("a", 1), sample_record("b", 2)];

        assert!(store.initialize(columns(), records.clone()));
        assert!(!store.initialize(columns(), records));

        let state = store.get_state();
        assert_eq!(state.column_config.len(), 2);
        assert_eq!(state.records.len(), 2);
        assert_eq!(
            state.selected_record.as_ref().map(|r| r.company_name.as_str()),
            Some("a")
        );
    }

    #[test]
    fn initialize_with_no_records_leaves_selection_empty() {
        let store = Store::new();
        store.initialize(columns(), Vec::new());
        assert!(store.get_state().selected_record.is_none());
    }

    #[test]
    fn clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        store.dispatch(Action::LoadRecords(vec![sample_record("a", 1)]));
        assert_eq!(other.get_state().records.len(), 1);
        assert_eq!(store, other);
        assert_ne!(store, Store::new());
    }
}
