//! Application state managed via Dioxus context.
//!
//! `DashboardState` pairs the [`Store`] with a `Signal` mirror of its current
//! snapshot. The mirror is updated from a store subscription, so it changes
//! synchronously inside `dispatch` and every component reading it re-renders.
//! Child components retrieve it with `use_context::<DashboardState>()`.

use cdash_data::store::{Action, AppState, Store};
use cdash_data::{ColumnDescriptor, Record};
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared state for the dashboard.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// The store; dispatch through [`DashboardState::dispatch`]
    pub store: Signal<Store>,
    /// Latest store snapshot
    pub snapshot: Signal<Rc<AppState>>,
    /// Error message if startup went wrong
    pub error_msg: Signal<Option<String>>,
}

impl DashboardState {
    /// Create an empty store and subscribe the snapshot signal to it.
    pub fn new() -> Self {
        let store = Store::new();
        let snapshot = Signal::new(store.get_state());
        store.subscribe(move |state| {
            let mut snapshot = snapshot;
            snapshot.set(state.clone());
        });

        Self {
            store: Signal::new(store),
            snapshot,
            error_msg: Signal::new(None),
        }
    }

    pub fn dispatch(&self, action: Action) {
        let store = self.store.peek().clone();
        store.dispatch(action);
    }

    /// Run the store's one-time startup sequence.
    pub fn initialize(&self, columns: Vec<ColumnDescriptor>, records: Vec<Record>) -> bool {
        let store = self.store.peek().clone();
        store.initialize(columns, records)
    }

    pub fn select(&self, record: Record) {
        self.dispatch(Action::SelectRecord(record));
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
