//! Core of the company data dashboard.
//!
//! Everything here is plain Rust with no DOM access, so it builds and tests
//! natively as well as for `wasm32-unknown-unknown`.
//!
//! # Pipeline
//!
//! ```text
//! generator ──► Store ──► table (row order, virtual window)
//!                 ▲                │ row click
//!                 └── SelectRecord ┘
//!                 │
//!                 └──► chart (series from the selected record)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use cdash_data::{chart, columns, generator, store::{Action, Store}};
//!
//! let store = Store::new();
//! store.initialize(columns::default_columns().unwrap(), generator::generate(3));
//!
//! let second = store.get_state().records[1].clone();
//! store.dispatch(Action::SelectRecord(second.clone()));
//!
//! let state = store.get_state();
//! let series = chart::derive_series(state.selected_record.as_ref());
//! assert_eq!(series.capital, second.raised_capital.amount());
//! ```

pub mod chart;
pub mod columns;
pub mod error;
mod faker;
pub mod generator;
pub mod money;
pub mod percent;
pub mod record;
pub mod store;
pub mod table;

pub use columns::ColumnDescriptor;
pub use money::Money;
pub use percent::Percent;
pub use record::{AccountStatus, Record, RecordField};
pub use store::{Action, AppState, Store};
