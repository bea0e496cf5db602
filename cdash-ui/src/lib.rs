//! Shared Dioxus components and D3.js bridge for the company dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js bar chart via `js_sys::eval()`
//! - `state`: `DashboardState`, the store plus a Signal mirror of its snapshot
//! - `dom`: element measurement, window resize listener, DOM row virtualizer
//! - `components`: the company table, the bar chart, and their building blocks

pub mod components;
pub mod dom;
pub mod js_bridge;
pub mod state;
