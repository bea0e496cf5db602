//! Company Data Dashboard
//!
//! A virtualized table of synthetic companies next to a bar chart of the
//! selected company's raised capital, net profit and turnover.
//!
//! Data flow:
//! 1. On mount, the embedded column CSV is parsed and `RECORD_COUNT` records
//!    are generated.
//! 2. `Store::initialize` loads both and selects the first record.
//! 3. Clicking a table row dispatches `SelectRecord`; the store pushes the
//!    new snapshot to the `DashboardState` signal before the click handler
//!    returns.
//! 4. The table re-renders its highlight and the chart re-renders through
//!    `renderBarChart()` in D3.js.

use cdash_data::{columns, generator};
use cdash_ui::components::{BarChart, CompanyTable, ErrorDisplay};
use cdash_ui::js_bridge;
use cdash_ui::state::DashboardState;
use dioxus::prelude::*;

/// Records generated at startup.
const RECORD_COUNT: usize = generator::DEFAULT_RECORD_COUNT;

/// D3.js v7, loaded from CDN; the chart bridge waits for it.
const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(DashboardState::new);

    // Populate the store once on mount
    use_effect(move || {
        js_bridge::load_script(D3_SRC);
        js_bridge::init_charts();

        match columns::default_columns() {
            Ok(columns) => {
                let records = generator::generate(RECORD_COUNT);
                state.initialize(columns, records);
            }
            Err(e) => {
                log::error!("Failed to load column config: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load table columns: {}", e)));
            }
        }
    });

    rsx! {
        document::Title { "Company Data" }

        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 {
                style: "margin: 0 0 12px 0; font-size: 24px;",
                "Company Data"
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay {
                    message: err,
                    hint: "Reload the page; the table cannot be shown without its columns.".to_string(),
                }
            } else {
                div {
                    style: "display: flex; gap: 16px; align-items: stretch;",
                    div {
                        style: "flex: 0 0 35%; min-width: 280px;",
                        BarChart {}
                    }
                    div {
                        style: "flex: 1; min-width: 0;",
                        CompanyTable {}
                    }
                }
            }
        }
    }
}
