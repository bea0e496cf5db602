//! Reusable Dioxus RSX components for the company dashboard.

mod bar_chart;
mod chart_container;
mod chart_header;
mod company_table;
mod error_display;
mod loading_spinner;

pub use bar_chart::{BarChart, CHART_CONTAINER_ID, CHART_ID};
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use company_table::{CompanyTable, TABLE_BODY_ID};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
