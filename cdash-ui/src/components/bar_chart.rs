//! Bar chart of the selected company's capital, profit and turnover.

use super::{ChartContainer, ChartHeader};
use crate::js_bridge;
use crate::state::DashboardState;
use cdash_data::chart::{self, ChartDimensions};
use dioxus::prelude::*;

/// DOM id of the measured chart wrapper.
pub const CHART_CONTAINER_ID: &str = "company-chart-container";
/// DOM id D3 renders into.
pub const CHART_ID: &str = "company-chart";

#[derive(Props, Clone, PartialEq)]
pub struct BarChartProps {
    #[props(default = 360)]
    pub min_height: u32,
}

/// Re-renders whenever the selection or the measured size changes.
#[component]
pub fn BarChart(props: BarChartProps) -> Element {
    let state = use_context::<DashboardState>();
    let mut dimensions: Signal<Option<ChartDimensions>> = use_signal(|| None);

    use_effect(move || {
        let Some(dims) = dimensions() else {
            return;
        };
        let snapshot = (state.snapshot)();
        let selected = snapshot.selected_record.as_ref();
        let series = chart::derive_series(selected);
        let (data_json, config_json) = chart::bar_chart_payload(&series, dims, selected);
        js_bridge::render_bar_chart(CHART_ID, &data_json, &config_json);
    });

    use_drop(|| js_bridge::destroy_chart(CHART_ID));

    let company = (state.snapshot)()
        .selected_record
        .as_ref()
        .map(|r| r.company_name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%;",
            ChartHeader {
                title: "Company Financials".to_string(),
                company: company,
                unit_description: "US Dollars (USD)".to_string(),
            }
            div {
                style: "flex: 1;",
                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    chart_id: CHART_ID.to_string(),
                    min_height: props.min_height,
                    on_resize: move |dims: ChartDimensions| {
                        if dimensions.peek().as_ref() != Some(&dims) {
                            dimensions.set(Some(dims));
                        }
                    },
                }
            }
        }
    }
}
