//! Chart header with the selected company and the Y-axis unit.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Section title
    pub title: String,
    /// Name of the company being charted; empty before the first selection
    #[props(default = String::new())]
    pub company: String,
    /// Y-axis unit explanation (e.g., "US Dollars (USD)")
    #[props(default = String::new())]
    pub unit_description: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.company.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #228BE6;",
                    "{props.company}"
                }
            } else {
                p {
                    style: "margin: 0; font-size: 13px; color: #999;",
                    "Click a row to chart a company"
                }
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Y-axis: {props.unit_description}"
                }
            }
        }
    }
}
