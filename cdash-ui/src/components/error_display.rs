//! Startup error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// What the user can still do
    #[props(default = String::new())]
    pub hint: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF5F5; color: #C92A2A; border-radius: 4px; border: 1px solid #FFC9C9;",
            strong { "Error: " }
            "{props.message}"
            if !props.hint.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #862E2E;",
                    "{props.hint}"
                }
            }
        }
    }
}
