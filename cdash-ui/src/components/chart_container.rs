//! Measured container the D3 bar chart renders into.

use crate::dom::{self, ResizeListener};
use cdash_data::chart::ChartDimensions;
use dioxus::prelude::*;
use std::rc::Rc;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id of the measured wrapper
    pub id: String,
    /// DOM id D3 renders into
    pub chart_id: String,
    /// Minimum height in pixels
    #[props(default = 360)]
    pub min_height: u32,
    /// Called with the wrapper's size on mount and on every window resize
    pub on_resize: EventHandler<ChartDimensions>,
}

fn report_size(id: &str, on_resize: EventHandler<ChartDimensions>) {
    match dom::measure(id).and_then(|(w, h)| ChartDimensions::measured(w, h)) {
        Some(dims) => on_resize.call(dims),
        None => log::debug!("[CDash] chart_container: {} has no size yet", id),
    }
}

/// Fills its parent and reports its size so the chart can follow layout.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let on_resize = props.on_resize;
    let measured_id = props.id.clone();

    use_hook(move || Rc::new(ResizeListener::attach(move || report_size(&measured_id, on_resize))));

    let mount_id = props.id.clone();
    let style = format!(
        "min-height: {}px; height: 100%; width: 100%; position: relative;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
            onmounted: move |_| report_size(&mount_id, on_resize),
            div {
                id: "{props.chart_id}",
                style: "position: absolute; inset: 0;",
            }
        }
    }
}
