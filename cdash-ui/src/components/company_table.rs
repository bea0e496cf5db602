//! Virtualized, sortable company table.
//!
//! Only the rows inside the current [`VirtualWindow`] and the unpinned
//! columns inside the current [`ColumnLayout`] are in the DOM; spacer divs
//! keep both scrollbars the size of the full table. Pinned columns stick to
//! the left edge, and header edges can be dragged to resize a column.
//! Clicking a row dispatches `SelectRecord`. Changing the sort or the search
//! scrolls back to the first row.

use super::LoadingSpinner;
use crate::dom::{self, DomVirtualizer, ResizeListener};
use crate::state::DashboardState;
use cdash_data::table::{
    self, ColumnLayout, ColumnPinning, ColumnResize, ColumnSizing, ColumnSlot, FilterMode,
    LoadingLatch, SortState, TableConfig, VirtualWindow,
};
use cdash_data::{ColumnDescriptor, Record, RecordField};
use dioxus::prelude::*;
use std::rc::Rc;

/// DOM id of the scrolling table body.
pub const TABLE_BODY_ID: &str = "company-table-body";

const HEADER_BACKGROUND: &str = "#F8F9FA";
const SELECTED_BACKGROUND: &str = "#E7F5FF";
const ROW_BACKGROUND: &str = "#FFFFFF";

#[derive(Props, Clone, PartialEq)]
pub struct CompanyTableProps {
    #[props(default)]
    pub config: TableConfig,
}

fn cell_style(width: u32) -> String {
    format!(
        "flex: 0 0 {width}px; width: {width}px; padding: 4px 8px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; box-sizing: border-box;"
    )
}

/// Cell style for a column slot; pinned slots stick at their left offset.
fn slot_style(slot: &ColumnSlot, background: &str, z_index: u32) -> String {
    match slot.sticky_left {
        Some(left) => format!(
            "{} position: sticky; left: {left}px; z-index: {z_index}; background: {background}; border-right: 1px solid #DEE2E6;",
            cell_style(slot.width)
        ),
        None => cell_style(slot.width),
    }
}

/// The row-number column is always stuck to the left edge.
fn row_number_style(width: u32, background: &str, z_index: u32) -> String {
    format!(
        "{} position: sticky; left: 0; z-index: {z_index}; background: {background}; color: #868E96;",
        cell_style(width)
    )
}

fn spacer_style(width: u32) -> String {
    format!("flex: 0 0 {width}px; width: {width}px;")
}

#[component]
pub fn CompanyTable(props: CompanyTableProps) -> Element {
    let state = use_context::<DashboardState>();
    let config = props.config;

    let mut sort = use_signal(|| None::<SortState>);
    let mut filter = use_signal(String::new);
    let mut filter_mode = use_signal(FilterMode::default);
    let mut scroll = use_signal(|| (0.0_f64, 0.0_f64));
    let viewport = use_signal(|| (0.0_f64, 0.0_f64));
    let mut latch = use_signal(LoadingLatch::new);
    let mut sizing = use_signal(ColumnSizing::default);
    let mut pinning = use_signal(ColumnPinning::default);
    let mut resizing = use_signal(|| None::<ColumnResize>);

    // Loading clears the first time records are present, then stays clear.
    use_effect(move || {
        let count = (state.snapshot)().records.len();
        let mut next = *latch.peek();
        if next.is_loading() && !next.observe(count) {
            latch.set(next);
        }
    });

    let order = use_memo(move || {
        let snapshot = (state.snapshot)();
        Rc::new(table::row_order(
            &snapshot.records,
            &snapshot.column_config,
            sort(),
            &filter(),
            filter_mode(),
        ))
    });

    // A new sort or search starts again at the first row.
    use_effect(move || {
        let _ = (sort(), filter(), filter_mode());
        let virtualizer = DomVirtualizer {
            body_id: TABLE_BODY_ID,
            row_height: config.row_height,
            row_count: order.peek().len(),
        };
        if table::reset_scroll(Some(&virtualizer)) {
            let left = scroll.peek().0;
            scroll.set((left, 0.0));
        }
    });

    let measure_viewport = move || {
        if let Some(size) = dom::measure(TABLE_BODY_ID) {
            let mut viewport = viewport;
            viewport.set(size);
        }
    };
    use_hook(move || Rc::new(ResizeListener::attach(measure_viewport)));

    let snapshot = (state.snapshot)();
    let columns = snapshot.column_config.clone();
    let rows = order();
    let (viewport_width, viewport_height) = viewport();
    let (scroll_left, scroll_top) = scroll();
    let window = VirtualWindow::compute(
        rows.len(),
        config.row_height,
        viewport_height,
        scroll_top,
        config.overscan,
    );
    let layout = Rc::new(ColumnLayout::compute(
        &columns,
        &sizing.read(),
        &pinning.read(),
        &config,
        viewport_width,
        scroll_left,
    ));
    let current_sort = sort();
    let current_mode = filter_mode();
    let filter_text = filter();
    let shown = rows.len();
    let total = snapshot.records.len();
    let total_width = layout.total_width;
    let number_header_style = row_number_style(config.row_number_width, HEADER_BACKGROUND, 3);
    let left_spacer = spacer_style(layout.padding_left);
    let right_spacer = spacer_style(layout.padding_right);
    let body_cursor = if resizing().is_some() { "col-resize" } else { "auto" };

    let header_cell = {
        let columns = columns.clone();
        move |slot: &ColumnSlot| {
            let column = columns[slot.column].clone();
            let field = column.key;
            let width = slot.width;
            rsx! {
                HeaderCell {
                    key: "{field}",
                    column: column,
                    style: slot_style(slot, HEADER_BACKGROUND, 3),
                    pinned: slot.sticky_left.is_some(),
                    indicator: sort_indicator(current_sort, field),
                    on_sort: move |field: RecordField| {
                        let next = SortState::cycle(*sort.peek(), field);
                        sort.set(next);
                    },
                    on_pin: move |field: RecordField| {
                        pinning.write().toggle(field);
                    },
                    on_resize_start: move |x: f64| {
                        resizing.set(Some(ColumnResize {
                            field,
                            start_x: x,
                            start_width: width,
                        }));
                    },
                }
            }
        }
    };
    let pinned_headers = layout.pinned.iter().map(header_cell.clone());
    let scrolling_headers = layout.scrolling.iter().map(header_cell);

    let visible_rows = window.range().map(|pos| {
        let index = rows[pos];
        let record = snapshot.records[index].clone();
        let selected = snapshot.selected_record.as_ref() == Some(&record);
        rsx! {
            TableRow {
                key: "{index}",
                record: record,
                row_number: pos + 1,
                selected: selected,
                columns: columns.clone(),
                layout: layout.clone(),
                config: config,
            }
        }
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; border: 1px solid #DEE2E6; border-radius: 4px; font-size: 12px;",

            // Top toolbar: global filter and its match mode
            div {
                style: "padding: 6px 8px; border-bottom: 1px solid #DEE2E6; display: flex; gap: 8px; align-items: center;",
                input {
                    r#type: "search",
                    placeholder: "Search all columns",
                    value: "{filter_text}",
                    style: "flex: 1; max-width: 320px; padding: 4px 8px;",
                    oninput: move |evt: Event<FormData>| filter.set(evt.value()),
                }
                select {
                    title: "Search mode",
                    style: "padding: 4px;",
                    onchange: move |evt: Event<FormData>| match evt.value().parse::<FilterMode>() {
                        Ok(mode) => filter_mode.set(mode),
                        Err(e) => log::warn!("[CDash] company_table: {}", e),
                    },
                    for mode in FilterMode::ALL {
                        option {
                            key: "{mode}",
                            value: "{mode}",
                            selected: mode == current_mode,
                            {mode.label()}
                        }
                    }
                }
            }

            if latch().is_loading() {
                LoadingSpinner {}
            } else {
                div {
                    id: TABLE_BODY_ID,
                    style: "height: calc(100vh - 210px); overflow: auto; position: relative; cursor: {body_cursor};",
                    onmounted: move |_| measure_viewport(),
                    onscroll: move |_| {
                        if let Some(position) = dom::scroll_position(TABLE_BODY_ID) {
                            scroll.set(position);
                        }
                    },
                    onmousemove: move |evt: MouseEvent| {
                        let drag = *resizing.peek();
                        if let Some(drag) = drag {
                            let width = drag.width_at(evt.client_coordinates().x);
                            sizing.write().set(drag.field, width);
                        }
                    },
                    onmouseup: move |_| {
                        if resizing.peek().is_some() {
                            resizing.set(None);
                        }
                    },
                    onmouseleave: move |_| {
                        if resizing.peek().is_some() {
                            resizing.set(None);
                        }
                    },

                    // Header (sticky)
                    div {
                        style: "display: flex; position: sticky; top: 0; z-index: 2; background: {HEADER_BACKGROUND}; font-weight: bold; border-bottom: 1px solid #DEE2E6; width: {total_width}px;",
                        div { style: "{number_header_style}", "#" }
                        {pinned_headers}
                        div { style: "{left_spacer}" }
                        {scrolling_headers}
                        div { style: "{right_spacer}" }
                    }

                    div { style: "height: {window.padding_top}px;" }
                    {visible_rows}
                    div { style: "height: {window.padding_bottom}px;" }
                }
            }

            // Bottom toolbar: row counts
            div {
                style: "padding: 4px 8px; border-top: 1px solid #DEE2E6; color: #868E96;",
                "Showing {shown} of {total} rows"
            }
        }
    }
}

/// Arrow for the column currently sorted, empty otherwise.
fn sort_indicator(sort: Option<SortState>, field: RecordField) -> &'static str {
    sort.filter(|s| s.field == field)
        .map(|s| s.indicator())
        .unwrap_or("")
}

#[derive(Props, Clone, PartialEq)]
struct HeaderCellProps {
    column: ColumnDescriptor,
    style: String,
    pinned: bool,
    indicator: &'static str,
    on_sort: EventHandler<RecordField>,
    on_pin: EventHandler<RecordField>,
    /// Called with the pointer x when a resize drag starts.
    on_resize_start: EventHandler<f64>,
}

#[component]
fn HeaderCell(props: HeaderCellProps) -> Element {
    let field = props.column.key;
    let indicator = props.indicator;
    let on_sort = props.on_sort;
    let on_pin = props.on_pin;
    let on_resize_start = props.on_resize_start;
    let style = format!("{} display: flex; align-items: center; gap: 4px; position: relative;", props.style);
    let (pin_label, pin_title) = if props.pinned {
        ("\u{2715}", "Unpin column")
    } else {
        ("\u{1F4CC}", "Pin column to the left")
    };

    rsx! {
        div {
            style: "{style}",
            span {
                style: "flex: 1; overflow: hidden; text-overflow: ellipsis; cursor: pointer; user-select: none;",
                title: "Sort by {props.column.header}",
                onclick: move |_| on_sort.call(field),
                "{props.column.header}{indicator}"
            }
            button {
                style: "border: none; background: none; padding: 0; cursor: pointer; font-size: 10px;",
                title: "{pin_title}",
                onclick: move |_| on_pin.call(field),
                "{pin_label}"
            }
            div {
                style: "position: absolute; top: 0; right: 0; width: 5px; height: 100%; cursor: col-resize;",
                title: "Drag to resize",
                onmousedown: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_resize_start.call(evt.client_coordinates().x);
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TableRowProps {
    record: Record,
    row_number: usize,
    selected: bool,
    columns: Rc<Vec<ColumnDescriptor>>,
    layout: Rc<ColumnLayout>,
    config: TableConfig,
}

#[component]
fn TableRow(props: TableRowProps) -> Element {
    let state = use_context::<DashboardState>();
    let record = props.record.clone();
    let background = if props.selected { SELECTED_BACKGROUND } else { ROW_BACKGROUND };
    let height = props.config.row_height;
    let total_width = props.layout.total_width;
    let number_style = row_number_style(props.config.row_number_width, background, 1);
    let left_spacer = spacer_style(props.layout.padding_left);
    let right_spacer = spacer_style(props.layout.padding_right);

    let cell = |slot: &ColumnSlot| {
        let field = props.columns[slot.column].key;
        rsx! {
            div {
                key: "{field}",
                style: slot_style(slot, background, 1),
                {field.display(&props.record)}
            }
        }
    };
    let pinned_cells = props.layout.pinned.iter().map(cell);
    let scrolling_cells = props.layout.scrolling.iter().map(cell);

    rsx! {
        div {
            style: "display: flex; width: {total_width}px; height: {height}px; line-height: {height}px; cursor: pointer; background: {background}; border-bottom: 1px solid #F1F3F5;",
            onclick: move |_| state.select(record.clone()),
            div {
                style: "{number_style}",
                "{props.row_number}"
            }
            {pinned_cells}
            div { style: "{left_spacer}" }
            {scrolling_cells}
            div { style: "{right_spacer}" }
        }
    }
}
