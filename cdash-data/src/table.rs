//! Table view model: sorting, global filter modes, column sizing and
//! pinning, and row and column virtualization.
//!
//! Everything here is DOM-free; the Dioxus table component feeds it scroll
//! offsets and measured sizes and renders whatever window it returns.

use crate::columns::ColumnDescriptor;
use crate::error::ScrollError;
use crate::record::{Record, RecordField};
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Narrowest a column can be dragged to.
pub const MIN_COLUMN_WIDTH: u32 = 40;
/// Widest a column can be dragged to.
pub const MAX_COLUMN_WIDTH: u32 = 2000;

/// Layout constants for the company table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Row height in pixels (compact density).
    pub row_height: f64,
    /// Extra rows rendered above and below the viewport.
    pub overscan: usize,
    /// Width for columns without a preferred size.
    pub default_column_width: u32,
    /// Width of the leading row-number column.
    pub row_number_width: u32,
    /// Extra unpinned columns rendered left and right of the viewport.
    pub column_overscan: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_height: 28.0,
            overscan: 5,
            default_column_width: 180,
            row_number_width: 50,
            column_overscan: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active client-side sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: RecordField,
    pub direction: SortDirection,
}

impl SortState {
    /// Sort after a click on `field`'s header.
    ///
    /// A new column starts ascending; the same column goes
    /// ascending → descending → unsorted.
    pub fn cycle(current: Option<SortState>, field: RecordField) -> Option<SortState> {
        match current {
            Some(SortState {
                field: f,
                direction: SortDirection::Ascending,
            }) if f == field => Some(SortState {
                field,
                direction: SortDirection::Descending,
            }),
            Some(SortState {
                field: f,
                direction: SortDirection::Descending,
            }) if f == field => None,
            _ => Some(SortState {
                field,
                direction: SortDirection::Ascending,
            }),
        }
    }

    /// Header suffix for the sorted column.
    pub fn indicator(&self) -> &'static str {
        match self.direction {
            SortDirection::Ascending => " \u{25B2}",
            SortDirection::Descending => " \u{25BC}",
        }
    }
}

/// How the global search matches a cell's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every needle character appears in order, gaps allowed.
    #[default]
    Fuzzy,
    Contains,
    StartsWith,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::Fuzzy, FilterMode::Contains, FilterMode::StartsWith];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Fuzzy => "fuzzy",
            FilterMode::Contains => "contains",
            FilterMode::StartsWith => "startsWith",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::Fuzzy => "Fuzzy",
            FilterMode::Contains => "Contains",
            FilterMode::StartsWith => "Starts With",
        }
    }

    /// Both arguments are expected lowercased already.
    pub fn matches(&self, text: &str, needle: &str) -> bool {
        match self {
            FilterMode::Fuzzy => {
                let mut rest = text.chars();
                needle.chars().all(|n| rest.any(|c| c == n))
            }
            FilterMode::Contains => text.contains(needle),
            FilterMode::StartsWith => text.starts_with(needle),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown filter mode: {}", s))
    }
}

/// Indices into `records` for the rows to display, in display order.
///
/// Rows are kept when any configured column's text matches `filter` under
/// `mode` (case-insensitive), then stably sorted by `sort`.
pub fn row_order(
    records: &[Record],
    columns: &[ColumnDescriptor],
    sort: Option<SortState>,
    filter: &str,
    mode: FilterMode,
) -> Vec<usize> {
    let needle = filter.trim().to_lowercase();
    let mut order: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            needle.is_empty()
                || columns
                    .iter()
                    .any(|c| mode.matches(&c.key.display(record).to_lowercase(), &needle))
        })
        .map(|(i, _)| i)
        .collect();

    if let Some(sort) = sort {
        order.sort_by(|&a, &b| {
            let ord = sort.field.compare(&records[a], &records[b]);
            match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    order
}

/// Slice of rows to render for a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualWindow {
    pub start: usize,
    /// Exclusive.
    pub end: usize,
    /// Spacer height above the rendered rows.
    pub padding_top: f64,
    /// Spacer height below the rendered rows.
    pub padding_bottom: f64,
}

impl VirtualWindow {
    pub const EMPTY: VirtualWindow = VirtualWindow {
        start: 0,
        end: 0,
        padding_top: 0.0,
        padding_bottom: 0.0,
    };

    pub fn compute(
        total: usize,
        row_height: f64,
        viewport_height: f64,
        scroll_top: f64,
        overscan: usize,
    ) -> Self {
        if total == 0 || !(row_height > 0.0) {
            return Self::EMPTY;
        }

        let scroll_top = if scroll_top.is_finite() { scroll_top.max(0.0) } else { 0.0 };
        let first_visible = ((scroll_top / row_height).floor() as usize).min(total - 1);
        let visible_count = if viewport_height.is_finite() && viewport_height > 0.0 {
            ((viewport_height / row_height).ceil() as usize).max(1)
        } else {
            1
        };

        let start = first_visible.saturating_sub(overscan);
        let end = (first_visible + visible_count + overscan).min(total);

        Self {
            start,
            end,
            padding_top: start as f64 * row_height,
            padding_bottom: (total - end) as f64 * row_height,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Column widths the user has dragged, falling back to the configured size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSizing {
    widths: HashMap<RecordField, u32>,
}

impl ColumnSizing {
    pub fn width(&self, column: &ColumnDescriptor, default_width: u32) -> u32 {
        self.widths
            .get(&column.key)
            .copied()
            .unwrap_or_else(|| column.width_or(default_width))
    }

    pub fn set(&mut self, field: RecordField, width: u32) {
        self.widths
            .insert(field, width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH));
    }
}

/// A header resize drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnResize {
    pub field: RecordField,
    /// Pointer x where the drag started.
    pub start_x: f64,
    pub start_width: u32,
}

impl ColumnResize {
    /// Column width with the pointer at `x`.
    pub fn width_at(&self, x: f64) -> u32 {
        let width = f64::from(self.start_width) + (x - self.start_x);
        if !width.is_finite() {
            return self.start_width;
        }
        width
            .round()
            .clamp(f64::from(MIN_COLUMN_WIDTH), f64::from(MAX_COLUMN_WIDTH)) as u32
    }
}

/// Columns pinned to the left edge, in the order they were pinned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPinning {
    pinned: Vec<RecordField>,
}

impl ColumnPinning {
    /// Pin or unpin `field`; returns whether it is now pinned.
    pub fn toggle(&mut self, field: RecordField) -> bool {
        if let Some(pos) = self.pinned.iter().position(|&f| f == field) {
            self.pinned.remove(pos);
            false
        } else {
            self.pinned.push(field);
            true
        }
    }

    pub fn is_pinned(&self, field: RecordField) -> bool {
        self.pinned.contains(&field)
    }
}

/// One rendered column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSlot {
    /// Index into the column config.
    pub column: usize,
    pub width: u32,
    /// Sticky left offset; set only for pinned columns.
    pub sticky_left: Option<u32>,
}

/// Horizontal layout of the table: pinned columns, then the window of
/// unpinned columns near the viewport with spacers standing in for the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    pub pinned: Vec<ColumnSlot>,
    pub scrolling: Vec<ColumnSlot>,
    pub padding_left: u32,
    pub padding_right: u32,
    /// Full row width including the row-number column.
    pub total_width: u32,
}

impl ColumnLayout {
    /// An unmeasured viewport (`viewport_width <= 0`) renders every column.
    pub fn compute(
        columns: &[ColumnDescriptor],
        sizing: &ColumnSizing,
        pinning: &ColumnPinning,
        config: &TableConfig,
        viewport_width: f64,
        scroll_left: f64,
    ) -> Self {
        let width_of = |i: usize| sizing.width(&columns[i], config.default_column_width);

        let mut pinned = Vec::new();
        let mut left = config.row_number_width;
        for field in &pinning.pinned {
            if let Some(i) = columns.iter().position(|c| c.key == *field) {
                let width = width_of(i);
                pinned.push(ColumnSlot {
                    column: i,
                    width,
                    sticky_left: Some(left),
                });
                left += width;
            }
        }
        let pinned_edge = left;

        let unpinned: Vec<ColumnSlot> = (0..columns.len())
            .filter(|&i| !pinning.is_pinned(columns[i].key))
            .map(|i| ColumnSlot {
                column: i,
                width: width_of(i),
                sticky_left: None,
            })
            .collect();
        let unpinned_total: u32 = unpinned.iter().map(|s| s.width).sum();
        let total_width = pinned_edge + unpinned_total;

        if unpinned.is_empty() {
            return Self {
                pinned,
                total_width,
                ..Self::default()
            };
        }

        let measured = viewport_width.is_finite() && viewport_width > 0.0;
        let (first, last) = if measured {
            // Unpinned content scrolls under the pinned block.
            let view_start = if scroll_left.is_finite() { scroll_left.max(0.0) } else { 0.0 };
            let view_end = view_start + (viewport_width - f64::from(pinned_edge)).max(0.0);
            let mut offset = 0.0;
            let mut first = None;
            let mut last = 0;
            for (i, slot) in unpinned.iter().enumerate() {
                let end = offset + f64::from(slot.width);
                if first.is_none() && end > view_start {
                    first = Some(i);
                }
                if offset < view_end {
                    last = i;
                }
                offset = end;
            }
            let first = first.unwrap_or(unpinned.len() - 1);
            (first, last.max(first))
        } else {
            (0, unpinned.len() - 1)
        };

        let start = first.saturating_sub(config.column_overscan);
        let end = (last + 1 + config.column_overscan).min(unpinned.len());

        Self {
            padding_left: unpinned[..start].iter().map(|s| s.width).sum(),
            padding_right: unpinned[end..].iter().map(|s| s.width).sum(),
            scrolling: unpinned[start..end].to_vec(),
            pinned,
            total_width,
        }
    }
}

/// Something that can scroll a virtualized row list.
pub trait Virtualizer {
    fn scroll_to_index(&self, index: usize) -> Result<(), ScrollError>;
}

/// Scroll back to the first row after a sort change.
///
/// Best effort: a missing or failing virtualizer is logged and ignored.
/// Returns whether the scroll happened.
pub fn reset_scroll<V: Virtualizer + ?Sized>(virtualizer: Option<&V>) -> bool {
    let Some(virtualizer) = virtualizer else {
        log::debug!("[CDash] table: No virtualizer to reset");
        return false;
    };
    match virtualizer.scroll_to_index(0) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("[CDash] table: Scroll reset failed: {}", e);
            false
        }
    }
}

/// Loading flag that clears the first time records show up and stays clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingLatch {
    loading: bool,
}

impl LoadingLatch {
    pub fn new() -> Self {
        Self { loading: true }
    }

    /// Feed the current record count; returns whether still loading.
    pub fn observe(&mut self, record_count: usize) -> bool {
        if self.loading && record_count > 0 {
            self.loading = false;
        }
        self.loading
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl Default for LoadingLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::sample_record;
    use std::cell::Cell;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new(RecordField::CompanyName, "Company Name", Some(150)),
            ColumnDescriptor::new(RecordField::RaisedCapital, "Raised Capital", Some(120)),
        ]
    }

    fn records() -> Vec<Record> {
        vec![
            sample_record("Mills Group", 5_000_000),
            sample_record("Abbott LLC", 900_000),
            sample_record("Zieme Inc", 5_000_000),
            sample_record("Kuhn - Lowe", 1_000_000),
        ]
    }

    fn contains(sort: Option<SortState>, filter: &str) -> Vec<usize> {
        row_order(&records(), &columns(), sort, filter, FilterMode::Contains)
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let field = RecordField::Turnover;
        let asc = SortState::cycle(None, field);
        assert_eq!(asc.map(|s| s.direction), Some(SortDirection::Ascending));
        let desc = SortState::cycle(asc, field);
        assert_eq!(desc.map(|s| s.direction), Some(SortDirection::Descending));
        assert_eq!(SortState::cycle(desc, field), None);
    }

    #[test]
    fn sorting_a_new_column_starts_ascending() {
        let desc = Some(SortState {
            field: RecordField::Turnover,
            direction: SortDirection::Descending,
        });
        let next = SortState::cycle(desc, RecordField::Address).unwrap();
        assert_eq!(next.field, RecordField::Address);
        assert_eq!(next.direction, SortDirection::Ascending);
    }

    #[test]
    fn unsorted_unfiltered_keeps_source_order() {
        assert_eq!(contains(None, ""), vec![0, 1, 2, 3]);
    }

    #[test]
    fn sorts_money_by_amount_and_stays_stable() {
        let asc = Some(SortState {
            field: RecordField::RaisedCapital,
            direction: SortDirection::Ascending,
        });
        assert_eq!(contains(asc, ""), vec![1, 3, 0, 2]);

        let desc = Some(SortState {
            field: RecordField::RaisedCapital,
            direction: SortDirection::Descending,
        });
        // Ties (0 and 2) keep their source order.
        assert_eq!(contains(desc, ""), vec![0, 2, 3, 1]);
    }

    #[test]
    fn filter_is_case_insensitive_across_columns() {
        assert_eq!(contains(None, "llc"), vec![1]);
        assert_eq!(contains(None, "$50,000"), vec![0, 2]);
        assert!(contains(None, "nothing like this").is_empty());
    }

    #[test]
    fn filter_only_searches_configured_columns() {
        // Email is not among the configured columns.
        assert!(contains(None, "info@").is_empty());
    }

    #[test]
    fn starts_with_anchors_at_cell_start() {
        let starts = |filter: &str| row_order(&records(), &columns(), None, filter, FilterMode::StartsWith);
        assert_eq!(starts("ab"), vec![1]);
        assert_eq!(starts("$1"), vec![3]);
        assert!(starts("llc").is_empty());
    }

    #[test]
    fn fuzzy_matches_characters_in_order() {
        let fuzzy = |filter: &str| row_order(&records(), &columns(), None, filter, FilterMode::Fuzzy);
        assert_eq!(fuzzy("mlgrp"), vec![0]);
        assert_eq!(fuzzy("zinc"), vec![2]);
        assert_eq!(fuzzy("$5000"), vec![0, 2]);
        assert!(fuzzy("cnz").is_empty());
    }

    #[test]
    fn filter_mode_keys_round_trip() {
        assert_eq!(FilterMode::default(), FilterMode::Fuzzy);
        for mode in FilterMode::ALL {
            assert_eq!(mode.to_string().parse::<FilterMode>(), Ok(mode));
        }
        assert!("equals".parse::<FilterMode>().is_err());
    }

    #[test]
    fn sizing_overrides_configured_width_within_bounds() {
        let company = ColumnDescriptor::new(RecordField::CompanyName, "Company Name", Some(150));
        let loan = ColumnDescriptor::new(RecordField::LoanAmount, "Loan Amount", None);
        let mut sizing = ColumnSizing::default();
        assert_eq!(sizing.width(&company, 180), 150);
        assert_eq!(sizing.width(&loan, 180), 180);

        sizing.set(RecordField::CompanyName, 10);
        assert_eq!(sizing.width(&company, 180), MIN_COLUMN_WIDTH);
        sizing.set(RecordField::CompanyName, 5000);
        assert_eq!(sizing.width(&company, 180), MAX_COLUMN_WIDTH);
        sizing.set(RecordField::CompanyName, 260);
        assert_eq!(sizing.width(&company, 180), 260);
    }

    #[test]
    fn resize_drag_follows_pointer() {
        let drag = ColumnResize {
            field: RecordField::Address,
            start_x: 300.0,
            start_width: 150,
        };
        assert_eq!(drag.width_at(350.0), 200);
        assert_eq!(drag.width_at(100.0), MIN_COLUMN_WIDTH);
        assert_eq!(drag.width_at(f64::NAN), 150);
    }

    #[test]
    fn pin_toggles() {
        let mut pinning = ColumnPinning::default();
        assert!(pinning.toggle(RecordField::Turnover));
        assert!(pinning.is_pinned(RecordField::Turnover));
        assert!(!pinning.toggle(RecordField::Turnover));
        assert!(!pinning.is_pinned(RecordField::Turnover));
    }

    fn ten_columns() -> Vec<ColumnDescriptor> {
        RecordField::ALL[..10]
            .iter()
            .map(|&field| ColumnDescriptor::new(field, field.key(), Some(100)))
            .collect()
    }

    fn layout(pinning: &ColumnPinning, viewport_width: f64, scroll_left: f64) -> ColumnLayout {
        ColumnLayout::compute(
            &ten_columns(),
            &ColumnSizing::default(),
            pinning,
            &TableConfig::default(),
            viewport_width,
            scroll_left,
        )
    }

    fn scrolling_indices(layout: &ColumnLayout) -> Vec<usize> {
        layout.scrolling.iter().map(|s| s.column).collect()
    }

    #[test]
    fn unmeasured_viewport_renders_every_column() {
        let l = layout(&ColumnPinning::default(), 0.0, 0.0);
        assert_eq!(scrolling_indices(&l), (0..10).collect::<Vec<_>>());
        assert_eq!((l.padding_left, l.padding_right), (0, 0));
        assert_eq!(l.total_width, 1050);
    }

    #[test]
    fn column_window_includes_two_overscan_columns() {
        let l = layout(&ColumnPinning::default(), 300.0, 0.0);
        assert_eq!(scrolling_indices(&l), vec![0, 1, 2, 3, 4]);
        assert_eq!((l.padding_left, l.padding_right), (0, 500));

        let l = layout(&ColumnPinning::default(), 300.0, 500.0);
        assert_eq!(scrolling_indices(&l), (3..10).collect::<Vec<_>>());
        assert_eq!((l.padding_left, l.padding_right), (300, 0));
        assert_eq!(l.total_width, 1050);
    }

    #[test]
    fn column_window_clamps_past_the_end() {
        let l = layout(&ColumnPinning::default(), 300.0, 10_000.0);
        assert_eq!(scrolling_indices(&l), vec![7, 8, 9]);
        assert_eq!((l.padding_left, l.padding_right), (700, 0));
    }

    #[test]
    fn pinned_columns_stick_after_row_numbers_in_pin_order() {
        let fields = ten_columns();
        let mut pinning = ColumnPinning::default();
        pinning.toggle(fields[4].key);
        pinning.toggle(fields[1].key);

        let l = layout(&pinning, 0.0, 0.0);
        assert_eq!(
            l.pinned,
            vec![
                ColumnSlot { column: 4, width: 100, sticky_left: Some(50) },
                ColumnSlot { column: 1, width: 100, sticky_left: Some(150) },
            ]
        );
        assert!(!scrolling_indices(&l).contains(&4));
        assert!(!scrolling_indices(&l).contains(&1));
        assert_eq!(l.total_width, 1050);
    }

    #[test]
    fn pinned_block_narrows_the_column_window() {
        let mut pinning = ColumnPinning::default();
        pinning.toggle(ten_columns()[2].key);

        let l = layout(&pinning, 300.0, 0.0);
        assert_eq!(scrolling_indices(&l), vec![0, 1, 3, 4]);
        assert_eq!(l.padding_right, 500);
    }

    #[test]
    fn dragged_width_flows_into_layout() {
        let columns = ten_columns();
        let mut sizing = ColumnSizing::default();
        sizing.set(columns[0].key, 300);
        let l = ColumnLayout::compute(
            &columns,
            &sizing,
            &ColumnPinning::default(),
            &TableConfig::default(),
            0.0,
            0.0,
        );
        assert_eq!(l.scrolling[0].width, 300);
        assert_eq!(l.total_width, 1250);
    }

    #[test]
    fn window_at_top_includes_overscan_below() {
        let w = VirtualWindow::compute(1000, 28.0, 280.0, 0.0, 5);
        assert_eq!(w.range(), 0..15);
        assert_eq!(w.padding_top, 0.0);
        assert_eq!(w.padding_bottom, 985.0 * 28.0);
    }

    #[test]
    fn window_in_middle_has_overscan_both_sides() {
        let w = VirtualWindow::compute(1000, 28.0, 280.0, 28.0 * 100.0, 5);
        assert_eq!(w.range(), 95..115);
        assert_eq!(w.padding_top, 95.0 * 28.0);
        assert_eq!(w.len(), 20);
    }

    #[test]
    fn window_clamps_at_the_end() {
        let w = VirtualWindow::compute(50, 28.0, 280.0, 1_000_000.0, 5);
        assert_eq!(w.end, 50);
        assert_eq!(w.start, 44);
        assert_eq!(w.padding_bottom, 0.0);
    }

    #[test]
    fn window_handles_degenerate_inputs() {
        assert!(VirtualWindow::compute(0, 28.0, 280.0, 0.0, 5).is_empty());
        assert!(VirtualWindow::compute(10, 0.0, 280.0, 0.0, 5).is_empty());
        let unmeasured = VirtualWindow::compute(10, 28.0, 0.0, -50.0, 2);
        assert_eq!(unmeasured.range(), 0..3);
    }

    struct Mounted {
        scrolled_to: Cell<Option<usize>>,
    }

    impl Virtualizer for Mounted {
        fn scroll_to_index(&self, index: usize) -> Result<(), ScrollError> {
            self.scrolled_to.set(Some(index));
            Ok(())
        }
    }

    struct Unmounted;

    impl Virtualizer for Unmounted {
        fn scroll_to_index(&self, _index: usize) -> Result<(), ScrollError> {
            Err(ScrollError::NotMounted("company-table-body".to_string()))
        }
    }

    #[test]
    fn reset_scroll_goes_to_first_row() {
        let v = Mounted {
            scrolled_to: Cell::new(None),
        };
        assert!(reset_scroll(Some(&v)));
        assert_eq!(v.scrolled_to.get(), Some(0));
    }

    #[test]
    fn reset_scroll_swallows_unmounted_virtualizer() {
        assert!(!reset_scroll(Some(&Unmounted)));
        assert!(!reset_scroll::<Unmounted>(None));
        let dynamic: &dyn Virtualizer = &Unmounted;
        assert!(!reset_scroll(Some(dynamic)));
    }

    #[test]
    fn narrowed_search_restarts_window_at_first_row() {
        let v = Mounted {
            scrolled_to: Cell::new(None),
        };
        let stale_top = 28.0 * 500.0;
        let narrowed = contains(None, "$50,000");
        assert_eq!(narrowed, vec![0, 2]);

        // Before the reset, the old offset clamps to the tail of the short list.
        let stale = VirtualWindow::compute(narrowed.len(), 28.0, 280.0, stale_top, 0);
        assert_eq!(stale.start, 1);

        assert!(reset_scroll(Some(&v)));
        assert_eq!(v.scrolled_to.get(), Some(0));
        let fresh = VirtualWindow::compute(narrowed.len(), 28.0, 280.0, 0.0, 0);
        assert_eq!(fresh.range(), 0..2);
    }

    #[test]
    fn sort_then_reset_on_unmounted_does_not_panic() {
        let records = records();
        for field in RecordField::ALL {
            let sort = SortState::cycle(None, field);
            let order = row_order(&records, &columns(), sort, "", FilterMode::default());
            assert_eq!(order.len(), records.len());
            reset_scroll(Some(&Unmounted));
        }
    }

    #[test]
    fn loading_latch_clears_once() {
        let mut latch = LoadingLatch::new();
        assert!(latch.observe(0));
        assert!(!latch.observe(1000));
        assert!(!latch.observe(0));
        assert!(!latch.is_loading());
    }
}
