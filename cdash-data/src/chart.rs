//! Chart series derived from the selected record.
//!
//! The bar chart shows three figures of the selection: raised capital, net
//! profit and turnover. Drawing is done by D3.js; this module only produces
//! the numbers and the JSON handed across the bridge.

use crate::error::CurrencyParseError;
use crate::money::parse_currency;
use crate::record::Record;
use serde::Serialize;

pub const CAPITAL_LABEL: &str = "Raised Capital";
pub const PROFIT_LABEL: &str = "Net Profit";
pub const TURNOVER_LABEL: &str = "Turnover";

/// The three numeric values behind the bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartSeries {
    pub capital: f64,
    pub profit: f64,
    pub turnover: f64,
}

/// One labelled bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: f64,
}

impl ChartSeries {
    pub fn from_record(record: &Record) -> Self {
        Self {
            capital: record.raised_capital.amount(),
            profit: record.net_profit.amount(),
            turnover: record.turnover.amount(),
        }
    }

    /// Build from formatted currency strings (`$12,345.67`).
    pub fn from_formatted(
        capital: &str,
        profit: &str,
        turnover: &str,
    ) -> Result<Self, CurrencyParseError> {
        Ok(Self {
            capital: parse_currency(capital)?.amount(),
            profit: parse_currency(profit)?.amount(),
            turnover: parse_currency(turnover)?.amount(),
        })
    }

    /// Bars in display order.
    pub fn points(&self) -> [SeriesPoint; 3] {
        [
            SeriesPoint {
                label: CAPITAL_LABEL,
                value: self.capital,
            },
            SeriesPoint {
                label: PROFIT_LABEL,
                value: self.profit,
            },
            SeriesPoint {
                label: TURNOVER_LABEL,
                value: self.turnover,
            },
        ]
    }
}

/// Series for the current selection; zeros when nothing is selected yet.
pub fn derive_series(selected: Option<&Record>) -> ChartSeries {
    match selected {
        Some(record) => ChartSeries::from_record(record),
        None => {
            log::debug!("[CDash] chart: No selection; using zero series");
            ChartSeries::default()
        }
    }
}

/// Measured size of the chart's container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
}

impl ChartDimensions {
    /// `None` until the container has a real, positive size.
    pub fn measured(width: f64, height: f64) -> Option<Self> {
        (width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
            .then_some(Self { width, height })
    }
}

/// JSON data and config strings for `renderBarChart`.
pub fn bar_chart_payload(
    series: &ChartSeries,
    dims: ChartDimensions,
    selected: Option<&Record>,
) -> (String, String) {
    let data_json = serde_json::to_string(&series.points()).unwrap_or_default();
    let title = selected
        .map(|r| r.company_name.as_str())
        .unwrap_or("No company selected");
    let config_json = serde_json::json!({
        "title": title,
        "width": dims.width,
        "height": dims.height,
        "yAxisLabel": "USD",
        "color": "#228BE6",
    })
    .to_string();
    (data_json, config_json)
}
