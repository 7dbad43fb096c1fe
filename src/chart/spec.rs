use serde::Serialize;

use crate::constants::chart::{
    BORDER_WIDTH, FILL_COLOR, GRID_COLOR, LINE_COLOR, LINE_TENSION, MAX_X_TICKS,
};
use crate::format::format_price_label;
use crate::market::types::{AssetRef, PriceSeries, Timeframe};

/// Formats tooltip and y-axis values.
pub type ValueFormatter = fn(f64) -> String;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineStyle {
    pub border_color: String,
    pub background_color: String,
    pub border_width: u32,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: u32,
    pub point_hover_radius: u32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            border_color: LINE_COLOR.to_string(),
            background_color: FILL_COLOR.to_string(),
            border_width: BORDER_WIDTH,
            fill: true,
            tension: LINE_TENSION,
            point_radius: 0,
            point_hover_radius: 6,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub style: LineStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipMode {
    Index,
    Nearest,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartOptions {
    pub show_legend: bool,
    pub tooltip_mode: TooltipMode,
    pub tooltip_intersect: bool,
    pub max_x_ticks: usize,
    pub show_x_grid: bool,
    pub y_grid_color: String,
    #[serde(skip)]
    pub value_formatter: ValueFormatter,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_legend: false,
            tooltip_mode: TooltipMode::Index,
            tooltip_intersect: false,
            max_x_ticks: MAX_X_TICKS,
            show_x_grid: false,
            y_grid_color: GRID_COLOR.to_string(),
            value_formatter: format_price_label,
        }
    }
}

/// Everything a rendering surface needs to draw one line chart.
#[derive(Clone, Debug, Serialize)]
pub struct ChartSpec {
    pub title: String,
    /// Upper-cased symbol, used as the tooltip prefix.
    pub symbol: String,
    pub timeframe: Timeframe,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Single-dataset price line for `asset`.
    pub fn price_line(asset: &AssetRef, timeframe: &Timeframe, series: &PriceSeries) -> Self {
        let symbol = asset.display_symbol();
        Self {
            title: format!("{} Price ({})", symbol, timeframe),
            labels: series.labels().to_vec(),
            datasets: vec![Dataset {
                label: format!("{} Price", symbol),
                data: series.values().to_vec(),
                style: LineStyle::default(),
            }],
            symbol,
            timeframe: timeframe.clone(),
            options: ChartOptions::default(),
        }
    }

    pub fn point_count(&self) -> usize {
        self.labels.len()
    }

    /// Values of the first dataset (the price line).
    pub fn values(&self) -> &[f64] {
        self.datasets.first().map(|d| d.data.as_slice()).unwrap_or_default()
    }

    /// Tooltip text for a hovered value, e.g. `BITCOIN: $68,000.00`.
    pub fn tooltip_label(&self, value: f64) -> String {
        format!("{}: {}", self.symbol, (self.options.value_formatter)(value))
    }

    /// Y-axis tick text.
    pub fn axis_label(&self, value: f64) -> String {
        (self.options.value_formatter)(value)
    }
}
