use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

use crate::chart::spec::ChartSpec;
use crate::constants::messages;
use crate::display::{ChartView, PriceDisplay};
use crate::market::types::{FormattedPrice, Timeframe};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum PriceRegion {
    Empty,
    Loading(String),
    Price(String),
    Error(String),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimeframeButton {
    pub timeframe: Timeframe,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartRegion {
    pub surface_visible: bool,
    /// Loading or error text; `None` while the chart is shown.
    pub indicator: Option<String>,
    pub title: Option<String>,
    pub buttons: Vec<TimeframeButton>,
}

impl ChartRegion {
    pub fn active_timeframe(&self) -> Option<&Timeframe> {
        self.buttons.iter().find(|b| b.active).map(|b| &b.timeframe)
    }
}

/// In-memory page: the price region and the chart region.
///
/// Both regions are last-write-wins; the refresh loop and the chart session
/// write to them independently.
pub struct PageModel {
    price: Mutex<PriceRegion>,
    chart: Mutex<ChartRegion>,
}

impl PageModel {
    pub fn new(timeframes: &[Timeframe]) -> Self {
        Self {
            price: Mutex::new(PriceRegion::Empty),
            chart: Mutex::new(ChartRegion {
                surface_visible: false,
                indicator: None,
                title: None,
                buttons: timeframes
                    .iter()
                    .map(|tf| TimeframeButton { timeframe: tf.clone(), active: false })
                    .collect(),
            }),
        }
    }

    pub fn price_region(&self) -> PriceRegion {
        lock(&self.price).clone()
    }

    pub fn chart_region(&self) -> ChartRegion {
        lock(&self.chart).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl PriceDisplay for PageModel {
    fn show_loading(&self) {
        *lock(&self.price) = PriceRegion::Loading(messages::PRICE_LOADING.to_string());
    }

    fn show_price(&self, price: &FormattedPrice) {
        *lock(&self.price) = PriceRegion::Price(price.to_string());
    }

    fn show_error(&self, message: &str) {
        *lock(&self.price) = PriceRegion::Error(message.to_string());
    }
}

impl ChartView for PageModel {
    fn show_loading_indicator(&self) {
        let mut chart = lock(&self.chart);
        chart.surface_visible = false;
        chart.indicator = Some(messages::CHART_LOADING.to_string());
    }

    fn show_surface(&self, spec: &ChartSpec) {
        let mut chart = lock(&self.chart);
        chart.surface_visible = true;
        chart.indicator = None;
        chart.title = Some(spec.title.clone());
    }

    fn show_chart_error(&self, message: &str) {
        let mut chart = lock(&self.chart);
        chart.surface_visible = false;
        chart.indicator = Some(message.to_string());
    }

    fn mark_active_timeframe(&self, timeframe: &Timeframe) {
        for button in lock(&self.chart).buttons.iter_mut() {
            button.active = button.timeframe == *timeframe;
        }
    }
}
