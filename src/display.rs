//! Display-region contracts.
//!
//! The session and the refresh loop only talk to these traits; what a region
//! actually is (page model, terminal, test recorder) is decided by the caller.

use crate::chart::spec::ChartSpec;
use crate::market::types::{FormattedPrice, Timeframe};

/// The current-price region of a page.
pub trait PriceDisplay: Send + Sync {
    fn show_loading(&self);
    fn show_price(&self, price: &FormattedPrice);
    fn show_error(&self, message: &str);
}

/// The chart region of a page: the drawing surface, its loading/error
/// indicator and the timeframe buttons.
pub trait ChartView: Send + Sync {
    /// Hide the surface and show the loading indicator.
    fn show_loading_indicator(&self);

    /// Show the surface (now holding `spec`) and hide the indicator.
    fn show_surface(&self, spec: &ChartSpec);

    /// Keep the surface hidden and put `message` in the indicator.
    fn show_chart_error(&self, message: &str);

    /// Mark `timeframe` as the only active button.
    fn mark_active_timeframe(&self, timeframe: &Timeframe);
}
