use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::constants::{events, messages};
use crate::display::ChartView;
use crate::error::SessionError;
use crate::market::traits::MarketDataProvider;
use crate::market::types::{AssetRef, PriceSeries, Timeframe};

use super::spec::ChartSpec;
use super::surface::{RenderHandle, RenderSurface};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Uninitialized,
    Loading,
    Ready,
    /// The last switch could not be applied; the surface stays hidden.
    Failed,
}

/// What happened to a timeframe switch that did not error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The new chart replaced the old one.
    Applied,
    /// A newer switch was started while this one was fetching; its result was dropped.
    Superseded,
}

/// Read-only copy of the session state.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    pub asset: AssetRef,
    pub phase: SessionPhase,
    /// Timeframe of the chart currently shown, if any.
    pub timeframe: Option<Timeframe>,
    /// Timeframe of the most recent switch request.
    pub requested: Option<Timeframe>,
    pub series: PriceSeries,
    pub error: Option<String>,
}

struct SessionState {
    phase: SessionPhase,
    timeframe: Option<Timeframe>,
    requested: Option<Timeframe>,
    handle: Option<Box<dyn RenderHandle>>,
    series: PriceSeries,
    error: Option<String>,
}

/// The single live chart of a page.
///
/// Owns at most one render handle. Every switch destroys the previous handle
/// before creating the next, and only the most recently started switch is
/// ever applied.
pub struct ChartSession {
    asset: AssetRef,
    default_timeframe: Timeframe,
    provider: Arc<dyn MarketDataProvider>,
    surface: Arc<dyn RenderSurface>,
    view: Arc<dyn ChartView>,
    state: Mutex<SessionState>,
    latest_request: AtomicU64,
}

impl ChartSession {
    pub fn new(
        asset: AssetRef,
        default_timeframe: Timeframe,
        provider: Arc<dyn MarketDataProvider>,
        surface: Arc<dyn RenderSurface>,
        view: Arc<dyn ChartView>,
    ) -> Self {
        Self {
            asset,
            default_timeframe,
            provider,
            surface,
            view,
            state: Mutex::new(SessionState {
                phase: SessionPhase::Uninitialized,
                timeframe: None,
                requested: None,
                handle: None,
                series: PriceSeries::new(),
                error: None,
            }),
            latest_request: AtomicU64::new(0),
        }
    }

    pub fn asset(&self) -> &AssetRef {
        &self.asset
    }

    pub fn default_timeframe(&self) -> &Timeframe {
        &self.default_timeframe
    }

    /// First chart of the page, at the default timeframe.
    pub async fn initialize(&self) -> Result<SwitchOutcome, SessionError> {
        info!(
            "📈 [CHART] Initializing {} chart for {} via {} / {}",
            self.asset.asset_type,
            self.asset.display_symbol(),
            self.provider.name(),
            self.surface.name()
        );
        self.select_timeframe(self.default_timeframe.clone()).await
    }

    pub async fn select_timeframe(&self, timeframe: Timeframe) -> Result<SwitchOutcome, SessionError> {
        let token = {
            let mut state = self.lock_state();
            let token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
            state.phase = SessionPhase::Loading;
            state.requested = Some(timeframe.clone());
            self.view.show_loading_indicator();
            token
        };
        debug!("📈 [CHART] {} -> {} (request #{})", self.asset.symbol, timeframe, token);

        let result = self.provider.fetch_series(&self.asset, &timeframe).await;

        let mut state = self.lock_state();
        if !self.is_latest(token) {
            info!(
                event = events::CHART_SUPERSEDED,
                "⏭️ [CHART] Dropping {} {} result (request #{} superseded by #{})",
                self.asset.symbol,
                timeframe,
                token,
                self.latest_request.load(Ordering::SeqCst)
            );
            return Ok(SwitchOutcome::Superseded);
        }

        let series = match result {
            Ok(series) => series,
            Err(e) => {
                warn!(event = events::CHART_UNAVAILABLE, "⚠️ [CHART] {}", e);
                self.fail(&mut state, e.to_string());
                return Err(e.into());
            }
        };

        let spec = ChartSpec::price_line(&self.asset, &timeframe, &series);
        if let Some(previous) = state.handle.take() {
            debug!("🗑️ [CHART] Destroying chart #{}", previous.id());
            previous.destroy();
        }

        match self.surface.create(&spec) {
            Ok(handle) => {
                info!(
                    event = events::CHART_RENDERED,
                    "✅ [CHART] {} {} rendered ({} points, chart #{})",
                    spec.symbol,
                    timeframe,
                    series.len(),
                    handle.id()
                );
                state.handle = Some(handle);
                state.phase = SessionPhase::Ready;
                state.timeframe = Some(timeframe.clone());
                state.series = series;
                state.error = None;
                self.view.show_surface(&spec);
                self.view.mark_active_timeframe(&timeframe);
                Ok(SwitchOutcome::Applied)
            }
            Err(e) => {
                warn!(event = events::CHART_UNAVAILABLE, "⚠️ [CHART] Rendering {} {} failed: {}", spec.symbol, timeframe, e);
                self.fail(&mut state, e.to_string());
                Err(e.into())
            }
        }
    }

    /// Destroys the live chart, if any. Used on page unload.
    ///
    /// Switches still fetching when this runs come back `Superseded`.
    pub fn teardown(&self) {
        let mut state = self.lock_state();
        self.latest_request.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = state.handle.take() {
            info!("🧹 [CHART] Tearing down chart #{} for {}", handle.id(), self.asset.symbol);
            handle.destroy();
        }
        state.phase = SessionPhase::Uninitialized;
        state.timeframe = None;
        state.requested = None;
    }

    pub fn phase(&self) -> SessionPhase {
        self.lock_state().phase
    }

    pub fn timeframe(&self) -> Option<Timeframe> {
        self.lock_state().timeframe.clone()
    }

    pub fn has_live_chart(&self) -> bool {
        self.lock_state().handle.is_some()
    }

    /// File backing the live chart, when the surface renders to disk.
    pub fn artifact(&self) -> Option<PathBuf> {
        self.lock_state().handle.as_ref().and_then(|h| h.artifact().map(|p| p.to_path_buf()))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock_state();
        SessionSnapshot {
            asset: self.asset.clone(),
            phase: state.phase,
            timeframe: state.timeframe.clone(),
            requested: state.requested.clone(),
            series: state.series.clone(),
            error: state.error.clone(),
        }
    }

    fn is_latest(&self, token: u64) -> bool {
        self.latest_request.load(Ordering::SeqCst) == token
    }

    fn fail(&self, state: &mut SessionState, reason: String) {
        state.phase = SessionPhase::Failed;
        state.error = Some(reason);
        self.view.show_chart_error(messages::CHART_UNAVAILABLE);
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for ChartSession {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(handle) = state.handle.take() {
            handle.destroy();
        }
    }
}
