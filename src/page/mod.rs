//! Page bootstrap: reads the page's asset, wires provider, session and refresh
//! loop together, and owns them for the page's lifetime.

pub mod model;

use reqwest::Client;
use std::sync::Arc;
use tracing::{info, warn};

use crate::chart::session::ChartSession;
use crate::chart::surface::RenderSurface;
use crate::config::AppConfig;
use crate::constants::events;
use crate::market::factory::build_provider;
use crate::market::traits::MarketDataProvider;
use crate::market::types::{AssetRef, AssetType};
use crate::services::refresh::{PriceRefresher, RefreshHandle};

use model::PageModel;

/// The two attributes a detail page carries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageContext {
    pub symbol: Option<String>,
    pub asset_type: Option<String>,
}

impl PageContext {
    pub fn new(symbol: impl Into<String>, asset_type: impl Into<String>) -> Self {
        Self { symbol: Some(symbol.into()), asset_type: Some(asset_type.into()) }
    }

    /// `PAGE_SYMBOL` and `PAGE_ASSET_TYPE`.
    pub fn from_env() -> Self {
        Self {
            symbol: std::env::var("PAGE_SYMBOL").ok(),
            asset_type: std::env::var("PAGE_ASSET_TYPE").ok(),
        }
    }

    /// `None` unless both attributes are present and non-blank.
    pub fn asset_ref(&self) -> Option<AssetRef> {
        let symbol = self.symbol.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let asset_type = self.asset_type.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some(AssetRef::new(symbol, AssetType::from_page_value(asset_type)))
    }
}

/// Result of booting a page.
pub enum Boot {
    /// The page carries no asset; nothing was fetched.
    Skipped,
    Started(PageRuntime),
}

impl Boot {
    pub fn runtime(self) -> Option<PageRuntime> {
        match self {
            Boot::Skipped => None,
            Boot::Started(runtime) => Some(runtime),
        }
    }
}

/// Everything a live page owns.
pub struct PageRuntime {
    pub session: Arc<ChartSession>,
    pub refresher: Arc<PriceRefresher>,
    pub model: Arc<PageModel>,
    refresh: RefreshHandle,
}

impl PageRuntime {
    pub fn asset(&self) -> &AssetRef {
        self.session.asset()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_running()
    }

    /// Page unload: stops the refresh loop and destroys the chart.
    pub fn shutdown(&self) {
        self.refresh.stop();
        self.session.teardown();
        info!("👋 [PAGE] {} page shut down", self.asset().display_symbol());
    }
}

/// Boots the page described by `context`, choosing the provider from its asset type.
pub async fn boot(
    context: &PageContext,
    config: &AppConfig,
    client: Client,
    surface: Arc<dyn RenderSurface>,
    model: Arc<PageModel>,
) -> Boot {
    let Some(asset) = context.asset_ref() else {
        info!(event = events::INIT_SKIPPED, "ℹ️ [PAGE] No symbol/asset type on this page - skipping initialization");
        return Boot::Skipped;
    };

    let provider = build_provider(asset.asset_type, client, config);
    Boot::Started(start_page(asset, provider, config, surface, model).await)
}

/// Builds session and refresh loop for `asset`, loads the first chart and
/// starts refreshing. Chart failures are left in the view.
pub async fn start_page(
    asset: AssetRef,
    provider: Arc<dyn MarketDataProvider>,
    config: &AppConfig,
    surface: Arc<dyn RenderSurface>,
    model: Arc<PageModel>,
) -> PageRuntime {
    info!(
        "🚀 [PAGE] Booting {} page for {} ({})",
        asset.asset_type,
        asset.display_symbol(),
        provider.name()
    );

    let session = Arc::new(ChartSession::new(
        asset.clone(),
        config.chart.default_timeframe.clone(),
        provider.clone(),
        surface,
        model.clone(),
    ));
    let refresher = Arc::new(PriceRefresher::new(asset, provider, model.clone(), config.refresh_interval()));

    if let Err(e) = session.initialize().await {
        warn!("⚠️ [PAGE] Initial chart failed: {}", e);
    }
    let refresh = refresher.clone().start();

    PageRuntime { session, refresher, model, refresh }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::model::PriceRegion;

    #[test]
    fn test_asset_ref_requires_both_attributes() {
        assert_eq!(PageContext::default().asset_ref(), None);
        assert_eq!(
            PageContext { symbol: Some("bitcoin".to_string()), asset_type: None }.asset_ref(),
            None
        );
        assert_eq!(PageContext::new("  ", "crypto").asset_ref(), None);
    }

    #[test]
    fn test_asset_ref_from_context() {
        assert_eq!(PageContext::new("bitcoin", "crypto").asset_ref(), Some(AssetRef::crypto("bitcoin")));
        assert_eq!(PageContext::new(" AAPL ", "stock").asset_ref(), Some(AssetRef::equity("AAPL")));
    }

    #[tokio::test]
    async fn test_boot_skips_without_asset() {
        let config = AppConfig::default();
        let surface: Arc<dyn RenderSurface> = Arc::new(crate::chart::png::PngSurface::new(
            std::env::temp_dir().join("price_charts_boot_skip"),
            320,
            200,
        ));
        let model = Arc::new(PageModel::new(&config.chart.timeframes));

        let outcome = boot(&PageContext::default(), &config, Client::new(), surface, model.clone()).await;

        assert!(matches!(outcome, Boot::Skipped));
        assert_eq!(model.price_region(), PriceRegion::Empty);
        assert!(!model.chart_region().surface_visible);
    }
}
