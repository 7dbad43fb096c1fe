use price_charts::api::{run_server, AppState};
use price_charts::chart::png::PngSurface;
use price_charts::chart::surface::RenderSurface;
use price_charts::config::AppConfig;
use price_charts::market::coingecko::CoinGeckoProvider;
use price_charts::market::factory::build_provider;
use price_charts::market::http::build_client;
use price_charts::market::types::AssetType;
use price_charts::page::model::PageModel;
use price_charts::page::{boot, PageContext};
use price_charts::services::board::BoardService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    // Setup Logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("price_charts=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting price_charts...");

    // Load Configuration
    let mut config = AppConfig::load()?;
    if let Ok(addr) = std::env::var("BIND_ADDR") {
        config.bind_addr = addr;
    }
    info!("Loaded Configuration: {:?}", config);

    let client = build_client(config.http_timeout())?;

    let surface: Arc<dyn RenderSurface> = Arc::new(PngSurface::new(
        &config.chart.output_dir,
        config.chart.width,
        config.chart.height,
    ));
    let model = Arc::new(PageModel::new(&config.chart.timeframes));

    let context = PageContext::from_env();
    let page = boot(&context, &config, client.clone(), surface, model).await.runtime();

    let boards = BoardService::new(
        Arc::new(CoinGeckoProvider::new(client.clone(), config.coingecko.base_url.clone())),
        build_provider(AssetType::Equity, client, &config),
        config.board.clone(),
    );

    let state = Arc::new(AppState { page, boards, config });

    // Start API Server
    info!("Initializing API Server...");
    run_server(state.clone()).await?;

    if let Some(page) = &state.page {
        page.shutdown();
    }
    Ok(())
}
