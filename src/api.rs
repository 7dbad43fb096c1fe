use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::chart::session::SwitchOutcome;
use crate::config::AppConfig;
use crate::constants::messages;
use crate::deeplink::{deep_link, BotCommand};
use crate::market::types::Timeframe;
use crate::page::PageRuntime;
use crate::services::board::BoardService;

pub struct AppState {
    /// `None` when the page carries no asset.
    pub page: Option<PageRuntime>,
    pub boards: BoardService,
    pub config: AppConfig,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/price", get(get_price))
        .route("/chart", get(get_chart))
        .route("/chart.png", get(get_chart_png))
        .route("/timeframe/{token}", post(select_timeframe))
        .route("/board/crypto", get(crypto_board))
        .route("/board/stocks", get(stock_board))
        .route("/deeplink", get(get_deep_link))
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>) -> std::io::Result<()> {
    let addr = state.config.bind_addr.clone();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🌐 API Server listening on {}", addr);
    axum::serve(listener, app).await
}

fn no_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "This page has no symbol/asset type; nothing was initialized."})),
    )
        .into_response()
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let asset = state.page.as_ref().map(|page| page.asset().clone());
    Json(json!({"status": "ok", "asset": asset}))
}

async fn get_price(State(state): State<Arc<AppState>>) -> Response {
    let Some(page) = &state.page else {
        return no_page();
    };
    Json(page.model.price_region()).into_response()
}

fn chart_state(page: &PageRuntime) -> serde_json::Value {
    json!({
        "session": page.session.snapshot(),
        "view": page.model.chart_region(),
    })
}

async fn get_chart(State(state): State<Arc<AppState>>) -> Response {
    let Some(page) = &state.page else {
        return no_page();
    };
    Json(chart_state(page)).into_response()
}

async fn select_timeframe(State(state): State<Arc<AppState>>, Path(token): Path<String>) -> Response {
    let Some(page) = &state.page else {
        return no_page();
    };

    let timeframe = Timeframe::from(token);
    match page.session.select_timeframe(timeframe.clone()).await {
        Ok(SwitchOutcome::Applied) => Json(chart_state(page)).into_response(),
        Ok(SwitchOutcome::Superseded) => (
            StatusCode::CONFLICT,
            Json(json!({"status": "superseded", "timeframe": timeframe})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": messages::CHART_UNAVAILABLE, "detail": e.to_string()})),
        )
            .into_response(),
    }
}

async fn get_chart_png(State(state): State<Arc<AppState>>) -> Response {
    let Some(page) = &state.page else {
        return no_page();
    };
    let Some(path) = page.session.artifact() else {
        return (StatusCode::NOT_FOUND, "No chart image is currently rendered.").into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(e) => {
            // The chart may have been replaced between lookup and read
            warn!("⚠️ [API] Reading {} failed: {}", path.display(), e);
            (StatusCode::NOT_FOUND, "No chart image is currently rendered.").into_response()
        }
    }
}

async fn crypto_board(State(state): State<Arc<AppState>>) -> Response {
    match state.boards.crypto_board().await {
        Ok(board) => Json(json!({"text": board.render(), "board": board})).into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": "Error fetching all crypto prices.", "detail": e.to_string()})),
        )
            .into_response(),
    }
}

async fn stock_board(State(state): State<Arc<AppState>>) -> Response {
    let board = state.boards.stock_board().await;
    Json(json!({"text": board.render(), "board": board})).into_response()
}

#[derive(serde::Deserialize)]
struct DeepLinkParams {
    /// Slash command, e.g. `/chart bitcoin 7d`.
    command: Option<String>,
    /// Web-app payload, e.g. `chart:bitcoin 7d`.
    payload: Option<String>,
}

async fn get_deep_link(State(state): State<Arc<AppState>>, Query(params): Query<DeepLinkParams>) -> Response {
    let bot = &state.config.bot;
    let result = match (params.command, params.payload) {
        (Some(command), _) => deep_link(&bot.host, &bot.username, &command),
        (None, Some(payload)) => BotCommand::parse_payload(&payload).and_then(|cmd| cmd.deep_link(&bot.host, &bot.username)),
        (None, None) => {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": "Missing command or payload parameter"})))
                .into_response()
        }
    };

    match result {
        Ok(url) => Json(json!({"url": url.as_str()})).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()}))).into_response(),
    }
}
