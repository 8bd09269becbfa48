use crate::config;
use crate::resolver;
use crate::yahoo_client::YahooClient;
use anyhow::Result;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

// -----------------------------------------------
// API RESPONSE MODELS
// -----------------------------------------------

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

// -----------------------------------------------
// APPLICATION STATE
// -----------------------------------------------

#[derive(Clone)]
pub struct AppState {
    client: Arc<YahooClient>,
    aliases: Arc<HashMap<&'static str, &'static str>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: Arc::new(YahooClient::new()?),
            aliases: Arc::new(config::STOCK_ALIASES.iter().copied().collect()),
        })
    }
}

// -----------------------------------------------
// API HANDLERS
// -----------------------------------------------

/// GET /api/stock/{ticker} - quote for one NSE ticker
async fn get_stock(Path(ticker): Path<String>, State(state): State<AppState>) -> Response {
    match resolver::resolve_quote(&state.client, &ticker).await {
        Ok(quote) => Json(quote).into_response(),
        Err(e) => {
            tracing::warn!("quote lookup failed for {}: {}", ticker, e);
            error_response(
                StatusCode::NOT_FOUND,
                format!("Could not retrieve data for {}", ticker),
            )
        }
    }
}

/// GET /api/stock/name/{company_name} - quote by company name
///
/// Alias table first; whether the name is unknown or its mapped ticker fails
/// to resolve, the space-stripped name is tried as a raw ticker before 404.
async fn get_stock_by_name(
    Path(company_name): Path<String>,
    State(state): State<AppState>,
) -> Response {
    if let Some(ticker) = resolver::alias_ticker(&state.aliases, &company_name) {
        match resolver::resolve_quote(&state.client, ticker).await {
            Ok(quote) => return Json(quote).into_response(),
            Err(e) => {
                tracing::warn!("alias {} -> {} failed: {}", company_name, ticker, e);
            }
        }
    }

    let guess = resolver::heuristic_ticker(&company_name);
    match resolver::resolve_quote(&state.client, &guess).await {
        Ok(quote) => Json(quote).into_response(),
        Err(e) => {
            tracing::warn!("name lookup failed for {}: {}", company_name, e);
            error_response(
                StatusCode::NOT_FOUND,
                format!("Could not find ticker for {}", company_name),
            )
        }
    }
}

/// GET /api/trending - quotes for the fixed trending list
async fn get_trending(State(state): State<AppState>) -> Response {
    match resolver::resolve_trending(Arc::clone(&state.client)).await {
        Ok(quotes) => Json(quotes).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// GET /health - liveness probe for the fronting orchestrator
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy", "service": "stock-data" }))
}

// -----------------------------------------------
// SERVER SETUP
// -----------------------------------------------

pub async fn start_server(port: u16) -> Result<()> {
    let app_state = AppState::new()?;

    let app = Router::new()
        .route("/api/stock/{ticker}", get(get_stock))
        .route("/api/stock/name/{company_name}", get(get_stock_by_name))
        .route("/api/trending", get(get_trending))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("🚀 NSE Stock Data API running on http://{}", addr);
    println!("📋 Available endpoints:");
    println!("   GET  /api/stock/RELIANCE");
    println!("   GET  /api/stock/name/hdfc%20bank");
    println!("   GET  /api/trending");
    println!("   GET  /health");
    println!();

    axum::serve(listener, app).await?;
    Ok(())
}
