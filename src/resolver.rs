use crate::config;
use crate::error::QuoteError;
use crate::models::{QuoteSnapshot, StockQuote, YfLong, YfNum};
use crate::yahoo_client::YahooClient;
use anyhow::Result;
use chrono::Local;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

// -----------------------------------------------
// SYMBOL NORMALIZATION
// -----------------------------------------------

/// Append the NSE suffix unless already present. Idempotent.
pub fn normalize_symbol(raw: &str) -> String {
    if raw.ends_with(config::NSE_SUFFIX) {
        raw.to_string()
    } else {
        format!("{}{}", raw, config::NSE_SUFFIX)
    }
}

// -----------------------------------------------
// NAME RESOLUTION
// -----------------------------------------------

/// Look up a company name in the alias table (case-insensitive).
pub fn alias_ticker(
    aliases: &HashMap<&'static str, &'static str>,
    company_name: &str,
) -> Option<&'static str> {
    aliases.get(company_name.to_lowercase().as_str()).copied()
}

/// Fallback when the alias table has no entry: strip spaces and treat the
/// name itself as a raw ticker.
pub fn heuristic_ticker(company_name: &str) -> String {
    company_name.replace(' ', "")
}

// -----------------------------------------------
// DERIVED METRICS
// -----------------------------------------------

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// change and percent_change, rounded to 2 decimals. Both present only when
/// both inputs are numeric and the previous close is a usable divisor;
/// otherwise both stay unavailable.
pub fn derived_metrics(
    current_price: Option<f64>,
    previous_close: Option<f64>,
) -> (Option<f64>, Option<f64>) {
    match (current_price, previous_close) {
        (Some(current), Some(prev)) if prev != 0.0 => {
            let change = current - prev;
            (Some(round2(change)), Some(round2(change / prev * 100.0)))
        }
        _ => (None, None),
    }
}

// -----------------------------------------------
// FIELD EXTRACTION
// -----------------------------------------------

fn num(field: &Option<YfNum>) -> Option<f64> {
    field.as_ref().and_then(|v| v.raw)
}

fn long(field: &Option<YfLong>) -> Option<u64> {
    field.as_ref().and_then(|v| v.raw)
}

/// Map an upstream snapshot onto the normalized record. `symbol` must already
/// be exchange-qualified.
pub fn build_stock_quote(symbol: &str, snapshot: &QuoteSnapshot) -> StockQuote {
    let price = snapshot.price.as_ref();
    let detail = snapshot.summary_detail.as_ref();
    let financial = snapshot.financial_data.as_ref();

    let company_name = price
        .and_then(|p| p.long_name.clone())
        .or_else(|| price.and_then(|p| p.short_name.clone()))
        .unwrap_or_else(|| {
            symbol
                .strip_suffix(config::NSE_SUFFIX)
                .unwrap_or(symbol)
                .to_string()
        });

    let current_price = financial
        .and_then(|f| num(&f.current_price))
        .or_else(|| price.and_then(|p| num(&p.regular_market_price)));

    let previous_close = detail.and_then(|d| num(&d.previous_close));

    let (change, percent_change) = derived_metrics(current_price, previous_close);

    StockQuote {
        symbol: symbol.to_string(),
        company_name,
        current_price,
        currency: price
            .and_then(|p| p.currency.clone())
            .unwrap_or_else(|| config::DEFAULT_CURRENCY.to_string()),
        previous_close,
        open: detail.and_then(|d| num(&d.open)),
        day_high: detail.and_then(|d| num(&d.day_high)),
        day_low: detail.and_then(|d| num(&d.day_low)),
        fifty_two_week_high: detail.and_then(|d| num(&d.fifty_two_week_high)),
        fifty_two_week_low: detail.and_then(|d| num(&d.fifty_two_week_low)),
        market_cap: price.and_then(|p| long(&p.market_cap)),
        volume: detail.and_then(|d| long(&d.volume)),
        avg_volume: detail.and_then(|d| long(&d.average_volume)),
        timestamp: Local::now().format(config::TIMESTAMP_FORMAT).to_string(),
        change,
        percent_change,
    }
}

// -----------------------------------------------
// RESOLUTION
// -----------------------------------------------

/// Resolve one ticker (suffixed or not) to a normalized quote.
pub async fn resolve_quote(
    client: &YahooClient,
    raw_symbol: &str,
) -> Result<StockQuote, QuoteError> {
    let symbol = normalize_symbol(raw_symbol);
    let snapshot = client.fetch_quote_snapshot(&symbol).await?;
    Ok(build_stock_quote(&symbol, &snapshot))
}

// -----------------------------------------------
// TRENDING BATCH WITH CONCURRENCY CONTROL
// -----------------------------------------------

/// Resolve the fixed trending list. Workers start at least
/// TRENDING_SPACING_MS apart and at most TRENDING_MAX_CONCURRENT run at once;
/// results keep the list order and failed tickers are dropped.
pub async fn resolve_trending(client: Arc<YahooClient>) -> Result<Vec<StockQuote>> {
    let semaphore = Arc::new(Semaphore::new(config::TRENDING_MAX_CONCURRENT));
    let mut handles = vec![];

    for (position, ticker) in config::TRENDING_TICKERS.iter().enumerate() {
        let client = Arc::clone(&client);
        let sem = Arc::clone(&semaphore);

        let handle = tokio::spawn(async move {
            // Stagger launches to keep the minimum inter-call spacing
            tokio::time::sleep(Duration::from_millis(
                config::TRENDING_SPACING_MS * position as u64,
            ))
            .await;

            let _permit = sem
                .acquire_owned()
                .await
                .map_err(|e| QuoteError::Request(format!("semaphore closed: {}", e)))?;

            resolve_quote(&client, ticker).await
        });

        handles.push(handle);
    }

    let mut quotes = vec![];
    for (ticker, handle) in config::TRENDING_TICKERS.iter().zip(handles) {
        match handle.await {
            Ok(Ok(quote)) => quotes.push(quote),
            Ok(Err(e)) => {
                tracing::warn!("dropping {} from trending: {}", ticker, e);
            }
            Err(e) => anyhow::bail!("trending worker for {} failed: {}", ticker, e),
        }
    }

    Ok(quotes)
}
