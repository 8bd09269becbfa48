use crate::config;
use crate::error::QuoteError;
use crate::models::{QuoteSnapshot, QuoteSummaryEnvelope};
use anyhow::{Context, Result};
use rand::{seq::SliceRandom, thread_rng};
use reqwest::{header, Client};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// -----------------------------------------------
// CLIENT WRAPPER WITH SESSION STATE
// -----------------------------------------------
pub struct YahooClient {
    client: Client,
    warmed_up: Arc<RwLock<bool>>,
}

impl YahooClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            warmed_up: Arc::new(RwLock::new(false)),
        })
    }

    /// Prime the Yahoo session cookies (only once per client)
    async fn warmup_if_needed(&self) -> Result<(), QuoteError> {
        // Check if already warmed up
        if *self.warmed_up.read().await {
            return Ok(());
        }

        // Acquire write lock and warmup
        let mut warmed = self.warmed_up.write().await;
        if !*warmed {
            let _ = self
                .client
                .get(config::YAHOO_BASE_URL)
                .header("Accept", "text/html")
                .send()
                .await?;

            tokio::time::sleep(Duration::from_millis(config::WARMUP_DELAY_MS)).await;
            *warmed = true;
        }

        Ok(())
    }

    /// Fetch the point-in-time snapshot for one exchange-qualified symbol.
    /// Exactly one attempt; any failure is total.
    pub async fn fetch_quote_snapshot(&self, symbol: &str) -> Result<QuoteSnapshot, QuoteError> {
        self.warmup_if_needed().await?;

        let url = config::quote_summary_url(symbol);
        let res = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let preview: String = body.chars().take(200).collect();
            return Err(QuoteError::Status(format!(
                "{} for {}: {}",
                status, symbol, preview
            )));
        }

        let text = res.text().await?;

        // Validate JSON shape before parsing
        let trimmed = text.trim();
        if !trimmed.starts_with('{') {
            let preview: String = text.chars().take(200).collect();
            return Err(QuoteError::NonJsonResponse(preview));
        }

        let envelope: QuoteSummaryEnvelope = serde_json::from_str(trimmed)?;
        let summary = envelope.quote_summary;

        if let Some(err) = summary.error {
            return Err(QuoteError::NoData(format!(
                "{}: {}",
                symbol,
                err.describe()
            )));
        }

        let snapshot = summary
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| QuoteError::NoData(format!("empty result set for {}", symbol)))?;

        if snapshot.is_empty() {
            return Err(QuoteError::NoData(format!("no quote modules for {}", symbol)));
        }

        Ok(snapshot)
    }
}

// -----------------------------------------------
// HTTP CLIENT BUILDER
// -----------------------------------------------
fn build_client() -> Result<Client> {
    let mut headers = header::HeaderMap::new();

    // Rotating Accept-Language headers (fingerprint avoidance)
    let lang = config::ACCEPT_LANGUAGES.choose(&mut thread_rng()).unwrap();
    headers.insert(
        header::ACCEPT_LANGUAGE,
        header::HeaderValue::from_str(lang)?,
    );
    headers.insert(header::ACCEPT, header::HeaderValue::from_static("*/*"));

    Ok(Client::builder()
        .default_headers(headers)
        .cookie_store(true) // Yahoo sets consent/session cookies
        .user_agent(config::USER_AGENT)
        .timeout(config::HTTP_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?)
}
