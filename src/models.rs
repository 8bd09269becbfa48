use crate::config;
use serde::{Deserialize, Serialize, Serializer};

// -----------------------------------------------
// OUTGOING API MODEL
// -----------------------------------------------

/// Normalized quote returned by every endpoint. Numeric fields the upstream
/// did not provide are `None` and serialize as the "N/A" string, matching the
/// wire format clients already consume.
#[derive(Debug, Clone, Serialize)]
pub struct StockQuote {
    pub symbol: String,
    pub company_name: String,

    #[serde(serialize_with = "na_or_f64")]
    pub current_price: Option<f64>,

    pub currency: String,

    #[serde(serialize_with = "na_or_f64")]
    pub previous_close: Option<f64>,

    #[serde(serialize_with = "na_or_f64")]
    pub open: Option<f64>,

    #[serde(serialize_with = "na_or_f64")]
    pub day_high: Option<f64>,

    #[serde(serialize_with = "na_or_f64")]
    pub day_low: Option<f64>,

    #[serde(rename = "52_week_high", serialize_with = "na_or_f64")]
    pub fifty_two_week_high: Option<f64>,

    #[serde(rename = "52_week_low", serialize_with = "na_or_f64")]
    pub fifty_two_week_low: Option<f64>,

    #[serde(serialize_with = "na_or_u64")]
    pub market_cap: Option<u64>,

    #[serde(serialize_with = "na_or_u64")]
    pub volume: Option<u64>,

    #[serde(serialize_with = "na_or_u64")]
    pub avg_volume: Option<u64>,

    /// Local wall-clock time of extraction, "YYYY-MM-DD HH:MM:SS".
    pub timestamp: String,

    // Both numeric or both "N/A"; see resolver::derived_metrics.
    #[serde(serialize_with = "na_or_f64")]
    pub change: Option<f64>,

    #[serde(serialize_with = "na_or_f64")]
    pub percent_change: Option<f64>,
}

fn na_or_f64<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_str(config::UNAVAILABLE),
    }
}

fn na_or_u64<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_u64(*v),
        None => serializer.serialize_str(config::UNAVAILABLE),
    }
}

// -----------------------------------------------
// UPSTREAM MODELS (Yahoo quoteSummary)
// -----------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSummary {
    pub result: Option<Vec<QuoteSnapshot>>,
    pub error: Option<UpstreamError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl UpstreamError {
    pub fn describe(&self) -> String {
        format!(
            "{}: {}",
            self.code.as_deref().unwrap_or("unknown"),
            self.description.as_deref().unwrap_or("no description"),
        )
    }
}

/// One entry of quoteSummary.result. Every module is optional; a snapshot
/// with none of them is unusable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteSnapshot {
    pub price: Option<PriceModule>,

    #[serde(rename = "summaryDetail")]
    pub summary_detail: Option<SummaryDetail>,

    #[serde(rename = "financialData")]
    pub financial_data: Option<FinancialData>,
}

impl QuoteSnapshot {
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.summary_detail.is_none() && self.financial_data.is_none()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceModule {
    #[serde(rename = "longName")]
    pub long_name: Option<String>,

    #[serde(rename = "shortName")]
    pub short_name: Option<String>,

    pub currency: Option<String>,

    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: Option<YfNum>,

    #[serde(rename = "marketCap")]
    pub market_cap: Option<YfLong>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryDetail {
    #[serde(rename = "previousClose")]
    pub previous_close: Option<YfNum>,

    pub open: Option<YfNum>,

    #[serde(rename = "dayHigh")]
    pub day_high: Option<YfNum>,

    #[serde(rename = "dayLow")]
    pub day_low: Option<YfNum>,

    #[serde(rename = "fiftyTwoWeekHigh")]
    pub fifty_two_week_high: Option<YfNum>,

    #[serde(rename = "fiftyTwoWeekLow")]
    pub fifty_two_week_low: Option<YfNum>,

    pub volume: Option<YfLong>,

    #[serde(rename = "averageVolume")]
    pub average_volume: Option<YfLong>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinancialData {
    #[serde(rename = "currentPrice")]
    pub current_price: Option<YfNum>,
}

/// Yahoo wraps numerics as {"raw": 123.4, "fmt": "123.40"}; raw itself may be
/// missing when the value is a textual placeholder.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct YfNum {
    pub raw: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct YfLong {
    pub raw: Option<u64>,
}
