use std::time::Duration;

// -----------------------------------------------
// UPSTREAM ENDPOINTS (Yahoo Finance)
// -----------------------------------------------
pub const YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Modules requested from quoteSummary; together they carry every field the
/// API exposes (live price, OHLC, 52-week range, market cap, volumes).
pub const QUOTE_SUMMARY_MODULES: &str = "price,summaryDetail,financialData";

pub fn quote_summary_url(symbol: &str) -> String {
    format!(
        "{}/v10/finance/quoteSummary/{}?modules={}",
        YAHOO_BASE_URL,
        urlencoding::encode(symbol), // URL-encode the symbol (M&M etc.)
        QUOTE_SUMMARY_MODULES
    )
}

// -----------------------------------------------
// EXCHANGE CONVENTIONS
// -----------------------------------------------
pub const NSE_SUFFIX: &str = ".NS";
pub const DEFAULT_CURRENCY: &str = "INR";

/// Serialized in place of any numeric field the upstream did not provide.
pub const UNAVAILABLE: &str = "N/A";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// -----------------------------------------------
// COMPANY NAME -> NSE TICKER ALIASES
// -----------------------------------------------
// Keys must be lowercase; lookups lowercase the request path segment first.
pub const STOCK_ALIASES: &[(&str, &str)] = &[
    ("hdfc bank", "HDFCBANK"),
    ("hdfc", "HDFCBANK"),
    ("reliance", "RELIANCE"),
    ("reliance industries", "RELIANCE"),
    ("tcs", "TCS"),
    ("tata consultancy services", "TCS"),
    ("infosys", "INFY"),
    ("icici bank", "ICICIBANK"),
    ("icici", "ICICIBANK"),
    ("sbi", "SBIN"),
    ("state bank of india", "SBIN"),
    ("axis bank", "AXISBANK"),
    ("axis", "AXISBANK"),
    ("bharti airtel", "BHARTIARTL"),
    ("airtel", "BHARTIARTL"),
    ("itc", "ITC"),
    ("wipro", "WIPRO"),
    ("bajaj finance", "BAJFINANCE"),
    ("hul", "HINDUNILVR"),
    ("hindustan unilever", "HINDUNILVR"),
    ("kotak mahindra bank", "KOTAKBANK"),
    ("kotak", "KOTAKBANK"),
    ("larsen & toubro", "LT"),
    ("l&t", "LT"),
];

// -----------------------------------------------
// TRENDING LIST
// -----------------------------------------------
// Response order follows this list exactly.
pub const TRENDING_TICKERS: &[&str] = &[
    "RELIANCE",
    "TCS",
    "HDFCBANK",
    "INFY",
    "ICICIBANK",
    "SBIN",
    "LT",
    "AXISBANK",
    "BHARTIARTL",
    "KOTAKBANK",
];

/// Minimum spacing between upstream call starts in the trending batch.
pub const TRENDING_SPACING_MS: u64 = 200;

pub const TRENDING_MAX_CONCURRENT: usize = 4;

// -----------------------------------------------
// HTTP CLIENT CONFIG
// -----------------------------------------------
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                               AppleWebKit/537.36 (KHTML, like Gecko) \
                               Chrome/131.0.0.0 Safari/537.36";

pub const ACCEPT_LANGUAGES: &[&str] = &[
    "en-US,en;q=0.9",
    "en-GB,en;q=0.8",
    "en-IN,en;q=0.9",
];

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

// -----------------------------------------------
// SESSION WARMUP
// -----------------------------------------------
pub const WARMUP_DELAY_MS: u64 = 200;

// -----------------------------------------------
// SERVER
// -----------------------------------------------
pub const DEFAULT_PORT: u16 = 5001;

/// Port from NSE_API_PORT or default
pub fn get_port() -> u16 {
    std::env::var("NSE_API_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}
