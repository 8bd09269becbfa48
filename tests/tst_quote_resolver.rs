use nse_stock_api::models::QuoteSummaryEnvelope;
use nse_stock_api::resolver::{build_stock_quote, heuristic_ticker, normalize_symbol};

const RELIANCE_FIXTURE: &str = r#"{
  "quoteSummary": {
    "result": [{
      "price": {
        "longName": "Reliance Industries Limited",
        "shortName": "RELIANCE INDUSTRIES LTD",
        "currency": "INR",
        "regularMarketPrice": {"raw": 2498.5, "fmt": "2,498.50"},
        "marketCap": {"raw": 16900000000000, "fmt": "16.9T"}
      },
      "summaryDetail": {
        "previousClose": {"raw": 2450.0, "fmt": "2,450.00"},
        "open": {"raw": 2455.0, "fmt": "2,455.00"},
        "dayHigh": {"raw": 2510.0, "fmt": "2,510.00"},
        "dayLow": {"raw": 2448.0, "fmt": "2,448.00"},
        "fiftyTwoWeekHigh": {"raw": 3024.9, "fmt": "3,024.90"},
        "fiftyTwoWeekLow": {"raw": 2221.05, "fmt": "2,221.05"},
        "volume": {"raw": 5400321, "fmt": "5.4M"},
        "averageVolume": {"raw": 6120000, "fmt": "6.12M"}
      },
      "financialData": {
        "currentPrice": {"raw": 2500.0, "fmt": "2,500.00"}
      }
    }],
    "error": null
  }
}"#;

const SPARSE_FIXTURE: &str = r#"{
  "quoteSummary": {
    "result": [{
      "price": {
        "shortName": "NEWLISTCO",
        "currency": "INR",
        "regularMarketPrice": {"raw": 104.35}
      },
      "summaryDetail": {
        "previousClose": {},
        "open": {},
        "volume": {"raw": 120500}
      }
    }],
    "error": null
  }
}"#;

const ERROR_FIXTURE: &str = r#"{
  "quoteSummary": {
    "result": null,
    "error": {"code": "Not Found", "description": "Quote not found for ticker symbol: BOGUS.NS"}
  }
}"#;

fn first_snapshot(fixture: &str) -> nse_stock_api::QuoteSnapshot {
    let envelope: QuoteSummaryEnvelope = serde_json::from_str(fixture).unwrap();
    envelope
        .quote_summary
        .result
        .unwrap()
        .into_iter()
        .next()
        .unwrap()
}

#[test]
fn test_full_snapshot_extraction() {
    let quote = build_stock_quote("RELIANCE.NS", &first_snapshot(RELIANCE_FIXTURE));

    assert_eq!(quote.symbol, "RELIANCE.NS");
    assert_eq!(quote.company_name, "Reliance Industries Limited");
    assert_eq!(quote.currency, "INR");
    // financialData.currentPrice wins over regularMarketPrice
    assert_eq!(quote.current_price, Some(2500.0));
    assert_eq!(quote.previous_close, Some(2450.0));
    assert_eq!(quote.open, Some(2455.0));
    assert_eq!(quote.day_high, Some(2510.0));
    assert_eq!(quote.day_low, Some(2448.0));
    assert_eq!(quote.fifty_two_week_high, Some(3024.9));
    assert_eq!(quote.fifty_two_week_low, Some(2221.05));
    assert_eq!(quote.market_cap, Some(16_900_000_000_000));
    assert_eq!(quote.volume, Some(5_400_321));
    assert_eq!(quote.avg_volume, Some(6_120_000));
    assert_eq!(quote.change, Some(50.0));
    assert_eq!(quote.percent_change, Some(2.04));
}

#[test]
fn test_full_snapshot_wire_format() {
    let quote = build_stock_quote("RELIANCE.NS", &first_snapshot(RELIANCE_FIXTURE));
    let json = serde_json::to_value(&quote).unwrap();

    assert_eq!(json["symbol"], "RELIANCE.NS");
    assert_eq!(json["52_week_high"], 3024.9);
    assert_eq!(json["change"], 50.0);
    assert_eq!(json["percent_change"], 2.04);
    assert_eq!(json["market_cap"], 16_900_000_000_000u64);
}

#[test]
fn test_sparse_snapshot_uses_sentinels() {
    let quote = build_stock_quote("NEWLISTCO.NS", &first_snapshot(SPARSE_FIXTURE));

    // shortName fallback, no longName upstream
    assert_eq!(quote.company_name, "NEWLISTCO");
    // no financialData module: regularMarketPrice fallback
    assert_eq!(quote.current_price, Some(104.35));
    // empty {raw} wrappers and absent attributes both become None...
    assert_eq!(quote.previous_close, None);
    assert_eq!(quote.open, None);
    assert_eq!(quote.day_high, None);
    assert_eq!(quote.market_cap, None);
    assert_eq!(quote.volume, Some(120_500));
    // ...and without a previous close there are no derived metrics
    assert_eq!(quote.change, None);
    assert_eq!(quote.percent_change, None);

    let json = serde_json::to_value(&quote).unwrap();
    assert_eq!(json["previous_close"], "N/A");
    assert_eq!(json["change"], "N/A");
    assert_eq!(json["percent_change"], "N/A");
    assert_eq!(json["current_price"], 104.35);
}

#[test]
fn test_upstream_error_envelope_parses() {
    let envelope: QuoteSummaryEnvelope = serde_json::from_str(ERROR_FIXTURE).unwrap();
    let summary = envelope.quote_summary;

    assert!(summary.result.is_none());
    let err = summary.error.unwrap();
    assert_eq!(err.code.as_deref(), Some("Not Found"));
    assert!(err.describe().contains("BOGUS.NS"));
}

#[test]
fn test_name_fallback_produces_suffixed_ticker() {
    // Unknown company names become space-stripped raw tickers
    assert_eq!(
        normalize_symbol(&heuristic_ticker("Some Random Co")),
        "SomeRandomCo.NS"
    );
    // Already-qualified input stays untouched
    assert_eq!(normalize_symbol("HDFCBANK.NS"), "HDFCBANK.NS");
}
