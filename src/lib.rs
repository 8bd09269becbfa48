pub mod api_server_axum;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod resolver;
pub mod yahoo_client;

// Re-exports for convenience
pub use error::QuoteError;
pub use models::{QuoteSnapshot, StockQuote};
pub use yahoo_client::YahooClient;
