use anyhow::Result;
use colored::Colorize;
use nse_stock_api::{api_server_axum, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    println!("{}", "=".repeat(60).blue());
    println!("{}", "NSE Stock Data API Server".green().bold());
    println!("{}", "=".repeat(60).blue());
    println!();

    let port = config::get_port();
    println!("{} Serving NSE quotes on port {}", "ℹ".blue(), port);
    println!();

    api_server_axum::start_server(port).await
}
