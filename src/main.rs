use std::sync::Arc;

use tracing::{error, info};

use wallet_balance_tracker::{
    Config, ConsoleRowsHandler, FileBalanceSource, HttpPriceSource, WalletPage,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(config.log_level)
        .with_file(true)
        .with_line_number(true)
        .init();

    tokio::runtime::Runtime::new()?.block_on(async {
        info!("Initializing wallet balance tracker v{}", wallet_balance_tracker::VERSION);
        info!("Prices URL: {}", config.prices_url);
        info!("Balances file: {}", config.balances_file.display());

        let page = WalletPage::new(
            Arc::new(FileBalanceSource::new(config.balances_file.clone())),
            Arc::new(HttpPriceSource::new(config.prices_url.clone())),
            Arc::new(ConsoleRowsHandler::new()),
        );

        let page_for_task = page.clone();
        let tick_interval = config.tick_interval_ms;
        let polling = tokio::spawn(async move {
            if let Err(e) = page_for_task.start_polling(tick_interval).await {
                error!("Polling error: {}", e);
            }
        });

        info!("Wallet balance tracker is running. Press Ctrl+C to stop.");

        tokio::signal::ctrl_c().await?;
        polling.abort();

        info!(
            "Shutting down with {} rows worth ${:.2}",
            page.rows().await.len(),
            page.total_usd_value().await
        );

        Ok(())
    })
}
