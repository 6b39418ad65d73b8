use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, error, info};

use crate::models::{total_usd_value, DisplayRow, PriceTable, WalletBalance};
use crate::pipeline::MemoizedRows;
use crate::traits::{
    balance_source::BalanceSource,
    event_handler::RowsEventHandler,
    price_source::PriceSource,
};

/// Latest input snapshots and the rows derived from them
#[derive(Debug, Default)]
struct PageState {
    balances: Arc<Vec<WalletBalance>>,
    prices: Arc<PriceTable>,
    memo: MemoizedRows,
}

/// Wallet page: pulls balances and prices, derives rows, hands them to the renderer
#[derive(Clone)]
pub struct WalletPage {
    balance_source: Arc<dyn BalanceSource>,
    price_source: Arc<dyn PriceSource>,
    event_handler: Arc<dyn RowsEventHandler>,
    state: Arc<Mutex<PageState>>,
}

impl WalletPage {
    /// Create a new wallet page. The price table starts out empty.
    pub fn new(
        balance_source: Arc<dyn BalanceSource>,
        price_source: Arc<dyn PriceSource>,
        event_handler: Arc<dyn RowsEventHandler>,
    ) -> Self {
        Self {
            balance_source,
            price_source,
            event_handler,
            state: Arc::new(Mutex::new(PageState::default())),
        }
    }

    /// Fetch fresh snapshots and return the current rows
    ///
    /// A failed price fetch is reported to the handler and the previous
    /// table stays in effect. A failed balance fetch aborts the refresh.
    /// The handler only sees rows when they were actually recomputed.
    pub async fn refresh(&self) -> anyhow::Result<Arc<Vec<DisplayRow>>> {
        let balances = self
            .balance_source
            .fetch_balances()
            .await
            .context("Failed to fetch balances")?;

        let prices = match self.price_source.fetch_prices().await {
            Ok(table) => {
                debug!(
                    "Got {} prices at {}",
                    table.len(),
                    table.fetched_at().format("%Y-%m-%d %H:%M:%S UTC")
                );
                Some(table)
            }
            Err(e) => {
                error!("Error fetching prices: {:#}", e);
                self.event_handler.handle_error(&e).await;
                None
            }
        };

        let (rows, recomputed) = {
            let mut state = self.state.lock().await;
            state.balances = Arc::new(balances);
            if let Some(table) = prices {
                state.prices = Arc::new(table);
            }
            let PageState { balances, prices, memo } = &mut *state;
            memo.rows(balances, prices)
        };

        if recomputed {
            self.event_handler.handle_rows(&rows).await;
        } else {
            debug!("Inputs unchanged, keeping {} rows", rows.len());
        }

        Ok(rows)
    }

    /// Rows from the last refresh
    pub async fn rows(&self) -> Arc<Vec<DisplayRow>> {
        self.state.lock().await.memo.current()
    }

    /// Total USD value of the displayed rows
    pub async fn total_usd_value(&self) -> f64 {
        total_usd_value(&self.rows().await)
    }

    /// Number of times the rows have been rebuilt
    pub async fn recomputations(&self) -> u64 {
        self.state.lock().await.memo.recomputations()
    }

    /// Price table currently in effect
    pub async fn prices(&self) -> Arc<PriceTable> {
        self.state.lock().await.prices.clone()
    }

    /// Refresh on a fixed tick until the task is dropped
    pub async fn start_polling(&self, tick_interval_ms: u64) -> anyhow::Result<()> {
        info!("Starting polling with interval: {}ms", tick_interval_ms);

        let mut timedelta = Instant::now();

        loop {
            if let Err(e) = self.refresh().await {
                error!("Refresh failed: {:#}", e);
                self.event_handler.handle_error(&e).await;
            }

            let sleep_ms = tick_interval_ms as i128 - timedelta.elapsed().as_millis() as i128;
            if sleep_ms > 0 {
                tokio::time::sleep(Duration::from_millis(sleep_ms as u64)).await;
            }
            timedelta = Instant::now();
        }
    }
}
