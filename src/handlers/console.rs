use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::{total_usd_value, DisplayRow};
use crate::traits::event_handler::RowsEventHandler;
use crate::utils::format_usd;

/// Console logging handler, renders one line per row
pub struct ConsoleRowsHandler;

impl ConsoleRowsHandler {
    /// Create a new console handler
    pub fn new() -> Self {
        Self
    }

    fn render_row(row: &DisplayRow) -> String {
        let value = if row.price_known {
            format_usd(row.usd_value)
        } else {
            "price unknown".to_string()
        };
        format!(
            "[{}] {} {} ({})",
            row.key,
            row.formatted_amount,
            row.currency,
            value
        )
    }
}

impl Default for ConsoleRowsHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RowsEventHandler for ConsoleRowsHandler {
    async fn handle_rows(&self, rows: &[DisplayRow]) {
        info!("{}", "=".repeat(80));
        info!("WALLET BALANCES");
        info!("{}", "-".repeat(80));

        if rows.is_empty() {
            info!("No balances to display");
        }
        for row in rows {
            info!("{}", Self::render_row(row));
        }

        info!("{}", "-".repeat(80));
        info!("Total Value: {}", format_usd(total_usd_value(rows)));
        info!("{}", "=".repeat(80));
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        warn!("Wallet page error: {:#}", error);
    }
}
