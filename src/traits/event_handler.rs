use async_trait::async_trait;

use crate::models::DisplayRow;

/// Rendering side of the wallet page
#[async_trait]
pub trait RowsEventHandler: Send + Sync {
    /// Called with the full row list every time it is recomputed
    async fn handle_rows(&self, rows: &[DisplayRow]);

    /// Handle error
    async fn handle_error(&self, error: &anyhow::Error);
}
