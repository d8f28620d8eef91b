use crate::{
    db::DbPool,
    model::{Error, Quotation, Result},
};
use rusqlite::params;
use std::time::Duration;
use tokio::{
    sync::oneshot,
    task,
    time::{timeout_at, Instant},
};
use tracing::warn;

#[derive(Clone)]
pub struct QuotationRepository {
    pool: DbPool,
    timeout: Duration,
}

impl QuotationRepository {
    pub fn new(pool: DbPool, timeout: Duration) -> QuotationRepository {
        QuotationRepository { pool, timeout }
    }

    /// Appends a row and returns its id. The deadline covers the connection
    /// checkout as well as the statement itself.
    pub async fn insert(&self, row: &Quotation) -> Result<i64> {
        let deadline = Instant::now() + self.timeout;
        let pool = self.pool.clone();
        let row = row.clone();
        let (interrupt_tx, mut interrupt_rx) = oneshot::channel();

        let insert = task::spawn_blocking(move || -> Result<i64> {
            let conn = pool.get()?;
            let _ = interrupt_tx.send(conn.get_interrupt_handle());
            let query = "INSERT INTO quotations (code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, createDate) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
            let params = params![
                &row.code,
                &row.codein,
                &row.name,
                &row.high,
                &row.low,
                &row.var_bid,
                &row.pct_change,
                &row.bid,
                &row.ask,
                &row.timestamp,
                &row.create_date,
            ];
            conn.execute(query, params)?;
            Ok(conn.last_insert_rowid())
        });

        match timeout_at(deadline, insert).await {
            Ok(res) => res?,
            Err(_) => {
                if let Ok(handle) = interrupt_rx.try_recv() {
                    handle.interrupt();
                }
                warn!(timeout = ?self.timeout, "Database operation timed out");
                Err(Error::Timeout(self.timeout))
            }
        }
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self.pool.get()?;
        let count = conn.query_row("SELECT count(*) FROM quotations", [], |row| row.get(0))?;
        Ok(count)
    }
}
