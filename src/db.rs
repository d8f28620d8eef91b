use crate::conf::StoreConf;
use anyhow::Result;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use tracing::info;

pub type DbPool = Pool<SqliteConnectionManager>;

pub fn pool(conf: &StoreConf) -> Result<DbPool> {
    info!(db_url = %conf.db_url, "Opening database");
    let manager = SqliteConnectionManager::file(&conf.db_url);
    let pool = Pool::new(manager)?;
    init_schema(&*pool.get()?)?;
    Ok(pool)
}

/// Creates the `quotations` table unless it is already there.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS quotations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            code TEXT,
            codein TEXT,
            name TEXT,
            high TEXT,
            low TEXT,
            varBid TEXT,
            pctChange TEXT,
            bid TEXT,
            ask TEXT,
            timestamp TEXT,
            createDate TEXT
        )
        "#,
    )
}
