use crate::{
    conf::StoreConf,
    db,
    model::{Quotation, QuotationEnvelope, Result},
    prepare,
    provider::QuotationSource,
    repository::QuotationRepository,
};
use rocket::local::blocking::Client;
use rusqlite::{params, Connection};
use std::{
    io::{Read, Write},
    net::TcpListener,
    sync::atomic::{AtomicUsize, Ordering},
    thread,
    time::Duration,
};

static COUNTER: AtomicUsize = AtomicUsize::new(1);

pub static UPSTREAM_BODY: &str = r#"{"USDBRL":{"code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro","high":"5.1495","low":"5.1262","varBid":"0.0047","pctChange":"0.09","bid":"5.1402","ask":"5.1412","timestamp":"1715366501","create_date":"2024-05-10 15:41:41"}}"#;

pub fn quotation() -> Quotation {
    Quotation {
        code: "USD".into(),
        codein: "BRL".into(),
        name: "Dólar Americano/Real Brasileiro".into(),
        high: "5.1495".into(),
        low: "5.1262".into(),
        var_bid: "0.0047".into(),
        pct_change: "0.09".into(),
        bid: "5.1402".into(),
        ask: "5.1412".into(),
        timestamp: "1715366501".into(),
        create_date: "2024-05-10 15:41:41".into(),
    }
}

pub fn db_url() -> String {
    let db_name = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("file:testdb_{}?mode=memory&cache=shared", db_name)
}

/// A repository over a fresh in-memory database, plus a side connection
/// that keeps the database alive and lets tests inspect it.
pub fn repository() -> (QuotationRepository, Connection) {
    let conf = StoreConf {
        db_url: db_url(),
        timeout_ms: 1000,
    };
    let pool = db::pool(&conf).unwrap();
    let conn = Connection::open(&conf.db_url).unwrap();
    (QuotationRepository::new(pool, conf.timeout()), conn)
}

pub fn client(source: StubSource) -> (Client, Connection) {
    let (repo, conn) = repository();
    (client_with(source, repo), conn)
}

pub fn client_with(source: StubSource, repo: QuotationRepository) -> Client {
    Client::untracked(prepare(rocket::build(), Box::new(source), repo)).unwrap()
}

pub fn select_all(conn: &Connection) -> rusqlite::Result<Vec<(i64, Quotation)>> {
    let mut stmt = conn.prepare(
        "SELECT id, code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, createDate FROM quotations ORDER BY id",
    )?;
    let rows = stmt.query_map(params![], |row| {
        Ok((
            row.get(0)?,
            Quotation {
                code: row.get(1)?,
                codein: row.get(2)?,
                name: row.get(3)?,
                high: row.get(4)?,
                low: row.get(5)?,
                var_bid: row.get(6)?,
                pct_change: row.get(7)?,
                bid: row.get(8)?,
                ask: row.get(9)?,
                timestamp: row.get(10)?,
                create_date: row.get(11)?,
            },
        ))
    })?;
    rows.collect()
}

pub struct StubSource {
    fetch: Box<dyn Fn() -> Result<QuotationEnvelope> + Send + Sync>,
}

impl StubSource {
    pub fn ok() -> StubSource {
        StubSource {
            fetch: Box::new(|| {
                Ok(QuotationEnvelope {
                    usd_brl: quotation(),
                })
            }),
        }
    }

    pub fn err(error: fn() -> crate::model::Error) -> StubSource {
        StubSource {
            fetch: Box::new(move || Err(error())),
        }
    }
}

#[rocket::async_trait]
impl QuotationSource for StubSource {
    fn name(&self) -> String {
        "stub".into()
    }

    async fn fetch(&self) -> Result<QuotationEnvelope> {
        (self.fetch)()
    }
}

/// Serves a single canned HTTP response and returns the URL to hit.
pub fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{}/json/last/USD-BRL", addr)
}

/// Accepts a connection and never answers.
pub fn stall() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(Duration::from_secs(5));
            drop(stream);
        }
    });
    format!("http://{}/json/last/USD-BRL", addr)
}

/// A URL nobody listens on.
pub fn refused() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/json/last/USD-BRL", addr)
}
