use crate::{
    conf::ClientConf,
    model::{Error, QuotationEnvelope, Result},
};
use reqwest::{Client, StatusCode};
use std::{fs, io::Write};
use tracing::{info, warn};

/// Asks the server for a quotation once and writes the bid to the output
/// file. A non-200 answer is reported on `out` and is not an error.
pub async fn run<W: Write>(conf: &ClientConf, out: &mut W) -> Result<()> {
    match fetch(conf).await {
        Ok(envelope) => {
            let line = format!("Dolar: {}\n", envelope.usd_brl.bid);
            fs::write(&conf.output, line)?;
            info!(output = %conf.output.display(), bid = %envelope.usd_brl.bid, "Quotation written");
            writeln!(out, "Saved to {}", conf.output.display())?;
            Ok(())
        }
        Err(Error::NonOkResponse(status)) => {
            writeln!(out, "Received non-OK response: {}", status)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

pub async fn fetch(conf: &ClientConf) -> Result<QuotationEnvelope> {
    let client = Client::builder().timeout(conf.timeout()).build()?;
    let transport_error = |e: reqwest::Error| {
        let e = Error::from_transport(e, conf.timeout());
        if e.is_timeout() {
            warn!(url = %conf.url, timeout = ?conf.timeout(), "Request to server timed out");
        }
        e
    };

    let res = client.get(&conf.url).send().await.map_err(transport_error)?;

    if res.status() != StatusCode::OK {
        return Err(Error::NonOkResponse(res.status().as_u16()));
    }

    let body = res.bytes().await.map_err(transport_error)?;
    Ok(serde_json::from_slice(&body)?)
}
