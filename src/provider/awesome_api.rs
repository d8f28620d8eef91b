use crate::{
    conf::UpstreamConf,
    model::{Error, QuotationEnvelope, Result},
    provider::QuotationSource,
};
use reqwest::Client;
use tracing::{debug, warn};

pub struct AwesomeApi {
    conf: UpstreamConf,
    client: Client,
}

impl AwesomeApi {
    pub fn new(conf: UpstreamConf) -> Result<AwesomeApi> {
        let client = Client::builder().timeout(conf.timeout()).build()?;
        Ok(AwesomeApi { conf, client })
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        let e = Error::from_transport(e, self.conf.timeout());
        if e.is_timeout() {
            warn!(url = %self.conf.url, timeout = ?self.conf.timeout(), "Request to upstream timed out");
        }
        e
    }
}

#[rocket::async_trait]
impl QuotationSource for AwesomeApi {
    fn name(&self) -> String {
        "awesomeapi".into()
    }

    async fn fetch(&self) -> Result<QuotationEnvelope> {
        let res = self
            .client
            .get(&self.conf.url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        debug!(status = %res.status(), "Got upstream response");
        let body = res.bytes().await.map_err(|e| self.transport_error(e))?;
        Ok(serde_json::from_slice(&body)?)
    }
}
