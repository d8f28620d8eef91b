use crate::model::{QuotationEnvelope, Result};

/// Anything able to produce a fresh USD-BRL quotation on demand.
#[rocket::async_trait]
pub trait QuotationSource: Send + Sync {
    fn name(&self) -> String;

    async fn fetch(&self) -> Result<QuotationEnvelope>;
}
