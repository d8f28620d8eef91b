use crate::{
    model::{Error, QuotationEnvelope},
    provider::QuotationSource,
    repository::QuotationRepository,
};
use tracing::info;

/// Which step of the pipeline gave up.
#[derive(Debug)]
pub enum Failure {
    Fetch(Error),
    Save(Error),
}

/// Fetches a fresh quotation and appends it to the store. The two steps run
/// under their own deadlines; a failed save discards the fetched data.
pub async fn fetch_and_save(
    source: &dyn QuotationSource,
    repo: &QuotationRepository,
) -> Result<QuotationEnvelope, Failure> {
    let envelope = source.fetch().await.map_err(Failure::Fetch)?;
    let id = repo
        .insert(&envelope.usd_brl)
        .await
        .map_err(Failure::Save)?;
    info!(id, source = %source.name(), bid = %envelope.usd_brl.bid, "Quotation saved");
    Ok(envelope)
}
