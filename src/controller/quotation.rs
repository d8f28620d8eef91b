use crate::{
    model::{ApiError, QuotationEnvelope},
    provider::QuotationSource,
    repository::QuotationRepository,
    service::quotation::{self, Failure},
};
use rocket::{get, serde::json::Json, State};

#[get("/cotacao")]
pub async fn get(
    source: &State<Box<dyn QuotationSource>>,
    repo: &State<QuotationRepository>,
) -> Result<Json<QuotationEnvelope>, ApiError> {
    match quotation::fetch_and_save(source.inner().as_ref(), repo.inner()).await {
        Ok(envelope) => Ok(Json(envelope)),
        Err(Failure::Fetch(e)) => Err(ApiError::new(500, "Error fetching quotation", e)),
        Err(Failure::Save(e)) => Err(ApiError::new(500, "Error saving quotation", e)),
    }
}
