use rocket::serde::{Deserialize, Serialize};
use serde::Deserializer;

/// One snapshot of the USD-BRL rate as reported upstream.
///
/// Every field is kept as the upstream text, monetary values included, so
/// the original formatting survives the round trip to the database and back
/// to the caller. Fields missing from the payload, or sent as `null`, decode
/// as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", default)]
pub struct Quotation {
    #[serde(deserialize_with = "opaque")]
    pub code: String,
    #[serde(deserialize_with = "opaque")]
    pub codein: String,
    #[serde(deserialize_with = "opaque")]
    pub name: String,
    #[serde(deserialize_with = "opaque")]
    pub high: String,
    #[serde(deserialize_with = "opaque")]
    pub low: String,
    #[serde(rename = "varBid", deserialize_with = "opaque")]
    pub var_bid: String,
    #[serde(rename = "pctChange", deserialize_with = "opaque")]
    pub pct_change: String,
    #[serde(deserialize_with = "opaque")]
    pub bid: String,
    #[serde(deserialize_with = "opaque")]
    pub ask: String,
    #[serde(deserialize_with = "opaque")]
    pub timestamp: String,
    #[serde(deserialize_with = "opaque")]
    pub create_date: String,
}

fn opaque<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Payload wrapper keyed by the pair code, e.g. `{"USDBRL": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct QuotationEnvelope {
    #[serde(rename = "USDBRL")]
    pub usd_brl: Quotation,
}
