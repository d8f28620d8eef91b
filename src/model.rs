mod api_error;
pub use api_error::ApiError;
mod error;
pub use error::{Error, Result};
mod quotation;
pub use quotation::{Quotation, QuotationEnvelope};
