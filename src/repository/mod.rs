pub mod quotation;
pub use quotation::QuotationRepository;
