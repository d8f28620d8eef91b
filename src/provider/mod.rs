mod provider;
pub use provider::QuotationSource;
mod awesome_api;
pub use awesome_api::AwesomeApi;
