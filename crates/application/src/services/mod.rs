pub mod status_taxonomy;
pub mod transaction_builder;

pub use status_taxonomy::StatusTaxonomy;
pub use transaction_builder::TransactionBuilder;
