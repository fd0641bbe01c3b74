pub mod begin_query;
pub mod complete_query;
pub mod query_token;

pub use begin_query::BeginQueryUseCase;
pub use complete_query::CompleteQueryUseCase;
pub use query_token::QueryToken;
