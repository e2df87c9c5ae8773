// Service exports
pub mod query;
pub mod reference;
pub mod store;

pub use query::{QueryService, DEFAULT_SEARCH_LIMIT};
pub use reference::{reference_universities, FallbackPolicy};
pub use store::{DocumentStoreClient, StoreError, UniversityStore};
