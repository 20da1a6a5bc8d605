//! Document store core: types, cursor logic, and the concurrent store.

pub mod cursor;
pub mod store;
pub mod types;

pub use cursor::Cursor;
pub use store::{DocumentStore, StoreError};
pub use types::{Document, DocumentId, HealthSummary};
