//! Persistence gateway for invoice documents.
//!
//! The external data store owns identity and persistence; this crate owns the
//! seam: the flattened submission record, the `DocumentStore` trait the rest
//! of the system talks to, an in-memory implementation for tests/dev, and the
//! summary read model behind the invoice list view.

pub mod gateway;
pub mod in_memory;
pub mod list;
pub mod record;

pub use gateway::{DocumentStore, StoreError};
pub use in_memory::InMemoryDocumentStore;
pub use list::{summarize, InvoiceSummary};
pub use record::{DocumentRow, NewDocument};
