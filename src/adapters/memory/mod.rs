//! In-memory adapters.
//!
//! - `InMemoryStore` - Implements every repository port over process-local state

mod store;

pub use store::InMemoryStore;
