//! Repository Layer
//!
//! Data access for the item collection.
//! - traits: the abstract `ItemRepository` interface
//! - rest: implementation over the REST collection endpoint
//! - memory: in-memory implementation for tests (`test-support` feature)

mod traits;
mod rest;

#[cfg(any(test, feature = "test-support"))]
mod memory;

pub use traits::ItemRepository;
pub use rest::RestItemRepository;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryItemRepository;
