//! Item Client
//!
//! Domain layer for the item cards frontend:
//! - models: the Item entity and its wire payloads
//! - date_format: relative "days ago" labels
//! - repository: data access over the REST collection endpoint
//! - client: collection operations with refresh-on-mutation
//!
//! Nothing here touches the DOM, so it is tested natively.

mod client;
mod config;
mod date_format;
mod error;
mod models;
mod repository;

pub use client::{ItemsClient, Refresh};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use date_format::{format_days_ago, format_days_ago_at, iso_timestamp, INVALID_DATE};
pub use error::{ApiError, ApiResult};
pub use models::{Item, ItemFields, NewItem};
pub use repository::{ItemRepository, RestItemRepository};
#[cfg(any(test, feature = "test-support"))]
pub use repository::MemoryItemRepository;
