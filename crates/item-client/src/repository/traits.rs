//! Repository Layer - Core Trait
//!
//! Abstract interface for item data access.
//! The browser implementation talks HTTP; tests use an in-memory one.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Item, NewItem};

/// CRUD operations against the item collection
///
/// Futures are not `Send`: in the browser every request runs on the
/// single UI thread.
#[async_trait(?Send)]
pub trait ItemRepository {
    /// List every item, in server order
    async fn list(&self) -> ApiResult<Vec<Item>>;

    /// Fetch one item by id
    async fn find_by_id(&self, id: u32) -> ApiResult<Item>;

    /// Create an item; the server assigns the id
    async fn create(&self, draft: &NewItem) -> ApiResult<Item>;

    /// Replace an existing item
    async fn update(&self, item: &Item) -> ApiResult<Item>;

    /// Delete an item by id
    async fn delete(&self, id: u32) -> ApiResult<()>;
}
