//! In-Memory Item Repository
//!
//! Test double for the collection endpoint. Assigns ids like the server,
//! records every call, and can be switched into a failing mode.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::traits::ItemRepository;
use crate::error::{ApiError, ApiResult};
use crate::models::{Item, NewItem};

#[derive(Debug, Default)]
pub struct MemoryItemRepository {
    items: RefCell<Vec<Item>>,
    next_id: Cell<u32>,
    calls: RefCell<Vec<String>>,
    offline: Cell<bool>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Default::default()
        }
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        let next = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let repo = Self::new();
        repo.next_id.set(next);
        *repo.items.borrow_mut() = items;
        repo
    }

    /// Make every following call fail with a network error
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.offline.get() {
            return Err(ApiError::Network("offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ItemRepository for MemoryItemRepository {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        self.record("GET /".to_string())?;
        Ok(self.items.borrow().clone())
    }

    async fn find_by_id(&self, id: u32) -> ApiResult<Item> {
        self.record(format!("GET /{}", id))?;
        self.items
            .borrow()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(ApiError::NotFound(id))
    }

    async fn create(&self, draft: &NewItem) -> ApiResult<Item> {
        self.record("POST /".to_string())?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let item = Item::from_fields(id, draft.fields.clone(), draft.date_added.clone());
        self.items.borrow_mut().push(item.clone());
        Ok(item)
    }

    async fn update(&self, item: &Item) -> ApiResult<Item> {
        self.record(format!("PUT /{}", item.id))?;
        let mut items = self.items.borrow_mut();
        let slot = items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or(ApiError::NotFound(item.id))?;
        *slot = item.clone();
        Ok(item.clone())
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.record(format!("DELETE /{}", id))?;
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(ApiError::NotFound(id));
        }
        Ok(())
    }
}
