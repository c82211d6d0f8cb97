//! REST Item Repository
//!
//! `ItemRepository` over a conventional JSON collection endpoint:
//! GET/POST on the collection, GET/PUT/DELETE on `{base}/{id}`.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use super::traits::ItemRepository;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Item, NewItem};

/// HTTP-backed repository
#[derive(Debug, Clone)]
pub struct RestItemRepository {
    config: ApiConfig,
    http: Client,
}

impl RestItemRepository {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Map 404 to `NotFound` and any other non-success status to `Status`
fn check_status(response: Response, id: Option<u32>) -> ApiResult<Response> {
    match (response.status(), id) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(ApiError::NotFound(id)),
        _ => Ok(response.error_for_status()?),
    }
}

#[async_trait(?Send)]
impl ItemRepository for RestItemRepository {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        let response = self.http.get(self.config.collection_url()).send().await?;
        let items: Vec<Item> = check_status(response, None)?.json().await?;
        Ok(items)
    }

    async fn find_by_id(&self, id: u32) -> ApiResult<Item> {
        let response = self.http.get(self.config.item_url(id)).send().await?;
        let item: Item = check_status(response, Some(id))?.json().await?;
        Ok(item)
    }

    async fn create(&self, draft: &NewItem) -> ApiResult<Item> {
        let response = self
            .http
            .post(self.config.collection_url())
            .json(draft)
            .send()
            .await?;
        let item: Item = check_status(response, None)?.json().await?;
        Ok(item)
    }

    async fn update(&self, item: &Item) -> ApiResult<Item> {
        let response = self
            .http
            .put(self.config.item_url(item.id))
            .json(item)
            .send()
            .await?;
        let updated: Item = check_status(response, Some(item.id))?.json().await?;
        Ok(updated)
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let response = self.http.delete(self.config.item_url(id)).send().await?;
        // Body is unspecified, only the status matters
        check_status(response, Some(id))?;
        Ok(())
    }
}
