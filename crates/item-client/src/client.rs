//! Items Client
//!
//! Collection operations used by the UI. Every successful mutation asks the
//! view to refresh, which re-fetches the whole list.

use chrono::{DateTime, Utc};

use crate::error::ApiResult;
use crate::models::{Item, ItemFields, NewItem};
use crate::repository::ItemRepository;

/// Refresh-on-mutation hook
///
/// Called once after each successful create, update or delete.
pub trait Refresh {
    fn refresh(&self);
}

/// Client over a repository with a refresh policy
pub struct ItemsClient<R, F> {
    repo: R,
    refresher: F,
}

impl<R: ItemRepository, F: Refresh> ItemsClient<R, F> {
    pub fn new(repo: R, refresher: F) -> Self {
        Self { repo, refresher }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Fetch the whole collection; failures are left to the caller
    pub async fn list_all(&self) -> ApiResult<Vec<Item>> {
        self.repo.list().await
    }

    pub async fn get_by_id(&self, id: u32) -> ApiResult<Item> {
        self.repo.find_by_id(id).await
    }

    /// Create an item stamped with the current time
    ///
    /// Failures are logged and yield `None`.
    pub async fn create(&self, fields: ItemFields) -> Option<Item> {
        self.create_at(fields, Utc::now()).await
    }

    pub async fn create_at(&self, fields: ItemFields, now: DateTime<Utc>) -> Option<Item> {
        let draft = NewItem::stamped(fields, now);
        match self.repo.create(&draft).await {
            Ok(item) => {
                log::info!("Created item {}", item.id);
                self.refresher.refresh();
                Some(item)
            }
            Err(e) => {
                log::error!("Error adding item: {}", e);
                None
            }
        }
    }

    /// Replace the editable fields, resubmitting the original `date_added`
    pub async fn update(&self, id: u32, fields: ItemFields, date_added: String) -> ApiResult<Item> {
        let item = Item::from_fields(id, fields, date_added);
        let updated = self.repo.update(&item).await?;
        log::info!("Updated item {}", id);
        self.refresher.refresh();
        Ok(updated)
    }

    /// Delete an item; failures are logged and swallowed
    pub async fn remove(&self, id: u32) {
        match self.repo.delete(id).await {
            Ok(()) => {
                log::info!("Deleted item {}", id);
                self.refresher.refresh();
            }
            Err(e) => log::error!("Error deleting item: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{Duration, TimeZone};

    use crate::date_format::{format_days_ago_at, iso_timestamp};
    use crate::error::ApiError;
    use crate::repository::MemoryItemRepository;

    #[derive(Clone, Default)]
    struct RefreshCounter(Rc<Cell<usize>>);

    impl RefreshCounter {
        fn count(&self) -> usize {
            self.0.get()
        }
    }

    impl Refresh for RefreshCounter {
        fn refresh(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn fields(title: &str) -> ItemFields {
        ItemFields {
            title: title.to_string(),
            description: "d".to_string(),
            author: "x".to_string(),
            img_link: "u".to_string(),
        }
    }

    fn setup(items: Vec<Item>) -> (ItemsClient<MemoryItemRepository, RefreshCounter>, RefreshCounter) {
        let counter = RefreshCounter::default();
        let client = ItemsClient::new(MemoryItemRepository::with_items(items), counter.clone());
        (client, counter)
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (client, refreshes) = setup(Vec::new());

        let created = client.create_at(fields("A"), now()).await.expect("create failed");
        assert_eq!(created.id, 1);
        assert_eq!(refreshes.count(), 1);

        let items = client.list_all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].fields(), fields("A"));
        assert_eq!(items[0].date_added, "2026-10-19T12:00:00.000Z");
    }

    #[tokio::test]
    async fn test_create_failure_returns_none_without_refresh() {
        let (client, refreshes) = setup(Vec::new());
        client.repository().set_offline(true);

        assert!(client.create_at(fields("A"), now()).await.is_none());
        assert_eq!(refreshes.count(), 0);
    }

    #[tokio::test]
    async fn test_remove_then_list() {
        let (client, refreshes) = setup(Vec::new());
        let first = client.create_at(fields("A"), now()).await.unwrap();
        let second = client.create_at(fields("B"), now()).await.unwrap();

        client.remove(first.id).await;
        assert_eq!(refreshes.count(), 3);

        let ids: Vec<u32> = client.list_all().await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![second.id]);
    }

    #[tokio::test]
    async fn test_remove_failure_is_swallowed() {
        let (client, refreshes) = setup(Vec::new());

        client.remove(42).await;
        assert_eq!(refreshes.count(), 0);
        assert_eq!(client.repository().calls(), vec!["DELETE /42"]);
    }

    #[tokio::test]
    async fn test_update_keeps_date_added() {
        let (client, refreshes) = setup(Vec::new());
        let created = client.create_at(fields("A"), now() - Duration::days(5)).await.unwrap();

        let before = client.get_by_id(created.id).await.unwrap();
        let updated = client
            .update(created.id, fields("A2"), before.date_added.clone())
            .await
            .unwrap();
        assert_eq!(updated.title, "A2");
        assert_eq!(refreshes.count(), 2);

        let after = client.get_by_id(created.id).await.unwrap();
        assert_eq!(after.fields(), fields("A2"));
        assert_eq!(after.date_added, before.date_added);
    }

    #[tokio::test]
    async fn test_update_failure_propagates() {
        let (client, refreshes) = setup(Vec::new());

        let result = client.update(9, fields("ghost"), "t".to_string()).await;
        assert_eq!(result, Err(ApiError::NotFound(9)));
        assert_eq!(refreshes.count(), 0);
    }

    #[tokio::test]
    async fn test_get_by_id_propagates_network_failure() {
        let (client, _) = setup(Vec::new());
        client.repository().set_offline(true);

        assert!(matches!(client.get_by_id(1).await, Err(ApiError::Network(_))));
        assert!(client.list_all().await.is_err());
    }

    #[tokio::test]
    async fn test_delete_from_listed_item() {
        let item = Item {
            id: 1,
            title: "A".to_string(),
            description: "d".to_string(),
            author: "x".to_string(),
            img_link: "u".to_string(),
            date_added: iso_timestamp(now() - Duration::days(2)),
        };
        let (client, refreshes) = setup(vec![item]);

        let listed = client.list_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(format_days_ago_at(&listed[0].date_added, now()), "2 days ago");

        client.remove(listed[0].id).await;
        assert_eq!(refreshes.count(), 1);
        assert!(client.list_all().await.unwrap().is_empty());
        assert_eq!(client.repository().calls(), vec!["GET /", "DELETE /1", "GET /"]);
    }
}
