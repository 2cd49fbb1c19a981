//! # List Commands
//!
//! Shopping-list orchestration over an injected [`ListRepository`].
//!
//! ## List Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    List Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │ Selected │────►│ Current  │────►│ History  │────►│ Deleted  │       │
//! │  │  items   │     │  list    │     │          │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │              create_list  │   archive_list │   delete_list             │
//! │                           │◄───────────────┘                           │
//! │                  price_item  restore_list                               │
//! │                  toggle_checked                                         │
//! │                  add / remove items                                     │
//! │                                                                         │
//! │  Lists in history are read-only until restored.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sabji_core::types::{Category, ListItem, ListStatus, Mode, ShoppingList};
use sabji_core::validation::{validate_item_name, validate_list_name, validate_list_size};
use sabji_core::{Catalog, CoreError, Money};
use sabji_store::{generate_id, ListRepository};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::pricing::ValidatedObservation;
use crate::state::ConfigState;

/// What a list is expected to cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTotal {
    pub list_id: String,
    pub total: Money,
    pub total_formatted: String,
    pub priced_items: usize,
    pub unpriced_items: usize,
}

/// Shopping-list operations.
pub struct ListService<R: ListRepository> {
    repo: Arc<R>,
    catalog: &'static Catalog,
    config: ConfigState,
}

impl<R: ListRepository> ListService<R> {
    /// Creates a service over the built-in catalog.
    pub fn new(repo: Arc<R>, config: ConfigState) -> Self {
        Self::with_catalog(repo, Catalog::standard(), config)
    }

    pub fn with_catalog(repo: Arc<R>, catalog: &'static Catalog, config: ConfigState) -> Self {
        ListService {
            repo,
            catalog,
            config,
        }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Default list name, e.g. "List - 01/03/2024 09:30".
    pub fn default_list_name(&self, now: DateTime<Utc>) -> String {
        format!(
            "{} - {}",
            self.config.list_name_prefix,
            now.format("%d/%m/%Y %H:%M")
        )
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Creates a list with one unpriced item per selected catalog id.
    ///
    /// ## Behavior
    /// - Items keep the order they were selected in
    /// - Selecting the same id twice adds it once
    /// - Any unknown id rejects the whole selection
    pub async fn create_list(&self, selected_ids: &[String]) -> Result<ShoppingList, ApiError> {
        if selected_ids.is_empty() {
            return Err(CoreError::EmptySelection.into());
        }

        let mut items: Vec<ListItem> = Vec::with_capacity(selected_ids.len());
        for id in selected_ids {
            if items.iter().any(|i| i.catalog_id.as_deref() == Some(id.as_str())) {
                continue;
            }
            validate_list_size(items.len(), self.config.max_list_items)
                .map_err(|_| self.list_too_large())?;
            let entry = self.catalog.require(id)?;
            items.push(ListItem::from_catalog(generate_id(), entry));
        }

        let now = Utc::now();
        let list = ShoppingList::new(generate_id(), self.default_list_name(now), items, now);
        self.repo.insert(&list).await?;

        info!(id = %list.id, items = list.items.len(), "Created list");
        Ok(list)
    }

    pub async fn get_list(&self, list_id: &str) -> Result<ShoppingList, ApiError> {
        self.load(list_id).await
    }

    /// Lists in use, most recently touched first.
    pub async fn current_lists(&self) -> Result<Vec<ShoppingList>, ApiError> {
        Ok(self.repo.list(Some(ListStatus::Current)).await?)
    }

    /// Lists moved to history, most recently touched first.
    pub async fn history(&self) -> Result<Vec<ShoppingList>, ApiError> {
        Ok(self.repo.list(Some(ListStatus::History)).await?)
    }

    pub async fn rename_list(&self, list_id: &str, name: &str) -> Result<ShoppingList, ApiError> {
        let name = validate_list_name(name)?;
        self.edit(list_id, |list| {
            list.name = name;
            Ok(())
        })
        .await
    }

    pub async fn archive_list(&self, list_id: &str) -> Result<ShoppingList, ApiError> {
        let list = self.map_missing(list_id, self.repo.archive(list_id).await)?;
        info!(id = %list_id, "Moved list to history");
        Ok(list)
    }

    pub async fn restore_list(&self, list_id: &str) -> Result<ShoppingList, ApiError> {
        let list = self.map_missing(list_id, self.repo.restore(list_id).await)?;
        info!(id = %list_id, "Restored list from history");
        Ok(list)
    }

    /// Deletes a list for good.
    pub async fn delete_list(&self, list_id: &str) -> Result<(), ApiError> {
        if !self.repo.delete(list_id).await? {
            return Err(CoreError::ListNotFound(list_id.to_string()).into());
        }
        info!(id = %list_id, "Deleted list");
        Ok(())
    }

    // =========================================================================
    // Items
    // =========================================================================

    pub async fn add_catalog_item(
        &self,
        list_id: &str,
        catalog_id: &str,
    ) -> Result<ShoppingList, ApiError> {
        let entry = self.catalog.require(catalog_id)?;
        let max = self.config.max_list_items;
        self.edit(list_id, |list| {
            validate_list_size(list.items.len(), max)
                .map_err(|_| CoreError::ListTooLarge { max })?;
            list.items.push(ListItem::from_catalog(generate_id(), entry));
            Ok(())
        })
        .await
    }

    /// Adds an item that is not in the catalog.
    pub async fn add_custom_item(
        &self,
        list_id: &str,
        name: &str,
        category: Category,
    ) -> Result<ShoppingList, ApiError> {
        let name = validate_item_name(name)?;
        let max = self.config.max_list_items;
        self.edit(list_id, |list| {
            validate_list_size(list.items.len(), max)
                .map_err(|_| CoreError::ListTooLarge { max })?;
            list.items.push(ListItem::custom(generate_id(), name, category));
            Ok(())
        })
        .await
    }

    /// Records an observed price for an item and recomputes its rows.
    ///
    /// ## User Workflow
    /// ```text
    /// Tap item ──► enter "250 g for ₹12" ──► price_item(.., Weight, 250, 12)
    ///      │
    ///      ├── dairy priced by weight?  → VALIDATION_ERROR
    ///      ├── list in history?         → BUSINESS_LOGIC
    ///      └── OK → item.rows = 7 rows, list.updated_at = now
    /// ```
    pub async fn price_item(
        &self,
        list_id: &str,
        item_id: &str,
        mode: Mode,
        reference_magnitude: f64,
        price: f64,
    ) -> Result<ShoppingList, ApiError> {
        debug!(list_id = %list_id, item_id = %item_id, mode = %mode, "Pricing item");

        self.edit(list_id, |list| {
            let item = find_item(list, item_id)?;
            let observation =
                ValidatedObservation::new(item.category, mode, reference_magnitude, price)?;
            item.set_observation(observation.into_inner());
            Ok(())
        })
        .await
    }

    pub async fn clear_price(&self, list_id: &str, item_id: &str) -> Result<ShoppingList, ApiError> {
        self.edit(list_id, |list| {
            find_item(list, item_id)?.clear_price();
            Ok(())
        })
        .await
    }

    pub async fn toggle_checked(
        &self,
        list_id: &str,
        item_id: &str,
    ) -> Result<ShoppingList, ApiError> {
        self.edit(list_id, |list| {
            let item = find_item(list, item_id)?;
            item.is_checked = !item.is_checked;
            Ok(())
        })
        .await
    }

    pub async fn remove_item(&self, list_id: &str, item_id: &str) -> Result<ShoppingList, ApiError> {
        self.edit(list_id, |list| {
            let before = list.items.len();
            list.items.retain(|i| i.id != item_id);
            if list.items.len() == before {
                return Err(CoreError::ListItemNotFound {
                    list_id: list.id.clone(),
                    item_id: item_id.to_string(),
                });
            }
            Ok(())
        })
        .await
    }

    /// Sum of what the shopper expects to pay for every priced item.
    pub async fn total(&self, list_id: &str) -> Result<ListTotal, ApiError> {
        let list = self.load(list_id).await?;
        let total = list.total();
        let priced_items = list.items.iter().filter(|i| i.estimated_spend().is_some()).count();

        Ok(ListTotal {
            list_id: list.id,
            total,
            total_formatted: self.config.format_currency(total),
            priced_items,
            unpriced_items: list.items.len() - priced_items,
        })
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn load(&self, list_id: &str) -> Result<ShoppingList, ApiError> {
        self.repo
            .get(list_id)
            .await?
            .ok_or_else(|| CoreError::ListNotFound(list_id.to_string()).into())
    }

    /// Loads a current list, applies `change`, stamps it and writes it back.
    async fn edit<F>(&self, list_id: &str, change: F) -> Result<ShoppingList, ApiError>
    where
        F: FnOnce(&mut ShoppingList) -> Result<(), CoreError>,
    {
        let mut list = self.load(list_id).await?;
        if list.is_archived() {
            return Err(CoreError::ListArchived(list.id).into());
        }

        change(&mut list)?;
        list.touch(Utc::now());
        self.repo.update(&list).await?;
        Ok(list)
    }

    fn map_missing(
        &self,
        list_id: &str,
        result: sabji_store::StoreResult<ShoppingList>,
    ) -> Result<ShoppingList, ApiError> {
        match result {
            Ok(list) => Ok(list),
            Err(sabji_store::StoreError::NotFound { .. }) => {
                Err(CoreError::ListNotFound(list_id.to_string()).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list_too_large(&self) -> CoreError {
        CoreError::ListTooLarge {
            max: self.config.max_list_items,
        }
    }
}

fn find_item<'a>(list: &'a mut ShoppingList, item_id: &str) -> Result<&'a mut ListItem, CoreError> {
    let list_id = list.id.clone();
    list.item_mut(item_id).ok_or_else(|| CoreError::ListItemNotFound {
        list_id,
        item_id: item_id.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use pretty_assertions::assert_eq;
    use sabji_store::MemoryListRepository;

    fn service() -> ListService<MemoryListRepository> {
        ListService::new(Arc::new(MemoryListRepository::new()), ConfigState::default())
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_create_list_keeps_selection_order() {
        let svc = service();
        let list = svc.create_list(&ids(&["d1", "v1", "k3", "v1"])).await.unwrap();

        let catalog_ids: Vec<Option<&str>> =
            list.items.iter().map(|i| i.catalog_id.as_deref()).collect();
        assert_eq!(catalog_ids, vec![Some("d1"), Some("v1"), Some("k3")]);
        assert!(list.name.starts_with("List - "));
        assert_eq!(list.status, ListStatus::Current);
        assert!(list.items.iter().all(|i| !i.is_priced()));
        assert_eq!(svc.current_lists().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_list_rejects_empty_and_unknown() {
        let svc = service();

        let err = svc.create_list(&[]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = svc.create_list(&ids(&["v1", "nope"])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(svc.current_lists().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_list_respects_configured_limit() {
        let config = ConfigState {
            max_list_items: 2,
            ..ConfigState::default()
        };
        let svc = ListService::new(Arc::new(MemoryListRepository::new()), config);

        let err = svc.create_list(&ids(&["v1", "v2", "v3"])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        let list = svc.create_list(&ids(&["v1", "v2"])).await.unwrap();
        let err = svc.add_custom_item(&list.id, "Jaggery", Category::Kirana).await.unwrap_err();
        assert_eq!(err.message, "List cannot have more than 2 items");
    }

    #[tokio::test]
    async fn test_default_list_name() {
        use chrono::TimeZone;
        let svc = service();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        assert_eq!(svc.default_list_name(at), "List - 01/03/2024 09:05");
    }

    #[tokio::test]
    async fn test_price_item_and_total() {
        let svc = service();
        let list = svc.create_list(&ids(&["v1", "d1", "f2"])).await.unwrap();
        let (tomato, milk, banana) = (
            list.items[0].id.clone(),
            list.items[1].id.clone(),
            list.items[2].id.clone(),
        );

        let list = svc
            .price_item(&list.id, &tomato, Mode::Weight, 250.0, 12.0)
            .await
            .unwrap();
        let rows = list.item(&tomato).unwrap().rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows.last().unwrap().price, 48.0);

        svc.price_item(&list.id, &milk, Mode::Liter, 500.0, 30.0).await.unwrap();
        svc.price_item(&list.id, &banana, Mode::Dozen, 2.0, 60.0).await.unwrap();

        // 12 + 30 + 60 × 2
        let total = svc.total(&list.id).await.unwrap();
        assert_eq!(total.total, Money::from_rupees(162));
        assert_eq!(total.total_formatted, "₹162.00");
        assert_eq!(total.priced_items, 3);
        assert_eq!(total.unpriced_items, 0);
    }

    #[tokio::test]
    async fn test_price_item_enforces_strict_dairy() {
        let svc = service();
        let list = svc.create_list(&ids(&["d1"])).await.unwrap();
        let milk = list.items[0].id.clone();

        let err = svc
            .price_item(&list.id, &milk, Mode::Weight, 500.0, 30.0)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Dairy products must use Liter as base unit");

        let stored = svc.get_list(&list.id).await.unwrap();
        assert!(!stored.items[0].is_priced());
    }

    #[tokio::test]
    async fn test_price_item_rejects_unbounded_price() {
        let svc = service();
        let list = svc.create_list(&ids(&["k1", "v1"])).await.unwrap();
        let (rice, tomato) = (list.items[0].id.clone(), list.items[1].id.clone());

        let err = svc
            .price_item(&list.id, &rice, Mode::Packet, 5.0, 1e16)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        svc.price_item(&list.id, &tomato, Mode::Weight, 1000.0, 40.0).await.unwrap();
        let total = svc.total(&list.id).await.unwrap();
        assert_eq!(total.total, Money::from_rupees(40));
        assert_eq!(total.priced_items, 1);
        assert_eq!(total.unpriced_items, 1);
    }

    #[tokio::test]
    async fn test_item_edits() {
        let svc = service();
        let list = svc.create_list(&ids(&["v1"])).await.unwrap();

        let list = svc.add_catalog_item(&list.id, "k1").await.unwrap();
        let list = svc
            .add_custom_item(&list.id, "  Gur  ", Category::Kirana)
            .await
            .unwrap();
        assert_eq!(list.items.len(), 3);
        assert_eq!(list.items[2].name, "Gur");
        assert_eq!(list.items[2].catalog_id, None);

        let custom = list.items[2].id.clone();
        let list = svc.toggle_checked(&list.id, &custom).await.unwrap();
        assert!(list.item(&custom).unwrap().is_checked);

        let list = svc
            .price_item(&list.id, &custom, Mode::Packet, 2.0, 45.0)
            .await
            .unwrap();
        assert!(list.item(&custom).unwrap().is_priced());
        let list = svc.clear_price(&list.id, &custom).await.unwrap();
        assert!(!list.item(&custom).unwrap().is_priced());

        let list = svc.remove_item(&list.id, &custom).await.unwrap();
        assert_eq!(list.items.len(), 2);

        let err = svc.remove_item(&list.id, &custom).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let list = svc.rename_list(&list.id, "Sunday bazaar").await.unwrap();
        assert_eq!(list.name, "Sunday bazaar");
        assert!(svc.rename_list(&list.id, "   ").await.is_err());
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let svc = service();
        let list = svc.create_list(&ids(&["v1"])).await.unwrap();
        let item = list.items[0].id.clone();

        let archived = svc.archive_list(&list.id).await.unwrap();
        assert_eq!(archived.status, ListStatus::History);
        assert_eq!(svc.history().await.unwrap().len(), 1);
        assert!(svc.current_lists().await.unwrap().is_empty());

        let err = svc
            .price_item(&list.id, &item, Mode::Weight, 1000.0, 40.0)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        svc.restore_list(&list.id).await.unwrap();
        svc.price_item(&list.id, &item, Mode::Weight, 1000.0, 40.0)
            .await
            .unwrap();

        svc.delete_list(&list.id).await.unwrap();
        let err = svc.get_list(&list.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(svc.delete_list(&list.id).await.unwrap_err().code, ErrorCode::NotFound);
        assert_eq!(svc.archive_list(&list.id).await.unwrap_err().code, ErrorCode::NotFound);
    }
}
