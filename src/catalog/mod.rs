//! In-memory catalog shared by all handlers.
//!
//! # Contents
//! - `items`: ordered item list, indexed by position (PATCH edits in place)
//! - `ITEM_NAMES`: fixed names used to decide whether an item id exists
//! - `snapshots`: last item PUT under each integer id
//!
//! Nothing is persisted; state lives as long as the process.

use std::collections::BTreeMap;

use dashmap::DashMap;
use tokio::sync::RwLock;

use crate::models::{Item, ItemPatch};

const ITEM_NAMES: [&str; 3] = ["Foo", "Bar", "Baz"];

/// Shared catalog state.
#[derive(Debug)]
pub struct Catalog {
    items: RwLock<Vec<Item>>,
    snapshots: DashMap<i64, Item>,
}

impl Catalog {
    /// Create a catalog with the given items.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
            snapshots: DashMap::new(),
        }
    }

    /// The catalog the service starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Item::new("item1", 9.99).with_tags(["tag1", "tag2", "tag1"]),
            Item::new("item2", 19.99),
            Item::new("item3", 4.99),
            Item::new("item4", 1.99),
        ])
    }

    /// Snapshot of all items, in order.
    pub async fn items(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    /// Name of the known item at `item_id`, if there is one.
    pub fn item_name(&self, item_id: i64) -> Option<&'static str> {
        usize::try_from(item_id)
            .ok()
            .and_then(|i| ITEM_NAMES.get(i).copied())
    }

    /// Apply `patch` to the item at `index`, returning the updated item.
    pub async fn patch_item(&self, index: usize, patch: ItemPatch) -> Option<Item> {
        let mut items = self.items.write().await;
        let item = items.get_mut(index)?;
        item.apply(patch);
        Some(item.clone())
    }

    /// Store `item` under `item_id` and return every stored snapshot.
    pub fn put_snapshot(&self, item_id: i64, item: Item) -> BTreeMap<i64, Item> {
        self.snapshots.insert(item_id, item);
        self.snapshots
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
