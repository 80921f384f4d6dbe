//! # Collection Store
//!
//! The local mirror of the remote product collection. The store is an
//! ordered sequence owned exclusively by the
//! [`DashboardController`](crate::controller::DashboardController); nothing
//! else mutates it, which is what lets the controller update it without any
//! locking.
//!
//! The store is only touched after a remote call succeeded: wholesale
//! replacement on load, append on create, in-place swap on edit, filter on
//! delete. A failed remote call never reaches these methods.

use crate::model::{Product, ProductId};
use tracing::warn;

/// Ordered, in-memory mirror of the remote product collection.
#[derive(Debug, Default)]
pub struct CollectionStore {
    items: Vec<Product>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire contents with the result of a remote read.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.items = products;
    }

    /// Appends a product to the end of the sequence.
    ///
    /// No dedup check is performed against `id`; the remote collection is
    /// the authority on identity.
    pub fn insert(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Swaps the element with a matching `id` for `product`, keeping its
    /// position. A miss is a silent no-op toward the caller, logged here.
    pub fn replace(&mut self, id: &ProductId, product: Product) {
        match self.items.iter_mut().find(|p| &p.id == id) {
            Some(slot) => *slot = product,
            None => warn!(%id, "Replace target not in store"),
        }
    }

    /// Filters out the element with a matching `id`; no-op if absent.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|p| &p.id != id);
        if self.items.len() == before {
            warn!(%id, "Remove target not in store");
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.items.iter().find(|p| &p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product::new(
            ProductId::from(id),
            name,
            "desc",
            9.99,
            "misc",
            "https://example.com/p.png",
        )
    }

    #[test]
    fn insert_appends_in_order() {
        let mut store = CollectionStore::new();
        store.insert(product("a", "first"));
        store.insert(product("b", "second"));

        let ids: Vec<_> = store.products().iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn insert_does_not_dedup_ids() {
        let mut store = CollectionStore::new();
        store.insert(product("a", "first"));
        store.insert(product("a", "again"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_swaps_in_place_and_keeps_order() {
        let mut store = CollectionStore::new();
        store.replace_all(vec![product("a", "a"), product("b", "b"), product("c", "c")]);

        store.replace(&ProductId::from("b"), product("b", "renamed"));

        assert_eq!(store.len(), 3);
        let names: Vec<_> = store.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "renamed", "c"]);
    }

    #[test]
    fn replace_missing_id_is_a_no_op() {
        let mut store = CollectionStore::new();
        store.insert(product("a", "a"));
        store.replace(&ProductId::from("zzz"), product("zzz", "ghost"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.products()[0].name, "a");
    }

    #[test]
    fn remove_filters_exactly_one_and_preserves_order() {
        let mut store = CollectionStore::new();
        store.replace_all(vec![product("a", "a"), product("b", "b"), product("c", "c")]);

        store.remove(&ProductId::from("b"));

        let ids: Vec<_> = store.products().iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let mut store = CollectionStore::new();
        store.insert(product("a", "a"));
        store.remove(&ProductId::from("zzz"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_all_overwrites_previous_contents() {
        let mut store = CollectionStore::new();
        store.insert(product("stale", "stale"));
        store.replace_all(vec![product("a", "a"), product("b", "b")]);

        assert_eq!(store.len(), 2);
        assert!(store.get(&ProductId::from("stale")).is_none());
    }
}
