use crate::modules::marketplace::{Marketplace, MarketplaceClient};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Static registry of marketplace clients, populated once at process start.
///
/// Adding a marketplace means registering an implementation of
/// `MarketplaceClient` here; the search engine is polymorphic over the trait
/// and never sees concrete marketplace details. There is no hot reload.
pub struct MarketplaceRegistry {
    clients: HashMap<Marketplace, Arc<dyn MarketplaceClient>>,
}

impl MarketplaceRegistry {
    pub fn new() -> Self {
        Self {
            clients: HashMap::new(),
        }
    }

    /// Register a client under its own marketplace id, replacing any previous
    /// registration for that marketplace.
    pub fn register(&mut self, client: Arc<dyn MarketplaceClient>) {
        let marketplace = client.marketplace();
        self.clients.insert(marketplace, client);
        info!("Registered marketplace client: {}", marketplace);
    }

    pub fn get(&self, marketplace: Marketplace) -> Option<Arc<dyn MarketplaceClient>> {
        self.clients.get(&marketplace).cloned()
    }

    pub fn is_registered(&self, marketplace: Marketplace) -> bool {
        self.clients.contains_key(&marketplace)
    }

    /// Registered marketplace ids in stable (sorted) order
    pub fn registered(&self) -> Vec<Marketplace> {
        let mut ids: Vec<_> = self.clients.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Intersect a caller selection with the registered clients, preserving a
    /// stable sorted order. Unregistered ids in the selection are ignored.
    pub fn select(&self, selection: &[Marketplace]) -> Vec<(Marketplace, Arc<dyn MarketplaceClient>)> {
        let mut selected: Vec<_> = selection
            .iter()
            .copied()
            .filter_map(|id| self.clients.get(&id).map(|client| (id, client.clone())))
            .collect();
        selected.sort_by_key(|(id, _)| *id);
        selected.dedup_by_key(|(id, _)| *id);
        selected
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl Default for MarketplaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
