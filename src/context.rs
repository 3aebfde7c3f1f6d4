//! Per-process context handed to every handler
//!
//! Holds the store, the notification bus and the id generator. Mutation
//! handlers hold the store's write lock for the whole mutation, cascade and
//! publication, so readers never see a half-applied change and subscribers
//! see events in mutation order.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::bus::NotificationBus;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::store::Store;

pub struct AppContext {
    pub store: RwLock<Store>,
    pub bus: NotificationBus,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppContext {
    /// Empty store with random UUID ids
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidGenerator))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: RwLock::new(Store::new()),
            bus: NotificationBus::new(),
            ids,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
