use std::sync::Arc;

use foodtruck_store::{InMemoryTruckStore, TruckStore};
use foodtruck_types::{FoodTruck, LocationId};
use tracing::warn;

use crate::cancel::Cancellation;
use crate::error::{CatalogError, CatalogResult};

/// High-level food truck catalog API.
///
/// Cloning a `Catalog` yields another handle to the same store.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn TruckStore>,
}

impl Catalog {
    /// A catalog over a new, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryTruckStore::new()))
    }

    /// A catalog over an existing store handle.
    pub fn with_store(store: Arc<dyn TruckStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn TruckStore> {
        &self.store
    }

    /// Create a food truck. `None` is rejected as an invalid argument.
    pub fn create(&self, truck: Option<FoodTruck>, cancel: &Cancellation) -> CatalogResult<()> {
        cancel.check()?;
        let location_id = truck.as_ref().map(|t| t.location_id);
        self.store.create_opt(truck).map_err(|e| {
            warn!(location_id = ?location_id.map(|id| id.get()), error = %e, "food truck rejected");
            CatalogError::from(e)
        })
    }

    /// Get the food truck at a location, if any.
    pub fn get(
        &self,
        location_id: LocationId,
        cancel: &Cancellation,
    ) -> CatalogResult<Option<FoodTruck>> {
        cancel.check()?;
        Ok(self.store.get(location_id))
    }

    /// Get every food truck in a block. Unknown blocks yield an empty list.
    pub fn get_by_block(&self, block: &str, cancel: &Cancellation) -> CatalogResult<Vec<FoodTruck>> {
        cancel.check()?;
        Ok(self.store.get_by_block(block))
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("record_count", &self.store.count())
            .finish()
    }
}
