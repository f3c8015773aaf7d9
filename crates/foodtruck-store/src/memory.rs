use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use foodtruck_types::{FoodTruck, LocationId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::TruckStore;

/// The primary and block indexes, always updated together.
#[derive(Default)]
struct Indexes {
    by_id: HashMap<LocationId, FoodTruck>,
    by_block: HashMap<String, BTreeSet<LocationId>>,
}

/// In-memory, HashMap-based record store.
///
/// Both indexes live behind one `RwLock`. `create` holds the write lock for
/// the duplicate check and both inserts, so writers for the same id are
/// serialized and readers always see the indexes in agreement. Records are
/// cloned on read.
pub struct InMemoryTruckStore {
    indexes: RwLock<Indexes>,
}

impl InMemoryTruckStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            indexes: RwLock::new(Indexes::default()),
        }
    }

    /// Number of distinct blocks with at least one record.
    pub fn block_count(&self) -> usize {
        self.read().by_block.len()
    }

    // All checks in `create` run before the first mutation, so a panic while
    // the lock is held cannot leave the indexes half-updated. Recovering the
    // guard keeps a poisoned lock from turning lookups into errors.
    fn read(&self) -> RwLockReadGuard<'_, Indexes> {
        self.indexes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Indexes> {
        self.indexes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryTruckStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TruckStore for InMemoryTruckStore {
    fn create(&self, truck: FoodTruck) -> StoreResult<()> {
        let location_id = truck.location_id;
        if !location_id.is_valid() {
            return Err(StoreError::invalid_location(location_id));
        }

        let mut indexes = self.write();
        if indexes.by_id.contains_key(&location_id) {
            return Err(StoreError::DuplicateKey { location_id });
        }

        let block = truck.block.clone();
        indexes.by_id.insert(location_id, truck);
        indexes.by_block.entry(block).or_default().insert(location_id);
        drop(indexes);

        debug!(%location_id, "food truck created");
        Ok(())
    }

    fn get(&self, location_id: LocationId) -> Option<FoodTruck> {
        self.read().by_id.get(&location_id).cloned()
    }

    fn get_by_block(&self, block: &str) -> Vec<FoodTruck> {
        let indexes = self.read();
        let Some(ids) = indexes.by_block.get(block) else {
            return Vec::new();
        };
        // An id without a primary record is skipped rather than reported.
        ids.iter()
            .filter_map(|id| indexes.by_id.get(id))
            .filter(|truck| truck.block == block)
            .cloned()
            .collect()
    }

    fn count(&self) -> usize {
        self.read().by_id.len()
    }
}

impl std::fmt::Debug for InMemoryTruckStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let indexes = self.read();
        f.debug_struct("InMemoryTruckStore")
            .field("record_count", &indexes.by_id.len())
            .field("block_count", &indexes.by_block.len())
            .finish()
    }
}
