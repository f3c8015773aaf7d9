use foodtruck_types::{FoodTruck, LocationId};

use crate::error::StoreResult;

/// Storage backend for food truck records.
///
/// All implementations must satisfy these invariants:
/// - Every stored record is keyed by its own `location_id`, which is positive.
/// - Every `(block, id)` pair in the block index has a primary record with
///   that id and that block.
/// - `create` for an id that is already present fails with
///   [`StoreError::DuplicateKey`] and never overwrites.
/// - Once `create` returns `Ok`, every later read observes the record through
///   both `get` and `get_by_block`.
///
/// [`StoreError::DuplicateKey`]: crate::error::StoreError::DuplicateKey
pub trait TruckStore: Send + Sync {
    /// Store a new record.
    ///
    /// Returns `Err(InvalidArgument)` if the id is not positive and
    /// `Err(DuplicateKey)` if the id is taken. Neither index changes on error.
    fn create(&self, truck: FoodTruck) -> StoreResult<()>;

    /// Look up a record by location id.
    ///
    /// Returns `None` for any id without a record, including non-positive ids.
    fn get(&self, location_id: LocationId) -> Option<FoodTruck>;

    /// All records in a block, ordered by location id.
    ///
    /// Unknown blocks yield an empty list.
    fn get_by_block(&self, block: &str) -> Vec<FoodTruck>;

    /// Number of stored records.
    fn count(&self) -> usize;

    /// Returns `true` if no records are stored.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Store an optional record, rejecting `None` as an invalid argument.
    ///
    /// Callers that receive records from untyped sources (request bodies,
    /// seed files) use this to report an absent candidate the same way as an
    /// invalid one.
    fn create_opt(&self, truck: Option<FoodTruck>) -> StoreResult<()> {
        match truck {
            Some(truck) => self.create(truck),
            None => Err(crate::error::StoreError::missing_record()),
        }
    }
}
