//! In-memory record storage for the food truck catalog.
//!
//! The store keeps two coupled indexes:
//!
//! - a **primary index** mapping each [`LocationId`] to its [`FoodTruck`]
//! - a **secondary index** mapping each block name to the set of location
//!   ids in that block
//!
//! # Storage Backends
//!
//! All backends implement the [`TruckStore`] trait:
//!
//! - [`InMemoryTruckStore`] -- both indexes behind a single `RwLock`
//!
//! # Design Rules
//!
//! 1. Records are immutable once written. There is no update or delete.
//! 2. Creating an id is a compare-and-insert: exactly one creator wins.
//! 3. A failed create leaves both indexes untouched.
//! 4. A reader never sees a record in one index but not the other.
//! 5. Lookups never fail; a miss is `None` or an empty list.
//!
//! [`LocationId`]: foodtruck_types::LocationId
//! [`FoodTruck`]: foodtruck_types::FoodTruck

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryTruckStore;
pub use traits::TruckStore;
