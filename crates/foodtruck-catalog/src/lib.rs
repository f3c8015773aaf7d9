//! Catalog service for food trucks.
//!
//! [`Catalog`] is the entry point applications call. It forwards create and
//! lookup requests to a shared [`TruckStore`], checking a cooperative
//! [`Cancellation`] signal before each call. The crate also carries the
//! catalog's TOML configuration and the JSON seed importer.

pub mod cancel;
pub mod config;
pub mod error;
pub mod outcome;
pub mod seed;
pub mod service;

pub use cancel::Cancellation;
pub use config::{CatalogConfig, LogConfig, SeedConfig};
pub use error::{CatalogError, CatalogResult};
pub use outcome::Outcome;
pub use seed::{ImportReport, Rejected};
pub use service::Catalog;

// Re-export key types
pub use foodtruck_store::{InMemoryTruckStore, StoreError, TruckStore};
pub use foodtruck_types::{FoodTruck, LocationId};
