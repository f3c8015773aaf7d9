//! Foundation types for the food truck catalog.
//!
//! Every other catalog crate depends on `foodtruck-types`.
//!
//! # Key Types
//!
//! - [`FoodTruck`] -- A single food truck record (address, block, location)
//! - [`LocationId`] -- The numeric identifier a record is keyed by
//! - [`TypeError`] -- Failures when parsing identifiers from text

pub mod error;
pub mod location;
pub mod truck;

pub use error::TypeError;
pub use location::LocationId;
pub use truck::FoodTruck;
