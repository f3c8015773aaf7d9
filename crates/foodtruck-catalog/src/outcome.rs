use serde::Serialize;

use crate::error::CatalogResult;
use crate::FoodTruck;

/// How a catalog result is presented to a client.
///
/// Create failures of any kind become `Failed` with the error message; a
/// missing record and an empty block both become `NotFound`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "body", rename_all = "snake_case")]
pub enum Outcome<T> {
    Ok(T),
    NotFound,
    Failed(String),
}

impl Outcome<()> {
    pub fn from_create(result: CatalogResult<()>) -> Self {
        match result {
            Ok(()) => Self::Ok(()),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

impl Outcome<FoodTruck> {
    pub fn from_get(result: CatalogResult<Option<FoodTruck>>) -> Self {
        match result {
            Ok(Some(truck)) => Self::Ok(truck),
            Ok(None) => Self::NotFound,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

impl Outcome<Vec<FoodTruck>> {
    pub fn from_block(result: CatalogResult<Vec<FoodTruck>>) -> Self {
        match result {
            Ok(trucks) if trucks.is_empty() => Self::NotFound,
            Ok(trucks) => Self::Ok(trucks),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

impl<T> Outcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}
