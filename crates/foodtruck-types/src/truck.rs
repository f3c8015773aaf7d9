use serde::{Deserialize, Serialize};

use crate::location::LocationId;

/// A single food truck record.
///
/// Records are immutable once stored. The JSON form uses camelCase field
/// names (`address`, `block`, `locationId`); fields missing from the input
/// take their default value, so a record without `locationId` deserializes
/// with id `0` and is rejected on create.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodTruck {
    /// Street address the truck operates from.
    pub address: String,
    /// Block the location belongs to. Several trucks may share a block.
    pub block: String,
    /// Unique identifier of the location.
    pub location_id: LocationId,
}

impl FoodTruck {
    pub fn new(
        location_id: impl Into<LocationId>,
        block: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            block: block.into(),
            location_id: location_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case() {
        let truck = FoodTruck::new(12, "0101", "1 Market St");
        let json = serde_json::to_value(&truck).unwrap();
        assert_eq!(json["locationId"], 12);
        assert_eq!(json["block"], "0101");
        assert_eq!(json["address"], "1 Market St");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let truck: FoodTruck = serde_json::from_str(r#"{"block":"A"}"#).unwrap();
        assert_eq!(truck.block, "A");
        assert_eq!(truck.address, "");
        assert_eq!(truck.location_id, LocationId::new(0));
        assert!(!truck.location_id.is_valid());
    }

    #[test]
    fn empty_object_is_default_record() {
        let truck: FoodTruck = serde_json::from_str("{}").unwrap();
        assert_eq!(truck, FoodTruck::default());
    }

    #[test]
    fn negative_location_id_deserializes() {
        let truck: FoodTruck =
            serde_json::from_str(r#"{"locationId":-3,"block":"B","address":"x"}"#).unwrap();
        assert_eq!(truck.location_id.get(), -3);
    }
}
