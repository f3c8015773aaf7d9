use foodtruck_types::LocationId;

/// Errors from record store operations.
///
/// Only `create` can fail. Lookups report a miss as an empty result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The candidate record was absent or carried an unusable identifier.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A record with the same location id is already stored.
    #[error("a food truck with location id {location_id} already exists")]
    DuplicateKey { location_id: LocationId },
}

impl StoreError {
    /// The error reported when no candidate record was supplied.
    pub fn missing_record() -> Self {
        Self::InvalidArgument {
            reason: "no food truck was provided".to_string(),
        }
    }

    /// The error reported for a non-positive location id.
    pub fn invalid_location(location_id: LocationId) -> Self {
        Self::InvalidArgument {
            reason: format!("location id must be positive, got {location_id}"),
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
