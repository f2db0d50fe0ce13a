//! Ride catalog error types.

use crate::domain::{RideId, ValidationError};

/// Errors from reading or mutating the ride catalog.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// A ride with this id is already in the catalog
    #[error("ride with id {0} already exists")]
    DuplicateId(RideId),

    /// The ride failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The catalog has never been loaded from its backing store
    #[error("ride catalog is unavailable")]
    Unavailable,

    /// Reading or writing the backing store failed
    #[error("catalog storage error: {message}")]
    Storage { message: String },
}
