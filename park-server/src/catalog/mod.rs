//! Ride catalog: the shared, read-mostly set of park rides.
//!
//! Plan requests read an immutable [`CatalogSnapshot`]; adding a ride
//! publishes a new snapshot without disturbing readers of the old one.

mod defaults;
mod error;
mod ride_catalog;
mod snapshot;
mod store;

pub use defaults::default_rides;
pub use error::CatalogError;
pub use ride_catalog::{CatalogHealth, RideCatalog};
pub use snapshot::CatalogSnapshot;
pub use store::CatalogStore;
