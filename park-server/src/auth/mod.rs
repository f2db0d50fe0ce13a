//! Staff authentication for catalog changes.

mod error;
mod staff;
mod token;

pub use error::AuthError;
pub use staff::{Role, StaffDirectory};
pub use token::{Claims, TokenSigner};
