//! Web layer for the park planner.
//!
//! Provides HTTP endpoints for planning a visit, browsing and extending the
//! ride catalog, and staff login.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
