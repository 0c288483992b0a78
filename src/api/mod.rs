//! API Module
//!
//! HTTP front-end exposing registered groups to local clients.
//!
//! # Endpoints
//! - `GET /api/:group/:key` - Fetch a value through the group
//! - `GET /stats/:group` - Group statistics
//! - `GET /groups` - Registered group names
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
