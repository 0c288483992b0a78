//! Response models for the HTTP front-end
//!
//! This module defines the DTOs serialized into JSON response bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{GroupsResponse, HealthResponse, StatsResponse};
