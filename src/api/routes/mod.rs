//! API route declarations (e.g., /api/v1/*)

pub mod namespace_routes;
pub mod session_routes;
