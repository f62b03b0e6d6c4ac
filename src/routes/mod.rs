//! Route tables: resource CRUD under a prefix, plus the service-level routes.

pub mod common;
pub mod resource;
pub use common::{common_routes, not_found};
pub use resource::{resource_routes, RESOURCE_PREFIX};
