//! Resource API: single-table CRUD REST service over SQLite.

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use app::build_app;
pub use config::{Settings, StoreLocation};
pub use error::{AppError, ConfigError, Operation};
pub use model::{NewResource, Resource, ResourceChanges, ResourceFilters};
pub use routes::RESOURCE_PREFIX;
pub use service::ResourceRepository;
pub use state::AppState;
pub use store::{Store, StoreError};
