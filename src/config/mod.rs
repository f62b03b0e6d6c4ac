//! Service configuration from the process environment.

mod settings;
pub use settings::{Settings, StoreLocation, DB_FILE_NAME, DEFAULT_BODY_LIMIT, DEFAULT_PORT};
