//! Shared application state for all routes.

use crate::service::ResourceRepository;
use crate::store::Store;

#[derive(Clone, Debug)]
pub struct AppState {
    pub resources: ResourceRepository,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState {
            resources: ResourceRepository::new(store),
        }
    }
}
