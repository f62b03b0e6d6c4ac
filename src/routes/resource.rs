//! Resource CRUD routes under `/api/resources`.

use crate::handlers::resource::{create, delete as delete_handler, list, read, update};
use crate::routes::common::not_found;
use crate::state::AppState;
use axum::{
    routing::{get, MethodRouter},
    Router,
};

pub const RESOURCE_PREFIX: &str = "/api/resources";

/// POST and GET on the collection, with or without a trailing slash.
/// Other methods get the same 404 as an unknown path.
fn collection() -> MethodRouter<AppState> {
    get(list).post(create).fallback(not_found)
}

/// Collection routes plus GET/PUT/DELETE `/:id`.
pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route(RESOURCE_PREFIX, collection())
        .route(&format!("{RESOURCE_PREFIX}/"), collection())
        .route(
            &format!("{RESOURCE_PREFIX}/:id"),
            get(read).put(update).delete(delete_handler).fallback(not_found),
        )
        .with_state(state)
}
