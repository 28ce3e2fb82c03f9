use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use fest_storage::Database;

use super::handlers::{
    create_program, delete_program, get_program, list_programs, update_program,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:kind", post(create_program))
        .route("/:kind/:id", put(update_program))
        .route("/:kind/:id", delete(delete_program))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:kind", get(list_programs))
        .route("/:kind/:id", get(get_program))
        .merge(protected)
}
