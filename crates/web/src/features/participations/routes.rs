use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use fest_storage::Database;

use super::handlers::{create_participation, delete_participation, list_participations};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_participation))
        .route("/:id", delete(delete_participation))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_participations))
        .merge(protected)
}
