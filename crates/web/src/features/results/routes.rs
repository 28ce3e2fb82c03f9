use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use fest_storage::Database;

use super::handlers::{create_result, delete_result, list_results, list_unscored, update_result};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_result))
        .route("/:id", put(update_result))
        .route("/:id", delete(delete_result))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_results))
        .route("/unscored", get(list_unscored))
        .merge(protected)
}
