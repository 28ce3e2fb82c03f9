use axum::{
    Router, middleware,
    routing::{get, put},
};
use fest_storage::Database;

use super::handlers::{list_rules, update_rule};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:position", put(update_rule))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_rules)).merge(protected)
}
