use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use fest_storage::Database;

use super::handlers::{
    create_student, delete_student, get_student, list_students, update_student,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_student))
        .route("/:id", put(update_student))
        .route("/:id", delete(delete_student))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_students))
        .route("/:id", get(get_student))
        .merge(protected)
}
