use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Position;

/// Default points granted for a position when a result does not override them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScoringRule {
    pub position: Position,
    pub default_points: i32,
}
