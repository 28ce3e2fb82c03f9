use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Grade, Position, ProgramKind};

use super::common::deserialize_some;

pub const ALREADY_SCORED: &str = "This participation has already been scored.";

/// Result joined with its participation, program and participant names
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct DetailedResult {
    pub result_id: Uuid,
    pub participation_id: Uuid,
    pub position: Option<Position>,
    pub grade: Option<Grade>,
    pub points_awarded: i32,
    pub created_at: chrono::NaiveDateTime,
    pub program_id: Uuid,
    pub program_type: ProgramKind,
    pub program_title: Option<String>,
    pub student_name: Option<String>,
    pub team_name: Option<String>,
    pub group_name: Option<String>,
}

/// Request payload for recording a result. When `points_awarded` is omitted
/// the scoring rule for `position` applies.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateResultRequest {
    pub participation_id: Uuid,

    pub position: Option<Position>,

    pub grade: Option<Grade>,

    #[validate(range(min = 0, message = "Points must be a positive number."))]
    pub points_awarded: Option<i32>,
}

/// Request payload for amending a result. `null` clears position or grade.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateResultRequest {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Position>)]
    pub position: Option<Option<Position>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Grade>)]
    pub grade: Option<Option<Grade>>,

    #[validate(range(min = 0, message = "Points must be a positive number."))]
    pub points_awarded: Option<i32>,
}

/// Request payload for changing the default points of a position
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateScoringRuleRequest {
    #[validate(range(min = 0, message = "Points must be a positive number."))]
    pub default_points: i32,
}
