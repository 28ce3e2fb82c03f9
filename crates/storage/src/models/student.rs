use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::StudentCategory;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub student_id: Uuid,
    pub name: String,
    pub admission_no: String,
    pub class: String,
    pub category: StudentCategory,
    pub fest_id: String,
    pub team_id: Option<Uuid>,
    pub created_at: chrono::NaiveDateTime,
}
