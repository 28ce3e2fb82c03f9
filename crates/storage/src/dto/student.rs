use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::StudentCategory;

use super::common::{
    deserialize_some, deserialize_trimmed, deserialize_trimmed_option, not_blank,
};

/// Student row joined with the owning team's name
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct StudentResponse {
    pub student_id: Uuid,
    pub name: String,
    pub admission_no: String,
    pub class: String,
    pub category: StudentCategory,
    pub fest_id: String,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

/// Request payload for creating a student
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStudentRequest {
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(
        min = 2,
        max = 255,
        message = "Student name must be at least 2 characters."
    ))]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1, max = 64, message = "Admission number is required."))]
    #[validate(custom(function = "not_blank"))]
    pub admission_no: String,

    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1, max = 64, message = "Class is required."))]
    #[validate(custom(function = "not_blank"))]
    pub class: String,

    pub category: StudentCategory,

    /// Derived from the admission number when omitted.
    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    #[validate(length(min = 1, max = 128))]
    #[validate(custom(function = "not_blank"))]
    pub fest_id: Option<String>,

    pub team_id: Option<Uuid>,
}

/// Request payload for updating a student. `team_id: null` removes the
/// student from their team.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    #[validate(length(min = 2, max = 255))]
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    #[validate(length(min = 1, max = 64))]
    #[validate(custom(function = "not_blank"))]
    pub admission_no: Option<String>,

    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    #[validate(length(min = 1, max = 64))]
    #[validate(custom(function = "not_blank"))]
    pub class: Option<String>,

    pub category: Option<StudentCategory>,

    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    #[validate(length(min = 1, max = 128))]
    #[validate(custom(function = "not_blank"))]
    pub fest_id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Uuid>)]
    pub team_id: Option<Option<Uuid>>,
}

impl CreateStudentRequest {
    pub fn fest_id_or_default(&self, year: i32) -> String {
        self.fest_id
            .clone()
            .unwrap_or_else(|| default_fest_id(year, &self.admission_no))
    }
}

pub fn default_fest_id(year: i32, admission_no: &str) -> String {
    format!("FEST-{}-{}", year, admission_no)
}
