use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Program, ProgramCategory, ProgramKind};

use super::common::{deserialize_trimmed, deserialize_trimmed_option, not_blank};

/// Program together with the collection it belongs to
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProgramResponse {
    pub program_id: Uuid,
    pub kind: ProgramKind,
    pub title: String,
    pub category: ProgramCategory,
    pub created_at: chrono::NaiveDateTime,
}

/// Request payload for creating a program of any kind
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProgramRequest {
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(
        min = 2,
        max = 255,
        message = "Program title must be at least 2 characters."
    ))]
    #[validate(custom(function = "not_blank"))]
    pub title: String,

    pub category: ProgramCategory,
}

/// Request payload for updating a program
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProgramRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    #[validate(length(min = 2, max = 255))]
    #[validate(custom(function = "not_blank"))]
    pub title: Option<String>,

    pub category: Option<ProgramCategory>,
}

impl ProgramResponse {
    pub fn new(kind: ProgramKind, program: Program) -> Self {
        Self {
            program_id: program.program_id,
            kind,
            title: program.title,
            category: program.category,
            created_at: program.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_fails_validation() {
        let req: CreateProgramRequest =
            serde_json::from_str(r#"{"title": "   ", "category": "all"}"#).unwrap();
        assert_eq!(req.title, "");
        assert!(req.validate().is_err());

        let req = UpdateProgramRequest {
            title: Some("   ".to_string()),
            category: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn title_keeps_inner_spaces() {
        let req: CreateProgramRequest =
            serde_json::from_str(r#"{"title": " Group Song ", "category": "junior"}"#).unwrap();
        assert_eq!(req.title, "Group Song");
        assert!(req.validate().is_ok());
    }
}
