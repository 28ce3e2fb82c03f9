use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "result_position")]
pub enum Position {
    #[serde(rename = "1st")]
    #[sqlx(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    #[sqlx(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    #[sqlx(rename = "3rd")]
    Third,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "result_grade")]
pub enum Grade {
    A,
    B,
    C,
}

/// Outcome recorded against a single participation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProgramResult {
    pub result_id: Uuid,
    pub participation_id: Uuid,
    pub position: Option<Position>,
    pub grade: Option<Grade>,
    pub points_awarded: i32,
    pub created_at: chrono::NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_serialize_as_ordinals() {
        let json = serde_json::to_string(&[Position::First, Position::Second, Position::Third])
            .unwrap();
        assert_eq!(json, r#"["1st","2nd","3rd"]"#);
    }

    #[test]
    fn grades_serialize_as_letters() {
        let grade: Grade = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(grade, Grade::B);
    }
}
