use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Age bracket a student competes in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "student_category", rename_all = "snake_case")]
pub enum StudentCategory {
    Junior,
    Senior,
    SuperSenior,
}

/// Bracket a program is open to. `All` admits every student category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "program_category", rename_all = "snake_case")]
pub enum ProgramCategory {
    Junior,
    Senior,
    SuperSenior,
    All,
}

impl ProgramCategory {
    pub fn admits(&self, student: StudentCategory) -> bool {
        match self {
            Self::All => true,
            Self::Junior => student == StudentCategory::Junior,
            Self::Senior => student == StudentCategory::Senior,
            Self::SuperSenior => student == StudentCategory::SuperSenior,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_admits_every_student_category() {
        for student in [
            StudentCategory::Junior,
            StudentCategory::Senior,
            StudentCategory::SuperSenior,
        ] {
            assert!(ProgramCategory::All.admits(student));
        }
    }

    #[test]
    fn specific_category_admits_only_itself() {
        assert!(ProgramCategory::Senior.admits(StudentCategory::Senior));
        assert!(!ProgramCategory::Senior.admits(StudentCategory::Junior));
        assert!(!ProgramCategory::Junior.admits(StudentCategory::SuperSenior));
    }

    #[test]
    fn categories_use_snake_case_on_the_wire() {
        let json = serde_json::to_string(&ProgramCategory::SuperSenior).unwrap();
        assert_eq!(json, "\"super_senior\"");

        let parsed: StudentCategory = serde_json::from_str("\"super_senior\"").unwrap();
        assert_eq!(parsed, StudentCategory::SuperSenior);
    }
}
