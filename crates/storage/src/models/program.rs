use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::ProgramCategory;

/// The three program collections. Each kind lives in its own table with an
/// identical layout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "program_type", rename_all = "lowercase")]
pub enum ProgramKind {
    Stage,
    Nonstage,
    Sports,
}

impl ProgramKind {
    pub const ALL: [ProgramKind; 3] = [Self::Stage, Self::Nonstage, Self::Sports];

    pub fn as_table(&self) -> &'static str {
        match self {
            Self::Stage => "stage_programs",
            Self::Nonstage => "nonstage_programs",
            Self::Sports => "sports_programs",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stage => "stage",
            Self::Nonstage => "nonstage",
            Self::Sports => "sports",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Program {
    pub program_id: Uuid,
    pub title: String,
    pub category: ProgramCategory,
    pub created_at: chrono::NaiveDateTime,
}
