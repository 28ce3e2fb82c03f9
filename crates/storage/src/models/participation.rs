use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::ProgramKind;

/// One participant entered in one program. Exactly one of `student_id` and
/// `team_id` is set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participation {
    pub participation_id: Uuid,
    pub program_id: Uuid,
    pub program_type: ProgramKind,
    pub student_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub group_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

/// Who a participation is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    Student(Uuid),
    Team(Uuid),
}

impl Participant {
    pub fn student_id(&self) -> Option<Uuid> {
        match self {
            Self::Student(id) => Some(*id),
            Self::Team(_) => None,
        }
    }

    pub fn team_id(&self) -> Option<Uuid> {
        match self {
            Self::Team(id) => Some(*id),
            Self::Student(_) => None,
        }
    }
}

impl Participation {
    pub fn participant(&self) -> Option<Participant> {
        match (self.student_id, self.team_id) {
            (Some(student_id), None) => Some(Participant::Student(student_id)),
            (None, Some(team_id)) => Some(Participant::Team(team_id)),
            _ => None,
        }
    }
}
