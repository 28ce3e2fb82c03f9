use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Result, StorageError};
use crate::models::{Participant, ProgramKind};

pub const ALREADY_REGISTERED: &str = "This participant is already registered for this program.";

/// Participation joined with program title and participant names
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct DetailedParticipation {
    pub participation_id: Uuid,
    pub program_id: Uuid,
    pub program_type: ProgramKind,
    pub student_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub group_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub program_title: Option<String>,
    pub student_name: Option<String>,
    pub admission_no: Option<String>,
    pub team_name: Option<String>,
}

impl DetailedParticipation {
    /// "<program> - <participant>" label used when picking an entry to score.
    pub fn display_name(&self) -> String {
        let participant = self
            .student_name
            .as_deref()
            .or(self.team_name.as_deref())
            .unwrap_or_default();
        format!(
            "{} - {}",
            self.program_title.as_deref().unwrap_or_default(),
            participant
        )
    }
}

/// Participation still waiting for a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UnscoredParticipation {
    pub participation_id: Uuid,
    pub display_name: String,
}

/// Request payload for registering a student or a team for a program
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateParticipationRequest {
    pub program_id: Uuid,

    pub program_type: ProgramKind,

    pub student_id: Option<Uuid>,

    pub team_id: Option<Uuid>,

    #[validate(length(max = 255))]
    pub group_name: Option<String>,
}

impl CreateParticipationRequest {
    /// Exactly one of `student_id` and `team_id` must be given.
    pub fn participant(&self) -> Result<Participant> {
        match (self.student_id, self.team_id) {
            (Some(student_id), None) => Ok(Participant::Student(student_id)),
            (None, Some(team_id)) => Ok(Participant::Team(team_id)),
            (Some(_), Some(_)) => Err(StorageError::invalid_field(
                "student_id",
                "single_participant",
                "Register either a student or a team, not both.",
            )),
            (None, None) => Err(StorageError::invalid_field(
                "student_id",
                "participant_required",
                "Please select a student or a team.",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(student_id: Option<Uuid>, team_id: Option<Uuid>) -> CreateParticipationRequest {
        CreateParticipationRequest {
            program_id: Uuid::new_v4(),
            program_type: ProgramKind::Stage,
            student_id,
            team_id,
            group_name: None,
        }
    }

    #[test]
    fn student_entry_resolves_to_student() {
        let id = Uuid::new_v4();
        assert_eq!(
            request(Some(id), None).participant().unwrap(),
            Participant::Student(id)
        );
    }

    #[test]
    fn team_entry_resolves_to_team() {
        let id = Uuid::new_v4();
        assert_eq!(
            request(None, Some(id)).participant().unwrap(),
            Participant::Team(id)
        );
    }

    #[test]
    fn both_or_neither_participant_is_rejected() {
        let both = request(Some(Uuid::new_v4()), Some(Uuid::new_v4())).participant();
        assert!(matches!(both, Err(StorageError::Validation(_))));

        let neither = request(None, None).participant();
        assert!(matches!(neither, Err(StorageError::Validation(_))));
    }

    fn detailed(student: Option<&str>, team: Option<&str>) -> DetailedParticipation {
        DetailedParticipation {
            participation_id: Uuid::new_v4(),
            program_id: Uuid::new_v4(),
            program_type: ProgramKind::Stage,
            student_id: None,
            team_id: None,
            group_name: None,
            created_at: chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            program_title: Some("Elocution".to_string()),
            student_name: student.map(String::from),
            admission_no: None,
            team_name: team.map(String::from),
        }
    }

    #[test]
    fn display_name_prefers_student_then_team() {
        assert_eq!(
            detailed(Some("Asha"), None).display_name(),
            "Elocution - Asha"
        );
        assert_eq!(detailed(None, Some("Red")).display_name(), "Elocution - Red");
    }
}
