use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::participation::CreateParticipationRequest;
use crate::dto::program::CreateProgramRequest;
use crate::dto::student::CreateStudentRequest;
use crate::dto::team::CreateTeamRequest;
use crate::models::{
    Participation, Program, ProgramCategory, ProgramKind, Student, StudentCategory, Team,
};

use super::participation::ParticipationRepository;
use super::program::ProgramRepository;
use super::student::StudentRepository;
use super::team::TeamRepository;

pub async fn team(pool: &PgPool, name: &str) -> Team {
    TeamRepository::new(pool)
        .create(&CreateTeamRequest {
            name: name.to_string(),
        })
        .await
        .unwrap()
}

pub async fn student(
    pool: &PgPool,
    admission_no: &str,
    category: StudentCategory,
    team: Option<&Team>,
) -> Student {
    StudentRepository::new(pool)
        .create(&CreateStudentRequest {
            name: format!("Student {admission_no}"),
            admission_no: admission_no.to_string(),
            class: "10A".to_string(),
            category,
            fest_id: None,
            team_id: team.map(|t| t.team_id),
        })
        .await
        .unwrap()
}

pub async fn program(
    pool: &PgPool,
    kind: ProgramKind,
    title: &str,
    category: ProgramCategory,
) -> Program {
    ProgramRepository::new(pool, kind)
        .create(&CreateProgramRequest {
            title: title.to_string(),
            category,
        })
        .await
        .unwrap()
}

pub fn entry(
    kind: ProgramKind,
    program: &Program,
    student_id: Option<Uuid>,
    team_id: Option<Uuid>,
) -> CreateParticipationRequest {
    CreateParticipationRequest {
        program_id: program.program_id,
        program_type: kind,
        student_id,
        team_id,
        group_name: None,
    }
}

pub async fn enter_student(
    pool: &PgPool,
    kind: ProgramKind,
    program: &Program,
    student: &Student,
) -> Participation {
    ParticipationRepository::new(pool)
        .create(&entry(kind, program, Some(student.student_id), None))
        .await
        .unwrap()
}

pub async fn enter_team(
    pool: &PgPool,
    kind: ProgramKind,
    program: &Program,
    team: &Team,
) -> Participation {
    ParticipationRepository::new(pool)
        .create(&entry(kind, program, None, Some(team.team_id)))
        .await
        .unwrap()
}
