use crate::dto::result::{CreateResultRequest, UpdateResultRequest};
use crate::error::{Result, StorageError};
use crate::models::{Grade, Position, ProgramResult, ScoringRule};

/// Position, grade and points ready to be written to the `results` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultOutcome {
    pub position: Option<Position>,
    pub grade: Option<Grade>,
    pub points_awarded: i32,
}

/// Default points for a position, or 0 when no rule covers it.
pub fn default_points(position: Position, rules: &[ScoringRule]) -> i32 {
    rules
        .iter()
        .find(|rule| rule.position == position)
        .map(|rule| rule.default_points)
        .unwrap_or(0)
}

/// Points to store on a result.
///
/// An explicit value is kept as given, zero included. Without one the rule
/// for the position applies; grade-only results earn nothing.
pub fn resolve_points(
    explicit: Option<i32>,
    position: Option<Position>,
    rules: &[ScoringRule],
) -> i32 {
    match (explicit, position) {
        (Some(points), _) => points,
        (None, Some(position)) => default_points(position, rules),
        (None, None) => 0,
    }
}

/// A result needs a position, a grade, or both.
pub fn ensure_outcome(position: Option<Position>, grade: Option<Grade>) -> Result<()> {
    if position.is_none() && grade.is_none() {
        return Err(StorageError::invalid_field(
            "position",
            "outcome_required",
            "Either a position or a grade must be selected.",
        ));
    }
    Ok(())
}

pub fn outcome_for_create(
    req: &CreateResultRequest,
    rules: &[ScoringRule],
) -> Result<ResultOutcome> {
    ensure_outcome(req.position, req.grade)?;

    Ok(ResultOutcome {
        position: req.position,
        grade: req.grade,
        points_awarded: resolve_points(req.points_awarded, req.position, rules),
    })
}

/// Merges an update into the stored result.
///
/// Points follow the new position when the caller changes the position
/// without sending points; otherwise the stored points are kept.
pub fn outcome_for_update(
    existing: &ProgramResult,
    req: &UpdateResultRequest,
    rules: &[ScoringRule],
) -> Result<ResultOutcome> {
    let position = req.position.unwrap_or(existing.position);
    let grade = req.grade.unwrap_or(existing.grade);

    ensure_outcome(position, grade)?;

    let points_awarded = match req.points_awarded {
        Some(points) => points,
        None if position != existing.position => resolve_points(None, position, rules),
        None => existing.points_awarded,
    };

    Ok(ResultOutcome {
        position,
        grade,
        points_awarded,
    })
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn rules() -> Vec<ScoringRule> {
        vec![
            ScoringRule {
                position: Position::First,
                default_points: 10,
            },
            ScoringRule {
                position: Position::Second,
                default_points: 7,
            },
        ]
    }

    fn create(
        position: Option<Position>,
        grade: Option<Grade>,
        points: Option<i32>,
    ) -> CreateResultRequest {
        CreateResultRequest {
            participation_id: Uuid::new_v4(),
            position,
            grade,
            points_awarded: points,
        }
    }

    fn stored(position: Option<Position>, grade: Option<Grade>, points: i32) -> ProgramResult {
        ProgramResult {
            result_id: Uuid::new_v4(),
            participation_id: Uuid::new_v4(),
            position,
            grade,
            points_awarded: points,
            created_at: chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn first_place_without_points_uses_rule() {
        let outcome = outcome_for_create(&create(Some(Position::First), None, None), &rules())
            .unwrap();
        assert_eq!(outcome.points_awarded, 10);
    }

    #[test]
    fn grade_only_without_points_scores_zero() {
        let outcome = outcome_for_create(&create(None, Some(Grade::A), None), &rules()).unwrap();
        assert_eq!(outcome.points_awarded, 0);
        assert_eq!(outcome.position, None);
        assert_eq!(outcome.grade, Some(Grade::A));
    }

    #[test]
    fn explicit_points_override_rule_including_zero() {
        let outcome =
            outcome_for_create(&create(Some(Position::First), None, Some(0)), &rules()).unwrap();
        assert_eq!(outcome.points_awarded, 0);

        let outcome =
            outcome_for_create(&create(None, Some(Grade::B), Some(4)), &rules()).unwrap();
        assert_eq!(outcome.points_awarded, 4);
    }

    #[test]
    fn position_without_rule_scores_zero() {
        let outcome = outcome_for_create(&create(Some(Position::Third), None, None), &rules())
            .unwrap();
        assert_eq!(outcome.points_awarded, 0);
    }

    #[test]
    fn missing_position_and_grade_is_rejected_on_position_field() {
        let err = outcome_for_create(&create(None, None, Some(5)), &rules()).unwrap_err();
        let StorageError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(errors.field_errors().contains_key("position"));
    }

    #[test]
    fn update_keeps_points_when_position_unchanged() {
        let existing = stored(Some(Position::First), None, 12);
        let req = UpdateResultRequest {
            grade: Some(Some(Grade::A)),
            ..Default::default()
        };

        let outcome = outcome_for_update(&existing, &req, &rules()).unwrap();
        assert_eq!(outcome.points_awarded, 12);
        assert_eq!(outcome.grade, Some(Grade::A));
    }

    #[test]
    fn update_rederives_points_when_position_changes() {
        let existing = stored(Some(Position::First), None, 10);
        let req = UpdateResultRequest {
            position: Some(Some(Position::Second)),
            ..Default::default()
        };

        let outcome = outcome_for_update(&existing, &req, &rules()).unwrap();
        assert_eq!(outcome.position, Some(Position::Second));
        assert_eq!(outcome.points_awarded, 7);
    }

    #[test]
    fn update_cannot_clear_last_outcome() {
        let existing = stored(None, Some(Grade::C), 0);
        let req = UpdateResultRequest {
            grade: Some(None),
            ..Default::default()
        };

        assert!(matches!(
            outcome_for_update(&existing, &req, &rules()),
            Err(StorageError::Validation(_))
        ));
    }

    #[test]
    fn clearing_position_drops_rule_points() {
        let existing = stored(Some(Position::First), Some(Grade::A), 10);
        let req = UpdateResultRequest {
            position: Some(None),
            ..Default::default()
        };

        let outcome = outcome_for_update(&existing, &req, &rules()).unwrap();
        assert_eq!(outcome.points_awarded, 0);
    }
}
