use std::cmp::Reverse;
use std::collections::HashSet;

use uuid::Uuid;

use crate::dto::participation::{DetailedParticipation, UnscoredParticipation};

/// Participations that have no result yet, newest first.
///
/// Participations with equal timestamps keep their input order.
pub fn unscored_participations(
    mut participations: Vec<DetailedParticipation>,
    scored: &HashSet<Uuid>,
) -> Vec<UnscoredParticipation> {
    participations.retain(|p| !scored.contains(&p.participation_id));
    participations.sort_by_key(|p| Reverse(p.created_at));

    participations
        .into_iter()
        .map(|p| UnscoredParticipation {
            display_name: p.display_name(),
            participation_id: p.participation_id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::ProgramKind;

    fn participation(title: &str, student: &str, hour: u32) -> DetailedParticipation {
        DetailedParticipation {
            participation_id: Uuid::new_v4(),
            program_id: Uuid::new_v4(),
            program_type: ProgramKind::Nonstage,
            student_id: Some(Uuid::new_v4()),
            team_id: None,
            group_name: None,
            created_at: NaiveDate::from_ymd_opt(2025, 2, 14)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            program_title: Some(title.to_string()),
            student_name: Some(student.to_string()),
            admission_no: None,
            team_name: None,
        }
    }

    #[test]
    fn scored_participations_are_left_out() {
        let essay = participation("Essay", "Asha", 9);
        let quiz = participation("Quiz", "Ravi", 10);
        let scored = HashSet::from([essay.participation_id]);

        let unscored = unscored_participations(vec![essay, quiz.clone()], &scored);

        assert_eq!(
            unscored,
            vec![UnscoredParticipation {
                participation_id: quiz.participation_id,
                display_name: "Quiz - Ravi".to_string(),
            }]
        );
    }

    #[test]
    fn everything_scored_yields_empty() {
        let entries = vec![participation("Essay", "Asha", 9), participation("Quiz", "Ravi", 10)];
        let scored: HashSet<Uuid> = entries.iter().map(|p| p.participation_id).collect();

        assert!(unscored_participations(entries, &scored).is_empty());
    }

    #[test]
    fn newest_first_and_stable_on_ties() {
        let early = participation("Essay", "Asha", 8);
        let tie_a = participation("Quiz", "Ravi", 11);
        let tie_b = participation("Poem", "Meera", 11);

        let labels: Vec<String> =
            unscored_participations(vec![early, tie_a, tie_b], &HashSet::new())
                .into_iter()
                .map(|u| u.display_name)
                .collect();

        assert_eq!(labels, vec!["Quiz - Ravi", "Poem - Meera", "Essay - Asha"]);
    }
}
