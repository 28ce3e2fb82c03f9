use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::leaderboard::{LeaderboardEntry, TeamInfo};
use crate::models::{Participant, Participation, ProgramResult, Student, Team};

#[derive(Default)]
struct Tally {
    total_points: i64,
    results_count: i64,
}

/// Team standings computed from every recorded result.
///
/// A result counts for the team entered directly on its participation, or
/// else for the team of the entered student. Results that resolve to no team
/// are ignored, and so are teams without any counted result. Ranking is dense
/// over total points, highest first; ties are listed by team name.
pub fn aggregate(
    teams: &[Team],
    students: &[Student],
    participations: &[Participation],
    results: &[ProgramResult],
) -> Vec<LeaderboardEntry> {
    let student_team: HashMap<Uuid, Uuid> = students
        .iter()
        .filter_map(|s| s.team_id.map(|team_id| (s.student_id, team_id)))
        .collect();

    let participation_team: HashMap<Uuid, Uuid> = participations
        .iter()
        .filter_map(|p| {
            let team_id = match p.participant()? {
                Participant::Team(team_id) => team_id,
                Participant::Student(student_id) => *student_team.get(&student_id)?,
            };
            Some((p.participation_id, team_id))
        })
        .collect();

    let mut tallies: HashMap<Uuid, Tally> = HashMap::new();
    for result in results {
        let Some(team_id) = participation_team.get(&result.participation_id) else {
            continue;
        };
        let tally = tallies.entry(*team_id).or_default();
        tally.total_points += i64::from(result.points_awarded);
        tally.results_count += 1;
    }

    let mut standings: Vec<(&Team, Tally)> = teams
        .iter()
        .filter_map(|team| tallies.remove(&team.team_id).map(|tally| (team, tally)))
        .collect();

    standings.sort_by(|(a_team, a), (b_team, b)| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a_team.name.cmp(&b_team.name))
    });

    let mut entries = Vec::with_capacity(standings.len());
    let mut rank = 0;
    let mut previous_total = None;

    for (team, tally) in standings {
        if previous_total != Some(tally.total_points) {
            rank += 1;
            previous_total = Some(tally.total_points);
        }

        entries.push(LeaderboardEntry {
            rank,
            team: TeamInfo {
                team_id: team.team_id,
                name: team.name.clone(),
            },
            total_points: tally.total_points,
            results_count: tally.results_count,
        });
    }

    entries
}
