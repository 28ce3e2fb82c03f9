pub mod leaderboard;
pub mod participation;
pub mod program;
pub mod result;
pub mod scoring_rule;
pub mod student;
pub mod summary;
pub mod team;

#[cfg(test)]
pub(crate) mod fixtures;
