pub mod common;
pub mod leaderboard;
pub mod participation;
pub mod program;
pub mod result;
pub mod student;
pub mod summary;
pub mod team;
