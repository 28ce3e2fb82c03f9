pub mod leaderboard;
pub mod resolver;
pub mod scoring;
