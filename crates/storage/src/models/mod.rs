pub mod category;
pub mod participation;
pub mod program;
pub mod program_result;
pub mod scoring_rule;
pub mod student;
pub mod team;

pub use category::{ProgramCategory, StudentCategory};
pub use participation::{Participant, Participation};
pub use program::{Program, ProgramKind};
pub use program_result::{Grade, Position, ProgramResult};
pub use scoring_rule::ScoringRule;
pub use student::Student;
pub use team::Team;
