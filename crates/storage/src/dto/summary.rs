use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dashboard counters
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub teams: i64,
    pub students: i64,
    pub programs: ProgramCounts,
    pub participations: i64,
    pub results: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProgramCounts {
    pub stage: i64,
    pub nonstage: i64,
    pub sports: i64,
    pub total: i64,
}
