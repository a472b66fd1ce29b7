//! Employment and Support Allowance: Schedule 2 catalog, the points and regulations matrix,
//! and the outcome matrix.

pub mod activities;
pub mod outcome;
pub mod regulations;

pub use activities::{EsaActivityQuestion, EsaActivityType};
pub use outcome::{esa_matrix, EsaOutcomeCondition, EsaScenario};
pub use regulations::{
    esa_regulations_matrix, EsaAwardRate, EsaEntitlement, EsaRegulationsCondition,
};
