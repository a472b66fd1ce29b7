//! Personal Independence Payment: activity catalog, points thresholds, and the outcome matrix.

pub mod activities;
pub mod outcome;
pub mod points;

pub use activities::{PipActivityQuestion, PipActivityType};
pub use outcome::{pip_matrix, PipOutcomeCondition, PipScenario};
pub use points::{PipPointsCondition, PIP_POINTS_CONDITIONS};
