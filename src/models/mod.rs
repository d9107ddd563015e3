//! Shared data models spanning the evaluation stages.

pub mod applicant;
pub mod decision;
pub mod policy;

pub use applicant::ApplicantProfile;
pub use decision::{Decision, DecisionSource, Verdict};
pub use policy::{DecisionPolicy, RuleRiskScores, RuleThresholds};
