pub mod approval;
pub mod engine;
pub mod factors;
pub mod feedback;
pub mod inputs;

pub use approval::{evaluate_approval, ApprovalBlocker, ApprovalDecision};
pub use engine::{breakdown, compute, FactorContribution, ScoreBreakdown, MAX_SCORE, MIN_SCORE};
pub use factors::{guarded_ratio, Factor, GuardedRatio};
pub use inputs::{CreditInputs, CreditResult};
