use std::fmt;

use super::factors::debt_to_income;
use super::inputs::CreditInputs;

/// Minimum score for approval.
pub const MIN_APPROVAL_SCORE: u32 = 600;
/// Debt-to-income must stay strictly below this.
pub const MAX_DEBT_TO_INCOME: f64 = 0.4;
/// Missed utility payments must stay strictly below this.
pub const MAX_MISSED_PAYMENTS: u32 = 3;

/// A gate that blocked approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalBlocker {
    LowScore,
    HighDebtToIncome,
    TooManyMissedPayments,
}

impl fmt::Display for ApprovalBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalBlocker::LowScore => {
                write!(f, "credit score below {}", MIN_APPROVAL_SCORE)
            }
            ApprovalBlocker::HighDebtToIncome => write!(
                f,
                "monthly loan burden at or above {:.0}% of income",
                MAX_DEBT_TO_INCOME * 100.0
            ),
            ApprovalBlocker::TooManyMissedPayments => write!(
                f,
                "{} or more missed utility payments",
                MAX_MISSED_PAYMENTS
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalDecision {
    pub approved: bool,
    pub debt_to_income: f64,
    /// Every failed gate, in check order. Empty iff approved.
    pub blockers: Vec<ApprovalBlocker>,
}

/// All three gates are conjunctive: score, debt-to-income and missed payments.
pub fn evaluate_approval(credit_score: u32, inputs: &CreditInputs) -> ApprovalDecision {
    let dti = debt_to_income(inputs).value;
    let mut blockers = Vec::new();

    if credit_score < MIN_APPROVAL_SCORE {
        blockers.push(ApprovalBlocker::LowScore);
    }
    if dti >= MAX_DEBT_TO_INCOME {
        blockers.push(ApprovalBlocker::HighDebtToIncome);
    }
    if inputs.missed_utility_payments >= MAX_MISSED_PAYMENTS {
        blockers.push(ApprovalBlocker::TooManyMissedPayments);
    }

    ApprovalDecision {
        approved: blockers.is_empty(),
        debt_to_income: dti,
        blockers,
    }
}
