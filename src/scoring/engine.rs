use super::approval::evaluate_approval;
use super::factors::{debt_to_income, expense_ratio, Factor};
use super::feedback::{highlights, suggestions};
use super::inputs::{CreditInputs, CreditResult};

pub const MIN_SCORE: u32 = 300;
pub const MAX_SCORE: u32 = 900;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub factor: Factor,
    pub sub_score: f64,    // Normalized 0-100
    pub weight: f64,       // e.g. 0.25
    pub contribution: f64, // sub_score * weight
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
    pub weighted_score: f64,
    pub credit_score: u32,
    pub expense_ratio: f64,
    pub debt_to_income: f64,
    /// Monthly income was zero and ratios were substituted
    pub zero_income: bool,
}

/// Per-factor view of how the score was reached.
pub fn breakdown(inputs: &CreditInputs) -> ScoreBreakdown {
    let inputs = inputs.normalized();

    let factors: Vec<FactorContribution> = Factor::ALL
        .iter()
        .map(|&factor| {
            let sub_score = factor.sub_score(&inputs);
            let weight = factor.weight();
            FactorContribution {
                factor,
                sub_score,
                weight,
                contribution: sub_score * weight,
            }
        })
        .collect();

    let weighted_score: f64 = factors.iter().map(|f| f.contribution).sum();
    let expense = expense_ratio(&inputs);
    let dti = debt_to_income(&inputs);

    ScoreBreakdown {
        factors,
        weighted_score,
        credit_score: to_credit_score(weighted_score),
        expense_ratio: expense.value,
        debt_to_income: dti.value,
        zero_income: expense.zero_income || dti.zero_income,
    }
}

/// Map a weighted score (0-100) onto the 300-900 range.
fn to_credit_score(weighted_score: f64) -> u32 {
    let span = f64::from(MAX_SCORE - MIN_SCORE);
    let raw = (f64::from(MIN_SCORE) + (weighted_score / 100.0) * span).round();
    // Clamp before the cast; also absorbs a NaN weighted score
    let clamped = raw.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE));
    if clamped.is_nan() {
        MIN_SCORE
    } else {
        clamped as u32
    }
}

/// Score a set of inputs. Total and deterministic.
pub fn compute(inputs: &CreditInputs) -> CreditResult {
    let normalized = inputs.normalized();
    let credit_score = breakdown(&normalized).credit_score;
    let decision = evaluate_approval(credit_score, &normalized);

    CreditResult {
        credit_score,
        is_approved: decision.approved,
        loan_amount: inputs.loan_amount,
        highlights: highlights(&normalized),
        suggestions: suggestions(&normalized),
    }
}
