use super::inputs::CreditInputs;

/// Income at which the income factor saturates.
pub const INCOME_CEILING: f64 = 100_000.0;
/// Employment tenure (years) at which the employment factor saturates.
pub const EMPLOYMENT_CEILING_YEARS: f64 = 10.0;
/// Points lost per missed utility payment.
pub const MISSED_PAYMENT_PENALTY: f64 = 20.0;
/// Ratio used in place of `x / income` when income is zero.
pub const ZERO_INCOME_RATIO: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    RentPayment,
    Income,
    Expenses,
    UtilityPayments,
    Education,
    Employment,
}

impl Factor {
    /// Evaluation order; weights sum to 1.0.
    pub const ALL: [Factor; 6] = [
        Factor::RentPayment,
        Factor::Income,
        Factor::Expenses,
        Factor::UtilityPayments,
        Factor::Education,
        Factor::Employment,
    ];

    pub fn weight(self) -> f64 {
        match self {
            Factor::RentPayment => 0.25,
            Factor::Income => 0.20,
            Factor::Expenses => 0.20,
            Factor::UtilityPayments => 0.15,
            Factor::Education => 0.05,
            Factor::Employment => 0.15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Factor::RentPayment => "Rent payments",
            Factor::Income => "Income",
            Factor::Expenses => "Expense ratio",
            Factor::UtilityPayments => "Utility payments",
            Factor::Education => "Education",
            Factor::Employment => "Employment",
        }
    }

    /// Normalized sub-score for this factor, in [0, 100] for normalized inputs.
    pub fn sub_score(self, inputs: &CreditInputs) -> f64 {
        match self {
            Factor::RentPayment => inputs.rent_payment_on_time_ratio * 100.0,
            Factor::Income => ((inputs.monthly_income / INCOME_CEILING) * 100.0).min(100.0),
            Factor::Expenses => {
                let ratio = expense_ratio(inputs).value;
                (100.0 - ratio * 100.0).max(0.0)
            }
            Factor::UtilityPayments => {
                (100.0 - f64::from(inputs.missed_utility_payments) * MISSED_PAYMENT_PENALTY)
                    .max(0.0)
            }
            Factor::Education => (f64::from(inputs.education_level) / 2.0) * 100.0,
            Factor::Employment => {
                ((inputs.employment_years / EMPLOYMENT_CEILING_YEARS) * 100.0).min(100.0)
            }
        }
    }
}

/// Result of a division by monthly income.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardedRatio {
    pub value: f64,
    /// True when income was zero and [`ZERO_INCOME_RATIO`] was substituted.
    pub zero_income: bool,
}

/// Divide `amount` by `income` without ever dividing by zero.
///
/// Zero (or non-positive) income yields [`ZERO_INCOME_RATIO`], which penalizes
/// the scenario instead of propagating infinity or NaN.
pub fn guarded_ratio(amount: f64, income: f64) -> GuardedRatio {
    if income <= 0.0 {
        GuardedRatio {
            value: ZERO_INCOME_RATIO,
            zero_income: true,
        }
    } else {
        GuardedRatio {
            value: amount / income,
            zero_income: false,
        }
    }
}

pub fn expense_ratio(inputs: &CreditInputs) -> GuardedRatio {
    guarded_ratio(inputs.monthly_expenses, inputs.monthly_income)
}

/// Monthly share of the loan (spread over 12 months) relative to income.
pub fn debt_to_income(inputs: &CreditInputs) -> GuardedRatio {
    guarded_ratio(inputs.loan_amount / 12.0, inputs.monthly_income)
}
