use serde::{Deserialize, Serialize};

/// Financial inputs for a single scoring run.
///
/// All fields are plain numbers. Raw user text is turned into this type by
/// [`crate::input::FormInput::to_inputs`], which applies the blank/unparseable
/// fallbacks.
///
/// Example JSON:
/// ```json
/// {
///   "rentPaymentOnTimeRatio": 0.95,
///   "monthlyIncome": 85000,
///   "monthlyExpenses": 40000,
///   "missedUtilityPayments": 0,
///   "educationLevel": 1,
///   "employmentYears": 4,
///   "loanAmount": 300000
/// }
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditInputs {
    /// Fraction of rent payments made on time, 0.0 to 1.0
    pub rent_payment_on_time_ratio: f64,

    /// Monthly income in a single monetary unit
    pub monthly_income: f64,

    /// Monthly expenses in the same unit as income
    pub monthly_expenses: f64,

    /// Count of missed utility payments
    pub missed_utility_payments: u32,

    /// 0 = secondary, 1 = undergraduate, 2 = graduate or higher
    pub education_level: u8,

    /// Years of employment, may be fractional
    pub employment_years: f64,

    /// Requested loan principal
    pub loan_amount: f64,
}

/// Highest education level accepted by the engine.
pub const MAX_EDUCATION_LEVEL: u8 = 2;

impl Default for CreditInputs {
    /// Blank form: nothing entered, ratio assumed fully on time.
    fn default() -> Self {
        Self {
            rent_payment_on_time_ratio: 1.0,
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            missed_utility_payments: 0,
            education_level: 0,
            employment_years: 0.0,
            loan_amount: 0.0,
        }
    }
}

impl CreditInputs {
    /// Bring hand-built inputs back inside the valid domain.
    ///
    /// Non-finite or negative amounts become 0, a non-finite ratio becomes 1
    /// (full compliance), the ratio is clamped to [0, 1] and education is
    /// capped at [`MAX_EDUCATION_LEVEL`].
    pub fn normalized(&self) -> Self {
        let ratio = if self.rent_payment_on_time_ratio.is_finite() {
            self.rent_payment_on_time_ratio.clamp(0.0, 1.0)
        } else {
            1.0
        };

        Self {
            rent_payment_on_time_ratio: ratio,
            monthly_income: non_negative(self.monthly_income),
            monthly_expenses: non_negative(self.monthly_expenses),
            missed_utility_payments: self.missed_utility_payments,
            education_level: self.education_level.min(MAX_EDUCATION_LEVEL),
            employment_years: non_negative(self.employment_years),
            loan_amount: non_negative(self.loan_amount),
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Outcome of a scoring run.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditResult {
    /// Score in [300, 900]
    pub credit_score: u32,
    pub is_approved: bool,
    /// Echo of the requested loan amount
    pub loan_amount: f64,
    /// Up to 3 positive findings
    pub highlights: Vec<String>,
    /// Up to 3 improvement findings
    pub suggestions: Vec<String>,
}
