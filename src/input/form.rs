use serde::{Deserialize, Serialize};

use crate::scoring::CreditInputs;

/// Loan amount used when neither a loan nor an income was entered.
pub const DEFAULT_LOAN_AMOUNT: f64 = 200_000.0;
/// Without an explicit loan, assume this many months of income.
pub const LOAN_INCOME_MULTIPLE: f64 = 3.0;

/// Raw, user-typed form values.
///
/// Every field is optional text, exactly as entered. Conversion into
/// [`CreditInputs`] never fails; see [`FormInput::to_inputs`].
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FormInput {
    /// On-time rent ratio: "0.95", "95%" or "95"
    #[serde(default)]
    pub rent_ratio: Option<String>,

    #[serde(default)]
    pub monthly_income: Option<String>,

    #[serde(default)]
    pub monthly_expenses: Option<String>,

    /// Missed utility payments: "0", "2", "3+"
    #[serde(default)]
    pub missed_payments: Option<String>,

    /// Education label, e.g. "high-school", "bachelors", "phd"
    #[serde(default)]
    pub education: Option<String>,

    #[serde(default)]
    pub employment_years: Option<String>,

    #[serde(default)]
    pub loan_amount: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    Secondary,
    Undergraduate,
    Graduate,
}

impl EducationLevel {
    /// Map a form label onto a level. Case-insensitive; `None` if unknown.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "0" | "high-school" | "highschool" | "secondary" => Some(EducationLevel::Secondary),
            "1" | "college" | "diploma" | "bachelors" | "bachelor's" | "bachelor"
            | "undergraduate" => Some(EducationLevel::Undergraduate),
            "2" | "masters" | "master's" | "master" | "phd" | "doctorate" | "graduate"
            | "postgraduate" => Some(EducationLevel::Graduate),
            _ => None,
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            EducationLevel::Secondary => 0,
            EducationLevel::Undergraduate => 1,
            EducationLevel::Graduate => 2,
        }
    }
}

/// Strip whitespace, thousands separators and a leading currency sign.
fn clean_number(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix('₹')
        .or_else(|| trimmed.strip_prefix('$'))
        .unwrap_or(trimmed);
    trimmed
        .chars()
        .filter(|c| !matches!(c, ',' | '_') && !c.is_whitespace())
        .collect()
}

/// Parse a monetary or count field. `None` when blank or unparseable.
pub fn parse_amount(raw: Option<&str>) -> Option<f64> {
    let cleaned = clean_number(raw?);
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the on-time ratio. `"95%"` and a bare `"95"` both mean 0.95.
///
/// A bare value above 1 is only read as a percentage when it is a whole
/// number; `"1.5"` is ambiguous and yields `None`.
pub fn parse_ratio(raw: Option<&str>) -> Option<f64> {
    let cleaned = clean_number(raw?);
    if let Some(percent) = cleaned.strip_suffix('%') {
        return percent.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v / 100.0);
    }
    let value = cleaned.parse::<f64>().ok().filter(|v| v.is_finite())?;
    if value <= 1.0 {
        Some(value)
    } else if value.fract() == 0.0 {
        Some(value / 100.0)
    } else {
        None
    }
}

/// Parse a missed-payments count. `"3+"` reads as 3, fractions are truncated.
pub fn parse_count(raw: Option<&str>) -> Option<u32> {
    let cleaned = clean_number(raw?);
    let cleaned = cleaned.strip_suffix('+').unwrap_or(&cleaned);
    let value = cleaned.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)?;
    Some(value.min(f64::from(u32::MAX)) as u32)
}

impl FormInput {
    /// Convert raw text into engine inputs.
    ///
    /// Blank or unparseable numbers become 0, a blank ratio means every
    /// payment was on time, an unknown education label is treated as
    /// secondary and a missing loan defaults to three months of income
    /// (or [`DEFAULT_LOAN_AMOUNT`] when that is zero).
    pub fn to_inputs(&self) -> CreditInputs {
        let monthly_income = parse_amount(self.monthly_income.as_deref()).unwrap_or(0.0);

        let loan_amount = parse_amount(self.loan_amount.as_deref())
            .filter(|v| *v > 0.0)
            .unwrap_or_else(|| default_loan_amount(monthly_income));

        let education_level = self
            .education
            .as_deref()
            .and_then(EducationLevel::from_label)
            .unwrap_or(EducationLevel::Secondary)
            .ordinal();

        CreditInputs {
            rent_payment_on_time_ratio: parse_ratio(self.rent_ratio.as_deref()).unwrap_or(1.0),
            monthly_income,
            monthly_expenses: parse_amount(self.monthly_expenses.as_deref()).unwrap_or(0.0),
            missed_utility_payments: parse_count(self.missed_payments.as_deref()).unwrap_or(0),
            education_level,
            employment_years: parse_amount(self.employment_years.as_deref()).unwrap_or(0.0),
            loan_amount,
        }
        .normalized()
    }
}

pub fn default_loan_amount(monthly_income: f64) -> f64 {
    let from_income = monthly_income * LOAN_INCOME_MULTIPLE;
    if from_income > 0.0 {
        from_income
    } else {
        DEFAULT_LOAN_AMOUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormInput {
        let mut form = FormInput::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "rent_ratio" => form.rent_ratio = value,
                "monthly_income" => form.monthly_income = value,
                "monthly_expenses" => form.monthly_expenses = value,
                "missed_payments" => form.missed_payments = value,
                "education" => form.education = value,
                "employment_years" => form.employment_years = value,
                "loan_amount" => form.loan_amount = value,
                other => panic!("unknown field {other}"),
            }
        }
        form
    }

    #[test]
    fn test_blank_form_fallbacks() {
        let inputs = FormInput::default().to_inputs();
        assert_eq!(inputs.rent_payment_on_time_ratio, 1.0);
        assert_eq!(inputs.monthly_income, 0.0);
        assert_eq!(inputs.monthly_expenses, 0.0);
        assert_eq!(inputs.missed_utility_payments, 0);
        assert_eq!(inputs.education_level, 0);
        assert_eq!(inputs.employment_years, 0.0);
        assert_eq!(inputs.loan_amount, DEFAULT_LOAN_AMOUNT);
    }

    #[test]
    fn test_unparseable_numbers_become_zero() {
        let inputs = form(&[
            ("monthly_income", "lots"),
            ("monthly_expenses", ""),
            ("employment_years", "n/a"),
            ("missed_payments", "some"),
        ])
        .to_inputs();
        assert_eq!(inputs.monthly_income, 0.0);
        assert_eq!(inputs.monthly_expenses, 0.0);
        assert_eq!(inputs.employment_years, 0.0);
        assert_eq!(inputs.missed_utility_payments, 0);
    }

    #[test]
    fn test_unparseable_ratio_means_full_compliance() {
        let inputs = form(&[("rent_ratio", "always?")]).to_inputs();
        assert_eq!(inputs.rent_payment_on_time_ratio, 1.0);
    }

    #[test]
    fn test_ratio_formats() {
        assert_eq!(parse_ratio(Some("0.95")), Some(0.95));
        assert_eq!(parse_ratio(Some("95%")), Some(0.95));
        assert_eq!(parse_ratio(Some("95")), Some(0.95));
        assert_eq!(parse_ratio(Some("1")), Some(1.0));
        assert_eq!(parse_ratio(Some("95.5%")), Some(0.955));
        assert_eq!(parse_ratio(Some("  ")), None);
        assert_eq!(parse_ratio(None), None);
    }

    #[test]
    fn test_fractional_bare_ratio_above_one_is_ambiguous() {
        assert_eq!(parse_ratio(Some("1.5")), None);
        assert_eq!(parse_ratio(Some("95.5")), None);

        // Ambiguous text falls back to full compliance like any unparseable ratio
        let inputs = form(&[("rent_ratio", "1.5")]).to_inputs();
        assert_eq!(inputs.rent_payment_on_time_ratio, 1.0);
    }

    #[test]
    fn test_amount_cleaning() {
        assert_eq!(parse_amount(Some("₹1,00,000")), Some(100_000.0));
        assert_eq!(parse_amount(Some("$ 2,500.50")), Some(2_500.5));
        assert_eq!(parse_amount(Some("75_000")), Some(75_000.0));
        assert_eq!(parse_amount(Some("inf")), None);
    }

    #[test]
    fn test_count_parsing() {
        assert_eq!(parse_count(Some("3+")), Some(3));
        assert_eq!(parse_count(Some("2")), Some(2));
        assert_eq!(parse_count(Some("-1")), None);
        assert_eq!(parse_count(Some("")), None);
    }

    #[test]
    fn test_education_labels() {
        assert_eq!(EducationLevel::from_label("high-school"), Some(EducationLevel::Secondary));
        assert_eq!(EducationLevel::from_label("High School"), Some(EducationLevel::Secondary));
        assert_eq!(EducationLevel::from_label("college"), Some(EducationLevel::Undergraduate));
        assert_eq!(EducationLevel::from_label("Bachelors"), Some(EducationLevel::Undergraduate));
        assert_eq!(EducationLevel::from_label("masters"), Some(EducationLevel::Graduate));
        assert_eq!(EducationLevel::from_label("PhD"), Some(EducationLevel::Graduate));
        assert_eq!(EducationLevel::from_label("2"), Some(EducationLevel::Graduate));
        assert_eq!(EducationLevel::from_label("wizardry"), None);
    }

    #[test]
    fn test_unknown_education_defaults_to_secondary() {
        let inputs = form(&[("education", "wizardry")]).to_inputs();
        assert_eq!(inputs.education_level, 0);
    }

    #[test]
    fn test_loan_defaults_to_three_months_income() {
        let inputs = form(&[("monthly_income", "40000")]).to_inputs();
        assert_eq!(inputs.loan_amount, 120_000.0);

        let inputs = form(&[("monthly_income", "40000"), ("loan_amount", "abc")]).to_inputs();
        assert_eq!(inputs.loan_amount, 120_000.0);
    }

    #[test]
    fn test_explicit_loan_kept() {
        let inputs = form(&[("monthly_income", "40000"), ("loan_amount", "90,000")]).to_inputs();
        assert_eq!(inputs.loan_amount, 90_000.0);
    }

    #[test]
    fn test_full_form() {
        let inputs = form(&[
            ("rent_ratio", "0.95"),
            ("monthly_income", "85000"),
            ("monthly_expenses", "40000"),
            ("missed_payments", "1"),
            ("education", "masters"),
            ("employment_years", "4.5"),
            ("loan_amount", "300000"),
        ])
        .to_inputs();
        assert_eq!(
            inputs,
            CreditInputs {
                rent_payment_on_time_ratio: 0.95,
                monthly_income: 85_000.0,
                monthly_expenses: 40_000.0,
                missed_utility_payments: 1,
                education_level: 2,
                employment_years: 4.5,
                loan_amount: 300_000.0,
            }
        );
    }

    #[test]
    fn test_negative_amounts_clamped() {
        let inputs = form(&[("monthly_expenses", "-500")]).to_inputs();
        assert_eq!(inputs.monthly_expenses, 0.0);
    }
}
