use super::factors::expense_ratio;
use super::inputs::CreditInputs;

/// At most this many highlights or suggestions are reported.
pub const MAX_FEEDBACK_ITEMS: usize = 3;

pub const FALLBACK_HIGHLIGHTS: [&str; 3] = [
    "Building credit history",
    "Some positive payment patterns",
    "Room for improvement identified",
];

pub const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "Maintain current good practices",
    "Continue building credit history",
    "Monitor credit regularly",
];

/// A single feedback rule: when `applies` holds, `message` is reported.
struct Check {
    applies: fn(&CreditInputs, f64) -> bool,
    message: &'static str,
}

// Order matters: only the first MAX_FEEDBACK_ITEMS matches are kept.
const HIGHLIGHT_CHECKS: [Check; 6] = [
    Check {
        applies: |i, _| i.rent_payment_on_time_ratio > 0.9,
        message: "Excellent rent payment history shows reliability",
    },
    Check {
        applies: |i, _| i.employment_years >= 3.0,
        message: "Solid employment history indicates stability",
    },
    Check {
        applies: |_, expense_ratio| expense_ratio < 0.6,
        message: "Healthy income-to-expense ratio",
    },
    Check {
        applies: |i, _| i.missed_utility_payments == 0,
        message: "Perfect utility payment record",
    },
    Check {
        applies: |i, _| i.education_level >= 1,
        message: "Higher education demonstrates commitment",
    },
    Check {
        applies: |i, _| i.monthly_income > 50_000.0,
        message: "Strong monthly income capacity",
    },
];

const SUGGESTION_CHECKS: [Check; 6] = [
    Check {
        applies: |i, _| i.rent_payment_on_time_ratio < 0.9,
        message: "Improve rent payment consistency",
    },
    Check {
        applies: |i, _| i.missed_utility_payments > 0,
        message: "Maintain perfect utility payment history",
    },
    Check {
        applies: |_, expense_ratio| expense_ratio > 0.7,
        message: "Reduce monthly expenses relative to income",
    },
    Check {
        applies: |i, _| i.employment_years < 2.0,
        message: "Build longer employment history for stability",
    },
    Check {
        applies: |i, _| i.education_level == 0,
        message: "Consider further education to boost earning potential",
    },
    Check {
        applies: |i, _| i.monthly_income < 30_000.0,
        message: "Explore opportunities to increase income",
    },
];

fn run_checks(checks: &[Check], inputs: &CreditInputs, fallback: &[&str; 3]) -> Vec<String> {
    let ratio = expense_ratio(inputs).value;
    let matched: Vec<String> = checks
        .iter()
        .filter(|check| (check.applies)(inputs, ratio))
        .take(MAX_FEEDBACK_ITEMS)
        .map(|check| check.message.to_string())
        .collect();

    if matched.is_empty() {
        fallback.iter().map(|s| s.to_string()).collect()
    } else {
        matched
    }
}

/// Positive findings, first three matches in declared order.
pub fn highlights(inputs: &CreditInputs) -> Vec<String> {
    run_checks(&HIGHLIGHT_CHECKS, inputs, &FALLBACK_HIGHLIGHTS)
}

/// Improvement findings, first three matches in declared order.
pub fn suggestions(inputs: &CreditInputs) -> Vec<String> {
    run_checks(&SUGGESTION_CHECKS, inputs, &FALLBACK_SUGGESTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong() -> CreditInputs {
        CreditInputs {
            rent_payment_on_time_ratio: 1.0,
            monthly_income: 100_000.0,
            monthly_expenses: 20_000.0,
            missed_utility_payments: 0,
            education_level: 2,
            employment_years: 10.0,
            loan_amount: 200_000.0,
        }
    }

    #[test]
    fn test_highlights_take_first_three_in_order() {
        let h = highlights(&strong());
        assert_eq!(
            h,
            vec![
                "Excellent rent payment history shows reliability",
                "Solid employment history indicates stability",
                "Healthy income-to-expense ratio",
            ]
        );
    }

    #[test]
    fn test_highlights_skip_unmatched() {
        let inputs = CreditInputs {
            rent_payment_on_time_ratio: 0.5,
            employment_years: 1.0,
            monthly_expenses: 90_000.0,
            ..strong()
        };
        let h = highlights(&inputs);
        assert_eq!(
            h,
            vec![
                "Perfect utility payment record",
                "Higher education demonstrates commitment",
                "Strong monthly income capacity",
            ]
        );
    }

    #[test]
    fn test_highlights_fallback() {
        let inputs = CreditInputs {
            rent_payment_on_time_ratio: 0.5,
            monthly_income: 20_000.0,
            monthly_expenses: 18_000.0,
            missed_utility_payments: 3,
            education_level: 0,
            employment_years: 0.5,
            loan_amount: 500_000.0,
        };
        assert_eq!(highlights(&inputs), FALLBACK_HIGHLIGHTS.to_vec());
    }

    #[test]
    fn test_suggestions_fallback() {
        // Strong profile trips no suggestion rule
        assert_eq!(suggestions(&strong()), FALLBACK_SUGGESTIONS.to_vec());
    }

    #[test]
    fn test_suggestions_order() {
        let inputs = CreditInputs {
            rent_payment_on_time_ratio: 0.5,
            monthly_income: 20_000.0,
            monthly_expenses: 18_000.0,
            missed_utility_payments: 3,
            education_level: 0,
            employment_years: 0.5,
            loan_amount: 500_000.0,
        };
        assert_eq!(
            suggestions(&inputs),
            vec![
                "Improve rent payment consistency",
                "Maintain perfect utility payment history",
                "Reduce monthly expenses relative to income",
            ]
        );
    }

    #[test]
    fn test_suggestions_partial_match() {
        let inputs = CreditInputs {
            education_level: 0,
            ..strong()
        };
        assert_eq!(
            suggestions(&inputs),
            vec!["Consider further education to boost earning potential"]
        );
    }

    #[test]
    fn test_rent_ratio_exactly_point_nine_reports_neither() {
        let inputs = CreditInputs {
            rent_payment_on_time_ratio: 0.9,
            ..strong()
        };
        assert!(!highlights(&inputs)
            .iter()
            .any(|h| h.contains("rent payment history")));
        assert!(!suggestions(&inputs)
            .iter()
            .any(|s| s.contains("rent payment consistency")));
    }

    /// Sits between every highlight and suggestion threshold except missed
    /// payments and education, which trip two suggestions.
    fn neutral() -> CreditInputs {
        CreditInputs {
            rent_payment_on_time_ratio: 0.9,
            monthly_income: 40_000.0,
            monthly_expenses: 26_000.0, // ratio 0.65
            missed_utility_payments: 1,
            education_level: 0,
            employment_years: 2.5,
            loan_amount: 100_000.0,
        }
    }

    fn has_highlight(inputs: &CreditInputs, message: &str) -> bool {
        highlights(inputs).iter().any(|h| h == message)
    }

    fn has_suggestion(inputs: &CreditInputs, message: &str) -> bool {
        suggestions(inputs).iter().any(|s| s == message)
    }

    #[test]
    fn test_neutral_profile() {
        assert_eq!(highlights(&neutral()), FALLBACK_HIGHLIGHTS.to_vec());
        assert_eq!(
            suggestions(&neutral()),
            vec![
                "Maintain perfect utility payment history",
                "Consider further education to boost earning potential",
            ]
        );
    }

    #[test]
    fn test_employment_highlight_inclusive_at_three_years() {
        let msg = "Solid employment history indicates stability";
        assert!(has_highlight(&CreditInputs { employment_years: 3.0, ..neutral() }, msg));
        assert!(!has_highlight(&CreditInputs { employment_years: 2.99, ..neutral() }, msg));
    }

    #[test]
    fn test_employment_suggestion_strict_below_two_years() {
        let msg = "Build longer employment history for stability";
        assert!(!has_suggestion(&CreditInputs { employment_years: 2.0, ..neutral() }, msg));
        assert!(has_suggestion(&CreditInputs { employment_years: 1.99, ..neutral() }, msg));
    }

    #[test]
    fn test_expense_highlight_strict_below_point_six() {
        let msg = "Healthy income-to-expense ratio";
        // 24000 / 40000 = 0.6
        assert!(!has_highlight(&CreditInputs { monthly_expenses: 24_000.0, ..neutral() }, msg));
        assert!(has_highlight(&CreditInputs { monthly_expenses: 23_999.0, ..neutral() }, msg));
    }

    #[test]
    fn test_expense_suggestion_strict_above_point_seven() {
        let msg = "Reduce monthly expenses relative to income";
        // 28000 / 40000 = 0.7
        assert!(!has_suggestion(&CreditInputs { monthly_expenses: 28_000.0, ..neutral() }, msg));
        assert!(has_suggestion(&CreditInputs { monthly_expenses: 28_001.0, ..neutral() }, msg));
    }

    #[test]
    fn test_income_highlight_strict_above_fifty_thousand() {
        let msg = "Strong monthly income capacity";
        let at = CreditInputs {
            monthly_income: 50_000.0,
            monthly_expenses: 32_500.0,
            ..neutral()
        };
        let above = CreditInputs {
            monthly_income: 50_001.0,
            monthly_expenses: 32_500.0,
            ..neutral()
        };
        assert!(!has_highlight(&at, msg));
        assert!(has_highlight(&above, msg));
    }

    #[test]
    fn test_income_suggestion_strict_below_thirty_thousand() {
        let msg = "Explore opportunities to increase income";
        let at = CreditInputs {
            monthly_income: 30_000.0,
            monthly_expenses: 19_500.0,
            ..neutral()
        };
        let below = CreditInputs {
            monthly_income: 29_999.0,
            monthly_expenses: 19_500.0,
            ..neutral()
        };
        assert!(!has_suggestion(&at, msg));
        assert!(has_suggestion(&below, msg));
    }

    #[test]
    fn test_employment_and_income_suggestions_in_order() {
        let base = CreditInputs {
            monthly_expenses: 10_000.0,
            ..strong()
        };
        let at_thresholds = CreditInputs {
            employment_years: 2.0,
            monthly_income: 30_000.0,
            ..base
        };
        assert_eq!(suggestions(&at_thresholds), FALLBACK_SUGGESTIONS.to_vec());

        let below = CreditInputs {
            employment_years: 1.99,
            monthly_income: 29_999.0,
            ..base
        };
        assert_eq!(
            suggestions(&below),
            vec![
                "Build longer employment history for stability",
                "Explore opportunities to increase income",
            ]
        );
    }

    #[test]
    fn test_zero_income_flags_expenses() {
        let inputs = CreditInputs {
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            ..strong()
        };
        assert!(!highlights(&inputs).contains(&"Healthy income-to-expense ratio".to_string()));
        assert!(suggestions(&inputs)
            .contains(&"Reduce monthly expenses relative to income".to_string()));
    }
}
