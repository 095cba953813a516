use super::form::{parse_amount, parse_count, parse_ratio, EducationLevel, FormInput};

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Validate a form before scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_form(form: &FormInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Required fields
    if is_blank(&form.monthly_income) {
        errors.push("monthly_income: required".to_string());
    }
    match form.education.as_deref().map(str::trim) {
        None | Some("") => errors.push("education: required".to_string()),
        Some(label) => {
            if EducationLevel::from_label(label).is_none() {
                errors.push(format!(
                    "education: unknown level '{}' - expected high-school, college, bachelors, masters or phd",
                    label
                ));
            }
        }
    }

    // Amounts: optional, but must parse and be non-negative when present
    let amounts = [
        ("monthly_income", &form.monthly_income),
        ("monthly_expenses", &form.monthly_expenses),
        ("employment_years", &form.employment_years),
        ("loan_amount", &form.loan_amount),
    ];
    for (name, field) in amounts {
        if is_blank(field) {
            continue;
        }
        let raw = field.as_deref().unwrap_or_default();
        match parse_amount(Some(raw)) {
            None => errors.push(format!("{}: invalid number '{}'", name, raw)),
            Some(v) if v < 0.0 => errors.push(format!("{}: must be non-negative", name)),
            Some(_) => {}
        }
    }

    if !is_blank(&form.missed_payments) {
        let raw = form.missed_payments.as_deref().unwrap_or_default();
        if parse_count(Some(raw)).is_none() {
            errors.push(format!(
                "missed_payments: invalid count '{}' - expected a whole number like 0, 2 or 3+",
                raw
            ));
        }
    }

    if !is_blank(&form.rent_ratio) {
        let raw = form.rent_ratio.as_deref().unwrap_or_default();
        match parse_ratio(Some(raw)) {
            None => errors.push(format!(
                "rent_ratio: invalid ratio '{}' - use 0 to 1, a whole percent like 95, or 95%",
                raw
            )),
            Some(v) if !(0.0..=1.0).contains(&v) => errors.push(format!(
                "rent_ratio: '{}' out of range - use 0 to 1 or 0% to 100%",
                raw
            )),
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
