use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use super::band::ScoreBand;
use super::gauge::{band_color, render_gauge};
use crate::scoring::{ApprovalDecision, CreditResult, ScoreBreakdown};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format an amount with thousands separators, dropping a zero fraction
/// ("200000" -> "200,000", "1234.5" -> "1,234.50")
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let whole = rounded.trunc().abs() as u64;
    let cents = ((rounded.abs() - rounded.abs().trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    if cents == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{:02}", sign, grouped, cents)
    }
}

fn format_verdict(approved: bool, use_colors: bool) -> String {
    match (approved, use_colors) {
        (true, true) => "APPROVED".green().bold().to_string(),
        (false, true) => "DECLINED".red().bold().to_string(),
        (true, false) => "APPROVED".to_string(),
        (false, false) => "DECLINED".to_string(),
    }
}

fn format_score_with_band(score: u32, use_colors: bool) -> String {
    let band = ScoreBand::classify(score);
    if use_colors {
        format!(
            "{} ({})",
            score.to_string().color(band_color(band)).bold(),
            band.label().color(band_color(band))
        )
    } else {
        format!("{} ({})", score, band)
    }
}

/// Format a single scoring result as a multi-line report.
/// `breakdown` is only shown in verbose mode.
pub fn format_report(
    result: &CreditResult,
    decision: &ApprovalDecision,
    breakdown: Option<&ScoreBreakdown>,
    use_colors: bool,
    gauge_width: usize,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Credit score: {}",
        format_score_with_band(result.credit_score, use_colors)
    ));
    lines.push(render_gauge(result.credit_score, gauge_width, use_colors));
    lines.push(String::new());

    lines.push(format!(
        "Loan of {}: {}",
        format_amount(result.loan_amount),
        format_verdict(result.is_approved, use_colors)
    ));
    lines.push(format!(
        "  Debt-to-income: {:.1}%",
        decision.debt_to_income * 100.0
    ));
    for blocker in &decision.blockers {
        lines.push(format!("  - {}", blocker));
    }
    lines.push(String::new());

    let highlights_header = if use_colors {
        "Highlights".green().bold().to_string()
    } else {
        "Highlights".to_string()
    };
    lines.push(highlights_header);
    for highlight in &result.highlights {
        lines.push(format!("  + {}", highlight));
    }

    let suggestions_header = if use_colors {
        "Suggestions".yellow().bold().to_string()
    } else {
        "Suggestions".to_string()
    };
    lines.push(suggestions_header);
    for suggestion in &result.suggestions {
        lines.push(format!("  * {}", suggestion));
    }

    if let Some(breakdown) = breakdown {
        lines.push(String::new());
        lines.push(format_breakdown(breakdown));
    }

    lines.join("\n")
}

/// Format the per-factor breakdown (for verbose mode)
/// Columns: factor label, sub-score, weight, contribution
pub fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut lines = vec!["Breakdown".to_string()];
    for f in &breakdown.factors {
        lines.push(format!(
            "  {:<18}{:>6.1} x {:.2} = {:>5.2}",
            f.factor.label(),
            f.sub_score,
            f.weight,
            f.contribution
        ));
    }
    lines.push(format!(
        "  Weighted {:.2} / 100 -> {}",
        breakdown.weighted_score, breakdown.credit_score
    ));
    lines.push(format!(
        "  Expense ratio {:.2}, debt-to-income {:.2}",
        breakdown.expense_ratio, breakdown.debt_to_income
    ));
    if breakdown.zero_income {
        lines.push("  No income entered: ratios treated as 1.0".to_string());
    }
    lines.join("\n")
}

/// A named scenario with its result for display
pub struct ScoredScenario<'a> {
    pub name: &'a str,
    pub result: &'a CreditResult,
}

/// Sort best first: score descending, ties broken by name ascending.
/// `key` yields the score and name of an item.
pub fn rank_by_score<T>(items: &mut [T], key: impl Fn(&T) -> (u32, &str)) {
    items.sort_by(|a, b| {
        let (score_a, name_a) = key(a);
        let (score_b, name_b) = key(b);
        score_b.cmp(&score_a).then_with(|| name_a.cmp(name_b))
    });
}

/// Rank scored scenarios for display
pub fn rank_scenarios(scenarios: &mut [ScoredScenario]) {
    rank_by_score(scenarios, |s| (s.result.credit_score, s.name));
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format scenarios as a ranked table with columns: Index, Score, Band, Verdict, Name
/// No headers (minimal format)
pub fn format_scenario_table(scenarios: &[ScoredScenario], use_colors: bool) -> String {
    if scenarios.is_empty() {
        return "No scenarios found.".to_string();
    }

    let term_width = get_terminal_width();

    // Index "99." + score 3 + band 9 + verdict 8, with separators
    let band_width = 9;
    let verdict_width = 8;
    let separator = "  ";
    let fixed_width = 3 + 1 + 3 + band_width + verdict_width + separator.len() * 3;

    scenarios
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score = scored.result.credit_score;
            let band = ScoreBand::classify(score);
            let band_str = format!("{:<width$}", band.label(), width = band_width);
            let verdict_plain = if scored.result.is_approved {
                "APPROVED"
            } else {
                "DECLINED"
            };

            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(scored.name, width - fixed_width)
                }
                // Very narrow terminal, show truncated
                Some(_) => truncate_name(scored.name, 20),
                // No terminal (pipe), don't truncate
                None => scored.name.to_string(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score.to_string().color(band_color(band)).bold(),
                    separator,
                    band_str.color(band_color(band)),
                    separator,
                    format_verdict(scored.result.is_approved, true),
                    separator,
                    name
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score, separator, band_str, separator, verdict_plain, separator, name
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format scenarios as tab-separated values for scripting
/// Columns: score, band, approved, name (no headers, no colors)
pub fn format_tsv(scenarios: &[ScoredScenario]) -> String {
    scenarios
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}",
                scored.result.credit_score,
                ScoreBand::classify(scored.result.credit_score),
                scored.result.is_approved,
                scored.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    scenario: Option<&'a str>,
    band: ScoreBand,
    #[serde(flatten)]
    result: &'a CreditResult,
}

/// Format results as pretty JSON: a single object, or an array for several
pub fn format_json(scenarios: &[ScoredScenario], named: bool) -> Result<String> {
    let reports: Vec<JsonReport> = scenarios
        .iter()
        .map(|scored| JsonReport {
            scenario: named.then_some(scored.name),
            band: ScoreBand::classify(scored.result.credit_score),
            result: scored.result,
        })
        .collect();

    let json = match reports.as_slice() {
        [single] if !named => serde_json::to_string_pretty(single),
        _ => serde_json::to_string_pretty(&reports),
    };
    json.context("Failed to serialize results as JSON")
}
