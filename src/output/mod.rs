pub mod band;
pub mod formatter;
pub mod gauge;

pub use band::ScoreBand;
pub use formatter::{
    format_amount, format_breakdown, format_json, format_report, format_scenario_table,
    format_tsv, rank_by_score, rank_scenarios, should_use_colors, ScoredScenario,
};
pub use gauge::{gauge_width, needle_angle, render_gauge};
