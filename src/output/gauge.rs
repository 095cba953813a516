use owo_colors::{AnsiColors, OwoColorize};
use terminal_size::{terminal_size, Width};

use super::band::ScoreBand;
use crate::scoring::{MAX_SCORE, MIN_SCORE};

pub const DEFAULT_GAUGE_WIDTH: usize = 40;
const MIN_GAUGE_WIDTH: usize = 20;
const MAX_GAUGE_WIDTH: usize = 60;

/// Needle angle in degrees: 0 at 300, 180 at 900.
pub fn needle_angle(score: u32) -> f64 {
    let clamped = score.clamp(MIN_SCORE, MAX_SCORE);
    f64::from(clamped - MIN_SCORE) / f64::from(MAX_SCORE - MIN_SCORE) * 180.0
}

pub fn band_color(band: ScoreBand) -> AnsiColors {
    match band {
        ScoreBand::Poor => AnsiColors::Red,
        ScoreBand::Fair => AnsiColors::Yellow,
        ScoreBand::Good => AnsiColors::BrightYellow,
        ScoreBand::VeryGood => AnsiColors::BrightGreen,
        ScoreBand::Excellent => AnsiColors::Green,
    }
}

/// Gauge width for the current terminal; fixed when stdout is not a terminal.
pub fn gauge_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize / 2).clamp(MIN_GAUGE_WIDTH, MAX_GAUGE_WIDTH),
        None => DEFAULT_GAUGE_WIDTH,
    }
}

/// Cell index of a score on a bar `width` cells wide.
fn position(score: u32, width: usize) -> usize {
    let fraction = needle_angle(score) / 180.0;
    (fraction * (width.saturating_sub(1)) as f64).round() as usize
}

/// Fill character per band, so bands stay distinguishable without color.
fn band_glyph(band: ScoreBand) -> char {
    match band {
        ScoreBand::Poor => '░',
        ScoreBand::Fair => '▒',
        ScoreBand::Good => '▓',
        ScoreBand::VeryGood => '█',
        ScoreBand::Excellent => '█',
    }
}

/// Render a three-line text gauge: the banded bar, a needle, and the scale.
pub fn render_gauge(score: u32, width: usize, use_colors: bool) -> String {
    let width = width.max(MIN_GAUGE_WIDTH);
    let span = f64::from(MAX_SCORE - MIN_SCORE);

    let bar: String = (0..width)
        .map(|cell| {
            let cell_score =
                f64::from(MIN_SCORE) + span * cell as f64 / (width - 1) as f64;
            let band = ScoreBand::classify(cell_score.round() as u32);
            let glyph = band_glyph(band).to_string();
            if use_colors {
                glyph.color(band_color(band)).to_string()
            } else {
                glyph
            }
        })
        .collect();

    let needle_at = position(score, width);
    let needle = format!("{}▲ {}", " ".repeat(needle_at), score);

    let max_label = MAX_SCORE.to_string();
    let scale = format!(
        "{}{}{}",
        MIN_SCORE,
        " ".repeat(width.saturating_sub(3 + max_label.len())),
        max_label
    );

    format!("{}\n{}\n{}", bar, needle, scale)
}
