//! Display bands for credit scores. Not used by the engine.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ScoreBand {
    Poor,
    Fair,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Excellent,
}

impl ScoreBand {
    pub const ALL: [ScoreBand; 5] = [
        ScoreBand::Poor,
        ScoreBand::Fair,
        ScoreBand::Good,
        ScoreBand::VeryGood,
        ScoreBand::Excellent,
    ];

    pub fn classify(score: u32) -> Self {
        if score < 580 {
            ScoreBand::Poor
        } else if score < 670 {
            ScoreBand::Fair
        } else if score < 740 {
            ScoreBand::Good
        } else if score < 800 {
            ScoreBand::VeryGood
        } else {
            ScoreBand::Excellent
        }
    }

    /// Inclusive lower bound of the band on the 300-900 scale.
    pub fn lower_bound(self) -> u32 {
        match self {
            ScoreBand::Poor => 300,
            ScoreBand::Fair => 580,
            ScoreBand::Good => 670,
            ScoreBand::VeryGood => 740,
            ScoreBand::Excellent => 800,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Poor => "Poor",
            ScoreBand::Fair => "Fair",
            ScoreBand::Good => "Good",
            ScoreBand::VeryGood => "Very Good",
            ScoreBand::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
