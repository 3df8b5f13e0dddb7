use serde::Serialize;
use std::fmt;

/// Score Classifier - スコア帯の判定
///
/// Cutoffs are inclusive upper bounds. Scores are NOT clamped here, callers
/// clamp for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreCategory {
    Poor,
    Fair,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Excellent,
}

impl ScoreCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Poor => "Poor",
            ScoreCategory::Fair => "Fair",
            ScoreCategory::Good => "Good",
            ScoreCategory::VeryGood => "Very Good",
            ScoreCategory::Excellent => "Excellent",
        }
    }

    /// Display color for the category
    pub fn color(&self) -> &'static str {
        match self {
            ScoreCategory::Poor => "#ff4d4f",
            ScoreCategory::Fair => "#ff9f43",
            ScoreCategory::Good => "#f5d442",
            ScoreCategory::VeryGood => "#7ed957",
            ScoreCategory::Excellent => "#22c55e",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn categorize(score: i32) -> ScoreCategory {
    match score {
        s if s <= 579 => ScoreCategory::Poor,
        s if s <= 669 => ScoreCategory::Fair,
        s if s <= 739 => ScoreCategory::Good,
        s if s <= 799 => ScoreCategory::VeryGood,
        _ => ScoreCategory::Excellent,
    }
}

pub fn color_of(score: i32) -> &'static str {
    categorize(score).color()
}
