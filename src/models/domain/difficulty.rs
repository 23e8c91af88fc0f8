use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Mixed,
}

impl Difficulty {
    /// Prompt wording for this difficulty. `Mixed` expands into a percentage blend.
    pub fn instruction(self) -> String {
        match self {
            Difficulty::Mixed => "Difficulty: Mixed. Blend the difficulty across the set: \
                roughly 30% Easy questions (direct, foundational recall or one-step application), \
                50% Medium questions (some application of concepts) and \
                20% Hard questions (analytical, multi-step reasoning). \
                Do not label individual questions with their difficulty."
                .to_string(),
            Difficulty::Hard => "Difficulty: Hard. Every question must be analytical and \
                multi-step, combining at least two concepts or conditions, with distractors \
                built from the most common calculation or reasoning slips."
                .to_string(),
            Difficulty::Medium => "Difficulty: Medium. Questions should require some \
                application of concepts beyond direct recall, typically two steps, at the level \
                of a standard main exam paper."
                .to_string(),
            Difficulty::Easy => "Difficulty: Easy. Questions should be direct and \
                foundational, testing one concept or fact in a single step."
                .to_string(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Mixed => write!(f, "Mixed"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "mixed" => Ok(Difficulty::Mixed),
            other => Err(format!("Unknown difficulty '{}'", other)),
        }
    }
}
