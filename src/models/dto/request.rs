use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{
    difficulty::Difficulty,
    exam::{ExamFamily, ExamPatternConfig, ExamStage},
    topic::Topic,
};

/// Input to one batch-generation call.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerationRequest {
    #[validate(length(min = 1, max = 100))]
    pub exam_label: String,

    #[validate(range(min = 4, max = 5))]
    pub options_count: u8,

    pub topics: Vec<Topic>,

    #[validate(range(max = 200))]
    pub question_count: u32,

    pub difficulty: Difficulty,

    /// Question text the model must not repeat (single-question regeneration).
    pub exclude_text: Option<String>,

    pub force_extended_reasoning: bool,
}

impl GenerationRequest {
    pub fn new(exam_label: impl Into<String>, topics: Vec<Topic>, question_count: u32) -> Self {
        Self {
            exam_label: exam_label.into(),
            options_count: 4,
            topics,
            question_count,
            difficulty: Difficulty::Medium,
            exclude_text: None,
            force_extended_reasoning: false,
        }
    }

    pub fn with_options_count(mut self, options_count: u8) -> Self {
        self.options_count = options_count;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn excluding(mut self, question_text: impl Into<String>) -> Self {
        self.exclude_text = Some(question_text.into());
        self
    }

    pub fn with_extended_reasoning(mut self, forced: bool) -> Self {
        self.force_extended_reasoning = forced;
        self
    }

    pub fn uses_extended_reasoning(&self) -> bool {
        self.force_extended_reasoning || self.difficulty == Difficulty::Hard
    }
}

/// Input to one mock-test assembly.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MockTestRequest {
    pub family: ExamFamily,

    #[validate(length(min = 1, max = 100))]
    pub variant: String,

    pub stage: ExamStage,

    pub difficulty: Difficulty,

    #[validate(nested)]
    pub pattern_override: Option<ExamPatternConfig>,
}

impl MockTestRequest {
    pub fn new(family: ExamFamily, variant: impl Into<String>, stage: ExamStage) -> Self {
        Self {
            family,
            variant: variant.into(),
            stage,
            difficulty: Difficulty::Mixed,
            pattern_override: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_pattern_override(mut self, pattern: ExamPatternConfig) -> Self {
        self.pattern_override = Some(pattern);
        self
    }

    pub fn exam_label(&self) -> String {
        format!("{} {}", self.variant, self.stage)
    }
}
