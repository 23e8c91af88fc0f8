use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveQuestion {
    pub question_text: String,
    pub marks: u32,
    pub word_limit: u32,
    /// Points a complete answer is expected to cover.
    pub key_points: Vec<String>,
    pub model_answer: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvaluation {
    pub score: f32,
    pub max_score: f32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub feedback: String,
}

impl AnswerEvaluation {
    pub fn clamped(mut self) -> Self {
        if self.max_score < 0.0 {
            self.max_score = 0.0;
        }
        self.score = self.score.clamp(0.0, self.max_score);
        self
    }
}
