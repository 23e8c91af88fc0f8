use std::collections::BTreeMap;

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::domain::question::{OptionKey, Question, QuestionType};

/// Shape the model is asked to return for every question-generation call.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestionSet {
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question_text: String,
    #[serde(default)]
    pub common_context: Option<String>,
    #[serde(default)]
    pub common_context_diagram_svg: Option<String>,
    pub options: GeneratedOptions,
    pub correct_option: String,
    pub explanation: String,
    #[serde(default)]
    pub explanation_diagram_svg: Option<String>,
    #[serde(rename = "isPYQ", default)]
    pub is_pyq: bool,
    #[serde(default)]
    pub question_subtype: Option<String>,
    #[serde(default)]
    pub question_type: Option<QuestionType>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
    #[serde(rename = "E", default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
}

impl GeneratedOptions {
    /// Keeps exactly the first `options_count` keys. A missing or blank key in that range
    /// rejects the question; anything past it is discarded.
    fn into_map(self, options_count: u8) -> Result<BTreeMap<OptionKey, String>, AppError> {
        let texts = [Some(self.a), Some(self.b), Some(self.c), Some(self.d), self.e];
        let mut options = BTreeMap::new();

        for (key, text) in OptionKey::first(options_count).iter().zip(texts) {
            match text.filter(|text| !text.trim().is_empty()) {
                Some(text) => {
                    options.insert(*key, text);
                }
                None => {
                    return Err(AppError::ValidationError(format!(
                        "Generated question is missing option {} of {}",
                        key, options_count
                    )))
                }
            }
        }
        Ok(options)
    }
}

impl GeneratedQuestion {
    /// Converts model output into a `Question` carrying exactly `options_count` options.
    pub fn into_question(self, options_count: u8) -> Result<Question, AppError> {
        if self.question_text.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Generated question has no text".to_string(),
            ));
        }

        let correct_option: OptionKey = self
            .correct_option
            .parse()
            .map_err(AppError::ValidationError)?;

        let question = Question {
            id: Uuid::new_v4().to_string(),
            question_text: self.question_text,
            common_context: none_if_blank(self.common_context),
            common_context_diagram_svg: none_if_blank(self.common_context_diagram_svg),
            options: self.options.into_map(options_count)?,
            correct_option,
            explanation: self.explanation,
            explanation_diagram_svg: none_if_blank(self.explanation_diagram_svg),
            is_pyq: self.is_pyq,
            question_subtype: self.question_subtype.unwrap_or_default(),
            question_type: self.question_type.unwrap_or(QuestionType::Mcq),
            section: None,
            created_at: Some(Utc::now()),
        };

        if !question.has_valid_answer_key() {
            return Err(AppError::ValidationError(format!(
                "Correct option {} is not among the generated options",
                question.correct_option
            )));
        }

        Ok(question)
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(correct: &str, e: Option<&str>) -> GeneratedQuestion {
        GeneratedQuestion {
            question_text: "Which article deals with the Finance Commission?".to_string(),
            common_context: Some("  ".to_string()),
            common_context_diagram_svg: None,
            options: GeneratedOptions {
                a: "Article 280".to_string(),
                b: "Article 324".to_string(),
                c: "Article 356".to_string(),
                d: "Article 370".to_string(),
                e: e.map(str::to_string),
            },
            correct_option: correct.to_string(),
            explanation: "Article 280 constitutes the Finance Commission.".to_string(),
            explanation_diagram_svg: None,
            is_pyq: false,
            question_subtype: Some("Constitutional Bodies".to_string()),
            question_type: None,
        }
    }

    #[test]
    fn generated_question_converts_with_defaults() {
        let question = generated("A", None).into_question(4).expect("question should convert");

        assert_eq!(question.correct_option, OptionKey::A);
        assert_eq!(question.options.len(), 4);
        assert_eq!(question.question_type, QuestionType::Mcq);
        assert!(question.common_context.is_none(), "blank context should be dropped");
        assert!(question.section.is_none());
    }

    #[test]
    fn five_option_exams_keep_the_fifth_option() {
        let question = generated("E", Some("Article 148"))
            .into_question(5)
            .expect("five-option question should convert");

        assert_eq!(question.options.len(), 5);
        assert_eq!(question.correct_option, OptionKey::E);
    }

    #[test]
    fn four_option_exams_discard_a_fifth_option() {
        let question = generated("B", Some("Article 148"))
            .into_question(4)
            .expect("extra option is trimmed");

        assert_eq!(question.options.len(), 4);
        assert!(!question.options.contains_key(&OptionKey::E));
    }

    #[test]
    fn four_option_exams_reject_a_fifth_option_answer() {
        let result = generated("E", Some("Article 148")).into_question(4);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn five_option_exams_reject_a_missing_fifth_option() {
        assert!(generated("A", None).into_question(5).is_err());
        assert!(generated("A", Some("   ")).into_question(5).is_err());
    }

    #[test]
    fn answer_key_outside_options_is_rejected() {
        let result = generated("E", None).into_question(4);
        assert!(result.is_err());
    }

    #[test]
    fn question_set_deserializes_model_output() {
        let raw = r#"{"questions":[{"questionText":"2+2?","options":{"A":"3","B":"4","C":"5","D":"6"},"correctOption":"B","explanation":"Sum","isPYQ":true,"questionType":"MCQ"}]}"#;
        let set: GeneratedQuestionSet = serde_json::from_str(raw).expect("set should parse");

        assert_eq!(set.questions.len(), 1);
        assert!(set.questions[0].is_pyq);
        assert_eq!(set.questions[0].question_type, Some(QuestionType::Mcq));
    }
}
