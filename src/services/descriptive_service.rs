use crate::{
    constants::prompts::{
        ANSWER_EVALUATION_SCHEMA, DESCRIPTIVE_QUESTION_SCHEMA, DESCRIPTIVE_SETTER_SYSTEM_PROMPT,
        EVALUATOR_SYSTEM_PROMPT,
    },
    errors::{AppError, AppResult},
    models::domain::{
        descriptive::{AnswerEvaluation, DescriptiveQuestion},
        topic::Topic,
    },
    services::{
        cancellation::CancelToken,
        model_service::{ModelCall, ModelService, ResponseSchema},
    },
};

/// Long-answer (mains) practice: question setting and answer evaluation.
#[derive(Clone)]
pub struct DescriptiveService {
    model: ModelService,
    question_schema: ResponseSchema,
    evaluation_schema: ResponseSchema,
}

impl DescriptiveService {
    pub fn new(model: ModelService) -> Self {
        Self {
            model,
            question_schema: ResponseSchema::of::<DescriptiveQuestion>(DESCRIPTIVE_QUESTION_SCHEMA),
            evaluation_schema: ResponseSchema::of::<AnswerEvaluation>(ANSWER_EVALUATION_SCHEMA),
        }
    }

    pub async fn generate_question(
        &self,
        exam_label: &str,
        topic: &Topic,
        marks: u32,
        cancel: Option<&CancelToken>,
    ) -> AppResult<DescriptiveQuestion> {
        if marks == 0 {
            return Err(AppError::ValidationError(
                "Descriptive questions must carry at least one mark".to_string(),
            ));
        }

        let word_limit = word_limit_for(marks);
        let prompt = format!(
            "Write one descriptive question for the {exam} mains examination.\n\
             Syllabus context: {context}\n\
             Marks: {marks}. Word limit: {word_limit} words.\n\n\
             Return one JSON object with \"questionText\", \"marks\" ({marks}), \"wordLimit\" ({word_limit}), \
             \"keyPoints\" (4 to 8 points a complete answer must cover) and \"modelAnswer\" \
             (a model answer within the word limit).",
            exam = exam_label,
            context = topic.describe(),
            marks = marks,
            word_limit = word_limit,
        );

        log::info!("Generating {}-mark descriptive question on {}", marks, topic.name);

        let mut question: DescriptiveQuestion = self
            .model
            .invoke_as(
                ModelCall {
                    system_instruction: DESCRIPTIVE_SETTER_SYSTEM_PROMPT,
                    prompt: &prompt,
                    schema: &self.question_schema,
                    extended_reasoning: false,
                },
                cancel,
            )
            .await?;

        question.marks = marks;
        if question.word_limit == 0 {
            question.word_limit = word_limit;
        }
        Ok(question)
    }

    pub async fn evaluate_answer(
        &self,
        question: &DescriptiveQuestion,
        answer_text: &str,
        cancel: Option<&CancelToken>,
    ) -> AppResult<AnswerEvaluation> {
        if answer_text.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Answer text must not be empty".to_string(),
            ));
        }

        let prompt = format!(
            "Question ({marks} marks, {word_limit} words): {question}\n\
             Expected key points:\n{key_points}\n\n\
             Candidate's answer:\n\"\"\"\n{answer}\n\"\"\"\n\n\
             Return one JSON object with \"score\" (0 to {marks}), \"maxScore\" ({marks}), \
             \"strengths\", \"improvements\" and \"feedback\".",
            marks = question.marks,
            word_limit = question.word_limit,
            question = question.question_text,
            key_points = question
                .key_points
                .iter()
                .map(|point| format!("- {}", point))
                .collect::<Vec<_>>()
                .join("\n"),
            answer = answer_text.trim(),
        );

        let evaluation: AnswerEvaluation = self
            .model
            .invoke_as(
                ModelCall {
                    system_instruction: EVALUATOR_SYSTEM_PROMPT,
                    prompt: &prompt,
                    schema: &self.evaluation_schema,
                    extended_reasoning: true,
                },
                cancel,
            )
            .await?;

        Ok(AnswerEvaluation {
            max_score: question.marks as f32,
            ..evaluation
        }
        .clamped())
    }
}

/// Mains papers allot roughly 15 words per mark.
fn word_limit_for(marks: u32) -> u32 {
    marks.saturating_mul(15).clamp(50, 300)
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use serde_json::json;

    use super::*;
    use crate::services::model_service::{MockModelProvider, RetryPolicy};

    fn service(mock: MockModelProvider) -> DescriptiveService {
        DescriptiveService::new(ModelService::new(
            Arc::new(mock),
            RetryPolicy::new(2, Duration::from_millis(1)),
        ))
    }

    fn question() -> DescriptiveQuestion {
        DescriptiveQuestion {
            question_text: "Examine the role of self-help groups in rural credit.".to_string(),
            marks: 10,
            word_limit: 150,
            key_points: vec!["Financial inclusion".to_string(), "NABARD linkage".to_string()],
            model_answer: "Self-help groups ...".to_string(),
        }
    }

    #[test]
    fn word_limit_scales_with_marks() {
        assert_eq!(word_limit_for(1), 50);
        assert_eq!(word_limit_for(10), 150);
        assert_eq!(word_limit_for(40), 300);
    }

    #[tokio::test]
    async fn empty_answer_is_rejected_without_a_call() {
        let mut mock = MockModelProvider::new();
        mock.expect_generate_structured().times(0);

        let result = service(mock).evaluate_answer(&question(), "   ", None).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn evaluation_score_is_clamped_to_question_marks() {
        let mut mock = MockModelProvider::new();
        mock.expect_generate_structured()
            .withf(|request| request.schema_name == ANSWER_EVALUATION_SCHEMA && request.prompt.contains("NABARD linkage"))
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "score": 12.5,
                    "maxScore": 20,
                    "strengths": ["Good examples"],
                    "improvements": [],
                    "feedback": "Strong answer."
                })
                .to_string())
            });

        let evaluation = service(mock)
            .evaluate_answer(&question(), "SHGs pool savings and borrow from banks.", None)
            .await
            .expect("evaluation");

        assert_eq!(evaluation.max_score, 10.0);
        assert_eq!(evaluation.score, 10.0);
    }

    #[tokio::test]
    async fn generated_question_keeps_requested_marks() {
        let mut mock = MockModelProvider::new();
        mock.expect_generate_structured()
            .withf(|request| request.schema_name == DESCRIPTIVE_QUESTION_SCHEMA)
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "questionText": "Discuss the Green Revolution's impact on Tamil Nadu agriculture.",
                    "marks": 5,
                    "wordLimit": 0,
                    "keyPoints": ["HYV seeds", "Irrigation"],
                    "modelAnswer": "..."
                })
                .to_string())
            });

        let topic = Topic::new("Green Revolution", "Indian Economy");
        let question = service(mock)
            .generate_question("TNPSC Group 1", &topic, 15, None)
            .await
            .expect("question");

        assert_eq!(question.marks, 15);
        assert_eq!(question.word_limit, 225);
    }
}
