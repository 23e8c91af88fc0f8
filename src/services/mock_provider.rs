use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    constants::prompts::{
        ANSWER_EVALUATION_SCHEMA, COACH_FEEDBACK_SCHEMA, DESCRIPTIVE_QUESTION_SCHEMA,
        STUDY_NOTES_SCHEMA, STUDY_PLAN_SCHEMA,
    },
    services::model_service::{ModelProvider, ProviderError, StructuredRequest},
};

/// Offline provider used when no API key is configured. Answers with canned objects
/// shaped after the requested schema so the whole pipeline can run end to end.
#[derive(Debug, Clone, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }

    fn canned_response(schema_name: &str) -> Value {
        match schema_name {
            DESCRIPTIVE_QUESTION_SCHEMA => json!({
                "questionText": "Discuss the role of cooperative federalism in implementing centrally sponsored schemes.",
                "marks": 10,
                "wordLimit": 150,
                "keyPoints": [
                    "Meaning of cooperative federalism",
                    "Funding pattern of centrally sponsored schemes",
                    "Role of NITI Aayog and inter-state councils",
                    "Challenges and a balanced conclusion"
                ],
                "modelAnswer": "Cooperative federalism describes the Union and the States working together ..."
            }),
            ANSWER_EVALUATION_SCHEMA => json!({
                "score": 6.5,
                "maxScore": 10,
                "strengths": ["Clear introduction", "Relevant examples"],
                "improvements": ["Add data on fund sharing", "Conclude with a way forward"],
                "feedback": "A well organised answer that needs more supporting facts."
            }),
            COACH_FEEDBACK_SCHEMA => json!({
                "summary": "Solid accuracy in reasoning; arithmetic topics are pulling the score down.",
                "strongAreas": ["Syllogism"],
                "weakAreas": ["Simple Interest"],
                "recommendations": [
                    "Revise simple and compound interest formulas",
                    "Solve 20 timed arithmetic questions a day"
                ]
            }),
            STUDY_NOTES_SCHEMA => json!({
                "topic": "Sample topic",
                "overview": "Offline notes served by the mock provider.",
                "keyConcepts": ["Core definition"],
                "importantFacts": ["Configure AI_API_KEY to generate real notes."],
                "examTips": ["Revise with previous year questions"]
            }),
            STUDY_PLAN_SCHEMA => json!({
                "days": [
                    {"day": 1, "focusTopics": ["Sample topic"], "tasks": ["Read the notes", "Solve 20 questions"]},
                    {"day": 2, "focusTopics": ["Revision"], "tasks": ["Attempt one mock test"]}
                ],
                "advice": "Configure AI_API_KEY to generate a real plan."
            }),
            _ => json!({
                "questions": [{
                    "questionText": "This is a sample question served by the offline mock provider. Which option is correct?",
                    "options": {
                        "A": "The first option",
                        "B": "The second option",
                        "C": "The third option",
                        "D": "The fourth option"
                    },
                    "correctOption": "A",
                    "explanation": "Configure AI_API_KEY to generate real questions.",
                    "isPYQ": false,
                    "questionSubtype": "Sample",
                    "questionType": "MCQ"
                }]
            }),
        }
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    async fn generate_structured(&self, request: StructuredRequest) -> Result<String, ProviderError> {
        log::debug!("Mock provider answering '{}'", request.schema_name);
        Ok(Self::canned_response(&request.schema_name).to_string())
    }
}
