use crate::{
    constants::prompts::{
        COACH_FEEDBACK_SCHEMA, COACH_SYSTEM_PROMPT, STUDY_NOTES_SCHEMA, STUDY_NOTES_SYSTEM_PROMPT,
        STUDY_PLANNER_SYSTEM_PROMPT, STUDY_PLAN_SCHEMA,
    },
    errors::{AppError, AppResult},
    models::domain::{
        study::{CoachFeedback, StudyNotes, StudyPlan, TopicScore},
        topic::Topic,
    },
    services::{
        cancellation::CancelToken,
        model_service::{ModelCall, ModelService, ResponseSchema},
    },
};

const MAX_PLAN_DAYS: u32 = 180;

/// Study companions around the question bank: coaching on results, revision notes
/// and day-by-day plans.
#[derive(Clone)]
pub struct StudyService {
    model: ModelService,
    feedback_schema: ResponseSchema,
    notes_schema: ResponseSchema,
    plan_schema: ResponseSchema,
}

impl StudyService {
    pub fn new(model: ModelService) -> Self {
        Self {
            model,
            feedback_schema: ResponseSchema::of::<CoachFeedback>(COACH_FEEDBACK_SCHEMA),
            notes_schema: ResponseSchema::of::<StudyNotes>(STUDY_NOTES_SCHEMA),
            plan_schema: ResponseSchema::of::<StudyPlan>(STUDY_PLAN_SCHEMA),
        }
    }

    pub async fn coach_feedback(
        &self,
        exam_label: &str,
        scores: &[TopicScore],
        cancel: Option<&CancelToken>,
    ) -> AppResult<CoachFeedback> {
        if scores.is_empty() {
            return Err(AppError::ValidationError(
                "Coach feedback needs at least one topic score".to_string(),
            ));
        }
        if let Some(score) = scores.iter().find(|score| score.correct > score.attempted) {
            return Err(AppError::ValidationError(format!(
                "Topic '{}' has more correct answers than attempts",
                score.topic
            )));
        }

        let results = scores
            .iter()
            .map(|score| {
                format!(
                    "- {}: {}/{} correct ({}%)",
                    score.topic,
                    score.correct,
                    score.attempted,
                    score.accuracy_percent()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = format!(
            "A candidate preparing for {exam} finished a practice session.\n\
             Topic-wise results:\n{results}\n\n\
             Return one JSON object with \"summary\" (two or three sentences), \"strongAreas\" \
             and \"weakAreas\" (topic names from the results) and \"recommendations\" \
             (three to five concrete next steps).",
            exam = exam_label,
            results = results,
        );

        log::info!("Requesting coach feedback over {} topics", scores.len());

        self.model
            .invoke_as(
                ModelCall {
                    system_instruction: COACH_SYSTEM_PROMPT,
                    prompt: &prompt,
                    schema: &self.feedback_schema,
                    extended_reasoning: false,
                },
                cancel,
            )
            .await
    }

    pub async fn study_notes(
        &self,
        exam_label: &str,
        topic: &Topic,
        cancel: Option<&CancelToken>,
    ) -> AppResult<StudyNotes> {
        let prompt = format!(
            "Write revision notes for the {exam} syllabus topic: {context}\n\n\
             Return one JSON object with \"topic\", \"overview\" (one paragraph), \"keyConcepts\", \
             \"importantFacts\" (dates, figures, articles or formulas as relevant) and \"examTips\".",
            exam = exam_label,
            context = topic.describe(),
        );

        log::info!("Generating study notes on {}", topic.name);

        let notes: StudyNotes = self
            .model
            .invoke_as(
                ModelCall {
                    system_instruction: STUDY_NOTES_SYSTEM_PROMPT,
                    prompt: &prompt,
                    schema: &self.notes_schema,
                    extended_reasoning: false,
                },
                cancel,
            )
            .await?;

        Ok(StudyNotes {
            topic: topic.name.clone(),
            ..notes
        })
    }

    pub async fn study_plan(
        &self,
        exam_label: &str,
        topics: &[Topic],
        day_count: u32,
        cancel: Option<&CancelToken>,
    ) -> AppResult<StudyPlan> {
        if topics.is_empty() {
            return Err(AppError::ValidationError(
                "A study plan needs at least one topic".to_string(),
            ));
        }
        if !(1..=MAX_PLAN_DAYS).contains(&day_count) {
            return Err(AppError::ValidationError(format!(
                "A study plan covers 1 to {} days, got {}",
                MAX_PLAN_DAYS, day_count
            )));
        }

        let syllabus = topics
            .iter()
            .map(|topic| format!("- {}", topic.describe()))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = format!(
            "Plan {days} days of preparation for {exam} covering these topics:\n{syllabus}\n\n\
             Return one JSON object with \"days\" (exactly {days} entries, each with \"day\", \
             \"focusTopics\" and \"tasks\") and \"advice\".",
            days = day_count,
            exam = exam_label,
            syllabus = syllabus,
        );

        log::info!("Planning {} study days over {} topics", day_count, topics.len());

        let plan: StudyPlan = self
            .model
            .invoke_as(
                ModelCall {
                    system_instruction: STUDY_PLANNER_SYSTEM_PROMPT,
                    prompt: &prompt,
                    schema: &self.plan_schema,
                    extended_reasoning: true,
                },
                cancel,
            )
            .await?;

        if plan.days.len() < day_count as usize {
            log::warn!(
                "Study plan came back with {} of {} days",
                plan.days.len(),
                day_count
            );
        }
        Ok(plan.normalized(day_count))
    }
}
