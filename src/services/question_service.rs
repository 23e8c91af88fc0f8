use validator::Validate;

use crate::{
    constants::prompts::{exclusion_clause, QUESTION_SETTER_SYSTEM_PROMPT, QUESTION_SET_SCHEMA},
    errors::{AppError, AppResult},
    models::{
        domain::{question::Question, topic::Topic},
        dto::{GeneratedQuestionSet, GenerationRequest},
    },
    services::{
        cancellation::{checkpoint, CancelToken},
        dispatcher::resolve_generator,
        model_service::{ModelCall, ModelService, ResponseSchema},
    },
    templates::{PromptKind, PromptParams},
};

/// Batch generation controller: routes a request to a template and drives the model
/// calls, chunking set-based kinds so each chunk shares one passage or data set.
#[derive(Clone)]
pub struct QuestionGenerator {
    model: ModelService,
    chunk_size: u32,
    schema: ResponseSchema,
}

impl QuestionGenerator {
    pub fn new(model: ModelService, chunk_size: u32) -> Self {
        Self {
            model,
            chunk_size: chunk_size.max(1),
            schema: ResponseSchema::of::<GeneratedQuestionSet>(QUESTION_SET_SCHEMA),
        }
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
        cancel: Option<&CancelToken>,
    ) -> AppResult<Vec<Question>> {
        request.validate()?;

        if request.question_count == 0 {
            return Ok(Vec::new());
        }

        let kind = resolve_generator(&request.topics);
        let context = syllabus_context(&request.exam_label, &request.topics);

        log::info!(
            "Generating {} {:?} question(s) for {} ({})",
            request.question_count,
            kind,
            request.exam_label,
            context
        );

        if kind.is_set_based() {
            self.generate_in_chunks(kind, request, &context, cancel).await
        } else {
            checkpoint(cancel)?;
            self.generate_batch(
                kind,
                request,
                &context,
                request.question_count,
                request.exclude_text.as_deref(),
                cancel,
            )
            .await
        }
    }

    /// Produces one replacement for `original`, never the same question text.
    pub async fn regenerate(
        &self,
        original: &Question,
        request: &GenerationRequest,
        cancel: Option<&CancelToken>,
    ) -> AppResult<Question> {
        request.validate()?;
        checkpoint(cancel)?;

        let kind = resolve_generator(&request.topics);
        let context = syllabus_context(&request.exam_label, &request.topics);

        log::info!("Regenerating question {} with {:?}", original.id, kind);

        let replacement = self
            .generate_batch(kind, request, &context, 1, Some(&original.question_text), cancel)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::InternalError("The model returned no usable replacement question".to_string())
            })?;

        Ok(match &original.section {
            Some(section) => replacement.with_section(section),
            None => replacement,
        })
    }

    async fn generate_in_chunks(
        &self,
        kind: PromptKind,
        request: &GenerationRequest,
        context: &str,
        cancel: Option<&CancelToken>,
    ) -> AppResult<Vec<Question>> {
        let chunks = split_into_chunks(request.question_count, self.chunk_size);
        let total_chunks = chunks.len();
        let mut questions = Vec::with_capacity(request.question_count as usize);

        for (index, size) in chunks.into_iter().enumerate() {
            checkpoint(cancel)?;

            match self
                .generate_batch(kind, request, context, size, None, cancel)
                .await
            {
                Ok(mut batch) => {
                    batch.truncate(size as usize);
                    unify_common_context(&mut batch);
                    questions.extend(batch);
                }
                Err(err) if err.is_cancellation() => return Err(err),
                Err(err) => {
                    log::warn!(
                        "Skipping chunk {}/{} of {:?} for {}: {}",
                        index + 1,
                        total_chunks,
                        kind,
                        request.exam_label,
                        err
                    );
                }
            }
        }

        Ok(questions)
    }

    async fn generate_batch(
        &self,
        kind: PromptKind,
        request: &GenerationRequest,
        context: &str,
        count: u32,
        exclude_text: Option<&str>,
        cancel: Option<&CancelToken>,
    ) -> AppResult<Vec<Question>> {
        let difficulty = request.difficulty.instruction();
        let params = PromptParams {
            question_count: count,
            syllabus_context: context,
            difficulty_instruction: &difficulty,
            options_count: request.options_count,
        };

        let mut prompt = format!("Target exam: {}.\n{}", request.exam_label, kind.render(&params));
        if let Some(text) = exclude_text {
            prompt.push_str(&exclusion_clause(text));
        }

        let set: GeneratedQuestionSet = self
            .model
            .invoke_as(
                ModelCall {
                    system_instruction: QUESTION_SETTER_SYSTEM_PROMPT,
                    prompt: &prompt,
                    schema: &self.schema,
                    extended_reasoning: request.uses_extended_reasoning(),
                },
                cancel,
            )
            .await?;

        let mut questions: Vec<Question> = set
            .questions
            .into_iter()
            .filter_map(|generated| match generated.into_question(request.options_count) {
                Ok(question) => Some(question),
                Err(err) => {
                    log::warn!("Dropping malformed generated question: {}", err);
                    None
                }
            })
            .collect();

        log::debug!("Model returned {} usable question(s) for a batch of {}", questions.len(), count);
        questions.truncate(count as usize);
        Ok(questions)
    }
}

/// Splits `total` into chunk sizes of at most `chunk_size`, e.g. 12 by 5 gives `[5, 5, 2]`.
pub fn split_into_chunks(total: u32, chunk_size: u32) -> Vec<u32> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::with_capacity(total.div_ceil(chunk_size) as usize);
    let mut remaining = total;
    while remaining > 0 {
        let size = remaining.min(chunk_size);
        chunks.push(size);
        remaining -= size;
    }
    chunks
}

/// Single topic renders as `name (unit)`; several are joined into one list.
pub fn syllabus_context(exam_label: &str, topics: &[Topic]) -> String {
    match topics {
        [] => format!("General syllabus of {}", exam_label),
        [topic] => topic.describe(),
        many => many
            .iter()
            .map(Topic::describe)
            .collect::<Vec<_>>()
            .join("; "),
    }
}

/// Copies the first member's shared context that is not blank onto every member of a chunk.
fn unify_common_context(batch: &mut [Question]) {
    let Some(shared) = batch.iter().find(|question| question.common_context.is_some()) else {
        return;
    };
    let context = shared.common_context.clone();
    let diagram = shared.common_context_diagram_svg.clone();

    for question in batch.iter_mut() {
        question.common_context = context.clone();
        question.common_context_diagram_svg = diagram.clone();
    }
}
