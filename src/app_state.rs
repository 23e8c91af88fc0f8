use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        descriptive_service::DescriptiveService,
        mock_provider::MockProvider,
        mock_test_service::MockTestAssembler,
        model_service::{ModelProvider, ModelService, RetryPolicy},
        openai_provider::OpenAiProvider,
        question_service::QuestionGenerator,
        study_service::StudyService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub model: ModelService,
    pub question_generator: QuestionGenerator,
    pub mock_test_assembler: Arc<MockTestAssembler>,
    pub descriptive_service: DescriptiveService,
    pub study_service: StudyService,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let provider: Arc<dyn ModelProvider> = match &config.api_key {
            Some(api_key) => {
                log::info!(
                    "Using model {} at {}",
                    config.model_name,
                    config.api_base_url
                );
                Arc::new(OpenAiProvider::new(&config, api_key))
            }
            None => {
                log::warn!("AI_API_KEY is not set, falling back to the offline mock provider");
                Arc::new(MockProvider::new())
            }
        };

        Self::with_provider(config, provider)
    }

    /// Wires every service around an explicit provider.
    pub fn with_provider(config: Config, provider: Arc<dyn ModelProvider>) -> AppResult<Self> {
        config.validate()?;

        let model = ModelService::new(provider, RetryPolicy::from_config(&config));
        let question_generator = QuestionGenerator::new(model.clone(), config.chunk_size);
        let mock_test_assembler = Arc::new(MockTestAssembler::new(question_generator.clone()));
        let descriptive_service = DescriptiveService::new(model.clone());
        let study_service = StudyService::new(model.clone());

        Ok(Self {
            config: Arc::new(config),
            model,
            question_generator,
            mock_test_assembler,
            descriptive_service,
            study_service,
        })
    }
}
