pub mod cancellation;
pub mod descriptive_service;
pub mod dispatcher;
pub mod json_repair;
pub mod mock_provider;
pub mod mock_test_service;
pub mod model_service;
pub mod openai_provider;
pub mod question_service;
pub mod study_service;

pub use cancellation::CancelToken;
pub use descriptive_service::DescriptiveService;
pub use mock_provider::MockProvider;
pub use mock_test_service::MockTestAssembler;
pub use model_service::{ModelProvider, ModelService, ProviderError, RetryPolicy, StructuredRequest};
pub use openai_provider::OpenAiProvider;
pub use question_service::QuestionGenerator;
pub use study_service::StudyService;
