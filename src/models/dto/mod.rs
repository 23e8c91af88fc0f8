pub mod request;
pub mod response;
pub use request::{GenerationRequest, MockTestRequest};
pub use response::{GeneratedOptions, GeneratedQuestion, GeneratedQuestionSet};
