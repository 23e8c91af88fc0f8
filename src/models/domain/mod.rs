pub mod descriptive;
pub mod difficulty;
pub mod exam;
pub mod question;
pub mod study;
pub mod topic;
pub use descriptive::{AnswerEvaluation, DescriptiveQuestion};
pub use difficulty::Difficulty;
pub use exam::{
    ExamBlueprint, ExamFamily, ExamPatternConfig, ExamStage, SectionBlueprint, SectionPattern,
    TopicDistribution,
};
pub use question::{OptionKey, Question, QuestionType};
pub use study::{CoachFeedback, StudyDay, StudyNotes, StudyPlan, TopicScore};
pub use topic::{SyllabusSection, SyllabusUnit, Topic};
