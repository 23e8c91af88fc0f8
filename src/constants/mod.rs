pub mod exam_patterns;
pub mod prompts;
pub mod syllabus;
