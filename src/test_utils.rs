#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    use crate::models::domain::topic::Topic;

    /// Reads the requested question count back out of a rendered prompt.
    pub fn requested_count(prompt: &str) -> usize {
        prompt
            .split("Generate exactly ")
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0)
    }

    /// A well-formed question set of `count` items with four options.
    pub fn question_set_json(count: usize, tag: &str) -> String {
        let questions: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "questionText": format!("{} question {}", tag, i),
                    "options": {"A": "a", "B": "b", "C": "c", "D": "d"},
                    "correctOption": "D",
                    "explanation": "because",
                    "isPYQ": false,
                })
            })
            .collect();
        json!({ "questions": questions }).to_string()
    }

    /// Answers any prompt with exactly the number of questions it asks for.
    pub fn echo_question_set(prompt: &str) -> String {
        question_set_json(requested_count(prompt), "echo")
    }

    pub fn reasoning_topics() -> Vec<Topic> {
        vec![
            Topic::new("Syllogism", "Reasoning: Logical Reasoning"),
            Topic::new("Inequality", "Reasoning: Logical Reasoning"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::dispatcher::resolve_generator;
    use crate::templates::PromptKind;

    #[test]
    fn test_requested_count_reads_prompt_header() {
        assert_eq!(requested_count("Target exam: X.\nGenerate exactly 7 syllogism question(s)"), 7);
        assert_eq!(requested_count("no header"), 0);
    }

    #[test]
    fn test_echo_set_matches_request() {
        let body: serde_json::Value =
            serde_json::from_str(&echo_question_set("Generate exactly 3 puzzle question(s)")).expect("json");
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_reasoning_topics_route_to_a_specialized_template() {
        assert_ne!(resolve_generator(&reasoning_topics()), PromptKind::GenericMcq);
    }
}
