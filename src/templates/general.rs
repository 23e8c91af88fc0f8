use super::{compose, Layout, PromptParams};

/// Knowledge-recall questions for every subject without a specialized template.
pub fn generic_mcq(params: &PromptParams<'_>) -> String {
    let guidance = "Write factual multiple-choice questions strictly within the syllabus context.\n\
        - Mix question forms: direct recall, 'which of the following is/are correct' statement sets, \
        match-the-following pairs and chronological or cause-effect ordering.\n\
        - For statement-based items, list the numbered statements inside questionText and make the \
        options combinations of those statements.\n\
        - Facts, dates, names and figures must be accurate as of the latest official sources; never invent data.\n\
        - Avoid 'All of the above' and 'None of the above' unless the exam pattern genuinely uses them.\n\
        - The explanation states why the answer is correct and briefly why each distractor is wrong.";

    compose(params, "subject-knowledge multiple-choice", guidance, Layout::STANDALONE)
}

pub fn reading_comprehension(params: &PromptParams<'_>) -> String {
    let guidance = format!(
        "Write ONE original passage of 350-450 words and {count} questions on it.\n\
         - The passage is formal, information-dense prose (economy, science, society, banking or governance), \
         not a story, and must not be copied from any published source.\n\
         - Cover these question types across the set: main idea or title, specific detail, inference, \
         vocabulary in context (synonym or antonym of a word used in the passage) and the author's tone or purpose.\n\
         - Every answer must be verifiable from the passage alone; inference items need one clearly best option.\n\
         - Quote the relevant line of the passage in each explanation.",
        count = params.question_count,
    );

    compose(params, "reading comprehension", &guidance, Layout::SHARED)
}

pub fn assertion_reasoning(params: &PromptParams<'_>) -> String {
    let mut options = String::from(
        "  A: Both A and R are true and R is the correct explanation of A.\n\
         \x20 B: Both A and R are true but R is not the correct explanation of A.\n\
         \x20 C: A is true but R is false.\n\
         \x20 D: A is false but R is true.\n",
    );
    if params.options_count >= 5 {
        options.push_str("  E: Both A and R are false.\n");
    }

    let guidance = format!(
        "Each questionText presents 'Assertion (A): ...' and 'Reason (R): ...' on the syllabus topic.\n\
         Use exactly these options, in this order, in every item:\n{options}\
         - Distribute the correct answer across the options; do not make 'A' the answer for most items.\n\
         - When R is true but unrelated to A, the answer must be B, not A.\n\
         - The explanation evaluates A, then R, then the link between them.",
        options = options,
    );

    compose(
        params,
        "assertion and reasoning",
        &guidance,
        Layout {
            shared_context: false,
            question_type: "AssertionReasoning",
        },
    )
}
