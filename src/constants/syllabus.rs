//! Compact per-family syllabus trees used to resolve mock-test buckets into topics.
//!
//! Unit titles of the aptitude and reasoning units carry the keywords the dispatcher
//! looks for ("Quantitative Aptitude: ...", "Reasoning: ..."), so topics drawn from
//! them route to specialized templates.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::domain::{
    exam::ExamFamily,
    topic::{SyllabusSection, SyllabusUnit},
};

static SYLLABI: Lazy<HashMap<ExamFamily, Vec<SyllabusSection>>> = Lazy::new(|| {
    HashMap::from([
        (ExamFamily::Tnpsc, tnpsc()),
        (ExamFamily::Bank, bank()),
        (ExamFamily::Ssc, ssc()),
        (ExamFamily::Railway, railway()),
    ])
});

pub fn syllabus_for(family: ExamFamily) -> &'static [SyllabusSection] {
    SYLLABI.get(&family).map(Vec::as_slice).unwrap_or(&[])
}

fn general_awareness(prefix: &str) -> SyllabusSection {
    let id = |suffix: &str| format!("{}-ga-{}", prefix, suffix);
    SyllabusSection::new(
        "General Awareness",
        vec![
            SyllabusUnit::new(&id("cur"), "Current Affairs", &["National Current Affairs", "International Current Affairs", "Sports and Awards", "Government Schemes"]),
            SyllabusUnit::new(&id("his"), "History", &["Ancient India", "Medieval India", "Modern India and the Freedom Struggle"]),
            SyllabusUnit::new(&id("pol"), "Polity", &["Constitution of India", "Parliament and State Legislatures", "Judiciary"]),
            SyllabusUnit::new(&id("geo"), "Geography", &["Physical Geography", "Indian Geography", "World Geography"]),
            SyllabusUnit::new(&id("eco"), "Economics", &["Indian Economy Basics", "Budget and Fiscal Policy", "Inflation and Monetary Policy"]),
            SyllabusUnit::new(&id("sci"), "General Science", &["Physics", "Chemistry", "Biology"]),
            SyllabusUnit::new(&id("gk"), "Static GK", &["Books and Authors", "Important Days", "Dams, Parks and Sanctuaries"]),
        ],
    )
}

fn english(name: &str, prefix: &str) -> SyllabusSection {
    SyllabusSection::new(
        name,
        vec![
            SyllabusUnit::new(&format!("{}-eng-rc", prefix), "English Language", &["Reading Comprehension", "Cloze Test"]),
            SyllabusUnit::new(
                &format!("{}-eng-grammar", prefix),
                "English Language: Grammar and Usage",
                &["Error Detection", "Error Spotting", "Para Jumbles", "Fillers", "Vocabulary", "Synonyms and Antonyms", "Idioms and Phrases", "One Word Substitution"],
            ),
        ],
    )
}

fn computer_knowledge(prefix: &str) -> SyllabusSection {
    SyllabusSection::new(
        "Computer Knowledge",
        vec![SyllabusUnit::new(
            &format!("{}-comp", prefix),
            "Computer Knowledge",
            &["Computer Fundamentals", "MS Office", "Networking and Internet", "Cyber Security"],
        )],
    )
}

fn tnpsc() -> Vec<SyllabusSection> {
    vec![
        SyllabusSection::new(
            "General Studies",
            vec![
                SyllabusUnit::new("tn-gs-sci", "General Science", &["Physics", "Chemistry", "Biology", "Environment and Ecology"]),
                SyllabusUnit::new("tn-gs-ind-his", "History and Culture of India", &["Indus Valley Civilization", "Vedic Age", "Mauryan Empire", "Indian National Movement"]),
                SyllabusUnit::new("tn-gs-pol", "Indian Polity", &["Preamble and Fundamental Rights", "Directive Principles", "Panchayati Raj", "Constitutional Bodies"]),
                SyllabusUnit::new("tn-gs-geo", "Geography of India", &["Monsoon and Climate", "Rivers of India", "Soils and Agriculture"]),
                SyllabusUnit::new("tn-gs-eco", "Indian Economy", &["Five Year Plans", "Land Reforms", "Rural Welfare Programmes"]),
                SyllabusUnit::new("tn-gs-tn-his", "History, Culture and Heritage of Tamil Nadu", &["Sangam Age", "Thirukkural", "Role of Tamil Nadu in the Freedom Struggle", "Social Reform Movements"]),
                SyllabusUnit::new("tn-gs-tn-adm", "Development Administration in Tamil Nadu", &["Social Justice Schemes", "Human Development Indicators", "e-Governance in Tamil Nadu"]),
                SyllabusUnit::new("tn-gs-cur", "Current Events", &["State Current Affairs", "National Current Affairs", "Science and Technology Updates"]),
            ],
        ),
        SyllabusSection::new(
            "Aptitude and Mental Ability",
            vec![
                SyllabusUnit::new(
                    "tn-apt-quant",
                    "Aptitude and Mental Ability: Quantitative Aptitude",
                    &["Simplification", "Percentage", "HCF and LCM", "Ratio and Proportion", "Simple Interest", "Compound Interest", "Area and Volume", "Time and Work"],
                ),
                SyllabusUnit::new(
                    "tn-apt-lr",
                    "Aptitude and Mental Ability: Logical Reasoning",
                    &["Logical Puzzles", "Dice", "Visual Reasoning", "Number Series"],
                ),
            ],
        ),
    ]
}

fn bank() -> Vec<SyllabusSection> {
    vec![
        english("English Language", "bk"),
        SyllabusSection::new(
            "Quantitative Aptitude",
            vec![
                SyllabusUnit::new(
                    "bk-qa-di",
                    "Quantitative Aptitude: Data Interpretation",
                    &["Bar Graph", "Line Graph", "Pie Chart", "Tabular Data", "Caselet", "Missing Data Interpretation"],
                ),
                SyllabusUnit::new(
                    "bk-qa-num",
                    "Quantitative Aptitude: Speed Maths",
                    &["Number Series", "Quadratic Equations", "Simplification", "Approximation"],
                ),
                SyllabusUnit::new(
                    "bk-qa-arith",
                    "Quantitative Aptitude: Arithmetic",
                    &[
                        "Profit and Loss", "Combination Profit and Loss Question", "Simple Interest", "Compound Interest",
                        "Time and Work", "Pipes and Cisterns", "Boats and Streams", "Time Speed and Distance",
                        "Average", "Partnership", "Mixture and Alligation", "Ratio and Proportion", "Percentage",
                        "Problems on Ages", "Mensuration", "Permutation and Combination", "Probability",
                    ],
                ),
            ],
        ),
        SyllabusSection::new(
            "Reasoning Ability",
            vec![
                SyllabusUnit::new(
                    "bk-ra-puz",
                    "Reasoning: Puzzles and Seating",
                    &["Linear Seating Arrangement", "Circular Seating Arrangement", "Floor Puzzle", "Box Puzzle", "Month Based Scheduling Puzzle", "Comparison Puzzle"],
                ),
                SyllabusUnit::new(
                    "bk-ra-logic",
                    "Reasoning: Logical Reasoning",
                    &["Syllogism", "Inequality", "Blood Relations", "Direction Sense", "Coding-Decoding", "Order and Ranking", "Data Sufficiency"],
                ),
            ],
        ),
        SyllabusSection::new(
            "General Awareness",
            vec![
                SyllabusUnit::new("bk-ga-bank", "Banking Awareness", &["RBI and Monetary Policy", "Banking Regulation", "Financial Inclusion Schemes", "Payment Systems"]),
                SyllabusUnit::new("bk-ga-cur", "Current Affairs", &["Economy Current Affairs", "Appointments and Awards", "Summits and Agreements"]),
                SyllabusUnit::new("bk-ga-gk", "Static GK", &["Headquarters and Taglines", "Currencies and Capitals", "National Parks"]),
            ],
        ),
        computer_knowledge("bk"),
    ]
}

fn ssc() -> Vec<SyllabusSection> {
    vec![
        SyllabusSection::new(
            "General Intelligence and Reasoning",
            vec![
                SyllabusUnit::new(
                    "ssc-gi-verbal",
                    "General Intelligence: Verbal Reasoning",
                    &["Analogy", "Classification", "Coding-Decoding", "Blood Relations", "Direction Sense", "Syllogism", "Number Series", "Order and Ranking"],
                ),
                SyllabusUnit::new(
                    "ssc-gi-nonverbal",
                    "General Intelligence: Non-Verbal Reasoning",
                    &["Mirror Image", "Paper Folding", "Embedded Figures", "Figure Counting"],
                ),
            ],
        ),
        general_awareness("ssc"),
        SyllabusSection::new(
            "Quantitative Aptitude",
            vec![
                SyllabusUnit::new(
                    "ssc-qa-arith",
                    "Quantitative Aptitude: Arithmetic",
                    &["Percentage", "Profit and Loss", "Simple Interest", "Compound Interest", "Time and Work", "Time Speed and Distance", "Average", "Ratio and Proportion", "Mixture and Alligation"],
                ),
                SyllabusUnit::new(
                    "ssc-qa-adv",
                    "Quantitative Aptitude: Advanced Mathematics",
                    &["Algebra", "Geometry", "Trigonometry", "Mensuration"],
                ),
                SyllabusUnit::new(
                    "ssc-qa-di",
                    "Quantitative Aptitude: Data Interpretation",
                    &["Bar Graph", "Pie Chart", "Tabular Data"],
                ),
            ],
        ),
        english("English Comprehension", "ssc"),
        computer_knowledge("ssc"),
    ]
}

fn railway() -> Vec<SyllabusSection> {
    vec![
        SyllabusSection::new(
            "Mathematics",
            vec![
                SyllabusUnit::new(
                    "rrb-math-arith",
                    "Mathematics: Arithmetic",
                    &[
                        "Number System", "Simplification", "HCF and LCM", "Percentage", "Ratio and Proportion", "Average",
                        "Profit and Loss", "Simple Interest", "Compound Interest", "Time and Work", "Time Speed and Distance",
                        "Mensuration", "Problems on Ages",
                    ],
                ),
                SyllabusUnit::new(
                    "rrb-math-adv",
                    "Mathematics: Advanced",
                    &["Algebra", "Geometry", "Trigonometry", "Elementary Statistics"],
                ),
            ],
        ),
        SyllabusSection::new(
            "General Intelligence and Reasoning",
            vec![SyllabusUnit::new(
                "rrb-gi",
                "General Intelligence and Reasoning",
                &[
                    "Analogy", "Coding-Decoding", "Number Series", "Syllogism", "Venn Diagrams", "Blood Relations",
                    "Direction Sense", "Seating Arrangement", "Puzzle", "Data Sufficiency", "Statement and Conclusion",
                ],
            )],
        ),
        general_awareness("rrb"),
    ]
}
