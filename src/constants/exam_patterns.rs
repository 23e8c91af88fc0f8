//! Built-in section patterns for every supported (family, stage) pair.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::domain::exam::{
    ExamBlueprint, ExamFamily, ExamStage, SectionBlueprint, TopicDistribution,
};

type Bucket = (&'static [&'static str], u32, u32);

static BLUEPRINTS: Lazy<HashMap<(ExamFamily, ExamStage), ExamBlueprint>> = Lazy::new(|| {
    [
        tnpsc_prelims(),
        bank_prelims(),
        bank_mains(),
        ssc_tier1(),
        ssc_tier2(),
        railway_cbt(ExamStage::Cbt1, 30, 30, 40),
        railway_cbt(ExamStage::Cbt2, 35, 35, 50),
    ]
    .into_iter()
    .map(|blueprint| ((blueprint.family, blueprint.stage), blueprint))
    .collect()
});

pub fn blueprint(family: ExamFamily, stage: ExamStage) -> Option<&'static ExamBlueprint> {
    BLUEPRINTS.get(&(family, stage))
}

fn section(name: &str, question_count: u32, syllabus_section: &str, buckets: &[Bucket]) -> SectionBlueprint {
    SectionBlueprint {
        name: name.to_string(),
        question_count,
        syllabus_section: syllabus_section.to_string(),
        buckets: buckets
            .iter()
            .map(|(keywords, min, max)| TopicDistribution::new(keywords, *min, *max))
            .collect(),
    }
}

/// Scales bucket ranges by `numerator / denominator`, rounding up.
fn scaled(buckets: &[Bucket], numerator: u32, denominator: u32) -> Vec<Bucket> {
    buckets
        .iter()
        .map(|(keywords, min, max)| {
            (
                *keywords,
                (min * numerator).div_ceil(denominator),
                (max * numerator).div_ceil(denominator),
            )
        })
        .collect()
}

const GENERAL_AWARENESS: &[Bucket] = &[
    (&["History"], 4, 6),
    (&["Polity"], 3, 5),
    (&["Geography"], 3, 5),
    (&["Economics"], 2, 4),
    (&["General Science"], 5, 8),
    (&["Current Affairs"], 2, 4),
];

const BANK_ENGLISH: &[Bucket] = &[
    (&["Reading Comprehension"], 8, 10),
    (&["Cloze Test"], 5, 6),
    (&["Error Detection"], 5, 6),
    (&["Para Jumbles"], 4, 5),
    (&["Fillers", "Vocabulary"], 4, 6),
];

const SSC_REASONING: &[Bucket] = &[
    (&["Analogy", "Classification"], 5, 7),
    (&["Coding-Decoding"], 3, 4),
    (&["Blood Relations"], 2, 3),
    (&["Direction Sense"], 2, 3),
    (&["Syllogism"], 2, 3),
    (&["Number Series"], 2, 4),
    (&["Non-Verbal Reasoning"], 3, 5),
];

const SSC_QUANT: &[Bucket] = &[
    (&["Percentage", "Profit and Loss"], 4, 6),
    (&["Simple Interest", "Compound Interest"], 2, 3),
    (&["Time and Work", "Time Speed and Distance"], 3, 4),
    (&["Average", "Ratio and Proportion", "Mixture"], 3, 4),
    (&["Advanced Mathematics"], 7, 10),
    (&["Data Interpretation"], 2, 4),
];

const SSC_ENGLISH: &[Bucket] = &[
    (&["Reading Comprehension"], 5, 7),
    (&["Cloze Test"], 4, 5),
    (&["Error Spotting"], 3, 5),
    (&["Synonyms and Antonyms"], 3, 5),
    (&["Idioms and Phrases", "One Word Substitution"], 3, 5),
];

fn tnpsc_prelims() -> ExamBlueprint {
    ExamBlueprint {
        family: ExamFamily::Tnpsc,
        stage: ExamStage::Prelims,
        sections: vec![
            section(
                "General Studies",
                175,
                "General Studies",
                &[
                    (&["History and Culture of India"], 20, 30),
                    (&["Indian Polity"], 20, 30),
                    (&["Geography"], 15, 25),
                    (&["Indian Economy"], 15, 25),
                    (&["General Science"], 20, 30),
                    (&["Tamil Nadu"], 25, 35),
                    (&["Current Events"], 20, 30),
                ],
            ),
            section(
                "Aptitude and Mental Ability",
                25,
                "Aptitude and Mental Ability",
                &[
                    (&["Simplification", "Percentage", "HCF and LCM"], 6, 9),
                    (&["Ratio", "Interest"], 5, 8),
                    (&["Area and Volume", "Time and Work"], 4, 6),
                    (&["Logical Reasoning"], 6, 9),
                ],
            ),
        ],
    }
}

fn bank_prelims() -> ExamBlueprint {
    ExamBlueprint {
        family: ExamFamily::Bank,
        stage: ExamStage::Prelims,
        sections: vec![
            section("English Language", 30, "English Language", BANK_ENGLISH),
            section(
                "Quantitative Aptitude",
                35,
                "Quantitative Aptitude",
                &[
                    (&["Data Interpretation"], 10, 15),
                    (&["Number Series"], 5, 5),
                    (&["Quadratic Equations"], 5, 5),
                    (&["Simplification", "Approximation"], 0, 5),
                    (&["Profit and Loss", "Percentage", "Average"], 3, 5),
                    (&["Time and Work", "Time Speed and Distance", "Boats and Streams"], 2, 4),
                    (&["Simple Interest", "Compound Interest"], 1, 3),
                ],
            ),
            section(
                "Reasoning Ability",
                35,
                "Reasoning Ability",
                &[
                    (&["Puzzles and Seating"], 15, 20),
                    (&["Syllogism"], 4, 5),
                    (&["Inequality"], 4, 5),
                    (&["Blood Relations"], 2, 3),
                    (&["Direction Sense"], 2, 3),
                    (&["Coding-Decoding", "Order and Ranking"], 3, 5),
                ],
            ),
        ],
    }
}

fn bank_mains() -> ExamBlueprint {
    ExamBlueprint {
        family: ExamFamily::Bank,
        stage: ExamStage::Mains,
        sections: vec![
            section(
                "Reasoning and Computer Aptitude",
                45,
                "Reasoning Ability",
                &[
                    (&["Puzzles and Seating"], 20, 25),
                    (&["Syllogism"], 3, 5),
                    (&["Inequality"], 3, 5),
                    (&["Blood Relations", "Direction Sense"], 4, 6),
                    (&["Data Sufficiency"], 3, 5),
                    (&["Coding-Decoding"], 3, 5),
                    // not in the reasoning section, resolved syllabus-wide
                    (&["Computer Fundamentals", "Networking"], 0, 5),
                ],
            ),
            section(
                "English Language",
                35,
                "English Language",
                &[
                    (&["Reading Comprehension"], 10, 14),
                    (&["Cloze Test"], 5, 7),
                    (&["Error Detection"], 5, 7),
                    (&["Para Jumbles"], 5, 6),
                    (&["Fillers", "Vocabulary"], 4, 6),
                ],
            ),
            section(
                "Data Analysis and Interpretation",
                35,
                "Quantitative Aptitude",
                &[
                    (&["Data Interpretation"], 15, 20),
                    (&["Number Series"], 3, 5),
                    (&["Quadratic Equations"], 0, 5),
                    (&["Combination Profit and Loss", "Partnership", "Mixture"], 4, 6),
                    (&["Probability", "Permutation"], 2, 4),
                    (&["Mensuration", "Ages"], 2, 4),
                ],
            ),
            section(
                "General Awareness",
                40,
                "General Awareness",
                &[
                    (&["Banking Awareness"], 12, 15),
                    (&["Current Affairs"], 15, 20),
                    (&["Static GK"], 5, 10),
                ],
            ),
        ],
    }
}

fn ssc_tier1() -> ExamBlueprint {
    ExamBlueprint {
        family: ExamFamily::Ssc,
        stage: ExamStage::Tier1,
        sections: vec![
            section("General Intelligence and Reasoning", 25, "General Intelligence and Reasoning", SSC_REASONING),
            section("General Awareness", 25, "General Awareness", GENERAL_AWARENESS),
            section("Quantitative Aptitude", 25, "Quantitative Aptitude", SSC_QUANT),
            section("English Comprehension", 25, "English Comprehension", SSC_ENGLISH),
        ],
    }
}

fn ssc_tier2() -> ExamBlueprint {
    ExamBlueprint {
        family: ExamFamily::Ssc,
        stage: ExamStage::Tier2,
        sections: vec![
            section("Mathematical Abilities", 30, "Quantitative Aptitude", &scaled(SSC_QUANT, 6, 5)),
            section(
                "Reasoning and General Intelligence",
                30,
                "General Intelligence and Reasoning",
                &scaled(SSC_REASONING, 6, 5),
            ),
            section(
                "English Language and Comprehension",
                45,
                "English Comprehension",
                &scaled(SSC_ENGLISH, 9, 5),
            ),
            section("General Awareness", 25, "General Awareness", GENERAL_AWARENESS),
            section(
                "Computer Knowledge",
                20,
                "Computer Knowledge",
                &[
                    (&["Computer Fundamentals"], 6, 8),
                    (&["MS Office"], 5, 7),
                    (&["Networking and Internet"], 4, 6),
                    (&["Cyber Security"], 2, 4),
                ],
            ),
        ],
    }
}

/// CBT 1 and CBT 2 share one bucket layout; CBT 2 has longer sections.
fn railway_cbt(stage: ExamStage, maths: u32, reasoning: u32, awareness: u32) -> ExamBlueprint {
    let maths_buckets: &[Bucket] = &[
        (&["Number System", "Simplification", "HCF and LCM"], 5, 7),
        (&["Percentage", "Ratio and Proportion", "Average"], 5, 7),
        (&["Profit and Loss", "Simple Interest", "Compound Interest"], 4, 6),
        (&["Time and Work", "Time Speed and Distance"], 4, 6),
        (&["Mensuration", "Problems on Ages"], 3, 5),
        (&["Mathematics: Advanced"], 3, 5),
    ];
    let reasoning_buckets: &[Bucket] = &[
        (&["Analogy", "Coding-Decoding"], 6, 8),
        (&["Number Series"], 3, 5),
        (&["Syllogism", "Venn Diagrams"], 3, 5),
        (&["Blood Relations", "Direction Sense"], 4, 6),
        (&["Seating Arrangement", "Puzzle"], 4, 6),
        (&["Data Sufficiency", "Statement and Conclusion"], 2, 4),
    ];
    let awareness_buckets: &[Bucket] = &[
        (&["Current Affairs"], 10, 14),
        (&["History"], 5, 7),
        (&["Polity"], 4, 6),
        (&["Geography"], 4, 6),
        (&["Economics"], 3, 5),
        (&["General Science"], 8, 10),
    ];

    ExamBlueprint {
        family: ExamFamily::Railway,
        stage,
        sections: vec![
            section("Mathematics", maths, "Mathematics", &scaled(maths_buckets, maths, 30)),
            section(
                "General Intelligence and Reasoning",
                reasoning,
                "General Intelligence and Reasoning",
                &scaled(reasoning_buckets, reasoning, 30),
            ),
            section(
                "General Awareness",
                awareness,
                "General Awareness",
                &scaled(awareness_buckets, awareness, 40),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::syllabus::syllabus_for;

    const SUPPORTED: &[(ExamFamily, ExamStage)] = &[
        (ExamFamily::Tnpsc, ExamStage::Prelims),
        (ExamFamily::Bank, ExamStage::Prelims),
        (ExamFamily::Bank, ExamStage::Mains),
        (ExamFamily::Ssc, ExamStage::Tier1),
        (ExamFamily::Ssc, ExamStage::Tier2),
        (ExamFamily::Railway, ExamStage::Cbt1),
        (ExamFamily::Railway, ExamStage::Cbt2),
    ];

    #[test]
    fn supported_pairs_have_blueprints() {
        for (family, stage) in SUPPORTED {
            assert!(blueprint(*family, *stage).is_some(), "{} {} missing", family, stage);
        }
        assert!(blueprint(ExamFamily::Tnpsc, ExamStage::Mains).is_none());
        assert!(blueprint(ExamFamily::Railway, ExamStage::Prelims).is_none());
    }

    #[test]
    fn section_totals_are_reachable_from_bucket_ranges() {
        for (family, stage) in SUPPORTED {
            let pattern = blueprint(*family, *stage).expect("blueprint");
            for section in &pattern.sections {
                let min: u32 = section.buckets.iter().map(|b| b.min).sum();
                let max: u32 = section.buckets.iter().map(|b| b.max).sum();
                assert!(
                    min <= section.question_count && section.question_count <= max,
                    "{} {} / {}: {} outside {}..={}",
                    family,
                    stage,
                    section.name,
                    section.question_count,
                    min,
                    max
                );
                assert!(section.buckets.iter().all(|b| b.min <= b.max));
            }
        }
    }

    #[test]
    fn sections_point_at_existing_syllabus_sections() {
        for (family, stage) in SUPPORTED {
            let syllabus = syllabus_for(*family);
            for section in &blueprint(*family, *stage).expect("blueprint").sections {
                assert!(
                    syllabus.iter().any(|s| s.name == section.syllabus_section),
                    "{} {} / {} references unknown syllabus section {}",
                    family,
                    stage,
                    section.name,
                    section.syllabus_section
                );
            }
        }
    }

    #[test]
    fn bank_prelims_follows_the_hundred_question_pattern() {
        let pattern = blueprint(ExamFamily::Bank, ExamStage::Prelims).expect("blueprint");
        assert_eq!(pattern.total_questions(), 100);
        assert_eq!(pattern.section("english language").map(|s| s.question_count), Some(30));
    }
}
