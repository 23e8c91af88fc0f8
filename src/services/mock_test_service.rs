//! Full-length mock test assembly from the built-in exam patterns.

use rand::Rng;
use validator::Validate;

use crate::{
    constants::{exam_patterns::blueprint, syllabus::syllabus_for},
    errors::{AppError, AppResult},
    models::{
        domain::{
            exam::{SectionBlueprint, TopicDistribution},
            question::Question,
            topic::{SyllabusSection, Topic},
        },
        dto::{GenerationRequest, MockTestRequest},
    },
    services::{
        cancellation::{checkpoint, CancelToken},
        question_service::QuestionGenerator,
    },
};

/// Bucket counts after rebalancing. `shortfall` is `target - sum(counts)`: positive when
/// the buckets could not reach the section total, negative when their minimums exceed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebalanceOutcome {
    pub counts: Vec<u32>,
    pub shortfall: i64,
}

impl RebalanceOutcome {
    pub fn is_exact(&self) -> bool {
        self.shortfall == 0
    }
}

/// Draws one count per bucket, uniformly within its `[min, max]`.
pub fn draw_bucket_counts<R: Rng + ?Sized>(buckets: &[TopicDistribution], rng: &mut R) -> Vec<u32> {
    buckets
        .iter()
        .map(|bucket| rng.gen_range(bucket.min..=bucket.max.max(bucket.min)))
        .collect()
}

/// Walks the buckets in list order, one step per bucket per pass, until the counts sum
/// to `target` or no bucket can move without leaving its range.
pub fn rebalance_counts(mut counts: Vec<u32>, buckets: &[TopicDistribution], target: u32) -> RebalanceOutcome {
    let mut sum: u32 = counts.iter().sum();

    while sum != target {
        let mut moved = false;

        for (count, bucket) in counts.iter_mut().zip(buckets) {
            if sum == target {
                break;
            }
            if sum < target && *count < bucket.max {
                *count += 1;
                sum += 1;
                moved = true;
            } else if sum > target && *count > bucket.min {
                *count -= 1;
                sum -= 1;
                moved = true;
            }
        }

        if !moved {
            break;
        }
    }

    RebalanceOutcome {
        shortfall: i64::from(target) - i64::from(sum),
        counts,
    }
}

fn matches_any(text: &str, keywords: &[String]) -> bool {
    let text = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| text.contains(&keyword.to_lowercase()))
}

/// Resolves a bucket's keywords to syllabus topics: unit titles inside the section first,
/// then topic names inside the section, then topic names anywhere in the syllabus.
pub fn resolve_topics(
    syllabus: &[SyllabusSection],
    section_name: &str,
    keywords: &[String],
) -> AppResult<Vec<Topic>> {
    let section = syllabus
        .iter()
        .find(|section| section.name.eq_ignore_ascii_case(section_name));

    if let Some(section) = section {
        let by_unit: Vec<Topic> = section
            .units
            .iter()
            .filter(|unit| matches_any(&unit.title, keywords))
            .flat_map(|unit| unit.topics.iter().cloned())
            .collect();
        if !by_unit.is_empty() {
            return Ok(by_unit);
        }

        let by_name: Vec<Topic> = section
            .topics()
            .filter(|topic| matches_any(&topic.name, keywords))
            .cloned()
            .collect();
        if !by_name.is_empty() {
            return Ok(by_name);
        }
    }

    let anywhere: Vec<Topic> = syllabus
        .iter()
        .flat_map(|section| section.topics())
        .filter(|topic| matches_any(&topic.name, keywords))
        .cloned()
        .collect();

    if anywhere.is_empty() {
        return Err(AppError::TopicResolution(format!(
            "no topic in section '{}' matches {}",
            section_name,
            keywords.join(", ")
        )));
    }
    Ok(anywhere)
}

/// Sections to assemble: the built-in pattern, or the caller's override mapped onto it.
pub fn plan_sections(request: &MockTestRequest) -> AppResult<Vec<SectionBlueprint>> {
    request.validate()?;

    let builtin = blueprint(request.family, request.stage);

    let Some(pattern) = &request.pattern_override else {
        return builtin.map(|b| b.sections.clone()).ok_or_else(|| {
            AppError::ValidationError(format!(
                "No exam pattern for {} {}",
                request.family, request.stage
            ))
        });
    };

    Ok(pattern
        .sections
        .iter()
        .map(|custom| match builtin.and_then(|b| b.section(&custom.section_name)) {
            Some(known) => SectionBlueprint {
                question_count: custom.question_count,
                ..known.clone()
            },
            None => SectionBlueprint {
                name: custom.section_name.clone(),
                question_count: custom.question_count,
                syllabus_section: custom.section_name.clone(),
                buckets: vec![TopicDistribution {
                    topic_keywords: vec![custom.section_name.clone()],
                    min: custom.question_count,
                    max: custom.question_count,
                }],
            },
        })
        .collect())
}

pub struct MockTestAssembler {
    generator: QuestionGenerator,
}

impl MockTestAssembler {
    pub fn new(generator: QuestionGenerator) -> Self {
        Self { generator }
    }

    /// Assembles a full mock test, reporting progress on a 0..=100 scale after every section.
    pub async fn assemble(
        &self,
        request: &MockTestRequest,
        progress: &(dyn Fn(u8) + Send + Sync),
        cancel: Option<&CancelToken>,
    ) -> AppResult<Vec<Question>> {
        let sections = plan_sections(request)?;
        let syllabus = syllabus_for(request.family);
        let exam_label = request.exam_label();
        let planned: u32 = sections.iter().map(|s| s.question_count).sum();

        log::info!(
            "Assembling {} mock test: {} section(s), {} question(s)",
            exam_label,
            sections.len(),
            planned
        );
        progress(0);

        let mut questions = Vec::with_capacity(planned as usize);
        let mut covered = 0u32;

        for section in &sections {
            checkpoint(cancel)?;

            let drawn = draw_bucket_counts(&section.buckets, &mut rand::thread_rng());
            let outcome = rebalance_counts(drawn, &section.buckets, section.question_count);
            if !outcome.is_exact() {
                log::warn!(
                    "Section '{}' cannot reach {} question(s) within its bucket ranges (shortfall {}), continuing with {:?}",
                    section.name,
                    section.question_count,
                    outcome.shortfall,
                    outcome.counts
                );
            }

            for (bucket, count) in section.buckets.iter().zip(outcome.counts) {
                if count == 0 {
                    continue;
                }

                let topics = resolve_topics(syllabus, &section.syllabus_section, &bucket.topic_keywords)?;
                let generation = GenerationRequest::new(exam_label.clone(), topics, count)
                    .with_options_count(request.family.options_count())
                    .with_difficulty(request.difficulty)
                    .with_extended_reasoning(true);

                let generated = self.generator.generate(&generation, cancel).await?;
                questions.extend(
                    generated
                        .into_iter()
                        .map(|question| question.with_section(&section.name)),
                );
            }

            covered += section.question_count;
            let percent = (u64::from(covered) * 100 / u64::from(planned.max(1))).min(100);
            progress(percent as u8);
            log::debug!("Section '{}' done, progress {}%", section.name, percent);
        }

        log::info!("Assembled {} question(s) for {}", questions.len(), exam_label);
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::models::domain::{
        exam::{ExamFamily, ExamPatternConfig, ExamStage, SectionPattern},
        topic::SyllabusUnit,
    };
    use crate::services::model_service::{MockModelProvider, ModelService, RetryPolicy};
    use crate::test_utils::fixtures::echo_question_set;

    fn buckets(ranges: &[(u32, u32)]) -> Vec<TopicDistribution> {
        ranges
            .iter()
            .map(|(min, max)| TopicDistribution::new(&["x"], *min, *max))
            .collect()
    }

    fn echo_provider() -> MockModelProvider {
        let mut mock = MockModelProvider::new();
        mock.expect_generate_structured()
            .returning(|request| Ok(echo_question_set(&request.prompt)));
        mock
    }

    fn assembler(mock: MockModelProvider) -> MockTestAssembler {
        let model = ModelService::new(Arc::new(mock), RetryPolicy::new(1, Duration::from_millis(1)));
        MockTestAssembler::new(QuestionGenerator::new(model, 5))
    }

    fn sample_syllabus() -> Vec<SyllabusSection> {
        vec![
            SyllabusSection::new(
                "Reasoning Ability",
                vec![
                    SyllabusUnit::new("r1", "Reasoning: Puzzles and Seating", &["Floor Puzzle", "Box Puzzle"]),
                    SyllabusUnit::new("r2", "Reasoning: Logical Reasoning", &["Syllogism", "Inequality"]),
                ],
            ),
            SyllabusSection::new(
                "Computer Knowledge",
                vec![SyllabusUnit::new("c1", "Computer Knowledge", &["Networking and Internet"])],
            ),
        ]
    }

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn draws_stay_within_bucket_ranges() {
        let ranges = buckets(&[(0, 5), (3, 3), (10, 15)]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let counts = draw_bucket_counts(&ranges, &mut rng);
            for (count, bucket) in counts.iter().zip(&ranges) {
                assert!((bucket.min..=bucket.max).contains(count));
            }
        }
    }

    #[test]
    fn rebalance_reaches_reachable_targets_exactly() {
        let ranges = buckets(&[(2, 6), (1, 4), (0, 5)]);
        for target in 3..=15 {
            let mut rng = StdRng::seed_from_u64(target as u64);
            let outcome = rebalance_counts(draw_bucket_counts(&ranges, &mut rng), &ranges, target);

            assert!(outcome.is_exact(), "target {} gave {:?}", target, outcome);
            assert_eq!(outcome.counts.iter().sum::<u32>(), target);
            for (count, bucket) in outcome.counts.iter().zip(&ranges) {
                assert!((bucket.min..=bucket.max).contains(count));
            }
        }
    }

    #[test]
    fn rebalance_moves_buckets_in_list_order() {
        let ranges = buckets(&[(0, 5), (0, 5), (0, 5)]);
        let outcome = rebalance_counts(vec![0, 0, 0], &ranges, 4);
        assert_eq!(outcome.counts, vec![2, 1, 1]);

        let outcome = rebalance_counts(vec![5, 5, 5], &ranges, 13);
        assert_eq!(outcome.counts, vec![4, 4, 5]);
    }

    #[test]
    fn unreachable_targets_are_clamped_with_signed_shortfall() {
        let ranges = buckets(&[(2, 3), (2, 3)]);

        let over = rebalance_counts(vec![3, 3], &ranges, 2);
        assert_eq!(over.counts, vec![2, 2]);
        assert_eq!(over.shortfall, -2);

        let under = rebalance_counts(vec![2, 2], &ranges, 10);
        assert_eq!(under.counts, vec![3, 3]);
        assert_eq!(under.shortfall, 4);
    }

    #[test]
    fn topics_resolve_by_unit_then_name_then_syllabus_wide() {
        let syllabus = sample_syllabus();

        let by_unit = resolve_topics(&syllabus, "Reasoning Ability", &keywords(&["Puzzles and Seating"]))
            .expect("unit match");
        assert_eq!(by_unit.len(), 2);
        assert_eq!(by_unit[0].name, "Floor Puzzle");

        let by_name = resolve_topics(&syllabus, "Reasoning Ability", &keywords(&["syllogism"]))
            .expect("name match");
        assert_eq!(by_name, vec![Topic::new("Syllogism", "Reasoning: Logical Reasoning")]);

        let anywhere = resolve_topics(&syllabus, "Reasoning Ability", &keywords(&["Networking"]))
            .expect("syllabus-wide match");
        assert_eq!(anywhere[0].unit, "Computer Knowledge");

        let missing = resolve_topics(&syllabus, "Reasoning Ability", &keywords(&["Trigonometry"]));
        assert!(matches!(missing, Err(AppError::TopicResolution(_))));
    }

    #[test]
    fn every_builtin_bucket_resolves_to_topics() {
        let pairs = [
            (ExamFamily::Tnpsc, ExamStage::Prelims),
            (ExamFamily::Bank, ExamStage::Prelims),
            (ExamFamily::Bank, ExamStage::Mains),
            (ExamFamily::Ssc, ExamStage::Tier1),
            (ExamFamily::Ssc, ExamStage::Tier2),
            (ExamFamily::Railway, ExamStage::Cbt1),
            (ExamFamily::Railway, ExamStage::Cbt2),
        ];

        for (family, stage) in pairs {
            let request = MockTestRequest::new(family, "Any", stage);
            for section in plan_sections(&request).expect("builtin pattern") {
                for bucket in &section.buckets {
                    let topics = resolve_topics(syllabus_for(family), &section.syllabus_section, &bucket.topic_keywords);
                    assert!(
                        topics.is_ok(),
                        "{} {} / {}: {:?} did not resolve",
                        family,
                        stage,
                        section.name,
                        bucket.topic_keywords
                    );
                }
            }
        }
    }

    #[test]
    fn number_series_bucket_stays_narrow() {
        let topics = resolve_topics(
            syllabus_for(ExamFamily::Bank),
            "Quantitative Aptitude",
            &keywords(&["Number Series"]),
        )
        .expect("number series");
        assert_eq!(topics.len(), 1);
    }

    #[test]
    fn unsupported_pair_without_override_is_rejected() {
        let request = MockTestRequest::new(ExamFamily::Tnpsc, "TNPSC Group 1", ExamStage::Cbt1);
        assert!(matches!(plan_sections(&request), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn override_reuses_builtin_buckets_for_known_sections() {
        let request = MockTestRequest::new(ExamFamily::Bank, "SBI PO", ExamStage::Prelims)
            .with_pattern_override(ExamPatternConfig {
                sections: vec![
                    SectionPattern {
                        section_name: "reasoning ability".to_string(),
                        question_count: 40,
                    },
                    SectionPattern {
                        section_name: "Computer Knowledge".to_string(),
                        question_count: 10,
                    },
                ],
            });

        let sections = plan_sections(&request).expect("plan");

        assert_eq!(sections[0].name, "Reasoning Ability");
        assert_eq!(sections[0].question_count, 40);
        assert!(sections[0].buckets.len() > 1);

        assert_eq!(sections[1].name, "Computer Knowledge");
        assert_eq!(sections[1].buckets, vec![TopicDistribution::new(&["Computer Knowledge"], 10, 10)]);
    }

    #[tokio::test]
    async fn assembly_tags_sections_and_reports_progress() {
        let request = MockTestRequest::new(ExamFamily::Ssc, "SSC CGL", ExamStage::Tier1)
            .with_pattern_override(ExamPatternConfig {
                sections: vec![
                    SectionPattern {
                        section_name: "Computer Knowledge".to_string(),
                        question_count: 6,
                    },
                    SectionPattern {
                        section_name: "Current Affairs".to_string(),
                        question_count: 4,
                    },
                ],
            });

        let reported = Arc::new(Mutex::new(Vec::new()));
        let sink = reported.clone();
        let progress = move |percent: u8| sink.lock().unwrap().push(percent);

        let questions = assembler(echo_provider())
            .assemble(&request, &progress, None)
            .await
            .expect("assembly");

        assert_eq!(questions.len(), 10);
        assert!(questions[..6].iter().all(|q| q.section.as_deref() == Some("Computer Knowledge")));
        assert!(questions[6..].iter().all(|q| q.section.as_deref() == Some("Current Affairs")));
        assert_eq!(*reported.lock().unwrap(), vec![0, 60, 100]);
    }

    #[tokio::test]
    async fn unresolvable_bucket_aborts_assembly() {
        let request = MockTestRequest::new(ExamFamily::Railway, "RRB NTPC", ExamStage::Cbt1)
            .with_pattern_override(ExamPatternConfig {
                sections: vec![SectionPattern {
                    section_name: "Astrophysics".to_string(),
                    question_count: 5,
                }],
            });

        let mut mock = MockModelProvider::new();
        mock.expect_generate_structured().times(0);

        let result = assembler(mock).assemble(&request, &|_| {}, None).await;
        assert!(matches!(result, Err(AppError::TopicResolution(_))));
    }

    #[tokio::test]
    async fn cancelled_assembly_stops_before_first_section() {
        let mut mock = MockModelProvider::new();
        mock.expect_generate_structured().times(0);

        let token = CancelToken::new();
        token.cancel();
        let request = MockTestRequest::new(ExamFamily::Bank, "IBPS Clerk", ExamStage::Prelims);

        let result = assembler(mock).assemble(&request, &|_| {}, Some(&token)).await;
        assert!(matches!(result, Err(AppError::Cancelled)));
    }
}
