//! Topic-to-template routing.
//!
//! Routing is a two-stage decision. Only groups whose first topic sits in an aptitude,
//! reasoning or mathematics unit reach the keyword table; everything else (history,
//! science, English language) goes to the generic template. The table is walked top to
//! bottom and the first rule with a keyword contained in any topic name wins, so the
//! more specific rules sit above the broader ones they overlap with.

use crate::models::domain::topic::Topic;
use crate::templates::PromptKind;

/// Unit-title fragments that make a topic group eligible for a specialized template.
pub const SPECIALIZED_UNIT_KEYWORDS: &[&str] = &[
    "aptitude",
    "reasoning",
    "mathematics",
    "quantitative aptitude",
    "general intelligence",
];

#[derive(Debug, Clone, Copy)]
pub struct DispatchRule {
    pub kind: PromptKind,
    pub keywords: &'static [&'static str],
}

const fn rule(kind: PromptKind, keywords: &'static [&'static str]) -> DispatchRule {
    DispatchRule { kind, keywords }
}

pub const DISPATCH_TABLE: &[DispatchRule] = &[
    // data interpretation variants before the generic one
    rule(PromptKind::DiCaselet, &["caselet"]),
    rule(PromptKind::DiPieChart, &["pie chart"]),
    rule(PromptKind::DiBarGraph, &["bar graph", "bar chart"]),
    rule(PromptKind::DiLineGraph, &["line graph", "line chart"]),
    rule(PromptKind::DiTable, &["tabular", "table chart"]),
    rule(PromptKind::DataInterpretation, &["data interpretation"]),
    rule(
        PromptKind::ReadingComprehension,
        &["reading comprehension", "comprehension", "passage"],
    ),
    rule(
        PromptKind::SeatingArrangement,
        &["seating", "circular arrangement", "linear arrangement"],
    ),
    rule(PromptKind::BloodRelations, &["blood relation", "family tree"]),
    rule(PromptKind::FloorPuzzle, &["floor"]),
    rule(PromptKind::BoxPuzzle, &["box"]),
    rule(PromptKind::SchedulingPuzzle, &["scheduling", "month", "weekday"]),
    rule(PromptKind::Puzzle, &["puzzle"]),
    rule(PromptKind::DirectionSense, &["direction"]),
    rule(PromptKind::DataSufficiency, &["data sufficiency"]),
    rule(PromptKind::QuadraticEquations, &["quadratic"]),
    rule(
        PromptKind::NumberSeries,
        &["number series", "series", "missing number", "wrong number"],
    ),
    rule(PromptKind::Inequality, &["inequalit"]),
    rule(PromptKind::Syllogism, &["syllogism"]),
    rule(PromptKind::AssertionReasoning, &["assertion"]),
    rule(PromptKind::Simplification, &["simplification", "bodmas"]),
    rule(PromptKind::Approximation, &["approximation", "approximate"]),
    // combined scenarios before plain profit & loss, both before permutation/combination
    rule(
        PromptKind::CombinedProfitLoss,
        &["combination profit", "combined profit", "discount"],
    ),
    rule(PromptKind::ProfitLoss, &["profit", "loss"]),
    rule(PromptKind::CompoundInterest, &["compound interest"]),
    rule(PromptKind::SimpleInterest, &["simple interest", "interest"]),
    rule(
        PromptKind::TimeAndWork,
        &["time and work", "time & work", "work and wages", "efficiency"],
    ),
    rule(PromptKind::PipesAndCisterns, &["pipe", "cistern"]),
    rule(PromptKind::BoatsAndStreams, &["boat", "stream"]),
    rule(
        PromptKind::TimeSpeedDistance,
        &["speed", "distance", "train", "time speed"],
    ),
    rule(PromptKind::Average, &["average"]),
    rule(PromptKind::Partnership, &["partnership"]),
    rule(
        PromptKind::MixtureAlligation,
        &["mixture", "alligation", "allegation"],
    ),
    rule(PromptKind::RatioProportion, &["ratio", "proportion"]),
    rule(PromptKind::HcfLcm, &["hcf", "lcm"]),
    rule(PromptKind::Percentage, &["percentage", "percent"]),
    rule(PromptKind::Ages, &["ages", "age problem", "problems on age"]),
    rule(
        PromptKind::Mensuration,
        &["mensuration", "area", "volume", "perimeter"],
    ),
    rule(
        PromptKind::PermutationCombination,
        &["permutation", "combination"],
    ),
    rule(PromptKind::Probability, &["probability"]),
];

fn is_specialized_unit(unit: &str) -> bool {
    let unit = unit.to_lowercase();
    SPECIALIZED_UNIT_KEYWORDS
        .iter()
        .any(|keyword| unit.contains(keyword))
}

/// Picks the template for a topic group. Pure and deterministic.
pub fn resolve_generator(topics: &[Topic]) -> PromptKind {
    let Some(first) = topics.first() else {
        return PromptKind::GenericMcq;
    };

    if !is_specialized_unit(&first.unit) {
        return PromptKind::GenericMcq;
    }

    let names: Vec<String> = topics.iter().map(|t| t.name.to_lowercase()).collect();

    DISPATCH_TABLE
        .iter()
        .find(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| names.iter().any(|name| name.contains(keyword)))
        })
        .map(|rule| rule.kind)
        .unwrap_or(PromptKind::GenericMcq)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(kind: PromptKind) -> usize {
        DISPATCH_TABLE
            .iter()
            .position(|rule| rule.kind == kind)
            .unwrap_or_else(|| panic!("{:?} missing from dispatch table", kind))
    }

    fn resolve(name: &str, unit: &str) -> PromptKind {
        resolve_generator(&[Topic::new(name, unit)])
    }

    #[test]
    fn empty_topics_use_generic_template() {
        assert_eq!(resolve_generator(&[]), PromptKind::GenericMcq);
    }

    #[test]
    fn non_aptitude_units_short_circuit_to_generic() {
        assert_eq!(resolve("Indus Valley Civilization", "History"), PromptKind::GenericMcq);
        assert_eq!(
            resolve("Series of Discoveries", "General Science - Series of Discoveries"),
            PromptKind::GenericMcq
        );
        assert_eq!(
            resolve("Reading Comprehension", "English Language"),
            PromptKind::GenericMcq
        );
    }

    #[test]
    fn specialized_units_route_by_topic_keyword() {
        assert_eq!(resolve("Syllogism", "Reasoning Ability"), PromptKind::Syllogism);
        assert_eq!(
            resolve("Combination Profit and Loss Question", "Quantitative Aptitude"),
            PromptKind::CombinedProfitLoss
        );
        assert_eq!(
            resolve("Compound Interest", "Quantitative Aptitude: Arithmetic"),
            PromptKind::CompoundInterest
        );
        assert_eq!(
            resolve("Pie Chart", "Quantitative Aptitude: Data Interpretation"),
            PromptKind::DiPieChart
        );
        assert_eq!(
            resolve("Floor Based Puzzle", "Reasoning: Puzzles and Seating"),
            PromptKind::FloorPuzzle
        );
        assert_eq!(resolve("Coding-Decoding", "General Intelligence"), PromptKind::GenericMcq);
    }

    #[test]
    fn first_topic_unit_decides_eligibility() {
        let topics = vec![
            Topic::new("Ancient History", "History"),
            Topic::new("Syllogism", "Reasoning Ability"),
        ];
        assert_eq!(resolve_generator(&topics), PromptKind::GenericMcq);

        let topics = vec![
            Topic::new("Coding-Decoding", "Reasoning Ability"),
            Topic::new("Syllogism", "Reasoning Ability"),
        ];
        assert_eq!(resolve_generator(&topics), PromptKind::Syllogism);
    }

    #[test]
    fn table_order_puts_specific_rules_first() {
        assert!(position(PromptKind::CombinedProfitLoss) < position(PromptKind::ProfitLoss));
        assert!(position(PromptKind::ProfitLoss) < position(PromptKind::PermutationCombination));
        assert!(position(PromptKind::DiCaselet) < position(PromptKind::DataInterpretation));
        assert!(position(PromptKind::DiTable) < position(PromptKind::DataInterpretation));
        assert!(position(PromptKind::FloorPuzzle) < position(PromptKind::Puzzle));
        assert!(position(PromptKind::BoxPuzzle) < position(PromptKind::Puzzle));
        assert!(position(PromptKind::SchedulingPuzzle) < position(PromptKind::Puzzle));
        assert!(position(PromptKind::CompoundInterest) < position(PromptKind::SimpleInterest));
        assert!(position(PromptKind::Percentage) < position(PromptKind::Ages));
        assert!(position(PromptKind::Average) < position(PromptKind::Ages));
    }

    #[test]
    fn resolution_is_deterministic() {
        let topics = vec![Topic::new("Boats and Streams", "Quantitative Aptitude")];
        let first = resolve_generator(&topics);
        for _ in 0..10 {
            assert_eq!(resolve_generator(&topics), first);
        }
        assert_eq!(first, PromptKind::BoatsAndStreams);
    }
}
