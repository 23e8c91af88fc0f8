//! Prompt template library.
//!
//! Every question archetype is a pure function from [`PromptParams`] to the user prompt
//! sent to the model. [`PromptKind`] names a template; the dispatcher picks one per
//! topic group and the generator renders it.

pub mod data_interpretation;
pub mod general;
pub mod quantitative;
pub mod reasoning;

use crate::models::domain::question::OptionKey;

/// Inputs shared by every template.
#[derive(Debug, Clone, Copy)]
pub struct PromptParams<'a> {
    pub question_count: u32,
    pub syllabus_context: &'a str,
    pub difficulty_instruction: &'a str,
    pub options_count: u8,
}

pub type PromptGeneratorFn = fn(&PromptParams<'_>) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    GenericMcq,
    DataInterpretation,
    DiBarGraph,
    DiLineGraph,
    DiPieChart,
    DiTable,
    DiCaselet,
    ReadingComprehension,
    SeatingArrangement,
    BloodRelations,
    FloorPuzzle,
    BoxPuzzle,
    SchedulingPuzzle,
    Puzzle,
    DirectionSense,
    DataSufficiency,
    QuadraticEquations,
    NumberSeries,
    Inequality,
    Syllogism,
    AssertionReasoning,
    Simplification,
    Approximation,
    CombinedProfitLoss,
    ProfitLoss,
    CompoundInterest,
    SimpleInterest,
    TimeAndWork,
    PipesAndCisterns,
    BoatsAndStreams,
    TimeSpeedDistance,
    Average,
    Partnership,
    MixtureAlligation,
    RatioProportion,
    HcfLcm,
    Percentage,
    Ages,
    Mensuration,
    PermutationCombination,
    Probability,
}

/// Kinds whose questions come in groups sharing one passage, puzzle or data set.
pub const SET_BASED_KINDS: &[PromptKind] = &[
    PromptKind::DataInterpretation,
    PromptKind::DiBarGraph,
    PromptKind::DiLineGraph,
    PromptKind::DiPieChart,
    PromptKind::DiTable,
    PromptKind::DiCaselet,
    PromptKind::ReadingComprehension,
    PromptKind::SeatingArrangement,
    PromptKind::Puzzle,
];

impl PromptKind {
    pub fn generator(self) -> PromptGeneratorFn {
        match self {
            PromptKind::GenericMcq => general::generic_mcq,
            PromptKind::DataInterpretation => data_interpretation::data_interpretation,
            PromptKind::DiBarGraph => data_interpretation::bar_graph,
            PromptKind::DiLineGraph => data_interpretation::line_graph,
            PromptKind::DiPieChart => data_interpretation::pie_chart,
            PromptKind::DiTable => data_interpretation::table,
            PromptKind::DiCaselet => data_interpretation::caselet,
            PromptKind::ReadingComprehension => general::reading_comprehension,
            PromptKind::SeatingArrangement => reasoning::seating_arrangement,
            PromptKind::BloodRelations => reasoning::blood_relations,
            PromptKind::FloorPuzzle => reasoning::floor_puzzle,
            PromptKind::BoxPuzzle => reasoning::box_puzzle,
            PromptKind::SchedulingPuzzle => reasoning::scheduling_puzzle,
            PromptKind::Puzzle => reasoning::puzzle,
            PromptKind::DirectionSense => reasoning::direction_sense,
            PromptKind::DataSufficiency => reasoning::data_sufficiency,
            PromptKind::QuadraticEquations => quantitative::quadratic_equations,
            PromptKind::NumberSeries => quantitative::number_series,
            PromptKind::Inequality => reasoning::inequality,
            PromptKind::Syllogism => reasoning::syllogism,
            PromptKind::AssertionReasoning => general::assertion_reasoning,
            PromptKind::Simplification => quantitative::simplification,
            PromptKind::Approximation => quantitative::approximation,
            PromptKind::CombinedProfitLoss => quantitative::combined_profit_loss,
            PromptKind::ProfitLoss => quantitative::profit_loss,
            PromptKind::CompoundInterest => quantitative::compound_interest,
            PromptKind::SimpleInterest => quantitative::simple_interest,
            PromptKind::TimeAndWork => quantitative::time_and_work,
            PromptKind::PipesAndCisterns => quantitative::pipes_and_cisterns,
            PromptKind::BoatsAndStreams => quantitative::boats_and_streams,
            PromptKind::TimeSpeedDistance => quantitative::time_speed_distance,
            PromptKind::Average => quantitative::average,
            PromptKind::Partnership => quantitative::partnership,
            PromptKind::MixtureAlligation => quantitative::mixture_alligation,
            PromptKind::RatioProportion => quantitative::ratio_proportion,
            PromptKind::HcfLcm => quantitative::hcf_lcm,
            PromptKind::Percentage => quantitative::percentage,
            PromptKind::Ages => quantitative::ages,
            PromptKind::Mensuration => quantitative::mensuration,
            PromptKind::PermutationCombination => quantitative::permutation_combination,
            PromptKind::Probability => quantitative::probability,
        }
    }

    pub fn render(self, params: &PromptParams<'_>) -> String {
        (self.generator())(params)
    }

    pub fn is_set_based(self) -> bool {
        SET_BASED_KINDS.contains(&self)
    }
}

/// How the output contract describes items of one template.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Layout {
    pub shared_context: bool,
    pub question_type: &'static str,
}

impl Layout {
    pub(crate) const STANDALONE: Layout = Layout {
        shared_context: false,
        question_type: "MCQ",
    };

    pub(crate) const SHARED: Layout = Layout {
        shared_context: true,
        question_type: "MCQ",
    };
}

pub(crate) fn option_keys(options_count: u8) -> String {
    OptionKey::first(options_count)
        .iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Header, archetype guidance and output contract in the order every template uses.
pub(crate) fn compose(
    params: &PromptParams<'_>,
    archetype: &str,
    guidance: &str,
    layout: Layout,
) -> String {
    format!(
        "Generate exactly {count} {archetype} question(s) for a competitive exam.\n\
         Syllabus context: {context}\n\
         {difficulty}\n\n\
         {guidance}\n\n\
         {contract}",
        count = params.question_count,
        archetype = archetype,
        context = params.syllabus_context,
        difficulty = params.difficulty_instruction,
        guidance = guidance.trim(),
        contract = output_contract(params, layout),
    )
}

pub(crate) fn output_contract(params: &PromptParams<'_>, layout: Layout) -> String {
    let keys = option_keys(params.options_count);
    let mut contract = format!(
        "Output rules:\n\
         - Return one JSON object of the form {{\"questions\": [...]}} with exactly {count} item(s) and no text outside the JSON.\n\
         - Each item has \"questionText\", \"options\" (an object with exactly the keys {keys}), \"correctOption\" (one of {keys}), \
         \"explanation\" (a complete step-by-step solution), \"isPYQ\", \"questionSubtype\" (a short fine-grained topic label) \
         and \"questionType\" (\"{question_type}\").\n\
         - Exactly one option is correct and every distractor is plausible. Shuffle the position of the correct option across items.\n\
         - Set \"isPYQ\" to true only when the item reproduces a genuine previous-year exam question; otherwise false.\n",
        count = params.question_count,
        keys = keys,
        question_type = layout.question_type,
    );

    if layout.shared_context {
        contract.push_str(
            "- All items share ONE common context: repeat the identical full passage, puzzle statement or data set in \
             \"commonContext\" of every item, and the identical \"commonContextDiagramSvg\" (a self-contained inline SVG) \
             when a figure is needed. Each \"questionText\" asks only the question itself.\n",
        );
    } else {
        contract.push_str(
            "- Leave \"commonContext\" and \"commonContextDiagramSvg\" empty; every item must be self-contained.\n\
             - Provide \"explanationDiagramSvg\" (a self-contained inline SVG) only when a figure genuinely clarifies the solution.\n",
        );
    }

    contract
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(options_count: u8) -> PromptParams<'static> {
        PromptParams {
            question_count: 5,
            syllabus_context: "Seating Arrangement (Reasoning Ability)",
            difficulty_instruction: "Difficulty: Medium.",
            options_count,
        }
    }

    #[test]
    fn option_keys_follow_options_count() {
        assert_eq!(option_keys(4), "A, B, C, D");
        assert_eq!(option_keys(5), "A, B, C, D, E");
    }

    #[test]
    fn set_based_kinds_are_the_shared_context_templates() {
        assert!(PromptKind::DataInterpretation.is_set_based());
        assert!(PromptKind::DiCaselet.is_set_based());
        assert!(PromptKind::ReadingComprehension.is_set_based());
        assert!(PromptKind::SeatingArrangement.is_set_based());
        assert!(PromptKind::Puzzle.is_set_based());
        assert!(!PromptKind::Syllogism.is_set_based());
        assert!(!PromptKind::GenericMcq.is_set_based());
    }

    #[test]
    fn render_calls_the_kind_generator() {
        let p = params(5);
        assert_eq!(
            PromptKind::Syllogism.render(&p),
            reasoning::syllogism(&p)
        );
    }

    #[test]
    fn shared_layout_demands_identical_context() {
        let contract = output_contract(&params(5), Layout::SHARED);
        assert!(contract.contains("commonContext"));
        assert!(contract.contains("identical"));
        assert!(contract.contains("A, B, C, D, E"));
    }

    #[test]
    fn compose_includes_count_context_and_difficulty() {
        let prompt = compose(&params(4), "syllogism", "Use two statements.", Layout::STANDALONE);

        assert!(prompt.starts_with("Generate exactly 5 syllogism"));
        assert!(prompt.contains("Seating Arrangement (Reasoning Ability)"));
        assert!(prompt.contains("Difficulty: Medium."));
        assert!(prompt.contains("exactly the keys A, B, C, D"));
    }
}
