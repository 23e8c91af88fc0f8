use super::{compose, Layout, PromptParams};

pub fn seating_arrangement(params: &PromptParams<'_>) -> String {
    let guidance = format!(
        "Write ONE seating-arrangement puzzle and {count} questions on it.\n\
         - Choose one layout: a linear row (some people facing north, some south), a circular table \
         (facing centre, outside or mixed) or a square/rectangular table with corner and middle seats.\n\
         - Use 7 to 10 people with distinct names and, for harder sets, one extra attribute \
         (profession, city or favourite colour).\n\
         - State the clues as indirect, chained conditions ('Only two people sit between ...', \
         'X sits third to the left of the one who likes Blue'). The arrangement must be uniquely determined.\n\
         - Questions ask about positions, neighbours, 'who sits opposite', 'how many people sit between', \
         odd-one-out groups and which statement is true.\n\
         - The explanation derives the final arrangement step by step before answering; include the final \
         arrangement as an inline SVG in commonContextDiagramSvg only if it is consistent with the clues.",
        count = params.question_count,
    );

    compose(params, "seating arrangement", &guidance, Layout::SHARED)
}

pub fn blood_relations(params: &PromptParams<'_>) -> String {
    let guidance = "Write blood-relation questions, each fully self-contained.\n\
        - Vary the forms: direct statements ('Pointing to a photograph, Ravi said ...'), \
        family-tree descriptions with 6 to 8 members, and coded relations \
        ('A + B means A is the brother of B; A # B means A is the mother of B').\n\
        - Genders must be inferable from the statements; if the relation depends on an unknown gender, \
        one option must say so and be correct.\n\
        - Use Indian names and standard relation words (paternal uncle, sister-in-law, nephew).\n\
        - The explanation reconstructs the family tree generation by generation.";

    compose(params, "blood relations", guidance, Layout::STANDALONE)
}

pub fn floor_puzzle(params: &PromptParams<'_>) -> String {
    let guidance = "Write floor-based puzzle questions; every item carries its own complete puzzle.\n\
        - A building has 6 to 9 floors (ground floor numbered 1 unless stated otherwise), one person per floor, \
        sometimes split into flats A and B.\n\
        - Give 6 to 9 clues using 'above', 'immediately below', 'as many floors between' and one parameter \
        such as a car brand or city.\n\
        - The solution must be unique; the question asks for a floor, a neighbour, a count of floors between \
        two people or a true statement.\n\
        - The explanation lists the possible cases and eliminates all but one.";

    compose(params, "floor-based puzzle", guidance, Layout::STANDALONE)
}

pub fn box_puzzle(params: &PromptParams<'_>) -> String {
    let guidance = "Write box-stacking puzzle questions; every item carries its own complete puzzle.\n\
        - 6 to 9 boxes are kept one above another, each identified by a letter and possibly a colour or \
        number of chocolates.\n\
        - Clues use 'kept immediately above', 'only two boxes between', 'not at the top or bottom'.\n\
        - The stack order must be uniquely determined; questions ask for positions, counts between boxes \
        or the box paired with an attribute.\n\
        - The explanation shows the case analysis as a top-to-bottom list.";

    compose(params, "box puzzle", guidance, Layout::STANDALONE)
}

pub fn scheduling_puzzle(params: &PromptParams<'_>) -> String {
    let guidance = "Write scheduling (month, day or year based) puzzle questions; every item carries its own complete puzzle.\n\
        - People attend events, exams or lectures on different days of a week, months of a year or dates \
        of a month (for example 7 people on 12th and 19th of four months).\n\
        - Use ordering clues ('before', 'in a month having 30 days', 'on the same date as') and at least one \
        negative clue.\n\
        - The schedule must be uniquely determined; questions ask who attends when, how many events \
        fall between two people or which pairing is correct.\n\
        - The explanation tabulates the final schedule.";

    compose(params, "scheduling puzzle", guidance, Layout::STANDALONE)
}

pub fn puzzle(params: &PromptParams<'_>) -> String {
    let guidance = format!(
        "Write ONE reasoning puzzle and {count} questions on it.\n\
         - Pick a format used in bank and SSC mains papers: multi-parameter arrangement (person, city, \
         colour, profession), comparison/ranking of heights or weights, or a designation hierarchy.\n\
         - Use 6 to 8 entities and 2 or 3 parameters. Clues must be indirect and the final arrangement unique.\n\
         - Questions cover direct look-ups, 'which combination is correct', 'four of the following five are \
         alike' and a conditional 'if X and Y interchange ...' item when the count allows.\n\
         - Explanations build the full solution grid before answering.",
        count = params.question_count,
    );

    compose(params, "reasoning puzzle", &guidance, Layout::SHARED)
}

pub fn direction_sense(params: &PromptParams<'_>) -> String {
    let guidance = "Write direction-sense questions.\n\
        - A person walks a sequence of 3 to 6 legs with distances in metres or km and left/right turns, or \
        coded directions ('P @ Q means P is 5 m north of Q').\n\
        - Ask for the final direction from the start, the shortest distance (use Pythagorean triples so \
        distances stay integral or a clean surd) or the direction one point lies in relative to another.\n\
        - Use the 8 compass points; shadows-at-sunrise questions are allowed.\n\
        - Provide an explanationDiagramSvg that traces the path on a grid with north marked.";

    compose(params, "direction sense", guidance, Layout::STANDALONE)
}

pub fn data_sufficiency(params: &PromptParams<'_>) -> String {
    let mut options = String::from(
        "  A: The data in statement I alone is sufficient, but statement II alone is not.\n\
         \x20 B: The data in statement II alone is sufficient, but statement I alone is not.\n\
         \x20 C: The data in either statement I alone or statement II alone is sufficient.\n\
         \x20 D: The data in both statements I and II together is necessary.\n",
    );
    if params.options_count >= 5 {
        options.push_str("  E: The data in both statements I and II together is not sufficient.\n");
    }

    let guidance = format!(
        "Write data-sufficiency questions: a question followed by 'Statement I' and 'Statement II'.\n\
         Use exactly these options, in this order, in every item:\n{options}\
         - Topics may be arithmetic (ages, ratios, speed, profit) or reasoning (rankings, blood relations, \
         directions, seating).\n\
         - Check each statement independently before checking them together; distribute answers across options.\n\
         - The explanation evaluates statement I alone, statement II alone and then both together.",
        options = options,
    );

    compose(params, "data sufficiency", &guidance, Layout::STANDALONE)
}

pub fn inequality(params: &PromptParams<'_>) -> String {
    let options = if params.options_count >= 5 {
        "Only I follows / Only II follows / Either I or II follows / Neither I nor II follows / Both I and II follow"
    } else {
        "Only I follows / Only II follows / Neither I nor II follows / Both I and II follow"
    };

    let guidance = format!(
        "Write inequality questions with two conclusions each.\n\
         - Give one or two chained statements such as 'P > Q ≥ R = S < T; U ≤ R' or their coded form \
         ('P @ Q means P is not smaller than Q').\n\
         - Follow with Conclusion I and Conclusion II; the options are exactly: {options}.\n\
         - Include complementary-pair cases (I: A > B, II: A = B from A ≥ B) so that 'Either' style reasoning is tested \
         where that option exists.\n\
         - The explanation combines the statements into one chain and checks each conclusion.",
        options = options,
    );

    compose(params, "inequality", &guidance, Layout::STANDALONE)
}

pub fn syllogism(params: &PromptParams<'_>) -> String {
    let options = if params.options_count >= 5 {
        "Only I follows / Only II follows / Either I or II follows / Neither I nor II follows / Both I and II follow"
    } else {
        "Only I follows / Only II follows / Neither I nor II follows / Both I and II follow"
    };

    let guidance = format!(
        "Write syllogism questions.\n\
         - Each item has two or three statements ('All pens are books. Some books are tables. No table is a chair.') \
         and two conclusions, including 'possibility' conclusions ('Some pens can be chairs') and 'only a few' statements.\n\
         - The options are exactly: {options}.\n\
         - Statements may be unrealistic; conclusions must be judged only by the statements.\n\
         - The explanation describes the least-overlap Venn configuration; include it as an explanationDiagramSvg.",
        options = options,
    );

    compose(params, "syllogism", &guidance, Layout::STANDALONE)
}
