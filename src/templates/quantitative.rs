use super::{compose, Layout, PromptParams};

/// Word-problem templates share the same closing rules; only the topic focus differs.
fn arithmetic(params: &PromptParams<'_>, archetype: &str, focus: &str) -> String {
    let guidance = format!(
        "{focus}\n\
         - Numbers must work out cleanly: answers are integers or simple fractions unless the item asks for \
         an approximate value.\n\
         - Distractors come from common mistakes (wrong base for a percentage, adding instead of averaging, \
         off-by-one in counting).\n\
         - The explanation is a numbered step-by-step solution and mentions a shortcut when one exists.",
        focus = focus.trim(),
    );

    compose(params, archetype, &guidance, Layout::STANDALONE)
}

pub fn quadratic_equations(params: &PromptParams<'_>) -> String {
    let options = if params.options_count >= 5 {
        "x > y / x < y / x ≥ y / x ≤ y / x = y or the relationship cannot be established"
    } else {
        "x > y / x < y / x ≥ y / x = y or the relationship cannot be established"
    };

    let guidance = format!(
        "Write quadratic-equation comparison questions.\n\
         - Each item gives equation I in x and equation II in y (for example 'I. x² - 7x + 12 = 0, II. y² - 9y + 20 = 0').\n\
         - Both equations must have real, rational roots; include some items with a shared root and some \
         with a linear or square-root equation.\n\
         - The options are exactly: {options}.\n\
         - The explanation factorises both equations, lists the roots and compares every pair.",
        options = options,
    );

    compose(params, "quadratic equation", &guidance, Layout::STANDALONE)
}

pub fn number_series(params: &PromptParams<'_>) -> String {
    let guidance = "Write number-series questions.\n\
        - Mix missing-number series ('5, 11, 23, 47, ?') and wrong-number series ('Find the wrong number in the series').\n\
        - Use patterns seen in bank and SSC papers: alternating operations, ×n + k, squares and cubes ± n, \
        differences forming their own series, and prime-based series.\n\
        - Series have 6 or 7 terms; every pattern must be unambiguous.\n\
        - The explanation writes out the rule applied to every term.";

    compose(params, "number series", guidance, Layout::STANDALONE)
}

pub fn simplification(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "simplification",
        "Write simplification questions: find the value of '?' in an expression.\n\
         - Combine BODMAS with fractions, decimals, percentages, squares, square roots and cube roots \
         (for example '35% of 640 + √729 × 4 = ? - 18').\n\
         - Put '?' on either side of the equation and occasionally as an exponent.",
    )
}

pub fn approximation(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "approximation",
        "Write approximation questions: find the approximate value of '?'.\n\
         - Use numbers close to round values (24.98% of 801.03, √(143.9)) so that rounding gives one clear answer.\n\
         - Options should be spread far enough apart that rounding cannot produce two of them.\n\
         - Say 'approximately' in every questionText.",
    )
}

pub fn combined_profit_loss(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "profit, loss and discount",
        "Write questions that combine profit, loss and discount in one scenario.\n\
         - Link marked price, successive discounts, cost price and profit percentage \
         (for example 'marked 40% above cost, sold after two discounts of 10% and 5%').\n\
         - Include dishonest-dealer (false weight) and 'sold two articles, gained on one and lost on the other' items.\n\
         - Each item needs at least two chained steps.",
    )
}

pub fn profit_loss(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "profit and loss",
        "Write profit and loss questions.\n\
         - Cover cost price, selling price, profit or loss percentage and 'by selling at X he loses Y%, \
         at what price should he sell to gain Z%'.\n\
         - Keep each item to one article or one transaction type.",
    )
}

pub fn compound_interest(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "compound interest",
        "Write compound interest questions.\n\
         - Vary compounding (annually, half-yearly, quarterly) and ask for the amount, the interest, the rate \
         or the principal.\n\
         - Include 'difference between CI and SI for 2 or 3 years' and 'sum doubles in n years' items.\n\
         - Use rates such as 5%, 10%, 20% so that powers stay computable by hand.",
    )
}

pub fn simple_interest(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "simple interest",
        "Write simple interest questions.\n\
         - Ask for interest, principal, rate or time; include split-investment items ('part at 8% and the rest at 10%') \
         and 'amount after t1 years is A1 and after t2 years is A2'.\n\
         - All values are in rupees and years or months.",
    )
}

pub fn time_and_work(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "time and work",
        "Write time and work questions.\n\
         - Use individual and combined efficiencies, people leaving or joining midway, \
         men-women-children equivalence and work-and-wages sharing.\n\
         - Use LCM-friendly day counts (10, 12, 15, 20, 30) so that total work is a clean number.",
    )
}

pub fn pipes_and_cisterns(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "pipes and cisterns",
        "Write pipes and cisterns questions.\n\
         - Combine inlet and outlet pipes, leaks, pipes opened alternately or closed after some time, and \
         tank capacity from flow rates.\n\
         - State clearly whether the tank starts empty or full.",
    )
}

pub fn boats_and_streams(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "boats and streams",
        "Write boats and streams questions.\n\
         - Use downstream speed (b + s) and upstream speed (b - s); ask for the speed of the boat, the stream, \
         round-trip time or distance.\n\
         - Include 'takes twice as long upstream as downstream' ratio items.",
    )
}

pub fn time_speed_distance(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "time, speed and distance",
        "Write time, speed and distance questions.\n\
         - Cover average speed over two legs, relative speed of people or trains moving in the same or opposite \
         directions, trains crossing poles and platforms, and late-or-early arrival problems.\n\
         - Convert between km/h and m/s explicitly where needed (multiply by 5/18).",
    )
}

pub fn average(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "average",
        "Write average questions.\n\
         - Include a member joining or leaving a group, a wrongly recorded value being corrected, averages of \
         consecutive numbers and weighted averages of two groups.\n\
         - Ask for the changed average, the new member's value or the original total.",
    )
}

pub fn partnership(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "partnership",
        "Write partnership questions.\n\
         - Partners invest different amounts for different periods; profit is shared in the ratio of \
         capital × time.\n\
         - Include partners joining late or withdrawing part of their capital, and a working partner's salary \
         taken out before sharing.",
    )
}

pub fn mixture_alligation(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "mixture and alligation",
        "Write mixture and alligation questions.\n\
         - Use the alligation rule for mixing two grades, repeated replacement (remove x litres and replace \
         with water, n times) and combining two mixtures with known ratios.\n\
         - Quantities are in litres or kilograms.",
    )
}

pub fn ratio_proportion(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "ratio and proportion",
        "Write ratio and proportion questions.\n\
         - Cover dividing an amount in a ratio, changing ratios after additions, compound ratios, \
         mean and third proportionals, and ratios of incomes and expenditures.",
    )
}

pub fn hcf_lcm(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "HCF and LCM",
        "Write HCF and LCM questions.\n\
         - Include the HCF × LCM = product property, bells tolling together, largest number dividing with given \
         remainders, and HCF/LCM of fractions.\n\
         - Keep all numbers below 10,000.",
    )
}

pub fn percentage(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "percentage",
        "Write percentage questions.\n\
         - Cover percentage change, successive changes, population growth or depreciation, election vote shares \
         and 'A's income is x% more than B's, by what percent is B's less than A's'.\n\
         - Use fraction equivalents (12.5% = 1/8, 16.66% = 1/6) so that mental calculation is possible.",
    )
}

pub fn ages(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "problems on ages",
        "Write problems on ages.\n\
         - Relate present, past and future ages through ratios and sums ('five years ago the ratio of ages of \
         A and B was 3:4').\n\
         - Include items with three people and items that mix ages with averages.\n\
         - Ages must be positive and realistic.",
    )
}

pub fn mensuration(params: &PromptParams<'_>) -> String {
    let guidance = "Write mensuration questions.\n\
        - Cover 2D shapes (rectangle, triangle, circle, sector, trapezium) and 3D solids (cube, cuboid, cylinder, \
        cone, sphere, hemisphere), including melting-and-recasting and painting-cost items.\n\
        - Use π = 22/7 with radii that are multiples of 7 unless the item states otherwise.\n\
        - Provide an explanationDiagramSvg of the figure with its labelled dimensions when the shape is composite.\n\
        - The explanation writes every formula before substituting values.";

    compose(params, "mensuration", guidance, Layout::STANDALONE)
}

pub fn permutation_combination(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "permutation and combination",
        "Write permutation and combination questions.\n\
         - Cover word arrangements (vowels together, letters never together), committee selection with \
         restrictions, circular arrangements and selection of balls from bags.\n\
         - Express answers as plain integers in the options, not as nPr or nCr notation.",
    )
}

pub fn probability(params: &PromptParams<'_>) -> String {
    arithmetic(
        params,
        "probability",
        "Write probability questions.\n\
         - Use dice, coins, cards (a standard 52-card deck), balls drawn with and without replacement and \
         'at least one' complements.\n\
         - Express answers as fractions in lowest terms.",
    )
}
