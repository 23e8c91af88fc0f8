use super::{compose, Layout, PromptParams};

/// Every data-interpretation variant shares one data set across the chunk; `presentation`
/// says how that data set is shown.
fn di_prompt(params: &PromptParams<'_>, archetype: &str, presentation: &str) -> String {
    let guidance = format!(
        "Write ONE data set and {count} questions on it.\n\
         {presentation}\n\
         - Data relates to a realistic business or economic setting (sales of companies, production of units \
         across years, students in colleges) with 4 to 6 categories and values that make ratios and percentages clean.\n\
         - Put the full textual description of the data (including every value) in commonContext so the \
         questions are answerable without the figure.\n\
         - Questions ask for ratios, percentage change, averages, differences and 'approximately what percent'.\n\
         - The explanation quotes the exact values read from the data before calculating.",
        count = params.question_count,
        presentation = presentation.trim(),
    );

    compose(params, archetype, &guidance, Layout::SHARED)
}

pub fn data_interpretation(params: &PromptParams<'_>) -> String {
    di_prompt(
        params,
        "data interpretation",
        "- Choose the most suitable presentation (table, bar graph, line graph or pie chart) and render it as \
         an inline SVG in commonContextDiagramSvg, or as a plain-text table inside commonContext for tables.",
    )
}

pub fn bar_graph(params: &PromptParams<'_>) -> String {
    di_prompt(
        params,
        "bar graph data interpretation",
        "- Present the data as a bar graph (simple or grouped for two series) in commonContextDiagramSvg \
         with labelled axes, a legend and the value printed on top of each bar.",
    )
}

pub fn line_graph(params: &PromptParams<'_>) -> String {
    di_prompt(
        params,
        "line graph data interpretation",
        "- Present the data as a line graph over 5 or 6 years in commonContextDiagramSvg, with one or two lines, \
         marked data points and values labelled at every point.",
    )
}

pub fn pie_chart(params: &PromptParams<'_>) -> String {
    di_prompt(
        params,
        "pie chart data interpretation",
        "- Present the data as a pie chart of percentage (or degree) shares in commonContextDiagramSvg, and state \
         the total in commonContext so absolute values can be derived. Shares must add up to 100% (360°).",
    )
}

pub fn table(params: &PromptParams<'_>) -> String {
    di_prompt(
        params,
        "tabular data interpretation",
        "- Present the data as a table with 5 or 6 rows and 3 or 4 columns written row by row inside \
         commonContext. Leave commonContextDiagramSvg empty. Some cells may be percentages of a row total.",
    )
}

pub fn caselet(params: &PromptParams<'_>) -> String {
    di_prompt(
        params,
        "caselet data interpretation",
        "- Present the data as a caselet: a paragraph of 120-180 words in commonContext that states the figures \
         in prose (for example 'Of the 1,200 employees, 35% work in sales ...'). No diagram is needed; \
         solvers must extract the numbers themselves.",
    )
}
