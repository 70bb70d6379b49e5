use crate::models::Selection;

/// Space-separated item names, in canonical order. This is the whole
/// compact output.
pub fn name_list(selection: &Selection) -> String {
    selection
        .items()
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One trace line for a visited state: `{A B}. Value = 8. Cost = 6.`
pub fn selection_line(selection: &Selection) -> String {
    format!(
        "{{{}}}. Value = {}. Cost = {}.",
        name_list(selection),
        selection.total_value(),
        selection.total_cost()
    )
}

/// Trace line with the hill-climbing error appended.
pub fn selection_line_with_error(selection: &Selection, target: u64, budget: u64) -> String {
    format!(
        "{} Error = {}.",
        selection_line(selection),
        selection.error(target, budget)
    )
}
