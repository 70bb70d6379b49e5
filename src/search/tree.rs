use crate::interface::render;
use crate::models::{Item, Selection};
use crate::problem::OutputMode;

/// Depth bounds tried by iterative deepening run from 1 up to (not
/// including) this limit.
pub const MAX_DEPTH: usize = 100;

/// One node of the fully materialized subset tree. The tree is owned
/// by the caller and dropped after the search; its size grows
/// combinatorially with the catalog, which is the accepted
/// scalability limit of this solver.
#[derive(Debug)]
pub struct Node<'a> {
    pub selection: Selection<'a>,
    pub children: Vec<Node<'a>>,
}

/// Build the tree of every budget-feasible selection.
///
/// Items are sorted by name once; children extend a node only with
/// items strictly after the last one used, so each feasible subset
/// appears exactly once, in canonical order. Branches that would
/// exceed the budget are never generated.
pub fn build_tree<'a>(catalog: &'a [Item], budget: u64) -> Node<'a> {
    let mut items: Vec<&'a Item> = catalog.iter().collect();
    items.sort_by(|a, b| a.name.cmp(&b.name));

    let mut root = Node {
        selection: Selection::empty(),
        children: Vec::new(),
    };
    expand(&mut root, &items, 0, budget);
    root
}

fn expand<'a>(node: &mut Node<'a>, items: &[&'a Item], index: usize, budget: u64) {
    for (i, item) in items.iter().enumerate().skip(index) {
        if node.selection.total_cost() + item.cost <= budget {
            let mut child = Node {
                selection: node.selection.with_item(item),
                children: Vec::new(),
            };
            expand(&mut child, items, i + 1, budget);
            node.children.push(child);
        }
    }
}

/// Depth-first search bounded by `limit`. The goal test runs at every
/// node, root included, before the depth check. Returning None here
/// means either the bound was hit or the subtree is exhausted; the
/// two are not distinguished, iterative deepening just tries the next
/// bound.
fn depth_limited<'a>(
    node: &'a Node<'a>,
    target: u64,
    limit: usize,
    depth: usize,
    output: OutputMode,
) -> Option<&'a Selection<'a>> {
    if output.is_verbose() {
        println!("{}", render::selection_line(&node.selection));
    }

    if node.selection.total_value() >= target {
        return Some(&node.selection);
    }
    if depth == limit {
        return None;
    }
    for child in &node.children {
        if let Some(found) = depth_limited(child, target, limit, depth + 1, output) {
            return Some(found);
        }
    }
    None
}

/// Run depth-limited search with bounds 1, 2, … and return the first
/// hit. Children are visited in canonical order, so the result is the
/// deterministic construction-order-first selection at the shallowest
/// qualifying depth.
pub fn iterative_deepening<'a>(
    root: &'a Node<'a>,
    target: u64,
    output: OutputMode,
) -> Option<&'a Selection<'a>> {
    for limit in 1..MAX_DEPTH {
        if output.is_verbose() {
            println!("\nDepth = {}", limit);
        }
        if let Some(found) = depth_limited(root, target, limit, 0, output) {
            return Some(found);
        }
    }
    None
}
