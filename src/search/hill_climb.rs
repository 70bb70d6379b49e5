use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SearchError};
use crate::interface::render;
use crate::models::{Item, Selection};
use crate::problem::Problem;

/// Settings for the multi-restart driver. The restart count comes
/// from the problem file; the seed comes from the CLI.
#[derive(Debug, Clone)]
pub struct HillClimbConfig {
    pub restarts: u64,
    pub seed: Option<u64>,
}

/// All single-move neighbors of a selection: one add-move per catalog
/// item not already chosen (in catalog order), then one remove-move
/// per chosen item (in canonical order). Each neighbor is rebuilt
/// from scratch, so totals are always consistent with its items.
pub fn generate_neighbors<'a>(
    current: &Selection<'a>,
    catalog: &'a [Item],
) -> Vec<Selection<'a>> {
    let mut neighbors = Vec::with_capacity(catalog.len());

    for item in catalog {
        if !current.contains(item) {
            neighbors.push(current.with_item(item));
        }
    }

    for item in current.items() {
        neighbors.push(current.without_item(&item.name));
    }

    neighbors
}

/// Index of the neighbor with the lowest error. Scans with a strict
/// less-than so the first minimum wins, which keeps the move order
/// deterministic: add-moves in catalog order beat later ties.
fn lowest_error(neighbors: &[Selection], target: u64, budget: u64) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, neighbor) in neighbors.iter().enumerate() {
        let error = neighbor.error(target, budget);
        match best {
            Some((_, best_error)) if error >= best_error => {}
            _ => best = Some((i, error)),
        }
    }
    best.map(|(i, _)| i)
}

/// Climb from `start` to a local minimum.
///
/// Each step regenerates every neighbor, picks the lowest-error one,
/// and moves only if that strictly improves on the current error and
/// the neighbor is non-empty. Otherwise the current state is a local
/// minimum and is returned as-is, even with positive error.
pub fn climb<'a>(start: Selection<'a>, problem: &'a Problem) -> Selection<'a> {
    let mut current = start;

    loop {
        let mut neighbors = generate_neighbors(&current, &problem.items);

        if problem.output.is_verbose() {
            println!("Neighbors:");
            for neighbor in &neighbors {
                println!(
                    "{}",
                    render::selection_line_with_error(neighbor, problem.target, problem.budget)
                );
            }
        }

        let Some(best) = lowest_error(&neighbors, problem.target, problem.budget) else {
            return current;
        };

        let improves = neighbors[best].error(problem.target, problem.budget)
            < current.error(problem.target, problem.budget);
        if !improves || neighbors[best].is_empty() {
            return current;
        }

        let next = neighbors.swap_remove(best);
        if problem.output.is_verbose() {
            println!(
                "\nMove to {}",
                render::selection_line_with_error(&next, problem.target, problem.budget)
            );
        }
        current = next;
    }
}

/// A uniformly random non-empty starting state: size drawn from
/// `1..=catalog.len()`, then a uniform subset of that size.
pub fn random_initial<'a>(catalog: &'a [Item], rng: &mut impl Rng) -> Result<Selection<'a>> {
    if catalog.is_empty() {
        return Err(SearchError::EmptyCatalog);
    }
    let size = rng.gen_range(1..=catalog.len());
    let picked: Vec<&Item> = catalog.choose_multiple(rng, size).collect();
    Ok(Selection::new(picked))
}

/// Run the full multi-restart search and return the terminal state
/// with the lowest error across all restarts (first found wins ties).
pub fn run<'a>(problem: &'a Problem, config: &HillClimbConfig) -> Result<Selection<'a>> {
    if problem.items.is_empty() {
        return Err(SearchError::EmptyCatalog);
    }
    if config.restarts == 0 {
        return Err(SearchError::InvalidInput(
            "at least one restart is required".to_string(),
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut best: Option<Selection<'a>> = None;
    for _ in 0..config.restarts {
        let start = random_initial(&problem.items, &mut rng)?;
        if problem.output.is_verbose() {
            println!("\nRandomly chosen starting state:");
            println!(
                "{}",
                render::selection_line_with_error(&start, problem.target, problem.budget)
            );
        }

        let terminal = climb(start, problem);
        match &best {
            Some(current_best)
                if terminal.error(problem.target, problem.budget)
                    >= current_best.error(problem.target, problem.budget) => {}
            _ => best = Some(terminal),
        }
    }

    best.ok_or_else(|| SearchError::InvalidInput("no restart produced a result".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::OutputMode;

    fn problem(target: u64, budget: u64, items: Vec<Item>) -> Problem {
        Problem {
            target,
            budget,
            output: OutputMode::Compact,
            num_restarts: Some(1),
            items,
        }
    }

    fn names<'a>(selection: &'a Selection<'a>) -> Vec<&'a str> {
        selection.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_neighbor_counts_and_order() {
        let p = problem(
            10,
            5,
            vec![
                Item::new("A", 3, 2),
                Item::new("B", 5, 4),
                Item::new("C", 1, 1),
            ],
        );
        let current = Selection::new(vec![&p.items[1]]); // {B}
        let neighbors = generate_neighbors(&current, &p.items);

        // Two add-moves (A, C in catalog order), then one remove-move.
        assert_eq!(neighbors.len(), 3);
        assert_eq!(names(&neighbors[0]), vec!["A", "B"]);
        assert_eq!(names(&neighbors[1]), vec!["B", "C"]);
        assert!(neighbors[2].is_empty());
    }

    #[test]
    fn test_climb_reaches_optimum_in_two_moves() {
        // {B}: error (10-1) + (10-1) = 18. Its best neighbor is the
        // add-move {A,B} with error 10 (the remove-move {} ties at 10
        // but add-moves come first). From {A,B}, dropping B gives {A}
        // with error 0, the global optimum.
        let p = problem(10, 1, vec![Item::new("A", 10, 1), Item::new("B", 1, 10)]);
        let start = Selection::new(vec![&p.items[1]]);
        let result = climb(start, &p);

        assert_eq!(names(&result), vec!["A"]);
        assert_eq!(result.error(p.target, p.budget), 0);
    }

    #[test]
    fn test_climb_returns_local_minimum() {
        let p = problem(
            12,
            6,
            vec![
                Item::new("A", 3, 2),
                Item::new("B", 5, 4),
                Item::new("C", 4, 3),
                Item::new("D", 2, 2),
            ],
        );
        let start = Selection::new(vec![&p.items[0]]);
        let result = climb(start, &p);

        // No neighbor may strictly beat the returned state.
        let result_error = result.error(p.target, p.budget);
        for neighbor in generate_neighbors(&result, &p.items) {
            assert!(neighbor.error(p.target, p.budget) >= result_error);
        }
    }

    #[test]
    fn test_climb_never_returns_empty_state() {
        // Target 0: error is cost overage only, so the empty set would
        // be the global minimum, but the transition rule forbids
        // moving to it.
        let p = problem(0, 0, vec![Item::new("A", 1, 5)]);
        let start = Selection::new(vec![&p.items[0]]);
        let result = climb(start, &p);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_run_is_deterministic_with_seed() {
        let p = problem(
            9,
            7,
            vec![
                Item::new("A", 3, 2),
                Item::new("B", 5, 4),
                Item::new("C", 4, 3),
            ],
        );
        let config = HillClimbConfig {
            restarts: 5,
            seed: Some(42),
        };

        let first = run(&p, &config).unwrap();
        let second = run(&p, &config).unwrap();
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn test_run_finds_feasible_solution_when_easy() {
        // {A, B} (v8, c6) meets target 8 within budget 6 and restarts
        // give plenty of chances to land on it.
        let p = problem(8, 6, vec![Item::new("A", 3, 2), Item::new("B", 5, 4)]);
        let config = HillClimbConfig {
            restarts: 20,
            seed: Some(7),
        };

        let result = run(&p, &config).unwrap();
        assert_eq!(result.error(p.target, p.budget), 0);
    }

    #[test]
    fn test_run_rejects_empty_catalog() {
        let p = problem(5, 5, vec![]);
        let config = HillClimbConfig {
            restarts: 3,
            seed: Some(1),
        };
        assert!(matches!(run(&p, &config), Err(SearchError::EmptyCatalog)));
    }

    #[test]
    fn test_run_rejects_zero_restarts() {
        let p = problem(5, 5, vec![Item::new("A", 3, 2)]);
        let config = HillClimbConfig {
            restarts: 0,
            seed: None,
        };
        assert!(run(&p, &config).is_err());
    }

    #[test]
    fn test_random_initial_is_nonempty_and_within_catalog() {
        let items = vec![
            Item::new("A", 3, 2),
            Item::new("B", 5, 4),
            Item::new("C", 4, 3),
        ];
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..50 {
            let start = random_initial(&items, &mut rng).unwrap();
            assert!(!start.is_empty());
            assert!(start.len() <= items.len());
        }
    }
}
