use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, SearchError};
use crate::models::Item;
use crate::problem::{OutputMode, Problem, SearchKind};

/// Load a problem definition from a whitespace-delimited text file.
///
/// Line 1: `target budget output_type [num_restarts]`. The restart
/// count is required for hill climbing and rejected for tree search.
/// Each further line: `name value cost`. Blank lines are skipped.
pub fn load_problem<P: AsRef<Path>>(path: P, kind: SearchKind) -> Result<Problem> {
    let content = fs::read_to_string(path)?;
    parse_problem(&content, kind)
}

/// Parse a problem definition from already-loaded text.
pub fn parse_problem(content: &str, kind: SearchKind) -> Result<Problem> {
    let mut lines = content.lines().filter(|l| !l.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| SearchError::InvalidInput("empty problem file".to_string()))?;
    let fields: Vec<&str> = header.split_whitespace().collect();

    let expected = match kind {
        SearchKind::HillClimbing => 4,
        SearchKind::TreeSearch => 3,
    };
    if fields.len() != expected {
        return Err(SearchError::InvalidInput(format!(
            "header has {} fields, expected {}",
            fields.len(),
            expected
        )));
    }

    let target: u64 = fields[0].parse()?;
    let budget: u64 = fields[1].parse()?;
    let output = parse_output_mode(fields[2])?;
    let num_restarts = match kind {
        SearchKind::HillClimbing => Some(fields[3].parse()?),
        SearchKind::TreeSearch => None,
    };

    let mut items = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(SearchError::InvalidInput(format!(
                "item line '{}' has {} fields, expected 3",
                line.trim(),
                fields.len()
            )));
        }
        let name = fields[0].to_string();
        if !seen.insert(name.clone()) {
            return Err(SearchError::InvalidInput(format!(
                "duplicate item name: {}",
                name
            )));
        }
        let value: u64 = fields[1].parse()?;
        let cost: u64 = fields[2].parse()?;
        items.push(Item::new(name, value, cost));
    }

    Ok(Problem {
        target,
        budget,
        output,
        num_restarts,
        items,
    })
}

fn parse_output_mode(token: &str) -> Result<OutputMode> {
    match token {
        "C" => Ok(OutputMode::Compact),
        "V" => Ok(OutputMode::Verbose),
        other => Err(SearchError::InvalidInput(format!(
            "unknown output type '{}', expected C or V",
            other
        ))),
    }
}
