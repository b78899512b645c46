//! Formatting utilities for terminal output

use crate::solver::{DecisionTree, Score};
use std::fmt::Write;

/// Render a decision tree as an indented markdown list
///
/// Internal nodes read `* g(GUESS)=BAND: [SET] (N steps)`; leaves show just
/// the identified value. The root line has no `g(...)=...:` prefix.
///
/// # Examples
/// ```
/// use yeardle_solver::core::IntervalSet;
/// use yeardle_solver::output::formatters::format_tree;
/// use yeardle_solver::solver::{DecisionTree, Solver};
///
/// let mut solver = Solver::new();
/// let tree = DecisionTree::build(&mut solver, &IntervalSet::range(0, 2));
/// assert_eq!(
///     format_tree(&tree),
///     "* [0-2] (2 steps)\n  * g(1)=1-2: [0,2] (1 steps)\n    * g(2)=1-2: 0\n    * g(2)=0: 2\n  * g(1)=0: 1\n"
/// );
/// ```
#[must_use]
pub fn format_tree(tree: &DecisionTree) -> String {
    let mut out = String::new();
    write_node(&mut out, tree, None, 0);
    out
}

fn write_node(out: &mut String, node: &DecisionTree, label: Option<&str>, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push_str("* ");
    if let Some(label) = label {
        out.push_str(label);
        out.push_str(": ");
    }

    if node.is_leaf() {
        let _ = writeln!(out, "{}", node.candidates);
        return;
    }
    let _ = writeln!(out, "[{}] ({} steps)", node.candidates, node.score.worst);

    for branch in &node.branches {
        let label = format!("g({})={}", node.guess, branch.feedback);
        write_node(out, &branch.subtree, Some(&label), depth + 1);
    }
}

/// One-line summary of a score for `candidates` values
#[must_use]
pub fn format_score(score: Score, candidates: u64) -> String {
    format!(
        "{} worst case, {:.3} average over {} candidates",
        score.worst,
        score.average(candidates),
        candidates
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IntervalSet;
    use crate::solver::Solver;

    #[test]
    fn single_candidate_tree() {
        let mut solver = Solver::new();
        let tree = DecisionTree::build(&mut solver, &IntervalSet::single(1999));
        assert_eq!(format_tree(&tree), "* 1999\n");
    }

    #[test]
    fn tree_lines_match_nodes() {
        let mut solver = Solver::new();
        let tree = DecisionTree::build(&mut solver, &IntervalSet::range(0, 30));
        let text = format_tree(&tree);

        assert_eq!(text.lines().count(), tree.node_count());
        assert!(text.starts_with("* [0-30] (4 steps)\n  * g(15)="));
    }

    #[test]
    fn score_summary() {
        assert_eq!(
            format_score(Score::new(4, 98), 31),
            "4 worst case, 3.161 average over 31 candidates"
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
