//! Decision tree command
//!
//! Builds the complete optimal strategy for a candidate set.

use crate::core::IntervalSet;
use crate::solver::{DecisionTree, Solver};
use std::time::{Duration, Instant};
use tracing::info;

/// Result of building a decision tree
pub struct TreeResult {
    pub tree: DecisionTree,
    pub cache_entries: usize,
    pub duration: Duration,
}

/// Build the decision tree for `candidates`
pub fn build_tree(solver: &mut Solver, candidates: &IntervalSet) -> TreeResult {
    info!(candidates = %candidates, "building decision tree");
    let start = Instant::now();

    let tree = DecisionTree::build(solver, candidates);
    let duration = start.elapsed();

    info!(
        nodes = tree.node_count(),
        depth = tree.depth(),
        elapsed_ms = duration.as_millis() as u64,
        "decision tree built"
    );

    TreeResult {
        tree,
        cache_entries: solver.cache_len(),
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_for_range() {
        let mut solver = Solver::new();
        let result = build_tree(&mut solver, &IntervalSet::range(0, 20));

        assert_eq!(result.tree.leaf_count(), 21);
        assert_eq!(result.tree.depth(), result.tree.score.worst);
        assert!(result.cache_entries > 0);
    }
}
