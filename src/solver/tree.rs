//! Full decision trees
//!
//! The solver only answers "what to guess first". Repeatedly partitioning
//! the candidates around each answer recovers the whole strategy.

use super::{Score, Solver};
use crate::core::{Feedback, IntervalSet, partition};

/// One node of a strategy: the candidates left, the guess to play, and a
/// subtree for every feedback some candidate would produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    pub candidates: IntervalSet,
    pub score: Score,
    pub guess: i32,
    pub branches: Vec<Branch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub feedback: Feedback,
    pub subtree: DecisionTree,
}

impl DecisionTree {
    /// Build the optimal strategy for `candidates`
    ///
    /// # Panics
    /// Panics if `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use yeardle_solver::core::IntervalSet;
    /// use yeardle_solver::solver::{DecisionTree, Solver};
    ///
    /// let mut solver = Solver::new();
    /// let tree = DecisionTree::build(&mut solver, &IntervalSet::range(0, 10));
    ///
    /// assert_eq!(tree.leaf_count(), 11);
    /// assert_eq!(tree.depth(), tree.score.worst);
    /// ```
    pub fn build(solver: &mut Solver, candidates: &IntervalSet) -> Self {
        let analysis = solver.analyze(candidates);

        let branches = if analysis.score.worst == 0 {
            Vec::new()
        } else {
            partition(candidates, analysis.guess)
                .into_iter()
                .map(|(feedback, part)| Branch {
                    feedback,
                    subtree: Self::build(solver, &part),
                })
                .collect()
        };

        Self {
            candidates: candidates.clone(),
            score: analysis.score,
            guess: analysis.guess,
            branches,
        }
    }

    /// A leaf holds a single, identified candidate
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.branches.is_empty()
    }

    /// Guesses needed to identify `target` by following this tree
    ///
    /// Returns `None` if `target` is not one of the candidates.
    #[must_use]
    pub fn play(&self, target: i32) -> Option<u32> {
        if !self.candidates.contains(target) {
            return None;
        }
        if self.is_leaf() {
            return Some(0);
        }

        let feedback = Feedback::classify(self.guess, target)?;
        let branch = self.branches.iter().find(|b| b.feedback == feedback)?;
        branch.subtree.play(target).map(|guesses| guesses + 1)
    }

    /// Longest guess sequence in the tree
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.branches
            .iter()
            .map(|b| b.subtree.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.branches.iter().map(|b| b.subtree.leaf_count()).sum()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .branches
            .iter()
            .map(|b| b.subtree.node_count())
            .sum::<usize>()
    }
}
