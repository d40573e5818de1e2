//! A [`Brancher`] which sequentially applies a list of [`Brancher`]s until all of them can not find
//! another branch.
//!
//! Note that this structure should be used if you want to use dynamic [`Brancher`]s but
//! require a [`Sized`] object (e.g. when a function takes as input `impl Brancher`).
use std::fmt::Debug;

use crate::basic_types::SolutionReference;
use crate::branching::Branch;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::statistics::StatisticLogger;

/// An implementation of a [`Brancher`] which takes a [`Vec`] of `Box<dyn Brancher>` and
/// sequentially applies [`Brancher::next_branch`] until all of them return [`None`].
///
/// For any other method in [`Brancher`] it will simply pass it along to all of the provided
/// `Box<dyn Brancher>`s.
///
/// # Note
/// The index of the brancher to try is reset on [`DynamicBrancher::on_backtrack`] and
/// [`DynamicBrancher::on_solution`]; undoing a decision can free up variables of an earlier
/// brancher.
pub struct DynamicBrancher {
    branchers: Vec<Box<dyn Brancher>>,
    brancher_index: usize,
}

impl Debug for DynamicBrancher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicBrancher").finish()
    }
}

impl DynamicBrancher {
    /// Creates a new [`DynamicBrancher`] with the provided `branchers`. It will attempt to use the
    /// `branchers` in the order in which they were provided.
    pub fn new(branchers: Vec<Box<dyn Brancher>>) -> Self {
        Self {
            branchers,
            brancher_index: 0,
        }
    }

    pub fn add_brancher(&mut self, brancher: Box<dyn Brancher>) {
        self.branchers.push(brancher)
    }
}

impl Brancher for DynamicBrancher {
    fn next_branch(&mut self, context: &mut SelectionContext) -> Option<Branch> {
        loop {
            if self.brancher_index >= self.branchers.len() {
                return None;
            }
            if let Some(branch) = self.branchers[self.brancher_index].next_branch(context) {
                return Some(branch);
            } else {
                // Check whether the next brancher can make a decision
                self.brancher_index += 1;
            }
        }
    }

    fn on_backtrack(&mut self) {
        self.brancher_index = 0;
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_backtrack());
    }

    fn on_solution(&mut self, solution: SolutionReference) {
        self.brancher_index = 0;
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_solution(solution));
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.branchers
            .iter()
            .enumerate()
            .for_each(move |(index, brancher)| {
                brancher.log_statistics(statistic_logger.attach_to_prefix(index))
            })
    }
}
