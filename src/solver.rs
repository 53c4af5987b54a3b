//! This module contains the logic for filling a grid into a complete
//! solution.
//!
//! The [Solver] performs a randomized depth-first backtracking search: it
//! repeatedly locates the first empty cell, tries the candidate values 1 to
//! 9 in a uniformly random order, and recurses on the smaller frontier,
//! undoing the placement whenever the recursion fails. The random candidate
//! order is what makes generated puzzles vary between runs; with a fixed
//! order the search would always arrive at the same solution.

use crate::{Grid, SIZE, constraint};

use rand::Rng;
use rand::rngs::ThreadRng;

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// A solver fills the empty cells of a [Grid] with values that satisfy the
/// row, column, and box rules. It uses a random number generator to decide
/// the order in which candidate values are tried. For most cases, sensible
/// defaults are provided by [Solver::new_default].
pub struct Solver<R: Rng> {
    rng: R
}

impl Solver<ThreadRng> {

    /// Creates a new solver that uses a [ThreadRng] to order the candidate
    /// values.
    pub fn new_default() -> Solver<ThreadRng> {
        Solver::new(rand::thread_rng())
    }
}

impl<R: Rng> Solver<R> {

    /// Creates a new solver that uses the given random number generator to
    /// order the candidate values.
    pub fn new(rng: R) -> Solver<R> {
        Solver {
            rng
        }
    }

    /// Fills all empty cells of the given [Grid] with values that satisfy
    /// the rules and match all already present values. Returns `true` if a
    /// complete solution was found, in which case the grid is full and
    /// passes [constraint::is_valid]. Returns `false` if the present values
    /// admit no solution, in which case the grid remains unchanged.
    ///
    /// On an empty grid this always succeeds, as every freshly emptied 9x9
    /// grid has a solution. The recursion depth is bounded by the number of
    /// empty cells, so at most 81 frames.
    pub fn solve(&mut self, grid: &mut Grid) -> bool {
        let (row, col) = match grid.first_empty_cell() {
            Some(cell) => cell,
            None => return true
        };

        for value in shuffle(&mut self.rng, 1..=SIZE as u8) {
            if constraint::is_valid_placement(grid, value, row, col) {
                grid.set(row, col, value);

                if self.solve(grid) {
                    return true;
                }

                grid.clear(row, col);
            }
        }

        false
    }
}
