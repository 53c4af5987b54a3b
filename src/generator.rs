//! This module contains the logic for generating random puzzles.
//!
//! Generation is done by first filling an empty grid into a complete
//! solution with a [Solver](crate::solver::Solver) and then removing some
//! clues using a [Reducer]. The [Generator] orchestrates both steps behind a
//! single random source and retains the solution alongside the playable
//! grid. [new_game] is the convenience entry point for callers that only
//! want a board.

use crate::{Grid, SIZE};
use crate::solver::Solver;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

// Bounds of the half-open range from which the per-row round count is
// sampled. The removal loop runs `rounds - 1` times, so each row receives 4
// to 6 removal attempts.
const MIN_ROUNDS: usize = 5;
const MAX_ROUNDS: usize = 8;

/// A reducer carves a playable puzzle out of a complete solution by clearing
/// randomly chosen cells. It uses a random number generator to decide which
/// cells are cleared. For most cases, sensible defaults are provided by
/// [Reducer::new_default].
///
/// The removal policy is a best-effort randomized mask: it guarantees
/// neither a unique solution of the reduced puzzle nor a minimum clue count
/// per row, column, or box.
pub struct Reducer<R: Rng> {
    rng: R
}

impl Reducer<ThreadRng> {

    /// Creates a new reducer that uses a [ThreadRng] to decide which cells
    /// are cleared.
    pub fn new_default() -> Reducer<ThreadRng> {
        Reducer::new(rand::thread_rng())
    }
}

impl<R: Rng> Reducer<R> {

    /// Creates a new reducer that uses the given random number generator to
    /// decide which cells are cleared.
    pub fn new(rng: R) -> Reducer<R> {
        Reducer {
            rng
        }
    }

    /// Clears random cells of the given [Grid]. For each of the 9 rows
    /// independently, between 4 and 6 removal attempts are made, each
    /// picking a uniformly random column and clearing that cell. Attempts
    /// may hit the same column more than once, in which case fewer distinct
    /// cells end up cleared than attempted.
    ///
    /// Since this only removes values, it can never introduce a rule
    /// conflict: a grid that passed [is_valid](crate::constraint::is_valid)
    /// before reduction still passes it afterwards.
    pub fn reduce(&mut self, grid: &mut Grid) {
        for row in 0..SIZE {
            let rounds = self.rng.gen_range(MIN_ROUNDS..MAX_ROUNDS);

            for _ in 1..rounds {
                let col = self.rng.gen_range(0..SIZE);
                grid.clear(row, col);
            }
        }
    }
}

/// The result of puzzle generation: the playable reduced [Grid] together
/// with the complete solution it was carved from.
///
/// The solution is snapshotted before reduction mutates the grid in place,
/// so it remains available for later verification or hinting even though the
/// reduced puzzle is not guaranteed to be uniquely solveable.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Puzzle {
    puzzle: Grid,
    solution: Grid
}

impl Puzzle {

    /// Gets a reference to the playable grid, i.e. the board with some cells
    /// cleared.
    pub fn grid(&self) -> &Grid {
        &self.puzzle
    }

    /// Gets a reference to the complete solution from which the playable
    /// grid was carved.
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Consumes this puzzle and returns the playable grid, discarding the
    /// solution.
    pub fn into_grid(self) -> Grid {
        self.puzzle
    }
}

/// A generator produces random [Puzzle]s by filling an empty grid into a
/// complete solution and then reducing it. A single random number generator
/// is threaded through both steps, so a seeded generator yields reproducible
/// puzzles. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] as the random source
    /// for both solving and reduction.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// as the random source for both solving and reduction.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Generates a new random [Puzzle]. An empty grid is filled into a
    /// complete solution, the solution is snapshotted, and the grid is then
    /// reduced in place to yield the playable board.
    ///
    /// # Panics
    ///
    /// If the solver fails to fill the empty grid. This never happens, as
    /// every freshly emptied 9x9 grid has a solution; a panic here signals a
    /// defect in the solver.
    pub fn generate(&mut self) -> Puzzle {
        let mut grid = Grid::new();
        let mut solver = Solver::new(&mut self.rng);
        let solved = solver.solve(&mut grid);

        assert!(solved, "an empty grid always has a solution");

        let solution = grid.clone();
        let mut reducer = Reducer::new(&mut self.rng);
        reducer.reduce(&mut grid);

        Puzzle {
            puzzle: grid,
            solution
        }
    }
}

/// Synchronously produces a ready-to-play board: a freshly generated puzzle
/// grid with some cells cleared, using a [ThreadRng] as the random source.
/// Callers that also need the retained solution should use a [Generator]
/// directly.
pub fn new_game() -> Grid {
    Generator::new_default().generate().into_grid()
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::{EMPTY, SOLVED_GRID_CODE, constraint};

    use rand::SeedableRng;

    use rand_chacha::ChaCha8Rng;

    fn empty_cells_in_row(grid: &Grid, row: usize) -> usize {
        (0..SIZE).filter(|&col| grid.get(row, col) == EMPTY).count()
    }

    #[test]
    fn reducer_only_removes_values() {
        let solution = Grid::parse(SOLVED_GRID_CODE).unwrap();
        let mut grid = solution.clone();
        let mut reducer = Reducer::new_default();
        reducer.reduce(&mut grid);

        assert!(grid.is_subset(&solution));
        assert!(!grid.is_full());
    }

    #[test]
    fn reducer_clears_within_attempt_bounds_per_row() {
        let mut grid = Grid::parse(SOLVED_GRID_CODE).unwrap();
        let mut reducer = Reducer::new(ChaCha8Rng::seed_from_u64(99));
        reducer.reduce(&mut grid);

        for row in 0..SIZE {
            let empty = empty_cells_in_row(&grid, row);

            // 4 to 6 attempts per row; repeated columns may lower the count
            // of distinct cleared cells, but never to zero.
            assert!(empty >= 1 && empty <= 6,
                "row {} has {} empty cells", row, empty);
        }
    }

    #[test]
    fn reducer_never_introduces_conflicts() {
        let mut grid = Grid::parse(SOLVED_GRID_CODE).unwrap();
        let mut reducer = Reducer::new_default();
        reducer.reduce(&mut grid);

        assert!(constraint::is_valid(&grid));
    }

    #[test]
    fn reducer_deterministic_under_seed() {
        let mut grid_1 = Grid::parse(SOLVED_GRID_CODE).unwrap();
        let mut grid_2 = Grid::parse(SOLVED_GRID_CODE).unwrap();

        Reducer::new(ChaCha8Rng::seed_from_u64(4)).reduce(&mut grid_1);
        Reducer::new(ChaCha8Rng::seed_from_u64(4)).reduce(&mut grid_2);

        assert_eq!(grid_1, grid_2);
    }

    #[test]
    fn generated_solution_is_full_and_valid() {
        let mut generator = Generator::new_default();
        let puzzle = generator.generate();

        assert!(puzzle.solution().is_full());
        assert!(constraint::is_valid(puzzle.solution()));
    }

    #[test]
    fn generated_puzzle_is_subset_of_solution() {
        let mut generator = Generator::new_default();
        let puzzle = generator.generate();

        assert!(puzzle.grid().is_subset(puzzle.solution()));
        assert!(!puzzle.grid().is_full());
        assert!(constraint::is_valid(puzzle.grid()));
    }

    #[test]
    fn into_grid_yields_playable_grid() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));
        let puzzle = generator.generate();
        let expected = puzzle.grid().clone();

        assert_eq!(expected, puzzle.into_grid());
    }

    #[test]
    fn new_game_produces_playable_board() {
        let grid = new_game();

        assert!(!grid.is_full());
        assert!(!grid.is_empty());
        assert!(constraint::is_valid(&grid));
    }
}
