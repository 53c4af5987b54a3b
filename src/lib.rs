// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate generates classic 9x9 Sudoku puzzles. It supports the
//! following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking placement validity according to the standard row, column, and
//! box rules
//! * Filling an empty grid into a complete solution using randomized
//! backtracking
//! * Carving a playable puzzle out of a complete solution while retaining
//! the solution for later verification or hinting
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while the [Display](std::fmt::Display)
//! implementation renders a board with box dividers for human readers.
//!
//! ```
//! use sudoku_gen::Grid;
//!
//! let grid = Grid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Generating puzzles
//!
//! The quickest way to obtain a playable board is [generator::new_game],
//! which uses a fresh [ThreadRng](rand::rngs::ThreadRng).
//!
//! ```
//! use sudoku_gen::generator::new_game;
//!
//! let puzzle = new_game();
//! assert!(!puzzle.is_full());
//! ```
//!
//! For control over the random source, for example to generate reproducible
//! puzzles in tests, a [Generator](generator::Generator) can be constructed
//! with any [Rng](rand::Rng). The same seed always yields the same puzzle.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use sudoku_gen::generator::Generator;
//!
//! let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(42));
//! let puzzle = generator.generate();
//!
//! // The solution is retained alongside the playable grid.
//! assert!(puzzle.grid().is_subset(puzzle.solution()));
//! ```

pub mod constraint;
pub mod error;
pub mod generator;
pub mod solver;



use error::{GridParseError, GridParseResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a grid, as well as the number of values
/// a cell can take.
pub const SIZE: usize = 9;

/// The width and height of one of the nine non-overlapping boxes
/// partitioning the grid.
pub const BOX_SIZE: usize = 3;

const CELL_COUNT: usize = SIZE * SIZE;

/// The content of a cell that holds no value. Cells are empty mid-search and
/// after the reducer has carved the puzzle.
pub const EMPTY: u8 = 0;

pub(crate) fn index(row: usize, col: usize) -> usize {
    row * SIZE + col
}

/// A 9x9 Sudoku board stored as a row-major array of cells. Each cell holds
/// a value in the range `1..=9` or [EMPTY].
///
/// A fully solved grid contains each of 1 to 9 exactly once in every row,
/// every column, and every 3x3 box. A partially filled grid (mid-search or
/// after reduction) contains no duplicate non-empty value in any of those
/// groups. The grid itself does not enforce these invariants; see the
/// [constraint] module for the checks.
///
/// Coordinates are `(row, col)` pairs, each in the range `[0, 9[`, with
/// `(0, 0)` in the top-left corner. Accessing a cell outside the grid or
/// writing a value greater than 9 is a programming error and panics rather
/// than being reported as a recoverable error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Grid {
    cells: Vec<u8>
}

fn to_string(cell: &u8) -> String {
    if *cell == EMPTY {
        String::from("")
    }
    else {
        cell.to_string()
    }
}

fn divider_line() -> String {
    // 9 cells of width 3 plus one separator per box boundary, rounded up.
    "-".repeat(30)
}

fn content_row(grid: &Grid, row: usize) -> String {
    let mut result = String::new();

    for col in 0..SIZE {
        if col == BOX_SIZE || col == 2 * BOX_SIZE {
            result.push('|');
        }

        let value = grid.get(row, col);

        if value == EMPTY {
            result.push_str(" _ ");
        }
        else {
            result.push_str(&format!(" {} ", value));
        }
    }

    result
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row == BOX_SIZE || row == 2 * BOX_SIZE {
                f.write_str(divider_line().as_str())?;
                f.write_str("\n")?;
            }

            f.write_str(content_row(self, row).as_str())?;

            if row < SIZE - 1 {
                f.write_str("\n")?;
            }
        }

        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl Grid {

    /// Creates a new, empty grid, i.e. one in which every cell is [EMPTY].
    pub fn new() -> Grid {
        Grid {
            cells: vec![EMPTY; CELL_COUNT]
        }
    }

    /// Parses a code encoding a grid. The code is a comma-separated list of
    /// exactly 81 entries in row-major order (each row left-to-right, rows
    /// top-to-bottom). Each entry is either a number in the range `[0, 9]`
    /// or blank, where blank and `0` both denote an empty cell. Whitespace
    /// around entries is ignored to allow for more intuitive formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of [GridParseError] (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<Grid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(GridParseError::WrongNumberOfCells);
        }

        let mut grid = Grid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let value = entry.parse::<u8>()?;

            if value > SIZE as u8 {
                return Err(GridParseError::InvalidNumber);
            }

            grid.cells[i] = value;
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_gen::Grid;
    ///
    /// let mut grid = Grid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set(1, 1, 4);
    /// grid.set(2, 1, 5);
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = Grid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position. [EMPTY]
    /// indicates the cell holds no value.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `[0, 9[`.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < SIZE && col < SIZE,
            "cell ({}, {}) is outside the grid", row, col);

        self.cells[index(row, col)]
    }

    /// Sets the content of the cell at the specified position to the given
    /// value, which must be in the range `[0, 9]`. Writing [EMPTY] clears
    /// the cell. If the cell was not empty, the old value is overwritten.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `[0, 9[` or `value` is greater
    /// than 9.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(row < SIZE && col < SIZE,
            "cell ({}, {}) is outside the grid", row, col);
        assert!(value <= SIZE as u8, "value {} is out of range", value);

        self.cells[index(row, col)] = value;
    }

    /// Clears the content of the cell at the specified position, that is,
    /// sets it to [EMPTY]. If the cell is already empty, it is left that
    /// way.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `[0, 9[`.
    pub fn clear(&mut self, row: usize, col: usize) {
        assert!(row < SIZE && col < SIZE,
            "cell ({}, {}) is outside the grid", row, col);

        self.cells[index(row, col)] = EMPTY;
    }

    /// Produces the coordinates of the first empty cell in row-major scan
    /// order, i.e. top-to-bottom and left-to-right within each row, or
    /// `None` if the grid is full. The scan order is a deliberate tie-break:
    /// it determines the traversal order of the solver.
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        self.cells.iter()
            .position(|&cell| cell == EMPTY)
            .map(|i| (i / SIZE, i % SIZE))
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average puzzles with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|&&cell| cell != EMPTY)
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// value. In this case, [Grid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|&cell| cell == EMPTY)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// value. In this case, [Grid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some value must be filled
    /// in `other` with the same value. A reduced puzzle is always a subset
    /// of the solution it was carved from.
    pub fn is_subset(&self, other: &Grid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(&self_cell, &other_cell)|
                self_cell == EMPTY || self_cell == other_cell)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

#[cfg(test)]
pub(crate) const SOLVED_GRID_CODE: &str = "\
    7,4,6,2,8,1,3,5,9,\
    9,1,2,5,3,7,8,4,6,\
    8,5,3,4,9,6,1,7,2,\
    3,7,4,1,2,5,6,9,8,\
    6,2,8,7,4,9,5,1,3,\
    5,9,1,3,6,8,7,2,4,\
    1,6,9,8,7,4,2,3,5,\
    2,8,5,9,1,3,4,6,7,\
    4,3,7,6,5,2,9,8,1";
