//! This module contains the placement checks that define the rules of the
//! puzzle: a value may appear at most once in each row, each column, and
//! each 3x3 box.
//!
//! All functions here are pure. They operate on a [Grid] snapshot and never
//! mutate it. The solver is the only consumer of [is_valid_placement] during
//! generation; [is_valid] checks an entire grid and is mostly useful for
//! consumers that want to verify a board, for example user input in a play
//! loop or a generated puzzle in a test.

use crate::{BOX_SIZE, EMPTY, Grid, SIZE};

/// Indicates whether the given value exists anywhere within the given row of
/// the grid.
pub fn exists_in_row(grid: &Grid, value: u8, row: usize) -> bool {
    (0..SIZE).any(|col| grid.get(row, col) == value)
}

/// Indicates whether the given value exists anywhere within the given column
/// of the grid.
pub fn exists_in_col(grid: &Grid, value: u8, col: usize) -> bool {
    (0..SIZE).any(|row| grid.get(row, col) == value)
}

/// Computes the half-open row or column range `[lower, upper[` of the box
/// that contains the given row or column index. Indices less than 3 map to
/// `(0, 3)`, indices less than 6 to `(3, 6)`, and all others to `(6, 9)`.
pub fn box_bounds(index: usize) -> (usize, usize) {
    if index < BOX_SIZE {
        (0, BOX_SIZE)
    }
    else if index < 2 * BOX_SIZE {
        (BOX_SIZE, 2 * BOX_SIZE)
    }
    else {
        (2 * BOX_SIZE, SIZE)
    }
}

/// Indicates whether the given value exists anywhere within the 3x3 box that
/// contains the cell at the given position.
pub fn exists_in_box(grid: &Grid, value: u8, row: usize, col: usize) -> bool {
    let (row_lower, row_upper) = box_bounds(row);
    let (col_lower, col_upper) = box_bounds(col);

    for box_row in row_lower..row_upper {
        for box_col in col_lower..col_upper {
            if grid.get(box_row, box_col) == value {
                return true;
            }
        }
    }

    false
}

/// Indicates whether placing the given value at the given position would be
/// valid, that is, the value is absent from the cell's row, column, and box
/// simultaneously.
pub fn is_valid_placement(grid: &Grid, value: u8, row: usize, col: usize)
        -> bool {
    !(exists_in_row(grid, value, row) ||
        exists_in_col(grid, value, col) ||
        exists_in_box(grid, value, row, col))
}

fn contains_duplicate(values: impl Iterator<Item = u8>) -> bool {
    let mut seen = [false; SIZE + 1];

    for value in values {
        if value == EMPTY {
            continue;
        }

        if seen[value as usize] {
            return true;
        }

        seen[value as usize] = true;
    }

    false
}

/// Indicates whether the grid satisfies the rules, that is, no row, column,
/// or box contains a duplicate non-empty value. Empty cells are permitted,
/// so both a playable puzzle and a complete solution pass this check.
pub fn is_valid(grid: &Grid) -> bool {
    for row in 0..SIZE {
        if contains_duplicate((0..SIZE).map(|col| grid.get(row, col))) {
            return false;
        }
    }

    for col in 0..SIZE {
        if contains_duplicate((0..SIZE).map(|row| grid.get(row, col))) {
            return false;
        }
    }

    for box_row in 0..BOX_SIZE {
        for box_col in 0..BOX_SIZE {
            let (row_lower, row_upper) = box_bounds(box_row * BOX_SIZE);
            let (col_lower, col_upper) = box_bounds(box_col * BOX_SIZE);
            let values = (row_lower..row_upper)
                .flat_map(|row| (col_lower..col_upper)
                    .map(move |col| (row, col)))
                .map(|(row, col)| grid.get(row, col));

            if contains_duplicate(values) {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::SOLVED_GRID_CODE;

    fn example_grid() -> Grid {
        // 5 . . | . 7 . | . . .
        // 6 . . | 1 9 5 | . . .
        // . 9 8 | . . . | . 6 .
        // ------+-------+------
        // 8 . . | . 6 . | . . 3
        // . . . | . . . | . . .
        // . . . | . . . | . . .
        // ...
        Grid::parse("\
            5, , , ,7, , , , ,\
            6, , ,1,9,5, , , ,\
             ,9,8, , , , ,6, ,\
            8, , , ,6, , , ,3,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ").unwrap()
    }

    #[test]
    fn box_bounds_matches_box_partition() {
        assert_eq!((0, 3), box_bounds(0));
        assert_eq!((0, 3), box_bounds(2));
        assert_eq!((3, 6), box_bounds(3));
        assert_eq!((3, 6), box_bounds(5));
        assert_eq!((6, 9), box_bounds(6));
        assert_eq!((6, 9), box_bounds(8));
    }

    #[test]
    fn exists_in_row_finds_value() {
        let grid = example_grid();

        assert!(exists_in_row(&grid, 7, 0));
        assert!(exists_in_row(&grid, 5, 1));
        assert!(!exists_in_row(&grid, 3, 0));
        assert!(!exists_in_row(&grid, 7, 2));
    }

    #[test]
    fn exists_in_col_finds_value() {
        let grid = example_grid();

        assert!(exists_in_col(&grid, 6, 0));
        assert!(exists_in_col(&grid, 9, 4));
        assert!(!exists_in_col(&grid, 5, 1));
        assert!(!exists_in_col(&grid, 9, 8));
    }

    #[test]
    fn exists_in_box_scans_whole_box() {
        let grid = example_grid();

        // (2, 1) holds 9; any cell of the top-left box must see it.
        assert!(exists_in_box(&grid, 9, 0, 0));
        assert!(exists_in_box(&grid, 9, 1, 2));

        // 9 also sits at (1, 4) in the top-center box.
        assert!(exists_in_box(&grid, 9, 0, 5));

        assert!(!exists_in_box(&grid, 9, 3, 0));
        assert!(!exists_in_box(&grid, 2, 0, 0));
    }

    #[test]
    fn valid_placement_in_free_spot() {
        let grid = example_grid();

        assert!(is_valid_placement(&grid, 4, 0, 1));
        assert!(is_valid_placement(&grid, 2, 4, 4));
    }

    #[test]
    fn placement_blocked_by_row() {
        let grid = example_grid();
        assert!(!is_valid_placement(&grid, 7, 0, 8));
    }

    #[test]
    fn placement_blocked_by_col() {
        let grid = example_grid();
        assert!(!is_valid_placement(&grid, 8, 8, 0));
    }

    #[test]
    fn placement_blocked_by_box() {
        let grid = example_grid();
        assert!(!is_valid_placement(&grid, 9, 0, 2));
    }

    #[test]
    fn placement_agrees_with_membership_checks() {
        let grid = example_grid();

        for row in 0..SIZE {
            for col in 0..SIZE {
                for value in 1..=(SIZE as u8) {
                    let expected = !(exists_in_row(&grid, value, row) ||
                        exists_in_col(&grid, value, col) ||
                        exists_in_box(&grid, value, row, col));
                    assert_eq!(expected,
                        is_valid_placement(&grid, value, row, col));
                }
            }
        }
    }

    #[test]
    fn empty_grid_is_valid() {
        assert!(is_valid(&Grid::new()));
    }

    #[test]
    fn solved_grid_is_valid() {
        let grid = Grid::parse(SOLVED_GRID_CODE).unwrap();
        assert!(is_valid(&grid));
    }

    #[test]
    fn duplicate_in_row_is_invalid() {
        let mut grid = Grid::new();
        grid.set(4, 0, 6);
        grid.set(4, 8, 6);

        assert!(!is_valid(&grid));
    }

    #[test]
    fn duplicate_in_col_is_invalid() {
        let mut grid = Grid::new();
        grid.set(0, 3, 2);
        grid.set(8, 3, 2);

        assert!(!is_valid(&grid));
    }

    #[test]
    fn duplicate_in_box_is_invalid() {
        // Different row and column, same box.
        let mut grid = Grid::new();
        grid.set(6, 6, 1);
        grid.set(8, 8, 1);

        assert!(!is_valid(&grid));
    }

    #[test]
    fn partial_grid_without_conflicts_is_valid() {
        assert!(is_valid(&example_grid()));
    }
}
