/*
grid.rs

Copyright 2026 The Mazeway developers

This file is part of Mazeway.

Mazeway is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazeway is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazeway. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Maze grid data model.
//!
//! A [`Grid`] is a fixed-size rectangular lattice of [`Cell`] objects,
//! row-major, addressed by row and column. The wall layout is set once by the
//! generator; the selection and solve flags are mutated in place through the
//! update methods. Out-of-range coordinates are silently ignored by the
//! mutators and return `None` from the accessors.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A coordinate in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Row, from the top.
    pub row: usize,

    /// Column, from the left.
    pub col: usize,
}

impl Point {
    /// Create a [`Point`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another point.
    pub fn manhattan(&self, other: &Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Relation of a cell to the optimal path, computed after a solve.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    /// The cell is in neither path, or no solve happened yet.
    #[default]
    None,

    /// The cell is in both the user path and the optimal path.
    Both,

    /// The cell is in the user path only.
    UserOnly,

    /// The cell is in the optimal path only.
    OptimalOnly,
}

/// One lattice position with its wall, selection, and solve flags.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cell {
    /// Row of the cell. Set at creation.
    pub row: usize,

    /// Column of the cell. Set at creation.
    pub col: usize,

    /// Whether the cell is impassable. Set once by the generator.
    pub is_wall: bool,

    /// Whether the cell is the selected starting point.
    pub is_start: bool,

    /// Whether the cell is the selected ending point.
    pub is_end: bool,

    /// Whether the user included the cell in their drawn path.
    pub is_touched: bool,

    /// Whether the last solve settled the cell. Reset on every solve.
    pub is_visited: bool,

    /// Relation of the cell to the optimal path. Reset on every solve.
    pub match_optimal: MatchKind,
}

/// Rectangular lattice of cells.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Grid {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Cells in row-major order.
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from the wall matrix produced by the generator
    /// (`true` means wall).
    pub fn from_walls(walls: &[Vec<bool>]) -> Self {
        let rows: usize = walls.len();
        let cols: usize = walls.first().map_or(0, Vec::len);
        let cells: Vec<Vec<Cell>> = walls
            .iter()
            .enumerate()
            .map(|(row, wall_row)| {
                wall_row
                    .iter()
                    .enumerate()
                    .map(|(col, is_wall)| Cell {
                        row,
                        col,
                        is_wall: *is_wall,
                        is_start: false,
                        is_end: false,
                        is_touched: false,
                        is_visited: false,
                        match_optimal: MatchKind::None,
                    })
                    .collect()
            })
            .collect();
        Self { rows, cols, cells }
    }

    /// Whether the point is inside the grid.
    pub fn contains(&self, point: Point) -> bool {
        point.row < self.rows && point.col < self.cols
    }

    /// Return the cell at the given point, or None for out-of-range points.
    pub fn get(&self, point: Point) -> Option<&Cell> {
        self.cells.get(point.row)?.get(point.col)
    }

    fn get_mut(&mut self, point: Point) -> Option<&mut Cell> {
        self.cells.get_mut(point.row)?.get_mut(point.col)
    }

    /// Whether the point is inside the grid and not a wall.
    pub fn is_open(&self, point: Point) -> bool {
        self.get(point).is_some_and(|c| !c.is_wall)
    }

    /// The in-bounds, non-wall neighbors of the point, in the order right,
    /// down, left, up.
    pub fn open_neighbors(&self, point: Point) -> Vec<Point> {
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

        let mut neighbors: Vec<Point> = Vec::with_capacity(4);
        for (dr, dc) in DIRECTIONS {
            let Some(row) = point.row.checked_add_signed(dr) else {
                continue;
            };
            let Some(col) = point.col.checked_add_signed(dc) else {
                continue;
            };
            let neighbor = Point { row, col };
            if self.is_open(neighbor) {
                neighbors.push(neighbor);
            }
        }
        neighbors
    }

    /// Mark or unmark the cell as the starting point.
    pub fn set_start(&mut self, point: Point, on: bool) {
        if let Some(cell) = self.get_mut(point) {
            cell.is_start = on;
        }
    }

    /// Mark or unmark the cell as the ending point.
    pub fn set_end(&mut self, point: Point, on: bool) {
        if let Some(cell) = self.get_mut(point) {
            cell.is_end = on;
        }
    }

    /// Mark or unmark the cell as part of the user path.
    pub fn set_touched(&mut self, point: Point, on: bool) {
        if let Some(cell) = self.get_mut(point) {
            cell.is_touched = on;
        }
    }

    /// Mark or unmark the cell as settled by the last solve.
    pub fn set_visited(&mut self, point: Point, on: bool) {
        if let Some(cell) = self.get_mut(point) {
            cell.is_visited = on;
        }
    }

    /// Set the relation of the cell to the optimal path.
    pub fn set_match(&mut self, point: Point, kind: MatchKind) {
        if let Some(cell) = self.get_mut(point) {
            cell.match_optimal = kind;
        }
    }

    /// Reset the start, end, touched, visited, and match flags of every
    /// cell. The wall layout is kept.
    pub fn clear_selections(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.is_start = false;
                cell.is_end = false;
                cell.is_touched = false;
                cell.is_visited = false;
                cell.match_optimal = MatchKind::None;
            }
        }
    }

    /// Reset the visited and match flags of every cell. Done before each
    /// solve so that stale marks from a previous solve never persist.
    pub fn clear_solve_marks(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.is_visited = false;
                cell.match_optimal = MatchKind::None;
            }
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", if cell.is_wall { '#' } else { ' ' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn open_walls(rows: usize, cols: usize) -> Vec<Vec<bool>> {
        let mut walls = vec![vec![false; cols]; rows];
        for (r, row) in walls.iter_mut().enumerate() {
            for (c, wall) in row.iter_mut().enumerate() {
                *wall = r == 0 || c == 0 || r == rows - 1 || c == cols - 1;
            }
        }
        walls
    }

    #[test]
    fn test_from_walls_dimensions() {
        let grid = Grid::from_walls(&open_walls(5, 7));
        assert_eq!(grid.rows, 5);
        assert_eq!(grid.cols, 7);
        assert!(grid.get(Point::new(0, 0)).is_some_and(|c| c.is_wall));
        assert!(grid.get(Point::new(2, 3)).is_some_and(|c| !c.is_wall));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::from_walls(&open_walls(5, 5));
        assert!(grid.get(Point::new(5, 0)).is_none());
        assert!(grid.get(Point::new(0, 5)).is_none());
        assert!(!grid.is_open(Point::new(9, 9)));

        // Out-of-range mutations are no-ops
        grid.set_touched(Point::new(9, 9), true);
        grid.set_match(Point::new(9, 9), MatchKind::Both);
    }

    #[test]
    fn test_targeted_mutation() {
        let mut grid = Grid::from_walls(&open_walls(5, 5));
        grid.set_start(Point::new(1, 1), true);
        grid.set_touched(Point::new(2, 1), true);

        assert!(grid.get(Point::new(1, 1)).is_some_and(|c| c.is_start));
        assert!(grid.get(Point::new(2, 1)).is_some_and(|c| c.is_touched));
        // No other cell was changed
        assert!(grid.get(Point::new(1, 2)).is_some_and(|c| !c.is_start && !c.is_touched));
    }

    #[test]
    fn test_open_neighbors_skips_walls_and_bounds() {
        let grid = Grid::from_walls(&open_walls(5, 5));
        // Corner of the interior: two neighbors are boundary walls
        let neighbors = grid.open_neighbors(Point::new(1, 1));
        assert_eq!(neighbors, vec![Point::new(1, 2), Point::new(2, 1)]);
    }

    #[test]
    fn test_clear_selections_keeps_walls() {
        let mut grid = Grid::from_walls(&open_walls(5, 5));
        grid.set_start(Point::new(1, 1), true);
        grid.set_end(Point::new(3, 3), true);
        grid.set_touched(Point::new(2, 1), true);
        grid.set_visited(Point::new(2, 2), true);
        grid.set_match(Point::new(2, 2), MatchKind::OptimalOnly);

        grid.clear_selections();

        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let cell = grid.get(Point::new(row, col)).unwrap();
                assert!(!cell.is_start && !cell.is_end);
                assert!(!cell.is_touched && !cell.is_visited);
                assert_eq!(cell.match_optimal, MatchKind::None);
            }
        }
        assert!(grid.get(Point::new(0, 0)).is_some_and(|c| c.is_wall));
    }

    #[test]
    fn test_clear_solve_marks_keeps_user_state() {
        let mut grid = Grid::from_walls(&open_walls(5, 5));
        grid.set_start(Point::new(1, 1), true);
        grid.set_touched(Point::new(2, 1), true);
        grid.set_visited(Point::new(2, 2), true);
        grid.set_match(Point::new(2, 1), MatchKind::UserOnly);

        grid.clear_solve_marks();

        assert!(grid.get(Point::new(1, 1)).is_some_and(|c| c.is_start));
        assert!(grid.get(Point::new(2, 1)).is_some_and(|c| c.is_touched));
        assert!(grid.get(Point::new(2, 2)).is_some_and(|c| !c.is_visited));
        assert_eq!(
            grid.get(Point::new(2, 1)).unwrap().match_optimal,
            MatchKind::None
        );
    }
}
