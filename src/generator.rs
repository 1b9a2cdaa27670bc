/*
generator.rs

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

//! Generate random mazes.
//!
//! The generator produces a wall matrix (`true` means wall) in three steps:
//!
//! * Randomized depth-first carving on the sub-lattice of odd coordinates,
//!   starting from the designated starting cell. The carving uses an
//!   explicit stack so that large grids cannot exhaust the call stack.
//!
//! * A braiding pass that picks random interior cells a fixed number of
//!   times and opens the ones that are still wall. This removes some
//!   dead-ends and introduces cycles. It is a heuristic: it does not
//!   guarantee that every open cell is reachable, so the solver must
//!   handle the "no path" case.
//!
//! * The designated starting and ending cells are force-opened.
//!
//! Generation is deterministic for a given random source. Use a seeded
//! [`rand::rngs::StdRng`] to reproduce a maze.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::MazeConfig;
use crate::grid::Point;

/// Carving moves two cells at a time so that the wall between two corridors
/// stays exactly one cell thick.
const CARVE_DIRECTIONS: [(isize, isize); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];

/// Carving frame: a corridor cell and the shuffled directions left to try.
struct Frame {
    cell: Point,
    directions: [(isize, isize); 4],
    next: usize,
}

/// Generate a wall matrix for the given configuration.
///
/// Grids smaller than 3x3 have no interior and come back all wall.
pub fn generate<R: Rng + ?Sized>(config: &MazeConfig, rng: &mut R) -> Vec<Vec<bool>> {
    let mut walls: Vec<Vec<bool>> = vec![vec![true; config.cols]; config.rows];
    if config.rows < 3 || config.cols < 3 {
        return walls;
    }

    carve(&mut walls, config, rng);
    braid(&mut walls, config, rng);

    // The designated endpoints are always open, whatever carving and
    // braiding did to them.
    let start: Point = config.start();
    let end: Point = config.end();
    walls[start.row][start.col] = false;
    walls[end.row][end.col] = false;

    walls
}

/// Generate a wall matrix with the thread-local random source.
pub fn generate_default(config: &MazeConfig) -> Vec<Vec<bool>> {
    generate(config, &mut rand::rng())
}

/// Whether the cell is strictly interior and still wall, so that carving may
/// proceed into it.
fn carvable(walls: &[Vec<bool>], rows: usize, cols: usize, row: isize, col: isize) -> bool {
    row > 0
        && col > 0
        && row < rows as isize - 1
        && col < cols as isize - 1
        && walls[row as usize][col as usize]
}

/// Depth-first carving with an explicit stack.
///
/// Each frame keeps its own shuffled direction order, and carvability is
/// re-checked when a direction is tried, so the exploration order is the
/// same as the recursive formulation for a given random source.
fn carve<R: Rng + ?Sized>(walls: &mut [Vec<bool>], config: &MazeConfig, rng: &mut R) {
    let start: Point = config.start();
    walls[start.row][start.col] = false;

    let mut carved: usize = 1;
    let mut stack: Vec<Frame> = vec![new_frame(start, rng)];

    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let cell: Point = frame.cell;
        let mut advance: Option<Point> = None;

        while frame.next < frame.directions.len() {
            let (dr, dc) = frame.directions[frame.next];
            frame.next += 1;

            let nr: isize = cell.row as isize + dr;
            let nc: isize = cell.col as isize + dc;
            if carvable(walls, config.rows, config.cols, nr, nc) {
                let neighbor = Point::new(nr as usize, nc as usize);
                let midpoint = Point::new(
                    (cell.row + neighbor.row) / 2,
                    (cell.col + neighbor.col) / 2,
                );
                walls[neighbor.row][neighbor.col] = false;
                walls[midpoint.row][midpoint.col] = false;
                carved += 2;
                advance = Some(neighbor);
                break;
            }
        }

        match advance {
            Some(neighbor) => stack.push(new_frame(neighbor, rng)),
            None => {
                stack.pop();
            }
        }
    }

    debug!("Carved {carved} cells");
}

fn new_frame<R: Rng + ?Sized>(cell: Point, rng: &mut R) -> Frame {
    let mut directions = CARVE_DIRECTIONS;
    directions.shuffle(rng);
    Frame {
        cell,
        directions,
        next: 0,
    }
}

/// Open random interior walls to introduce cycles.
fn braid<R: Rng + ?Sized>(walls: &mut [Vec<bool>], config: &MazeConfig, rng: &mut R) {
    let mut opened: usize = 0;
    for _ in 0..config.braid_trials {
        let row: usize = rng.random_range(1..config.rows - 1);
        let col: usize = rng.random_range(1..config.cols - 1);
        if walls[row][col] {
            walls[row][col] = false;
            opened += 1;
        }
    }
    debug!("Braiding opened {opened} walls");
}
