/*
solver.rs

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

//! Shortest path between two open cells.
//!
//! The solver runs Dijkstra's algorithm over the uniform-cost grid graph:
//! every open cell is a node, and the four axis-aligned moves all cost one.
//! Besides the reconstructed path, the solver returns the cells in the order
//! their distance was finalized, so that the rendering layer can animate the
//! search.
//!
//! Unreachability is not an error: the path simply comes back empty.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Point};

const INFINITY: u32 = u32::MAX;

/// Frontier entry. The insertion sequence number makes equal-distance
/// entries pop in insertion order, so the chosen path is deterministic.
#[derive(Debug)]
struct ToVisit {
    dist: u32,
    seq: u64,
    point: Point,
    from: Option<Point>,
}

impl Ord for ToVisit {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the BinaryHeap behaves as a min-heap
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for ToVisit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ToVisit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ToVisit {}

/// Output of a solve.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SolveResult {
    /// Cells in the order the search settled them, for trace playback.
    pub visited_order: Vec<Point>,

    /// Cells from start to end inclusive along one shortest route, or
    /// empty when the end is unreachable.
    pub path: Vec<Point>,
}

/// Compute the shortest path from `start` to `end` over the open cells of
/// the grid.
///
/// The caller is expected to pass open, distinct endpoints. Wall or
/// out-of-range endpoints produce an empty result rather than a panic.
pub fn solve(grid: &Grid, start: Point, end: Point) -> SolveResult {
    if !grid.is_open(start) || !grid.is_open(end) {
        return SolveResult::default();
    }

    let mut dist: Vec<Vec<u32>> = vec![vec![INFINITY; grid.cols]; grid.rows];
    let mut prev: Vec<Vec<Option<Point>>> = vec![vec![None; grid.cols]; grid.rows];
    let mut settled: Vec<Vec<bool>> = vec![vec![false; grid.cols]; grid.rows];
    let mut visited_order: Vec<Point> = Vec::new();

    let mut seq: u64 = 0;
    let mut frontier: BinaryHeap<ToVisit> = BinaryHeap::new();
    dist[start.row][start.col] = 0;
    frontier.push(ToVisit {
        dist: 0,
        seq,
        point: start,
        from: None,
    });

    while let Some(visit) = frontier.pop() {
        let point: Point = visit.point;

        // Stale entry: a shorter route already settled this cell
        if settled[point.row][point.col] {
            continue;
        }
        settled[point.row][point.col] = true;
        prev[point.row][point.col] = visit.from;
        visited_order.push(point);

        if point == end {
            break;
        }

        for neighbor in grid.open_neighbors(point) {
            if settled[neighbor.row][neighbor.col] {
                continue;
            }
            let next_dist: u32 = visit.dist + 1;
            if next_dist < dist[neighbor.row][neighbor.col] {
                dist[neighbor.row][neighbor.col] = next_dist;
                seq += 1;
                frontier.push(ToVisit {
                    dist: next_dist,
                    seq,
                    point: neighbor,
                    from: Some(point),
                });
            }
        }
    }

    let mut path: Vec<Point> = Vec::new();
    if settled[end.row][end.col] {
        let mut current: Option<Point> = Some(end);
        while let Some(point) = current {
            path.push(point);
            current = prev[point.row][point.col];
        }
        path.reverse();
    }

    debug!(
        "Solve settled {} cells, path length {}",
        visited_order.len(),
        path.len()
    );

    SolveResult {
        visited_order,
        path,
    }
}

#[cfg(test)]
mod test {
    use std::collections::VecDeque;

    use super::*;

    // '#' is wall, anything else is open
    fn grid_from_art(art: &[&str]) -> Grid {
        let walls: Vec<Vec<bool>> = art
            .iter()
            .map(|row| row.chars().map(|c| c == '#').collect())
            .collect();
        Grid::from_walls(&walls)
    }

    fn open_grid(rows: usize, cols: usize) -> Grid {
        let mut walls = vec![vec![false; cols]; rows];
        for (r, row) in walls.iter_mut().enumerate() {
            for (c, wall) in row.iter_mut().enumerate() {
                *wall = r == 0 || c == 0 || r == rows - 1 || c == cols - 1;
            }
        }
        Grid::from_walls(&walls)
    }

    // Reference distances, computed independently of the solver
    fn bfs_distances(grid: &Grid, start: Point) -> Vec<Vec<u32>> {
        let mut dist = vec![vec![INFINITY; grid.cols]; grid.rows];
        dist[start.row][start.col] = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(point) = queue.pop_front() {
            for neighbor in grid.open_neighbors(point) {
                if dist[neighbor.row][neighbor.col] == INFINITY {
                    dist[neighbor.row][neighbor.col] = dist[point.row][point.col] + 1;
                    queue.push_back(neighbor);
                }
            }
        }
        dist
    }

    #[test]
    fn test_corridor_path() {
        let grid = grid_from_art(&[
            "#######",
            "#     #",
            "##### #",
            "#######",
        ]);
        let start = Point::new(1, 1);
        let end = Point::new(2, 5);
        let result = solve(&grid, start, end);

        // One corridor, so the path length is the Manhattan distance
        // along it plus the starting cell
        assert_eq!(result.path.len(), 6);
        assert_eq!(result.path.first(), Some(&start));
        assert_eq!(result.path.last(), Some(&end));
        for pair in result.path.windows(2) {
            assert_eq!(pair[0].manhattan(&pair[1]), 1);
        }
    }

    #[test]
    fn test_no_route() {
        let grid = grid_from_art(&[
            "#######",
            "# # # #",
            "#######",
        ]);
        let result = solve(&grid, Point::new(1, 1), Point::new(1, 5));
        assert!(result.path.is_empty());
        // Only the enclosed start is reachable
        assert_eq!(result.visited_order, vec![Point::new(1, 1)]);
    }

    #[test]
    fn test_path_avoids_walls() {
        let grid = grid_from_art(&[
            "#########",
            "#   #   #",
            "# # # # #",
            "# #   # #",
            "#########",
        ]);
        let result = solve(&grid, Point::new(1, 1), Point::new(1, 7));
        assert!(!result.path.is_empty());
        for point in &result.path {
            assert!(grid.is_open(*point));
        }
        for point in &result.visited_order {
            assert!(grid.is_open(*point));
        }
    }

    #[test]
    fn test_settle_order_is_monotonic() {
        let grid = grid_from_art(&[
            "###########",
            "#     #   #",
            "# ### # # #",
            "#   #   # #",
            "### ##### #",
            "#         #",
            "###########",
        ]);
        let start = Point::new(1, 1);
        let end = Point::new(5, 9);
        let result = solve(&grid, start, end);
        let dist = bfs_distances(&grid, start);

        let mut last: u32 = 0;
        for point in &result.visited_order {
            let d = dist[point.row][point.col];
            assert_ne!(d, INFINITY);
            assert!(d >= last, "settle order went backwards at {point:?}");
            last = d;
        }
        // The shortest path has the BFS distance of the end, inclusive
        assert_eq!(result.path.len() as u32, dist[end.row][end.col] + 1);
    }

    #[test]
    fn test_open_grid_scenario() {
        // 5x5 grid, walls only on the border, start (1,1), end (3,3)
        let grid = open_grid(5, 5);
        let result = solve(&grid, Point::new(1, 1), Point::new(3, 3));

        assert_eq!(result.path.len(), 5);
        assert!(result.visited_order.len() <= 9);
        for pair in result.path.windows(2) {
            assert_eq!(pair[0].manhattan(&pair[1]), 1);
        }
    }

    #[test]
    fn test_early_exit_at_end() {
        let grid = open_grid(7, 7);
        let start = Point::new(1, 1);
        let end = Point::new(1, 2);
        let result = solve(&grid, start, end);
        assert_eq!(result.path, vec![start, end]);
        // The end settles second, so the search stops right away
        assert_eq!(result.visited_order.len(), 2);
    }

    #[test]
    fn test_wall_endpoint_is_rejected() {
        let grid = open_grid(5, 5);
        let result = solve(&grid, Point::new(0, 0), Point::new(3, 3));
        assert!(result.path.is_empty());
        assert!(result.visited_order.is_empty());

        let result = solve(&grid, Point::new(1, 1), Point::new(9, 9));
        assert!(result.path.is_empty());
    }
}
