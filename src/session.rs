/*
session.rs

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

//! Manage the status of a drawing session in progress.
//!
//! The session owns the grid and drives the game through three phases:
//! the user first clicks a starting cell, then an ending cell, and can then
//! draw a path by clicking or dragging over open cells. "Check path" and
//! "show optimal path" run the solver and annotate every cell with its
//! relation to the optimal path.
//!
//! The rendering layer is an external consumer: it reads the grid snapshot,
//! animates the two sequences of the last [`SolveReport`], and brackets the
//! animation with [`Session::begin_presentation`] and
//! [`Session::end_presentation`] so that the session rejects mutations while
//! the playback is in flight.
//!
//! All rejected interactions are silent no-ops: the session never leaves the
//! grid in an invalid state, and nothing here can fail.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::debug;
use serde::Serialize;

use crate::config::MazeConfig;
use crate::generator;
use crate::grid::{Grid, MatchKind, Point};
use crate::solver;
use crate::user_path::UserPath;

/// Selection phase of the session.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user to pick the starting cell.
    SelectingStart,

    /// Waiting for the user to pick the ending cell.
    SelectingEnd,

    /// Start and end are fixed; the user can draw their path and solve.
    Ready,
}

/// Summary numbers derived from a solve.
#[derive(Serialize, Debug, Clone)]
pub struct SolveStats {
    /// Number of cells in the user path.
    pub user_steps: usize,

    /// Number of steps in the optimal path, excluding the start and end
    /// cells. Zero when no path exists.
    pub optimal_steps: usize,

    /// Number of cells the search settled.
    pub nodes_visited: usize,

    /// Wall-clock duration of the solver call.
    pub duration: Duration,
}

/// Everything the rendering layer needs from one solve.
#[derive(Serialize, Debug, Clone)]
pub struct SolveReport {
    /// Cells in the order the search settled them, for trace playback.
    pub visited_order: Vec<Point>,

    /// The optimal path from start to end inclusive, or empty when the end
    /// is unreachable.
    pub path: Vec<Point>,

    /// Derived statistics.
    pub stats: SolveStats,
}

/// Manage the status of the drawing session in progress.
#[derive(Debug)]
pub struct Session {
    /// Grid and generation tunables.
    config: MazeConfig,

    /// The current maze. Replaced wholesale on [`Session::new_maze`].
    grid: Grid,

    /// Current selection phase.
    phase: Phase,

    /// Selected starting cell.
    start: Option<Point>,

    /// Selected ending cell.
    end: Option<Point>,

    /// The path the user drew so far.
    user_path: UserPath,

    /// Whether the pointer is held down, for drag drawing.
    pointer_held: bool,

    /// Whether a solve presentation is being animated. While set, the
    /// session rejects solve triggers and grid mutations.
    busy: bool,

    /// Output of the last solve, if any.
    last_report: Option<SolveReport>,
}

impl Session {
    /// Create a session with a freshly generated maze.
    pub fn new(config: MazeConfig) -> Self {
        let grid = Grid::from_walls(&generator::generate_default(&config));
        Self::with_grid(config, grid)
    }

    /// Create a session over an existing grid, for deterministic grids in
    /// tests or replays.
    pub fn with_grid(config: MazeConfig, grid: Grid) -> Self {
        Self {
            config,
            grid,
            phase: Phase::SelectingStart,
            start: None,
            end: None,
            user_path: UserPath::new(),
            pointer_held: false,
            busy: false,
            last_report: None,
        }
    }

    /// The current grid snapshot, for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current selection phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The selected starting cell.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The selected ending cell.
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// The path the user drew so far.
    pub fn user_path(&self) -> &UserPath {
        &self.user_path
    }

    /// Output of the last solve, if any.
    pub fn last_report(&self) -> Option<&SolveReport> {
        self.last_report.as_ref()
    }

    /// Whether a solve presentation is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Discard the maze and generate a fresh one. All selections are gone
    /// with the old grid and the phase restarts at
    /// [`Phase::SelectingStart`].
    pub fn new_maze(&mut self) {
        if self.busy {
            return;
        }
        self.grid = Grid::from_walls(&generator::generate_default(&self.config));
        self.reset_selections();
        debug!("New {}x{} maze", self.config.rows, self.config.cols);
    }

    /// Keep the maze but reset the start, the end, the user path, and all
    /// per-cell transient flags.
    pub fn clear_selections(&mut self) {
        if self.busy {
            return;
        }
        self.grid.clear_selections();
        self.reset_selections();
        debug!("Selections cleared");
    }

    fn reset_selections(&mut self) {
        self.phase = Phase::SelectingStart;
        self.start = None;
        self.end = None;
        self.user_path.clear();
        self.pointer_held = false;
        self.last_report = None;
    }

    /// The pointer was pressed on a cell.
    pub fn pointer_down(&mut self, point: Point) {
        if self.busy {
            return;
        }
        self.pointer_held = true;
        self.select(point);
    }

    /// The pointer entered a cell. Extends the user path while the pointer
    /// is held down (drag drawing).
    pub fn pointer_enter(&mut self, point: Point) {
        if self.busy || !self.pointer_held {
            return;
        }
        if self.phase == Phase::Ready {
            self.try_extend(point);
        }
    }

    /// The pointer was released.
    pub fn pointer_up(&mut self) {
        self.pointer_held = false;
    }

    /// A cell was clicked.
    pub fn click(&mut self, point: Point) {
        if self.busy {
            return;
        }
        self.select(point);
    }

    fn select(&mut self, point: Point) {
        match self.phase {
            Phase::SelectingStart => {
                if self.grid.is_open(point) {
                    self.grid.set_start(point, true);
                    self.start = Some(point);
                    self.phase = Phase::SelectingEnd;
                    debug!("Start selected at {point:?}");
                }
            }
            Phase::SelectingEnd => {
                if self.grid.is_open(point) && self.start != Some(point) {
                    self.grid.set_end(point, true);
                    self.end = Some(point);
                    self.phase = Phase::Ready;
                    debug!("End selected at {point:?}");
                }
            }
            Phase::Ready => self.try_extend(point),
        }
    }

    /// Accept the cell into the user path if it is open, not an endpoint,
    /// not already drawn, and one grid step away from the last accepted
    /// cell (or from the start when the path is empty). Anything else is a
    /// silent no-op.
    fn try_extend(&mut self, point: Point) {
        let Some(start) = self.start else {
            return;
        };
        if !self.grid.is_open(point)
            || self.start == Some(point)
            || self.end == Some(point)
            || self.user_path.contains(point)
        {
            return;
        }
        let anchor: Point = self.user_path.last().unwrap_or(start);
        if anchor.manhattan(&point) != 1 {
            return;
        }
        self.grid.set_touched(point, true);
        self.user_path.push(point);
    }

    /// Solve and annotate every cell by comparing the user path with the
    /// optimal path. No-op unless both endpoints are selected.
    pub fn check_path(&mut self) -> Option<&SolveReport> {
        self.run_solve(true)
    }

    /// Solve and annotate only the optimal path cells. No-op unless both
    /// endpoints are selected.
    pub fn show_optimal_path(&mut self) -> Option<&SolveReport> {
        self.run_solve(false)
    }

    fn run_solve(&mut self, compare: bool) -> Option<&SolveReport> {
        if self.busy {
            return None;
        }
        let start: Point = self.start?;
        let end: Point = self.end?;

        // Drop the marks of any previous solve before computing new ones
        self.grid.clear_solve_marks();

        let clock: Instant = Instant::now();
        let result = solver::solve(&self.grid, start, end);
        let duration: Duration = clock.elapsed();

        for point in &result.visited_order {
            self.grid.set_visited(*point, true);
        }

        let on_path: HashSet<Point> = result.path.iter().copied().collect();
        for row in 0..self.grid.rows {
            for col in 0..self.grid.cols {
                let point = Point::new(row, col);
                let touched: bool = self.grid.get(point).is_some_and(|c| c.is_touched);
                let optimal: bool = on_path.contains(&point);
                let kind: MatchKind = if compare {
                    match (touched, optimal) {
                        (true, true) => MatchKind::Both,
                        (true, false) => MatchKind::UserOnly,
                        (false, true) => MatchKind::OptimalOnly,
                        (false, false) => MatchKind::None,
                    }
                } else if optimal {
                    MatchKind::OptimalOnly
                } else {
                    MatchKind::None
                };
                self.grid.set_match(point, kind);
            }
        }

        let stats = SolveStats {
            user_steps: self.user_path.len(),
            optimal_steps: result.path.len().saturating_sub(2),
            nodes_visited: result.visited_order.len(),
            duration,
        };
        debug!(
            "Solve done: {} user steps, {} optimal steps, {} nodes visited in {:?}",
            stats.user_steps, stats.optimal_steps, stats.nodes_visited, stats.duration
        );

        self.last_report = Some(SolveReport {
            visited_order: result.visited_order,
            path: result.path,
            stats,
        });
        self.last_report.as_ref()
    }

    /// Mark the beginning of a solve presentation. While the presentation
    /// is in flight, the session rejects solve triggers and grid mutations.
    /// Return `false` if a presentation is already in flight.
    pub fn begin_presentation(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Mark the end of the solve presentation.
    pub fn end_presentation(&mut self) {
        self.busy = false;
    }
}
