/*
lib.rs

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

//! Maze drawing game engine.
//!
//! The user draws a path through a randomly generated maze, and the engine
//! compares it against the shortest path computed by Dijkstra's algorithm.
//!
//! * [`generator`] carves a random maze and braids it with extra openings.
//! * [`solver`] computes the shortest path between two open cells and the
//!   order in which the search settled the cells.
//! * [`session`] owns the [`grid::Grid`] and runs the interaction: start
//!   and end selection, user path drawing, solve triggers, per-cell
//!   annotations, and statistics.
//!
//! Rendering, animation pacing, and input wiring belong to the consumer of
//! this crate; the [`cli_options`] module provides a small command-line
//! front end for developers.

pub mod cli_options;
pub mod config;
pub mod generator;
pub mod grid;
pub mod session;
pub mod solver;
pub mod user_path;
