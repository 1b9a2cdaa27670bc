/*
config.rs

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

//! Maze configuration and default settings.
//!
//! The grid dimensions and the braiding trial count are passed explicitly to
//! the generator and to the session, so that tests can use small
//! deterministic grids. Animation delays are owned by the rendering layer
//! and are not part of this configuration.

use serde::{Deserialize, Serialize};

use crate::grid::Point;

/// Default number of rows. Odd values let the carving reach every interior
/// cell of the sub-lattice.
pub const DEFAULT_ROWS: usize = 21;

/// Default number of columns.
pub const DEFAULT_COLS: usize = 31;

/// Default number of braiding trials (random wall removals after carving).
pub const DEFAULT_BRAID_TRIALS: usize = 30;

/// Notice printed by the `--long-version` command-line option.
pub const COPYRIGHT_NOTICE: &str = "Copyright 2026 The Mazeway developers

License GPL-3.0-or-later: GNU GPL version 3 or later
<https://www.gnu.org/licenses/gpl-3.0.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Tunables for maze generation and the game session.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct MazeConfig {
    /// Number of rows in the grid.
    pub rows: usize,

    /// Number of columns in the grid.
    pub cols: usize,

    /// Number of random wall-removal trials performed after carving.
    pub braid_trials: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            braid_trials: DEFAULT_BRAID_TRIALS,
        }
    }
}

impl MazeConfig {
    /// Designated starting cell that the generator always opens.
    pub fn start(&self) -> Point {
        Point { row: 1, col: 1 }
    }

    /// Designated ending cell that the generator always opens.
    pub fn end(&self) -> Point {
        Point {
            row: self.rows.saturating_sub(2),
            col: self.cols.saturating_sub(2),
        }
    }
}
