/*
user_path.rs

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

//! The path that the user draws through the maze.
//!
//! The module stores the ordered sequence of accepted cells. The acceptance
//! rule itself (adjacency, no revisits) lives in [`crate::session`], which
//! is the only writer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::grid::Point;

/// Ordered, non-self-intersecting sequence of cells.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct UserPath {
    /// Accepted cells, in drawing order.
    path: Vec<Point>,

    /// Membership index. Instead of looking for the cell in the
    /// [`UserPath::path`] vector, this [`HashSet`] speeds up the lookup.
    members: HashSet<Point>,
}

impl UserPath {
    /// Create a [`UserPath`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.members.clear();
    }

    /// Append a cell to the path.
    pub fn push(&mut self, point: Point) {
        self.path.push(point);
        self.members.insert(point);
    }

    /// Number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is already in the path.
    pub fn contains(&self, point: Point) -> bool {
        self.members.contains(&point)
    }

    /// Return the most recently accepted cell.
    pub fn last(&self) -> Option<Point> {
        self.path.last().copied()
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<Point> {
        &self.path
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_push_and_lookup() {
        let mut path = UserPath::new();
        assert!(path.is_empty());
        assert_eq!(path.last(), None);

        path.push(Point::new(1, 2));
        path.push(Point::new(1, 3));

        assert_eq!(path.len(), 2);
        assert!(path.contains(Point::new(1, 2)));
        assert!(!path.contains(Point::new(2, 2)));
        assert_eq!(path.last(), Some(Point::new(1, 3)));
        assert_eq!(path.get(), &vec![Point::new(1, 2), Point::new(1, 3)]);
    }

    #[test]
    fn test_clear() {
        let mut path = UserPath::new();
        path.push(Point::new(1, 2));
        path.clear();
        assert!(path.is_empty());
        assert!(!path.contains(Point::new(1, 2)));
    }
}
