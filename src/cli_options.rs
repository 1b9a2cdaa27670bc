/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command-line tool generates random mazes, solves them between the
//! designated corner cells, and prints them. It is intended for tuning the
//! generator (dimensions and braiding trials) and for inspecting solver
//! behavior without a rendering layer.
//!
//! # Examples
//!
//! Generate and print one maze with its optimal path:
//!
//! ```text
//! $ mazeway
//! ###############################
//! #S*    #       #     #       #
//! #######*#######################
//! ...
//! user steps = 0  optimal steps = 72  nodes visited = 214
//! ```
//!
//! Generate ten reproducible mazes and print aggregate statistics:
//!
//! ```text
//! $ mazeway --count 10 --seed 42 --summary
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::time::Duration;

use crate::config::{self, COPYRIGHT_NOTICE, MazeConfig};
use crate::generator;
use crate::grid::{Grid, Point};
use crate::session::{Session, SolveReport};

/// Generate random mazes and solve them with the shortest-path engine.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of mazes to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Number of rows (odd values let carving reach every interior cell)
    #[arg(short, long, default_value_t = config::DEFAULT_ROWS)]
    rows: usize,

    /// Number of columns (odd values let carving reach every interior cell)
    #[arg(long, default_value_t = config::DEFAULT_COLS)]
    cols: usize,

    /// Number of braiding trials (random wall removals after carving)
    #[arg(short, long, default_value_t = config::DEFAULT_BRAID_TRIALS)]
    braid: usize,

    /// Seed for the random source, for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Print the grid and the solve report as JSON instead of ASCII art
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after solving the mazes
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if args.rows < 5 || args.cols < 5 {
        eprintln!("The maze needs at least 5 rows and 5 columns.");
        return 1;
    }

    let config = MazeConfig {
        rows: args.rows,
        cols: args.cols,
        braid_trials: args.braid,
    };
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut total: Duration = Duration::ZERO;
    let mut max: Duration = Duration::ZERO;
    let mut visited: usize = 0;
    let mut unsolved: usize = 0;

    for i in 0..args.count {
        debug!("Maze {i}");

        let grid = Grid::from_walls(&generator::generate(&config, &mut rng));
        let mut session = Session::with_grid(config, grid);
        session.click(config.start());
        session.click(config.end());

        let Some(report) = session.show_optimal_path().cloned() else {
            // The generator always opens the designated endpoints, so the
            // solve trigger cannot be refused here.
            eprintln!("Bug: solve refused for maze {i}");
            return 1;
        };

        total += report.stats.duration;
        if report.stats.duration > max {
            max = report.stats.duration;
        }
        visited += report.stats.nodes_visited;
        if report.path.is_empty() {
            unsolved += 1;
        }

        if args.json {
            match serde_json::to_string_pretty(&serde_json::json!({
                "grid": session.grid(),
                "report": report,
            })) {
                Ok(out) => println!("{out}"),
                Err(e) => {
                    eprintln!("Cannot serialize the solve report: {e}");
                    return 1;
                }
            }
        } else {
            print_maze(session.grid(), &report);
        }
    }

    if args.summary {
        println!(
            "
       total time = {:?}
     average time = {:?}
         max time = {:?}
  average visited = {}
 unsolvable mazes = {}",
            total,
            total / args.count.max(1) as u32,
            max,
            visited / args.count.max(1),
            unsolved
        );
    }
    0
}

/// Print the maze as ASCII art, with the optimal path overlaid.
fn print_maze(grid: &Grid, report: &SolveReport) {
    for row in 0..grid.rows {
        let mut line: String = String::with_capacity(grid.cols);
        for col in 0..grid.cols {
            let point = Point::new(row, col);
            let Some(cell) = grid.get(point) else {
                continue;
            };
            line.push(if cell.is_start {
                'S'
            } else if cell.is_end {
                'E'
            } else if cell.is_wall {
                '#'
            } else if report.path.contains(&point) {
                '*'
            } else {
                ' '
            });
        }
        println!("{line}");
    }

    if report.path.is_empty() {
        println!("no path between the designated endpoints");
    }
    println!(
        "user steps = {}  optimal steps = {}  nodes visited = {}  solve time = {:?}
",
        report.stats.user_steps,
        report.stats.optimal_steps,
        report.stats.nodes_visited,
        report.stats.duration
    );
}
