#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find every cheapest Path through a Grid when turning costs extra.
//!
//! ## Introduction
//! Regular Pathfinding treats every Tile of a Grid as a Node. That stops working as soon as the
//! cost of a step depends on where the Agent is *facing*: walking forward is cheap, but turning
//! around costs a lot more. The same Tile can then be reached cheaply facing one way and
//! expensively facing another.
//!
//! This crate turns every open Tile into four Nodes, one per [`Direction`], and connects them with
//! *move* Edges (one step forward, Cost `1` by default) and *rotate* Edges (Cost `1000` per quarter
//! turn by default). [Dijkstra's Algorithm](graph::dijkstra_search) then computes the minimal Cost
//! of every Node, remembering **every** predecessor that reaches a Node at that Cost instead of
//! just one. Walking those predecessor sets backwards from the end yields
//! [all of the cheapest Paths](path::enumerate_paths), not just one of them.
//!
//! ## Examples
//! Solving a Grid given as text:
//! ```
//! use directional_pathfinding::prelude::*;
//!
//! // # = wall, . = open, S = start, E = end
//! let maze = "\
//! ################
//! ##.......#....E#
//! ##.#.###.#.###.#
//! ##.....#.#...#.#
//! ##.###.#####.#.#
//! ##.#.#.......#.#
//! ##.#.#####.###.#
//! ##...........#.#
//! ####.#.#####.#.#
//! ##...#.....#.#.#
//! ##.#.#.###.#.#.#
//! ##.....#...#.#.#
//! ##.###.#.#.#.#.#
//! ##S..#.....#...#
//! ################";
//!
//! // the Agent starts facing East
//! let best = solve(maze, &SolverConfig::default())
//!     .expect("the maze is well-formed")
//!     .expect("the end is reachable");
//!
//! assert_eq!(best.cost(), 7036);
//! // the number of Tiles that are part of at least one of the cheapest Paths
//! assert_eq!(best.tiles().len(), 45);
//! ```
//!
//! A Grid that has no way from the start to the end is not an Error:
//! ```
//! # use directional_pathfinding::prelude::*;
//! let grid: Grid = "S.#.E".parse().unwrap();
//! let best = find_best_paths(&grid, &SolverConfig::default()).unwrap();
//! assert!(best.is_none());
//! ```
//!
//! But a malformed one is:
//! ```
//! # use directional_pathfinding::prelude::*;
//! assert_eq!(solve("S..\n.E", &Default::default()), Err(Error::RaggedRow { row: 1, expected: 3, found: 2 }));
//! assert_eq!(solve("S..", &Default::default()), Err(Error::MissingEnd));
//! ```
//!
//! ### Configuration
//! The costs, the start Direction and some details of the Graph can be changed using a
//! [`SolverConfig`]:
//! ```
//! # use directional_pathfinding::prelude::*;
//! let config = SolverConfig {
//!     start_facing: Direction::North,
//!     turn_cost: 10,
//!     ..SolverConfig::QUARTER_TURNS
//! };
//! let best = solve("E..S", &config).unwrap().unwrap();
//! // turn left once, then walk 3 Tiles
//! assert_eq!(best.cost(), 13);
//! ```
//!
//! ### Step by step
//! [`find_best_paths`] is a shorthand for building the [`StateGraph`](graph::StateGraph),
//! searching it and collecting the Paths. The steps can also be called separately, for example
//! to inspect the Cost of every Node:
//! ```
//! use directional_pathfinding::{graph::*, path::enumerate_paths, Direction, Grid, SolverConfig};
//!
//! let grid: Grid = "S..\n...\n..E".parse().unwrap();
//! let config = SolverConfig::default();
//!
//! let graph = StateGraph::build(&grid, &config);
//! let tree = dijkstra_search(&graph, config.exhaustive);
//!
//! let corner = node_id(grid.index_of((0, 2)), Direction::South);
//! assert_eq!(tree.cost(corner), Some(1002));
//!
//! let best = enumerate_paths(&graph, &tree).unwrap();
//! assert_eq!(best.cost(), 1004);
//! ```

#[macro_use]
mod utils;

pub mod dir;
pub use dir::{Direction, Move};

mod error;
pub use error::Error;

mod config;
pub use config::SolverConfig;

pub mod grid;
pub use grid::Grid;

pub mod graph;

pub mod path;
pub use path::{BestPaths, Cost, Path};

/// A shorthand for Points on the grid, as `(row, column)`
pub type Point = (usize, usize);

/// A [`HashSet`](hashbrown::HashSet) of Points on the grid
pub type PointSet = hashbrown::HashSet<Point>;

/// The most commonly used items
pub mod prelude {
	pub use crate::{
		find_best_paths, solve, BestPaths, Direction, Error, Grid, Move, Path, Point, SolverConfig,
	};
}

/// Finds every cheapest Path from the start of `grid` to any of its ends.
///
/// Builds the [`StateGraph`](graph::StateGraph), runs the search and collects all Paths in one go.
///
/// Returns `Ok(None)` if no end can be reached, and an Error if `config` is invalid for `grid`
/// (see [`SolverConfig::validate_for`]).
///
/// ## Examples
/// ```
/// # use directional_pathfinding::prelude::*;
/// let grid: Grid = "\
/// S....
/// .....
/// .....
/// .....
/// ....E"
/// 	.parse()
/// 	.unwrap();
///
/// let best = find_best_paths(&grid, &SolverConfig::default()).unwrap().unwrap();
/// // East along the top, one turn, South along the side
/// assert_eq!(best.cost(), 8 + 1000);
/// assert_eq!(best.count(), 1);
/// ```
pub fn find_best_paths(grid: &Grid, config: &SolverConfig) -> Result<Option<BestPaths>, Error> {
	config.validate_for(grid)?;

	let graph = graph::StateGraph::build(grid, config);
	let tree = graph::dijkstra_search(&graph, config.exhaustive);
	Ok(path::enumerate_paths(&graph, &tree))
}

/// Parses `text` into a [`Grid`] and calls [`find_best_paths`] on it.
///
/// See [`Grid::from_str`](std::str::FromStr::from_str) for the format.
pub fn solve(text: &str, config: &SolverConfig) -> Result<Option<BestPaths>, Error> {
	let grid: Grid = text.parse()?;
	find_best_paths(&grid, config)
}
