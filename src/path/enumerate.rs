use super::Path;
use crate::graph::{EdgeKind, NodeID, SearchTree, StateGraph};
use crate::{utils::Timer, Cost, Grid, Move, Point, PointSet};

/// All cheapest Paths from the start to the end, as found by [`enumerate_paths`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPaths {
	cost: Cost,
	paths: Vec<Path>,
	tiles: PointSet,
}

impl BestPaths {
	/// The minimal Cost to reach an end Tile
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The number of distinct cheapest Paths. Always at least 1.
	pub fn count(&self) -> usize {
		self.paths.len()
	}

	/// All distinct cheapest Paths, sorted by the Tiles they visit
	pub fn paths(&self) -> &[Path] {
		&self.paths
	}

	/// Every Tile that is part of at least one cheapest Path, including start and end
	pub fn tiles(&self) -> &PointSet {
		&self.tiles
	}

	/// `true` if `point` is on at least one cheapest Path
	pub fn is_best_tile(&self, point: Point) -> bool {
		self.tiles.contains(&point)
	}

	/// Draws `grid` with an `O` on every Tile of [`tiles`](BestPaths::tiles)
	pub fn render(&self, grid: &Grid) -> String {
		grid.render_with(|point, _| self.is_best_tile(point).then_some('O'))
	}
}

/// Collects every cheapest Path out of a finished search.
///
/// Starts at all terminal Nodes that share the minimal Cost, so ending on the same Tile facing
/// different Directions counts as the same Path. Backtracking runs on an explicit stack, so long
/// Paths do not grow the call stack. The amount of work is proportional to the number of
/// predecessor chains times their length, which can be a lot for open Grids.
///
/// Node sequences that visit the same Tiles in the same order are merged into one [`Path`].
///
/// Returns `None` if no end Tile was reached.
///
/// ## Panics
/// If `tree` was not created from `graph`: a chain of predecessors must only contain reached
/// Nodes and end at the start Node.
pub fn enumerate_paths(graph: &StateGraph, tree: &SearchTree) -> Option<BestPaths> {
	let _timer = Timer::start("enumerate paths");

	let (cost, terminals) = tree.best_terminals(graph)?;

	let mut seen = hashbrown::HashSet::new();
	let mut paths = vec![];
	let mut tiles = PointSet::default();

	// terminal first, start last
	let mut chain: Vec<NodeID> = vec![];
	let mut stack: Vec<(NodeID, usize)> = terminals.iter().rev().map(|&id| (id, 0)).collect();

	while let Some((id, depth)) = stack.pop() {
		chain.truncate(depth);
		chain.push(id);

		if tree.cost(id).is_none() {
			panic!("Node {} is on a predecessor chain but was never reached", id);
		}

		let predecessors = tree.predecessors(id);
		if predecessors.is_empty() {
			assert_eq!(
				id,
				graph.start(),
				"predecessor chain ends at Node {} instead of the start",
				id
			);
			let path = build_path(graph, chain.iter().rev().copied());
			if seen.insert(path.cells().to_vec()) {
				tiles.extend(path.cells().iter().copied());
				paths.push(path);
			}
			continue;
		}

		let mut predecessors: Vec<NodeID> = predecessors.iter().copied().collect();
		predecessors.sort_unstable();
		stack.extend(predecessors.into_iter().rev().map(|pred| (pred, depth + 1)));
	}

	paths.sort_by(|a, b| a.cells().cmp(b.cells()));
	debug_log!(
		"{} best paths with cost {} over {} tiles",
		paths.len(),
		cost,
		tiles.len()
	);

	Some(BestPaths { cost, paths, tiles })
}

/// Turns a chain of Nodes from the start to a terminal Node into a [`Path`].
///
/// The chain is cut at the first Node on an end Tile, which also drops any rotations after
/// arriving there.
fn build_path(graph: &StateGraph, chain: impl Iterator<Item = NodeID>) -> Path {
	let mut cells = vec![];
	let mut moves = vec![];
	let mut cost = 0;
	let mut prev: Option<NodeID> = None;

	for id in chain {
		let node = &graph[id];
		match prev {
			None => cells.push(node.pos),
			Some(prev) => {
				let from = &graph[prev];
				let edge = from.edge_to(id).unwrap_or_else(|| {
					panic!("no Edge from predecessor {} to Node {}", prev, id)
				});
				cost += edge.weight;
				match edge.kind {
					EdgeKind::Move => {
						moves.push(Move::Forward);
						cells.push(node.pos);
					}
					EdgeKind::Rotate { .. } => {
						moves.extend_from_slice(from.facing.rotations_to(node.facing));
					}
				}
			}
		}
		if graph.is_terminal(id) {
			break;
		}
		prev = Some(id);
	}

	Path::new(cells, moves, cost)
}
