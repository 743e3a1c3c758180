use super::{NodeID, NodeIDSet, StateGraph};
use crate::{utils::Timer, Cost};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(PartialEq, Eq)]
struct Element(NodeID, Cost);
impl PartialOrd for Element {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for Element {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.1.cmp(&self.1).then_with(|| rhs.0.cmp(&self.0))
	}
}

/// The result of [`dijkstra_search`]: the minimal Cost of every reached Node, and every
/// predecessor that reaches it at that Cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTree {
	costs: Vec<Option<Cost>>,
	predecessors: Vec<NodeIDSet>,
	visited: Vec<bool>,
}

impl SearchTree {
	/// The minimal Cost to reach `id` from the start, or `None` if it was not reached
	pub fn cost(&self, id: NodeID) -> Option<Cost> {
		self.costs.get(id as usize).copied().flatten()
	}

	/// All Nodes that lead to `id` on a cheapest route. Empty for the start and unreached Nodes.
	#[track_caller]
	pub fn predecessors(&self, id: NodeID) -> &NodeIDSet {
		&self.predecessors[id as usize]
	}

	/// `true` if the Cost of `id` is final
	pub fn is_visited(&self, id: NodeID) -> bool {
		self.visited.get(id as usize).copied().unwrap_or(false)
	}

	/// The number of Nodes with a Cost
	pub fn reached(&self) -> usize {
		self.costs.iter().filter(|c| c.is_some()).count()
	}

	/// The cheapest Cost of any terminal Node and all terminal Nodes that have exactly that Cost.
	///
	/// `None` if no terminal Node was reached.
	pub fn best_terminals(&self, graph: &StateGraph) -> Option<(Cost, Vec<NodeID>)> {
		let best = graph
			.terminals()
			.iter()
			.filter_map(|&id| self.cost(id))
			.min()?;
		let ids = graph
			.terminals()
			.iter()
			.copied()
			.filter(|&id| self.cost(id) == Some(best))
			.collect();
		Some((best, ids))
	}
}

/// Searches `graph` from its start Node using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
/// keeping *every* predecessor that reaches a Node at its minimal Cost instead of just the first one.
///
/// With `exhaustive` set, the search runs until every reachable Node is final. Otherwise it stops
/// once the cheapest remaining Node is more expensive than the best terminal Node. Since all Edge
/// weights are positive, the predecessors of all best terminal Nodes are complete at that point.
///
/// ## Examples
/// ```
/// use directional_pathfinding::{graph::*, Direction, Grid, SolverConfig};
///
/// let grid: Grid = "S.\n.E".parse().unwrap();
/// let graph = StateGraph::build(&grid, &SolverConfig::default());
/// let tree = dijkstra_search(&graph, true);
///
/// let (cost, terminals) = tree.best_terminals(&graph).unwrap();
/// assert_eq!(cost, 1002);
/// // walk East, turn South, walk South
/// assert_eq!(terminals.len(), 1);
/// assert_eq!(graph[terminals[0]].facing, Direction::South);
/// ```
pub fn dijkstra_search(graph: &StateGraph, exhaustive: bool) -> SearchTree {
	let _timer = Timer::start("dijkstra search");

	let bound = graph.id_bound();
	let start = graph.start();
	let mut costs: Vec<Option<Cost>> = vec![None; bound];
	let mut predecessors = vec![NodeIDSet::default(); bound];
	let mut visited = vec![false; bound];

	let mut next = BinaryHeap::new();
	next.push(Element(start, 0));
	costs[start as usize] = Some(0);

	let mut goal_cost = None;

	while let Some(Element(current_id, current_cost)) = next.pop() {
		if visited[current_id as usize] {
			continue;
		}
		match costs[current_id as usize].map(|c| current_cost.cmp(&c)) {
			Some(Ordering::Greater) => continue,
			Some(Ordering::Equal) => {}
			Some(Ordering::Less) | None => panic!("Binary Heap failed"),
		}

		if !exhaustive {
			match goal_cost {
				Some(goal) if current_cost > goal => break,
				None if graph.is_terminal(current_id) => goal_cost = Some(current_cost),
				_ => {}
			}
		}

		for edge in graph[current_id].edges.iter() {
			let other = edge.target as usize;
			if visited[other] {
				continue;
			}
			let other_cost = current_cost + edge.weight;

			match costs[other].map(|prev| other_cost.cmp(&prev)) {
				None | Some(Ordering::Less) => {
					costs[other] = Some(other_cost);
					predecessors[other].clear();
					predecessors[other].insert(current_id);
					next.push(Element(edge.target, other_cost));
				}
				Some(Ordering::Equal) => {
					predecessors[other].insert(current_id);
				}
				Some(Ordering::Greater) => {}
			}
		}

		visited[current_id as usize] = true;
	}

	let tree = SearchTree {
		costs,
		predecessors,
		visited,
	};
	trace_log!("dijkstra search reached {} nodes", tree.reached());
	tree
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{node_id, tile_index};
	use crate::{Direction::*, Grid, SolverConfig};

	fn search(text: &str, config: &SolverConfig) -> (Grid, StateGraph, SearchTree) {
		let grid: Grid = text.parse().unwrap();
		let graph = StateGraph::build(&grid, config);
		let tree = dijkstra_search(&graph, config.exhaustive);
		(grid, graph, tree)
	}

	#[test]
	fn straight_line() {
		let (_, graph, tree) = search("S...E", &SolverConfig::default());
		let (cost, terminals) = tree.best_terminals(&graph).unwrap();
		assert_eq!(cost, 4);
		assert_eq!(terminals, vec![node_id(4, East)]);
		assert_eq!(tree.cost(graph.start()), Some(0));
		assert!(tree.predecessors(graph.start()).is_empty());
	}

	#[test]
	fn u_turn_edge() {
		let (grid, graph, tree) = search("E..S", &SolverConfig::default());
		let (cost, _) = tree.best_terminals(&graph).unwrap();
		assert_eq!(cost, 2000 + 3);

		// the direct U-turn ties with both pairs of quarter turns
		let west = node_id(grid.index_of((0, 3)), West);
		let preds = tree.predecessors(west);
		assert_eq!(preds.len(), 3);
		assert!(preds.contains(&graph.start()));
	}

	#[test]
	fn quarter_turns() {
		let (grid, graph, tree) = search("E..S", &SolverConfig::QUARTER_TURNS);
		let (cost, _) = tree.best_terminals(&graph).unwrap();
		assert_eq!(cost, 2000 + 3);

		let west = node_id(grid.index_of((0, 3)), West);
		let mut preds: Vec<_> = tree.predecessors(west).iter().copied().collect();
		preds.sort_unstable();
		assert_eq!(
			preds,
			vec![
				node_id(grid.index_of((0, 3)), North),
				node_id(grid.index_of((0, 3)), South)
			]
		);
	}

	#[test]
	fn predecessors_reach_at_minimal_cost() {
		let (_, graph, tree) = search(
			"#####\n#...#\n#S#E#\n#...#\n#####",
			&SolverConfig::default(),
		);
		for (id, node) in graph.iter() {
			let Some(cost) = tree.cost(id) else {
				continue;
			};
			for &pred in tree.predecessors(id) {
				let edge = graph[pred].edge_to(id).unwrap();
				assert_eq!(tree.cost(pred).unwrap() + edge.weight, cost);
			}
			if id != graph.start() {
				assert!(!tree.predecessors(id).is_empty(), "{:?}", node);
			}
		}
	}

	#[test]
	fn unreachable() {
		let (_, graph, tree) = search("S.#.\n..#E", &SolverConfig::default());
		assert!(tree.best_terminals(&graph).is_none());
		for &id in graph.terminals() {
			assert_eq!(tree.cost(id), None);
			assert!(tree.predecessors(id).is_empty());
		}
	}

	#[test]
	fn idempotent() {
		let (_, graph, tree) = search(
			"#######\n#....E#\n#.#.#.#\n#S....#\n#######",
			&SolverConfig::default(),
		);
		let again = dijkstra_search(&graph, true);
		assert_eq!(tree, again);
	}

	#[test]
	fn early_stop_keeps_best_terminals() {
		let text = "#######\n#....E#\n#.#.#.#\n#S....#\n#.....#\n#######";
		let (_, graph, full) = search(text, &SolverConfig::default());
		let (_, _, partial) = search(text, &SolverConfig::FIRST_GOAL);

		let best = full.best_terminals(&graph);
		assert_eq!(partial.best_terminals(&graph), best);
		let (_, terminals) = best.unwrap();
		for id in terminals {
			assert_eq!(partial.predecessors(id), full.predecessors(id));
		}
		assert!(partial.reached() <= full.reached());
	}

	#[test]
	fn all_open_nodes_reached() {
		let (grid, graph, tree) = search("S..\n...\n..E", &SolverConfig::default());
		assert_eq!(tree.reached(), graph.len());
		for (id, _) in graph.iter() {
			assert!(tree.is_visited(id));
			assert!(grid.is_open(grid.point_at(tile_index(id))));
		}
	}
}
