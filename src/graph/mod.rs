//! The directional State Graph and the search on it.
//!
//! Every open Tile of the [`Grid`] becomes four [`Node`]s, one per [`Direction`]. Turning is an
//! [`Edge`] between two Nodes on the same Tile, walking is an Edge between two Nodes facing the
//! same way on neighboring Tiles.

mod node_id;
pub use node_id::*;

mod node;
pub use node::{Edge, EdgeKind, Node};

mod dijkstra;
pub use dijkstra::{dijkstra_search, SearchTree};

use crate::{utils::Timer, Direction, Grid, SolverConfig};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The Graph of all `(Tile, Direction)` states of a Grid.
///
/// The Graph is immutable once built. The results of a search are stored in a separate
/// [`SearchTree`], so the same Graph can be searched any number of times.
///
/// ## Examples
/// ```
/// use directional_pathfinding::{graph::StateGraph, Grid, SolverConfig};
///
/// let grid: Grid = "S.E".parse().unwrap();
/// let graph = StateGraph::build(&grid, &SolverConfig::default());
///
/// // 3 Tiles with 4 Directions each
/// assert_eq!(graph.len(), 12);
/// // 3 turns per Node, plus 2 steps East and 2 steps West
/// assert_eq!(graph.edge_count(), 12 * 3 + 4);
/// assert_eq!(graph.terminals().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct StateGraph {
	nodes: Vec<Option<Node>>,
	start: NodeID,
	terminals: Vec<NodeID>,
	edge_count: usize,
}

impl StateGraph {
	/// Builds the Graph for `grid`.
	///
	/// Walls get no Nodes. The start Node is the start Tile facing
	/// [`config.start_facing`](SolverConfig::start_facing), and every Node on an end Tile is a
	/// terminal Node. The [`Grid`] guarantees that both exist, so building cannot fail.
	///
	/// With the `parallel` feature, the Nodes are created on rayon's thread pool.
	pub fn build(grid: &Grid, config: &SolverConfig) -> StateGraph {
		let _timer = Timer::start("build state graph");

		let count = grid.len() * 4;
		debug_assert!(
			count - 1 <= NodeID::MAX as usize,
			"a Grid with {} Tiles has too many Nodes for a NodeID",
			grid.len()
		);

		#[cfg(feature = "parallel")]
		let nodes: Vec<Option<Node>> = (0..count)
			.into_par_iter()
			.map(|id| build_node(grid, config, id as NodeID))
			.collect();

		#[cfg(not(feature = "parallel"))]
		let nodes: Vec<Option<Node>> = (0..count)
			.map(|id| build_node(grid, config, id as NodeID))
			.collect();

		let edge_count = nodes.iter().flatten().map(|node| node.edges.len()).sum();

		let start = node_id(grid.index_of(grid.start()), config.start_facing);
		let terminals = grid
			.ends()
			.iter()
			.flat_map(|&end| Direction::all().map(move |dir| node_id(grid.index_of(end), dir)))
			.collect();

		let graph = StateGraph {
			nodes,
			start,
			terminals,
			edge_count,
		};
		debug_log!(
			"state graph: {} nodes, {} edges",
			graph.len(),
			graph.edge_count
		);
		graph
	}

	/// The Node the search starts at
	pub fn start(&self) -> NodeID {
		self.start
	}

	/// All Nodes on end Tiles, sorted by ID
	pub fn terminals(&self) -> &[NodeID] {
		&self.terminals
	}

	/// `true` if `id` stands on an end Tile
	pub fn is_terminal(&self, id: NodeID) -> bool {
		self.terminals.binary_search(&id).is_ok()
	}

	/// The number of Nodes
	pub fn len(&self) -> usize {
		self.nodes.iter().flatten().count()
	}

	/// `true` if there are no Nodes, which never happens for a Graph built from a [`Grid`]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The number of Edges of all Nodes combined
	pub fn edge_count(&self) -> usize {
		self.edge_count
	}

	/// The upper bound of all NodeIDs, including the ones of walls
	pub fn id_bound(&self) -> usize {
		self.nodes.len()
	}

	/// The Node with ID `id`, if it exists
	pub fn get(&self, id: NodeID) -> Option<&Node> {
		self.nodes.get(id as usize).and_then(Option::as_ref)
	}

	/// Iterates over all Nodes in order of their IDs
	pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Node)> + '_ {
		self.nodes
			.iter()
			.enumerate()
			.filter_map(|(id, opt)| opt.as_ref().map(|node| (id as NodeID, node)))
	}
}

fn build_node(grid: &Grid, config: &SolverConfig, id: NodeID) -> Option<Node> {
	let pos = grid.point_at(tile_index(id));
	if !grid.is_open(pos) {
		return None;
	}
	let dir = facing(id);
	let mut node = Node::new(id, pos, dir);

	for other in Direction::all().filter(|&other| other != dir) {
		let turns = dir.turns_to(other);
		if turns == 2 && !config.u_turn_edges {
			continue;
		}
		node.edges.push(Edge {
			target: node_id(tile_index(id), other),
			weight: config.rotation_cost(turns),
			kind: EdgeKind::Rotate { turns },
		});
	}

	if let Some(next) = grid.neighbor(pos, dir) {
		node.edges.push(Edge {
			target: node_id(grid.index_of(next), dir),
			weight: config.move_cost,
			kind: EdgeKind::Move,
		});
	}

	Some(node)
}

use std::ops::Index;
impl Index<NodeID> for StateGraph {
	type Output = Node;
	#[track_caller]
	fn index(&self, index: NodeID) -> &Node {
		self.nodes[index as usize]
			.as_ref()
			.unwrap_or_else(|| panic!("NodeID {} does not belong to an open Tile", index))
	}
}
