use super::NodeID;
use crate::{Cost, Direction, Point};

/// What an [`Edge`] does to the Agent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
	/// one step forward, keeping the Direction
	Move,
	/// turning in place by this many quarter turns
	Rotate {
		/// 1 or 2
		turns: usize,
	},
}

/// A directed, weighted connection to another Node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	/// the Node this Edge leads to
	pub target: NodeID,
	/// the Cost of taking this Edge
	pub weight: Cost,
	/// whether this is a step or a turn
	pub kind: EdgeKind,
}

/// A state of the Agent: standing on `pos`, facing `facing`.
#[derive(Clone, Debug)]
pub struct Node {
	/// the ID of this Node
	pub id: NodeID,
	/// the Tile
	pub pos: Point,
	/// the Direction
	pub facing: Direction,
	/// all outgoing Edges
	pub edges: Vec<Edge>,
}

impl Node {
	/// creates a Node without any Edges
	pub fn new(id: NodeID, pos: Point, facing: Direction) -> Node {
		Node {
			id,
			pos,
			facing,
			edges: Vec::with_capacity(4),
		}
	}

	/// the Edge leading to `target`, if there is one
	pub fn edge_to(&self, target: NodeID) -> Option<&Edge> {
		self.edges.iter().find(|edge| edge.target == target)
	}
}
