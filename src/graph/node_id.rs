//! A Module with some utilities for working with NodeIDs

use crate::Direction;
use std::hash::{BuildHasherDefault, Hasher};

/// The Type used to reference a Node in the [`StateGraph`](super::StateGraph).
///
/// Every open Tile owns four consecutive IDs, one per [`Direction`]:
/// `id = tile_index * 4 + direction`.
pub type NodeID = u32;

/// The ID of the Node standing on the Tile with row-major `tile_index`, facing `dir`
pub fn node_id(tile_index: usize, dir: Direction) -> NodeID {
	(tile_index * 4 + dir.num()) as NodeID
}

/// The row-major index of the Tile a Node stands on
pub fn tile_index(id: NodeID) -> usize {
	id as usize / 4
}

/// The Direction a Node is facing
pub fn facing(id: NodeID) -> Direction {
	(id % 4).into()
}

/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIDs with a faster Hasher
pub type NodeIDSet = hashbrown::HashSet<NodeID, BuildHasherDefault<NodeIDHasher>>;

/// A [`Hasher`](Hasher) specialized on NodeIDs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIDHasher(u64);

impl Hasher for NodeIDHasher {
	/// panics, since only NodeIDs are supposed to be used
	fn write(&mut self, _: &[u8]) {
		unreachable!("This Hasher only works with NodeIDs")
	}
	/// Writes a single NodeID into this hasher.
	fn write_u32(&mut self, id: NodeID) {
		self.0 = id as u64
	}
	fn finish(&self) -> u64 {
		self.0
	}
}

#[test]
fn id_layout() {
	let id = node_id(7, Direction::South);
	assert_eq!(id, 30);
	assert_eq!(tile_index(id), 7);
	assert_eq!(facing(id), Direction::South);
}

#[test]
fn id_set() {
	let mut set = NodeIDSet::default();
	assert!(set.insert(4));
	assert!(set.insert(5));
	assert!(!set.insert(4));
	assert_eq!(set.len(), 2);
}
