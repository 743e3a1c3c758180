use crate::{Cost, Direction, Error, Grid};

/// Options for building and searching the [`StateGraph`](crate::graph::StateGraph)
///
/// Default options:
/// ```
/// # use directional_pathfinding::{SolverConfig, Direction};
/// assert_eq!(
/// 	SolverConfig {
/// 		start_facing: Direction::East,
/// 		move_cost: 1,
/// 		turn_cost: 1000,
/// 		u_turn_edges: true,
/// 		exhaustive: true,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
	/// The Direction the Agent is facing on the start Tile (defaults to East)
	pub start_facing: Direction,
	/// The Cost of walking forward by one Tile (defaults to `1`)
	pub move_cost: Cost,
	/// The Cost of a single 90° turn (defaults to `1000`)
	pub turn_cost: Cost,
	/// `true` (default): every Node gets a direct Edge to the opposite Direction, weighted as two
	/// turns.
	///
	/// `false`: only the two quarter turns are Edges. A U-turn then takes two steps, which costs
	/// the same but creates one more Node on the way.
	pub u_turn_edges: bool,
	/// `true` (default): the search keeps going until every reachable Node has its final Cost.
	///
	/// `false`: the search stops once nothing cheaper than the best end Node is left. All the best
	/// Paths are still found, but Nodes further away than the end are left without a Cost.
	pub exhaustive: bool,
}

impl SolverConfig {
	/// a SolverConfig that only has quarter-turn Edges
	///
	/// Values:
	/// ```
	/// # use directional_pathfinding::{SolverConfig, Direction};
	/// assert_eq!(
	/// 	SolverConfig {
	/// 		start_facing: Direction::East,
	/// 		move_cost: 1,
	/// 		turn_cost: 1000,
	/// 		u_turn_edges: false,
	/// 		exhaustive: true,
	/// 	},
	/// 	SolverConfig::QUARTER_TURNS
	/// );
	/// ```
	pub const QUARTER_TURNS: SolverConfig = SolverConfig {
		start_facing: Direction::East,
		move_cost: 1,
		turn_cost: 1000,
		u_turn_edges: false,
		exhaustive: true,
	};
	/// a SolverConfig that stops searching as soon as the best Paths are known
	///
	/// Values:
	/// ```
	/// # use directional_pathfinding::{SolverConfig, Direction};
	/// assert_eq!(
	/// 	SolverConfig {
	/// 		start_facing: Direction::East,
	/// 		move_cost: 1,
	/// 		turn_cost: 1000,
	/// 		u_turn_edges: true,
	/// 		exhaustive: false,
	/// 	},
	/// 	SolverConfig::FIRST_GOAL
	/// );
	/// ```
	pub const FIRST_GOAL: SolverConfig = SolverConfig {
		start_facing: Direction::East,
		move_cost: 1,
		turn_cost: 1000,
		u_turn_edges: true,
		exhaustive: false,
	};

	/// Checks that every Edge will have a positive weight that fits into a [`Cost`].
	///
	/// Zero-weight Edges would allow two Nodes to be each other's predecessor, which makes the
	/// set of best Paths infinite.
	/// ```
	/// # use directional_pathfinding::{SolverConfig, Error};
	/// let config = SolverConfig { turn_cost: 0, ..Default::default() };
	/// assert_eq!(config.validate(), Err(Error::ZeroCost));
	///
	/// // a U-turn costs twice as much
	/// let config = SolverConfig { turn_cost: usize::MAX / 2 + 1, ..Default::default() };
	/// assert_eq!(config.validate(), Err(Error::CostOverflow));
	/// ```
	pub fn validate(&self) -> Result<(), Error> {
		if self.move_cost == 0 || self.turn_cost == 0 {
			return Err(Error::ZeroCost);
		}
		self.turn_cost.checked_mul(2).ok_or(Error::CostOverflow)?;
		Ok(())
	}

	/// Checks that no Cost computed on `grid` can overflow.
	///
	/// A cheapest route visits every Node at most once, so its Cost is below the number of Nodes
	/// times the heaviest Edge weight.
	///
	/// Calls [`validate`](SolverConfig::validate) first.
	/// ```
	/// # use directional_pathfinding::{SolverConfig, Error, Grid};
	/// let grid: Grid = "S.\n.E".parse().unwrap();
	/// let config = SolverConfig { turn_cost: usize::MAX / 4, ..Default::default() };
	/// assert_eq!(config.validate(), Ok(()));
	/// assert_eq!(config.validate_for(&grid), Err(Error::CostOverflow));
	/// ```
	pub fn validate_for(&self, grid: &Grid) -> Result<(), Error> {
		self.validate()?;
		grid.len()
			.checked_mul(4)
			.and_then(|nodes| nodes.checked_mul(self.max_edge_weight()))
			.ok_or(Error::CostOverflow)?;
		Ok(())
	}

	/// The Cost of rotating by the given number of quarter turns
	pub fn rotation_cost(&self, turns: usize) -> Cost {
		turns * self.turn_cost
	}

	fn max_edge_weight(&self) -> Cost {
		self.move_cost.max(self.rotation_cost(2))
	}
}

impl Default for SolverConfig {
	fn default() -> SolverConfig {
		SolverConfig {
			start_facing: Direction::East,
			move_cost: 1,
			turn_cost: 1000,
			u_turn_edges: true,
			exhaustive: true,
		}
	}
}
