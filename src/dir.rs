//! Facing Directions and the discrete Moves that make up a Path

use crate::Point;
use std::fmt;

/// The Direction an Agent is facing.
///
/// The order is clockwise, starting at the top of the Grid. Turning clockwise means going to the
/// next Direction, turning counter-clockwise means going to the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
	/// towards row 0
	North = 0,
	/// towards the last column
	East = 1,
	/// towards the last row
	South = 2,
	/// towards column 0
	West = 3,
}
pub use self::Direction::*;

/// `(row, column)` offsets of one step in every Direction
const UNIT_CIRCLE: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// minimal number of quarter turns between two Directions, indexed `[from][to]`
const TURNS: [[usize; 4]; 4] = [
	[0, 1, 2, 1], // North
	[1, 0, 1, 2], // East
	[2, 1, 0, 1], // South
	[1, 2, 1, 0], // West
];

/// the rotations that turn `[from]` into `[to]`. U-turns go clockwise.
const ROTATIONS: [[&[Move]; 4]; 4] = {
	use Move::*;
	const NONE: &[Move] = &[];
	const RIGHT: &[Move] = &[RotateRight];
	const LEFT: &[Move] = &[RotateLeft];
	const BACK: &[Move] = &[RotateRight, RotateRight];
	[
		[NONE, RIGHT, BACK, LEFT],
		[LEFT, NONE, RIGHT, BACK],
		[BACK, LEFT, NONE, RIGHT],
		[RIGHT, BACK, LEFT, NONE],
	]
};

impl Direction {
	/// All four Directions in clockwise order, starting with [`North`]
	pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Direction>> {
		[North, East, South, West].iter().copied()
	}
	/// The Direction behind this one
	pub fn opposite(self) -> Direction {
		((self.num() + 2) % 4).into()
	}
	/// The Direction after a quarter turn clockwise
	pub fn clockwise(self) -> Direction {
		((self.num() + 1) % 4).into()
	}
	/// The Direction after a quarter turn counter-clockwise
	pub fn counter_clockwise(self) -> Direction {
		((self.num() + 3) % 4).into()
	}
	/// The index of this Direction in [`Direction::all`]
	pub fn num(self) -> usize {
		self as usize
	}
	/// How many quarter turns it takes at least to face `other`.
	///
	/// ```
	/// # use directional_pathfinding::Direction;
	/// assert_eq!(Direction::East.turns_to(Direction::East), 0);
	/// assert_eq!(Direction::East.turns_to(Direction::North), 1);
	/// assert_eq!(Direction::East.turns_to(Direction::West), 2);
	/// ```
	pub fn turns_to(self, other: Direction) -> usize {
		TURNS[self.num()][other.num()]
	}
	/// The shortest sequence of rotations to face `other`
	pub fn rotations_to(self, other: Direction) -> &'static [Move] {
		ROTATIONS[self.num()][other.num()]
	}
	/// Takes one step from `pos` in this Direction, if that stays on a Grid of the given size
	pub fn step(self, pos: Point, (width, height): (usize, usize)) -> Option<Point> {
		let (dr, dc) = UNIT_CIRCLE[self.num()];
		let row = pos.0.checked_add_signed(dr)?;
		let col = pos.1.checked_add_signed(dc)?;
		if row < height && col < width {
			Some((row, col))
		} else {
			None
		}
	}
	/// The symbol used when drawing a Path heading in this Direction
	pub fn arrow(self) -> char {
		['^', '>', 'v', '<'][self.num()]
	}
}

macro_rules! impl_from_into {
	($($type:ty),+) => {$(
		impl From<$type> for Direction {
			fn from(val: $type) -> Direction {
				match val {
					0 => North,
					1 => East,
					2 => South,
					3 => West,
					_ => panic!("invalid Direction: {}", val),
				}
			}
		}
		impl From<Direction> for $type {
			fn from(dir: Direction) -> $type {
				dir as $type
			}
		}
	)+}
}

impl_from_into!(u32, usize);

impl fmt::Display for Direction {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let name = match self {
			North => "North",
			East => "East",
			South => "South",
			West => "West",
		};
		write!(fmt, "{}", name)
	}
}

/// A single discrete step of a Path
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
	/// walk one Tile in the current Direction
	Forward,
	/// turn 90° counter-clockwise without moving
	RotateLeft,
	/// turn 90° clockwise without moving
	RotateRight,
}

impl Move {
	/// `true` for both rotations
	pub fn is_rotation(self) -> bool {
		self != Move::Forward
	}
}

impl fmt::Display for Move {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let symbol = match self {
			Move::Forward => "F",
			Move::RotateLeft => "L",
			Move::RotateRight => "R",
		};
		write!(fmt, "{}", symbol)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn turn_table_matches_rotations() {
		for from in Direction::all() {
			for to in Direction::all() {
				let rotations = from.rotations_to(to);
				assert_eq!(rotations.len(), from.turns_to(to));

				let mut facing = from;
				for &rotation in rotations {
					facing = match rotation {
						Move::RotateLeft => facing.counter_clockwise(),
						Move::RotateRight => facing.clockwise(),
						Move::Forward => unreachable!(),
					};
				}
				assert_eq!(facing, to);
			}
		}
	}

	#[test]
	fn opposite() {
		assert_eq!(North.opposite(), South);
		assert_eq!(West.opposite(), East);
		assert_eq!(East.turns_to(East.opposite()), 2);
	}

	#[test]
	fn step_test() {
		let pos = (1, 3);
		assert_eq!(North.step(pos, (5, 5)), Some((0, 3)));
		assert_eq!(East.step(pos, (5, 5)), Some((1, 4)));
		assert_eq!(East.step(pos, (4, 5)), None);
		assert_eq!(South.step(pos, (5, 2)), None);
		assert_eq!(North.step((0, 0), (5, 5)), None);
		assert_eq!(West.step((0, 0), (5, 5)), None);
	}
}
