use crate::Point;
use std::fmt;

/// The ways a Grid or a [`SolverConfig`](crate::SolverConfig) can be rejected.
///
/// All of these are reported before a Graph is built. A Grid where the end cannot be reached is
/// not an Error, see [`find_best_paths`](crate::find_best_paths).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
	/// the Grid has no Cells
	EmptyGrid,
	/// a row is longer or shorter than the first row
	RaggedRow {
		/// index of the offending row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of the offending row
		found: usize,
	},
	/// a character that is not one of `#.SE`
	UnknownTile {
		/// where the character was found
		point: Point,
		/// the character
		tile: char,
	},
	/// no Cell is marked as the start
	MissingStart,
	/// more than one Cell is marked as the start
	MultipleStarts {
		/// the first start in row-major order
		first: Point,
		/// the second one
		second: Point,
	},
	/// no Cell is marked as an end
	MissingEnd,
	/// a start or end marker on a wall
	MarkerOnWall {
		/// the wall
		point: Point,
	},
	/// a move or turn cost of zero
	ZeroCost,
	/// the costs are so high that the Cost of a Path could exceed `usize::MAX`
	CostOverflow,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::EmptyGrid => f.write_str("grid is empty"),
			Self::RaggedRow {
				row,
				expected,
				found,
			} => write!(
				f,
				"row {} has {} cells, expected {}",
				row, found, expected
			),
			Self::UnknownTile { point, tile } => {
				write!(f, "unknown tile {:?} at {:?}", tile, point)
			}
			Self::MissingStart => f.write_str("grid has no start"),
			Self::MultipleStarts { first, second } => {
				write!(f, "grid has more than one start: {:?} and {:?}", first, second)
			}
			Self::MissingEnd => f.write_str("grid has no end"),
			Self::MarkerOnWall { point } => write!(f, "start or end marker on a wall at {:?}", point),
			Self::ZeroCost => f.write_str("move and turn costs must be greater than zero"),
			Self::CostOverflow => f.write_str("move and turn costs are too high for this grid"),
		}
	}
}

impl std::error::Error for Error {}
