//! The Grid the search runs on

use crate::{Direction, Error, Point};
use std::fmt;
use std::str::FromStr;

/// The classification of a single Tile of the Grid.
///
/// A Cell can be both start and end, but neither on a wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
	/// the Tile cannot be entered
	pub is_wall: bool,
	/// the Agent starts here
	pub is_start: bool,
	/// reaching this Tile ends the Path
	pub is_end: bool,
}

impl Cell {
	/// an empty Tile
	pub const OPEN: Cell = Cell {
		is_wall: false,
		is_start: false,
		is_end: false,
	};
	/// a solid Tile
	pub const WALL: Cell = Cell {
		is_wall: true,
		is_start: false,
		is_end: false,
	};
	/// the start Tile
	pub const START: Cell = Cell {
		is_wall: false,
		is_start: true,
		is_end: false,
	};
	/// an end Tile
	pub const END: Cell = Cell {
		is_wall: false,
		is_start: false,
		is_end: true,
	};

	/// parses one character of the text representation
	pub fn from_char(c: char) -> Option<Cell> {
		match c {
			'#' => Some(Cell::WALL),
			'.' => Some(Cell::OPEN),
			'S' => Some(Cell::START),
			'E' => Some(Cell::END),
			_ => None,
		}
	}

	/// the character in the text representation. Start wins over end.
	pub fn to_char(self) -> char {
		if self.is_wall {
			'#'
		} else if self.is_start {
			'S'
		} else if self.is_end {
			'E'
		} else {
			'.'
		}
	}
}

/// An immutable rectangular Grid with exactly one start and at least one end.
///
/// Positions are `(row, column)`, starting at the top left.
///
/// ## Examples
/// ```
/// use directional_pathfinding::{Grid, Direction};
///
/// let grid: Grid = "\
/// ######
/// ##S.E#
/// ######"
/// 	.parse()
/// 	.unwrap();
///
/// assert_eq!((grid.width(), grid.height()), (5, 3));
/// assert_eq!(grid.start(), (1, 1));
/// assert_eq!(grid.ends(), &[(1, 3)]);
/// assert_eq!(grid.neighbor((1, 1), Direction::East), Some((1, 2)));
/// assert_eq!(grid.neighbor((1, 1), Direction::West), None); // wall
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
	width: usize,
	height: usize,
	cells: Vec<Cell>,
	start: Point,
	ends: Vec<Point>,
}

impl Grid {
	/// Creates a Grid from `cells` in row-major order, `width` cells per row.
	///
	/// Fails if the Grid is empty, the last row is incomplete, there is not exactly one start,
	/// there is no end or a start or end is on a wall.
	pub fn from_cells(width: usize, cells: Vec<Cell>) -> Result<Grid, Error> {
		if width == 0 || cells.is_empty() {
			return Err(Error::EmptyGrid);
		}
		if cells.len() % width != 0 {
			return Err(Error::RaggedRow {
				row: cells.len() / width,
				expected: width,
				found: cells.len() % width,
			});
		}
		let height = cells.len() / width;

		let mut start = None;
		let mut ends = vec![];
		for (i, cell) in cells.iter().enumerate() {
			let point = (i / width, i % width);
			if cell.is_wall && (cell.is_start || cell.is_end) {
				return Err(Error::MarkerOnWall { point });
			}
			if cell.is_start {
				if let Some(first) = start {
					return Err(Error::MultipleStarts {
						first,
						second: point,
					});
				}
				start = Some(point);
			}
			if cell.is_end {
				ends.push(point);
			}
		}
		let start = start.ok_or(Error::MissingStart)?;
		if ends.is_empty() {
			return Err(Error::MissingEnd);
		}

		Ok(Grid {
			width,
			height,
			cells,
			start,
			ends,
		})
	}

	/// Creates a Grid from a list of rows, which all need to have the same length.
	///
	/// ```
	/// # use directional_pathfinding::{Grid, grid::Cell, Error};
	/// let (o, s, e) = (Cell::OPEN, Cell::START, Cell::END);
	/// let grid = Grid::from_rows(vec![vec![s, o], vec![o, e]]).unwrap();
	/// assert_eq!(grid.ends(), &[(1, 1)]);
	///
	/// let ragged = Grid::from_rows(vec![vec![s, o], vec![e]]);
	/// assert_eq!(ragged, Err(Error::RaggedRow { row: 1, expected: 2, found: 1 }));
	/// ```
	pub fn from_rows<R: IntoIterator<Item = Cell>>(
		rows: impl IntoIterator<Item = R>,
	) -> Result<Grid, Error> {
		let mut width = None;
		let mut cells = vec![];
		for (row, line) in rows.into_iter().enumerate() {
			let before = cells.len();
			cells.extend(line);
			let found = cells.len() - before;
			match width {
				None => width = Some(found),
				Some(expected) if expected != found => {
					return Err(Error::RaggedRow {
						row,
						expected,
						found,
					});
				}
				Some(_) => {}
			}
		}
		Grid::from_cells(width.unwrap_or(0), cells)
	}

	/// The number of columns
	pub fn width(&self) -> usize {
		self.width
	}

	/// The number of rows
	pub fn height(&self) -> usize {
		self.height
	}

	/// `(width, height)`
	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	/// The number of Cells, including walls
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// Always `false`, since an empty Grid cannot be created
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// The row-major index of `point`
	pub fn index_of(&self, (row, col): Point) -> usize {
		row * self.width + col
	}

	/// The Point at the row-major `index`
	pub fn point_at(&self, index: usize) -> Point {
		(index / self.width, index % self.width)
	}

	/// The Cell at `point`, if it is on the Grid
	pub fn get(&self, (row, col): Point) -> Option<Cell> {
		if row < self.height && col < self.width {
			Some(self.cells[row * self.width + col])
		} else {
			None
		}
	}

	/// `true` if `point` is on the Grid and not a wall
	pub fn is_open(&self, point: Point) -> bool {
		self.get(point).map_or(false, |cell| !cell.is_wall)
	}

	/// The open Tile next to `point` in `dir`, if there is one
	pub fn neighbor(&self, point: Point, dir: Direction) -> Option<Point> {
		dir.step(point, self.size())
			.filter(|&other| self.is_open(other))
	}

	/// Iterates over all Cells in row-major order
	pub fn cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
		let width = self.width;
		self.cells
			.iter()
			.enumerate()
			.map(move |(i, &cell)| ((i / width, i % width), cell))
	}

	/// The start Tile
	pub fn start(&self) -> Point {
		self.start
	}

	/// All end Tiles in row-major order
	pub fn ends(&self) -> &[Point] {
		&self.ends
	}

	/// `true` if `point` is an end Tile
	pub fn is_end(&self, point: Point) -> bool {
		self.get(point).map_or(false, |cell| cell.is_end)
	}

	/// Draws the Grid with `overlay` deciding the character of each Tile.
	///
	/// `overlay` returns `None` to keep the regular character.
	pub fn render_with(&self, mut overlay: impl FnMut(Point, Cell) -> Option<char>) -> String {
		let mut ret = String::with_capacity((self.width + 1) * self.height);
		for (point, cell) in self.cells() {
			if point.1 == 0 && point.0 != 0 {
				ret.push('\n');
			}
			ret.push(overlay(point, cell).unwrap_or_else(|| cell.to_char()));
		}
		ret
	}
}

impl FromStr for Grid {
	type Err = Error;

	/// Parses `#` as wall, `.` as open, `S` as start and `E` as end.
	///
	/// Trailing empty lines and `\r` are ignored.
	fn from_str(s: &str) -> Result<Grid, Error> {
		let lines: Vec<&str> = s.trim_end().lines().map(|l| l.trim_end_matches('\r')).collect();
		let mut rows = Vec::with_capacity(lines.len());
		for (row, line) in lines.iter().enumerate() {
			let cells = line
				.chars()
				.enumerate()
				.map(|(col, c)| {
					Cell::from_char(c).ok_or(Error::UnknownTile {
						point: (row, col),
						tile: c,
					})
				})
				.collect::<Result<Vec<_>, _>>()?;
			rows.push(cells);
		}
		Grid::from_rows(rows)
	}
}

impl fmt::Display for Grid {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "{}", self.render_with(|_, _| None))
	}
}
