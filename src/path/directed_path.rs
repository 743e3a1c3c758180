use crate::{Cost, Direction, Grid, Move, Point, SolverConfig};

/// One of the cheapest Paths from the start to an end Tile.
///
/// Stores the Tiles in the order they are visited, the [`Move`]s that lead from one to the next
/// and the total Cost of those Moves. Rotations do not add a Tile, so `cells` has exactly one
/// more entry than there are [`Move::Forward`]s in `moves`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
	cells: Vec<Point>,
	moves: Vec<Move>,
	cost: Cost,
}

impl Path {
	pub(crate) fn new(cells: Vec<Point>, moves: Vec<Move>, cost: Cost) -> Path {
		debug_assert_eq!(
			cells.len(),
			moves.iter().filter(|m| !m.is_rotation()).count() + 1
		);
		Path { cells, moves, cost }
	}

	/// The visited Tiles, from start to end
	pub fn cells(&self) -> &[Point] {
		&self.cells
	}

	/// The Moves that walk this Path, starting on the start Tile with the configured facing
	pub fn moves(&self) -> &[Move] {
		&self.moves
	}

	/// The total Cost of all Moves
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The first Tile
	pub fn start(&self) -> Point {
		self.cells[0]
	}

	/// The last Tile, which is always an end Tile
	pub fn end(&self) -> Point {
		self.cells[self.cells.len() - 1]
	}

	/// The number of Tiles on the Path
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// Always `false`, a Path contains at least the start
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// The number of 90° turns, counting a U-turn as two
	pub fn turns(&self) -> usize {
		self.moves.iter().filter(|m| m.is_rotation()).count()
	}

	/// Walks the Moves of this Path on `grid`.
	///
	/// Returns the final Tile, the final Direction and the summed Cost of all Moves according to
	/// `config`, or `None` if a step leaves the Grid or walks into a wall.
	///
	/// ## Examples
	/// ```
	/// # use directional_pathfinding::{solve, Direction, SolverConfig};
	/// let config = SolverConfig::default();
	/// let text = "S.\n.E";
	/// let best = solve(text, &config).unwrap().unwrap();
	///
	/// let grid = text.parse().unwrap();
	/// let (end, facing, cost) = best.paths()[0].replay(&grid, &config).unwrap();
	/// assert_eq!(end, (1, 1));
	/// assert_eq!(facing, Direction::South);
	/// assert_eq!(cost, best.cost());
	/// ```
	pub fn replay(&self, grid: &Grid, config: &SolverConfig) -> Option<(Point, Direction, Cost)> {
		let mut pos = grid.start();
		let mut facing = config.start_facing;
		let mut cost = 0;
		for &step in self.moves.iter() {
			match step {
				Move::Forward => {
					pos = grid.neighbor(pos, facing)?;
					cost += config.move_cost;
				}
				Move::RotateLeft => {
					facing = facing.counter_clockwise();
					cost += config.turn_cost;
				}
				Move::RotateRight => {
					facing = facing.clockwise();
					cost += config.turn_cost;
				}
			}
		}
		Some((pos, facing, cost))
	}

	/// Draws `grid` with an arrow on every Tile of the Path, pointing where the Path goes next.
	///
	/// The start and end Tiles keep their markers.
	/// ```
	/// # use directional_pathfinding::solve;
	/// let text = "S..\n#.#\n#.E";
	/// let best = solve(text, &Default::default()).unwrap().unwrap();
	/// assert_eq!(best.paths()[0].render(&text.parse().unwrap()), "Sv.\n#v#\n#>E");
	/// ```
	pub fn render(&self, grid: &Grid) -> String {
		let mut arrows = hashbrown::HashMap::with_capacity(self.cells.len());
		for pair in self.cells.windows(2) {
			if let Some(dir) = Direction::all().find(|&d| d.step(pair[0], grid.size()) == Some(pair[1])) {
				arrows.insert(pair[0], dir.arrow());
			}
		}
		grid.render_with(|point, cell| {
			if cell.is_start || cell.is_end {
				None
			} else {
				arrows.get(&point).copied()
			}
		})
	}
}

use std::ops::Index;

impl Index<usize> for Path {
	type Output = Point;
	fn index(&self, index: usize) -> &Point {
		&self.cells[index]
	}
}

use std::fmt;
impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		write!(fmt, "{:?}", self.cells[0])?;
		for p in self.cells.iter().skip(1) {
			write!(fmt, " -> {:?}", p)?;
		}
		Ok(())
	}
}
