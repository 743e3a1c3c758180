use directional_pathfinding::prelude::*;
use nanorand::{Rng, WyRand};

const FIRST_MAZE: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############";

const SECOND_MAZE: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################";

fn check_paths(grid: &Grid, config: &SolverConfig, best: &BestPaths) {
	assert!(best.count() >= 1);
	assert!(best.is_best_tile(grid.start()));
	for path in best.paths() {
		assert_eq!(path.start(), grid.start());
		assert!(grid.is_end(path.end()));
		assert!(best.is_best_tile(path.end()));
		assert_eq!(path.cost(), best.cost());

		let (end, _, cost) = path.replay(grid, config).expect("path walks into a wall");
		assert_eq!(end, path.end());
		assert_eq!(cost, best.cost());
		for &cell in path.cells() {
			assert!(best.is_best_tile(cell));
		}
	}
	let mut all_cells: Vec<_> = best.paths().iter().map(|p| p.cells().to_vec()).collect();
	all_cells.dedup();
	assert_eq!(all_cells.len(), best.count(), "duplicate paths");
}

#[test]
fn first_maze() {
	let grid: Grid = FIRST_MAZE.parse().unwrap();
	let config = SolverConfig::default();
	let best = find_best_paths(&grid, &config).unwrap().unwrap();
	assert_eq!(best.cost(), 7036);
	assert_eq!(best.tiles().len(), 45);
	check_paths(&grid, &config, &best);

	#[rustfmt::skip]
	assert_eq!(
		best.render(&grid),
		"\
###############
#.......#....O#
#.#.###.#.###O#
#.....#.#...#O#
#.###.#####.#O#
#.#.#.......#O#
#.#.#####.###O#
#..OOOOOOOOO#O#
###O#O#####O#O#
#OOO#O....#O#O#
#O#O#O###.#O#O#
#OOOOO#...#O#O#
#O###.#.#.#O#O#
#O..#.....#OOO#
###############"
	);
}

#[test]
fn second_maze() {
	let grid: Grid = SECOND_MAZE.parse().unwrap();
	let config = SolverConfig::default();
	let best = find_best_paths(&grid, &config).unwrap().unwrap();
	assert_eq!(best.cost(), 11048);
	assert_eq!(best.tiles().len(), 64);
	check_paths(&grid, &config, &best);
}

#[test]
fn configs_agree() {
	for text in [FIRST_MAZE, SECOND_MAZE] {
		let grid: Grid = text.parse().unwrap();
		let reference = find_best_paths(&grid, &SolverConfig::default())
			.unwrap()
			.unwrap();
		for config in [SolverConfig::QUARTER_TURNS, SolverConfig::FIRST_GOAL] {
			let best = find_best_paths(&grid, &config).unwrap().unwrap();
			assert_eq!(best.cost(), reference.cost());
			assert_eq!(best.tiles(), reference.tiles());
			let cells = |b: &BestPaths| b.paths().iter().map(|p| p.cells().to_vec()).collect::<Vec<_>>();
			assert_eq!(cells(&best), cells(&reference));
		}
	}
}

#[test]
fn straight_corridor() {
	let best = solve("S.........E", &Default::default()).unwrap().unwrap();
	assert_eq!(best.cost(), 10);
	assert_eq!(best.count(), 1);
	assert_eq!(best.paths()[0].turns(), 0);
	assert!(best.paths()[0].moves().iter().all(|&m| m == Move::Forward));
}

#[test]
fn end_behind_start() {
	let text = "E....S";
	for config in [SolverConfig::default(), SolverConfig::QUARTER_TURNS] {
		let grid: Grid = text.parse().unwrap();
		let best = find_best_paths(&grid, &config).unwrap().unwrap();
		assert_eq!(best.cost(), 2000 + 5);
		assert_eq!(best.count(), 1);
		assert_eq!(best.paths()[0].turns(), 2);
		check_paths(&grid, &config, &best);
	}
}

#[test]
fn open_room() {
	let text = "\
S....
.....
.....
.....
....E";
	let grid: Grid = text.parse().unwrap();
	let config = SolverConfig::default();
	let best = find_best_paths(&grid, &config).unwrap().unwrap();
	// 8 steps and a single turn. Every other shortest grid path needs at least two turns.
	assert_eq!(best.cost(), 1008);
	assert_eq!(best.count(), 1);
	assert_eq!(best.paths()[0].turns(), 1);
	assert_eq!(best.tiles().len(), 9);
	check_paths(&grid, &config, &best);
}

#[test]
fn open_room_cheap_turns() {
	// with turns as cheap as steps, every staircase competes
	let text = "\
S..
...
..E";
	let grid: Grid = text.parse().unwrap();
	let config = SolverConfig {
		turn_cost: 1,
		..Default::default()
	};
	let best = find_best_paths(&grid, &config).unwrap().unwrap();
	// East, turn, South
	assert_eq!(best.cost(), 5);
	assert_eq!(best.count(), 1);

	let config = SolverConfig {
		start_facing: Direction::South,
		turn_cost: 1,
		..Default::default()
	};
	let best = find_best_paths(&grid, &config).unwrap().unwrap();
	assert_eq!(best.cost(), 5);
	assert_eq!(best.paths()[0].cells()[1], (1, 0));
}

#[test]
fn enclosed_end() {
	let text = "\
S.....
..###.
..#E#.
..###.";
	assert_eq!(solve(text, &Default::default()), Ok(None));
}

#[test]
fn multiple_ends() {
	let text = "E..S.....E";
	let best = solve(text, &Default::default()).unwrap().unwrap();
	// the far end straight ahead beats the near one behind
	assert_eq!(best.cost(), 6);
	assert_eq!(best.paths()[0].end(), (0, 9));
}

#[test]
fn zero_cost_rejected() {
	let config = SolverConfig {
		move_cost: 0,
		..Default::default()
	};
	assert_eq!(solve("S.E", &config), Err(Error::ZeroCost));
}

#[test]
fn overflowing_costs_rejected() {
	let config = SolverConfig {
		turn_cost: usize::MAX / 2 + 1,
		..Default::default()
	};
	assert_eq!(solve("S.\n.E", &config), Err(Error::CostOverflow));

	let config = SolverConfig {
		turn_cost: usize::MAX / 4,
		..Default::default()
	};
	assert_eq!(solve("S.\n.E", &config), Err(Error::CostOverflow));
}

#[test]
fn huge_costs() {
	// 16 Nodes, so every Cost stays below 16 * 2 * turn_cost
	let turn_cost = usize::MAX / 64;
	let config = SolverConfig {
		turn_cost,
		..Default::default()
	};
	let best = solve("S.\n.E", &config).unwrap().unwrap();
	assert_eq!(best.cost(), turn_cost + 2);
	let grid: Grid = "S.\n.E".parse().unwrap();
	let (end, _, cost) = best.paths()[0].replay(&grid, &config).unwrap();
	assert_eq!(end, (1, 1));
	assert_eq!(cost, best.cost());
}

fn random_grid(rng: &mut WyRand, width: usize, height: usize) -> Grid {
	let mut text = String::new();
	for row in 0..height {
		for col in 0..width {
			let c = if (row, col) == (0, 0) {
				'S'
			} else if (row, col) == (height - 1, width - 1) {
				'E'
			} else if rng.generate_range(0_u32..10) < 3 {
				'#'
			} else {
				'.'
			};
			text.push(c);
		}
		text.push('\n');
	}
	text.parse().unwrap()
}

#[test]
fn random_grids() {
	let _ = env_logger::builder().is_test(true).try_init();

	let mut rng = WyRand::new_seed(16);
	let mut solved = 0;
	for _ in 0..40 {
		let grid = random_grid(&mut rng, 9, 7);
		let config = SolverConfig::default();
		let Some(best) = find_best_paths(&grid, &config).unwrap() else {
			continue;
		};
		solved += 1;
		check_paths(&grid, &config, &best);

		let again = find_best_paths(&grid, &config).unwrap().unwrap();
		assert_eq!(best, again);

		let quarter = find_best_paths(&grid, &SolverConfig::QUARTER_TURNS)
			.unwrap()
			.unwrap();
		assert_eq!(quarter.cost(), best.cost());
		assert_eq!(quarter.tiles(), best.tiles());
	}
	assert!(solved > 0);
}
