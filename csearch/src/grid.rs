use std::{fmt, str::FromStr};

use rand::{thread_rng, Rng as _, SeedableRng as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{array::Array2D, dims::Dims, heuristic, Random};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Blocked,
    Start,
    Goal,
    Path,
}

impl Cell {
    /// Three character wide representation used by [`Grid`]'s `Display`.
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => "   ",
            Cell::Blocked => " X ",
            Cell::Start => " S ",
            Cell::Goal => " G ",
            Cell::Path => " * ",
        }
    }

    pub fn is_blocked(self) -> bool {
        self == Cell::Blocked
    }

    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' | '#' => Some(Cell::Blocked),
            'S' => Some(Cell::Start),
            'G' => Some(Cell::Goal),
            '*' => Some(Cell::Path),
            _ => None,
        }
    }
}

/// Upper bound on `rows * columns` for generated grids.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("Invalid grid size: {rows}x{columns}")]
    InvalidSize { rows: usize, columns: usize },
    #[error("Blocking density must be between 0 and 1, got {0}")]
    InvalidDensity(f64),
    #[error("{what} {pos} is outside of the grid")]
    OutOfBounds { what: &'static str, pos: Dims },
    #[error("Unknown cell {ch:?} on line {line}, column {column}")]
    UnknownCell {
        ch: char,
        line: usize,
        column: usize,
    },
    #[error("Rows of the grid have different lengths")]
    RaggedRows,
    #[error("Grid has no {0} cell")]
    Missing(&'static str),
    #[error("Grid has more than one {0} cell")]
    Duplicate(&'static str),
}

/// Parameters of a randomly generated grid.
///
/// Start and goal are chosen randomly when not given: the start in the first two columns, the goal
/// in the last two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
    /// Probability that a single cell is blocked.
    pub density: f64,
    #[serde(default)]
    pub start: Option<Dims>,
    #[serde(default)]
    pub goal: Option<Dims>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 6,
            density: 0.2,
            start: None,
            goal: None,
            seed: None,
        }
    }
}

impl GridConfig {
    pub fn size(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn density(mut self, value: f64) -> Self {
        self.density = value;
        self
    }

    pub fn start(mut self, value: Dims) -> Self {
        self.start = Some(value);
        self
    }

    pub fn goal(mut self, value: Dims) -> Self {
        self.goal = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }
}

/// Rectangular maze of open and blocked cells with one start and one goal.
///
/// This is the collaborator the search engine works on: [`start`](Grid::start),
/// [`is_goal`](Grid::is_goal), [`moves`](Grid::moves) and one of the distance heuristics.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Array2D<Cell>,
    start: Dims,
    goal: Dims,
    seed: Option<u64>,
}

impl Grid {
    /// Generates a grid, seeding the generator from `config.seed` or from a fresh random seed.
    pub fn generate(config: &GridConfig) -> Result<Self, GridError> {
        let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);

        let mut grid = Self::generate_with(config, &mut rng)?;
        grid.seed = Some(seed);
        Ok(grid)
    }

    pub fn generate_with(config: &GridConfig, rng: &mut Random) -> Result<Self, GridError> {
        let GridConfig {
            rows,
            columns,
            density,
            ..
        } = *config;

        let too_large = rows > i32::MAX as usize
            || columns > i32::MAX as usize
            || rows.checked_mul(columns).map_or(true, |cells| cells > MAX_CELLS);
        if rows == 0 || columns == 0 || too_large {
            return Err(GridError::InvalidSize { rows, columns });
        }
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }

        let (w, h) = (columns as i32, rows as i32);
        let start = config
            .start
            .unwrap_or_else(|| Dims(rng.gen_range(0..w.min(2)), rng.gen_range(0..h)));
        let goal = config
            .goal
            .unwrap_or_else(|| Dims(rng.gen_range((w - 2).max(0)..w), rng.gen_range(0..h)));

        let mut cells = Array2D::new(Cell::Empty, columns, rows);
        for what in [("start", start), ("goal", goal)] {
            if !cells.contains(what.1) {
                return Err(GridError::OutOfBounds {
                    what: what.0,
                    pos: what.1,
                });
            }
        }

        for pos in Dims::iter_fill(Dims::ZERO, cells.size()) {
            if rng.gen::<f64>() < density {
                cells[pos] = Cell::Blocked;
            }
        }

        let mut grid = Self {
            cells,
            start,
            goal,
            seed: None,
        };
        grid.restore_endpoints();

        log::debug!(
            "Generated {}x{} grid, start {}, goal {}",
            rows,
            columns,
            start,
            goal
        );

        Ok(grid)
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn goal(&self) -> Dims {
        self.goal
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }

    pub fn columns(&self) -> usize {
        self.cells.width()
    }

    /// Seed the grid was generated from, `None` for parsed grids.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn cell(&self, pos: Dims) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    pub fn is_open(&self, pos: Dims) -> bool {
        self.cell(pos).is_some_and(|c| !c.is_blocked())
    }

    pub fn is_goal(&self, pos: &Dims) -> bool {
        *pos == self.goal
    }

    /// Open orthogonal neighbours of `pos`, in the order left, up, down, right.
    pub fn moves(&self, pos: &Dims) -> Vec<Dims> {
        [Dims::LEFT, Dims::UP, Dims::DOWN, Dims::RIGHT]
            .into_iter()
            .map(|dir| *pos + dir)
            .filter(|&next| self.is_open(next))
            .collect()
    }

    pub fn chebyshev(&self) -> impl Fn(&Dims) -> f64 + Copy {
        heuristic::chebyshev(self.goal)
    }

    pub fn manhattan(&self) -> impl Fn(&Dims) -> f64 + Copy {
        heuristic::manhattan(self.goal)
    }

    pub fn mark_path(&mut self, path: &[Dims]) {
        self.paint(path, Cell::Path);
    }

    pub fn clear_path(&mut self, path: &[Dims]) {
        self.paint(path, Cell::Empty);
    }

    fn paint(&mut self, path: &[Dims], cell: Cell) {
        for &pos in path {
            if let Some(slot) = self.cells.get_mut(pos) {
                *slot = cell;
            }
        }
        self.restore_endpoints();
    }

    fn restore_endpoints(&mut self) {
        self.cells[self.start] = Cell::Start;
        self.cells[self.goal] = Cell::Goal;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                f.write_str(cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses one character per cell: `.` empty, `X` blocked, `S` start, `G` goal, `*` path.
    /// Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (line_idx, line) in s.lines().map(str::trim_end).enumerate() {
            if line.is_empty() {
                continue;
            }

            let y = rows.len() as i32;
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(GridError::UnknownCell {
                    ch,
                    line: line_idx + 1,
                    column: x + 1,
                })?;

                let slot = match cell {
                    Cell::Start => Some((&mut start, "start")),
                    Cell::Goal => Some((&mut goal, "goal")),
                    _ => None,
                };
                if let Some((slot, what)) = slot {
                    if slot.replace(Dims(x as i32, y)).is_some() {
                        return Err(GridError::Duplicate(what));
                    }
                }

                row.push(cell);
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(GridError::InvalidSize {
                rows: 0,
                columns: 0,
            });
        }

        let cells = Array2D::from_rows(rows).ok_or(GridError::RaggedRows)?;
        Ok(Self {
            cells,
            start: start.ok_or(GridError::Missing("start"))?,
            goal: goal.ok_or(GridError::Missing("goal"))?,
            seed: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let grid: Grid = "S.X\n..G\n".parse().unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.start(), Dims(0, 0));
        assert_eq!(grid.goal(), Dims(2, 1));
        assert_eq!(grid.cell(Dims(2, 0)), Some(Cell::Blocked));
        assert_eq!(grid.to_string(), " S     X \n       G \n");
    }

    #[test]
    fn parse_errors() {
        assert_eq!("S..\n..".parse::<Grid>(), Err(GridError::RaggedRows));
        assert_eq!("S..".parse::<Grid>(), Err(GridError::Missing("goal")));
        assert_eq!("..G".parse::<Grid>(), Err(GridError::Missing("start")));
        assert_eq!("SSG".parse::<Grid>(), Err(GridError::Duplicate("start")));
        assert_eq!(
            "S?G".parse::<Grid>(),
            Err(GridError::UnknownCell {
                ch: '?',
                line: 1,
                column: 2
            })
        );
    }

    #[test]
    fn moves_order_and_walls() {
        let grid: Grid = "
            .X.
            .S.
            .XG
        "
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .parse()
        .unwrap();

        assert_eq!(grid.moves(&Dims(1, 1)), vec![Dims(0, 1), Dims(2, 1)]);
        assert_eq!(grid.moves(&Dims(0, 0)), vec![Dims(0, 1)]);
        assert_eq!(grid.moves(&Dims(2, 2)), vec![Dims(2, 1)]);
    }

    #[test]
    fn rightward_move_checks_the_target_cell() {
        let grid: Grid = "SX\n.G".parse().unwrap();
        assert!(grid.moves(&Dims(0, 0)).iter().all(|&p| p != Dims(1, 0)));
    }

    #[test]
    fn mark_and_clear_keep_endpoints() {
        let mut grid: Grid = "S..\n..G".parse().unwrap();
        let path = [Dims(0, 0), Dims(1, 0), Dims(2, 0), Dims(2, 1)];

        grid.mark_path(&path);
        assert_eq!(grid.to_string(), " S  *  * \n       G \n");

        grid.clear_path(&path);
        assert_eq!(grid.to_string(), " S       \n       G \n");
    }

    #[test]
    fn generation_is_seeded() {
        let config = GridConfig::default().size(10, 12).seed(42);
        let a = Grid::generate(&config).unwrap();
        let b = Grid::generate(&config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed(), Some(42));
        assert_eq!(a.rows(), 10);
        assert_eq!(a.columns(), 12);
    }

    #[test]
    fn generated_endpoints() {
        for seed in 0..50 {
            let grid = Grid::generate(&GridConfig::default().seed(seed)).unwrap();
            assert!(grid.start().column() < 2);
            assert!(grid.goal().column() >= 4);
            assert_eq!(grid.cell(grid.start()), Some(Cell::Start));
            assert_eq!(grid.cell(grid.goal()), Some(Cell::Goal));
        }
    }

    #[test]
    fn density_extremes() {
        let open = Grid::generate(&GridConfig::default().density(0.0).seed(1)).unwrap();
        assert!(open.cells().iter().all(|c| !c.is_blocked()));

        let full = Grid::generate(&GridConfig::default().density(1.0).seed(1)).unwrap();
        let blocked = full.cells().iter().filter(|c| c.is_blocked()).count();
        assert_eq!(blocked, 6 * 6 - 2);
    }

    #[test]
    fn invalid_configs() {
        assert_eq!(
            Grid::generate(&GridConfig::default().size(0, 4)),
            Err(GridError::InvalidSize {
                rows: 0,
                columns: 4
            })
        );
        assert_eq!(
            Grid::generate(&GridConfig::default().size(100_000, 100_000)),
            Err(GridError::InvalidSize {
                rows: 100_000,
                columns: 100_000
            })
        );
        assert_eq!(
            Grid::generate(&GridConfig::default().size(usize::MAX, 2)),
            Err(GridError::InvalidSize {
                rows: usize::MAX,
                columns: 2
            })
        );
        assert_eq!(
            Grid::generate(&GridConfig::default().density(1.5)),
            Err(GridError::InvalidDensity(1.5))
        );
        assert!(matches!(
            Grid::generate(&GridConfig::default().start(Dims(6, 0))),
            Err(GridError::OutOfBounds { what: "start", .. })
        ));
    }
}
