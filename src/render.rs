use colored::Colorize as _;
use csearch::grid::{Cell, Grid};

/// Maze as text with coloured cells, one line per row.
pub fn grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.columns() * 3 + 1));
    for row in grid.cells().rows() {
        for &cell in row {
            out.push_str(&cell_glyph(cell));
        }
        out.push('\n');
    }
    out
}

fn cell_glyph(cell: Cell) -> String {
    let glyph = cell.glyph();
    match cell {
        Cell::Empty => glyph.to_string(),
        Cell::Blocked => glyph.white().on_red().to_string(),
        Cell::Start => glyph.cyan().bold().to_string(),
        Cell::Goal => glyph.magenta().bold().to_string(),
        Cell::Path => glyph.green().bold().to_string(),
    }
}
