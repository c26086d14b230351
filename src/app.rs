use std::io::{self, Write};

use csearch::{
    dims::Dims,
    grid::Grid,
    heuristic::Zero,
    progress::Budget,
    search::{LogObserver, SearchError, Searcher, Solution},
    select_path,
};
use log::info;

use crate::{
    error::Error,
    render,
    settings::{HeuristicKind, Settings, Strategy},
};

/// Generates the maze described by `settings` and prints it solved by every selected strategy.
pub fn run(settings: &Settings) -> Result<(), Error> {
    let mut grid = Grid::generate(&settings.grid_config())?;
    if let Some(seed) = grid.seed() {
        info!("Maze seed: {}", seed);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for &strategy in settings.get_algorithm().strategies() {
        let result = solve(&grid, strategy, settings.get_heuristic(), settings.budget());
        print_result(&mut out, &mut grid, strategy, result)?;
    }

    Ok(())
}

pub fn solve(
    grid: &Grid,
    strategy: Strategy,
    heuristic: HeuristicKind,
    budget: Budget,
) -> Result<Option<Solution<Dims>>, SearchError> {
    let mut searcher = Searcher::new()
        .with_budget(budget)
        .with_observer(LogObserver);
    let start = grid.start();
    let goal = |pos: &Dims| grid.is_goal(pos);
    let moves = |pos: &Dims| grid.moves(pos);

    match (strategy, heuristic) {
        (Strategy::Dfs, _) => searcher.dfs(start, goal, moves),
        (Strategy::AStar, HeuristicKind::Chebyshev) => {
            searcher.a_star(start, goal, moves, grid.chebyshev())
        }
        (Strategy::AStar, HeuristicKind::Manhattan) => {
            searcher.a_star(start, goal, moves, grid.manhattan())
        }
        (Strategy::AStar, HeuristicKind::Zero) => searcher.a_star(start, goal, moves, Zero),
    }
}

fn print_result<W: Write>(
    out: &mut W,
    grid: &mut Grid,
    strategy: Strategy,
    result: Result<Option<Solution<Dims>>, SearchError>,
) -> io::Result<()> {
    writeln!(out, "{}", strategy.title())?;
    writeln!(out, "{}", render::grid(grid))?;

    match result {
        Ok(Some(solution)) => {
            let path = select_path(&solution);
            grid.mark_path(&path);
            writeln!(out, "{}", render::grid(grid))?;
            let stats = solution.stats();
            writeln!(
                out,
                "Path of {} moves, {} nodes expanded, {} discovered",
                solution.path_len(),
                stats.expanded,
                stats.discovered
            )?;
            grid.clear_path(&path);
        }
        Ok(None) => writeln!(out, "No solution found")?,
        Err(err) => writeln!(out, "Search stopped: {}", err)?,
    }

    writeln!(out)
}
