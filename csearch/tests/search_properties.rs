use std::collections::{HashSet, VecDeque};

use csearch::{
    a_star, dfs,
    dims::Dims,
    grid::{Grid, GridConfig},
    heuristic::Zero,
    progress::Budget,
    select_path, SearchError, Searcher,
};

fn shortest_distance(grid: &Grid) -> Option<usize> {
    let mut seen = HashSet::from([grid.start()]);
    let mut queue = VecDeque::from([(grid.start(), 0)]);

    while let Some((pos, dist)) = queue.pop_front() {
        if grid.is_goal(&pos) {
            return Some(dist);
        }
        for next in grid.moves(&pos) {
            if seen.insert(next) {
                queue.push_back((next, dist + 1));
            }
        }
    }

    None
}

fn grids() -> impl Iterator<Item = Grid> {
    (0..150u64).map(|seed| {
        let rows = 3 + (seed % 9) as usize;
        let columns = 4 + (seed % 13) as usize;
        let density = [0.0, 0.1, 0.2, 0.3, 0.45][(seed % 5) as usize];
        let config = GridConfig::default()
            .size(rows, columns)
            .density(density)
            .seed(seed);
        Grid::generate(&config).unwrap()
    })
}

fn assert_valid_path(grid: &Grid, path: &[Dims]) {
    assert_eq!(path.first(), Some(&grid.start()), "{grid}");
    assert_eq!(path.last(), Some(&grid.goal()), "{grid}");
    for pair in path.windows(2) {
        assert!(
            grid.moves(&pair[0]).contains(&pair[1]),
            "{:?} -> {:?} is not a move\n{grid}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn both_engines_agree_on_reachability() {
    for grid in grids() {
        let reachable = shortest_distance(&grid).is_some();
        let goal = |p: &Dims| grid.is_goal(p);
        let moves = |p: &Dims| grid.moves(p);

        assert_eq!(dfs(grid.start(), goal, moves).is_some(), reachable, "{grid}");
        assert_eq!(
            a_star(grid.start(), goal, moves, grid.chebyshev()).is_some(),
            reachable,
            "{grid}"
        );
    }
}

#[test]
fn paths_are_contiguous_and_end_at_the_goal() {
    for grid in grids() {
        let goal = |p: &Dims| grid.is_goal(p);
        let moves = |p: &Dims| grid.moves(p);

        if let Some(found) = dfs(grid.start(), goal, moves) {
            assert!(grid.is_goal(found.state()));
            assert_valid_path(&grid, &select_path(&found));
        }
        if let Some(found) = a_star(grid.start(), goal, moves, grid.manhattan()) {
            assert!(grid.is_goal(found.state()));
            assert_valid_path(&grid, &select_path(&found));
        }
    }
}

#[test]
fn a_star_is_optimal_and_never_worse_than_dfs() {
    for grid in grids() {
        let Some(shortest) = shortest_distance(&grid) else {
            continue;
        };
        let goal = |p: &Dims| grid.is_goal(p);
        let moves = |p: &Dims| grid.moves(p);

        let depth_first = dfs(grid.start(), goal, moves).unwrap();
        let chebyshev = a_star(grid.start(), goal, moves, grid.chebyshev()).unwrap();
        let manhattan = a_star(grid.start(), goal, moves, grid.manhattan()).unwrap();
        let uniform = a_star(grid.start(), goal, moves, Zero).unwrap();

        assert_eq!(chebyshev.path_len(), shortest, "{grid}");
        assert_eq!(manhattan.path_len(), shortest, "{grid}");
        assert_eq!(uniform.path_len(), shortest, "{grid}");
        assert_eq!(chebyshev.cost(), shortest as f64);
        assert!(shortest <= depth_first.path_len(), "{grid}");
    }
}

#[test]
fn repeated_searches_give_the_same_length() {
    for grid in grids().take(40) {
        let goal = |p: &Dims| grid.is_goal(p);
        let moves = |p: &Dims| grid.moves(p);

        let first = dfs(grid.start(), goal, moves).map(|s| s.path_len());
        let second = dfs(grid.start(), goal, moves).map(|s| s.path_len());
        assert_eq!(first, second);

        let first = a_star(grid.start(), goal, moves, grid.chebyshev()).map(|s| s.path_len());
        let second = a_star(grid.start(), goal, moves, grid.chebyshev()).map(|s| s.path_len());
        assert_eq!(first, second);
    }
}

#[test]
fn start_on_goal() {
    let config = GridConfig::default()
        .size(1, 1)
        .start(Dims(0, 0))
        .goal(Dims(0, 0));
    let grid = Grid::generate(&config).unwrap();
    let goal = |p: &Dims| grid.is_goal(p);
    let moves = |p: &Dims| grid.moves(p);

    let found = dfs(grid.start(), goal, moves).unwrap();
    assert!(found.parent().is_none());
    assert_eq!(select_path(&found), vec![Dims(0, 0)]);

    let found = a_star(grid.start(), goal, moves, grid.chebyshev()).unwrap();
    assert!(found.parent().is_none());
    assert_eq!(select_path(&found), vec![Dims(0, 0)]);
}

#[test]
fn corridor_of_five() {
    let config = GridConfig::default()
        .size(1, 5)
        .density(0.0)
        .start(Dims(0, 0))
        .goal(Dims(4, 0));
    let grid = Grid::generate(&config).unwrap();
    let goal = |p: &Dims| grid.is_goal(p);
    let moves = |p: &Dims| grid.moves(p);

    let best = a_star(grid.start(), goal, moves, grid.chebyshev()).unwrap();
    assert_eq!(best.path_len(), 4);
    assert_eq!(select_path(&best).len(), 5);

    let any = dfs(grid.start(), goal, moves).unwrap();
    assert!(any.path_len() >= 4);
}

#[test]
fn exhausted_budget_is_reported() {
    let config = GridConfig::default()
        .size(30, 30)
        .density(0.0)
        .start(Dims(0, 0))
        .goal(Dims(29, 29));
    let grid = Grid::generate(&config).unwrap();
    let mut searcher = Searcher::new().with_budget(Budget::unlimited().max_expansions(10));

    let result = searcher.a_star(
        grid.start(),
        |p| grid.is_goal(p),
        |p| grid.moves(p),
        Zero,
    );
    assert_eq!(result.unwrap_err(), SearchError::BudgetExhausted { expanded: 10 });
    assert_eq!(searcher.last_stats().expanded, 10);
}
