//! Estimates of the remaining cost to a goal, used by [`AStar`](crate::search::AStar).
//!
//! A heuristic must never return a negative number or NaN. It has to be admissible (never
//! overestimate the true remaining cost) for A* to return a shortest path.

use crate::dims::Dims;

pub trait Heuristic<S> {
    fn estimate(&mut self, state: &S) -> f64;
}

impl<S, F> Heuristic<S> for F
where
    F: FnMut(&S) -> f64,
{
    fn estimate(&mut self, state: &S) -> f64 {
        self(state)
    }
}

/// Always 0, turns A* into a uniform cost search.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zero;

impl<S> Heuristic<S> for Zero {
    fn estimate(&mut self, _: &S) -> f64 {
        0.0
    }
}

/// Chebyshev distance, `max(|dx|, |dy|)`, to `goal`.
///
/// Admissible for orthogonal unit moves since it never exceeds the Manhattan distance. Also
/// admissible for 8-directional unit moves.
pub fn chebyshev(goal: Dims) -> impl Fn(&Dims) -> f64 + Copy {
    move |pos: &Dims| (*pos - goal).abs().max_component() as f64
}

/// Manhattan distance, `|dx| + |dy|`, to `goal`.
///
/// Admissible for orthogonal unit moves only.
pub fn manhattan(goal: Dims) -> impl Fn(&Dims) -> f64 + Copy {
    move |pos: &Dims| (*pos - goal).abs().sum() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let goal = Dims(4, 1);
        let mut cheb = chebyshev(goal);
        let mut manh = manhattan(goal);

        assert_eq!(cheb.estimate(&Dims(0, 0)), 4.0);
        assert_eq!(manh.estimate(&Dims(0, 0)), 5.0);
        assert_eq!(cheb.estimate(&goal), 0.0);
        assert_eq!(manh.estimate(&goal), 0.0);
        assert_eq!(cheb.estimate(&Dims(5, 7)), 6.0);
    }

    #[test]
    fn chebyshev_never_exceeds_manhattan() {
        let goal = Dims(3, 2);
        let cheb = chebyshev(goal);
        let manh = manhattan(goal);
        for pos in Dims::iter_fill(Dims(-4, -4), Dims(8, 8)) {
            assert!(cheb(&pos) <= manh(&pos));
        }
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(Heuristic::<Dims>::estimate(&mut Zero, &Dims(9, 9)), 0.0);
    }
}
