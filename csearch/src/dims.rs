use std::{
    fmt,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

/// Location on a grid, `Dims(x, y)` where `x` is the column and `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    pub const LEFT: Dims = Dims(-1, 0);
    pub const UP: Dims = Dims(0, -1);
    pub const DOWN: Dims = Dims(0, 1);
    pub const RIGHT: Dims = Dims(1, 0);

    pub fn from_row_col(row: i32, column: i32) -> Self {
        Dims(column, row)
    }

    pub fn row(self) -> i32 {
        self.1
    }

    pub fn column(self) -> i32 {
        self.0
    }

    pub fn abs(self) -> Dims {
        Dims(self.0.abs(), self.1.abs())
    }

    pub fn max_component(self) -> i32 {
        self.0.max(self.1)
    }

    pub fn sum(self) -> i32 {
        self.0 + self.1
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    /// Every position in the rectangle `from..to`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    /// Whether `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Dims) -> bool {
        (self - other).abs().sum() == 1
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl From<(i32, i32)> for Dims {
    fn from(tuple: (i32, i32)) -> Self {
        Dims(tuple.0, tuple.1)
    }
}

impl From<Dims> for (i32, i32) {
    fn from(val: Dims) -> Self {
        (val.0, val.1)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, col {})", self.row(), self.column())
    }
}
