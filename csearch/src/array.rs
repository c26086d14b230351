use std::ops;

use crate::dims::Dims;

/// Row-major 2D storage addressed by [`Dims`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        if !pos.all_non_negative() {
            return None;
        }

        let Dims(x, y) = pos;
        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn contains(&self, pos: Dims) -> bool {
        self.dim_to_idx(pos).is_some()
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    /// Rows from top to bottom, each as a slice.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.buf.chunks(self.width.max(1))
    }

    /// Builds an array from rows, `None` if the rows differ in length or there are none.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self {
            buf: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        let arr = Array2D::new(0u8, 3, 2);
        for (i, pos) in arr.iter_pos().enumerate() {
            assert_eq!(arr.dim_to_idx(pos), Some(i));
        }
        assert_eq!(arr.idx_to_dim(6), None);
    }

    #[test]
    fn out_of_bounds() {
        let arr = Array2D::new(1, 3, 2);
        assert!(arr.get(Dims(-1, 0)).is_none());
        assert!(arr.get(Dims(0, -1)).is_none());
        assert!(arr.get(Dims(3, 0)).is_none());
        assert!(arr.get(Dims(0, 2)).is_none());
        assert_eq!(arr.get(Dims(2, 1)), Some(&1));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        assert!(Array2D::from_rows(vec![vec![1, 2], vec![3]]).is_none());
        assert!(Array2D::<u8>::from_rows(vec![]).is_none());

        let arr = Array2D::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(arr[Dims(0, 1)], 3);
        assert_eq!(arr.rows().count(), 2);
    }
}
