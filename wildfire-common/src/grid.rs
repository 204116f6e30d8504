use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A rectangular, shape-immutable container addressed by `(x, y)` cell
/// coordinates. Storage is a flat vector in row-major order (`y` selects the
/// row, `x` the column), so a cell lives at `y * size_x + x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    size_x: usize,
    size_y: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f(x, y)` for every cell in row-major order.
    pub fn from_fn(size_x: usize, size_y: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(size_x * size_y);
        for y in 0..size_y {
            for x in 0..size_x {
                cells.push(f(x, y));
            }
        }
        Self {
            size_x,
            size_y,
            cells,
        }
    }

    /// Builds a grid from row vectors (outer index is `y`). Bails if the
    /// rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size_y = rows.len();
        let size_x = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(size_x * size_y);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != size_x {
                anyhow::bail!("row {} has length {}, expected {}", y, row.len(), size_x);
            }
            cells.extend(row);
        }
        Ok(Self {
            size_x,
            size_y,
            cells,
        })
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.size_x + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size_x && y < self.size_y
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index_of(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if self.in_bounds(x, y) {
            let idx = self.index_of(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Iterates cells together with their `(x, y)` coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let size_x = self.size_x;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| ((idx % size_x, idx / size_x), cell))
    }

    /// True when `other` has the same dimensions, whatever it stores.
    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.size_x == other.size_x && self.size_y == other.size_y
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(size_x: usize, size_y: usize, value: T) -> Self {
        Self {
            size_x,
            size_y,
            cells: vec![value; size_x * size_y],
        }
    }
}

impl Grid<bool> {
    /// Number of set cells.
    pub fn count_true(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }
}

impl<T> std::ops::Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(
            self.in_bounds(x, y),
            "cell ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.size_x,
            self.size_y
        );
        &self.cells[self.index_of(x, y)]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        assert!(
            self.in_bounds(x, y),
            "cell ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.size_x,
            self.size_y
        );
        let idx = self.index_of(x, y);
        &mut self.cells[idx]
    }
}
