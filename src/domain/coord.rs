/// A grid cell position as (column, row).
/// Coordinates are unbounded; `Bounds` decides which ones the engine looks at.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Shift by a relative offset, or None if either axis leaves the `i32` range
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.col.checked_add(dx), self.row.checked_add(dy)) {
            (Some(col), Some(row)) => Some(Self { col, row }),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

/// Logical size of the grid in columns and rows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells inside `[0, width) x [0, height)`
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the engine considers `pos` part of the grid.
    /// The upper edge is inclusive: column `width` and row `height` still count.
    pub fn admits(&self, pos: Coord) -> bool {
        pos.col >= 0
            && pos.row >= 0
            && i64::from(pos.col) <= i64::from(self.width)
            && i64::from(pos.row) <= i64::from(self.height)
    }
}
