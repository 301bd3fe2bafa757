//! Axis-aligned box math shared by actor/actor and actor/grid checks
//!
//! Boxes are half-open: a box at `pos` with `size` covers
//! `[pos.x, pos.x + size.x) x [pos.y, pos.y + size.y)`, so boxes that only
//! share an edge or a corner do not overlap.

use std::ops::Range;

use super::vector::Vector;

/// Edges of a box in grid units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    #[inline]
    pub fn from_pos_size(pos: Vector, size: Vector) -> Self {
        Self {
            left: pos.x(),
            right: pos.x() + size.x(),
            top: pos.y(),
            bottom: pos.y() + size.y(),
        }
    }

    /// Half-open overlap test
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(other.left >= self.right
            || other.top >= self.bottom
            || other.right <= self.left
            || other.bottom <= self.top)
    }

    /// Whole cells touched by the box, floored on the near edges and ceiled on the far ones
    pub fn cell_span(&self) -> CellSpan {
        CellSpan {
            left: self.left.floor() as i64,
            right: self.right.ceil() as i64,
            top: self.top.floor() as i64,
            bottom: self.bottom.ceil() as i64,
        }
    }
}

/// Integer cell bounds of a box. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
}

impl CellSpan {
    /// Column range, clamped at zero so it can index a row
    pub fn columns(&self) -> Range<usize> {
        self.left.max(0) as usize..self.right.max(0) as usize
    }

    /// Row range, clamped at zero so it can index the grid
    pub fn rows(&self) -> Range<usize> {
        self.top.max(0) as usize..self.bottom.max(0) as usize
    }
}
