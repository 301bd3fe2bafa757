//! Static obstacle grid

use std::fmt;

use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::vector::Vector;

/// What a grid cell holds. Empty cells are `None` in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Obstacle {
    Wall,
    Lava,
}

impl Obstacle {
    /// `x` is a wall, `!` is lava, anything else is empty
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Obstacle::Wall => "wall",
            Obstacle::Lava => "lava",
        }
    }
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row-major obstacle cells. Rows may differ in length; missing cells are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Option<Obstacle>>>,
    width: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Option<Obstacle>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Longest row length
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Option<Obstacle>>] {
        &self.rows
    }

    /// Cell content, `None` for empty or missing cells
    pub fn cell(&self, x: usize, y: usize) -> Option<Obstacle> {
        self.rows.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// First obstacle a box at `pos` with `size` would touch.
    ///
    /// Leaving the grid sideways or through the top hits a wall; dropping
    /// below the bottom hits lava. Inside the grid, covered cells are
    /// scanned row by row and the first non-empty one wins.
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        let span = Aabb::from_pos_size(pos, size).cell_span();

        // Outside the grid
        if span.left < 0 || span.right > self.width as i64 || span.top < 0 {
            return Some(Obstacle::Wall);
        }
        if span.bottom > self.height() as i64 {
            return Some(Obstacle::Lava);
        }

        // Covered cells, row-major
        for y in span.rows() {
            for x in span.columns() {
                if let Some(obstacle) = self.cell(x, y) {
                    return Some(obstacle);
                }
            }
        }
        None
    }
}
