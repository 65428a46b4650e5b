//! Brick grid layout
//!
//! Tiles a `width` x `height` rectangle with fixed-size cells. The last column
//! and last row are trimmed so the grid covers the area exactly.

use super::state::Brick;
use crate::config::ConfigError;
use crate::consts::MAX_BRICKS;

/// Column/row geometry of a brick grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub width: f32,
    pub height: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub columns: usize,
    pub rows: usize,
}

impl GridLayout {
    pub fn new(
        width: f32,
        height: f32,
        cell_width: f32,
        cell_height: f32,
    ) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("grid width", width),
            ("grid height", height),
            ("cell width", cell_width),
            ("cell height", cell_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let columns = cells_along(width, cell_width);
        let rows = cells_along(height, cell_height);
        match columns.checked_mul(rows) {
            Some(n) if n <= MAX_BRICKS => {}
            _ => {
                return Err(ConfigError::GridTooLarge {
                    columns,
                    rows,
                    max: MAX_BRICKS,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cell_width,
            cell_height,
            columns,
            rows,
        })
    }

    /// Total brick count
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of cells in `column` (last column absorbs the remainder)
    pub fn column_width(&self, column: usize) -> f32 {
        if column + 1 == self.columns {
            self.width - (self.columns - 1) as f32 * self.cell_width
        } else {
            self.cell_width
        }
    }

    /// Height of cells in `row` (last row absorbs the remainder)
    pub fn row_height(&self, row: usize) -> f32 {
        if row + 1 == self.rows {
            self.height - (self.rows - 1) as f32 * self.cell_height
        } else {
            self.cell_height
        }
    }

    /// All bricks, alive, column by column (top to bottom within a column)
    pub fn bricks(&self) -> Vec<Brick> {
        let mut bricks = Vec::with_capacity(self.len());
        for c in 0..self.columns {
            let x = c as f32 * self.cell_width;
            let w = self.column_width(c);
            for r in 0..self.rows {
                let y = r as f32 * self.cell_height;
                bricks.push(Brick::new(x, y, w, self.row_height(r)));
            }
        }
        bricks
    }
}

/// ceil(extent / cell), at least one cell
fn cells_along(extent: f32, cell: f32) -> usize {
    let n = (extent / cell).ceil() as usize;
    let n = n.max(1);
    // Guard against float rounding producing an empty trailing cell
    if n > 1 && (n - 1) as f32 * cell >= extent {
        n - 1
    } else {
        n
    }
}
