use crate::foundation::core::Position;

/// Spacing left between packed tiles and around their bounding box.
pub const DEFAULT_MARGIN: f64 = 3.0;

/// Greedy packer for a known number of rectangles on a plane starting at `(0, 0)`.
///
/// Tiles are stacked along `y` into columns of roughly `ceil(sqrt(total))` tiles; a new
/// column starts once the current one is full and the next tile would reach the widest
/// extent seen so far. This approximates a square grid without knowing the tile sizes up
/// front. It is not an optimal packing.
#[derive(Clone, Debug)]
pub struct Tiler {
    margin: f64,
    side: usize,
    index: usize,
    x_ref: f64,
    y_ref: f64,
    max_width: f64,
    max_depth: f64,
}

impl Tiler {
    /// A tiler expecting `total` tiles, separated by [`DEFAULT_MARGIN`].
    pub fn new(total: usize) -> Self {
        Self::with_margin(total, DEFAULT_MARGIN)
    }

    /// A tiler expecting `total` tiles, separated by `margin`.
    pub fn with_margin(total: usize, margin: f64) -> Self {
        Self {
            margin,
            side: (total as f64).sqrt().ceil() as usize,
            index: 0,
            x_ref: 0.0,
            y_ref: 0.0,
            max_width: 0.0,
            max_depth: 0.0,
        }
    }

    /// The margin this tiler packs with.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Place the next tile and return the center of the area reserved for it.
    ///
    /// Only `x` and `y` of the result are meaningful; `z` is always zero.
    pub fn next_position(&mut self, width: f64, depth: f64) -> Position {
        self.index += 1;

        // Column height is measured against the widest extent, not the deepest.
        if self.index > self.side && self.y_ref + depth >= self.max_width {
            self.index = 0;
            self.y_ref = 0.0;
            self.x_ref = self.max_width + self.margin;
        }

        let position = Position::new(
            self.x_ref + (width + self.margin) / 2.0,
            self.y_ref + (depth + self.margin) / 2.0,
            0.0,
        );

        self.max_width = self.max_width.max(self.x_ref + width);
        self.max_depth = self.max_depth.max(self.y_ref + depth);
        self.y_ref += depth + self.margin;

        position
    }

    /// Size of the smallest rectangle holding every tile placed so far, plus one
    /// trailing margin per axis. Only `x` (width) and `y` (depth) are set.
    pub fn bounds(&self) -> Position {
        Position::new(self.max_width + self.margin, self.max_depth + self.margin, 0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tiler.rs"]
mod tests;
