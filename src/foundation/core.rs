use std::{
    ops::{Add, AddAssign},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

/// An `(x, y, z)` triple.
///
/// For a laid-out block, `x`/`y` are offsets from the parent's center and `z` is the
/// block's base along the stacking axis. `z` is only serialized when non-zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// Offset along the width axis.
    pub x: f64,
    /// Offset along the depth axis.
    pub y: f64,
    /// Offset along the stacking axis.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub z: f64,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl Position {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Build a position from its three components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Cooperative cancellation flag shared between a caller and a running layout or walk.
///
/// Clones observe the same flag. Nothing is preempted: the flag is only read at the
/// points where layout descends into a child and where a walk is about to visit a block.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A token that has not been canceled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether [`CancelToken::cancel`] has been called on this token or any clone.
    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
