use std::sync::{PoisonError, RwLock};

use pilot_core::{Point, PositionFeed};

/// Position cell written by the capture pipeline and read by commands.
#[derive(Debug, Default)]
pub struct SharedPosition {
    point: RwLock<Point>,
}

impl SharedPosition {
    pub fn new(point: Point) -> Self {
        Self {
            point: RwLock::new(point),
        }
    }

    /// Publishes a new estimate.
    pub fn set(&self, point: Point) {
        *self.point.write().unwrap_or_else(PoisonError::into_inner) = point;
    }
}

impl PositionFeed for SharedPosition {
    fn current_position(&self) -> Point {
        *self.point.read().unwrap_or_else(PoisonError::into_inner)
    }
}
