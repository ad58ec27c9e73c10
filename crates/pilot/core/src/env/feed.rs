//! Position feedback and path planning ports.
use crate::geometry::Point;

/// Latest position estimate produced by the capture pipeline.
///
/// Reads may be stale. Callers re-sample after every action and bound their
/// loops instead of waiting for a fresh frame.
pub trait PositionFeed: Send + Sync {
    fn current_position(&self) -> Point;
}

/// Turns the current layout into an ordered list of waypoints.
///
/// The returned path excludes `from` and ends at (or near) `to`. An empty
/// path means there is nothing to walk.
pub trait PathPlanner: Send + Sync {
    fn shortest_path(&self, from: Point, to: Point) -> Vec<Point>;
}

/// Planner for maps without a recorded layout: the target is the only waypoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectPath;

impl PathPlanner for DirectPath {
    fn shortest_path(&self, _from: Point, to: Point) -> Vec<Point> {
        vec![to]
    }
}
