pub mod rect;
pub use rect::Rect;

use crate::geometry::Point;

/// A subset of the plane that can answer containment queries
pub trait Region {
    fn contains(&self, point: &Point) -> bool;
}
