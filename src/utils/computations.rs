use crate::geometry::Point;

pub fn distance_squared(p1: &Point, p2: &Point) -> f64 {
    let x = p1.x - p2.x;
    let y = p1.y - p2.y;
    x * x + y * y
}
