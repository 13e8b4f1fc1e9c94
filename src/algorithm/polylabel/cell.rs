use std::cmp::Ordering;
use std::f64::consts::SQRT_2;

use geo::{Coord, Point, Polygon};

use super::distance::signed_distance_unchecked;

/// A square region of the search space.
///
/// `distance` is the signed distance from `center` to the polygon boundary, and `max` bounds the
/// distance achievable anywhere inside the cell: no point is farther than `half_size * √2` from
/// the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub center: Coord,
    pub half_size: f64,
    pub distance: f64,
    pub max: f64,
}

impl Cell {
    pub fn new(center: Coord, half_size: f64, polygon: &Polygon) -> Self {
        let distance = signed_distance_unchecked(center, polygon);
        Self {
            center,
            half_size,
            distance,
            max: distance + half_size * SQRT_2,
        }
    }

    pub fn point(&self) -> Point {
        self.center.into()
    }

    /// The four half-size quadrants of this cell.
    pub fn split(&self, polygon: &Polygon) -> [Cell; 4] {
        let h = self.half_size / 2.;
        let Coord { x, y } = self.center;
        [
            Cell::new(Coord { x: x - h, y: y - h }, h, polygon),
            Cell::new(Coord { x: x + h, y: y - h }, h, polygon),
            Cell::new(Coord { x: x - h, y: y + h }, h, polygon),
            Cell::new(Coord { x: x + h, y: y + h }, h, polygon),
        ]
    }
}

/// Orders cells by their upper bound, so that a max-heap yields the most promising cell first.
pub fn by_upper_bound(a: &Cell, b: &Cell) -> Ordering {
    a.max.total_cmp(&b.max)
}
