//! Pole of inaccessibility: the interior point farthest from a polygon's boundary.
//!
//! Based on Vladimir Agafonkin's algorithm <https://www.mapbox.com/blog/polygon-center/>. The
//! bounding box is tiled with square cells, and cells are explored best-first by the upper bound
//! on the distance achievable inside them. A cell is split into quadrants until no cell left in
//! the frontier can beat the best point found by more than the requested precision.

mod cell;
mod distance;
mod frontier;
mod multi;
mod search;

pub use cell::{by_upper_bound, Cell};
pub use distance::{signed_distance, validate_polygon};
pub use frontier::{CellComparator, Frontier};
pub use multi::search_multi;
pub use search::{search, PoleOfInaccessibility, SearchStatus};

use geo::{Geometry, MultiPolygon, Point, Polygon, Rect, Triangle};

use crate::error::{PolylabelError, Result};
use crate::options::PolylabelOptions;

/// Calculate a label position for a polygonal geometry.
///
/// # Examples
///
/// ```
/// use geo::{point, polygon};
///
/// use geoarrow_polylabel::algorithm::polylabel::{Polylabel, SearchStatus};
/// use geoarrow_polylabel::PolylabelOptions;
///
/// // An L shape
/// let polygon = polygon![
///     (x: 0.0, y: 0.0),
///     (x: 4.0, y: 0.0),
///     (x: 4.0, y: 1.0),
///     (x: 1.0, y: 1.0),
///     (x: 1.0, y: 4.0),
///     (x: 0.0, y: 4.0),
///     (x: 0.0, y: 0.0),
/// ];
///
/// let label = polygon.polylabel(&PolylabelOptions::new(0.1)).unwrap();
/// assert_eq!(label.status, SearchStatus::Converged);
/// assert!(label.distance >= 0.4);
/// ```
pub trait Polylabel {
    type Output;

    fn polylabel(&self, options: &PolylabelOptions) -> Self::Output;
}

impl Polylabel for Polygon {
    type Output = Result<PoleOfInaccessibility>;

    fn polylabel(&self, options: &PolylabelOptions) -> Self::Output {
        search(self, options)
    }
}

impl Polylabel for MultiPolygon {
    type Output = Result<PoleOfInaccessibility>;

    fn polylabel(&self, options: &PolylabelOptions) -> Self::Output {
        search_multi(self, options)
    }
}

impl Polylabel for Rect {
    type Output = Result<PoleOfInaccessibility>;

    fn polylabel(&self, options: &PolylabelOptions) -> Self::Output {
        search(&self.to_polygon(), options)
    }
}

impl Polylabel for Triangle {
    type Output = Result<PoleOfInaccessibility>;

    fn polylabel(&self, options: &PolylabelOptions) -> Self::Output {
        search(&self.to_polygon(), options)
    }
}

impl Polylabel for Geometry {
    type Output = Result<PoleOfInaccessibility>;

    fn polylabel(&self, options: &PolylabelOptions) -> Self::Output {
        match self {
            Geometry::Polygon(g) => g.polylabel(options),
            Geometry::MultiPolygon(g) => g.polylabel(options),
            Geometry::Rect(g) => g.polylabel(options),
            Geometry::Triangle(g) => g.polylabel(options),
            Geometry::Point(_) => Err(incorrect_type("Point")),
            Geometry::Line(_) => Err(incorrect_type("Line")),
            Geometry::LineString(_) => Err(incorrect_type("LineString")),
            Geometry::MultiPoint(_) => Err(incorrect_type("MultiPoint")),
            Geometry::MultiLineString(_) => Err(incorrect_type("MultiLineString")),
            Geometry::GeometryCollection(_) => Err(incorrect_type("GeometryCollection")),
        }
    }
}

fn incorrect_type(name: &str) -> PolylabelError {
    PolylabelError::IncorrectGeometryType(format!("polylabel requires an areal geometry, got {name}"))
}

/// Label position for `polygon`, to within `precision`.
///
/// Shorthand for [`Polylabel::polylabel`] that discards the distance and convergence status.
pub fn polylabel(polygon: &Polygon, precision: f64) -> Result<Point> {
    Ok(polygon.polylabel(&PolylabelOptions::new(precision))?.point)
}
