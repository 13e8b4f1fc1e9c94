//! Signed distance from a point to a polygon's boundary.

use geo::{Coord, EuclideanDistance, Line, LineString, Point, Polygon};

use crate::error::{PolylabelError, Result};

/// Check that every ring of `polygon` is closed, finite, and has at least three distinct
/// vertices.
pub fn validate_polygon(polygon: &Polygon) -> Result<()> {
    if polygon.exterior().0.is_empty() {
        return Err(PolylabelError::InvalidGeometry(
            "polygon has no exterior ring".to_string(),
        ));
    }
    validate_ring(polygon.exterior(), "exterior")?;
    for (i, interior) in polygon.interiors().iter().enumerate() {
        validate_ring(interior, &format!("interior {i}"))?;
    }
    Ok(())
}

fn validate_ring(ring: &LineString, label: &str) -> Result<()> {
    if !ring.0.iter().all(|c| c.x.is_finite() && c.y.is_finite()) {
        return Err(PolylabelError::InvalidGeometry(format!(
            "{label} ring has non-finite coordinates"
        )));
    }
    if !ring.is_closed() {
        return Err(PolylabelError::InvalidGeometry(format!(
            "{label} ring is not closed"
        )));
    }
    if !has_three_distinct(&ring.0) {
        return Err(PolylabelError::InvalidGeometry(format!(
            "{label} ring has fewer than 3 distinct vertices"
        )));
    }
    Ok(())
}

fn has_three_distinct(coords: &[Coord]) -> bool {
    let Some(&first) = coords.first() else {
        return false;
    };
    let Some(&second) = coords.iter().find(|c| **c != first) else {
        return false;
    };
    coords.iter().any(|c| *c != first && *c != second)
}

/// Signed distance from `point` to the boundary of `polygon`.
///
/// Positive when the point lies inside the exterior ring and outside every interior ring,
/// negative otherwise (including inside a hole). A point on any ring returns `0.0`.
///
/// ```
/// use geo::{coord, polygon};
/// use geoarrow_polylabel::algorithm::polylabel::signed_distance;
///
/// let square = polygon![
///     (x: 0., y: 0.),
///     (x: 10., y: 0.),
///     (x: 10., y: 10.),
///     (x: 0., y: 10.),
/// ];
/// assert_eq!(signed_distance(coord! { x: 5., y: 3. }, &square).unwrap(), 3.);
/// assert_eq!(signed_distance(coord! { x: 12., y: 5. }, &square).unwrap(), -2.);
/// ```
pub fn signed_distance(point: Coord, polygon: &Polygon) -> Result<f64> {
    validate_polygon(polygon)?;
    Ok(signed_distance_unchecked(point, polygon))
}

/// [`signed_distance`] for a polygon already accepted by [`validate_polygon`].
pub(crate) fn signed_distance_unchecked(point: Coord, polygon: &Polygon) -> f64 {
    let p = Point::from(point);
    let mut inside = false;
    let mut min_distance = f64::INFINITY;

    for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
        for line in ring.lines() {
            if crosses_ray(point, &line) {
                inside = !inside;
            }
            min_distance = min_distance.min(p.euclidean_distance(&line));
        }
    }

    if min_distance == 0.0 {
        0.0
    } else if inside {
        min_distance
    } else {
        -min_distance
    }
}

/// Whether a ray cast from `point` towards +x crosses `line`.
///
/// Counting crossings over every ring gives even-odd containment, which treats holes as outside.
#[inline]
fn crosses_ray(point: Coord, line: &Line) -> bool {
    let (a, b) = (line.start, line.end);
    (a.y > point.y) != (b.y > point.y)
        && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use geo::{coord, line_string, polygon};

    use super::*;
    use crate::test::polygon::{donut, square};

    #[test]
    fn inside_and_outside() {
        let p = square(10.);
        assert_relative_eq!(signed_distance(coord! { x: 5., y: 5. }, &p).unwrap(), 5.);
        assert_relative_eq!(signed_distance(coord! { x: 1., y: 7. }, &p).unwrap(), 1.);
        assert_relative_eq!(signed_distance(coord! { x: -3., y: 5. }, &p).unwrap(), -3.);
        assert_relative_eq!(
            signed_distance(coord! { x: 13., y: 14. }, &p).unwrap(),
            -5.
        );
    }

    #[test]
    fn on_boundary_is_zero() {
        let p = square(10.);
        assert_eq!(signed_distance(coord! { x: 0., y: 4. }, &p).unwrap(), 0.);
        assert_eq!(signed_distance(coord! { x: 10., y: 10. }, &p).unwrap(), 0.);
        assert_eq!(signed_distance(coord! { x: 6., y: 0. }, &p).unwrap(), 0.);
    }

    #[test]
    fn inside_hole_is_negative() {
        // 20 x 20 square with a 10 x 10 hole centered at (10, 10)
        let p = donut();
        assert_relative_eq!(signed_distance(coord! { x: 10., y: 10. }, &p).unwrap(), -5.);
        assert_relative_eq!(signed_distance(coord! { x: 2., y: 10. }, &p).unwrap(), 2.);
        assert_eq!(signed_distance(coord! { x: 5., y: 10. }, &p).unwrap(), 0.);
    }

    #[test]
    fn two_point_ring_is_invalid() {
        let p = Polygon::new(line_string![(x: 0., y: 0.), (x: 1., y: 1.)], vec![]);
        assert!(matches!(
            validate_polygon(&p),
            Err(PolylabelError::InvalidGeometry(_))
        ));
        assert!(matches!(
            signed_distance(coord! { x: 0., y: 0. }, &p),
            Err(PolylabelError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn repeated_vertices_are_not_distinct() {
        let p = polygon![
            (x: 0., y: 0.),
            (x: 0., y: 0.),
            (x: 3., y: 3.),
            (x: 3., y: 3.),
        ];
        assert!(matches!(
            validate_polygon(&p),
            Err(PolylabelError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn empty_and_non_finite_rings_are_invalid() {
        let empty = Polygon::new(LineString::new(vec![]), vec![]);
        assert!(matches!(
            validate_polygon(&empty),
            Err(PolylabelError::InvalidGeometry(_))
        ));

        let nan = polygon![
            (x: 0., y: 0.),
            (x: f64::NAN, y: 0.),
            (x: 3., y: 3.),
        ];
        assert!(matches!(
            validate_polygon(&nan),
            Err(PolylabelError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn invalid_hole_is_reported() {
        let p = Polygon::new(
            square(10.).exterior().clone(),
            vec![line_string![(x: 2., y: 2.), (x: 3., y: 3.)]],
        );
        let err = validate_polygon(&p).unwrap_err();
        assert!(err.to_string().contains("interior 0"));
    }
}
