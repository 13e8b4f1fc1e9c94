use geo::{MultiPolygon, Polygon};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::trace;

use super::search::{search, PoleOfInaccessibility};
use crate::error::{PolylabelError, Result};
use crate::options::PolylabelOptions;

/// Search every part of `multi_polygon` independently and keep the farthest pole.
///
/// Zero-area parts are skipped. Ties go to the earliest part.
pub fn search_multi(
    multi_polygon: &MultiPolygon,
    options: &PolylabelOptions,
) -> Result<PoleOfInaccessibility> {
    options.validate()?;
    select(search_parts(&multi_polygon.0, options))
}

fn search_parts(
    parts: &[Polygon],
    options: &PolylabelOptions,
) -> Vec<Result<PoleOfInaccessibility>> {
    #[cfg(feature = "rayon")]
    {
        let mut output_vec = Vec::with_capacity(parts.len());
        parts
            .par_iter()
            .map(|part| search(part, options))
            .collect_into_vec(&mut output_vec);
        output_vec
    }

    #[cfg(not(feature = "rayon"))]
    {
        parts.iter().map(|part| search(part, options)).collect()
    }
}

/// Pick the best result in input order. Any error other than a degenerate part aborts.
fn select(results: Vec<Result<PoleOfInaccessibility>>) -> Result<PoleOfInaccessibility> {
    let mut best: Option<PoleOfInaccessibility> = None;
    for (i, result) in results.into_iter().enumerate() {
        match result {
            Ok(candidate) => {
                if best.map_or(true, |b| candidate.distance > b.distance) {
                    best = Some(candidate);
                }
            }
            Err(PolylabelError::DegenerateGeometry(reason)) => {
                trace!("Skipping part {}: {}", i, reason);
            }
            Err(err) => return Err(err),
        }
    }
    best.ok_or_else(|| {
        PolylabelError::DegenerateGeometry("every part has zero area".to_string())
    })
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;
    use geo::{line_string, Contains, Point};

    use super::*;
    use crate::test::multipolygon::{two_squares, twin_squares, with_degenerate_part};
    use crate::test::polygon::{collinear, float_collinear, square_at};

    #[test]
    fn larger_part_wins() {
        let multi = two_squares();
        let precision = 0.01;
        let result = search_multi(&multi, &PolylabelOptions::new(precision)).unwrap();

        assert!(multi.0[1].contains(&result.point));
        assert_abs_diff_eq!(result.distance, 5., epsilon = precision);
    }

    #[test]
    fn order_does_not_matter_for_selection() {
        let mut multi = two_squares();
        multi.0.reverse();
        let result = search_multi(&multi, &PolylabelOptions::new(0.01)).unwrap();
        assert!(multi.0[0].contains(&result.point));
    }

    #[test]
    fn ties_go_to_first_part() {
        let result = search_multi(&twin_squares(), &PolylabelOptions::new(0.1)).unwrap();
        assert_eq!(result.point, Point::new(3., 3.));
        assert_abs_diff_eq!(result.distance, 3.);
    }

    #[test]
    fn degenerate_parts_are_skipped() {
        let result = search_multi(&with_degenerate_part(), &PolylabelOptions::new(0.1)).unwrap();
        assert_eq!(result.point, Point::new(-16., -16.));
    }

    #[test]
    fn float_collinear_part_is_skipped() {
        let multi = MultiPolygon::new(vec![float_collinear(), square_at(2., 2., 6.)]);
        let result = search_multi(&multi, &PolylabelOptions::new(0.01)).unwrap();
        assert_eq!(result.point, Point::new(5., 5.));
        assert_abs_diff_eq!(result.distance, 3.);
    }

    #[test]
    fn all_degenerate() {
        let multi = MultiPolygon::new(vec![collinear(), collinear()]);
        assert!(matches!(
            search_multi(&multi, &PolylabelOptions::default()),
            Err(PolylabelError::DegenerateGeometry(_))
        ));
        assert!(matches!(
            search_multi(&MultiPolygon::new(vec![]), &PolylabelOptions::default()),
            Err(PolylabelError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn invalid_part_aborts() {
        let invalid = Polygon::new(line_string![(x: 0., y: 0.), (x: 1., y: 0.)], vec![]);
        let multi = MultiPolygon::new(vec![square_at(0., 0., 10.), invalid]);
        assert!(matches!(
            search_multi(&multi, &PolylabelOptions::default()),
            Err(PolylabelError::InvalidGeometry(_))
        ));
    }
}
