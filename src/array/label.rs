use arrow_array::{Array, BooleanArray, Float64Array};
use arrow_buffer::NullBuffer;
use geo::Geometry;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::algorithm::polylabel::{PoleOfInaccessibility, Polylabel};
use crate::error::{PolylabelError, Result};
use crate::options::PolylabelOptions;

/// Label positions for a column of geometries, stored as Arrow arrays.
///
/// All four columns share one validity buffer. A slot is null when the input geometry was null or
/// had zero area.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylabelArray {
    x: Float64Array,
    y: Float64Array,
    distance: Float64Array,
    converged: BooleanArray,
}

impl PolylabelArray {
    pub fn x(&self) -> &Float64Array {
        &self.x
    }

    pub fn y(&self) -> &Float64Array {
        &self.y
    }

    pub fn distance(&self) -> &Float64Array {
        &self.distance
    }

    /// `false` where the search stopped on its iteration cap.
    pub fn converged(&self) -> &BooleanArray {
        &self.converged
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nulls(&self) -> Option<&NullBuffer> {
        self.x.nulls()
    }

    pub fn value(&self, i: usize) -> geo::Point {
        geo::Point::new(self.x.value(i), self.y.value(i))
    }

    pub fn get(&self, i: usize) -> Option<geo::Point> {
        if self.x.is_null(i) {
            None
        } else {
            Some(self.value(i))
        }
    }

    pub fn iter_geo(&self) -> impl Iterator<Item = Option<geo::Point>> + '_ {
        (0..self.len()).map(|i| self.get(i))
    }
}

impl From<Vec<Option<PoleOfInaccessibility>>> for PolylabelArray {
    fn from(other: Vec<Option<PoleOfInaccessibility>>) -> Self {
        let mut x = Vec::with_capacity(other.len());
        let mut y = Vec::with_capacity(other.len());
        let mut distance = Vec::with_capacity(other.len());
        let mut converged = Vec::with_capacity(other.len());
        let mut validity = Vec::with_capacity(other.len());

        for item in other.iter() {
            match item {
                Some(label) => {
                    x.push(label.point.x());
                    y.push(label.point.y());
                    distance.push(label.distance);
                    converged.push(Some(label.is_converged()));
                    validity.push(true);
                }
                None => {
                    x.push(0.);
                    y.push(0.);
                    distance.push(0.);
                    converged.push(None);
                    validity.push(false);
                }
            }
        }

        let nulls = validity
            .contains(&false)
            .then(|| NullBuffer::from(validity));
        Self {
            x: Float64Array::new(x.into(), nulls.clone()),
            y: Float64Array::new(y.into(), nulls.clone()),
            distance: Float64Array::new(distance.into(), nulls),
            converged: BooleanArray::from(converged),
        }
    }
}

/// Compute the pole of inaccessibility of every geometry in `geometries`.
///
/// Null and zero-area geometries produce null slots. Any other error, such as an invalid ring or
/// a non-areal geometry, fails the whole batch.
pub fn polylabel_array(
    geometries: &[Option<Geometry>],
    options: &PolylabelOptions,
) -> Result<PolylabelArray> {
    options.validate()?;

    #[cfg(feature = "rayon")]
    let labels: Vec<Option<PoleOfInaccessibility>> = geometries
        .par_iter()
        .map(|geom| label_one(geom.as_ref(), options))
        .collect::<Result<_>>()?;

    #[cfg(not(feature = "rayon"))]
    let labels: Vec<Option<PoleOfInaccessibility>> = geometries
        .iter()
        .map(|geom| label_one(geom.as_ref(), options))
        .collect::<Result<_>>()?;

    Ok(labels.into())
}

fn label_one(
    geom: Option<&Geometry>,
    options: &PolylabelOptions,
) -> Result<Option<PoleOfInaccessibility>> {
    let Some(geom) = geom else {
        return Ok(None);
    };
    match geom.polylabel(options) {
        Ok(label) => Ok(Some(label)),
        Err(PolylabelError::DegenerateGeometry(_)) => Ok(None),
        Err(err) => Err(err),
    }
}
