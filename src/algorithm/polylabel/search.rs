//! Best-first branch-and-bound search for the pole of inaccessibility of one polygon.

use geo::{Area, BoundingRect, Centroid, Coord, InteriorPoint, Point, Polygon};
use serde::Serialize;
use tracing::{debug, warn};

use super::cell::Cell;
use super::distance::{signed_distance_unchecked, validate_polygon};
use super::frontier::Frontier;
use crate::error::{PolylabelError, Result};
use crate::options::PolylabelOptions;

/// Seed cells are never smaller than this fraction of the longer bounding-box side, which keeps
/// the number of seeds bounded for slivers.
const MAX_SEEDS_PER_AXIS: f64 = 1024.;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchStatus {
    /// No remaining cell could improve the result by more than the precision.
    Converged,
    /// The iteration cap was reached first. The result only meets a looser tolerance.
    BudgetExhausted,
}

/// Result of a pole of inaccessibility search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoleOfInaccessibility {
    pub point: Point,
    /// Distance from `point` to the nearest boundary edge.
    pub distance: f64,
    pub status: SearchStatus,
    /// Number of cells popped from the frontier.
    pub iterations: usize,
}

impl PoleOfInaccessibility {
    pub fn is_converged(&self) -> bool {
        self.status == SearchStatus::Converged
    }
}

/// Incumbent and bookkeeping owned by a single search.
#[derive(Debug)]
struct SearchState {
    point: Coord,
    distance: f64,
    precision: f64,
    budget: usize,
    iterations: usize,
}

impl SearchState {
    fn new(first: &Cell, precision: f64, budget: usize) -> Self {
        Self {
            point: first.center,
            distance: first.distance,
            precision,
            budget,
            iterations: 0,
        }
    }

    /// Replace the incumbent if `distance` strictly improves on it.
    fn offer(&mut self, point: Coord, distance: f64) {
        if distance > self.distance {
            self.point = point;
            self.distance = distance;
        }
    }

    /// Whether no point in `cell` can beat the incumbent by more than the precision.
    fn can_prune(&self, cell: &Cell) -> bool {
        cell.max - self.distance <= self.precision
    }
}

/// Find the point inside `polygon` farthest from its boundary, to within `options.precision`.
pub fn search(polygon: &Polygon, options: &PolylabelOptions) -> Result<PoleOfInaccessibility> {
    options.validate()?;
    validate_polygon(polygon)?;

    let rect = polygon.bounding_rect().ok_or_else(|| {
        PolylabelError::DegenerateGeometry("polygon has no bounding box".to_string())
    })?;

    let (width, height) = (rect.width(), rect.height());
    // Collinear vertices with fractional coordinates leave round-off area behind.
    if width == 0. || height == 0. || polygon.unsigned_area() <= f64::EPSILON * width * height {
        return Err(PolylabelError::DegenerateGeometry(
            "polygon has zero area".to_string(),
        ));
    }
    let cell_size = width
        .min(height)
        .max(options.precision)
        .max(width.max(height) / MAX_SEEDS_PER_AXIS);
    let half_size = cell_size / 2.;

    // Seed with the centroid first, then tile the bounding box.
    let nx = (width / cell_size).ceil().max(1.) as usize;
    let ny = (height / cell_size).ceil().max(1.) as usize;
    let mut seeds = Vec::with_capacity(nx * ny + 1);
    if let Some(centroid) = polygon.centroid() {
        seeds.push(Cell::new(centroid.0, half_size, polygon));
    }
    let min = rect.min();
    for i in 0..nx {
        for j in 0..ny {
            let center = Coord {
                x: min.x + (i as f64 + 0.5) * cell_size,
                y: min.y + (j as f64 + 0.5) * cell_size,
            };
            seeds.push(Cell::new(center, half_size, polygon));
        }
    }

    let Some(first) = seeds.first() else {
        return Err(PolylabelError::DegenerateGeometry(
            "no seed cells".to_string(),
        ));
    };
    let mut state = SearchState::new(
        first,
        options.precision,
        options.iteration_budget(half_size),
    );
    let mut frontier = Frontier::by_upper_bound();
    for cell in seeds {
        state.offer(cell.center, cell.distance);
        frontier.push(cell);
    }

    let status = refine(&mut state, &mut frontier, polygon);

    if state.distance <= 0. {
        match status {
            // Every cell was resolved without finding an interior point.
            SearchStatus::Converged => {
                return Err(PolylabelError::DegenerateGeometry(
                    "no point lies strictly inside the polygon".to_string(),
                ));
            }
            // Stopped before any interior cell center was reached.
            SearchStatus::BudgetExhausted => {
                if let Some(interior) = polygon.interior_point() {
                    state.offer(interior.0, signed_distance_unchecked(interior.0, polygon));
                }
            }
        }
    }

    match status {
        SearchStatus::Converged => debug!(
            "Converged after {} iterations at distance {}",
            state.iterations, state.distance
        ),
        SearchStatus::BudgetExhausted => warn!(
            "Stopped after {} iterations with {} cells unexplored, distance {}",
            state.iterations,
            frontier.len(),
            state.distance
        ),
    }

    Ok(PoleOfInaccessibility {
        point: state.point.into(),
        distance: state.distance,
        status,
        iterations: state.iterations,
    })
}

/// Pop, prune, and subdivide cells until the head of the frontier can be pruned or the budget
/// runs out.
fn refine(state: &mut SearchState, frontier: &mut Frontier, polygon: &Polygon) -> SearchStatus {
    loop {
        if state.iterations >= state.budget {
            // The budget may run out exactly as the search completes.
            return match frontier.peek() {
                Some(head) if !state.can_prune(head) => SearchStatus::BudgetExhausted,
                _ => SearchStatus::Converged,
            };
        }

        let Some(cell) = frontier.pop() else {
            return SearchStatus::Converged;
        };
        state.iterations += 1;
        state.offer(cell.center, cell.distance);

        // Every other cell has an upper bound no greater than this one, so all of them would be
        // pruned as well.
        if state.can_prune(&cell) {
            return SearchStatus::Converged;
        }

        frontier.extend(cell.split(polygon));
    }
}
