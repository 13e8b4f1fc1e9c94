//! Algorithms for locating label positions inside polygons.

pub mod polylabel;
