//! Columnar output: label positions for many geometries as Arrow arrays.

pub use label::{polylabel_array, PolylabelArray};

mod label;
