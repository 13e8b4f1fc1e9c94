//! Pole of inaccessibility search for polygons: the interior point farthest from the boundary,
//! used as a label anchor for irregular or concave shapes where a centroid may fall outside the
//! shape.
//!
//! ```
//! use geo::polygon;
//! use geoarrow_polylabel::algorithm::polylabel::Polylabel;
//! use geoarrow_polylabel::PolylabelOptions;
//!
//! let polygon = polygon![
//!     (x: 0., y: 0.),
//!     (x: 10., y: 0.),
//!     (x: 10., y: 10.),
//!     (x: 0., y: 10.),
//! ];
//! let label = polygon.polylabel(&PolylabelOptions::new(0.1)).unwrap();
//! assert_eq!(label.point.x(), 5.);
//! assert_eq!(label.distance, 5.);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use algorithm::polylabel::{polylabel, PoleOfInaccessibility, Polylabel, SearchStatus};
pub use error::{PolylabelError, Result};
pub use options::PolylabelOptions;

pub mod algorithm;
pub mod array;
pub mod error;
pub mod options;
