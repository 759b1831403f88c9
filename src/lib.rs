//! Spherical polygon geometry for custom sensor volumes.
//!
//! A custom sensor pattern is a cyclic sequence of pointing directions (unit
//! vectors on the sphere, one per clock/cone angle pair). This crate decides
//! whether the polygon they trace is convex, decomposes concave polygons
//! into a convex hull plus recursively nested holes, and fits a minimal
//! circular bounding cone over the hull. A rendering host consumes the
//! results for shader generation and culling; nothing here touches the GPU.
//!
//! # Example
//!
//! ```
//! use spherical_polygon::{Spherical, SphericalPolygon};
//!
//! // A square sensor pattern: four pointing angles, 30° off the +Z axis.
//! let directions: Vec<_> = (0..4)
//!     .map(|i| {
//!         Spherical::new(f64::to_radians(90.0 * i as f64), f64::to_radians(30.0)).to_direction()
//!     })
//!     .collect();
//!
//! let mut polygon = SphericalPolygon::from_directions(&directions);
//! assert!(polygon.is_convex());
//! assert_eq!(polygon.convex_hull().indices, vec![0, 1, 2, 3]);
//!
//! // The bounding cone points up the pattern's axis with a 30° half-angle.
//! let cone = polygon.bounding_cone().expect("pattern is not degenerate");
//! assert!(cone.axis.z > 0.999_999);
//! assert!((cone.half_angle() - f64::to_radians(30.0)).abs() < 1e-9);
//! ```

mod bounding_cone;
mod convex_hull;
mod polygon;
mod preprocess;
mod types;
pub mod validation;

pub use bounding_cone::{minimal_cone, minimal_cone_exact, BoundingCone};
pub use convex_hull::{convex_hull, HullNode};
pub use polygon::SphericalPolygon;
pub use preprocess::{remove_adjacent_duplicates, DEFAULT_EPSILON};
pub use types::{Bisector, CosineHalfAngle, Direction, DirectionLike, Spherical};
