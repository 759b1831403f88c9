//! Minimal circular bounding cones for direction sets.
//!
//! A bounding cone is the spherical analogue of a bounding sphere: an
//! apex-at-origin cone, described by its axis and the cosine of its
//! half-angle, that contains every direction in a set. The host uses it for
//! fast visibility and horizon culling before touching per-vertex data.
//!
//! Two solvers are provided. [`minimal_cone_exact`] enumerates support pairs
//! and triples and is correct for any input in general position; it costs
//! O(k⁴) in the set size. [`minimal_cone`] is the default entry point: it
//! seeds with the widest two-point cone and only falls back to the exact
//! search over the few points that escape it.

use glam::DVec3;

use crate::types::{CosineHalfAngle, Direction, DirectionLike};

/// An apex-at-origin circular cone bounding a set of directions.
///
/// Every bounded direction `d` satisfies `dot(d, axis) >= distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCone {
    /// Unit axis of the cone.
    pub axis: Direction,
    /// Cosine of the cone's half-angle.
    pub distance: CosineHalfAngle,
}

impl BoundingCone {
    /// Containment test in cosine space, with the exact `>=` threshold.
    ///
    /// Directions on the boundary may land a rounding error on either side;
    /// callers needing slack should compare dot products themselves.
    #[inline]
    pub fn contains<P: DirectionLike>(&self, direction: &P) -> bool {
        direction.as_dvec3().dot(self.axis.to_glam()) >= self.distance.0
    }

    /// The cone's half-angle in radians.
    #[inline]
    pub fn half_angle(&self) -> f64 {
        self.distance.angle()
    }
}

/// The cone through two points: axis along their midpoint, boundary through
/// both. Antipodal pairs have no defined axis and yield `None`.
fn two_point_cone(a: DVec3, b: DVec3) -> Option<(DVec3, f64)> {
    let sum = a + b;
    let axis = sum.try_normalize()?;
    Some((axis, 0.5 * sum.length()))
}

fn contains_all_except(points: &[DVec3], axis: DVec3, distance: f64, skip: &[usize]) -> bool {
    points
        .iter()
        .enumerate()
        .all(|(idx, p)| skip.contains(&idx) || p.dot(axis) >= distance)
}

fn exact(points: &[DVec3]) -> Option<(DVec3, f64)> {
    let n = points.len();
    if n < 2 {
        return None;
    }

    // Two support points are the common case for sensor patterns; if any
    // pair's cone already holds the rest, the tightest such pair wins and
    // the triple search is skipped.
    let mut best: Option<(DVec3, f64)> = None;
    for i in 0..n {
        for j in (i + 1)..n {
            let Some((axis, distance)) = two_point_cone(points[i], points[j]) else {
                continue;
            };
            if !contains_all_except(points, axis, distance, &[i, j]) {
                continue;
            }
            if best.map_or(true, |(_, d)| distance > d) {
                best = Some((axis, distance));
            }
        }
    }
    if best.is_some() {
        return best;
    }

    // Otherwise the minimal cone is circumscribed about three support
    // points: its axis is the normal of their plane, and every point in the
    // plane shares the same dot product with that normal. Index order fixes
    // the normal's sign, so inputs in cyclic winding order produce the
    // outward axis; degenerate (collinear) triples are skipped.
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let (p1, p2, p3) = (points[i], points[j], points[k]);
                let Some(axis) = (p3 - p2).cross(p1 - p2).try_normalize() else {
                    continue;
                };
                let centroid = (p1 + p2 + p3) / 3.0;
                let distance = centroid.dot(axis);
                if !contains_all_except(points, axis, distance, &[i, j, k]) {
                    continue;
                }
                if best.map_or(true, |(_, d)| distance > d) {
                    best = Some((axis, distance));
                }
            }
        }
    }
    best
}

fn heuristic(points: &[DVec3]) -> Option<(DVec3, f64)> {
    let n = points.len();
    if n < 2 {
        return None;
    }

    // Find the pair demanding the widest cone. The search starts from a
    // distance of 1.0 (a degenerate zero-aperture cone) and keeps strict
    // improvements, so coincident pairs never qualify.
    let mut widest: Option<(usize, usize, DVec3, f64)> = None;
    let mut widest_distance = 1.0_f64;
    for i in 0..n {
        for j in (i + 1)..n {
            let Some((axis, distance)) = two_point_cone(points[i], points[j]) else {
                continue;
            };
            if distance < widest_distance {
                widest_distance = distance;
                widest = Some((i, j, axis, distance));
            }
        }
    }
    let (i, j, axis, distance) = widest?;

    // Points escaping the widest pair's cone join the reduced set, in input
    // order so a wound input keeps its winding.
    let reduced: Vec<DVec3> = points
        .iter()
        .enumerate()
        .filter(|&(idx, p)| idx == i || idx == j || p.dot(axis) < distance)
        .map(|(_, p)| *p)
        .collect();

    if reduced.len() > 2 {
        exact(&reduced)
    } else {
        Some((axis, distance))
    }
}

/// Fit a bounding cone over a direction set (heuristic, default entry point).
///
/// Starts from the widest two-point cone and refines with the exact solver
/// only over the points that escape it, avoiding the full O(k⁴) search when
/// two points already bound the rest. The refinement minimizes over the
/// reduced set only, so the result can undercover interior points slightly;
/// [`minimal_cone_exact`] guarantees containment of every input.
///
/// Returns `None` for fewer than two usable points, and for sets so
/// degenerate that no support pair or triple is defined; callers must check
/// before use.
pub fn minimal_cone<P: DirectionLike>(directions: &[P]) -> Option<BoundingCone> {
    let points: Vec<DVec3> = directions.iter().map(DirectionLike::as_dvec3).collect();
    heuristic(&points).map(|(axis, distance)| BoundingCone {
        axis: Direction::from_glam(axis),
        distance: CosineHalfAngle::new(distance),
    })
}

/// Fit the minimal bounding cone over a direction set by exhaustive support
/// enumeration.
///
/// Every returned cone contains all input directions (up to rounding on the
/// boundary), with its 2–3 support points exactly on the boundary. Cost is
/// O(k⁴) in the set size, acceptable for hulls of sensor patterns.
pub fn minimal_cone_exact<P: DirectionLike>(directions: &[P]) -> Option<BoundingCone> {
    let points: Vec<DVec3> = directions.iter().map(DirectionLike::as_dvec3).collect();
    exact(&points).map(|(axis, distance)| BoundingCone {
        axis: Direction::from_glam(axis),
        distance: CosineHalfAngle::new(distance),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Spherical;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};

    fn square(cone: f64) -> Vec<Direction> {
        (0..4)
            .map(|i| Spherical::new(FRAC_PI_2 * i as f64, cone).to_direction())
            .collect()
    }

    #[test]
    fn test_two_point_cone() {
        // Two directions 60° apart: axis between them, half-angle 30°.
        let dirs = [
            Spherical::new(0.0, FRAC_PI_6).to_direction(),
            Spherical::new(std::f64::consts::PI, FRAC_PI_6).to_direction(),
        ];
        let cone = minimal_cone(&dirs).unwrap();
        assert!(cone.axis.z > 0.999_999);
        assert!((cone.distance.0 - FRAC_PI_6.cos()).abs() < 1e-12);
    }

    #[test]
    fn test_near_antipodal_pair() {
        // 179° apart: the cone opens to nearly a hemisphere.
        let half = f64::to_radians(89.5);
        let dirs = [
            Direction::new(half.sin(), 0.0, half.cos()),
            Direction::new(-half.sin(), 0.0, half.cos()),
        ];
        let cone = minimal_cone(&dirs).unwrap();
        assert!((cone.distance.0 - half.cos()).abs() < 1e-12);
        assert!((cone.half_angle() - half).abs() < 1e-9);
    }

    #[test]
    fn test_square_pair_short_circuit() {
        // Opposite corners of the square already bound the other two, so
        // both solvers settle on the axis cone.
        let dirs = square(FRAC_PI_6);
        for cone in [
            minimal_cone(&dirs).unwrap(),
            minimal_cone_exact(&dirs).unwrap(),
        ] {
            assert!(cone.axis.z > 0.999_999, "axis {:?}", cone.axis);
            assert!((cone.distance.0 - FRAC_PI_6.cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_triangle_circumscribed() {
        // Three spread directions force the three-point support cone.
        let dirs: Vec<_> = (0..3)
            .map(|i| {
                Spherical::new(2.0 * std::f64::consts::PI * i as f64 / 3.0, FRAC_PI_6)
                    .to_direction()
            })
            .collect();
        let cone = minimal_cone_exact(&dirs).unwrap();
        assert!(cone.axis.z > 0.999_999);
        assert!((cone.distance.0 - FRAC_PI_6.cos()).abs() < 1e-9);
        // All three support points sit on the boundary.
        for d in &dirs {
            let dot = d.to_glam().dot(cone.axis.to_glam());
            assert!((dot - cone.distance.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_octagon_ring() {
        let dirs: Vec<_> = (0..8)
            .map(|i| Spherical::new(FRAC_PI_4 * i as f64, FRAC_PI_6).to_direction())
            .collect();
        let cone = minimal_cone(&dirs).unwrap();
        assert!((cone.distance.0 - FRAC_PI_6.cos()).abs() < 1e-12);
        for d in &dirs {
            let dot = d.to_glam().dot(cone.axis.to_glam());
            assert!(dot >= cone.distance.0 - 1e-9);
        }
    }

    #[test]
    fn test_interior_points_ignored() {
        // Directions well inside the ring never become support points.
        let mut dirs = square(f64::to_radians(40.0));
        dirs.push(Spherical::new(0.3, f64::to_radians(3.0)).to_direction());
        dirs.push(Spherical::new(2.0, f64::to_radians(7.0)).to_direction());
        let cone = minimal_cone_exact(&dirs).unwrap();
        assert!((cone.distance.0 - f64::to_radians(40.0).cos()).abs() < 1e-9);
        for d in &dirs {
            let dot = d.to_glam().dot(cone.axis.to_glam());
            assert!(dot >= cone.distance.0 - 1e-9);
        }
    }

    #[test]
    fn test_degenerate_sets() {
        assert!(minimal_cone::<Direction>(&[]).is_none());
        assert!(minimal_cone(&[Direction::new(0.0, 0.0, 1.0)]).is_none());
        assert!(minimal_cone_exact::<Direction>(&[]).is_none());
        assert!(minimal_cone_exact(&[Direction::new(0.0, 0.0, 1.0)]).is_none());

        // Exactly antipodal pairs have no defined axis.
        let antipodal = [
            Direction::new(0.0, 0.0, 1.0),
            Direction::new(0.0, 0.0, -1.0),
        ];
        assert!(minimal_cone(&antipodal).is_none());
    }

    #[test]
    fn test_coincident_pair_is_degenerate() {
        // Identical directions give a distance of exactly 1.0, which the
        // widest-pair search never accepts.
        let d = Direction::new(0.0, 0.0, 1.0);
        assert!(minimal_cone(&[d, d]).is_none());
    }
}
