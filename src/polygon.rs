//! Spherical polygon state: vertex model, convexity flag, and cached
//! hull/bounding-cone results.

use glam::DVec3;

use crate::bounding_cone::{minimal_cone, BoundingCone};
use crate::convex_hull::{find_hull, HullNode};
use crate::types::{Bisector, CosineHalfAngle, Direction, DirectionLike};

/// A closed polygon on the unit sphere, traced by a cyclic sequence of
/// pointing directions.
///
/// Assigning vertices derives the per-edge data the rendering host consumes
/// (great-circle edge normals and angle bisectors) and decides convexity in
/// one pass. The hull decomposition and bounding cone are computed on first
/// access and cached until the vertices are reassigned.
///
/// All state belongs to one polygon instance and every intermediate product
/// is a stack-local value; instances are independent and safe to use from
/// different threads, one polygon per thread.
#[derive(Debug, Clone)]
pub struct SphericalPolygon {
    vertices: Vec<Direction>,
    edge_normals: Vec<Direction>,
    bisectors: Vec<Bisector>,
    is_convex: bool,
    hull: Option<HullNode>,
    cone: Option<BoundingCone>,
    cone_valid: bool,
}

impl Default for SphericalPolygon {
    fn default() -> Self {
        Self::new()
    }
}

impl SphericalPolygon {
    /// Create an empty polygon; trivially convex.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edge_normals: Vec::new(),
            bisectors: Vec::new(),
            is_convex: true,
            hull: None,
            cone: None,
            cone_valid: false,
        }
    }

    /// Create a polygon from a direction sequence.
    pub fn from_directions<P: DirectionLike>(directions: &[P]) -> Self {
        let mut polygon = Self::new();
        polygon.set_vertices(directions);
        polygon
    }

    /// Assign a new vertex sequence, rebuilding the per-edge caches and the
    /// convexity flag, and invalidating the hull and bounding cone.
    ///
    /// The sequence must not contain adjacent duplicates (wraparound pair
    /// included) and consecutive vertices should subtend less than 180°;
    /// see [`crate::remove_adjacent_duplicates`]. Degenerate sequences
    /// (fewer than 2 vertices) leave the edge caches empty and the polygon
    /// trivially convex.
    pub fn set_vertices<P: DirectionLike>(&mut self, directions: &[P]) {
        self.vertices = directions.iter().map(Direction::from_like).collect();
        self.hull = None;
        self.cone = None;
        self.cone_valid = false;
        self.edge_normals.clear();
        self.bisectors.clear();
        self.is_convex = true;

        let n = self.vertices.len();
        if n < 2 {
            return;
        }

        let dirs: Vec<DVec3> = self.vertices.iter().map(|v| v.to_glam()).collect();

        // Edge i spans vertices i-1 -> i, with edge 0 closing the cycle.
        let mut normals = Vec::with_capacity(n);
        for i in 0..n {
            let prev = dirs[if i == 0 { n - 1 } else { i - 1 }];
            let cur = dirs[i];
            normals.push(cur.cross(prev).normalize_or_zero());
            self.bisectors.push(Bisector::from_glam((prev + cur) * 0.5));
        }

        // One winding flip anywhere marks the whole sequence concave; the
        // loop still finishes so every edge's cache is complete.
        for i in 0..n {
            let last_normal = normals[if i == 0 { n - 1 } else { i - 1 }];
            let prev_vertex = dirs[if i == 0 { n - 1 } else { i - 1 }];
            if last_normal.cross(normals[i]).dot(prev_vertex) < 0.0 {
                self.is_convex = false;
            }
        }

        self.edge_normals = normals.into_iter().map(Direction::from_glam).collect();
    }

    /// The current vertex sequence.
    #[inline]
    pub fn vertices(&self) -> &[Direction] {
        &self.vertices
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if no vertices are assigned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the polygon is convex. Decided when vertices are assigned;
    /// degenerate sequences are trivially convex.
    #[inline]
    pub fn is_convex(&self) -> bool {
        self.is_convex
    }

    /// Unit normals of the great-circle plane of each edge, `normal[i]`
    /// belonging to the edge from vertex i-1 to vertex i (edge 0 wraps).
    /// Empty for degenerate sequences.
    #[inline]
    pub fn edge_normals(&self) -> &[Direction] {
        &self.edge_normals
    }

    /// Unnormalized angle bisectors of adjacent vertex pairs, indexed like
    /// [`Self::edge_normals`]. Empty for degenerate sequences.
    #[inline]
    pub fn bisectors(&self) -> &[Bisector] {
        &self.bisectors
    }

    /// The convex hull decomposition, computed on first access and cached
    /// until the next vertex assignment. Degenerate sequences yield an
    /// empty node.
    pub fn convex_hull(&mut self) -> &HullNode {
        let vertices = &self.vertices;
        self.hull.get_or_insert_with(|| {
            if vertices.len() < 3 {
                HullNode::default()
            } else {
                let dirs: Vec<DVec3> = vertices.iter().map(|v| v.to_glam()).collect();
                find_hull(&dirs, 1.0, 0, dirs.len() - 1)
            }
        })
    }

    /// The bounding cone over the hull's vertex set, computed on first
    /// access and cached until the next vertex assignment.
    ///
    /// `None` when the hull is empty (degenerate or wrongly wound input) or
    /// the hull's point set admits no defined cone; callers must check.
    pub fn bounding_cone(&mut self) -> Option<BoundingCone> {
        if !self.cone_valid {
            self.convex_hull();
            let hull_points: Vec<Direction> = match &self.hull {
                Some(hull) => hull.indices.iter().map(|&i| self.vertices[i]).collect(),
                None => Vec::new(),
            };
            self.cone = minimal_cone(&hull_points);
            self.cone_valid = true;
        }
        self.cone
    }

    /// Axis of the cached bounding cone, for the shader/culling consumer.
    #[inline]
    pub fn reference_axis(&mut self) -> Option<Direction> {
        self.bounding_cone().map(|cone| cone.axis)
    }

    /// Aperture of the cached bounding cone, for the shader/culling
    /// consumer.
    #[inline]
    pub fn reference_distance(&mut self) -> Option<CosineHalfAngle> {
        self.bounding_cone().map(|cone| cone.distance)
    }
}
