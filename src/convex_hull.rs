//! Recursive convex hull decomposition for spherical polygons.
//!
//! A sensor pattern traces a closed polygon on the unit sphere. The hull of
//! that polygon is found by iterative elimination: a cyclic window slides over
//! the candidate vertices and removes any vertex that bends against the
//! winding, until a full pass removes nothing. Excluded runs of vertices form
//! concave notches; each notch is itself a polygon with reversed orientation,
//! so the search recurses with the opposite sign, producing a tree of hulls.

use glam::DVec3;

use crate::types::DirectionLike;

/// A convex hull over a cyclic range of pointing directions.
///
/// `indices` reference the original direction sequence and preserve its
/// cyclic order. Each hole is the hull of a concave notch, traversed with
/// reversed orientation; holes share their two boundary vertices with the
/// parent node. Nesting is arbitrary: a notch can itself contain notches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HullNode {
    /// Surviving vertex indices, in original cyclic order.
    pub indices: Vec<usize>,
    /// Hulls of concave notches between adjacent surviving vertices.
    pub holes: Vec<HullNode>,
}

impl HullNode {
    /// Number of vertices on this hull (not counting holes).
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the hull is degenerate (fewer than 3 usable vertices).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Total number of nodes in the tree, this hull included.
    pub fn node_count(&self) -> usize {
        1 + self.holes.iter().map(HullNode::node_count).sum::<usize>()
    }

    /// Maximum nesting depth; 1 for a hull without holes.
    pub fn depth(&self) -> usize {
        1 + self
            .holes
            .iter()
            .map(HullNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Compute the convex hull decomposition of a full direction sequence.
///
/// The sequence must wind with increasing clock angle about its mean axis;
/// a polygon wound the other way eliminates every vertex and yields an empty
/// node. Fewer than 3 directions is degenerate and also yields an empty node.
pub fn convex_hull<P: DirectionLike>(directions: &[P]) -> HullNode {
    if directions.len() < 3 {
        return HullNode::default();
    }
    let dirs: Vec<DVec3> = directions.iter().map(DirectionLike::as_dvec3).collect();
    find_hull(&dirs, 1.0, 0, dirs.len() - 1)
}

/// Find the hull of the cyclic index range `[initial_index..final_index]`,
/// recursing into concave notches with the opposite `sign`.
pub(crate) fn find_hull(
    directions: &[DVec3],
    sign: f64,
    initial_index: usize,
    final_index: usize,
) -> HullNode {
    let n = directions.len();
    if n == 0 {
        return HullNode::default();
    }

    // Seed with the requested cyclic range, wrapping past the end if needed.
    let mut indices: Vec<usize> = if initial_index <= final_index {
        (initial_index..=final_index).collect()
    } else {
        (initial_index..n).chain(0..=final_index).collect()
    };

    // Slide a 3-vertex window over the cycle, removing any vertex whose
    // neighboring edge planes turn against the winding. A removal re-tests
    // the same position against the new neighbor; the outer loop repeats
    // until a full pass is clean, since a removal can expose an earlier
    // vertex as newly reflex.
    let mut removed = true;
    while removed {
        removed = false;
        let mut i = 0;
        while i < indices.len() {
            let len = indices.len();
            let prev = directions[indices[(i + len - 1) % len]];
            let cur = directions[indices[i]];
            let next = directions[indices[(i + 1) % len]];
            let last_normal = cur.cross(prev);
            let next_normal = next.cross(cur);
            // Exactly coplanar triples score zero and are kept.
            if sign * last_normal.cross(next_normal).dot(cur) < 0.0 {
                indices.remove(i);
                removed = true;
            } else {
                i += 1;
            }
        }
    }

    if indices.len() < 3 {
        return HullNode::default();
    }

    let mut holes = Vec::new();

    // Interior gaps: adjacent survivors more than one step apart in the
    // original cycle bound a notch. The recursion range keeps both
    // survivors, so the notch closes on vertices the parent also carries.
    for w in indices.windows(2) {
        let (a, b) = (w[0], w[1]);
        if (b + n - a) % n > 1 {
            let hole = find_hull(directions, -sign, a, b);
            if !hole.is_empty() {
                holes.push(hole);
            }
        }
    }

    // The wrap-around seam is measured against the requested range bounds,
    // not just the neighboring survivors: vertices dropped from either end
    // of the range collect into one seam notch.
    let first = indices[0];
    let last = indices[indices.len() - 1];
    let seam = if last == final_index && first != initial_index {
        Some((final_index, first))
    } else if first == initial_index && last != final_index {
        Some((last, initial_index))
    } else if first != initial_index && last != final_index {
        Some((last, first))
    } else {
        None
    };
    if let Some((gap_start, gap_end)) = seam {
        let hole = find_hull(directions, -sign, gap_start, gap_end);
        if !hole.is_empty() {
            holes.push(hole);
        }
    }

    HullNode { indices, holes }
}
