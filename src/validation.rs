//! Combinatorial validation for hull decompositions.
//!
//! Provides functions to verify structural correctness of a hull tree
//! against its direction sequence. Useful for debugging, testing, and
//! catching numerical issues.

use std::collections::HashSet;

use crate::convex_hull::HullNode;

/// Detailed validation report for a hull decomposition.
#[derive(Debug, Clone, Default)]
pub struct HullReport {
    /// Number of directions in the original sequence.
    pub num_directions: usize,
    /// Number of vertices on the outer hull.
    pub hull_len: usize,
    /// Total nodes in the tree (outer hull plus all nested holes).
    pub num_nodes: usize,
    /// Maximum nesting depth; 1 for a hull without holes.
    pub max_depth: usize,

    /// Indices never claimed by the hull or any hole.
    pub missing_indices: usize,
    /// Indices claimed by more than one node (boundary vertices shared
    /// between a hole and its parent are expected and not counted).
    pub multiply_covered: usize,
    /// Indices outside the direction sequence.
    pub out_of_range: usize,
    /// Nested nodes carrying no indices (should have been pruned).
    pub empty_nodes: usize,
    /// Nodes whose index list breaks the original cyclic order.
    pub unordered_nodes: usize,
}

impl HullReport {
    /// Check structural correctness.
    ///
    /// A degenerate sequence (fewer than 3 directions) is valid exactly
    /// when the hull is empty, and a fully collapsed polygon (wrong
    /// winding) is a valid empty result. Otherwise every index must be
    /// claimed once, every node ordered, and no node empty.
    pub fn is_valid(&self) -> bool {
        if self.num_directions < 3 || self.hull_len == 0 {
            return self.hull_len == 0 && self.num_nodes == 1;
        }
        self.missing_indices == 0
            && self.multiply_covered == 0
            && self.out_of_range == 0
            && self.empty_nodes == 0
            && self.unordered_nodes == 0
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return "Valid".to_string();
        }

        let mut issues = Vec::new();
        if self.missing_indices > 0 {
            issues.push(format!("{} missing indices", self.missing_indices));
        }
        if self.multiply_covered > 0 {
            issues.push(format!("{} multiply covered", self.multiply_covered));
        }
        if self.out_of_range > 0 {
            issues.push(format!("{} out of range", self.out_of_range));
        }
        if self.empty_nodes > 0 {
            issues.push(format!("{} empty nodes", self.empty_nodes));
        }
        if self.unordered_nodes > 0 {
            issues.push(format!("{} unordered nodes", self.unordered_nodes));
        }
        issues.join(", ")
    }
}

impl std::fmt::Display for HullReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HullReport {{ N={}, hull={}, nodes={}, depth={}, {} }}",
            self.num_directions,
            self.hull_len,
            self.num_nodes,
            self.max_depth,
            self.summary()
        )
    }
}

/// Validate a hull decomposition against its direction sequence length.
///
/// Checks:
/// - Coverage: every index appears in the hull or exactly one hole,
///   counting a hole's boundary vertices (those shared with its parent)
///   toward the parent only
/// - Cyclic order: each node's indices respect the original cyclic order
/// - Structure: no empty nested nodes, no out-of-range indices
pub fn validate(hull: &HullNode, num_directions: usize) -> HullReport {
    let mut report = HullReport {
        num_directions,
        hull_len: hull.indices.len(),
        ..HullReport::default()
    };

    let mut counts = vec![0usize; num_directions];
    walk(hull, None, 1, &mut report, &mut counts);

    report.missing_indices = counts.iter().filter(|&&c| c == 0).count();
    report.multiply_covered = counts.iter().filter(|&&c| c > 1).count();
    report
}

fn walk(
    node: &HullNode,
    parent: Option<&HullNode>,
    depth: usize,
    report: &mut HullReport,
    counts: &mut [usize],
) {
    report.num_nodes += 1;
    report.max_depth = report.max_depth.max(depth);

    if parent.is_some() && node.indices.is_empty() {
        report.empty_nodes += 1;
    }

    let parent_indices: Option<HashSet<usize>> =
        parent.map(|p| p.indices.iter().copied().collect());

    for &idx in &node.indices {
        if idx >= counts.len() {
            report.out_of_range += 1;
            continue;
        }
        let shared = parent_indices
            .as_ref()
            .map_or(false, |set| set.contains(&idx));
        if !shared {
            counts[idx] += 1;
        }
    }

    // Steps between consecutive indices (wraparound included) tour the
    // original cycle exactly once when the node preserves cyclic order.
    // Only meaningful when every index is in range.
    let n = counts.len();
    let in_range = node.indices.iter().all(|&idx| idx < n);
    if node.indices.len() >= 2 && n > 0 && in_range {
        let mut total = 0usize;
        for w in node.indices.windows(2) {
            total += (w[1] + n - w[0]) % n;
        }
        let first = node.indices[0];
        let last = node.indices[node.indices.len() - 1];
        total += (first + n - last) % n;
        if total != n {
            report.unordered_nodes += 1;
        }
    }

    for hole in &node.holes {
        walk(hole, Some(node), depth + 1, report, counts);
    }
}
