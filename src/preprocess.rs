//! Input preprocessing for pointing-angle sequences.
//!
//! Sensor patterns arrive as clock/cone angle pairs, often exported from
//! tools that repeat the closing vertex or emit back-to-back duplicates.
//! The polygon core requires adjacent vertices to be distinct (wraparound
//! pair included), so duplicates are merged here before conversion to unit
//! directions.

use crate::types::Spherical;

/// Default tolerance for clock/cone equality.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Remove adjacent duplicate pointing angles, comparing clock and cone with
/// an absolute tolerance.
///
/// The sequence is cyclic: after collapsing interior runs, a trailing entry
/// that duplicates the first is dropped as well. Order is otherwise
/// preserved. Empty input yields empty output.
pub fn remove_adjacent_duplicates(angles: &[Spherical], epsilon: f64) -> Vec<Spherical> {
    let mut result: Vec<Spherical> = Vec::with_capacity(angles.len());
    for &angle in angles {
        match result.last() {
            Some(prev) if prev.equals_epsilon(angle, epsilon) => {}
            _ => result.push(angle),
        }
    }

    while result.len() > 1 {
        let first = result[0];
        let last = result[result.len() - 1];
        if last.equals_epsilon(first, epsilon) {
            result.pop();
        } else {
            break;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angles(pairs: &[(f64, f64)]) -> Vec<Spherical> {
        pairs.iter().map(|&(c, k)| Spherical::new(c, k)).collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert!(remove_adjacent_duplicates(&[], DEFAULT_EPSILON).is_empty());
        let one = angles(&[(0.5, 0.25)]);
        assert_eq!(remove_adjacent_duplicates(&one, DEFAULT_EPSILON), one);
    }

    #[test]
    fn test_no_duplicates_unchanged() {
        let input = angles(&[(0.0, 0.5), (1.0, 0.5), (2.0, 0.5), (3.0, 0.5)]);
        assert_eq!(remove_adjacent_duplicates(&input, DEFAULT_EPSILON), input);
    }

    #[test]
    fn test_interior_run_collapses() {
        let input = angles(&[
            (0.0, 0.5),
            (1.0, 0.5),
            (1.0 + 1e-12, 0.5),
            (1.0, 0.5 - 1e-12),
            (2.0, 0.5),
        ]);
        let expected = angles(&[(0.0, 0.5), (1.0, 0.5), (2.0, 0.5)]);
        assert_eq!(remove_adjacent_duplicates(&input, DEFAULT_EPSILON), expected);
    }

    #[test]
    fn test_wraparound_duplicate_dropped() {
        // A repeated closing vertex disappears.
        let input = angles(&[(0.0, 0.5), (1.0, 0.5), (2.0, 0.5), (0.0 + 1e-12, 0.5)]);
        let expected = angles(&[(0.0, 0.5), (1.0, 0.5), (2.0, 0.5)]);
        assert_eq!(remove_adjacent_duplicates(&input, DEFAULT_EPSILON), expected);
    }

    #[test]
    fn test_all_equal_collapses_to_one() {
        let input = angles(&[(1.0, 0.5), (1.0, 0.5), (1.0, 0.5)]);
        assert_eq!(remove_adjacent_duplicates(&input, DEFAULT_EPSILON).len(), 1);
    }

    #[test]
    fn test_distinct_at_tolerance_kept() {
        let input = angles(&[(0.0, 0.5), (1e-6, 0.5), (2e-6, 0.5)]);
        assert_eq!(remove_adjacent_duplicates(&input, DEFAULT_EPSILON), input);
    }
}
