#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spherical_polygon::{Direction, Spherical};
use std::f64::consts::PI;

/// A square pattern: four pointing angles 90° apart in clock, at the given
/// cone angle (degrees).
pub fn square_pattern(cone_deg: f64) -> Vec<Direction> {
    ring_pattern(4, cone_deg)
}

/// An evenly spaced ring of pointing angles at a constant cone angle
/// (degrees). Convex by construction.
pub fn ring_pattern(count: usize, cone_deg: f64) -> Vec<Direction> {
    let cone = cone_deg.to_radians();
    (0..count)
        .map(|i| Spherical::new(2.0 * PI * i as f64 / count as f64, cone).to_direction())
        .collect()
}

/// A star pattern: `pairs` outer/inner vertex pairs with alternating cone
/// angles (degrees). Concave whenever the inner cone is pulled well inside
/// the outer ring's edge arcs.
pub fn star_pattern(pairs: usize, outer_deg: f64, inner_deg: f64) -> Vec<Direction> {
    let outer = outer_deg.to_radians();
    let inner = inner_deg.to_radians();
    (0..2 * pairs)
        .map(|i| {
            let cone = if i % 2 == 0 { outer } else { inner };
            Spherical::new(PI * i as f64 / pairs as f64, cone).to_direction()
        })
        .collect()
}

/// A random convex ring: constant cone angle, evenly spaced clocks with
/// bounded jitter so no gap approaches a half-turn.
pub fn random_ring_pattern(seed: u64) -> Vec<Direction> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let count = rng.gen_range(6..=12);
    let cone = rng.gen_range(5.0f64..85.0).to_radians();
    let spacing = 2.0 * PI / count as f64;
    (0..count)
        .map(|i| {
            let clock = spacing * i as f64 + rng.gen_range(-0.4..0.4) * spacing;
            Spherical::new(clock, cone).to_direction()
        })
        .collect()
}

/// A random star pattern with a guaranteed-reflex inner ring.
///
/// The inner cone angle stays well under the sag of the great-circle arc
/// between neighboring outer vertices (`atan(tan(outer) * cos(pi / pairs))`),
/// so every inner vertex folds inward and every outer vertex survives, for
/// any jitter within the margins used here.
pub fn random_star_pattern(seed: u64) -> Vec<Direction> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let pairs = rng.gen_range(3usize..=8);
    let outer = rng.gen_range(25.0f64..60.0).to_radians();
    let sag = (outer.tan() * (PI / pairs as f64).cos()).atan();
    let inner = rng.gen_range(0.35..0.8) * sag;
    (0..2 * pairs)
        .map(|i| {
            let clock = PI * i as f64 / pairs as f64 + rng.gen_range(-0.02..0.02);
            let cone = if i % 2 == 0 { outer } else { inner } + rng.gen_range(-0.01..0.01);
            Spherical::new(clock, cone).to_direction()
        })
        .collect()
}

/// An irregular pattern: clock-ordered vertices with independently random
/// cone angles. Usually wildly concave, with nested notches.
pub fn irregular_pattern(seed: u64) -> Vec<Direction> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let count = rng.gen_range(4usize..=16);
    let spacing = 2.0 * PI / count as f64;
    (0..count)
        .map(|i| {
            let clock = spacing * i as f64 + rng.gen_range(-0.45..0.45) * spacing;
            let cone = rng.gen_range(10.0f64..80.0).to_radians();
            Spherical::new(clock, cone).to_direction()
        })
        .collect()
}

/// Random directions scattered over a spherical cap (not a polygon; for
/// exercising the cone solvers directly). `sqrt` spreads them evenly in
/// area.
pub fn cap_directions(count: usize, cap_deg: f64, seed: u64) -> Vec<Direction> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cap = cap_deg.to_radians();
    (0..count)
        .map(|_| {
            let clock = rng.gen_range(0.0..2.0 * PI);
            let cone = cap * rng.gen_range(0.0f64..1.0).sqrt();
            Spherical::new(clock, cone).to_direction()
        })
        .collect()
}
