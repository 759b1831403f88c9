//! Core value types for spherical sensor patterns.

use bytemuck::{Pod, Zeroable};
use glam::DVec3;

/// A pointing direction on the unit sphere, represented as a 3D unit vector.
///
/// This type provides a small `#[repr(C)]` representation with a stable layout
/// so direction arrays can be handed to a rendering host unchanged. Directions
/// are assumed to be on (or near) the unit sphere; the crate may debug-assert
/// normalization but does not normalize inputs.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Direction {
    /// Create a new direction.
    ///
    /// Note: This does NOT normalize the input. The caller is responsible
    /// for ensuring the vector is on the unit sphere.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create from any type implementing `DirectionLike`.
    #[inline]
    pub fn from_like<P: DirectionLike>(p: &P) -> Self {
        Self::new(p.x(), p.y(), p.z())
    }

    /// Convert to a `glam::DVec3`.
    #[inline]
    pub fn to_glam(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Create from a `glam::DVec3`.
    #[inline]
    pub fn from_glam(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Compute the dot product with another direction.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Compute the squared length.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Compute the length.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Normalize the vector.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len, self.z / len)
        } else {
            self
        }
    }
}

impl From<[f64; 3]> for Direction {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Direction> for [f64; 3] {
    #[inline]
    fn from(v: Direction) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<DVec3> for Direction {
    #[inline]
    fn from(v: DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Direction> for DVec3 {
    #[inline]
    fn from(v: Direction) -> DVec3 {
        v.to_glam()
    }
}

/// Trait for types that can be used as input directions.
///
/// This allows zero-copy input from various math libraries.
pub trait DirectionLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;

    /// View as a `glam::DVec3` for internal math.
    #[inline]
    fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x(), self.y(), self.z())
    }
}

impl DirectionLike for Direction {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn z(&self) -> f64 {
        self.z
    }
}

impl DirectionLike for [f64; 3] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
    #[inline]
    fn z(&self) -> f64 {
        self[2]
    }
}

impl DirectionLike for (f64, f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
    #[inline]
    fn z(&self) -> f64 {
        self.2
    }
}

impl DirectionLike for DVec3 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn z(&self) -> f64 {
        self.z
    }
}

/// A pointing angle pair generating a direction.
///
/// `clock` is the rotation in the local XY-plane from +X toward +Y, and
/// `cone` is the angle from the local +Z principal axis toward the XY-plane,
/// both in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub clock: f64,
    pub cone: f64,
}

impl Spherical {
    /// Create a new clock/cone angle pair (radians).
    #[inline]
    pub const fn new(clock: f64, cone: f64) -> Self {
        Self { clock, cone }
    }

    /// Convert to a unit direction.
    #[inline]
    pub fn to_direction(self) -> Direction {
        let radial = self.cone.sin();
        Direction::new(
            radial * self.clock.cos(),
            radial * self.clock.sin(),
            self.cone.cos(),
        )
    }

    /// Component-wise comparison with an absolute tolerance.
    #[inline]
    pub fn equals_epsilon(self, other: Self, epsilon: f64) -> bool {
        (self.clock - other.clock).abs() <= epsilon && (self.cone - other.cone).abs() <= epsilon
    }
}

impl From<Spherical> for Direction {
    #[inline]
    fn from(s: Spherical) -> Self {
        s.to_direction()
    }
}

/// The cosine of a cone's half-angle.
///
/// Containment tests compare directions against this value with plain
/// `>=`/`<` in cosine space; converting to angles would cost an `acos` per
/// test and lose precision near zero. A larger cosine means a narrower cone.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CosineHalfAngle(pub f64);

impl CosineHalfAngle {
    /// Wrap a raw cosine value.
    #[inline]
    pub const fn new(cosine: f64) -> Self {
        Self(cosine)
    }

    /// The half-angle in radians. For display and tests; containment tests
    /// should stay in cosine space.
    #[inline]
    pub fn angle(self) -> f64 {
        self.0.clamp(-1.0, 1.0).acos()
    }
}

/// Unnormalized midpoint of two adjacent pointing directions, with its
/// squared magnitude cached. The rendering host interpolates across these to
/// shade sensor faces, so the layout is stable and GPU-friendly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Bisector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub magnitude_squared: f64,
}

impl Bisector {
    /// Build from the unnormalized midpoint vector.
    #[inline]
    pub fn from_glam(v: DVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            magnitude_squared: v.length_squared(),
        }
    }

    /// The midpoint vector.
    #[inline]
    pub fn to_glam(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}
