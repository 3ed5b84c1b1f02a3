//! Immutable 3D vector type used for world-space math.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::position::BlockPos;

/// A vector in three-dimensional world space.
///
/// Every operation returns a new `Vector3`; no method mutates its
/// receiver. Equality is exact per component, so computed results
/// should be compared with an epsilon by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit vector along the positive x-axis.
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit vector along the positive y-axis.
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit vector along the positive z-axis.
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Unit vector along the negative x-axis.
    pub const UNIT_NX: Vector3 = Vector3::new(-1.0, 0.0, 0.0);

    /// Unit vector along the negative y-axis.
    pub const UNIT_NY: Vector3 = Vector3::new(0.0, -1.0, 0.0);

    /// Unit vector along the negative z-axis.
    pub const UNIT_NZ: Vector3 = Vector3::new(0.0, 0.0, -1.0);

    /// Direction halfway between the positive x- and y-axes.
    pub const UNIT_PXPY: Vector3 = Vector3::new(0.707, 0.707, 0.0);

    /// Direction halfway between the positive y- and z-axes.
    pub const UNIT_PYPZ: Vector3 = Vector3::new(0.0, 0.707, 0.707);

    /// Direction halfway between the positive y- and negative z-axes.
    pub const UNIT_PYNZ: Vector3 = Vector3::new(0.0, 0.707, -0.707);

    /// Direction halfway between the positive y- and negative x-axes.
    pub const UNIT_PYNX: Vector3 = Vector3::new(-0.707, 0.707, 0.0);

    /// Creates a new vector. Components are stored verbatim; NaN and
    /// infinity are accepted and propagate through arithmetic.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns this vector translated by the given component offsets.
    pub fn offset(self, dx: f64, dy: f64, dz: f64) -> Self {
        Vector3::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Computes the dot product with `v`.
    pub fn dot(self, v: Vector3) -> f64 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Computes the cross product with `v`.
    pub fn cross(self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    /// Returns the component-wise minimum of this vector and `v`.
    /// Each axis is taken independently.
    pub fn min(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x.min(v.x), self.y.min(v.y), self.z.min(v.z))
    }

    /// Returns the component-wise maximum of this vector and `v`.
    pub fn max(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x.max(v.x), self.y.max(v.y), self.z.max(v.z))
    }

    /// Returns the Euclidean distance to `v`.
    pub fn distance_to(self, v: Vector3) -> f64 {
        let dx = self.x - v.x;
        let dy = self.y - v.y;
        let dz = self.z - v.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Returns the Euclidean length of this vector.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns this vector scaled to unit length.
    ///
    /// The caller must ensure `length() != 0`: normalizing the zero
    /// vector divides by zero and yields NaN components rather than an
    /// error.
    pub fn normalized(self) -> Vector3 {
        let m = self.length();
        Vector3::new(self.x / m, self.y / m, self.z / m)
    }

    /// Returns the angle in radians between this vector and `v`,
    /// computed as `acos(self.dot(v))`.
    ///
    /// Both vectors must already be unit length; this method does not
    /// normalize. If floating-point drift pushes the dot product
    /// outside `[-1, 1]`, the result is NaN.
    pub fn angle_between(self, v: Vector3) -> f64 {
        self.dot(v).acos()
    }

    /// Returns the largest integer at or below the x-component.
    pub fn floor_x(self) -> i32 {
        self.x.floor() as i32
    }

    /// Returns the largest integer at or below the y-component.
    pub fn floor_y(self) -> i32 {
        self.y.floor() as i32
    }

    /// Returns the largest integer at or below the z-component.
    pub fn floor_z(self) -> i32 {
        self.z.floor() as i32
    }

    /// Returns the block-grid cell containing this position.
    pub fn floor(self) -> BlockPos {
        BlockPos::new(self.floor_x(), self.floor_y(), self.floor_z())
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, c: f64) -> Vector3 {
        Vector3::new(c * self.x, c * self.y, c * self.z)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Sums the segment lengths along an ordered list of points.
pub fn path_length(points: &[Vector3]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(pair[1]))
        .sum()
}
