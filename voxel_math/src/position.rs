//! Conversion boundary between position-bearing objects and [`Vector3`].

use crate::vector::Vector3;

/// Anything that carries a world-space position as three coordinates.
///
/// Converting a `Positioned` value copies its coordinates at call time;
/// the resulting vector keeps no link back to the source.
pub trait Positioned {
    fn pos_x(&self) -> f64;
    fn pos_y(&self) -> f64;
    fn pos_z(&self) -> f64;
}

impl Positioned for Vector3 {
    fn pos_x(&self) -> f64 {
        self.x
    }

    fn pos_y(&self) -> f64 {
        self.y
    }

    fn pos_z(&self) -> f64 {
        self.z
    }
}

impl<P: Positioned> From<&P> for Vector3 {
    fn from(source: &P) -> Self {
        Vector3::new(source.pos_x(), source.pos_y(), source.pos_z())
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(v: Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// Integer coordinates of a cell in the voxel block grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// Creates a new block position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl Positioned for BlockPos {
    fn pos_x(&self) -> f64 {
        f64::from(self.x)
    }

    fn pos_y(&self) -> f64 {
        f64::from(self.y)
    }

    fn pos_z(&self) -> f64 {
        f64::from(self.z)
    }
}

impl From<BlockPos> for Vector3 {
    fn from(p: BlockPos) -> Self {
        Vector3::new(f64::from(p.x), f64::from(p.y), f64::from(p.z))
    }
}
