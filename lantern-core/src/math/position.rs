use std::fmt;

use serde::{Deserialize, Serialize};

use super::vector3::Vector3;

/// Aka Block Position
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    pub const UP: Vector3<i32> = Vector3::new(0, 1, 0);
    pub const UNIT_X: Vector3<i32> = Vector3::new(1, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn offset(&self, by: Vector3<i32>) -> Self {
        Self(self.0 + by)
    }

    pub fn up(&self) -> Self {
        self.offset(Self::UP)
    }
}

impl From<Vector3<f64>> for BlockPos {
    fn from(position: Vector3<f64>) -> Self {
        Self(position.to_block())
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}

impl fmt::Debug for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockPos({self})")
    }
}
