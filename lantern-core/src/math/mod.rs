pub mod fraction;
pub mod position;
pub mod vector3;

pub use fraction::Fraction;
pub use position::BlockPos;
pub use vector3::Vector3;
