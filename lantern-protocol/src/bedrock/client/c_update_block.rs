use lantern_core::math::BlockPos;
use lantern_macros::packet;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x15)]
pub struct CUpdateBlock {
    pub position: BlockPos,
    pub runtime_id: u32,
    pub flags: u8,
    pub layer: u8,
}

impl CUpdateBlock {
    pub const FLAG_NEIGHBORS: u8 = 0b001;
    pub const FLAG_NETWORK: u8 = 0b010;
    pub const FLAG_PRIORITY: u8 = 0b1000;

    pub const fn new(position: BlockPos, runtime_id: u32) -> Self {
        Self {
            position,
            runtime_id,
            flags: Self::FLAG_NEIGHBORS | Self::FLAG_NETWORK | Self::FLAG_PRIORITY,
            layer: 0,
        }
    }
}
