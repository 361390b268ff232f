use lantern_macros::packet;
use serde::Serialize;

use crate::bedrock::BlockEntityData;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x38)]
pub struct CBlockEntityData {
    pub data: BlockEntityData,
}

impl CBlockEntityData {
    pub fn new(data: BlockEntityData) -> Self {
        Self { data }
    }
}
