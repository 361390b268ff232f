use lantern_core::math::BlockPos;
use lantern_macros::packet;
use serde::Serialize;

use crate::bedrock::BedrockContainerType;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x2E)]
pub struct CContainerOpen {
    pub window_id: i8,
    pub container_type: BedrockContainerType,
    pub position: BlockPos,
    /// Unique id of the entity backing the window, `-1` for blocks.
    pub unique_entity_id: i64,
}

impl CContainerOpen {
    pub fn block(window_id: i8, container_type: BedrockContainerType, position: BlockPos) -> Self {
        Self {
            window_id,
            container_type,
            position,
            unique_entity_id: -1,
        }
    }

    pub fn entity(window_id: i8, container_type: BedrockContainerType, unique_entity_id: i64) -> Self {
        Self {
            window_id,
            container_type,
            position: BlockPos::default(),
            unique_entity_id,
        }
    }
}
