use lantern_macros::packet;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x0E)]
pub struct CRemoveEntity {
    pub unique_entity_id: i64,
}

impl CRemoveEntity {
    pub const fn new(unique_entity_id: i64) -> Self {
        Self { unique_entity_id }
    }
}
