use lantern_core::math::Vector3;
use lantern_macros::packet;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x0D)]
pub struct CAddEntity {
    pub unique_entity_id: i64,
    pub runtime_entity_id: u64,
    /// Namespaced entity type, e.g. `minecraft:villager_v2`.
    pub identifier: String,
    pub position: Vector3<f32>,
    /// Invisible, no gravity, no AI.
    pub hidden: bool,
}

impl CAddEntity {
    pub fn hidden(unique_entity_id: i64, identifier: impl Into<String>, position: Vector3<f32>) -> Self {
        Self {
            unique_entity_id,
            runtime_entity_id: unique_entity_id as u64,
            identifier: identifier.into(),
            position,
            hidden: true,
        }
    }
}
