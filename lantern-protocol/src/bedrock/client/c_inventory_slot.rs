use lantern_macros::packet;
use serde::Serialize;

use crate::bedrock::ItemData;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x32)]
pub struct CInventorySlot {
    pub container_id: i32,
    pub slot: u32,
    pub item: ItemData,
}

impl CInventorySlot {
    pub fn new(container_id: i32, slot: u32, item: ItemData) -> Self {
        Self {
            container_id,
            slot,
            item,
        }
    }
}
