use lantern_macros::packet;
use serde::Deserialize;

use crate::java::Slot;

#[derive(Clone, Debug, Deserialize)]
#[packet(0x12)]
pub struct CSetContainerContent {
    pub window_id: u8,
    pub state_id: i32,
    pub slot_data: Vec<Slot>,
    pub carried_item: Slot,
}

impl CSetContainerContent {
    pub fn new(window_id: u8, state_id: i32, slot_data: Vec<Slot>, carried_item: Slot) -> Self {
        Self {
            window_id,
            state_id,
            slot_data,
            carried_item,
        }
    }
}
