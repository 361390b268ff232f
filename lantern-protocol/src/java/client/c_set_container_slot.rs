use lantern_macros::packet;
use serde::Deserialize;

use crate::java::Slot;

/// Window `-1` with slot `-1` targets the cursor.
#[derive(Clone, Debug, Deserialize)]
#[packet(0x14)]
pub struct CSetContainerSlot {
    pub window_id: i8,
    pub state_id: i32,
    pub slot: i16,
    pub slot_data: Slot,
}

impl CSetContainerSlot {
    pub fn new(window_id: i8, state_id: i32, slot: i16, slot_data: Slot) -> Self {
        Self {
            window_id,
            state_id,
            slot,
            slot_data,
        }
    }

    pub fn is_cursor(&self) -> bool {
        self.window_id == -1 && self.slot == -1
    }
}
