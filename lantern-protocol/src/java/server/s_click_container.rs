use lantern_macros::packet;
use serde::{Deserialize, Serialize};

use crate::java::{ClickMode, Slot};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[packet(0x10)]
pub struct SClickContainer {
    pub window_id: u8,
    pub state_id: i32,
    /// `-999` for clicks outside the window.
    pub slot: i16,
    pub button: i8,
    pub mode: ClickMode,
    /// Every slot the click is predicted to change, with its predicted content.
    pub changed_slots: Vec<(i16, Slot)>,
    pub carried_item: Slot,
}

impl SClickContainer {
    pub fn new(
        window_id: u8,
        state_id: i32,
        slot: i16,
        button: i8,
        mode: ClickMode,
        changed_slots: Vec<(i16, Slot)>,
        carried_item: Slot,
    ) -> Self {
        Self {
            window_id,
            state_id,
            slot,
            button,
            mode,
            changed_slots,
            carried_item,
        }
    }
}
