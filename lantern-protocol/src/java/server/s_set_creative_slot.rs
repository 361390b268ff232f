use lantern_macros::packet;
use serde::{Deserialize, Serialize};

use crate::java::Slot;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[packet(0x36)]
pub struct SSetCreativeSlot {
    /// `-1` drops the item.
    pub slot: i16,
    pub clicked_item: Slot,
}

impl SSetCreativeSlot {
    pub fn new(slot: i16, clicked_item: Slot) -> Self {
        Self { slot, clicked_item }
    }
}
