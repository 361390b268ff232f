use lantern_macros::packet;
use serde::{Deserialize, Serialize};

/// Picks which bundle entry the next right click takes out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[packet(0x02)]
pub struct SSelectBundleItem {
    pub slot_id: i32,
    pub selected_item_index: i32,
}

impl SSelectBundleItem {
    pub const fn new(slot_id: i32, selected_item_index: i32) -> Self {
        Self {
            slot_id,
            selected_item_index,
        }
    }
}
