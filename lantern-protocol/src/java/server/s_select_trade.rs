use lantern_macros::packet;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[packet(0x31)]
pub struct SSelectTrade {
    pub selected_slot: i32,
}

impl SSelectTrade {
    pub const fn new(selected_slot: i32) -> Self {
        Self { selected_slot }
    }
}
