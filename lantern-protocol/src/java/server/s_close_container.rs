use lantern_macros::packet;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[packet(0x11)]
pub struct SCloseContainer {
    pub window_id: u8,
}

impl SCloseContainer {
    pub const fn new(window_id: u8) -> Self {
        Self { window_id }
    }
}
