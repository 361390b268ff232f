use lantern_macros::packet;
use serde::{Deserialize, Serialize};

/// Enchantment choice, stonecutter/loom pattern selection and lectern page turns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[packet(0x0F)]
pub struct SContainerButtonClick {
    pub window_id: u8,
    pub button_id: u8,
}

impl SContainerButtonClick {
    pub const fn new(window_id: u8, button_id: u8) -> Self {
        Self {
            window_id,
            button_id,
        }
    }
}
