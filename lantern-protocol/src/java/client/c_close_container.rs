use lantern_macros::packet;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[packet(0x11)]
pub struct CCloseContainer {
    pub window_id: u8,
}

impl CCloseContainer {
    pub const fn new(window_id: u8) -> Self {
        Self { window_id }
    }
}
