use lantern_macros::packet;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[packet(0x2F)]
pub struct SContainerClose {
    pub window_id: i8,
    pub server_initiated: bool,
}

impl SContainerClose {
    pub const fn new(window_id: i8) -> Self {
        Self {
            window_id,
            server_initiated: false,
        }
    }
}
