use lantern_macros::packet;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x2F)]
pub struct CContainerClose {
    pub window_id: i8,
    /// Whether the server is closing the window, as opposed to confirming a client close.
    pub server_initiated: bool,
}

impl CContainerClose {
    pub const fn new(window_id: i8, server_initiated: bool) -> Self {
        Self {
            window_id,
            server_initiated,
        }
    }
}
