use lantern_macros::packet;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[packet(0x35)]
pub struct COpenScreen {
    pub window_id: i32,
    /// Java menu type registry id.
    pub window_type: i32,
    pub window_title: String,
}

impl COpenScreen {
    pub fn new(window_id: i32, window_type: i32, window_title: impl Into<String>) -> Self {
        Self {
            window_id,
            window_type,
            window_title: window_title.into(),
        }
    }
}
