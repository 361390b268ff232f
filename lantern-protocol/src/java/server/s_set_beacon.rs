use lantern_macros::packet;
use serde::{Deserialize, Serialize};

/// Effects are mob effect registry ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[packet(0x32)]
pub struct SSetBeacon {
    pub primary_effect: Option<i32>,
    pub secondary_effect: Option<i32>,
}

impl SSetBeacon {
    pub const fn new(primary_effect: Option<i32>, secondary_effect: Option<i32>) -> Self {
        Self {
            primary_effect,
            secondary_effect,
        }
    }
}
