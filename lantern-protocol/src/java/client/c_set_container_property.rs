use lantern_macros::packet;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[packet(0x13)]
pub struct CSetContainerProperty {
    pub window_id: u8,
    pub property: i16,
    pub value: i16,
}

impl CSetContainerProperty {
    pub const fn new(window_id: u8, property: i16, value: i16) -> Self {
        Self {
            window_id,
            property,
            value,
        }
    }
}
