use lantern_macros::packet;
use serde::Serialize;

/// Property keys understood by the client.
pub mod container_data {
    pub const FURNACE_TICK_COUNT: i32 = 0;
    pub const FURNACE_LIT_TIME: i32 = 1;
    pub const FURNACE_LIT_DURATION: i32 = 2;
    pub const FURNACE_STORED_XP: i32 = 3;
    pub const FURNACE_FUEL_AUX: i32 = 4;

    pub const BREWING_STAND_BREW_TIME: i32 = 0;
    pub const BREWING_STAND_FUEL_AMOUNT: i32 = 1;
    pub const BREWING_STAND_FUEL_TOTAL: i32 = 2;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x33)]
pub struct CContainerSetData {
    pub window_id: i8,
    pub property: i32,
    pub value: i32,
}

impl CContainerSetData {
    pub const fn new(window_id: i8, property: i32, value: i32) -> Self {
        Self {
            window_id,
            property,
            value,
        }
    }
}
