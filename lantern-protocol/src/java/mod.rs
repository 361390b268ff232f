use bytes::Bytes;
use lantern_core::ItemStack;
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

pub mod client;
pub mod server;

/// Item as it travels in Java container packets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub item_count: u32,
    pub item_id: i32,
    /// Data components, opaque to the bridge.
    pub components: Bytes,
}

impl Slot {
    pub const EMPTY: Slot = Slot {
        item_count: 0,
        item_id: 0,
        components: Bytes::new(),
    };

    /// An item the server can never agree with, forcing it to answer with a full resync.
    pub fn refresh() -> Self {
        Self {
            item_count: 127,
            item_id: 1,
            components: Bytes::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0 || self.item_id == 0
    }
}

impl From<&ItemStack> for Slot {
    fn from(stack: &ItemStack) -> Self {
        if stack.is_empty() {
            return Self::EMPTY;
        }
        Self {
            item_count: stack.count,
            item_id: stack.item_id,
            components: stack.extra_data.clone(),
        }
    }
}

/// `mode` field of the click container packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ClickMode {
    Pickup = 0,
    QuickMove = 1,
    Swap = 2,
    Clone = 3,
    Throw = 4,
    QuickCraft = 5,
    PickupAll = 6,
}

impl From<ClickMode> for i32 {
    fn from(mode: ClickMode) -> Self {
        mode as i32
    }
}

impl TryFrom<i32> for ClickMode {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_i32(value).ok_or_else(|| format!("unknown click mode {value}"))
    }
}
