use lantern_core::{math::BlockPos, ItemStack};
use lantern_protocol::bedrock::client::CUpdateTrade;

use crate::{context::NetIds, player::StateIds, WindowType};

/// Borrowable empty stack; `ItemStack::EMPTY` is a const and cannot be referenced with `'static` lifetime.
static EMPTY_STACK: ItemStack = ItemStack::EMPTY;

/// Bedrock window id for a Java window id. Bedrock only has `1..=100` for containers.
pub fn bedrock_window_id(java_id: u8) -> i8 {
    if java_id <= 100 {
        java_id as i8
    } else {
        (java_id % 100) as i8 + 1
    }
}

/// Where the client-side block backing a window lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HolderPosition {
    pub position: BlockPos,
    /// The player is using a real block; nothing to restore on close.
    pub real_block: bool,
    /// Second half of a double chest placeholder.
    pub paired: Option<BlockPos>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnvilState {
    /// Name the client typed, as last forwarded to the server.
    pub new_name: Option<String>,
    pub java_level_cost: i32,
    pub use_java_level_cost: bool,
    /// Input item as last seen, to notice when it is swapped out.
    pub last_input: ItemStack,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BeaconState {
    /// Bedrock effect ids, `0` for none.
    pub primary: i32,
    pub secondary: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnchantOption {
    pub xp_cost: i32,
    /// Java enchantment id, `-1` for none.
    pub java_enchantment: i32,
    pub level: i32,
    /// Id the client echoes back when picking this option, `0` until first sent.
    pub net_id: u32,
    /// Changed since the client was last told.
    pub dirty: bool,
}

impl Default for EnchantOption {
    fn default() -> Self {
        Self {
            xp_cost: 0,
            java_enchantment: -1,
            level: -1,
            net_id: 0,
            dirty: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnchantingState {
    pub options: [EnchantOption; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StonecutterState {
    /// Selected recipe button, `-1` for none.
    pub button: i32,
}

impl Default for StonecutterState {
    fn default() -> Self {
        Self { button: -1 }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MerchantState {
    /// Client-side villager the trade screen is attached to.
    pub villager: Option<i64>,
    pub trades: Option<CUpdateTrade>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrafterState {
    pub triggered: bool,
    /// Bit `n` set when grid slot `n` is disabled.
    pub disabled_slots: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LecternState {
    pub page: i32,
}

/// Per-kind state the translators keep beside the slots.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ContainerState {
    #[default]
    Plain,
    Anvil(AnvilState),
    Beacon(BeaconState),
    Enchanting(EnchantingState),
    Stonecutter(StonecutterState),
    Merchant(MerchantState),
    Crafter(CrafterState),
    Lectern(LecternState),
}

/// An open container window: its own slots, followed in Java numbering by the
/// player's 36 storage slots and then any extra slots (the crafter result).
pub struct Container {
    pub java_id: u8,
    pub bedrock_id: i8,
    pub window_type: WindowType,
    pub title: String,
    size: usize,
    items: Vec<ItemStack>,
    pub state_ids: StateIds,
    pub holder: HolderPosition,
    /// Waiting for the client to finish closing the previous window.
    pub pending: bool,
    pub displayed: bool,
    pub state: ContainerState,
}

impl Container {
    pub fn new(
        java_id: u8,
        window_type: WindowType,
        title: impl Into<String>,
        size: usize,
        extra_slots: usize,
        state: ContainerState,
    ) -> Self {
        Self {
            java_id,
            bedrock_id: bedrock_window_id(java_id),
            window_type,
            title: title.into(),
            size,
            items: vec![ItemStack::EMPTY; size + extra_slots],
            state_ids: StateIds::default(),
            holder: HolderPosition::default(),
            pending: false,
            displayed: false,
            state,
        }
    }

    /// Slots before the player storage part.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Slots after the player storage part.
    pub fn extra_slots(&self) -> usize {
        self.items.len() - self.size
    }

    /// An own slot, by index into the container's storage (not the Java window index).
    pub fn item(&self, index: usize) -> &ItemStack {
        self.items.get(index).unwrap_or(&EMPTY_STACK)
    }

    pub fn set_item(&mut self, index: usize, mut item: ItemStack, net_ids: &mut NetIds) {
        let Some(current) = self.items.get_mut(index) else {
            log::warn!("Ignoring write to slot {index} of window {}", self.java_id);
            return;
        };
        net_ids.assign(current, &mut item);
        *current = item;
    }

    /// The container's own slots, extras included.
    pub fn items(&self) -> &[ItemStack] {
        &self.items
    }
}
