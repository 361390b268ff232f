use lantern_core::ItemStack;

use crate::context::NetIds;

/// Borrowable empty stack; `ItemStack::EMPTY` is a const and cannot be referenced with `'static` lifetime.
static EMPTY_STACK: ItemStack = ItemStack::EMPTY;

/// Slots in the Java player window: crafting output and grid, armor, main inventory, hotbar, offhand.
pub const PLAYER_WINDOW_SIZE: usize = 46;
pub const HOTBAR_OFFSET: usize = 36;
pub const OFFHAND_SLOT: usize = 45;

/// Java window state id, plus the id predicted for the next click within one request batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateIds {
    pub state_id: i32,
    /// `-1` when no click of the current batch advanced the server's counter.
    pub next_state_id: i32,
}

impl Default for StateIds {
    fn default() -> Self {
        Self {
            state_id: 0,
            next_state_id: -1,
        }
    }
}

impl StateIds {
    /// The id the next click should carry.
    pub fn for_click(&self) -> i32 {
        if self.next_state_id != -1 {
            self.next_state_id
        } else {
            self.state_id
        }
    }

    pub fn increment(&mut self, count: i32) {
        let base = if self.next_state_id == -1 {
            self.state_id
        } else {
            self.next_state_id
        };
        self.next_state_id = (base + count) & 0x7FFF;
    }

    pub fn reset_next(&mut self) {
        self.next_state_id = -1;
    }
}

/// The player's own inventory, indexed as in the Java player window, plus the cursor.
///
/// Lives as long as the session; every container window shares its storage slots and cursor.
pub struct PlayerInventory {
    items: Vec<ItemStack>,
    cursor: ItemStack,
    /// Selected hotbar slot, `0..9`.
    pub held_slot: usize,
    pub state: StateIds,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerInventory {
    pub fn new() -> Self {
        Self {
            items: vec![ItemStack::EMPTY; PLAYER_WINDOW_SIZE],
            cursor: ItemStack::EMPTY,
            held_slot: 0,
            state: StateIds::default(),
        }
    }

    pub fn item(&self, slot: usize) -> &ItemStack {
        self.items.get(slot).unwrap_or(&EMPTY_STACK)
    }

    /// Stores `item`, keeping the previous occupant's net id when the item is unchanged.
    pub fn set_item(&mut self, slot: usize, mut item: ItemStack, net_ids: &mut NetIds) {
        let Some(current) = self.items.get_mut(slot) else {
            log::warn!("Ignoring write to player slot {slot}");
            return;
        };
        net_ids.assign(current, &mut item);
        *current = item;
    }

    pub fn cursor(&self) -> &ItemStack {
        &self.cursor
    }

    pub fn set_cursor(&mut self, mut item: ItemStack, net_ids: &mut NetIds) {
        net_ids.assign(&self.cursor, &mut item);
        self.cursor = item;
    }

    pub fn held_item(&self) -> &ItemStack {
        self.item(HOTBAR_OFFSET + self.held_slot)
    }

    pub fn slots(&self) -> &[ItemStack] {
        &self.items
    }
}
