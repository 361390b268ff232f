use lantern_core::ItemStack;
use lantern_protocol::bedrock::container_id;

use crate::{
    container::Container,
    context::NetIds,
    player::{PlayerInventory, StateIds, HOTBAR_OFFSET, PLAYER_WINDOW_SIZE},
    slot::{PLAYER_INVENTORY_OFFSET, PLAYER_INVENTORY_SIZE},
};

/// Borrowable empty stack; `ItemStack::EMPTY` is a const and cannot be referenced with `'static` lifetime.
static EMPTY_STACK: ItemStack = ItemStack::EMPTY;

/// The window the player currently sees, addressed with Java slot indices.
///
/// Without a container this is the player window itself.
pub struct Window<'a> {
    pub player: &'a mut PlayerInventory,
    pub container: Option<&'a mut Container>,
}

enum Backing {
    Player(usize),
    Container(usize),
    None,
}

impl<'a> Window<'a> {
    pub fn new(player: &'a mut PlayerInventory, container: Option<&'a mut Container>) -> Self {
        Self { player, container }
    }

    pub fn java_id(&self) -> u8 {
        self.container.as_ref().map_or(0, |container| container.java_id)
    }

    pub fn bedrock_id(&self) -> i8 {
        self.container
            .as_ref()
            .map_or(container_id::INVENTORY, |container| container.bedrock_id)
    }

    pub fn container(&self) -> Option<&Container> {
        self.container.as_deref()
    }

    pub fn container_mut(&mut self) -> Option<&mut Container> {
        self.container.as_deref_mut()
    }

    /// Slots before the player's storage part; the whole window for the player window.
    pub fn size(&self) -> usize {
        self.container().map_or(PLAYER_WINDOW_SIZE, Container::size)
    }

    /// Every Java slot of the window.
    pub fn len(&self) -> usize {
        self.container().map_or(PLAYER_WINDOW_SIZE, |container| {
            container.size() + PLAYER_INVENTORY_SIZE + container.extra_slots()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Java index of hotbar slot 0.
    pub fn hotbar_offset(&self) -> usize {
        self.container()
            .map_or(HOTBAR_OFFSET, |container| container.size() + 27)
    }

    fn backing(&self, slot: usize) -> Backing {
        let Some(container) = self.container() else {
            return Backing::Player(slot);
        };
        let size = container.size();
        if slot < size {
            Backing::Container(slot)
        } else if slot < size + PLAYER_INVENTORY_SIZE {
            Backing::Player(slot - size + PLAYER_INVENTORY_OFFSET)
        } else if slot < self.len() {
            Backing::Container(slot - PLAYER_INVENTORY_SIZE)
        } else {
            Backing::None
        }
    }

    pub fn item(&self, slot: usize) -> &ItemStack {
        match self.backing(slot) {
            Backing::Player(index) => self.player.item(index),
            Backing::Container(index) => self
                .container()
                .map_or(&EMPTY_STACK, |container| container.item(index)),
            Backing::None => &EMPTY_STACK,
        }
    }

    pub fn set_item(&mut self, slot: usize, item: ItemStack, net_ids: &mut NetIds) {
        match self.backing(slot) {
            Backing::Player(index) => self.player.set_item(index, item, net_ids),
            Backing::Container(index) => {
                if let Some(container) = self.container_mut() {
                    container.set_item(index, item, net_ids);
                }
            }
            Backing::None => log::warn!("Ignoring write to slot {slot} of window {}", self.java_id()),
        }
    }

    pub fn cursor(&self) -> &ItemStack {
        self.player.cursor()
    }

    pub fn set_cursor(&mut self, item: ItemStack, net_ids: &mut NetIds) {
        self.player.set_cursor(item, net_ids);
    }

    pub fn state_ids(&self) -> StateIds {
        self.container()
            .map_or(self.player.state, |container| container.state_ids)
    }

    pub fn state_ids_mut(&mut self) -> &mut StateIds {
        match self.container.as_deref_mut() {
            Some(container) => &mut container.state_ids,
            None => &mut self.player.state,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{container::ContainerState, WindowType};

    #[test]
    fn container_window_shares_player_storage() {
        let mut net_ids = NetIds::default();
        let mut player = PlayerInventory::new();
        let mut chest = Container::new(1, WindowType::Generic9x3, "Chest", 27, 0, ContainerState::Plain);
        {
            let mut window = Window::new(&mut player, Some(&mut chest));
            assert_eq!(window.len(), 63);
            assert_eq!(window.hotbar_offset(), 54);
            window.set_item(54, ItemStack::new(1, 5, 64), &mut net_ids);
            window.set_item(0, ItemStack::new(2, 1, 64), &mut net_ids);
        }
        assert_eq!(player.held_item().count, 5);
        assert_eq!(chest.item(0).count, 1);
    }

    #[test]
    fn extra_slots_come_after_player_storage() {
        let mut net_ids = NetIds::default();
        let mut player = PlayerInventory::new();
        let mut crafter = Container::new(2, WindowType::Crafter3x3, "", 9, 1, ContainerState::Plain);
        let mut window = Window::new(&mut player, Some(&mut crafter));
        window.set_item(45, ItemStack::new(7, 1, 64), &mut net_ids);
        assert_eq!(window.item(45).item_id, 7);
        assert!(window.item(46).is_empty());
        drop(window);
        assert_eq!(crafter.item(9).item_id, 7);
    }

    #[test]
    fn player_window_is_flat() {
        let mut net_ids = NetIds::default();
        let mut player = PlayerInventory::new();
        let mut window = Window::new(&mut player, None);
        assert_eq!(window.bedrock_id(), container_id::INVENTORY);
        assert_eq!(window.hotbar_offset(), 36);
        window.set_item(45, ItemStack::new(3, 1, 64), &mut net_ids);
        window.state_ids_mut().increment(1);
        assert_eq!(window.state_ids().next_state_id, 1);
        assert_eq!(player.item(45).item_id, 3);
    }
}
