use lantern_protocol::bedrock::{ContainerSlotType, ItemStackRequestSlotData};

/// Slots of the player's main inventory and hotbar shown under every container.
pub const PLAYER_INVENTORY_SIZE: usize = 36;
/// Bedrock index of the first main inventory slot; `0..9` is the hotbar.
pub const PLAYER_INVENTORY_OFFSET: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotType {
    Normal,
    /// Crafting-style results: clicking takes the whole result and consumes ingredients.
    Output,
    /// Can be taken from but never placed into.
    FurnaceOutput,
}

/// A slot as the Bedrock client addresses it in stack requests and responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BedrockContainerSlot {
    pub container: ContainerSlotType,
    pub slot: u8,
}

impl BedrockContainerSlot {
    pub const fn new(container: ContainerSlotType, slot: u8) -> Self {
        Self { container, slot }
    }
}

impl From<&ItemStackRequestSlotData> for BedrockContainerSlot {
    fn from(data: &ItemStackRequestSlotData) -> Self {
        Self::new(data.container, data.slot)
    }
}

/// Java index of a player storage slot in a window whose container part is `size` slots.
///
/// Bedrock numbers the hotbar `0..9` and the main inventory `9..36`; Java puts
/// the main inventory first.
pub fn storage_to_java(size: usize, slot: u8) -> Option<usize> {
    let slot = usize::from(slot);
    if slot >= PLAYER_INVENTORY_SIZE {
        return None;
    }
    if slot >= PLAYER_INVENTORY_OFFSET {
        Some(slot + size - PLAYER_INVENTORY_OFFSET)
    } else {
        Some(slot + size + 27)
    }
}

/// Inverse of [`storage_to_java`] for Java indices past the container part.
pub fn java_to_storage(size: usize, slot: usize) -> Option<BedrockContainerSlot> {
    let index = slot.checked_sub(size)?;
    if index < 27 {
        Some(BedrockContainerSlot::new(
            ContainerSlotType::Inventory,
            (index + PLAYER_INVENTORY_OFFSET) as u8,
        ))
    } else if index < PLAYER_INVENTORY_SIZE {
        Some(BedrockContainerSlot::new(
            ContainerSlotType::Hotbar,
            (index - 27) as u8,
        ))
    } else {
        None
    }
}
