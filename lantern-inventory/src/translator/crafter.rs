use lantern_protocol::bedrock::{
    client::CBlockEntityData, BedrockContainerType, BlockEntityData, ContainerSlotType, ItemStackRequestSlotData,
};

use super::{base_java_slot_to_bedrock_container, InventoryTranslator};
use crate::{
    container::{Container, ContainerState, CrafterState},
    context::InventoryContext,
    error::InventoryError,
    holder::BlockInventoryHolder,
    slot::{storage_to_java, BedrockContainerSlot, SlotType, PLAYER_INVENTORY_SIZE},
    updater::{Updater, RESULT_SLOT},
    window_property::{Crafter, WindowProperty},
};

const GRID_SIZE: usize = 9;
/// The result comes after the player's storage in the Java window.
pub const JAVA_RESULT_SLOT: usize = GRID_SIZE + PLAYER_INVENTORY_SIZE;
/// Java does not say how long the crafter stays triggered; a later property clears it.
const TRIGGERED_TICKS: i32 = 10_000;

const HOLDER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:crafter[crafting=false,orientation=north_up,triggered=false]",
    &["minecraft:crafter"],
    BedrockContainerType::Crafter,
);

pub struct CrafterTranslator;

impl InventoryTranslator for CrafterTranslator {
    fn size(&self) -> usize {
        GRID_SIZE
    }

    fn extra_slots(&self) -> usize {
        1
    }

    fn initial_state(&self) -> ContainerState {
        ContainerState::Crafter(CrafterState::default())
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&HOLDER)
    }

    fn updater(&self) -> Updater {
        Updater::Crafter
    }

    /// Slot toggles and the triggered flag arrive one property at a time; the
    /// client reads both from the block entity.
    fn update_property(&self, container: &mut Container, ctx: &mut InventoryContext, key: i16, value: i16) {
        let ContainerState::Crafter(crafter) = &mut container.state else {
            return;
        };
        match Crafter::from_id(key) {
            Some(Crafter::SlotState { slot }) if value == 0 => crafter.disabled_slots &= !(1 << slot),
            Some(Crafter::SlotState { slot }) => crafter.disabled_slots |= 1 << slot,
            Some(Crafter::Triggered) => crafter.triggered = value == 1,
            None => return,
        }
        ctx.send_bedrock(CBlockEntityData::new(BlockEntityData::Crafter {
            position: container.holder.position,
            crafting_ticks_remaining: if crafter.triggered { TRIGGERED_TICKS } else { 0 },
            disabled_slots: crafter.disabled_slots,
        }));
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        if slot.container.is_player_storage() {
            return storage_to_java(GRID_SIZE, slot.slot).ok_or(InventoryError::InvalidSlot(slot.container, slot.slot));
        }
        match usize::from(slot.slot) {
            index if index < GRID_SIZE => Ok(index),
            index if index == RESULT_SLOT as usize => Ok(JAVA_RESULT_SLOT),
            _ => Err(InventoryError::InvalidSlot(slot.container, slot.slot)),
        }
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        if slot == JAVA_RESULT_SLOT {
            return RESULT_SLOT as i32;
        }
        if slot < GRID_SIZE {
            return slot as i32;
        }
        crate::slot::java_to_storage(GRID_SIZE, slot).map_or(-1, |storage| i32::from(storage.slot))
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        if slot == JAVA_RESULT_SLOT {
            return BedrockContainerSlot::new(ContainerSlotType::CrafterBlockContainer, RESULT_SLOT as u8);
        }
        base_java_slot_to_bedrock_container(GRID_SIZE, slot, ContainerSlotType::LevelEntity)
    }

    fn slot_type(&self, slot: usize) -> SlotType {
        if slot == JAVA_RESULT_SLOT {
            SlotType::Output
        } else {
            SlotType::Normal
        }
    }
}
