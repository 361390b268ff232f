use lantern_core::ItemStack;
use lantern_protocol::bedrock::{
    BedrockContainerType, ContainerSlotType, ItemStackRequest, ItemStackRequestSlotData,
};

use super::{
    base_bedrock_slot_to_java, base_java_slot_to_bedrock_container, request, InventoryTranslator,
    TranslateResult,
};
use crate::{
    context::InventoryContext,
    error::InventoryError,
    holder::BlockInventoryHolder,
    slot::{java_to_storage, BedrockContainerSlot, SlotType},
    updater::{Updater, RESULT_SLOT},
    window::Window,
};

const INPUT_SLOT: u8 = 12;
const ADDITIONAL_SLOT: u8 = 13;

const HOLDER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:cartography_table",
    &["minecraft:cartography_table"],
    BedrockContainerType::Cartography,
);

pub struct CartographyTranslator;

impl InventoryTranslator for CartographyTranslator {
    fn size(&self) -> usize {
        3
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&HOLDER)
    }

    fn updater(&self) -> Updater {
        Updater::Ui
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        match slot.container {
            ContainerSlotType::CartographyInput => Ok(0),
            ContainerSlotType::CartographyAdditional => Ok(1),
            ContainerSlotType::CartographyResult | ContainerSlotType::CreatedOutput => Ok(2),
            _ => base_bedrock_slot_to_java(self.size(), slot),
        }
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        match slot {
            0 => i32::from(INPUT_SLOT),
            1 => i32::from(ADDITIONAL_SLOT),
            2 => RESULT_SLOT as i32,
            _ => java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot)),
        }
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        match slot {
            0 => BedrockContainerSlot::new(ContainerSlotType::CartographyInput, INPUT_SLOT),
            1 => BedrockContainerSlot::new(ContainerSlotType::CartographyAdditional, ADDITIONAL_SLOT),
            2 => BedrockContainerSlot::new(ContainerSlotType::CartographyResult, RESULT_SLOT as u8),
            _ => base_java_slot_to_bedrock_container(self.size(), slot, ContainerSlotType::LevelEntity),
        }
    }

    fn slot_type(&self, slot: usize) -> SlotType {
        if slot == 2 {
            SlotType::Output
        } else {
            SlotType::Normal
        }
    }

    /// The client starts new maps from paper in the input slot and makes
    /// locator maps from a compass; Java supports neither.
    fn should_reject_item_place(
        &self,
        ctx: &InventoryContext,
        item: &ItemStack,
        _source: BedrockContainerSlot,
        destination: BedrockContainerSlot,
    ) -> bool {
        match destination.container {
            ContainerSlotType::CartographyInput => {
                ctx.registry.is(item, "minecraft:paper") || ctx.registry.is(item, "minecraft:map")
            }
            ContainerSlotType::CartographyAdditional => {
                ctx.registry.is(item, "minecraft:compass") || ctx.registry.is(item, "minecraft:filled_map")
            }
            _ => false,
        }
    }

    // no grid here; the recipe id only announces the consume actions
    fn translate_crafting_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        request::translate_request(self, window, ctx, request, Vec::new())
    }
}
