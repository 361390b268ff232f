use lantern_protocol::bedrock::{
    client::{container_data, CContainerSetData},
    BedrockContainerType, ContainerSlotType, ItemStackRequestSlotData,
};

use super::{base_bedrock_slot_to_java, base_java_slot_to_bedrock_container, InventoryTranslator};
use crate::{
    container::Container,
    context::InventoryContext,
    error::InventoryError,
    holder::BlockInventoryHolder,
    slot::{java_to_storage, BedrockContainerSlot},
    window_property::{BrewingStand, WindowProperty},
};

const HOLDER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:brewing_stand[has_bottle_0=false,has_bottle_1=false,has_bottle_2=false]",
    &["minecraft:brewing_stand"],
    BedrockContainerType::BrewingStand,
);

/// Blaze powder a full fuel bar holds.
const FUEL_TOTAL: i32 = 20;

/// Java puts the three bottles first, then ingredient and fuel; the client
/// starts with the ingredient.
pub struct BrewingStandTranslator;

impl InventoryTranslator for BrewingStandTranslator {
    fn size(&self) -> usize {
        5
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&HOLDER)
    }

    fn open(&self, container: &mut Container, ctx: &mut InventoryContext) {
        HOLDER.open(container, ctx);
        ctx.send_bedrock(CContainerSetData::new(
            container.bedrock_id,
            container_data::BREWING_STAND_FUEL_TOTAL,
            FUEL_TOTAL,
        ));
    }

    fn update_property(&self, container: &mut Container, ctx: &mut InventoryContext, key: i16, value: i16) {
        let property = match BrewingStand::from_id(key) {
            Some(BrewingStand::BrewTime) => container_data::BREWING_STAND_BREW_TIME,
            Some(BrewingStand::FuelTime) => container_data::BREWING_STAND_FUEL_AMOUNT,
            None => return,
        };
        ctx.send_bedrock(CContainerSetData::new(container.bedrock_id, property, i32::from(value)));
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        if matches!(
            slot.container,
            ContainerSlotType::BrewingInput | ContainerSlotType::BrewingResult | ContainerSlotType::BrewingFuel
        ) {
            return match slot.slot {
                0 => Ok(3),
                index @ 1..=3 => Ok(usize::from(index) - 1),
                4 => Ok(4),
                _ => Err(InventoryError::InvalidSlot(slot.container, slot.slot)),
            };
        }
        base_bedrock_slot_to_java(self.size(), slot)
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        match slot {
            0..=2 => slot as i32 + 1,
            3 => 0,
            4 => 4,
            _ => java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot)),
        }
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        let container = match slot {
            0..=2 => ContainerSlotType::BrewingResult,
            3 => ContainerSlotType::BrewingInput,
            4 => ContainerSlotType::BrewingFuel,
            _ => return base_java_slot_to_bedrock_container(self.size(), slot, ContainerSlotType::LevelEntity),
        };
        BedrockContainerSlot::new(container, self.java_slot_to_bedrock(slot) as u8)
    }
}
