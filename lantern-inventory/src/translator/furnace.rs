use lantern_protocol::bedrock::{
    client::{container_data, CContainerSetData},
    BedrockContainerType, ContainerSlotType,
};

use super::{base_java_slot_to_bedrock_container, InventoryTranslator};
use crate::{
    container::Container,
    context::InventoryContext,
    holder::BlockInventoryHolder,
    slot::{BedrockContainerSlot, SlotType},
    window_property::{Furnace, WindowProperty},
};

const RESULT: usize = 2;

/// Furnace, blast furnace and smoker: ingredient, fuel and result.
pub struct FurnaceTranslator {
    holder: BlockInventoryHolder,
    ingredient: ContainerSlotType,
    /// Cooks twice as fast, so the client's progress bar needs twice the ticks.
    fast: bool,
}

impl FurnaceTranslator {
    pub const fn furnace() -> Self {
        Self {
            holder: BlockInventoryHolder::new(
                "minecraft:furnace[facing=north,lit=false]",
                &["minecraft:furnace"],
                BedrockContainerType::Furnace,
            ),
            ingredient: ContainerSlotType::FurnaceIngredient,
            fast: false,
        }
    }

    pub const fn blast_furnace() -> Self {
        Self {
            holder: BlockInventoryHolder::new(
                "minecraft:blast_furnace[facing=north,lit=false]",
                &["minecraft:blast_furnace"],
                BedrockContainerType::BlastFurnace,
            ),
            ingredient: ContainerSlotType::BlastFurnaceIngredient,
            fast: true,
        }
    }

    pub const fn smoker() -> Self {
        Self {
            holder: BlockInventoryHolder::new(
                "minecraft:smoker[facing=north,lit=false]",
                &["minecraft:smoker"],
                BedrockContainerType::Smoker,
            ),
            ingredient: ContainerSlotType::SmokerIngredient,
            fast: true,
        }
    }
}

impl InventoryTranslator for FurnaceTranslator {
    fn size(&self) -> usize {
        3
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&self.holder)
    }

    fn update_property(&self, container: &mut Container, ctx: &mut InventoryContext, key: i16, value: i16) {
        let value = i32::from(value);
        let (property, value) = match Furnace::from_id(key) {
            Some(Furnace::FireIcon) => (container_data::FURNACE_LIT_TIME, value),
            Some(Furnace::MaximumFuelBurnTime) => (container_data::FURNACE_LIT_DURATION, value),
            Some(Furnace::ProgressArrow) if self.fast => (container_data::FURNACE_TICK_COUNT, value * 2),
            Some(Furnace::ProgressArrow) => (container_data::FURNACE_TICK_COUNT, value),
            Some(Furnace::MaximumProgress) | None => return,
        };
        ctx.send_bedrock(CContainerSetData::new(container.bedrock_id, property, value));
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        match slot {
            0 => BedrockContainerSlot::new(self.ingredient, 0),
            1 => BedrockContainerSlot::new(ContainerSlotType::FurnaceFuel, 1),
            RESULT => BedrockContainerSlot::new(ContainerSlotType::FurnaceResult, 2),
            _ => base_java_slot_to_bedrock_container(self.size(), slot, ContainerSlotType::LevelEntity),
        }
    }

    fn slot_type(&self, slot: usize) -> SlotType {
        if slot == RESULT {
            SlotType::FurnaceOutput
        } else {
            SlotType::Normal
        }
    }
}
