use lantern_protocol::bedrock::{BedrockContainerType, ContainerSlotType};

use super::{base_java_slot_to_bedrock_container, InventoryTranslator};
use crate::{holder::BlockInventoryHolder, slot::BedrockContainerSlot, updater::Updater};

const CHEST: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:chest[facing=north,type=single,waterlogged=false]",
    &[
        "minecraft:chest",
        "minecraft:trapped_chest",
        "minecraft:ender_chest",
        "minecraft:barrel",
    ],
    BedrockContainerType::Container,
);

const DISPENSER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:dispenser[facing=north,triggered=false]",
    &["minecraft:dispenser", "minecraft:dropper"],
    BedrockContainerType::Dispenser,
);

const HOPPER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:hopper[enabled=false,facing=down]",
    &["minecraft:hopper"],
    BedrockContainerType::Hopper,
);

const SHULKER_BOXES: &[&str] = &[
    "minecraft:shulker_box",
    "minecraft:white_shulker_box",
    "minecraft:orange_shulker_box",
    "minecraft:magenta_shulker_box",
    "minecraft:light_blue_shulker_box",
    "minecraft:yellow_shulker_box",
    "minecraft:lime_shulker_box",
    "minecraft:pink_shulker_box",
    "minecraft:gray_shulker_box",
    "minecraft:light_gray_shulker_box",
    "minecraft:cyan_shulker_box",
    "minecraft:purple_shulker_box",
    "minecraft:blue_shulker_box",
    "minecraft:brown_shulker_box",
    "minecraft:green_shulker_box",
    "minecraft:red_shulker_box",
    "minecraft:black_shulker_box",
];

const SHULKER_BOX: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:shulker_box[facing=north]",
    SHULKER_BOXES,
    BedrockContainerType::Container,
);

/// Plain storage windows: every slot holds anything and clicks do the obvious.
pub struct GenericTranslator {
    size: usize,
    holder: BlockInventoryHolder,
    updater: Updater,
    /// Region the client files the container's own slots under.
    slot_container: ContainerSlotType,
}

impl GenericTranslator {
    /// Chest screens with up to three rows; the client's UI always has 27 slots.
    pub const fn chest(size: usize) -> Self {
        Self {
            size,
            holder: CHEST,
            updater: Updater::PaddedChest(27),
            slot_container: ContainerSlotType::LevelEntity,
        }
    }

    pub const fn dispenser() -> Self {
        Self {
            size: 9,
            holder: DISPENSER,
            updater: Updater::Container,
            slot_container: ContainerSlotType::LevelEntity,
        }
    }

    pub const fn hopper() -> Self {
        Self {
            size: 5,
            holder: HOPPER,
            updater: Updater::Container,
            slot_container: ContainerSlotType::LevelEntity,
        }
    }

    pub const fn shulker_box() -> Self {
        Self {
            size: 27,
            holder: SHULKER_BOX,
            updater: Updater::Container,
            slot_container: ContainerSlotType::ShulkerBox,
        }
    }
}

impl InventoryTranslator for GenericTranslator {
    fn size(&self) -> usize {
        self.size
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&self.holder)
    }

    fn updater(&self) -> Updater {
        self.updater
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        base_java_slot_to_bedrock_container(self.size, slot, self.slot_container)
    }
}
