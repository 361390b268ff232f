use lantern_protocol::bedrock::{BedrockContainerType, ContainerSlotType, ItemStackRequestSlotData};

use super::{base_bedrock_slot_to_java, base_java_slot_to_bedrock_container, InventoryTranslator};
use crate::{
    error::InventoryError,
    holder::BlockInventoryHolder,
    slot::{java_to_storage, BedrockContainerSlot, SlotType},
    updater::{Updater, RESULT_SLOT},
};

const INPUT_SLOT: u8 = 16;
const ADDITIONAL_SLOT: u8 = 17;

const HOLDER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:grindstone[face=floor,facing=north]",
    &["minecraft:grindstone"],
    BedrockContainerType::Grindstone,
);

/// Disenchanting needs nothing special: the client's repair action is
/// ignored and the result is taken like any output.
pub struct GrindstoneTranslator;

impl InventoryTranslator for GrindstoneTranslator {
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
            ContainerSlotType::GrindstoneInput => Ok(0),
            ContainerSlotType::GrindstoneAdditional => Ok(1),
            ContainerSlotType::GrindstoneResult | ContainerSlotType::CreatedOutput => Ok(2),
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
            0 => BedrockContainerSlot::new(ContainerSlotType::GrindstoneInput, INPUT_SLOT),
            1 => BedrockContainerSlot::new(ContainerSlotType::GrindstoneAdditional, ADDITIONAL_SLOT),
            2 => BedrockContainerSlot::new(ContainerSlotType::GrindstoneResult, RESULT_SLOT as u8),
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
}

#[cfg(test)]
mod test {
    use lantern_protocol::{bedrock::ItemStackRequestAction, java::server::Serverbound};

    use super::*;
    use crate::{
        player::PlayerInventory,
        test_support::{cursor, request, slot, stack, take, TestSession, SWORD},
        window::Window,
        WindowType,
    };

    #[test]
    fn disenchanted_result_is_clicked_out() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut grindstone = GrindstoneTranslator.create_container(8, WindowType::Grindstone, "");
        grindstone.set_item(0, stack(SWORD, 1).with_extra_data(&b"sharpness"[..]), &mut session.ctx.net_ids);
        grindstone.set_item(2, stack(SWORD, 1), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, Some(&mut grindstone));

        let disenchant = request(vec![
            ItemStackRequestAction::CraftRepairAndDisenchant {
                recipe_network_id: 7,
                number_of_requested_crafts: 1,
            },
            take(1, slot(ContainerSlotType::CreatedOutput, 50, -1), cursor(0)),
        ]);
        let response = GrindstoneTranslator
            .translate_request(&mut window, &mut session.ctx, &disenchant)
            .unwrap();
        assert!(response.is_ok());
        let clicks: Vec<_> = session
            .java
            .take()
            .into_iter()
            .filter_map(|packet| match packet {
                Serverbound::ClickContainer(click) => Some(click.slot),
                _ => None,
            })
            .collect();
        assert_eq!(clicks, vec![2]);
        assert_eq!(window.cursor().item_id, SWORD);
        assert!(window.item(2).is_empty());
    }
}
