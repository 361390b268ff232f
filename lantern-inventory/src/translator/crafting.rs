use lantern_protocol::bedrock::{BedrockContainerType, ContainerSlotType, ItemStackRequestSlotData};

use super::{base_bedrock_slot_to_java, base_java_slot_to_bedrock_container, InventoryTranslator};
use crate::{
    error::InventoryError,
    holder::BlockInventoryHolder,
    slot::{BedrockContainerSlot, SlotType},
    updater::{Updater, RESULT_SLOT},
};

const GRID_SIZE: usize = 9;
/// UI slot of the first grid slot, minus one.
const GRID_UI_OFFSET: usize = 31;

const HOLDER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:crafting_table",
    &["minecraft:crafting_table"],
    BedrockContainerType::Workbench,
);

/// The 3x3 crafting table: result in Java slot 0, grid in 1 to 9.
pub struct CraftingTableTranslator;

impl InventoryTranslator for CraftingTableTranslator {
    fn size(&self) -> usize {
        GRID_SIZE + 1
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&HOLDER)
    }

    fn updater(&self) -> Updater {
        Updater::Ui
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        match slot.container {
            ContainerSlotType::CraftingInput => {
                let index = usize::from(slot.slot);
                (GRID_UI_OFFSET + 1..=GRID_UI_OFFSET + GRID_SIZE)
                    .contains(&index)
                    .then(|| index - GRID_UI_OFFSET)
                    .ok_or(InventoryError::InvalidSlot(slot.container, slot.slot))
            }
            ContainerSlotType::CraftingOutput | ContainerSlotType::CreatedOutput => Ok(0),
            _ => base_bedrock_slot_to_java(self.size(), slot),
        }
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        match slot {
            0 => RESULT_SLOT as i32,
            1..=GRID_SIZE => (slot + GRID_UI_OFFSET) as i32,
            _ => crate::slot::java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot)),
        }
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        match slot {
            0 => BedrockContainerSlot::new(ContainerSlotType::CraftingOutput, 0),
            1..=GRID_SIZE => BedrockContainerSlot::new(ContainerSlotType::CraftingInput, (slot + GRID_UI_OFFSET) as u8),
            _ => base_java_slot_to_bedrock_container(self.size(), slot, ContainerSlotType::LevelEntity),
        }
    }

    fn slot_type(&self, slot: usize) -> SlotType {
        if slot == 0 {
            SlotType::Output
        } else {
            SlotType::Normal
        }
    }

    fn grid_size(&self) -> Option<usize> {
        Some(GRID_SIZE)
    }

    fn is_crafting_grid(&self, slot: usize) -> bool {
        (1..=GRID_SIZE).contains(&slot)
    }
}

#[cfg(test)]
mod test {
    use lantern_protocol::java::server::Serverbound;

    use super::*;
    use crate::{
        container::{Container, ContainerState},
        player::PlayerInventory,
        test_support::{cursor, place, request, slot, stack, TestSession, PLANKS},
        window::Window,
        WindowType,
    };

    #[test]
    fn grid_lives_at_ui_32() {
        let translator = CraftingTableTranslator;
        assert_eq!(
            translator.bedrock_slot_to_java(&slot(ContainerSlotType::CraftingInput, 32, 0)),
            Ok(1)
        );
        assert_eq!(
            translator.bedrock_slot_to_java(&slot(ContainerSlotType::CraftingInput, 40, 0)),
            Ok(9)
        );
        assert_eq!(translator.java_slot_to_bedrock(0), 50);
        assert_eq!(translator.java_slot_to_bedrock(5), 36);
        assert_eq!(translator.java_slot_to_bedrock(10), 9);
    }

    #[test]
    fn grid_clicks_advance_the_predicted_state_id() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        player.set_cursor(stack(PLANKS, 2), &mut session.ctx.net_ids);
        let mut table = Container::new(2, WindowType::CraftingTable, "", 10, 0, ContainerState::Plain);
        table.state_ids.state_id = 5;
        let mut window = Window::new(&mut player, Some(&mut table));

        let fill = request(vec![
            place(1, cursor(-1), slot(ContainerSlotType::CraftingInput, 32, -1)),
            place(1, cursor(-1), slot(ContainerSlotType::CraftingInput, 33, -1)),
        ]);
        CraftingTableTranslator
            .translate_request(&mut window, &mut session.ctx, &fill)
            .unwrap();
        let state_ids: Vec<_> = session
            .java
            .take()
            .into_iter()
            .filter_map(|packet| match packet {
                Serverbound::ClickContainer(click) => Some(click.state_id),
                _ => None,
            })
            .collect();
        assert_eq!(state_ids, vec![5, 6]);
        assert_eq!(window.state_ids().next_state_id, 7);
        assert_eq!((window.item(1).count, window.item(2).count), (1, 1));
    }
}
