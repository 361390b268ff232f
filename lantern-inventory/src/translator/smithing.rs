use lantern_protocol::bedrock::{
    client::CInventorySlot, container_id, BedrockContainerType, ContainerSlotType, ItemStackRequest,
    ItemStackRequestAction, ItemStackRequestSlotData,
};

use super::{
    base_bedrock_slot_to_java, base_java_slot_to_bedrock_container, request, InventoryTranslator,
    TranslateResult,
};
use crate::{
    container::Container,
    context::InventoryContext,
    error::InventoryError,
    holder::BlockInventoryHolder,
    slot::{java_to_storage, BedrockContainerSlot, SlotType},
    updater::{Updater, RESULT_SLOT},
    window::Window,
};

const INPUT_SLOT: u8 = 51;
const MATERIAL_SLOT: u8 = 52;
const TEMPLATE_SLOT: u8 = 53;

const UPGRADE_TEMPLATE: &str = "minecraft:netherite_upgrade_smithing_template";

const HOLDER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:smithing_table",
    &["minecraft:smithing_table"],
    BedrockContainerType::SmithingTable,
);

fn output_type(slot: usize, result: usize) -> SlotType {
    if slot == result {
        SlotType::Output
    } else {
        SlotType::Normal
    }
}

/// The smithing table of 1.20 and later: template, base, addition, result.
pub struct SmithingTableTranslator;

impl InventoryTranslator for SmithingTableTranslator {
    fn size(&self) -> usize {
        4
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&HOLDER)
    }

    fn updater(&self) -> Updater {
        Updater::Ui
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        match slot.container {
            ContainerSlotType::SmithingTableTemplate => Ok(0),
            ContainerSlotType::SmithingTableInput => Ok(1),
            ContainerSlotType::SmithingTableMaterial => Ok(2),
            ContainerSlotType::SmithingTableResult | ContainerSlotType::CreatedOutput => Ok(3),
            _ => base_bedrock_slot_to_java(self.size(), slot),
        }
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        match slot {
            0 => i32::from(TEMPLATE_SLOT),
            1 => i32::from(INPUT_SLOT),
            2 => i32::from(MATERIAL_SLOT),
            3 => RESULT_SLOT as i32,
            _ => java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot)),
        }
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        match slot {
            0 => BedrockContainerSlot::new(ContainerSlotType::SmithingTableTemplate, TEMPLATE_SLOT),
            1 => BedrockContainerSlot::new(ContainerSlotType::SmithingTableInput, INPUT_SLOT),
            2 => BedrockContainerSlot::new(ContainerSlotType::SmithingTableMaterial, MATERIAL_SLOT),
            3 => BedrockContainerSlot::new(ContainerSlotType::SmithingTableResult, RESULT_SLOT as u8),
            _ => base_java_slot_to_bedrock_container(self.size(), slot, ContainerSlotType::LevelEntity),
        }
    }

    fn slot_type(&self, slot: usize) -> SlotType {
        output_type(slot, 3)
    }
}

/// The three slot smithing table of servers before 1.20, shown in the newer
/// client UI. The client refuses to smith without a template, so a netherite
/// upgrade template is faked into the template slot and never touched.
pub struct OldSmithingTableTranslator;

impl InventoryTranslator for OldSmithingTableTranslator {
    fn size(&self) -> usize {
        3
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&HOLDER)
    }

    fn updater(&self) -> Updater {
        Updater::Ui
    }

    fn open(&self, container: &mut Container, ctx: &mut InventoryContext) {
        HOLDER.open(container, ctx);
        let Some(template) = ctx.registry.stack(UPGRADE_TEMPLATE, 1) else {
            log::debug!("No {UPGRADE_TEMPLATE} to show in the smithing table");
            return;
        };
        let item = ctx.items.to_bedrock(&template);
        ctx.send_bedrock(CInventorySlot::new(
            i32::from(container_id::UI),
            u32::from(TEMPLATE_SLOT),
            item,
        ));
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        match slot.container {
            ContainerSlotType::SmithingTableInput => Ok(0),
            ContainerSlotType::SmithingTableMaterial => Ok(1),
            ContainerSlotType::SmithingTableResult | ContainerSlotType::CreatedOutput => Ok(2),
            _ => base_bedrock_slot_to_java(self.size(), slot),
        }
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        match slot {
            0 => i32::from(INPUT_SLOT),
            1 => i32::from(MATERIAL_SLOT),
            2 => RESULT_SLOT as i32,
            _ => java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot)),
        }
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        match slot {
            0 => BedrockContainerSlot::new(ContainerSlotType::SmithingTableInput, INPUT_SLOT),
            1 => BedrockContainerSlot::new(ContainerSlotType::SmithingTableMaterial, MATERIAL_SLOT),
            2 => BedrockContainerSlot::new(ContainerSlotType::SmithingTableResult, RESULT_SLOT as u8),
            _ => base_java_slot_to_bedrock_container(self.size(), slot, ContainerSlotType::LevelEntity),
        }
    }

    fn slot_type(&self, slot: usize) -> SlotType {
        output_type(slot, 2)
    }

    fn should_handle_request_first(&self, _action: &ItemStackRequestAction, _window: &Window) -> bool {
        true
    }

    fn translate_special_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        let touches_template = request
            .actions
            .iter()
            .flat_map(ItemStackRequestAction::slots)
            .any(|slot| slot.container == ContainerSlotType::SmithingTableTemplate);
        if touches_template {
            return Err(InventoryError::IllegalPlacement(ContainerSlotType::SmithingTableTemplate));
        }
        request::translate_request(self, window, ctx, request, Vec::new())
    }
}

#[cfg(test)]
mod test {
    use lantern_core::math::BlockPos;
    use lantern_protocol::{
        bedrock::client::Clientbound,
        java::server::Serverbound,
    };

    use super::*;
    use crate::{
        holder::Prepare,
        player::PlayerInventory,
        test_support::{cursor, place, request, slot, stack, take, TestSession, SWORD, UPGRADE_TEMPLATE as TEMPLATE},
        translator::dispatch::translate_requests,
        WindowType,
    };

    #[test]
    fn template_goes_into_slot_zero() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        player.set_cursor(stack(TEMPLATE, 1), &mut session.ctx.net_ids);
        let mut table = SmithingTableTranslator.create_container(3, WindowType::SmithingTable, "");
        let mut window = Window::new(&mut player, Some(&mut table));

        let put = request(vec![place(
            1,
            cursor(window.cursor().net_id),
            slot(ContainerSlotType::SmithingTableTemplate, TEMPLATE_SLOT, 0),
        )]);
        SmithingTableTranslator
            .translate_request(&mut window, &mut session.ctx, &put)
            .unwrap();
        assert!(matches!(
            &session.java.take()[..],
            [Serverbound::ClickContainer(click)] if click.slot == 0
        ));
        assert_eq!(window.item(0).item_id, TEMPLATE);
    }

    #[test]
    fn old_table_shows_a_fake_template() {
        let mut session = TestSession::new();
        let position = BlockPos::new(1, 64, 1);
        session.world.set_block(position, "minecraft:smithing_table");
        session.world.interact(position);
        let mut table = OldSmithingTableTranslator.create_container(3, WindowType::SmithingTable, "");
        assert_eq!(OldSmithingTableTranslator.prepare(&mut table, &mut session.ctx), Prepare::Ready);
        OldSmithingTableTranslator.open(&mut table, &mut session.ctx);

        let sent = session.bedrock.take();
        assert!(sent.iter().any(|packet| matches!(
            packet,
            Clientbound::InventorySlot(slot)
                if slot.slot == u32::from(TEMPLATE_SLOT) && slot.item.definition_id == TEMPLATE
        )));
    }

    #[test]
    fn old_table_refuses_the_template_slot_and_smiths_normally() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut table = OldSmithingTableTranslator.create_container(3, WindowType::SmithingTable, "");
        table.set_item(0, stack(SWORD, 1), &mut session.ctx.net_ids);
        table.set_item(2, stack(SWORD, 1).with_extra_data(&b"netherite"[..]), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, Some(&mut table));

        let grab_template = request(vec![take(
            1,
            slot(ContainerSlotType::SmithingTableTemplate, TEMPLATE_SLOT, 0),
            cursor(0),
        )]);
        let smith = request(vec![take(
            1,
            slot(ContainerSlotType::SmithingTableResult, 50, window.item(2).net_id),
            cursor(0),
        )]);
        translate_requests(
            &OldSmithingTableTranslator,
            &mut window,
            &mut session.ctx,
            &[grab_template, smith],
        );
        let responses = session
            .bedrock
            .take()
            .into_iter()
            .find_map(|packet| match packet {
                Clientbound::ItemStackResponse(response) => Some(response.entries),
                _ => None,
            })
            .unwrap();
        assert!(!responses[0].is_ok());
        assert!(responses[1].is_ok());
        assert_eq!(&window.cursor().extra_data[..], b"netherite");
    }
}
