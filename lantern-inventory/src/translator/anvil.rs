use lantern_protocol::{
    bedrock::{
        BedrockContainerType, ContainerSlotType, ItemStackRequest, ItemStackRequestAction,
        ItemStackRequestSlotData,
    },
    java::server::SRenameItem,
};

use super::{
    base_bedrock_slot_to_java, base_java_slot_to_bedrock_container, request, InventoryTranslator,
    TranslateResult,
};
use crate::{
    container::{AnvilState, Container, ContainerState},
    context::InventoryContext,
    error::InventoryError,
    holder::BlockInventoryHolder,
    slot::{java_to_storage, BedrockContainerSlot, SlotType},
    updater::{Updater, RESULT_SLOT},
    window::Window,
    window_property::{Anvil, WindowProperty},
};

const HOLDER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:anvil[facing=north]",
    &["minecraft:anvil", "minecraft:chipped_anvil", "minecraft:damaged_anvil"],
    BedrockContainerType::Anvil,
);

pub struct AnvilTranslator;

impl InventoryTranslator for AnvilTranslator {
    fn size(&self) -> usize {
        3
    }

    fn initial_state(&self) -> ContainerState {
        ContainerState::Anvil(AnvilState::default())
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&HOLDER)
    }

    fn updater(&self) -> Updater {
        Updater::Anvil
    }

    fn update_property(&self, container: &mut Container, _ctx: &mut InventoryContext, key: i16, value: i16) {
        if Anvil::from_id(key) != Some(Anvil::RepairCost) {
            return;
        }
        if let ContainerState::Anvil(anvil) = &mut container.state {
            anvil.java_level_cost = i32::from(value);
            anvil.use_java_level_cost = true;
        }
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        match slot.container {
            ContainerSlotType::AnvilInput => Ok(0),
            ContainerSlotType::AnvilMaterial => Ok(1),
            ContainerSlotType::AnvilResult | ContainerSlotType::CreatedOutput => Ok(2),
            _ => base_bedrock_slot_to_java(self.size(), slot),
        }
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        match slot {
            0 => 1,
            1 => 2,
            2 => RESULT_SLOT as i32,
            _ => java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot)),
        }
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        match slot {
            0 => BedrockContainerSlot::new(ContainerSlotType::AnvilInput, 1),
            1 => BedrockContainerSlot::new(ContainerSlotType::AnvilMaterial, 2),
            2 => BedrockContainerSlot::new(ContainerSlotType::AnvilResult, RESULT_SLOT as u8),
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

    fn should_handle_request_first(&self, action: &ItemStackRequestAction, _window: &Window) -> bool {
        matches!(action, ItemStackRequestAction::CraftRecipeOptional { .. })
    }

    /// The typed name only arrives with the request taking the result.
    fn translate_special_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        let name = match request.actions.first() {
            Some(ItemStackRequestAction::CraftRecipeOptional {
                filtered_string_index,
                ..
            }) => usize::try_from(*filtered_string_index)
                .ok()
                .and_then(|index| request.filter_strings.get(index)),
            _ => None,
        };
        if let Some(name) = name {
            if let Some(ContainerState::Anvil(anvil)) = window.container_mut().map(|container| &mut container.state) {
                if anvil.new_name.as_deref() != Some(name.as_str()) {
                    anvil.new_name = Some(name.clone());
                    ctx.send_java(SRenameItem::new(name.as_str()));
                }
            }
        }
        request::translate_request(self, window, ctx, request, Vec::new())
    }
}

#[cfg(test)]
mod test {
    use lantern_protocol::{bedrock::ItemStackResponseStatus, java::server::Serverbound};

    use super::*;
    use crate::{
        player::PlayerInventory,
        test_support::{stack, TestSession, SWORD},
        translator::dispatch::translate_requests,
        WindowType,
    };

    fn rename(name: &str) -> ItemStackRequest {
        let mut request = ItemStackRequest::new(
            4,
            vec![ItemStackRequestAction::CraftRecipeOptional {
                recipe_network_id: 0,
                filtered_string_index: 0,
            }],
        );
        request.filter_strings = vec![name.to_string()];
        request
    }

    #[test]
    fn rename_is_forwarded_without_clicks() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut anvil = AnvilTranslator.create_container(3, WindowType::Anvil, "Repair & Name");
        anvil.set_item(0, stack(SWORD, 1), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, Some(&mut anvil));

        translate_requests(&AnvilTranslator, &mut window, &mut session.ctx, &[rename("Blade")]);
        assert_eq!(
            session.java.take(),
            vec![Serverbound::RenameItem(SRenameItem::new("Blade"))]
        );

        // the same name again is not resent
        translate_requests(&AnvilTranslator, &mut window, &mut session.ctx, &[rename("Blade")]);
        assert!(session.java.take().is_empty());
        let sent = session.bedrock.take();
        let lantern_protocol::bedrock::client::Clientbound::ItemStackResponse(responses) = &sent[0] else {
            panic!("expected a response");
        };
        assert_eq!(responses.entries[0].result, ItemStackResponseStatus::Ok);
    }

    #[test]
    fn level_cost_is_tracked() {
        let mut session = TestSession::new();
        let mut anvil = AnvilTranslator.create_container(3, WindowType::Anvil, "");
        AnvilTranslator.update_property(&mut anvil, &mut session.ctx, 0, 7);
        let ContainerState::Anvil(state) = &anvil.state else {
            panic!("anvil state lost");
        };
        assert_eq!((state.java_level_cost, state.use_java_level_cost), (7, true));
    }

    #[test]
    fn result_is_ui_slot_fifty() {
        assert_eq!(AnvilTranslator.java_slot_to_bedrock(2), 50);
        assert_eq!(
            AnvilTranslator.bedrock_slot_to_java(&ItemStackRequestSlotData::new(ContainerSlotType::CreatedOutput, 50, 0)),
            Ok(2)
        );
    }
}
