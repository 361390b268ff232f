use lantern_core::ItemStack;
use lantern_protocol::{
    bedrock::{
        BedrockContainerType, ContainerSlotType, ItemStackRequest, ItemStackRequestAction, ItemStackRequestSlotData,
    },
    java::server::SContainerButtonClick,
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

const RESULT: usize = 3;
const MATERIAL: usize = 2;

/// Bedrock pattern ids in the order of the Java loom's buttons, left to right
/// and top to bottom. Button `n + 1` is entry `n`; the indented bordure has
/// no Bedrock counterpart.
const PATTERNS: [&str; 33] = [
    "bl", "br", "tl", "tr", "bs", "ts", "ls", "rs", "cs", "ms", "drs", "dls", "ss", "cr", "sc", "bt", "tt", "bts",
    "tts", "ld", "rd", "lud", "rud", "mc", "mr", "vh", "hh", "vhr", "hhb", "bo", "", "gra", "gru",
];

fn pattern_button(pattern: &str) -> Option<u8> {
    if pattern.is_empty() {
        return None;
    }
    let index = PATTERNS.iter().position(|candidate| *candidate == pattern)?;
    u8::try_from(index + 1).ok()
}

const HOLDER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:loom[facing=north]",
    &["minecraft:loom"],
    BedrockContainerType::Loom,
);

pub struct LoomTranslator;

impl InventoryTranslator for LoomTranslator {
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
            ContainerSlotType::LoomInput => Ok(0),
            ContainerSlotType::LoomDye => Ok(1),
            ContainerSlotType::LoomMaterial => Ok(MATERIAL),
            ContainerSlotType::LoomResult | ContainerSlotType::CreatedOutput => Ok(RESULT),
            _ => base_bedrock_slot_to_java(self.size(), slot),
        }
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        match slot {
            0 => 9,
            1 => 10,
            MATERIAL => 11,
            RESULT => RESULT_SLOT as i32,
            _ => java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot)),
        }
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        match slot {
            0 => BedrockContainerSlot::new(ContainerSlotType::LoomInput, 9),
            1 => BedrockContainerSlot::new(ContainerSlotType::LoomDye, 10),
            MATERIAL => BedrockContainerSlot::new(ContainerSlotType::LoomMaterial, 11),
            RESULT => BedrockContainerSlot::new(ContainerSlotType::LoomResult, RESULT_SLOT as u8),
            _ => base_java_slot_to_bedrock_container(self.size(), slot, ContainerSlotType::LevelEntity),
        }
    }

    fn slot_type(&self, slot: usize) -> SlotType {
        if slot == RESULT {
            SlotType::Output
        } else {
            SlotType::Normal
        }
    }

    /// The client takes some items as dyes that Java does not.
    fn should_reject_item_place(
        &self,
        ctx: &InventoryContext,
        item: &ItemStack,
        _source: BedrockContainerSlot,
        destination: BedrockContainerSlot,
    ) -> bool {
        destination.container == ContainerSlotType::LoomDye
            && !item.is_empty()
            && !ctx.registry.identifier_of(item).ends_with("_dye")
    }

    // with a pattern item in the material slot Java needs no button
    fn should_handle_request_first(&self, action: &ItemStackRequestAction, window: &Window) -> bool {
        matches!(action, ItemStackRequestAction::CraftLoom { .. }) && window.item(MATERIAL).is_empty()
    }

    fn translate_special_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        let Some(ItemStackRequestAction::CraftLoom { pattern_id }) = request.actions.first() else {
            return Err(InventoryError::InvalidCraftSequence("CRAFT_LOOM"));
        };
        let Some(ItemStackRequestAction::CraftResultsDeprecated { result_items, .. }) = request.actions.get(1) else {
            return Err(InventoryError::InvalidCraftSequence("CRAFT_LOOM"));
        };
        let button = pattern_button(pattern_id).ok_or_else(|| InventoryError::UnknownPattern(pattern_id.clone()))?;
        let Some(result) = result_items.first() else {
            return Err(InventoryError::InvalidCraftSequence("CRAFT_RESULTS_DEPRECATED"));
        };

        ctx.send_java(SContainerButtonClick::new(window.java_id(), button));
        // the server fills the result slot later; take it from the client's own prediction
        let predicted = ctx.items.to_java(result).copy_with_count(1);
        request::translate_request(self, window, ctx, request, vec![(RESULT, predicted)])
    }
}

#[cfg(test)]
mod test {
    use lantern_protocol::{bedrock::ItemData, java::server::Serverbound};

    use super::*;
    use crate::{
        player::PlayerInventory,
        test_support::{cursor, place, request, slot, stack, take, TestSession, BANNER, BLUE_DYE, LAPIS},
        translator::dispatch::translate_requests,
        WindowType,
    };

    #[test]
    fn pattern_buttons_skip_the_indented_bordure() {
        assert_eq!(pattern_button("bl"), Some(1));
        assert_eq!(pattern_button("bo"), Some(30));
        assert_eq!(pattern_button("gra"), Some(32));
        assert_eq!(pattern_button("gru"), Some(33));
        assert_eq!(pattern_button(""), None);
        assert_eq!(pattern_button("flo"), None);
    }

    #[test]
    fn weaving_clicks_the_pattern_and_takes_the_prediction() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut loom = LoomTranslator.create_container(6, WindowType::Loom, "");
        loom.set_item(0, stack(BANNER, 1), &mut session.ctx.net_ids);
        loom.set_item(1, stack(BLUE_DYE, 1), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, Some(&mut loom));

        let weave = request(vec![
            ItemStackRequestAction::CraftLoom {
                pattern_id: "cr".to_string(),
            },
            ItemStackRequestAction::CraftResultsDeprecated {
                result_items: vec![ItemData {
                    definition_id: BANNER,
                    count: 1,
                    tag: b"cross"[..].into(),
                    ..ItemData::AIR
                }],
                times_crafted: 1,
            },
            take(1, slot(ContainerSlotType::CreatedOutput, 50, -1), cursor(0)),
        ]);
        translate_requests(&LoomTranslator, &mut window, &mut session.ctx, &[weave]);
        let sent = session.java.take();
        assert_eq!(sent[0], Serverbound::ContainerButtonClick(SContainerButtonClick::new(6, 14)));
        assert!(matches!(&sent[1], Serverbound::ClickContainer(click) if click.slot == 3));
        assert_eq!(window.cursor().item_id, BANNER);
        assert_eq!(&window.cursor().extra_data[..], b"cross");
    }

    #[test]
    fn unknown_patterns_are_refused_before_any_click() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut loom = LoomTranslator.create_container(6, WindowType::Loom, "");
        loom.set_item(0, stack(BANNER, 1), &mut session.ctx.net_ids);
        loom.set_item(1, stack(BLUE_DYE, 1), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, Some(&mut loom));

        let weave = request(vec![
            ItemStackRequestAction::CraftLoom {
                pattern_id: "flo".to_string(),
            },
            ItemStackRequestAction::CraftResultsDeprecated {
                result_items: vec![ItemData {
                    definition_id: BANNER,
                    count: 1,
                    ..ItemData::AIR
                }],
                times_crafted: 1,
            },
        ]);
        assert_eq!(
            LoomTranslator.translate_special_request(&mut window, &mut session.ctx, &weave),
            Err(InventoryError::UnknownPattern("flo".to_string()))
        );
        assert!(session.java.take().is_empty());
    }

    #[test]
    fn only_dyes_go_in_the_dye_slot() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        player.set_cursor(stack(LAPIS, 1), &mut session.ctx.net_ids);
        let mut loom = LoomTranslator.create_container(6, WindowType::Loom, "");
        let mut window = Window::new(&mut player, Some(&mut loom));

        let put = request(vec![place(1, cursor(-1), slot(ContainerSlotType::LoomDye, 10, 0))]);
        assert_eq!(
            LoomTranslator.translate_request(&mut window, &mut session.ctx, &put),
            Err(InventoryError::IllegalPlacement(ContainerSlotType::LoomDye))
        );
    }
}
