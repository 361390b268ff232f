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
    container::{ContainerState, StonecutterState},
    context::{InventoryContext, StonecutterRecipe},
    error::InventoryError,
    holder::BlockInventoryHolder,
    slot::{java_to_storage, BedrockContainerSlot, SlotType},
    updater::{Updater, RESULT_SLOT},
    window::Window,
};

const INPUT_SLOT: u8 = 3;
const RESULT: usize = 1;

const HOLDER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:stonecutter[facing=north]",
    &["minecraft:stonecutter"],
    BedrockContainerType::Stonecutter,
);

/// Java lists the cuts of the input as buttons; the client names the cut by
/// recipe. Pressing the button makes the server fill the result slot.
pub struct StonecutterTranslator;

impl StonecutterTranslator {
    /// The recipe a request asks for, by net id or by its predicted result.
    fn requested_recipe(ctx: &InventoryContext, request: &ItemStackRequest) -> Result<StonecutterRecipe, InventoryError> {
        match request.actions.first() {
            Some(ItemStackRequestAction::CraftRecipe { recipe_network_id, .. }) => ctx
                .recipes
                .stonecutter
                .get(recipe_network_id)
                .cloned()
                .ok_or(InventoryError::UnknownRecipe(*recipe_network_id)),
            Some(ItemStackRequestAction::CraftNonImplementedDeprecated) => {
                let Some(ItemStackRequestAction::CraftResultsDeprecated { result_items, .. }) = request.actions.get(1)
                else {
                    return Err(InventoryError::InvalidCraftSequence("CRAFT_NON_IMPLEMENTED_DEPRECATED"));
                };
                let result = result_items
                    .first()
                    .ok_or(InventoryError::InvalidCraftSequence("CRAFT_RESULTS_DEPRECATED"))?;
                let output = ctx.items.to_java(result);
                ctx.recipes
                    .stonecutter
                    .values()
                    .filter(|recipe| recipe.output.item_id == output.item_id)
                    .min_by_key(|recipe| recipe.button)
                    .cloned()
                    .ok_or(InventoryError::UnknownRecipe(0))
            }
            _ => Err(InventoryError::InvalidCraftSequence("CRAFT_RECIPE")),
        }
    }
}

impl InventoryTranslator for StonecutterTranslator {
    fn size(&self) -> usize {
        2
    }

    fn initial_state(&self) -> ContainerState {
        ContainerState::Stonecutter(StonecutterState::default())
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&HOLDER)
    }

    fn updater(&self) -> Updater {
        Updater::Ui
    }

    // the server drops the selection when the input changes
    fn update_slot(&self, window: &mut Window, ctx: &mut InventoryContext, slot: usize) {
        if slot == 0 {
            if let Some(ContainerState::Stonecutter(stonecutter)) =
                window.container_mut().map(|container| &mut container.state)
            {
                stonecutter.button = -1;
            }
        }
        self.updater().update_slot(self, window, ctx, slot);
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        match slot.container {
            ContainerSlotType::StonecutterInput => Ok(0),
            ContainerSlotType::StonecutterResult | ContainerSlotType::CreatedOutput => Ok(RESULT),
            _ => base_bedrock_slot_to_java(self.size(), slot),
        }
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        match slot {
            0 => i32::from(INPUT_SLOT),
            RESULT => RESULT_SLOT as i32,
            _ => java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot)),
        }
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        match slot {
            0 => BedrockContainerSlot::new(ContainerSlotType::StonecutterInput, INPUT_SLOT),
            RESULT => BedrockContainerSlot::new(ContainerSlotType::StonecutterResult, RESULT_SLOT as u8),
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

    fn should_handle_request_first(&self, action: &ItemStackRequestAction, _window: &Window) -> bool {
        matches!(
            action,
            ItemStackRequestAction::CraftRecipe { .. } | ItemStackRequestAction::CraftNonImplementedDeprecated
        )
    }

    fn translate_special_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        let recipe = Self::requested_recipe(ctx, request)?;
        let java_id = window.java_id();
        let Some(ContainerState::Stonecutter(stonecutter)) =
            window.container_mut().map(|container| &mut container.state)
        else {
            return Err(InventoryError::UnknownWindow(i32::from(java_id)));
        };
        if stonecutter.button == i32::from(recipe.button) {
            return request::translate_request(self, window, ctx, request, Vec::new());
        }
        stonecutter.button = i32::from(recipe.button);
        ctx.send_java(SContainerButtonClick::new(java_id, recipe.button));

        // the server fills the result later
        let seeds = if window.item(RESULT).item_id == recipe.output.item_id {
            Vec::new()
        } else {
            vec![(RESULT, recipe.output)]
        };
        request::translate_request(self, window, ctx, request, seeds)
    }
}
