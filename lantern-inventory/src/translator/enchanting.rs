use lantern_protocol::{
    bedrock::{
        client::{CPlayerEnchantOptions, EnchantData, EnchantOptionData},
        BedrockContainerType, ContainerSlotType, ItemStackRequest, ItemStackRequestAction, ItemStackRequestSlotData,
    },
    java::server::SContainerButtonClick,
};

use super::{
    base_bedrock_slot_to_java, base_java_slot_to_bedrock_container, request, InventoryTranslator,
    TranslateResult,
};
use crate::{
    container::{Container, ContainerState, EnchantOption, EnchantingState},
    context::InventoryContext,
    error::InventoryError,
    holder::BlockInventoryHolder,
    slot::{java_to_storage, BedrockContainerSlot},
    updater::Updater,
    window::Window,
    window_property::{EnchantmentTable, WindowProperty},
};

const INPUT_SLOT: u8 = 14;
const LAPIS_SLOT: u8 = 15;

const HOLDER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:enchanting_table",
    &["minecraft:enchanting_table"],
    BedrockContainerType::Enchantment,
);

pub struct EnchantingTranslator;

/// The client's view of one option; `net_id` must already be assigned.
fn option_data(ctx: &InventoryContext, slot: usize, option: &EnchantOption) -> EnchantOptionData {
    let enchants = ctx
        .items
        .bedrock_enchantment(option.java_enchantment)
        .filter(|_| option.level >= 0)
        .map(|enchant_id| EnchantData {
            enchant_id,
            level: option.level,
        })
        .into_iter()
        .collect();
    EnchantOptionData {
        cost: option.xp_cost,
        primary_slot: slot as i32,
        enchants,
        name: ctx.items.enchantment_name(option.java_enchantment).unwrap_or_default(),
        enchant_net_id: option.net_id,
    }
}

impl InventoryTranslator for EnchantingTranslator {
    fn size(&self) -> usize {
        2
    }

    fn initial_state(&self) -> ContainerState {
        ContainerState::Enchanting(EnchantingState::default())
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&HOLDER)
    }

    fn updater(&self) -> Updater {
        Updater::Ui
    }

    /// Java sends cost, enchantment and level of each option separately, level
    /// last, so the options are only resent then.
    fn update_property(&self, container: &mut Container, ctx: &mut InventoryContext, key: i16, value: i16) {
        let ContainerState::Enchanting(enchanting) = &mut container.state else {
            return;
        };
        let value = i32::from(value);
        let (slot, changed) = match EnchantmentTable::from_id(key) {
            Some(EnchantmentTable::LevelRequirement { slot }) => {
                let option = &mut enchanting.options[slot];
                let changed = option.xp_cost != value;
                option.xp_cost = value;
                (slot, changed)
            }
            Some(EnchantmentTable::EnchantmentId { slot }) => {
                let option = &mut enchanting.options[slot];
                let changed = option.java_enchantment != value;
                option.java_enchantment = value;
                (slot, changed)
            }
            Some(EnchantmentTable::EnchantmentLevel { slot }) => {
                let option = &mut enchanting.options[slot];
                let changed = option.level != value;
                option.level = value;
                (slot, changed)
            }
            Some(EnchantmentTable::EnchantmentSeed) | None => return,
        };
        let option = &mut enchanting.options[slot];
        option.dirty |= changed;
        let level_arrived = matches!(
            EnchantmentTable::from_id(key),
            Some(EnchantmentTable::EnchantmentLevel { .. })
        );
        if !level_arrived || !option.dirty {
            return;
        }
        // a changed option is a new choice to the client
        option.net_id = u32::try_from(ctx.net_ids.next_item()).unwrap_or_default();
        option.dirty = false;

        let options = enchanting
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.net_id != 0)
            .map(|(index, option)| option_data(ctx, index, option))
            .collect();
        ctx.send_bedrock(CPlayerEnchantOptions::new(options));
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        match slot.container {
            ContainerSlotType::EnchantingInput => Ok(0),
            ContainerSlotType::EnchantingLapis => Ok(1),
            _ => base_bedrock_slot_to_java(self.size(), slot),
        }
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        match slot {
            0 => i32::from(INPUT_SLOT),
            1 => i32::from(LAPIS_SLOT),
            _ => java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot)),
        }
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        match slot {
            0 => BedrockContainerSlot::new(ContainerSlotType::EnchantingInput, INPUT_SLOT),
            1 => BedrockContainerSlot::new(ContainerSlotType::EnchantingLapis, LAPIS_SLOT),
            _ => base_java_slot_to_bedrock_container(self.size(), slot, ContainerSlotType::LevelEntity),
        }
    }

    fn should_handle_request_first(&self, action: &ItemStackRequestAction, _window: &Window) -> bool {
        matches!(action, ItemStackRequestAction::CraftRecipe { .. })
    }

    /// Picking an option is a button click; the server moves the items.
    fn translate_special_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        let Some(ItemStackRequestAction::CraftRecipe { recipe_network_id, .. }) = request.actions.first() else {
            return Err(InventoryError::InvalidCraftSequence("CRAFT_RECIPE"));
        };
        let button = match window.container().map(|container| &container.state) {
            Some(ContainerState::Enchanting(enchanting)) => enchanting
                .options
                .iter()
                .position(|option| option.net_id != 0 && option.net_id == *recipe_network_id),
            _ => None,
        }
        .ok_or(InventoryError::UnknownRecipe(*recipe_network_id))?;
        ctx.send_java(SContainerButtonClick::new(window.java_id(), button as u8));
        Ok(request::accept(self, window, ctx, request, &[]))
    }
}
