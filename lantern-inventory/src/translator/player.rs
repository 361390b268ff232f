//! The player's own window: 2x2 crafting, armor, storage and offhand.
//!
//! Creative players edit this window directly; their requests become creative
//! slot writes instead of clicks.

use lantern_core::ItemStack;
use lantern_protocol::{
    bedrock::{
        client::{CInventoryContent, CInventorySlot},
        container_id, ContainerSlotType, ItemData, ItemStackRequest, ItemStackRequestAction,
        ItemStackRequestSlotData,
    },
    java::{server::SSetCreativeSlot, Slot},
};

use super::{
    bundle,
    request::{self, check_net_id, java_slot, CraftState},
    InventoryTranslator, TranslateResult,
};
use crate::{
    context::InventoryContext,
    error::InventoryError,
    plan::ClickPlan,
    player::{HOTBAR_OFFSET, OFFHAND_SLOT, PLAYER_WINDOW_SIZE},
    slot::{BedrockContainerSlot, SlotType},
    window::Window,
};

/// UI slot of the first 2x2 grid slot, minus one.
const GRID_UI_OFFSET: usize = 27;
const ARMOR_OFFSET: usize = 5;

pub struct PlayerTranslator;

impl PlayerTranslator {
    /// Creative TAKE, PLACE, SWAP, DROP and DESTROY, applied directly.
    fn translate_creative_edit(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        if let Some(result) = bundle::handle_bundle(self, window, ctx, request, true) {
            return result;
        }
        let outcome = {
            let mut plan = ClickPlan::new(&*window, self, false);
            for action in &request.actions {
                match action {
                    ItemStackRequestAction::Take {
                        count,
                        source,
                        destination,
                    }
                    | ItemStackRequestAction::Place {
                        count,
                        source,
                        destination,
                    } => {
                        let from = self.creative_slot(&plan, source)?;
                        let to = self.creative_slot(&plan, destination)?;
                        if from == to {
                            return Err(InventoryError::InvalidTransfer("creative move onto itself"));
                        }
                        let mut moving = read(&plan, from);
                        if *count == 0 || *count > moving.count {
                            return Err(InventoryError::InvalidTransfer("creative move of missing items"));
                        }
                        let mut target = read(&plan, to);
                        if target.is_empty() {
                            target = moving.copy_with_count(*count);
                        } else if target.is_same_item(&moving) {
                            target.add(*count);
                        } else {
                            return Err(InventoryError::InvalidTransfer("creative move onto another item"));
                        }
                        moving.sub(*count);
                        write(&mut plan, from, moving);
                        write(&mut plan, to, target);
                    }
                    ItemStackRequestAction::Swap {
                        source,
                        destination,
                    } => {
                        let from = self.creative_slot(&plan, source)?;
                        let to = self.creative_slot(&plan, destination)?;
                        let (first, second) = (read(&plan, from), read(&plan, to));
                        write(&mut plan, from, second);
                        write(&mut plan, to, first);
                    }
                    ItemStackRequestAction::Drop { count, source, .. } => {
                        let from = self.creative_slot(&plan, source)?;
                        let mut item = read(&plan, from);
                        if item.is_empty() {
                            return Err(InventoryError::InvalidTransfer("nothing to drop"));
                        }
                        plan.queue(SSetCreativeSlot::new(-1, Slot::from(&item.copy_with_count(*count))));
                        item.sub(*count);
                        write(&mut plan, from, item);
                    }
                    ItemStackRequestAction::Destroy { count, source } => {
                        let from = self.creative_slot(&plan, source)?;
                        let mut item = read(&plan, from);
                        item.sub(*count);
                        write(&mut plan, from, item);
                    }
                    other => return Err(InventoryError::UnsupportedAction(other.name())),
                }
            }
            plan.execute_creative()
        };
        let affected = outcome.commit(window, ctx);
        Ok(request::accept(self, window, ctx, request, &affected))
    }

    /// Java slot of a creative edit, `None` for the cursor. The grid stays out of creative.
    fn creative_slot(
        &self,
        plan: &ClickPlan<'_, Self>,
        slot: &ItemStackRequestSlotData,
    ) -> Result<Option<usize>, InventoryError> {
        check_net_id(self, plan.window(), slot)?;
        if slot.container == ContainerSlotType::CraftingInput {
            return Err(InventoryError::IllegalPlacement(slot.container));
        }
        java_slot(self, plan.window(), slot)
    }
}

fn read(plan: &ClickPlan<'_, PlayerTranslator>, slot: Option<usize>) -> ItemStack {
    slot.map_or(plan.cursor(), |slot| plan.item(slot)).clone()
}

fn write(plan: &mut ClickPlan<'_, PlayerTranslator>, slot: Option<usize>, item: ItemStack) {
    match slot {
        Some(slot) => plan.set_item(slot, item),
        None => plan.set_cursor(item),
    }
}

impl InventoryTranslator for PlayerTranslator {
    fn size(&self) -> usize {
        PLAYER_WINDOW_SIZE
    }

    fn update_inventory(&self, window: &mut Window, ctx: &mut InventoryContext) {
        for slot in 1..ARMOR_OFFSET {
            let item = ctx.item_data(window.item(slot));
            ctx.send_bedrock(CInventorySlot::new(
                i32::from(container_id::UI),
                (slot + GRID_UI_OFFSET) as u32,
                item,
            ));
        }

        let mut storage = vec![ItemData::AIR; 36];
        for slot in 9..OFFHAND_SLOT {
            let index = if slot >= HOTBAR_OFFSET { slot - HOTBAR_OFFSET } else { slot };
            storage[index] = ctx.item_data(window.item(slot));
        }
        ctx.send_bedrock(CInventoryContent::new(i32::from(container_id::INVENTORY), storage));

        let armor = (ARMOR_OFFSET..9).map(|slot| ctx.item_data(window.item(slot))).collect();
        ctx.send_bedrock(CInventoryContent::new(i32::from(container_id::ARMOR), armor));

        let offhand = ctx.item_data(window.item(OFFHAND_SLOT));
        ctx.send_bedrock(CInventoryContent::new(i32::from(container_id::OFFHAND), vec![offhand]));

        for slot in 0..window.len() {
            bundle::send_contents(ctx, window.item(slot));
        }
    }

    fn update_slot(&self, window: &mut Window, ctx: &mut InventoryContext, slot: usize) {
        let item = ctx.item_data(window.item(slot));
        let (container, index) = match slot {
            1..=4 => (container_id::UI, slot + GRID_UI_OFFSET),
            5..=8 => (container_id::ARMOR, slot - ARMOR_OFFSET),
            9..=35 => (container_id::INVENTORY, slot),
            36..=44 => (container_id::INVENTORY, slot - HOTBAR_OFFSET),
            OFFHAND_SLOT => {
                ctx.send_bedrock(CInventoryContent::new(i32::from(container_id::OFFHAND), vec![item]));
                bundle::send_contents(ctx, window.item(slot));
                return;
            }
            // the crafting result is only shown through requests
            _ => return,
        };
        ctx.send_bedrock(CInventorySlot::new(i32::from(container), index as u32, item));
        bundle::send_contents(ctx, window.item(slot));
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        let index = usize::from(slot.slot);
        let java = match slot.container {
            ContainerSlotType::Hotbar | ContainerSlotType::Inventory | ContainerSlotType::HotbarAndInventory => {
                match index {
                    0..=8 => Some(index + HOTBAR_OFFSET),
                    9..=35 => Some(index),
                    _ => None,
                }
            }
            ContainerSlotType::Armor => (index < 4).then_some(index + ARMOR_OFFSET),
            ContainerSlotType::Offhand => Some(OFFHAND_SLOT),
            ContainerSlotType::CraftingInput => (28..=31).contains(&index).then(|| index - GRID_UI_OFFSET),
            ContainerSlotType::CraftingOutput
            | ContainerSlotType::CreatedOutput
            | ContainerSlotType::CreativeOutput => Some(0),
            _ => None,
        };
        java.ok_or(InventoryError::InvalidSlot(slot.container, slot.slot))
    }

    fn java_slot_to_bedrock(&self, _slot: usize) -> i32 {
        -1
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        let (container, index) = match slot {
            1..=4 => (ContainerSlotType::CraftingInput, slot + GRID_UI_OFFSET),
            5..=8 => (ContainerSlotType::Armor, slot - ARMOR_OFFSET),
            9..=35 => (ContainerSlotType::Inventory, slot),
            36..=44 => (ContainerSlotType::Hotbar, slot - HOTBAR_OFFSET),
            OFFHAND_SLOT => (ContainerSlotType::Offhand, 1),
            _ => (ContainerSlotType::CraftingOutput, 0),
        };
        BedrockContainerSlot::new(container, index as u8)
    }

    fn slot_type(&self, slot: usize) -> SlotType {
        if slot == 0 {
            SlotType::Output
        } else {
            SlotType::Normal
        }
    }

    fn grid_size(&self) -> Option<usize> {
        Some(4)
    }

    fn translate_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        if ctx.game_mode.edits_directly() {
            return self.translate_creative_edit(window, ctx, request);
        }
        request::translate_request(self, window, ctx, request, Vec::new())
    }

    /// Picking an item from the creative menu. The client addresses creative
    /// items by their position in the list it was sent, plus one.
    fn translate_creative_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        let mut state = CraftState::Start;
        let mut picked = ItemStack::EMPTY;
        let outcome = {
            let mut plan = ClickPlan::new(&*window, self, false);
            for action in &request.actions {
                match action {
                    ItemStackRequestAction::CraftCreative {
                        creative_item_network_id,
                        ..
                    } => {
                        if state != CraftState::Start {
                            return Err(InventoryError::InvalidCraftSequence(action.name()));
                        }
                        state = CraftState::RecipeId;
                        let item = (*creative_item_network_id as usize)
                            .checked_sub(1)
                            .and_then(|index| ctx.recipes.creative_items.get(index))
                            .ok_or(InventoryError::UnknownRecipe(*creative_item_network_id))?;
                        picked = ctx.items.to_java(item);
                    }
                    ItemStackRequestAction::CraftResultsDeprecated { .. } => {
                        if state != CraftState::RecipeId {
                            return Err(InventoryError::InvalidCraftSequence(action.name()));
                        }
                        state = CraftState::Deprecated;
                    }
                    ItemStackRequestAction::Destroy { source, .. } => {
                        if state != CraftState::Deprecated {
                            return Err(InventoryError::InvalidCraftSequence(action.name()));
                        }
                        // a creative destroy always empties the slot
                        let slot = java_slot(self, plan.window(), source)?;
                        write(&mut plan, slot, ItemStack::EMPTY);
                    }
                    ItemStackRequestAction::Take {
                        count,
                        source,
                        destination,
                    }
                    | ItemStackRequestAction::Place {
                        count,
                        source,
                        destination,
                    } => {
                        if !matches!(state, CraftState::Deprecated | CraftState::Transfer) {
                            return Err(InventoryError::InvalidCraftSequence(action.name()));
                        }
                        state = CraftState::Transfer;
                        if source.container != ContainerSlotType::CreativeOutput {
                            return Err(InventoryError::InvalidTransfer("creative items come from the creative output"));
                        }
                        let to = java_slot(self, plan.window(), destination)?;
                        let mut target = read(&plan, to);
                        if target.is_empty() {
                            target = picked.copy_with_count(*count);
                        } else {
                            target.add(*count);
                        }
                        write(&mut plan, to, target);
                    }
                    other => return Err(InventoryError::InvalidCraftSequence(other.name())),
                }
            }
            plan.execute_creative()
        };
        let affected = outcome.commit(window, ctx);
        Ok(request::accept(self, window, ctx, request, &affected))
    }
}

#[cfg(test)]
mod test {
    use lantern_core::GameMode;
    use lantern_protocol::{bedrock::client::Clientbound, java::server::Serverbound};

    use super::*;
    use crate::{
        player::PlayerInventory,
        test_support::{cursor, request, slot, stack, take, TestSession, DIRT, STONE},
    };

    fn creative() -> TestSession {
        let mut session = TestSession::new();
        session.ctx.game_mode = GameMode::Creative;
        session
    }

    #[test]
    fn player_regions_map_to_java_slots() {
        let java = |container, index| PlayerTranslator.bedrock_slot_to_java(&slot(container, index, 0));
        assert_eq!(java(ContainerSlotType::Hotbar, 0), Ok(36));
        assert_eq!(java(ContainerSlotType::Inventory, 9), Ok(9));
        assert_eq!(java(ContainerSlotType::Armor, 2), Ok(7));
        assert_eq!(java(ContainerSlotType::Offhand, 1), Ok(45));
        assert_eq!(java(ContainerSlotType::CraftingInput, 28), Ok(1));
        assert_eq!(java(ContainerSlotType::CreatedOutput, 50), Ok(0));
        assert_eq!(
            java(ContainerSlotType::CraftingInput, 32),
            Err(InventoryError::InvalidSlot(ContainerSlotType::CraftingInput, 32))
        );
    }

    #[test]
    fn creative_take_writes_the_slot_directly() {
        let mut session = creative();
        let mut player = PlayerInventory::new();
        player.set_item(9, stack(STONE, 10), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, None);

        let take = request(vec![take(4, slot(ContainerSlotType::Inventory, 9, -1), cursor(0))]);
        let response = PlayerTranslator
            .translate_request(&mut window, &mut session.ctx, &take)
            .unwrap();
        assert!(response.is_ok());
        assert_eq!(window.cursor().count, 4);
        assert_eq!(window.item(9).count, 6);
        let Serverbound::SetCreativeSlot(write) = &session.java.take()[0] else {
            panic!("expected a creative slot write");
        };
        assert_eq!((write.slot, write.clicked_item.item_count), (9, 6));
    }

    #[test]
    fn creative_grid_is_off_limits() {
        let mut session = creative();
        let mut player = PlayerInventory::new();
        player.set_cursor(stack(DIRT, 1), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, None);
        let place = request(vec![take(1, cursor(-1), slot(ContainerSlotType::CraftingInput, 28, 0))]);
        let error = PlayerTranslator
            .translate_request(&mut window, &mut session.ctx, &place)
            .unwrap_err();
        assert!(error.is_silent());
        assert!(session.java.take().is_empty());
    }

    #[test]
    fn creative_drop_throws_a_copy() {
        let mut session = creative();
        let mut player = PlayerInventory::new();
        player.set_item(36, stack(STONE, 3), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, None);
        let drop = request(vec![ItemStackRequestAction::Drop {
            count: 3,
            source: slot(ContainerSlotType::Hotbar, 0, -1),
            randomly: false,
        }]);
        PlayerTranslator
            .translate_request(&mut window, &mut session.ctx, &drop)
            .unwrap();
        let slots: Vec<_> = session
            .java
            .take()
            .into_iter()
            .filter_map(|packet| match packet {
                Serverbound::SetCreativeSlot(write) => Some((write.slot, write.clicked_item.item_count)),
                _ => None,
            })
            .collect();
        assert_eq!(slots, vec![(36, 0), (-1, 3)]);
        assert!(window.item(36).is_empty());
    }

    #[test]
    fn creative_menu_items_come_from_the_sent_list() {
        let mut session = creative();
        session.ctx.recipes.creative_items = vec![
            ItemData {
                definition_id: DIRT,
                count: 1,
                ..ItemData::AIR
            },
            ItemData {
                definition_id: STONE,
                count: 1,
                ..ItemData::AIR
            },
        ];
        let mut player = PlayerInventory::new();
        let mut window = Window::new(&mut player, None);
        let pick = request(vec![
            ItemStackRequestAction::CraftCreative {
                creative_item_network_id: 2,
                number_of_requested_crafts: 1,
            },
            ItemStackRequestAction::CraftResultsDeprecated {
                result_items: Vec::new(),
                times_crafted: 1,
            },
            take(64, slot(ContainerSlotType::CreativeOutput, 50, 0), slot(ContainerSlotType::Hotbar, 2, 0)),
        ]);
        let response = PlayerTranslator
            .translate_creative_request(&mut window, &mut session.ctx, &pick)
            .unwrap();
        assert!(response.is_ok());
        assert_eq!(window.item(38).item_id, STONE);
        assert_eq!(window.item(38).count, 64);
        assert!(matches!(
            &session.java.take()[..],
            [Serverbound::SetCreativeSlot(write)] if write.slot == 38
        ));
    }

    #[test]
    fn unknown_creative_item_is_rejected() {
        let mut session = creative();
        let mut player = PlayerInventory::new();
        let mut window = Window::new(&mut player, None);
        let pick = request(vec![ItemStackRequestAction::CraftCreative {
            creative_item_network_id: 0,
            number_of_requested_crafts: 1,
        }]);
        assert_eq!(
            PlayerTranslator.translate_creative_request(&mut window, &mut session.ctx, &pick),
            Err(InventoryError::UnknownRecipe(0))
        );
    }

    #[test]
    fn full_update_sends_every_region() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        player.set_item(6, stack(STONE, 1), &mut session.ctx.net_ids);
        player.set_item(40, stack(DIRT, 2), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, None);
        PlayerTranslator.update_inventory(&mut window, &mut session.ctx);

        let contents: Vec<_> = session
            .bedrock
            .take()
            .into_iter()
            .filter_map(|packet| match packet {
                Clientbound::InventoryContent(content) => Some(content),
                _ => None,
            })
            .collect();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].container_id, i32::from(container_id::INVENTORY));
        assert_eq!(contents[0].contents[4].count, 2);
        assert_eq!(contents[1].container_id, i32::from(container_id::ARMOR));
        assert_eq!(contents[1].contents[1].definition_id, STONE);
        assert_eq!(contents[2].contents.len(), 1);
    }
}
