use lantern_core::math::Vector3;
use lantern_protocol::{
    bedrock::{
        client::{CAddEntity, CContainerOpen, CRemoveEntity, CUpdateTrade, TradeOffer},
        BedrockContainerType, ContainerSlotType, ItemStackRequest, ItemStackRequestAction, ItemStackRequestSlotData,
    },
    java::{
        client::{CMerchantOffers, MerchantOffer},
        server::SSelectTrade,
    },
};

use super::{
    base_bedrock_slot_to_java, base_java_slot_to_bedrock_container, request, InventoryTranslator,
    TranslateResult,
};
use crate::{
    container::{Container, ContainerState, MerchantState},
    context::{DeferredAction, InventoryContext},
    error::InventoryError,
    holder::Prepare,
    slot::{java_to_storage, BedrockContainerSlot, SlotType},
    updater::{Updater, RESULT_SLOT},
    window::Window,
};

const RESULT: usize = 2;
const VILLAGER: &str = "minecraft:villager_v2";

/// The Java cost of an offer's first input after demand and discounts.
fn adjusted_cost(offer: &MerchantOffer, max_stack_size: u32) -> u32 {
    let base = i64::from(offer.first_input.item_count);
    let demand = ((base as f32) * (offer.demand as f32) * offer.price_multiplier).floor() as i64;
    let cost = base + demand.max(0) + i64::from(offer.special_price);
    cost.clamp(1, i64::from(max_stack_size.max(1))) as u32
}

/// Villager trading. The client only shows trades attached to an entity, so
/// an invisible villager is spawned under the player while the window is open.
pub struct MerchantTranslator;

impl MerchantTranslator {
    /// Forwards the offer list and opens the trade screen the first time.
    ///
    /// Some servers send their offers before the client has finished opening;
    /// the list is sent again after a short delay.
    pub fn update_trades(&self, container: &mut Container, ctx: &mut InventoryContext, offers: &CMerchantOffers) {
        let ContainerState::Merchant(merchant) = &mut container.state else {
            return;
        };
        let Some(villager) = merchant.villager else {
            log::debug!("Offers for window {} arrived without a villager", container.java_id);
            return;
        };

        let mut trade_offers = Vec::with_capacity(offers.offers.len());
        for offer in &offers.offers {
            let net_id = u32::try_from(ctx.net_ids.next_item()).unwrap_or_default();
            let mut buy_a = ctx.java_stack(&offer.first_input);
            let cost = adjusted_cost(offer, buy_a.max_stack_size);
            buy_a.set_count(cost);
            let buy_b = offer
                .second_input
                .as_ref()
                .filter(|second| !second.is_empty())
                .map(|second| ctx.item_data(&ctx.java_stack(second)));
            trade_offers.push(TradeOffer {
                buy_a: ctx.item_data(&buy_a),
                buy_b,
                sell: ctx.item_data(&ctx.java_stack(&offer.output)),
                uses: if offer.out_of_stock { offer.max_uses } else { offer.uses },
                max_uses: offer.max_uses,
                trader_exp: offer.xp,
                price_multiplier: offer.price_multiplier,
                demand: offer.demand,
                tier: 0,
                net_id,
            });
        }
        let trade = CUpdateTrade {
            window_id: container.bedrock_id,
            trade_tier: (offers.villager_level - 1).max(0),
            trader_unique_entity_id: villager,
            player_unique_entity_id: ctx.world.player_entity_id(),
            display_name: container.title.clone(),
            new_trading_ui: true,
            uses_economy: true,
            offers: trade_offers,
            experience: offers.experience,
        };

        if merchant.trades.is_none() {
            ctx.send_bedrock(CContainerOpen::entity(
                container.bedrock_id,
                BedrockContainerType::Trade,
                villager,
            ));
        }
        ctx.send_bedrock(trade.clone());
        let delay = ctx.config.merchant_resync_delay();
        ctx.defer(container.java_id, delay, DeferredAction::ResendTrades(trade.clone()));
        merchant.trades = Some(trade);
    }

    /// Selects the trade the client picked and predicts its result.
    fn select_trade(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
        recipe_network_id: u32,
    ) -> TranslateResult {
        let selected = match window.container().map(|container| &container.state) {
            Some(ContainerState::Merchant(MerchantState {
                trades: Some(trades), ..
            })) => trades
                .offers
                .iter()
                .position(|offer| offer.net_id == recipe_network_id)
                .map(|index| (index, ctx.items.to_java(&trades.offers[index].sell))),
            _ => None,
        };
        let (index, sell) = selected.ok_or(InventoryError::UnknownRecipe(recipe_network_id))?;
        ctx.send_java(SSelectTrade::new(index as i32));
        request::translate_request(self, window, ctx, request, vec![(RESULT, sell)])
    }
}

impl InventoryTranslator for MerchantTranslator {
    fn size(&self) -> usize {
        3
    }

    fn initial_state(&self) -> ContainerState {
        ContainerState::Merchant(MerchantState::default())
    }

    fn updater(&self) -> Updater {
        Updater::Ui
    }

    fn prepare(&self, container: &mut Container, ctx: &mut InventoryContext) -> Prepare {
        let ContainerState::Merchant(merchant) = &mut container.state else {
            return Prepare::Refused;
        };
        if merchant.villager.is_none() {
            let id = ctx.world.next_entity_id();
            let player = ctx.world.player_position();
            let position = Vector3::new(player.x as f32, player.y as f32 - 3.0, player.z as f32);
            ctx.send_bedrock(CAddEntity::hidden(id, VILLAGER, position));
            merchant.villager = Some(id);
        }
        Prepare::Ready
    }

    // the screen opens once the offers arrive
    fn open(&self, _container: &mut Container, _ctx: &mut InventoryContext) {}

    fn close(&self, container: &mut Container, ctx: &mut InventoryContext) {
        if let ContainerState::Merchant(merchant) = &mut container.state {
            if let Some(villager) = merchant.villager.take() {
                ctx.send_bedrock(CRemoveEntity::new(villager));
            }
            merchant.trades = None;
        }
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        match slot.container {
            ContainerSlotType::Trade2Ingredient1 => Ok(0),
            ContainerSlotType::Trade2Ingredient2 => Ok(1),
            ContainerSlotType::Trade2Result | ContainerSlotType::CreatedOutput => Ok(RESULT),
            _ => base_bedrock_slot_to_java(self.size(), slot),
        }
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        match slot {
            0 => 4,
            1 => 5,
            RESULT => RESULT_SLOT as i32,
            _ => java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot)),
        }
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        match slot {
            0 => BedrockContainerSlot::new(ContainerSlotType::Trade2Ingredient1, 4),
            1 => BedrockContainerSlot::new(ContainerSlotType::Trade2Ingredient2, 5),
            RESULT => BedrockContainerSlot::new(ContainerSlotType::Trade2Result, RESULT_SLOT as u8),
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

    fn translate_crafting_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        let Some(ItemStackRequestAction::CraftRecipe { recipe_network_id, .. }) = request.actions.first() else {
            return Err(InventoryError::InvalidCraftSequence("CRAFT_RECIPE"));
        };
        self.select_trade(window, ctx, request, *recipe_network_id)
    }

    // consoles press a trade button instead of taking the result
    fn translate_auto_crafting_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        let Some(ItemStackRequestAction::CraftRecipeAuto { recipe_network_id, .. }) = request.actions.first() else {
            return Err(InventoryError::InvalidCraftSequence("CRAFT_RECIPE_AUTO"));
        };
        self.select_trade(window, ctx, request, *recipe_network_id)
    }
}
