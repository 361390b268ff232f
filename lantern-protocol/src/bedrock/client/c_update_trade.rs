use lantern_macros::packet;
use serde::Serialize;

use crate::bedrock::ItemData;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TradeOffer {
    pub buy_a: ItemData,
    pub buy_b: Option<ItemData>,
    pub sell: ItemData,
    pub uses: i32,
    pub max_uses: i32,
    pub trader_exp: i32,
    pub price_multiplier: f32,
    pub demand: i32,
    /// Villager level the offer unlocks at, `0` based.
    pub tier: i32,
    /// Recipe net id the client echoes back when picking this trade.
    pub net_id: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x50)]
pub struct CUpdateTrade {
    pub window_id: i8,
    pub trade_tier: i32,
    pub trader_unique_entity_id: i64,
    pub player_unique_entity_id: i64,
    pub display_name: String,
    pub new_trading_ui: bool,
    pub uses_economy: bool,
    pub offers: Vec<TradeOffer>,
    pub experience: i32,
}
