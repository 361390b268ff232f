use lantern_macros::packet;
use serde::Deserialize;

use crate::java::Slot;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MerchantOffer {
    pub first_input: Slot,
    pub output: Slot,
    pub second_input: Option<Slot>,
    pub out_of_stock: bool,
    pub uses: i32,
    pub max_uses: i32,
    pub xp: i32,
    pub special_price: i32,
    pub price_multiplier: f32,
    pub demand: i32,
}

#[derive(Clone, Debug, Deserialize)]
#[packet(0x2C)]
pub struct CMerchantOffers {
    pub window_id: i32,
    pub offers: Vec<MerchantOffer>,
    pub villager_level: i32,
    pub experience: i32,
    pub is_regular_villager: bool,
    pub can_restock: bool,
}
