use lantern_macros::packet;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnchantData {
    pub enchant_id: i32,
    pub level: i32,
}

/// One of the three choices of an enchanting table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnchantOptionData {
    pub cost: i32,
    /// Slot of the choice, `0..3`.
    pub primary_slot: i32,
    pub enchants: Vec<EnchantData>,
    pub name: String,
    /// Recipe net id the client echoes back in `CRAFT_RECIPE` when picking this option.
    pub enchant_net_id: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x92)]
pub struct CPlayerEnchantOptions {
    pub options: Vec<EnchantOptionData>,
}

impl CPlayerEnchantOptions {
    pub fn new(options: Vec<EnchantOptionData>) -> Self {
        Self { options }
    }
}
