//! Bedrock to Java inventory translation.
//!
//! The Bedrock client describes inventory changes as declarative item stack
//! requests; the Java server only understands window clicks. Translators turn
//! one into the other and push the server's authoritative state back out.

use num_derive::{FromPrimitive, ToPrimitive};

pub mod cache;
pub mod click;
pub mod container;
pub mod context;
pub mod error;
pub mod holder;
pub mod plan;
pub mod player;
pub mod slot;
pub mod translator;
pub mod updater;
pub mod window;
pub mod window_property;

#[cfg(test)]
mod test_support;

pub use cache::InventoryCache;
pub use container::Container;
pub use context::InventoryContext;
pub use error::InventoryError;
pub use player::PlayerInventory;
pub use translator::{InventoryTranslator, TranslatorRegistry};
pub use window::Window;

/// Java menu types, in menu registry order.
#[derive(Debug, ToPrimitive, FromPrimitive, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowType {
    Generic9x1,
    Generic9x2,
    // Chest, minecart with chest, ender chest and barrel
    Generic9x3,
    Generic9x4,
    Generic9x5,
    // Large chests
    Generic9x6,
    // Dispenser and dropper
    Generic3x3,
    Crafter3x3,
    Anvil,
    Beacon,
    BlastFurnace,
    BrewingStand,
    CraftingTable,
    EnchantmentTable,
    Furnace,
    Grindstone,
    // Hopper or minecart with hopper
    Hopper,
    Lectern,
    Loom,
    // Villager, wandering trader
    Merchant,
    ShulkerBox,
    SmithingTable,
    Smoker,
    CartographyTable,
    Stonecutter,
}

impl WindowType {
    /// Looks up a menu type sent in an open screen packet.
    pub fn from_menu_id(id: i32) -> Option<Self> {
        num_traits::FromPrimitive::from_i32(id)
    }

    /// Rows of a generic chest window, `None` for every other window.
    pub const fn chest_rows(&self) -> Option<usize> {
        match self {
            Self::Generic9x1 => Some(1),
            Self::Generic9x2 => Some(2),
            Self::Generic9x3 => Some(3),
            Self::Generic9x4 => Some(4),
            Self::Generic9x5 => Some(5),
            Self::Generic9x6 => Some(6),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::WindowType;

    #[test]
    fn menu_ids_follow_registry_order() {
        assert_eq!(WindowType::from_menu_id(0), Some(WindowType::Generic9x1));
        assert_eq!(WindowType::from_menu_id(7), Some(WindowType::Crafter3x3));
        assert_eq!(WindowType::from_menu_id(19), Some(WindowType::Merchant));
        assert_eq!(WindowType::from_menu_id(24), Some(WindowType::Stonecutter));
        assert_eq!(WindowType::from_menu_id(25), None);
        assert_eq!(WindowType::Generic9x5.chest_rows(), Some(5));
    }
}
