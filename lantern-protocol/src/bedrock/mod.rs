use bytes::Bytes;
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

pub mod block_entity;
pub mod client;
pub mod server;
pub mod stack_request;
pub mod stack_response;

pub use block_entity::BlockEntityData;
pub use stack_request::*;
pub use stack_response::*;

/// Fixed window ids of the containers the client always has open.
pub mod container_id {
    pub const INVENTORY: i8 = 0;
    pub const FIRST: i8 = 1;
    pub const LAST: i8 = 100;
    pub const OFFHAND: i8 = 119;
    pub const ARMOR: i8 = 120;
    pub const HOTBAR: i8 = 122;
    pub const FIXED_INVENTORY: i8 = 123;
    pub const UI: i8 = 124;
    /// Bundle contents, addressed by dynamic id.
    pub const DYNAMIC: i8 = 125;
}

/// Region a slot lives in, as named by stack requests and responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerSlotType {
    AnvilInput,
    AnvilMaterial,
    AnvilResult,
    SmithingTableInput,
    SmithingTableMaterial,
    SmithingTableTemplate,
    SmithingTableResult,
    Armor,
    LevelEntity,
    BeaconPayment,
    BrewingInput,
    BrewingResult,
    BrewingFuel,
    HotbarAndInventory,
    CraftingInput,
    CraftingOutput,
    EnchantingInput,
    EnchantingLapis,
    FurnaceFuel,
    FurnaceIngredient,
    FurnaceResult,
    Hotbar,
    Inventory,
    ShulkerBox,
    TradeIngredient1,
    TradeIngredient2,
    TradeResult,
    Trade2Ingredient1,
    Trade2Ingredient2,
    Trade2Result,
    Offhand,
    LoomInput,
    LoomDye,
    LoomMaterial,
    LoomResult,
    BlastFurnaceIngredient,
    SmokerIngredient,
    GrindstoneInput,
    GrindstoneAdditional,
    GrindstoneResult,
    StonecutterInput,
    StonecutterResult,
    CartographyInput,
    CartographyAdditional,
    CartographyResult,
    Barrel,
    Cursor,
    CreatedOutput,
    CreativeOutput,
    CrafterBlockContainer,
    DynamicContainer,
}

impl ContainerSlotType {
    /// Regions holding the player's own 36 storage slots.
    pub fn is_player_storage(self) -> bool {
        matches!(
            self,
            Self::HotbarAndInventory | Self::Hotbar | Self::Inventory
        )
    }
}

/// Window type announced in `ContainerOpen`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize)]
pub enum BedrockContainerType {
    Container = 0,
    Workbench = 1,
    Furnace = 2,
    Enchantment = 3,
    BrewingStand = 4,
    Anvil = 5,
    Dispenser = 6,
    Dropper = 7,
    Hopper = 8,
    Beacon = 13,
    Trade = 15,
    Loom = 24,
    Lectern = 25,
    Grindstone = 26,
    BlastFurnace = 27,
    Smoker = 28,
    Stonecutter = 29,
    Cartography = 30,
    SmithingTable = 33,
    Crafter = 36,
}

/// An item in the client's item space.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    pub definition_id: i32,
    pub count: u32,
    pub damage: i32,
    pub net_id: i32,
    /// Block runtime id for block items, `0` otherwise.
    pub block_runtime_id: i32,
    pub tag: Bytes,
}

impl ItemData {
    pub const AIR: ItemData = ItemData {
        definition_id: 0,
        count: 0,
        damage: 0,
        net_id: 0,
        block_runtime_id: 0,
        tag: Bytes::new(),
    };

    pub fn is_empty(&self) -> bool {
        self.definition_id == 0 || self.count == 0
    }
}
