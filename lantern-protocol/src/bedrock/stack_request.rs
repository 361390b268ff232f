use serde::{Deserialize, Serialize};

use super::{ContainerSlotType, ItemData};

/// One slot named by a request, together with the net id the client believes it holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStackRequestSlotData {
    pub container: ContainerSlotType,
    pub slot: u8,
    pub stack_network_id: i32,
    /// Set for [`ContainerSlotType::DynamicContainer`]; the bundle id being addressed.
    pub dynamic_id: Option<i32>,
}

impl ItemStackRequestSlotData {
    pub fn new(container: ContainerSlotType, slot: u8, stack_network_id: i32) -> Self {
        Self {
            container,
            slot,
            stack_network_id,
            dynamic_id: None,
        }
    }

    pub fn dynamic(bundle_id: i32, slot: u8, stack_network_id: i32) -> Self {
        Self {
            container: ContainerSlotType::DynamicContainer,
            slot,
            stack_network_id,
            dynamic_id: Some(bundle_id),
        }
    }

    pub fn is_cursor(&self) -> bool {
        self.container == ContainerSlotType::Cursor
    }
}

/// An ingredient of an auto-craft request, as the client describes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDescriptor {
    pub item_id: i32,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ItemStackRequestAction {
    Take {
        count: u32,
        source: ItemStackRequestSlotData,
        destination: ItemStackRequestSlotData,
    },
    Place {
        count: u32,
        source: ItemStackRequestSlotData,
        destination: ItemStackRequestSlotData,
    },
    Swap {
        source: ItemStackRequestSlotData,
        destination: ItemStackRequestSlotData,
    },
    Drop {
        count: u32,
        source: ItemStackRequestSlotData,
        randomly: bool,
    },
    Destroy {
        count: u32,
        source: ItemStackRequestSlotData,
    },
    Consume {
        count: u32,
        source: ItemStackRequestSlotData,
    },
    Create {
        slot: u8,
    },
    BeaconPayment {
        primary_effect: i32,
        secondary_effect: i32,
    },
    MineBlock {
        hotbar_slot: i32,
        predicted_durability: i32,
        stack_network_id: i32,
    },
    CraftRecipe {
        recipe_network_id: u32,
        number_of_requested_crafts: u8,
    },
    CraftRecipeAuto {
        recipe_network_id: u32,
        times_crafted: u8,
        ingredients: Vec<IngredientDescriptor>,
    },
    CraftCreative {
        creative_item_network_id: u32,
        number_of_requested_crafts: u8,
    },
    CraftRecipeOptional {
        recipe_network_id: u32,
        filtered_string_index: i32,
    },
    CraftRepairAndDisenchant {
        recipe_network_id: u32,
        number_of_requested_crafts: u8,
    },
    CraftLoom {
        pattern_id: String,
    },
    CraftNonImplementedDeprecated,
    CraftResultsDeprecated {
        result_items: Vec<ItemData>,
        times_crafted: u8,
    },
}

impl ItemStackRequestAction {
    /// Short name used in logs and rejection reasons.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Take { .. } => "TAKE",
            Self::Place { .. } => "PLACE",
            Self::Swap { .. } => "SWAP",
            Self::Drop { .. } => "DROP",
            Self::Destroy { .. } => "DESTROY",
            Self::Consume { .. } => "CONSUME",
            Self::Create { .. } => "CREATE",
            Self::BeaconPayment { .. } => "BEACON_PAYMENT",
            Self::MineBlock { .. } => "MINE_BLOCK",
            Self::CraftRecipe { .. } => "CRAFT_RECIPE",
            Self::CraftRecipeAuto { .. } => "CRAFT_RECIPE_AUTO",
            Self::CraftCreative { .. } => "CRAFT_CREATIVE",
            Self::CraftRecipeOptional { .. } => "CRAFT_RECIPE_OPTIONAL",
            Self::CraftRepairAndDisenchant { .. } => "CRAFT_REPAIR_AND_DISENCHANT",
            Self::CraftLoom { .. } => "CRAFT_LOOM",
            Self::CraftNonImplementedDeprecated => "CRAFT_NON_IMPLEMENTED_DEPRECATED",
            Self::CraftResultsDeprecated { .. } => "CRAFT_RESULTS_DEPRECATED",
        }
    }

    /// Every slot the action names, source first.
    pub fn slots(&self) -> Vec<&ItemStackRequestSlotData> {
        match self {
            Self::Take {
                source,
                destination,
                ..
            }
            | Self::Place {
                source,
                destination,
                ..
            }
            | Self::Swap {
                source,
                destination,
            } => vec![source, destination],
            Self::Drop { source, .. }
            | Self::Destroy { source, .. }
            | Self::Consume { source, .. } => vec![source],
            _ => Vec::new(),
        }
    }
}

/// One atomic batch of actions; accepted or rejected as a whole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemStackRequest {
    pub request_id: i32,
    pub actions: Vec<ItemStackRequestAction>,
    /// Text the client typed, e.g. an anvil rename.
    pub filter_strings: Vec<String>,
}

impl ItemStackRequest {
    pub fn new(request_id: i32, actions: Vec<ItemStackRequestAction>) -> Self {
        Self {
            request_id,
            actions,
            filter_strings: Vec::new(),
        }
    }
}
