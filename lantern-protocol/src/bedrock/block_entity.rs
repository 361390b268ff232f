use lantern_core::math::BlockPos;
use serde::{Deserialize, Serialize};

/// The block entity tags the inventory layer writes to client-side blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "id")]
pub enum BlockEntityData {
    /// Chest-like placeholder; `pair` links the two halves of a double chest.
    Chest {
        position: BlockPos,
        custom_name: Option<String>,
        pair: Option<BlockPos>,
        pair_lead: bool,
    },
    /// Custom name on a single placeholder block.
    Named {
        position: BlockPos,
        custom_name: String,
    },
    Beacon {
        position: BlockPos,
        primary: i32,
        secondary: i32,
    },
    Crafter {
        position: BlockPos,
        crafting_ticks_remaining: i32,
        disabled_slots: u16,
    },
    Lectern {
        position: BlockPos,
        has_book: bool,
        page: i32,
        total_pages: i32,
    },
}

impl BlockEntityData {
    pub fn position(&self) -> BlockPos {
        match self {
            Self::Chest { position, .. }
            | Self::Named { position, .. }
            | Self::Beacon { position, .. }
            | Self::Crafter { position, .. }
            | Self::Lectern { position, .. } => *position,
        }
    }
}
