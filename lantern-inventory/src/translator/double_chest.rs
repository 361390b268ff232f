use lantern_core::math::{BlockPos, Vector3};
use lantern_protocol::bedrock::{
    client::{CBlockEntityData, CContainerClose, CContainerOpen, CUpdateBlock},
    BedrockContainerType, BlockEntityData,
};

use super::InventoryTranslator;
use crate::{
    container::{Container, HolderPosition},
    context::{BlockState, InventoryContext},
    holder::{self, Prepare},
    updater::Updater,
};

const PLACEHOLDER: &str = "minecraft:chest[facing=north,type=single,waterlogged=false]";

/// Four to six row chests, shown on the client's double chest screen.
///
/// Uses the double chest the player opened when there is one, otherwise two
/// placeholder chests joined into a pair above the player's head.
pub struct DoubleChestTranslator {
    size: usize,
}

impl DoubleChestTranslator {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    fn real_double_chest(ctx: &InventoryContext) -> Option<(BlockPos, BlockState)> {
        let interaction = ctx.world.last_interaction()?;
        if interaction.player_position != ctx.world.player_position() {
            return None;
        }
        let state = ctx.world.block_at(interaction.block);
        let is_chest = state.is("minecraft:chest") || state.is("minecraft:trapped_chest");
        let is_double = state.property("type").is_some_and(|kind| kind != "single");
        (is_chest && is_double).then_some((interaction.block, state))
    }
}

/// Position of the other half of a double chest, and whether this half leads the pair.
pub fn chest_pair(position: BlockPos, state: &BlockState) -> Option<(BlockPos, bool)> {
    let left = match state.property("type")? {
        "left" => true,
        "right" => false,
        _ => return None,
    };
    let toward = if left { 1 } else { -1 };
    let offset = match state.property("facing")? {
        "north" => Vector3::new(toward, 0, 0),
        "south" => Vector3::new(-toward, 0, 0),
        "east" => Vector3::new(0, 0, toward),
        "west" => Vector3::new(0, 0, -toward),
        _ => return None,
    };
    Some((position.offset(offset), !left))
}

impl InventoryTranslator for DoubleChestTranslator {
    fn size(&self) -> usize {
        self.size
    }

    fn updater(&self) -> Updater {
        Updater::PaddedChest(54)
    }

    fn prepare(&self, container: &mut Container, ctx: &mut InventoryContext) -> Prepare {
        if let Some((position, state)) = Self::real_double_chest(ctx) {
            let (pair, pair_lead) = chest_pair(position, &state).unzip();
            container.holder = HolderPosition {
                position,
                real_block: true,
                paired: None,
            };
            ctx.send_bedrock(CBlockEntityData::new(BlockEntityData::Chest {
                position,
                custom_name: Some(container.title.clone()),
                pair,
                pair_lead: pair_lead.unwrap_or(false),
            }));
            return Prepare::Ready;
        }
        if !ctx.config.use_placeholder_blocks {
            return Prepare::Refused;
        }
        let Some(position) = holder::find_placeholder_position(ctx) else {
            return Prepare::Refused;
        };
        let pair = position.offset(BlockPos::UNIT_X);
        let runtime_id = ctx.world.placeholder_runtime_id(PLACEHOLDER);
        for (half, other) in [(position, pair), (pair, position)] {
            ctx.send_bedrock(CUpdateBlock::new(half, runtime_id));
            ctx.send_bedrock(CBlockEntityData::new(BlockEntityData::Chest {
                position: half,
                custom_name: Some(container.title.clone()),
                pair: Some(other),
                pair_lead: false,
            }));
        }
        container.holder = HolderPosition {
            position,
            real_block: false,
            paired: Some(pair),
        };
        // the client pairs the placeholders a moment after they appear
        Prepare::Delayed(ctx.config.double_chest_open_delay())
    }

    fn open(&self, container: &mut Container, ctx: &mut InventoryContext) {
        ctx.send_bedrock(CContainerOpen::block(
            container.bedrock_id,
            BedrockContainerType::Container,
            container.holder.position,
        ));
    }

    fn close(&self, container: &mut Container, ctx: &mut InventoryContext) {
        if container.holder.real_block {
            ctx.send_bedrock(CContainerClose::new(container.bedrock_id, true));
            return;
        }
        holder::restore_block(ctx, container.holder.position);
        if let Some(pair) = container.holder.paired {
            holder::restore_block(ctx, pair);
        }
    }
}
