use lantern_core::math::BlockPos;
use lantern_protocol::bedrock::{
    client::{CBlockEntityData, CContainerClose, CContainerOpen, CUpdateBlock},
    BedrockContainerType, BlockEntityData,
};

use crate::{
    container::{Container, HolderPosition},
    context::InventoryContext,
};

/// What the session should do once a window is prepared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prepare {
    Ready,
    /// Open after the delay; placeholder blocks need time to show up client-side.
    Delayed(std::time::Duration),
    /// The window cannot be shown; close it on the server.
    Refused,
}

/// Backs a window with a block the client can open: the real one the player
/// used, or a placeholder placed next to them.
#[derive(Clone, Debug)]
pub struct BlockInventoryHolder {
    /// Block state placed as placeholder.
    placeholder: &'static str,
    /// Identifiers of real blocks that can stand in for the window.
    valid_blocks: &'static [&'static str],
    container_type: BedrockContainerType,
    /// Only real blocks work; refuse to open otherwise.
    real_block_only: bool,
}

impl BlockInventoryHolder {
    pub const fn new(
        placeholder: &'static str,
        valid_blocks: &'static [&'static str],
        container_type: BedrockContainerType,
    ) -> Self {
        Self {
            placeholder,
            valid_blocks,
            container_type,
            real_block_only: false,
        }
    }

    pub const fn real_block_only(mut self) -> Self {
        self.real_block_only = true;
        self
    }

    pub fn container_type(&self) -> BedrockContainerType {
        self.container_type
    }

    pub fn prepare(&self, container: &mut Container, ctx: &mut InventoryContext) -> Prepare {
        if let Some(position) = self.interacted_block(ctx) {
            container.holder = HolderPosition {
                position,
                real_block: true,
                paired: None,
            };
            ctx.send_bedrock(CBlockEntityData::new(BlockEntityData::Named {
                position,
                custom_name: container.title.clone(),
            }));
            return Prepare::Ready;
        }
        if self.real_block_only || !ctx.config.use_placeholder_blocks {
            log::debug!(
                "No block to back {:?} window {}",
                container.window_type,
                container.java_id
            );
            return Prepare::Refused;
        }
        let Some(position) = find_placeholder_position(ctx) else {
            return Prepare::Refused;
        };
        let runtime_id = ctx.world.placeholder_runtime_id(self.placeholder);
        ctx.send_bedrock(CUpdateBlock::new(position, runtime_id));
        ctx.send_bedrock(CBlockEntityData::new(BlockEntityData::Named {
            position,
            custom_name: container.title.clone(),
        }));
        container.holder = HolderPosition {
            position,
            real_block: false,
            paired: None,
        };
        Prepare::Ready
    }

    pub fn open(&self, container: &Container, ctx: &mut InventoryContext) {
        ctx.send_bedrock(CContainerOpen::block(
            container.bedrock_id,
            self.container_type,
            container.holder.position,
        ));
    }

    pub fn close(&self, container: &Container, ctx: &mut InventoryContext) {
        if container.holder.real_block {
            // the client closes lecterns by itself
            if self.container_type != BedrockContainerType::Lectern {
                ctx.send_bedrock(CContainerClose::new(container.bedrock_id, true));
            }
            return;
        }
        restore_block(ctx, container.holder.position);
    }

    /// The block the player is using, if it can back this window.
    fn interacted_block(&self, ctx: &InventoryContext) -> Option<BlockPos> {
        let interaction = ctx.world.last_interaction()?;
        // moving since the interaction means the window was not opened by it
        if !self.real_block_only && interaction.player_position != ctx.world.player_position() {
            return None;
        }
        let state = ctx.world.block_at(interaction.block);
        self.valid_blocks
            .iter()
            .any(|block| state.is(block))
            .then_some(interaction.block)
    }
}

/// A spot for a placeholder block: above the player's head, or below their feet
/// at the top of the world.
pub fn find_placeholder_position(ctx: &InventoryContext) -> Option<BlockPos> {
    let range = ctx.world.height_range();
    let feet = BlockPos::from(ctx.world.player_position());
    let position = feet.up();
    if position.0.y < range.start {
        return None;
    }
    if position.0.y >= range.end {
        let below = feet.offset(lantern_core::math::Vector3::new(0, -4, 0));
        return (below.0.y < range.end && below.0.y >= range.start).then_some(below);
    }
    Some(position)
}

/// Puts back what the world has at `position`.
pub fn restore_block(ctx: &mut InventoryContext, position: BlockPos) {
    let runtime_id = ctx.world.block_at(position).runtime_id;
    ctx.send_bedrock(CUpdateBlock::new(position, runtime_id));
}

#[cfg(test)]
mod test {
    use lantern_core::math::Vector3;
    use lantern_protocol::bedrock::client::Clientbound;

    use super::*;
    use crate::{container::ContainerState, test_support::TestSession, WindowType};

    const FURNACE: BlockInventoryHolder = BlockInventoryHolder::new(
        "minecraft:furnace[facing=north,lit=false]",
        &["minecraft:furnace"],
        BedrockContainerType::Furnace,
    );

    fn furnace() -> Container {
        Container::new(3, WindowType::Furnace, "Furnace", 3, 0, ContainerState::Plain)
    }

    #[test]
    fn placeholder_goes_above_player_and_is_restored() {
        let mut session = TestSession::new();
        session.world.set_player_position(Vector3::new(10.5, 64.0, -3.5));
        let mut container = furnace();
        assert_eq!(FURNACE.prepare(&mut container, &mut session.ctx), Prepare::Ready);
        let position = BlockPos::new(10, 65, -4);
        assert_eq!(container.holder.position, position);
        assert!(!container.holder.real_block);

        let sent = session.bedrock.take();
        assert!(matches!(&sent[0], Clientbound::UpdateBlock(update) if update.position == position));
        assert!(matches!(&sent[1], Clientbound::BlockEntityData(_)));

        FURNACE.close(&container, &mut session.ctx);
        let sent = session.bedrock.take();
        assert!(matches!(
            &sent[..],
            [Clientbound::UpdateBlock(update)] if update.runtime_id == session.world.air_runtime_id()
        ));
    }

    #[test]
    fn interacted_block_is_used_when_player_stood_still() {
        let mut session = TestSession::new();
        let block = BlockPos::new(1, 64, 1);
        session.world.set_block(block, "minecraft:furnace");
        session.world.interact(block);
        let mut container = furnace();
        FURNACE.prepare(&mut container, &mut session.ctx);
        assert!(container.holder.real_block);
        assert_eq!(container.holder.position, block);
        session.bedrock.take();

        FURNACE.close(&container, &mut session.ctx);
        assert!(matches!(
            &session.bedrock.take()[..],
            [Clientbound::ContainerClose(close)] if close.server_initiated
        ));
    }

    #[test]
    fn placeholders_can_be_disabled() {
        let mut session = TestSession::new();
        session.ctx.config.use_placeholder_blocks = false;
        let mut container = furnace();
        assert_eq!(FURNACE.prepare(&mut container, &mut session.ctx), Prepare::Refused);
        assert!(session.bedrock.take().is_empty());
    }

    #[test]
    fn no_room_at_the_top_of_the_world() {
        let mut session = TestSession::new();
        session.world.set_player_position(Vector3::new(0.0, 319.0, 0.0));
        assert_eq!(
            find_placeholder_position(&session.ctx),
            Some(BlockPos::new(0, 315, 0))
        );
        session.world.set_player_position(Vector3::new(0.0, -80.0, 0.0));
        assert_eq!(find_placeholder_position(&session.ctx), None);
    }
}
