use lantern_protocol::bedrock::{client::CBlockEntityData, BedrockContainerType, BlockEntityData};

use super::InventoryTranslator;
use crate::{
    container::{Container, ContainerState, LecternState},
    context::InventoryContext,
    holder::BlockInventoryHolder,
    window::Window,
    window_property::{Lectern, WindowProperty},
};

// the book only shows on a real lectern
const HOLDER: BlockInventoryHolder = BlockInventoryHolder::new(
    "minecraft:lectern[facing=north,has_book=true,powered=false]",
    &["minecraft:lectern"],
    BedrockContainerType::Lectern,
)
.real_block_only();

/// The client reads the book straight from the lectern's block entity; there
/// are no slots to fill.
pub struct LecternTranslator;

fn send_book(container: &Container, ctx: &mut InventoryContext) {
    let ContainerState::Lectern(lectern) = &container.state else {
        return;
    };
    let book = container.item(0);
    ctx.send_bedrock(CBlockEntityData::new(BlockEntityData::Lectern {
        position: container.holder.position,
        has_book: !book.is_empty(),
        page: lectern.page,
        total_pages: ctx.items.book_page_count(book),
    }));
}

impl InventoryTranslator for LecternTranslator {
    fn size(&self) -> usize {
        1
    }

    fn initial_state(&self) -> ContainerState {
        ContainerState::Lectern(LecternState::default())
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&HOLDER)
    }

    /// Java counts single pages; the client shows two per spread.
    fn update_property(&self, container: &mut Container, ctx: &mut InventoryContext, key: i16, value: i16) {
        if Lectern::from_id(key) != Some(Lectern::PageNumber) {
            return;
        }
        if let ContainerState::Lectern(lectern) = &mut container.state {
            lectern.page = i32::from(value) / 2;
        }
        send_book(container, ctx);
    }

    fn update_inventory(&self, window: &mut Window, ctx: &mut InventoryContext) {
        if let Some(container) = window.container() {
            if !container.item(0).is_empty() {
                send_book(container, ctx);
            }
        }
    }

    fn update_slot(&self, window: &mut Window, ctx: &mut InventoryContext, slot: usize) {
        if slot != 0 {
            self.updater().update_slot(self, window, ctx, slot);
            return;
        }
        if let Some(container) = window.container() {
            send_book(container, ctx);
        }
    }
}

#[cfg(test)]
mod test {
    use lantern_core::math::BlockPos;
    use lantern_protocol::bedrock::client::Clientbound;

    use super::*;
    use crate::{
        holder::Prepare,
        player::PlayerInventory,
        test_support::{stack, TestSession, WRITTEN_BOOK},
        WindowType,
    };

    fn last_book(session: &TestSession) -> Option<BlockEntityData> {
        match session.bedrock.take().pop()? {
            Clientbound::BlockEntityData(packet) => Some(packet.data),
            _ => None,
        }
    }

    #[test]
    fn pages_are_shown_in_spreads() {
        let mut session = TestSession::new();
        let position = BlockPos::new(3, 64, 0);
        session.world.set_block(position, "minecraft:lectern[facing=south,has_book=true,powered=false]");
        session.world.interact(position);
        let mut lectern = LecternTranslator.create_container(9, WindowType::Lectern, "");
        assert_eq!(LecternTranslator.prepare(&mut lectern, &mut session.ctx), Prepare::Ready);
        lectern.set_item(0, stack(WRITTEN_BOOK, 1), &mut session.ctx.net_ids);
        session.bedrock.take();

        LecternTranslator.update_property(&mut lectern, &mut session.ctx, 0, 5);
        assert_eq!(
            last_book(&session),
            Some(BlockEntityData::Lectern {
                position,
                has_book: true,
                page: 2,
                total_pages: 10,
            })
        );
    }

    #[test]
    fn only_the_book_slot_touches_the_block() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut lectern = LecternTranslator.create_container(9, WindowType::Lectern, "");
        let mut window = Window::new(&mut player, Some(&mut lectern));
        LecternTranslator.update_inventory(&mut window, &mut session.ctx);
        assert!(session.bedrock.take().is_empty());

        window.set_item(0, stack(WRITTEN_BOOK, 1), &mut session.ctx.net_ids);
        LecternTranslator.update_slot(&mut window, &mut session.ctx, 0);
        assert!(matches!(
            last_book(&session),
            Some(BlockEntityData::Lectern { has_book: true, .. })
        ));
    }
}
