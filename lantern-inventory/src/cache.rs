//! Per-session inventory state and the entry points for every inventory
//! packet, from either side.

use std::sync::Arc;

use lantern_core::ItemStack;
use lantern_protocol::{
    bedrock::{
        self,
        client::{CContainerClose, CInventorySlot},
        container_id, ItemStackRequest,
    },
    java::{self, server::SCloseContainer},
};

use crate::{
    container::Container,
    context::{DeferredAction, InventoryContext},
    holder::Prepare,
    player::{PlayerInventory, PLAYER_WINDOW_SIZE},
    translator::{dispatch, merchant::MerchantTranslator, InventoryTranslator, TranslatorRegistry},
    window::Window,
    WindowType,
};

/// The player's inventory and the container window on top of it, if any.
pub struct InventoryCache {
    translators: Arc<TranslatorRegistry>,
    pub player: PlayerInventory,
    open: Option<Container>,
    /// We closed a window and the client has not confirmed yet.
    closing: bool,
    /// Windows closed since the last [`Self::take_closed`].
    closed: Vec<u8>,
}

impl InventoryCache {
    pub fn new(translators: Arc<TranslatorRegistry>) -> Self {
        Self {
            translators,
            player: PlayerInventory::new(),
            open: None,
            closing: false,
            closed: Vec::new(),
        }
    }

    pub fn open_container(&self) -> Option<&Container> {
        self.open.as_ref()
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Window ids closed since the last call; their deferred work must be dropped.
    pub fn take_closed(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.closed)
    }

    /// Handles an `OpenScreen` from the server.
    pub fn open_inventory(&mut self, ctx: &mut InventoryContext, java_id: u8, window_type: WindowType, title: &str) {
        if let Some(previous) = self.open.as_ref().map(|container| container.java_id) {
            self.close_inventory(ctx, previous, true);
        }
        let Some(translator) = self.translators.get(window_type) else {
            log::warn!("No translator for {window_type:?}, closing window {java_id}");
            ctx.send_java(SCloseContainer::new(java_id));
            return;
        };
        let mut container = translator.create_container(java_id, window_type, title);
        if self.closing {
            log::debug!("Window {java_id} waits for the client to close the previous one");
            container.pending = true;
            self.open = Some(container);
            return;
        }
        self.open = Some(container);
        self.display(ctx);
    }

    /// Runs prepare, open and update for the open container.
    fn display(&mut self, ctx: &mut InventoryContext) {
        let Some(container) = self.open.as_mut() else {
            return;
        };
        let Some(translator) = self.translators.get(container.window_type) else {
            return;
        };
        container.pending = false;
        match translator.prepare(container, ctx) {
            Prepare::Ready => self.show(ctx),
            Prepare::Delayed(delay) => ctx.defer(container.java_id, delay, DeferredAction::OpenWindow),
            Prepare::Refused => {
                let java_id = container.java_id;
                ctx.send_java(SCloseContainer::new(java_id));
                self.open = None;
                self.closed.push(java_id);
            }
        }
    }

    fn show(&mut self, ctx: &mut InventoryContext) {
        let Some(container) = self.open.as_mut() else {
            return;
        };
        let Some(translator) = self.translators.get(container.window_type) else {
            return;
        };
        translator.open(container, ctx);
        container.displayed = true;
        let mut window = Window::new(&mut self.player, Some(container));
        translator.update_inventory(&mut window, ctx);
    }

    /// Drops the cursor and the window `java_id`; with `confirm` the client is
    /// expected to acknowledge before another window may be shown.
    pub fn close_inventory(&mut self, ctx: &mut InventoryContext, java_id: u8, confirm: bool) {
        self.player.set_cursor(ItemStack::EMPTY, &mut ctx.net_ids);
        self.send_cursor(ctx);

        let matches = self
            .open
            .as_ref()
            .is_some_and(|container| container.java_id == java_id);
        if !matches {
            return;
        }
        let Some(mut container) = self.open.take() else {
            return;
        };
        if let Some(translator) = self.translators.get(container.window_type) {
            translator.close(&mut container, ctx);
        }
        // the client closes lecterns without waiting for us
        if confirm && !container.pending && container.window_type != WindowType::Lectern {
            self.closing = true;
        }
        self.closed.push(java_id);
    }

    /// Work a translator deferred has come due.
    pub fn run_deferred(&mut self, ctx: &mut InventoryContext, java_id: u8, action: DeferredAction) {
        let Some(container) = self.open.as_ref().filter(|container| container.java_id == java_id) else {
            log::debug!("Dropping deferred work for closed window {java_id}");
            return;
        };
        match action {
            DeferredAction::OpenWindow if !container.displayed => self.show(ctx),
            DeferredAction::OpenWindow => {}
            DeferredAction::ResendTrades(trades) => ctx.send_bedrock(trades),
        }
    }

    pub fn handle_java(&mut self, ctx: &mut InventoryContext, packet: java::client::Clientbound) {
        use java::client::Clientbound;
        match packet {
            Clientbound::OpenScreen(open) => {
                let (Ok(java_id), Some(window_type)) =
                    (u8::try_from(open.window_id), WindowType::from_menu_id(open.window_type))
                else {
                    log::warn!("Unknown window {} of menu type {}", open.window_id, open.window_type);
                    return;
                };
                self.open_inventory(ctx, java_id, window_type, &open.window_title);
            }
            Clientbound::SetContainerSlot(set) => self.set_slot(ctx, &set),
            Clientbound::SetContainerContent(content) => self.set_content(ctx, &content),
            Clientbound::SetContainerProperty(property) => {
                let Some(container) = self.open.as_mut().filter(|container| container.java_id == property.window_id)
                else {
                    return;
                };
                if let Some(translator) = self.translators.get(container.window_type) {
                    translator.update_property(container, ctx, property.property, property.value);
                }
            }
            Clientbound::CloseContainer(close) => self.close_inventory(ctx, close.window_id, true),
            Clientbound::MerchantOffers(offers) => {
                let container = self.open.as_mut().filter(|container| {
                    i32::from(container.java_id) == offers.window_id && container.window_type == WindowType::Merchant
                });
                match container {
                    Some(container) => MerchantTranslator.update_trades(container, ctx, &offers),
                    None => log::debug!("Offers for window {} which is not an open merchant", offers.window_id),
                }
            }
        }
    }

    pub fn handle_bedrock(&mut self, ctx: &mut InventoryContext, packet: bedrock::server::Serverbound) {
        use bedrock::server::Serverbound;
        match packet {
            Serverbound::ItemStackRequest(batch) => self.handle_requests(ctx, &batch.requests),
            Serverbound::ContainerClose(close) => self.client_closed(ctx, close.window_id),
        }
    }

    /// The client closed a window, or confirmed a close we asked for.
    fn client_closed(&mut self, ctx: &mut InventoryContext, mut bedrock_id: i8) {
        ctx.send_bedrock(CContainerClose::new(bedrock_id, false));
        self.closing = false;
        let Some(container) = self.open.as_ref() else {
            return;
        };
        // the trade screen closes as window -1
        if bedrock_id == -1 && container.window_type == WindowType::Merchant {
            bedrock_id = container.bedrock_id;
        }
        if container.bedrock_id == bedrock_id && !container.pending {
            let java_id = container.java_id;
            ctx.send_java(SCloseContainer::new(java_id));
            self.close_inventory(ctx, java_id, false);
        } else if container.pending {
            self.display(ctx);
        }
    }

    pub fn handle_requests(&mut self, ctx: &mut InventoryContext, requests: &[ItemStackRequest]) {
        let translators = self.translators.clone();
        match self.open.as_mut().filter(|container| container.displayed) {
            Some(container) => {
                let Some(translator) = translators.get(container.window_type) else {
                    return;
                };
                let mut window = Window::new(&mut self.player, Some(container));
                dispatch::translate_requests(translator, &mut window, ctx, requests);
            }
            None => {
                let mut window = Window::new(&mut self.player, None);
                dispatch::translate_requests(translators.player(), &mut window, ctx, requests);
            }
        }
    }

    fn set_slot(&mut self, ctx: &mut InventoryContext, set: &java::client::CSetContainerSlot) {
        if set.is_cursor() {
            self.player.set_cursor(ctx.java_stack(&set.slot_data), &mut ctx.net_ids);
            self.send_cursor(ctx);
            return;
        }
        let Ok(slot) = usize::try_from(set.slot) else {
            return;
        };
        let item = ctx.java_stack(&set.slot_data);
        let translators = self.translators.clone();
        // -2 writes the player inventory whatever window is open
        if set.window_id == 0 || set.window_id == -2 {
            self.player.state.state_id = set.state_id;
            if slot >= PLAYER_WINDOW_SIZE {
                return;
            }
            self.player.set_item(slot, item, &mut ctx.net_ids);
            let mut window = Window::new(&mut self.player, None);
            translators.player().update_slot(&mut window, ctx, slot);
            return;
        }
        let Some(container) = self
            .open
            .as_mut()
            .filter(|container| container.java_id as i8 == set.window_id)
        else {
            log::debug!("Slot {slot} for window {} which is not open", set.window_id);
            return;
        };
        container.state_ids.state_id = set.state_id;
        let Some(translator) = translators.get(container.window_type) else {
            return;
        };
        let displayed = container.displayed;
        let mut window = Window::new(&mut self.player, Some(container));
        if slot >= window.len() {
            return;
        }
        window.set_item(slot, item, &mut ctx.net_ids);
        if displayed {
            translator.update_slot(&mut window, ctx, slot);
        }
    }

    fn set_content(&mut self, ctx: &mut InventoryContext, content: &java::client::CSetContainerContent) {
        let translators = self.translators.clone();
        let carried = ctx.java_stack(&content.carried_item);
        self.player.set_cursor(carried, &mut ctx.net_ids);
        if content.window_id == 0 {
            self.player.state.state_id = content.state_id;
            let mut window = Window::new(&mut self.player, None);
            for (slot, data) in content.slot_data.iter().enumerate().take(PLAYER_WINDOW_SIZE) {
                window.set_item(slot, ctx.java_stack(data), &mut ctx.net_ids);
            }
            translators.player().update_inventory(&mut window, ctx);
            self.send_cursor(ctx);
            return;
        }
        let Some(container) = self
            .open
            .as_mut()
            .filter(|container| container.java_id == content.window_id)
        else {
            log::debug!("Contents for window {} which is not open", content.window_id);
            return;
        };
        container.state_ids.state_id = content.state_id;
        let Some(translator) = translators.get(container.window_type) else {
            return;
        };
        let displayed = container.displayed;
        let mut window = Window::new(&mut self.player, Some(container));
        let len = window.len();
        for (slot, data) in content.slot_data.iter().enumerate().take(len) {
            window.set_item(slot, ctx.java_stack(data), &mut ctx.net_ids);
        }
        if displayed {
            translator.update_inventory(&mut window, ctx);
        }
        self.send_cursor(ctx);
    }

    fn send_cursor(&self, ctx: &mut InventoryContext) {
        let cursor = ctx.item_data(self.player.cursor());
        ctx.send_bedrock(CInventorySlot::new(i32::from(container_id::UI), 0, cursor));
    }
}

#[cfg(test)]
mod test {
    use lantern_core::math::BlockPos;
    use lantern_protocol::{
        bedrock::{
            client::Clientbound as BedrockOut, server::SContainerClose, server::SItemStackRequest, ContainerSlotType,
        },
        java::{
            client::{CCloseContainer, COpenScreen, CSetContainerContent, CSetContainerSlot, Clientbound},
            server::Serverbound,
            Slot,
        },
    };

    use super::*;
    use crate::test_support::{cursor, place, request, slot, take, total_items, TestSession, DIRT, STONE};

    fn cache() -> InventoryCache {
        InventoryCache::new(Arc::new(TranslatorRegistry::new()))
    }

    fn java_slot(item_id: i32, item_count: u32) -> Slot {
        Slot {
            item_count,
            item_id,
            ..Slot::EMPTY
        }
    }

    fn open_chest(session: &mut TestSession, cache: &mut InventoryCache, java_id: u8) {
        let position = BlockPos::new(2, 64, 0);
        session.world.set_block(position, "minecraft:chest[facing=north,type=single]");
        session.world.interact(position);
        cache.handle_java(
            &mut session.ctx,
            Clientbound::OpenScreen(COpenScreen::new(i32::from(java_id), 2, "Chest")),
        );
    }

    #[test]
    fn opening_shows_the_window_and_its_contents() {
        let mut session = TestSession::new();
        let mut cache = cache();
        open_chest(&mut session, &mut cache, 3);
        let container = cache.open_container().unwrap();
        assert!(container.displayed);
        assert_eq!(container.window_type, WindowType::Generic9x3);
        let sent = session.bedrock.take();
        assert!(sent.iter().any(|packet| matches!(packet, BedrockOut::ContainerOpen(open) if open.window_id == 3)));
        assert!(sent.iter().any(|packet| matches!(packet, BedrockOut::InventoryContent(_))));
    }

    #[test]
    fn server_close_waits_for_the_client_before_the_next_window() {
        let mut session = TestSession::new();
        let mut cache = cache();
        open_chest(&mut session, &mut cache, 3);
        cache.handle_java(&mut session.ctx, Clientbound::CloseContainer(CCloseContainer::new(3)));
        assert!(cache.is_closing());
        assert_eq!(cache.take_closed(), vec![3]);

        open_chest(&mut session, &mut cache, 4);
        assert!(cache.open_container().unwrap().pending);
        session.bedrock.take();

        cache.handle_bedrock(&mut session.ctx, SContainerClose::new(3).into());
        assert!(!cache.is_closing());
        let container = cache.open_container().unwrap();
        assert!(!container.pending);
        assert!(container.displayed);
        assert!(session
            .bedrock
            .take()
            .iter()
            .any(|packet| matches!(packet, BedrockOut::ContainerOpen(open) if open.window_id == 4)));
        // nothing went to the server for the confirmation
        assert!(session.java.take().is_empty());
    }

    #[test]
    fn client_close_is_forwarded() {
        let mut session = TestSession::new();
        let mut cache = cache();
        open_chest(&mut session, &mut cache, 5);
        session.java.take();
        cache.handle_bedrock(&mut session.ctx, SContainerClose::new(5).into());
        assert_eq!(
            session.java.take(),
            vec![Serverbound::CloseContainer(SCloseContainer::new(5))]
        );
        assert!(cache.open_container().is_none());
        assert!(!cache.is_closing());
    }

    #[test]
    fn delayed_windows_open_when_their_task_fires() {
        let mut session = TestSession::new();
        let mut cache = cache();
        cache.open_inventory(&mut session.ctx, 7, WindowType::Generic9x6, "Large Chest");
        assert!(!cache.open_container().unwrap().displayed);
        let deferred = session.ctx.take_deferred();
        assert_eq!(deferred.len(), 1);
        assert_eq!(deferred[0].window_id, 7);

        cache.run_deferred(&mut session.ctx, 7, DeferredAction::OpenWindow);
        assert!(cache.open_container().unwrap().displayed);

        // stale work for a window that is gone does nothing
        cache.close_inventory(&mut session.ctx, 7, false);
        session.bedrock.take();
        cache.run_deferred(&mut session.ctx, 7, DeferredAction::OpenWindow);
        assert!(session.bedrock.take().is_empty());
    }

    #[test]
    fn refused_windows_are_closed_on_the_server() {
        let mut session = TestSession::new();
        let mut cache = cache();
        cache.open_inventory(&mut session.ctx, 2, WindowType::Beacon, "");
        assert!(cache.open_container().is_none());
        assert_eq!(
            session.java.take(),
            vec![Serverbound::CloseContainer(SCloseContainer::new(2))]
        );
        assert_eq!(cache.take_closed(), vec![2]);
    }

    #[test]
    fn server_slots_land_in_the_right_inventory() {
        let mut session = TestSession::new();
        let mut cache = cache();
        open_chest(&mut session, &mut cache, 3);
        let chest = Clientbound::SetContainerSlot(CSetContainerSlot::new(3, 9, 1, java_slot(STONE, 5)));
        cache.handle_java(&mut session.ctx, chest);
        let hotbar = Clientbound::SetContainerSlot(CSetContainerSlot::new(0, 2, 36, java_slot(DIRT, 2)));
        cache.handle_java(&mut session.ctx, hotbar);
        let held = Clientbound::SetContainerSlot(CSetContainerSlot::new(-1, 9, -1, java_slot(DIRT, 1)));
        cache.handle_java(&mut session.ctx, held);

        let container = cache.open_container().unwrap();
        assert_eq!(container.item(1).count, 5);
        assert_eq!(container.state_ids.state_id, 9);
        assert_eq!(cache.player.held_item().item_id, DIRT);
        assert_eq!(cache.player.cursor().count, 1);
    }

    #[test]
    fn contents_fill_window_and_cursor() {
        let mut session = TestSession::new();
        let mut cache = cache();
        open_chest(&mut session, &mut cache, 3);
        let mut slots = vec![Slot::EMPTY; 63];
        slots[0] = java_slot(STONE, 64);
        slots[54] = java_slot(DIRT, 3);
        let content = CSetContainerContent::new(3, 12, slots, java_slot(STONE, 2));
        cache.handle_java(&mut session.ctx, Clientbound::SetContainerContent(content));
        assert_eq!(cache.open_container().unwrap().item(0).count, 64);
        assert_eq!(cache.player.held_item().count, 3);
        assert_eq!(cache.player.cursor().count, 2);
    }

    #[test]
    fn requests_conserve_items() {
        let mut session = TestSession::new();
        let mut cache = cache();
        open_chest(&mut session, &mut cache, 3);
        let mut slots = vec![Slot::EMPTY; 63];
        slots[0] = java_slot(STONE, 40);
        slots[1] = java_slot(DIRT, 7);
        let content = CSetContainerContent::new(3, 1, slots, Slot::EMPTY);
        cache.handle_java(&mut session.ctx, Clientbound::SetContainerContent(content));
        let stone = cache.open_container().unwrap().item(0).net_id;
        let dirt = cache.open_container().unwrap().item(1).net_id;
        let before = {
            let container = cache.open.as_mut().unwrap();
            total_items(&Window::new(&mut cache.player, Some(container)))
        };

        let requests = vec![
            request(vec![take(40, slot(ContainerSlotType::LevelEntity, 0, stone), cursor(0))]),
            request(vec![place(
                15,
                // the cursor stack's id is the client's own prediction
                cursor(-1),
                slot(ContainerSlotType::HotbarAndInventory, 0, 0),
            )]),
            request(vec![place(
                25,
                cursor(-1),
                slot(ContainerSlotType::LevelEntity, 5, 0),
            )]),
            request(vec![take(7, slot(ContainerSlotType::LevelEntity, 1, dirt), cursor(0))]),
        ];
        cache.handle_bedrock(&mut session.ctx, SItemStackRequest::new(requests).into());

        let container = cache.open.as_mut().unwrap();
        let window = Window::new(&mut cache.player, Some(container));
        assert_eq!(total_items(&window), before);
        assert_eq!(window.item(5).count, 25);
        assert_eq!(window.item(window.hotbar_offset()).count, 15);
        assert_eq!(window.cursor().item_id, DIRT);
    }
}
