use itertools::Itertools;
use lantern_protocol::bedrock::{
    client::{CInventorySlot, CItemStackResponse},
    container_id, ItemStackRequest, ItemStackRequestAction, ItemStackResponse,
};

use super::{request::java_slot, InventoryTranslator, TranslateResult};
use crate::{context::InventoryContext, error::InventoryError, window::Window};

/// Answers a batch of item stack requests against the open window.
///
/// Any rejection resyncs the cursor and the whole window afterwards, since
/// the client already applied its prediction.
pub fn translate_requests<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &mut Window,
    ctx: &mut InventoryContext,
    requests: &[ItemStackRequest],
) {
    let mut responses = Vec::with_capacity(requests.len());
    for request in requests {
        let response = match translate_one(translator, window, ctx, request) {
            Ok(response) => response,
            Err(error) => reject(translator, window, ctx, request, &error),
        };
        responses.push(response);
    }

    let refresh = responses.iter().any(|response| !response.is_ok());
    ctx.send_bedrock(CItemStackResponse::new(responses));
    if refresh {
        let cursor = ctx.item_data(window.cursor());
        ctx.send_bedrock(CInventorySlot::new(i32::from(container_id::UI), 0, cursor));
        translator.update_inventory(window, ctx);
    }
    window.state_ids_mut().reset_next();
}

fn translate_one<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &mut Window,
    ctx: &mut InventoryContext,
    request: &ItemStackRequest,
) -> TranslateResult {
    let Some(first) = request.actions.first() else {
        return Err(InventoryError::EmptyRequest);
    };
    if translator.should_handle_request_first(first, window) {
        return translator.translate_special_request(window, ctx, request);
    }
    match first {
        ItemStackRequestAction::CraftRecipe { .. } => translator.translate_crafting_request(window, ctx, request),
        ItemStackRequestAction::CraftRecipeAuto { .. } => {
            translator.translate_auto_crafting_request(window, ctx, request)
        }
        // also how items are pulled out of the creative menu
        ItemStackRequestAction::CraftCreative { .. } => translator.translate_creative_request(window, ctx, request),
        _ => translator.translate_request(window, ctx, request),
    }
}

/// Logs `error` at its severity and answers with an error response.
pub fn reject<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &Window,
    ctx: &InventoryContext,
    request: &ItemStackRequest,
    error: &InventoryError,
) -> ItemStackResponse {
    log::log!(
        error.severity(),
        "Rejected item stack request {} in window {}: {error}",
        request.request_id,
        window.java_id()
    );
    if ctx.debug {
        let cached = request
            .actions
            .iter()
            .flat_map(ItemStackRequestAction::slots)
            .map(|slot| match java_slot(translator, window, slot) {
                Ok(Some(java)) => format!("{:?} {} -> {:?}", slot.container, slot.slot, window.item(java)),
                Ok(None) => format!("cursor -> {:?}", window.cursor()),
                Err(_) => format!("{:?} {} -> unmapped", slot.container, slot.slot),
            })
            .join("\n  ");
        log::error!("Rejected request: {request:?}\nCached slots:\n  {cached}");
    }
    ItemStackResponse::error(request)
}

#[cfg(test)]
mod test {
    use lantern_protocol::bedrock::{client::Clientbound, ContainerSlotType, ItemStackResponseStatus};

    use super::*;
    use crate::{
        player::PlayerInventory,
        test_support::{cursor, request, slot, stack, take, total_items, TestSession, STONE},
        translator::player::PlayerTranslator,
    };

    #[test]
    fn rejected_request_resyncs_without_touching_state() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        player.set_item(9, stack(STONE, 10), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, None);
        let before: Vec<_> = (0..window.len()).map(|slot| window.item(slot).clone()).collect();

        let stale = request(vec![take(10, slot(ContainerSlotType::Inventory, 9, 777), cursor(0))]);
        translate_requests(&PlayerTranslator, &mut window, &mut session.ctx, &[stale]);

        let after: Vec<_> = (0..window.len()).map(|slot| window.item(slot).clone()).collect();
        assert_eq!(before, after);
        assert!(window.cursor().is_empty());
        assert!(session.java.take().is_empty());

        let sent = session.bedrock.take();
        let Clientbound::ItemStackResponse(responses) = &sent[0] else {
            panic!("expected the responses first");
        };
        assert_eq!(responses.entries[0].result, ItemStackResponseStatus::Error);
        assert!(matches!(&sent[1], Clientbound::InventorySlot(slot) if slot.container_id == i32::from(container_id::UI)));
        assert!(sent.len() > 2, "window content resent");
    }

    #[test]
    fn batch_mixes_accepted_and_rejected_requests() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        player.set_item(9, stack(STONE, 10), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, None);
        let total = total_items(&window);

        let good = request(vec![take(10, slot(ContainerSlotType::Inventory, 9, -1), cursor(0))]);
        let empty = ItemStackRequest::new(2, Vec::new());
        translate_requests(&PlayerTranslator, &mut window, &mut session.ctx, &[good, empty]);

        assert_eq!(total_items(&window), total);
        assert_eq!(window.cursor().count, 10);
        assert_eq!(session.java.take().len(), 1);
        let sent = session.bedrock.take();
        let Clientbound::ItemStackResponse(responses) = &sent[0] else {
            panic!("expected the responses first");
        };
        let results = responses.entries.iter().map(|response| response.result).collect_vec();
        assert_eq!(results, vec![ItemStackResponseStatus::Ok, ItemStackResponseStatus::Error]);
    }

    #[test]
    fn state_id_prediction_resets_after_batch() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut window = Window::new(&mut player, None);
        window.state_ids_mut().increment(3);
        translate_requests(&PlayerTranslator, &mut window, &mut session.ctx, &[]);
        assert_eq!(window.state_ids().next_state_id, -1);
        assert!(session.java.take().is_empty());
    }
}
