//! Moving items into and out of bundles.
//!
//! The client shows a bundle's contents as a dynamic container addressed by
//! the bundle id, last stored entry first. Java takes one entry per right
//! click and always inserts at the front.

use lantern_core::{
    item::{calculate_bundle_weight, capacity_for_item},
    ItemStack,
};
use lantern_protocol::bedrock::{
    client::CInventoryContent, ContainerSlotType, ItemStackRequest, ItemStackRequestAction,
    ItemStackRequestSlotData, ItemStackResponseContainer,
};

use super::{
    request::{accept, check_net_id, item_entry, java_slot},
    InventoryTranslator, TranslateResult,
};
use crate::{
    click::Click,
    context::InventoryContext,
    error::InventoryError,
    plan::{ClickOutcome, ClickPlan},
    window::Window,
};

fn is_bundle_slot(slot: &ItemStackRequestSlotData) -> bool {
    slot.container == ContainerSlotType::DynamicContainer
}

/// Bundle indices run in opposite directions on the two sides; converts either way.
pub fn convert_index(contents_len: usize, index: usize) -> usize {
    contents_len - index - 1
}

fn find_bundle(window: &Window, bundle_id: i32) -> Result<usize, InventoryError> {
    (0..window.len())
        .find(|&slot| {
            let item = window.item(slot);
            item.is_bundle() && item.bundle_id() == bundle_id
        })
        .ok_or(InventoryError::BundleNotFound(bundle_id))
}

fn holds_bundle(cursor: &ItemStack, bundle_id: i32) -> bool {
    cursor.is_bundle() && cursor.bundle_id() == bundle_id
}

/// Handles a request moving one stack into or out of a bundle.
///
/// Returns `None` when the request is not a bundle interaction, so the
/// regular algorithms take it.
pub fn handle_bundle<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &mut Window,
    ctx: &mut InventoryContext,
    request: &ItemStackRequest,
    creative: bool,
) -> Option<TranslateResult> {
    let mut transfer = None;
    for action in &request.actions {
        let (count, source, destination) = match action {
            ItemStackRequestAction::Take {
                count,
                source,
                destination,
            }
            | ItemStackRequestAction::Place {
                count,
                source,
                destination,
            } => (*count, source, destination),
            _ => return None,
        };
        match (is_bundle_slot(source), is_bundle_slot(destination)) {
            // rearranging inside the bundle has no Java counterpart
            (true, true) => continue,
            (false, false) => return None,
            _ => transfer = Some((count, source, destination)),
        }
    }
    let (count, source, destination) = transfer?;

    let planned = if is_bundle_slot(destination) {
        plan_insert(translator, window, ctx, count, source, destination, creative)
    } else {
        plan_extract(translator, window, ctx, source, destination, creative)
    };
    Some(planned.map(|(outcome, affected)| {
        outcome.commit(window, ctx);
        accept(translator, window, ctx, request, &affected)
    }))
}

fn finish<T: InventoryTranslator + ?Sized>(plan: ClickPlan<'_, T>, creative: bool) -> ClickOutcome {
    if creative {
        plan.execute_creative()
    } else {
        plan.execute(false)
    }
}

fn plan_insert<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &Window,
    ctx: &InventoryContext,
    count: u32,
    source: &ItemStackRequestSlotData,
    bundle_slot: &ItemStackRequestSlotData,
    creative: bool,
) -> Result<(ClickOutcome, Vec<usize>), InventoryError> {
    let bundle_id = bundle_slot.dynamic_id.unwrap_or(-1);
    let mut plan = ClickPlan::new(window, translator, ctx.config.emulate_post_1_16_logic);

    if holds_bundle(window.cursor(), bundle_id) {
        // picking an item up with the bundle held
        let source_slot = java_slot(translator, window, source)?
            .ok_or(InventoryError::InvalidTransfer("bundle put into itself"))?;
        let item = window.item(source_slot);
        if item.is_empty() {
            return Err(InventoryError::InvalidTransfer("nothing to put into the bundle"));
        }
        if source.stack_network_id != item.net_id {
            return Err(InventoryError::StaleNetId {
                container: source.container,
                slot: source.slot,
                claimed: source.stack_network_id,
                cached: item.net_id,
            });
        }
        let allowed = capacity_for_item(calculate_bundle_weight(window.cursor().bundle_contents()), item);
        if count != allowed {
            return Err(InventoryError::InvalidTransfer("bundle capacity differs from the client's"));
        }
        plan.add(Click::LeftBundleFromCursor, source_slot);
        return Ok((finish(plan, creative), vec![source_slot]));
    }

    let bundle = find_bundle(window, bundle_id)?;
    check_net_id(translator, window, source)?;
    let mut affected = vec![bundle];
    let source_slot = java_slot(translator, window, source)?;
    if let Some(slot) = source_slot {
        // Java inserts from the cursor
        plan.add(Click::Left, slot);
        affected.push(slot);
    }
    let allowed = capacity_for_item(calculate_bundle_weight(plan.item(bundle).bundle_contents()), plan.cursor());
    if count != allowed {
        return Err(InventoryError::InvalidTransfer("bundle capacity differs from the client's"));
    }
    plan.add(Click::LeftBundle, bundle);
    if let Some(slot) = source_slot {
        if !plan.cursor().is_empty() {
            plan.add(Click::Left, slot);
        }
    }
    Ok((finish(plan, creative), affected))
}

fn plan_extract<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &Window,
    ctx: &InventoryContext,
    bundle_slot: &ItemStackRequestSlotData,
    destination: &ItemStackRequestSlotData,
    creative: bool,
) -> Result<(ClickOutcome, Vec<usize>), InventoryError> {
    let bundle_id = bundle_slot.dynamic_id.unwrap_or(-1);
    let stale = |cached: &ItemStack| InventoryError::StaleNetId {
        container: bundle_slot.container,
        slot: bundle_slot.slot,
        claimed: bundle_slot.stack_network_id,
        cached: cached.net_id,
    };
    let mut plan = ClickPlan::new(window, translator, ctx.config.emulate_post_1_16_logic);

    if holds_bundle(window.cursor(), bundle_id) {
        // a held bundle always lets go of its first entry
        let Some(first) = window.cursor().bundle_contents().first() else {
            return Err(InventoryError::InvalidTransfer("bundle is empty"));
        };
        if bundle_slot.stack_network_id != first.net_id {
            return Err(stale(first));
        }
        let destination_slot = java_slot(translator, window, destination)?
            .ok_or(InventoryError::InvalidTransfer("bundle emptied onto itself"))?;
        if !window.item(destination_slot).is_empty() {
            return Err(InventoryError::InvalidTransfer("bundle entries only drop into empty slots"));
        }
        plan.add(Click::RightBundle, destination_slot);
        return Ok((finish(plan, creative), vec![destination_slot]));
    }

    let bundle = find_bundle(window, bundle_id)?;
    let contents = window.item(bundle).bundle_contents();
    let shown = usize::from(bundle_slot.slot);
    if shown >= contents.len() {
        return Err(InventoryError::InvalidSlot(bundle_slot.container, bundle_slot.slot));
    }
    let entry = convert_index(contents.len(), shown);
    if !window.cursor().is_empty() {
        return Err(InventoryError::InvalidTransfer("bundle extraction needs an empty cursor"));
    }
    let bundled = &contents[entry];
    if bundled.net_id != bundle_slot.stack_network_id {
        return Err(stale(bundled));
    }

    let mut affected = vec![bundle];
    plan.add_bundle_extract(bundle, entry);
    if let Some(destination_slot) = java_slot(translator, window, destination)? {
        let existing = window.item(destination_slot);
        if !existing.is_empty() && !bundled.is_same_item(existing) {
            return Err(InventoryError::InvalidTransfer("bundle entry does not fit the destination"));
        }
        plan.add(Click::Left, destination_slot);
        affected.push(destination_slot);
    }
    Ok((finish(plan, creative), affected))
}

/// The client's view of a bundle's contents, for stack responses.
pub fn response_container(ctx: &InventoryContext, bundle: &ItemStack) -> ItemStackResponseContainer {
    let items = bundle
        .bundle_contents()
        .iter()
        .rev()
        .enumerate()
        .map(|(index, content)| item_entry(ctx, u8::try_from(index).unwrap_or(u8::MAX), content))
        .collect();
    ItemStackResponseContainer {
        container: ContainerSlotType::DynamicContainer,
        items,
        dynamic_id: Some(bundle.bundle_id()),
    }
}

/// Pushes the contents of `item` if it is a bundle, nested bundles included.
pub fn send_contents(ctx: &mut InventoryContext, item: &ItemStack) {
    if !item.is_bundle() {
        return;
    }
    let contents = item
        .bundle_contents()
        .iter()
        .rev()
        .map(|content| ctx.item_data(content))
        .collect();
    ctx.send_bedrock(CInventoryContent::dynamic(item.bundle_id(), contents));
    for content in item.bundle_contents() {
        send_contents(ctx, content);
    }
}

#[cfg(test)]
mod test {
    use lantern_protocol::{
        bedrock::{client::Clientbound, ItemStackRequestSlotData},
        java::server::Serverbound,
    };

    use super::*;
    use crate::{
        player::PlayerInventory,
        test_support::{cursor, place, request, slot, stack, take, TestSession, BUNDLE, ENDER_PEARL, STONE},
        translator::player::PlayerTranslator,
    };

    fn bundle_of(contents: Vec<ItemStack>) -> ItemStack {
        ItemStack::new(BUNDLE, 1, 1).with_bundle(contents)
    }

    #[test]
    fn insert_must_match_capacity_exactly() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        // three quarters full
        player.set_item(9, bundle_of(vec![stack(STONE, 48)]), &mut session.ctx.net_ids);
        player.set_cursor(ItemStack::new(ENDER_PEARL, 20, 16), &mut session.ctx.net_ids);
        let bundle_id = player.item(9).bundle_id();
        let mut window = Window::new(&mut player, None);

        let too_many = request(vec![place(5, cursor(-1), ItemStackRequestSlotData::dynamic(bundle_id, 0, 0))]);
        let rejected = handle_bundle(&PlayerTranslator, &mut window, &mut session.ctx, &too_many, false);
        assert!(matches!(rejected, Some(Err(InventoryError::InvalidTransfer(_)))));
        assert!(session.java.take().is_empty());

        let exact = request(vec![place(4, cursor(-1), ItemStackRequestSlotData::dynamic(bundle_id, 0, 0))]);
        let response = handle_bundle(&PlayerTranslator, &mut window, &mut session.ctx, &exact, false)
            .unwrap()
            .unwrap();
        assert!(response.is_ok());
        assert_eq!(window.cursor().count, 16);
        let contents = window.item(9).bundle_contents();
        assert_eq!((contents[0].item_id, contents[0].count), (ENDER_PEARL, 4));
        assert_eq!(contents[1].item_id, STONE);

        // shown to the client last stored first
        let shown = response.container(ContainerSlotType::DynamicContainer).unwrap();
        assert_eq!(shown.dynamic_id, Some(bundle_id));
        assert_eq!(shown.items[0].count, 48);
        assert_eq!(shown.items[1].count, 4);
    }

    #[test]
    fn extract_reverses_the_index() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        player.set_item(
            9,
            bundle_of(vec![ItemStack::new(ENDER_PEARL, 2, 16), stack(STONE, 5)]),
            &mut session.ctx.net_ids,
        );
        let bundle_id = player.item(9).bundle_id();
        let stone_net_id = player.item(9).bundle_contents()[1].net_id;
        let mut window = Window::new(&mut player, None);

        let extract = request(vec![take(
            5,
            ItemStackRequestSlotData::dynamic(bundle_id, 0, stone_net_id),
            cursor(0),
        )]);
        let response = handle_bundle(&PlayerTranslator, &mut window, &mut session.ctx, &extract, false)
            .unwrap()
            .unwrap();
        assert!(response.is_ok());
        let packets = session.java.take();
        assert!(matches!(&packets[0], Serverbound::SelectBundleItem(select) if select.slot_id == 9 && select.selected_item_index == 1));
        assert!(matches!(&packets[1], Serverbound::ClickContainer(click) if click.slot == 9 && click.button == 1));
        assert_eq!((window.cursor().item_id, window.cursor().count), (STONE, 5));
        assert_eq!(window.item(9).bundle_contents().len(), 1);
    }

    #[test]
    fn extract_needs_an_empty_cursor() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        player.set_item(9, bundle_of(vec![stack(STONE, 5)]), &mut session.ctx.net_ids);
        player.set_cursor(stack(STONE, 1), &mut session.ctx.net_ids);
        let bundle_id = player.item(9).bundle_id();
        let mut window = Window::new(&mut player, None);
        let extract = request(vec![take(5, ItemStackRequestSlotData::dynamic(bundle_id, 0, -1), slot(ContainerSlotType::Inventory, 10, 0))]);
        assert!(matches!(
            handle_bundle(&PlayerTranslator, &mut window, &mut session.ctx, &extract, false),
            Some(Err(InventoryError::InvalidTransfer(_)))
        ));
    }

    #[test]
    fn missing_bundle_is_reported() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut window = Window::new(&mut player, None);
        let extract = request(vec![take(1, ItemStackRequestSlotData::dynamic(42, 0, -1), cursor(0))]);
        assert_eq!(
            handle_bundle(&PlayerTranslator, &mut window, &mut session.ctx, &extract, false),
            Some(Err(InventoryError::BundleNotFound(42)))
        );
    }

    #[test]
    fn plain_transfers_are_left_alone() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut window = Window::new(&mut player, None);
        let plain = request(vec![take(1, slot(ContainerSlotType::Inventory, 9, 0), cursor(0))]);
        assert_eq!(handle_bundle(&PlayerTranslator, &mut window, &mut session.ctx, &plain, false), None);
    }

    #[test]
    fn nested_bundles_are_sent_reversed() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let inner = bundle_of(vec![stack(STONE, 1)]);
        player.set_item(9, bundle_of(vec![stack(STONE, 3), inner]), &mut session.ctx.net_ids);
        send_contents(&mut session.ctx, player.item(9));
        let sent = session.bedrock.take();
        assert_eq!(sent.len(), 2);
        let Clientbound::InventoryContent(outer) = &sent[0] else {
            panic!("expected bundle content");
        };
        assert_eq!(outer.contents[0].definition_id, BUNDLE);
        assert_eq!(outer.contents[1].count, 3);
        assert_eq!(convert_index(2, 0), 1);
    }
}
