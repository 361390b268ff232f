//! The request algorithms shared by every translator.
//!
//! Each one plans clicks against a simulated copy of the window and only
//! commits once the whole request was understood, so a rejected request
//! leaves the window untouched.

use std::collections::{BTreeMap, HashMap};

use lantern_core::ItemStack;
use lantern_protocol::bedrock::{
    ContainerSlotType, ItemStackRequest, ItemStackRequestAction, ItemStackRequestSlotData,
    ItemStackResponse, ItemStackResponseContainer, ItemStackResponseSlot,
};

use super::{bundle, InventoryTranslator, TranslateResult};
use crate::{
    click::Click,
    context::{InventoryContext, RecipeShape},
    error::InventoryError,
    plan::ClickPlan,
    slot::{BedrockContainerSlot, SlotType},
    window::Window,
    WindowType,
};

/// Upper bound of fill-and-shift-click passes of one auto craft.
pub const MAX_AUTO_CRAFT_PASSES: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CraftState {
    Start,
    RecipeId,
    Deprecated,
    Ingredients,
    Transfer,
    Done,
}

impl CraftState {
    fn advance(
        &mut self,
        allowed: &[CraftState],
        next: CraftState,
        action: &ItemStackRequestAction,
    ) -> Result<(), InventoryError> {
        if !allowed.contains(self) {
            return Err(InventoryError::InvalidCraftSequence(action.name()));
        }
        *self = next;
        Ok(())
    }
}

/// Java slot a request addresses, `None` for the cursor.
pub fn java_slot<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &Window,
    slot: &ItemStackRequestSlotData,
) -> Result<Option<usize>, InventoryError> {
    if slot.is_cursor() {
        return Ok(None);
    }
    let java = translator.bedrock_slot_to_java(slot)?;
    if java >= window.len() {
        return Err(InventoryError::InvalidSlot(slot.container, slot.slot));
    }
    Ok(Some(java))
}

/// Rejects requests made against a stack the client should no longer see there.
///
/// Net ids below zero are the client's own predictions and `1` is the refresh
/// marker; neither is checked.
pub fn check_net_id<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &Window,
    slot: &ItemStackRequestSlotData,
) -> Result<(), InventoryError> {
    let claimed = slot.stack_network_id;
    if claimed < 0 || claimed == 1 {
        return Ok(());
    }
    let cached = match java_slot(translator, window, slot)? {
        Some(java) => window.item(java),
        None => window.cursor(),
    };
    if cached.net_id != claimed {
        return Err(InventoryError::StaleNetId {
            container: slot.container,
            slot: slot.slot,
            claimed,
            cached: cached.net_id,
        });
    }
    Ok(())
}

/// TAKE, PLACE, SWAP, DROP and cartography CONSUME, as plain clicks. Bundle
/// interactions are handed to [`bundle::handle_bundle`] first.
///
/// `seeds` are predicted slot contents, e.g. the result of a recipe the
/// request selected a moment ago.
pub fn translate_request<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &mut Window,
    ctx: &mut InventoryContext,
    request: &ItemStackRequest,
    seeds: Vec<(usize, ItemStack)>,
) -> TranslateResult {
    if let Some(result) = bundle::handle_bundle(translator, window, ctx, request, false) {
        return result;
    }
    let mut consumed: Vec<(usize, u32)> = Vec::new();
    let mut extra_affected = Vec::new();
    let mut outcome = {
        let mut plan = ClickPlan::new(&*window, translator, ctx.config.emulate_post_1_16_logic);
        for (slot, item) in seeds {
            plan.seed(slot, item);
        }
        let mut output = PendingOutput::default();

        for action in &request.actions {
            match action {
                ItemStackRequestAction::Take {
                    count,
                    source,
                    destination,
                }
                | ItemStackRequestAction::Place {
                    count,
                    source,
                    destination,
                } => plan_transfer(translator, &mut plan, ctx, *count, source, destination, &mut output)?,
                ItemStackRequestAction::Swap {
                    source,
                    destination,
                } => plan_swap(translator, &mut plan, ctx, source, destination)?,
                ItemStackRequestAction::Drop { count, source, .. } => {
                    check_net_id(translator, plan.window(), source)?;
                    match java_slot(translator, plan.window(), source)? {
                        None if *count == plan.cursor().count => plan.add_outside(Click::LeftOutside),
                        None => {
                            for _ in 0..*count {
                                plan.add_outside(Click::RightOutside);
                            }
                        }
                        Some(slot) => {
                            let amount = plan.item(slot).count;
                            // a single item drops the same either way
                            if *count == amount && amount > 1 {
                                plan.add(Click::DropAll, slot);
                            } else {
                                for _ in 0..*count {
                                    plan.add(Click::DropOne, slot);
                                }
                            }
                        }
                    }
                }
                ItemStackRequestAction::Consume { count, source } => {
                    let cartography = plan
                        .window()
                        .container()
                        .is_some_and(|container| container.window_type == WindowType::CartographyTable);
                    if !cartography {
                        continue;
                    }
                    let slot = translator.bedrock_slot_to_java(source)?;
                    let current = plan.window();
                    // Java cannot rename a map alone, so both inputs have to be there
                    if (slot == 0 && current.item(1).is_empty()) || (slot == 1 && current.item(0).is_empty()) {
                        return Err(InventoryError::IllegalPlacement(source.container));
                    }
                    if slot == 1 {
                        consumed.push((1, *count));
                        consumed.push((0, *count));
                    }
                    extra_affected.push(slot);
                }
                ItemStackRequestAction::CraftRecipe { .. }
                | ItemStackRequestAction::CraftRecipeAuto { .. }
                | ItemStackRequestAction::CraftNonImplementedDeprecated
                | ItemStackRequestAction::CraftResultsDeprecated { .. }
                | ItemStackRequestAction::CraftRecipeOptional { .. }
                | ItemStackRequestAction::CraftLoom { .. }
                | ItemStackRequestAction::CraftRepairAndDisenchant { .. } => {}
                other => return Err(InventoryError::UnsupportedAction(other.name())),
            }
        }
        if output.pending != 0 {
            return Err(InventoryError::InvalidTransfer("output was not fully distributed"));
        }
        plan.execute(false)
    };

    for (slot, count) in consumed {
        let mut item = outcome
            .item(slot)
            .cloned()
            .unwrap_or_else(|| window.item(slot).clone());
        item.sub(count);
        outcome.set_item(slot, item);
    }
    for slot in extra_affected {
        outcome.add_affected(slot);
    }
    let affected = outcome.commit(window, ctx);
    Ok(accept(translator, window, ctx, request, &affected))
}

/// Output taken partially: the whole result sits on the cursor while it is handed out.
#[derive(Default)]
struct PendingOutput {
    pending: u32,
    /// Where the cursor was parked before picking the output up.
    saved_temp: Option<usize>,
}

fn plan_transfer<T: InventoryTranslator + ?Sized>(
    translator: &T,
    plan: &mut ClickPlan<'_, T>,
    ctx: &InventoryContext,
    count: u32,
    source: &ItemStackRequestSlotData,
    destination: &ItemStackRequestSlotData,
    output: &mut PendingOutput,
) -> Result<(), InventoryError> {
    check_net_id(translator, plan.window(), source)?;
    check_net_id(translator, plan.window(), destination)?;
    let source_slot = java_slot(translator, plan.window(), source)?;
    let destination_slot = java_slot(translator, plan.window(), destination)?;

    let moved = source_slot.map_or(plan.cursor(), |slot| plan.item(slot));
    if translator.should_reject_item_place(
        ctx,
        moved,
        BedrockContainerSlot::from(source),
        BedrockContainerSlot::from(destination),
    ) {
        return Err(InventoryError::IllegalPlacement(destination.container));
    }

    if output.pending == 0 {
        if let Some(slot) = source_slot {
            if translator.slot_type(slot) == SlotType::Output && count < plan.item(slot).count {
                if destination_slot.is_none() {
                    return Err(InventoryError::InvalidTransfer("partial output onto the cursor"));
                }
                if !plan.cursor().is_empty() {
                    let temp = plan
                        .find_temp_slot(plan.cursor(), true, &[])
                        .ok_or(InventoryError::NoTempSlot)?;
                    plan.add(Click::Left, temp);
                    output.saved_temp = Some(temp);
                }
                output.pending = plan.item(slot).count;
                plan.add(Click::Left, slot);
            }
        }
    }

    if output.pending > 0 {
        let from_output = source_slot.is_some_and(|slot| translator.slot_type(slot) == SlotType::Output);
        let Some(destination_slot) = destination_slot.filter(|slot| Some(*slot) != output.saved_temp) else {
            return Err(InventoryError::InvalidTransfer("output handed to the cursor"));
        };
        if !from_output || count > output.pending {
            return Err(InventoryError::InvalidTransfer("output handed out in pieces"));
        }
        if !plan.is_empty(destination_slot) && !plan.can_stack(destination_slot, plan.cursor()) {
            return Err(InventoryError::InvalidTransfer("output does not fit the destination"));
        }
        if output.pending == count {
            plan.add(Click::Left, destination_slot);
        } else {
            for _ in 0..count {
                plan.add(Click::Right, destination_slot);
            }
        }
        output.pending -= count;
        if output.pending != plan.cursor().count {
            return Err(InventoryError::InvalidTransfer("output count drifted"));
        }
        if output.pending == 0 {
            if let Some(temp) = output.saved_temp.take() {
                plan.add(Click::Left, temp);
            }
        }
        return Ok(());
    }

    match (source_slot, destination_slot) {
        (None, None) => return Err(InventoryError::InvalidTransfer("cursor onto itself")),
        (None, Some(destination)) => {
            if count == plan.cursor().count {
                plan.add(Click::Left, destination);
            } else {
                for _ in 0..count {
                    plan.add(Click::Right, destination);
                }
            }
        }
        (Some(source), None) => {
            let source_amount = plan.item(source).count;
            if plan.cursor().is_empty() {
                if count == source_amount {
                    plan.add(Click::Left, source);
                } else if count == source_amount - source_amount / 2 {
                    plan.add(Click::Right, source);
                } else {
                    plan.add(Click::Left, source);
                    for _ in 0..source_amount.saturating_sub(count) {
                        plan.add(Click::Right, source);
                    }
                }
            } else {
                if !plan.cursor().is_same_item(plan.item(source)) {
                    return Err(InventoryError::InvalidTransfer("cursor holds another item"));
                }
                if count != source_amount {
                    let temp = plan
                        .find_temp_slot(plan.cursor(), false, &[source])
                        .ok_or(InventoryError::NoTempSlot)?;
                    plan.add(Click::Left, temp);
                    plan.add(Click::Left, source);
                    for _ in 0..count {
                        plan.add(Click::Right, temp);
                    }
                    plan.add(Click::Left, source);
                    plan.add(Click::Left, temp);
                } else {
                    if translator.slot_type(source) == SlotType::Normal {
                        plan.add(Click::Left, source);
                    }
                    plan.add(Click::Left, source);
                }
            }
        }
        (Some(source), Some(destination)) => {
            let temp = if plan.cursor().is_empty() {
                None
            } else {
                let empty_only = translator.slot_type(source) != SlotType::Normal;
                let temp = plan
                    .find_temp_slot(plan.cursor(), empty_only, &[source, destination])
                    .ok_or(InventoryError::NoTempSlot)?;
                plan.add(Click::Left, temp);
                Some(temp)
            };
            plan.transfer_slot(source, destination, count);
            if let Some(temp) = temp {
                plan.add(Click::Left, temp);
            }
        }
    }
    Ok(())
}

fn plan_swap<T: InventoryTranslator + ?Sized>(
    translator: &T,
    plan: &mut ClickPlan<'_, T>,
    ctx: &InventoryContext,
    source: &ItemStackRequestSlotData,
    destination: &ItemStackRequestSlotData,
) -> Result<(), InventoryError> {
    check_net_id(translator, plan.window(), source)?;
    check_net_id(translator, plan.window(), destination)?;
    let source_slot = java_slot(translator, plan.window(), source)?;
    let destination_slot = java_slot(translator, plan.window(), destination)?;

    let moved = source_slot.map_or(plan.cursor(), |slot| plan.item(slot));
    if translator.should_reject_item_place(
        ctx,
        moved,
        BedrockContainerSlot::from(source),
        BedrockContainerSlot::from(destination),
    ) {
        return Err(InventoryError::IllegalPlacement(destination.container));
    }

    // a number key press swaps with the hotbar in one click
    let onto_hotbar = (!source.is_cursor() && destination.container == ContainerSlotType::Hotbar)
        || destination.container == ContainerSlotType::HotbarAndInventory;
    if onto_hotbar {
        if let (Some(click), Some(source)) = (Click::hotbar_swap(destination.slot), source_slot) {
            plan.add(click, source);
            return Ok(());
        }
    }

    match (source_slot, destination_slot) {
        (None, None) => Err(InventoryError::InvalidTransfer("cursor swapped with itself")),
        (None, Some(slot)) | (Some(slot), None) => {
            if plan.cursor().is_same_item(plan.item(slot)) {
                return Err(InventoryError::InvalidTransfer("swap would merge into the cursor"));
            }
            plan.add(Click::Left, slot);
            Ok(())
        }
        (Some(source), Some(destination)) => {
            if !plan.cursor().is_empty() {
                return Err(InventoryError::InvalidTransfer("swap needs an empty cursor"));
            }
            if source == destination || plan.item(source).is_same_item(plan.item(destination)) {
                return Err(InventoryError::InvalidTransfer("swap would merge the stacks"));
            }
            plan.add(Click::Left, source);
            plan.add(Click::Left, destination);
            plan.add(Click::Left, source);
            Ok(())
        }
    }
}

/// CRAFT_RECIPE in a crafting grid: take the result once per craft, then hand
/// the crafted items out.
pub fn translate_crafting_request<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &mut Window,
    ctx: &mut InventoryContext,
    request: &ItemStackRequest,
) -> TranslateResult {
    let mut state = CraftState::Start;
    let mut result_size = 0u32;
    let mut leftover = 0u32;
    let mut consumed_slots = Vec::new();

    let mut outcome = {
        let mut plan = ClickPlan::new(&*window, translator, ctx.config.emulate_post_1_16_logic);
        for action in &request.actions {
            match action {
                ItemStackRequestAction::CraftRecipe { .. } => {
                    state.advance(&[CraftState::Start], CraftState::RecipeId, action)?;
                }
                ItemStackRequestAction::CraftResultsDeprecated {
                    result_items,
                    times_crafted,
                } => {
                    state.advance(&[CraftState::RecipeId], CraftState::Deprecated, action)?;
                    let [result] = result_items.as_slice() else {
                        return Err(InventoryError::InvalidCraftSequence(action.name()));
                    };
                    result_size = result.count;
                    if result_size == 0 || *times_crafted == 0 {
                        return Err(InventoryError::InvalidCraftSequence(action.name()));
                    }
                }
                ItemStackRequestAction::Consume { source, .. } => {
                    state.advance(
                        &[CraftState::Deprecated, CraftState::Ingredients],
                        CraftState::Ingredients,
                        action,
                    )?;
                    if let Some(slot) = java_slot(translator, plan.window(), source)? {
                        consumed_slots.push(slot);
                    }
                }
                ItemStackRequestAction::Take {
                    count,
                    source,
                    destination,
                }
                | ItemStackRequestAction::Place {
                    count,
                    source,
                    destination,
                } => {
                    state.advance(
                        &[CraftState::Ingredients, CraftState::Transfer],
                        CraftState::Transfer,
                        action,
                    )?;
                    let count = *count;
                    if source.container != ContainerSlotType::CreatedOutput || count == 0 {
                        return Err(InventoryError::InvalidTransfer("crafted items come from the created output"));
                    }
                    let output = translator.bedrock_slot_to_java(source)?;
                    let Some(destination) = java_slot(translator, plan.window(), destination)? else {
                        plan.add(Click::Left, output);
                        state = CraftState::Done;
                        continue;
                    };

                    if leftover != 0 {
                        if count > leftover {
                            return Err(InventoryError::InvalidTransfer("more crafted items than left over"));
                        }
                        if count == leftover {
                            plan.add(Click::Left, destination);
                        } else {
                            for _ in 0..count {
                                plan.add(Click::Right, destination);
                            }
                        }
                        leftover -= count;
                        continue;
                    }

                    let remainder = count % result_size;
                    let crafts = count / result_size;
                    let temp = if plan.cursor().is_empty() {
                        None
                    } else {
                        let temp = plan
                            .find_temp_slot(plan.cursor(), true, &[output, destination])
                            .ok_or(InventoryError::NoTempSlot)?;
                        plan.add(Click::Left, temp);
                        Some(temp)
                    };
                    for _ in 0..crafts {
                        plan.add(Click::Left, output);
                        plan.add(Click::Left, destination);
                    }
                    if let Some(temp) = temp {
                        plan.add(Click::Left, temp);
                    }
                    if remainder > 0 {
                        plan.add(Click::Left, output);
                        for _ in 0..remainder {
                            plan.add(Click::Right, destination);
                        }
                        leftover = result_size - remainder;
                    }
                }
                other => return Err(InventoryError::InvalidCraftSequence(other.name())),
            }
        }
        plan.execute(false)
    };

    for slot in consumed_slots {
        outcome.add_affected(slot);
    }
    let affected = outcome.commit(window, ctx);
    Ok(accept(translator, window, ctx, request, &affected))
}

/// Grid slot of ingredient `index`; recipes smaller than the grid sit in its centre.
pub fn grid_slot(shape: RecipeShape, dimensions: usize, index: usize) -> usize {
    let (width, offset_x, offset_y) = match shape {
        RecipeShape::Shaped { width, height } => (
            width.max(1),
            dimensions.saturating_sub(width) / 2,
            dimensions.saturating_sub(height) / 2,
        ),
        RecipeShape::Shapeless => (dimensions, 0, 0),
    };
    1 + (index / width + offset_y) * dimensions + index % width + offset_x
}

/// CRAFT_RECIPE_AUTO: the client filled the grid from the recipe book. Java
/// needs the ingredients placed by hand, then shift clicks on the result.
pub fn translate_auto_crafting_request<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &mut Window,
    ctx: &mut InventoryContext,
    request: &ItemStackRequest,
) -> TranslateResult {
    let grid_size = translator
        .grid_size()
        .ok_or(InventoryError::UnsupportedAction("CRAFT_RECIPE_AUTO"))?;
    let dimensions = if grid_size == 4 { 2 } else { 3 };

    let mut state = CraftState::Start;
    let mut recipe = None;
    let mut times_crafted = 0u32;
    let mut ingredient_index: Option<usize> = None;
    let mut ingredient_remaining = 0u32;
    let mut consumed: HashMap<usize, u32> = HashMap::new();
    let mut priority: Option<usize> = None;
    // grid slot -> (source slot, amount), in the order the client consumed them
    let mut ingredient_map: BTreeMap<usize, Vec<(usize, u32)>> = BTreeMap::new();

    let outcome = {
        let mut plan = ClickPlan::new(&*window, translator, ctx.config.emulate_post_1_16_logic);
        for action in &request.actions {
            match action {
                ItemStackRequestAction::CraftRecipeAuto {
                    recipe_network_id, ..
                } => {
                    state.advance(&[CraftState::Start], CraftState::RecipeId, action)?;
                    let found = ctx
                        .recipes
                        .crafting
                        .get(recipe_network_id)
                        .cloned()
                        .ok_or(InventoryError::UnknownRecipe(*recipe_network_id))?;
                    let grid_occupied = (1..=grid_size).any(|slot| !plan.window().item(slot).is_empty());
                    if !plan.cursor().is_empty() || grid_occupied {
                        return Err(InventoryError::InvalidTransfer("auto craft needs an empty grid and cursor"));
                    }
                    let fits = match found.shape {
                        RecipeShape::Shaped { width, height } => width <= dimensions && height <= dimensions,
                        RecipeShape::Shapeless => found.ingredients.len() <= grid_size,
                    };
                    if !fits {
                        return Err(InventoryError::InvalidTransfer("recipe does not fit the grid"));
                    }
                    recipe = Some(found);
                }
                ItemStackRequestAction::CraftResultsDeprecated {
                    result_items,
                    times_crafted: times,
                } => {
                    state.advance(&[CraftState::RecipeId], CraftState::Deprecated, action)?;
                    let [result] = result_items.as_slice() else {
                        return Err(InventoryError::InvalidCraftSequence(action.name()));
                    };
                    if result.count == 0 || *times == 0 {
                        return Err(InventoryError::InvalidCraftSequence(action.name()));
                    }
                    times_crafted = u32::from(*times);
                }
                ItemStackRequestAction::Consume { count, source } => {
                    state.advance(
                        &[CraftState::Deprecated, CraftState::Ingredients],
                        CraftState::Ingredients,
                        action,
                    )?;
                    let Some(recipe) = recipe.as_ref() else {
                        return Err(InventoryError::InvalidCraftSequence(action.name()));
                    };
                    if ingredient_remaining == 0 {
                        let start = ingredient_index.map_or(0, |index| index + 1);
                        let next = (start..recipe.ingredients.len()).find(|&index| recipe.ingredients[index].is_some());
                        let Some(next) = next else {
                            return Err(InventoryError::InvalidTransfer("consumed more ingredients than the recipe has"));
                        };
                        ingredient_index = Some(next);
                        ingredient_remaining = times_crafted;
                    }
                    ingredient_remaining = ingredient_remaining
                        .checked_sub(*count)
                        .ok_or(InventoryError::InvalidTransfer("consumed more than the recipe needs"))?;
                    let Some(source_slot) = java_slot(translator, plan.window(), source)? else {
                        return Err(InventoryError::InvalidTransfer("ingredients come from slots"));
                    };
                    *consumed.entry(source_slot).or_default() += *count;

                    let grid = grid_slot(recipe.shape, dimensions, ingredient_index.unwrap_or(0));
                    let sources = ingredient_map.entry(grid).or_default();
                    match sources.iter_mut().find(|(slot, _)| *slot == source_slot) {
                        Some(entry) => entry.1 = *count,
                        None => sources.push((source_slot, *count)),
                    }
                }
                ItemStackRequestAction::Take {
                    count,
                    source,
                    destination,
                }
                | ItemStackRequestAction::Place {
                    count,
                    source,
                    destination,
                } => {
                    state.advance(
                        &[CraftState::Ingredients, CraftState::Transfer],
                        CraftState::Transfer,
                        action,
                    )?;
                    if source.container != ContainerSlotType::CreatedOutput || *count == 0 {
                        return Err(InventoryError::InvalidTransfer("crafted items come from the created output"));
                    }
                    match java_slot(translator, plan.window(), destination)? {
                        None => {
                            if times_crafted > 1 {
                                let output = recipe.as_ref().map_or(ItemStack::EMPTY, |recipe| recipe.output.clone());
                                plan.find_temp_slot(&output, true, &[])
                                    .ok_or(InventoryError::NoTempSlot)?;
                            }
                            break;
                        }
                        Some(destination) => {
                            let already_there = consumed.get(&destination).copied().unwrap_or(0);
                            if plan.window().item(destination).count == already_there {
                                priority = Some(destination);
                                break;
                            }
                        }
                    }
                }
                other => return Err(InventoryError::InvalidCraftSequence(other.name())),
            }
        }

        let Some(recipe) = recipe else {
            return Err(InventoryError::InvalidCraftSequence("CRAFT_RECIPE_AUTO"));
        };
        let passes = MAX_AUTO_CRAFT_PASSES.min(times_crafted as usize);
        for pass in 0..passes {
            let mut done = true;
            for (&grid, sources) in &mut ingredient_map {
                if sources.is_empty() {
                    continue;
                }
                done = false;
                if !plan.is_empty(grid) {
                    continue;
                }
                let index = priority
                    .filter(|_| pass == 0)
                    .and_then(|priority| sources.iter().position(|(slot, _)| *slot == priority))
                    .unwrap_or(0);
                let (source, amount) = sources.remove(index);
                plan.transfer_slot(source, grid, amount);
            }
            if done {
                break;
            }
            plan.add(Click::LeftShift, 0);
        }
        if ingredient_map.values().any(|sources| !sources.is_empty()) {
            return Err(InventoryError::AutoCraftExhausted(passes));
        }

        plan.seed(0, recipe.output);
        plan.execute(true)
    };

    let affected = outcome.commit(window, ctx);
    Ok(accept(translator, window, ctx, request, &affected))
}

/// A response entry for one slot.
pub fn item_entry(ctx: &InventoryContext, slot: u8, item: &ItemStack) -> ItemStackResponseSlot {
    if item.is_empty() {
        return ItemStackResponseSlot::empty(slot);
    }
    ItemStackResponseSlot {
        slot,
        hotbar_slot: slot,
        count: u8::try_from(item.count).unwrap_or(u8::MAX),
        stack_network_id: item.net_id,
        custom_name: ctx.items.custom_name(item).unwrap_or_default(),
        durability: ctx.items.durability(item),
    }
}

/// Post-request contents of `affected`, grouped by the client's regions, plus the cursor.
pub fn make_container_entries<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &Window,
    ctx: &InventoryContext,
    affected: &[usize],
) -> Vec<ItemStackResponseContainer> {
    let mut containers: Vec<ItemStackResponseContainer> = Vec::new();
    let mut bundles = Vec::new();
    for &slot in affected {
        let bedrock = translator.java_slot_to_bedrock_container(slot);
        let item = window.item(slot);
        let entry = item_entry(ctx, bedrock.slot, item);
        match containers
            .iter_mut()
            .find(|container| container.container == bedrock.container)
        {
            Some(container) => container.items.push(entry),
            None => containers.push(ItemStackResponseContainer {
                container: bedrock.container,
                items: vec![entry],
                dynamic_id: None,
            }),
        }
        if item.is_bundle() {
            bundles.push(bundle::response_container(ctx, item));
        }
    }
    if window.cursor().is_bundle() {
        bundles.push(bundle::response_container(ctx, window.cursor()));
    }
    containers.extend(bundles);
    containers.push(ItemStackResponseContainer {
        container: ContainerSlotType::Cursor,
        items: vec![item_entry(ctx, 0, window.cursor())],
        dynamic_id: None,
    });
    containers
}

pub fn accept<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &Window,
    ctx: &InventoryContext,
    request: &ItemStackRequest,
    affected: &[usize],
) -> ItemStackResponse {
    ItemStackResponse::accept(request, make_container_entries(translator, window, ctx, affected))
}

#[cfg(test)]
mod test {
    use lantern_protocol::{
        bedrock::ItemData,
        java::server::Serverbound,
    };

    use super::*;
    use crate::{
        container::{Container, ContainerState},
        context::CraftingRecipe,
        player::PlayerInventory,
        test_support::{cursor, place, request, slot, stack, take, total_items, TestSession, PLANKS, STICK, STONE},
        translator::{crafting::CraftingTableTranslator, generic::GenericTranslator, player::PlayerTranslator},
    };

    fn chest_with(session: &mut TestSession, items: &[(usize, ItemStack)]) -> Container {
        let mut chest = Container::new(1, WindowType::Generic9x3, "Chest", 27, 0, ContainerState::Plain);
        for (slot, item) in items {
            chest.set_item(*slot, item.clone(), &mut session.ctx.net_ids);
        }
        chest
    }

    fn clicks(packets: &[Serverbound]) -> Vec<(i16, i8)> {
        packets
            .iter()
            .filter_map(|packet| match packet {
                Serverbound::ClickContainer(click) => Some((click.slot, click.button)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn take_half_into_empty_cursor_is_one_right_click() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut chest = chest_with(&mut session, &[(0, stack(STONE, 10))]);
        let net_id = chest.item(0).net_id;
        let mut window = Window::new(&mut player, Some(&mut chest));

        let response = GenericTranslator::chest(27)
            .translate_request(
                &mut window,
                &mut session.ctx,
                &request(vec![take(5, slot(ContainerSlotType::LevelEntity, 0, net_id), cursor(0))]),
            )
            .unwrap();
        assert!(response.is_ok());
        assert_eq!(clicks(&session.java.take()), vec![(0, 1)]);
        assert_eq!(window.cursor().count, 5);
        assert_eq!(window.item(0).count, 5);
        let cursor_entry = &response.container(ContainerSlotType::Cursor).unwrap().items[0];
        assert_eq!(cursor_entry.count, 5);
        let chest_entry = &response.container(ContainerSlotType::LevelEntity).unwrap().items[0];
        assert_eq!((chest_entry.slot, chest_entry.count), (0, 5));
    }

    #[test]
    fn transfers_between_slots_keep_every_item() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut chest = chest_with(&mut session, &[(0, stack(STONE, 64)), (1, stack(STONE, 10))]);
        let mut window = Window::new(&mut player, Some(&mut chest));
        let before = total_items(&window);

        let translator = GenericTranslator::chest(27);
        let moves = request(vec![
            place(48, slot(ContainerSlotType::LevelEntity, 0, -1), slot(ContainerSlotType::LevelEntity, 2, -1)),
            take(7, slot(ContainerSlotType::LevelEntity, 1, -1), slot(ContainerSlotType::Inventory, 9, -1)),
            place(3, slot(ContainerSlotType::LevelEntity, 2, -1), slot(ContainerSlotType::Hotbar, 0, -1)),
        ]);
        let response = translator.translate_request(&mut window, &mut session.ctx, &moves).unwrap();
        assert!(response.is_ok());
        assert_eq!(total_items(&window), before);
        assert_eq!(window.item(2).count, 45);
        assert_eq!(window.item(27).count, 7);
        assert_eq!(window.item(54).count, 3);
        assert!(window.cursor().is_empty());
    }

    #[test]
    fn stale_net_id_rejects_without_touching_the_window() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut chest = chest_with(&mut session, &[(0, stack(STONE, 10))]);
        let mut window = Window::new(&mut player, Some(&mut chest));

        let stale = request(vec![
            take(10, slot(ContainerSlotType::LevelEntity, 0, -1), cursor(0)),
            place(10, cursor(0), slot(ContainerSlotType::LevelEntity, 5, 999)),
        ]);
        let error = GenericTranslator::chest(27)
            .translate_request(&mut window, &mut session.ctx, &stale)
            .unwrap_err();
        assert!(matches!(error, InventoryError::StaleNetId { claimed: 999, .. }));
        assert!(session.java.take().is_empty());
        assert_eq!(window.item(0).count, 10);
        assert!(window.cursor().is_empty());
    }

    #[test]
    fn occupied_cursor_is_parked_during_a_transfer() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        player.set_cursor(stack(PLANKS, 4), &mut session.ctx.net_ids);
        let mut chest = chest_with(&mut session, &[(0, stack(STONE, 10))]);
        let mut window = Window::new(&mut player, Some(&mut chest));

        GenericTranslator::chest(27)
            .translate_request(
                &mut window,
                &mut session.ctx,
                &request(vec![place(10, slot(ContainerSlotType::LevelEntity, 0, -1), slot(ContainerSlotType::LevelEntity, 1, -1))]),
            )
            .unwrap();
        // parked in the last main inventory slot, Java 53
        assert_eq!(clicks(&session.java.take()), vec![(53, 0), (0, 0), (1, 0), (53, 0)]);
        assert_eq!(window.cursor().item_id, PLANKS);
        assert_eq!(window.item(1).count, 10);
    }

    #[test]
    fn swap_onto_hotbar_uses_number_key() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut chest = chest_with(&mut session, &[(4, stack(STONE, 2))]);
        let mut window = Window::new(&mut player, Some(&mut chest));
        let swap = request(vec![ItemStackRequestAction::Swap {
            source: slot(ContainerSlotType::LevelEntity, 4, -1),
            destination: slot(ContainerSlotType::Hotbar, 3, -1),
        }]);
        let response = GenericTranslator::chest(27)
            .translate_request(&mut window, &mut session.ctx, &swap)
            .unwrap();
        let Serverbound::ClickContainer(click) = &session.java.take()[0] else {
            panic!("expected a click");
        };
        assert_eq!((click.slot, click.button), (4, 3));
        assert_eq!(window.item(57).count, 2);
        assert_eq!(response.container(ContainerSlotType::Hotbar).unwrap().items[0].slot, 3);
    }

    #[test]
    fn dropping_part_of_a_stack_drops_one_at_a_time() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut chest = chest_with(&mut session, &[(0, stack(STONE, 5))]);
        let mut window = Window::new(&mut player, Some(&mut chest));
        let drop = request(vec![ItemStackRequestAction::Drop {
            count: 2,
            source: slot(ContainerSlotType::LevelEntity, 0, -1),
            randomly: false,
        }]);
        GenericTranslator::chest(27)
            .translate_request(&mut window, &mut session.ctx, &drop)
            .unwrap();
        assert_eq!(clicks(&session.java.take()), vec![(0, 0), (0, 0)]);
        assert_eq!(window.item(0).count, 3);
    }

    #[test]
    fn unknown_action_is_unsupported() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut window = Window::new(&mut player, None);
        let mine = request(vec![ItemStackRequestAction::MineBlock {
            hotbar_slot: 0,
            predicted_durability: 0,
            stack_network_id: 0,
        }]);
        assert_eq!(
            PlayerTranslator.translate_request(&mut window, &mut session.ctx, &mine),
            Err(InventoryError::UnsupportedAction("MINE_BLOCK"))
        );
    }

    fn crafted(count: u32) -> ItemStackRequestAction {
        ItemStackRequestAction::CraftResultsDeprecated {
            result_items: vec![ItemData {
                definition_id: STICK,
                count,
                ..ItemData::AIR
            }],
            times_crafted: 1,
        }
    }

    #[test]
    fn crafting_hands_out_results_with_leftover() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut table = Container::new(2, WindowType::CraftingTable, "", 10, 0, ContainerState::Plain);
        table.set_item(0, stack(STICK, 4), &mut session.ctx.net_ids);
        table.set_item(1, stack(PLANKS, 2), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, Some(&mut table));

        let craft = request(vec![
            ItemStackRequestAction::CraftRecipe {
                recipe_network_id: 3,
                number_of_requested_crafts: 1,
            },
            crafted(4),
            ItemStackRequestAction::Consume {
                count: 1,
                source: slot(ContainerSlotType::CraftingInput, 32, -1),
            },
            place(6, slot(ContainerSlotType::CreatedOutput, 50, -1), slot(ContainerSlotType::Hotbar, 0, -1)),
            place(2, slot(ContainerSlotType::CreatedOutput, 50, -1), slot(ContainerSlotType::Hotbar, 1, -1)),
        ]);
        let response = CraftingTableTranslator
            .translate_crafting_request(&mut window, &mut session.ctx, &craft)
            .unwrap();
        assert!(response.is_ok());
        // one full craft, then a second split 2 + 2
        assert_eq!(
            clicks(&session.java.take()),
            vec![(0, 0), (37, 0), (0, 0), (37, 1), (37, 1), (38, 0)]
        );
    }

    #[test]
    fn crafting_out_of_order_is_rejected() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut window = Window::new(&mut player, None);
        let craft = request(vec![crafted(4)]);
        assert_eq!(
            PlayerTranslator.translate_crafting_request(&mut window, &mut session.ctx, &craft),
            Err(InventoryError::InvalidCraftSequence("CRAFT_RESULTS_DEPRECATED"))
        );
    }

    #[test]
    fn small_recipes_are_centred_in_the_grid() {
        let sticks = RecipeShape::Shaped { width: 1, height: 2 };
        assert_eq!(grid_slot(sticks, 3, 0), 2);
        assert_eq!(grid_slot(sticks, 3, 1), 5);
        assert_eq!(grid_slot(sticks, 2, 1), 3);
        let table = RecipeShape::Shaped { width: 2, height: 2 };
        assert_eq!(grid_slot(table, 3, 3), 5);
        assert_eq!(grid_slot(RecipeShape::Shapeless, 3, 4), 5);
    }

    #[test]
    fn auto_craft_fills_the_grid_and_shift_clicks() {
        let mut session = TestSession::new();
        session.ctx.recipes.crafting.insert(
            7,
            CraftingRecipe {
                shape: RecipeShape::Shaped { width: 1, height: 2 },
                ingredients: vec![Some(PLANKS), Some(PLANKS)],
                output: stack(STICK, 4),
            },
        );
        let mut player = PlayerInventory::new();
        player.set_item(9, stack(PLANKS, 10), &mut session.ctx.net_ids);
        let mut window = Window::new(&mut player, None);

        let auto = request(vec![
            ItemStackRequestAction::CraftRecipeAuto {
                recipe_network_id: 7,
                times_crafted: 2,
                ingredients: Vec::new(),
            },
            ItemStackRequestAction::CraftResultsDeprecated {
                result_items: vec![ItemData {
                    definition_id: STICK,
                    count: 4,
                    ..ItemData::AIR
                }],
                times_crafted: 2,
            },
            ItemStackRequestAction::Consume {
                count: 2,
                source: slot(ContainerSlotType::Inventory, 9, -1),
            },
            ItemStackRequestAction::Consume {
                count: 2,
                source: slot(ContainerSlotType::Inventory, 9, -1),
            },
            place(8, slot(ContainerSlotType::CreatedOutput, 50, -1), slot(ContainerSlotType::Inventory, 9, -1)),
        ]);
        let response = PlayerTranslator
            .translate_auto_crafting_request(&mut window, &mut session.ctx, &auto)
            .unwrap();
        assert!(response.is_ok());
        let packets = session.java.take();
        let Serverbound::ClickContainer(last) = packets.last().unwrap() else {
            panic!("expected clicks");
        };
        assert_eq!(last.slot, 0);
        assert_eq!(last.carried_item, lantern_protocol::java::Slot::refresh());
        // 2x2 grid: the 1x2 recipe lands in slots 1 and 3
        assert!(clicks(&packets).contains(&(1, 1)) || clicks(&packets).contains(&(1, 0)));
        assert!(window.item(1).is_empty() && window.item(3).is_empty());
        assert_eq!(window.item(9).count, 6);
    }

    #[test]
    fn auto_craft_of_unknown_recipe_is_rejected() {
        let mut session = TestSession::new();
        let mut player = PlayerInventory::new();
        let mut window = Window::new(&mut player, None);
        let auto = request(vec![ItemStackRequestAction::CraftRecipeAuto {
            recipe_network_id: 99,
            times_crafted: 1,
            ingredients: Vec::new(),
        }]);
        assert_eq!(
            PlayerTranslator.translate_auto_crafting_request(&mut window, &mut session.ctx, &auto),
            Err(InventoryError::UnknownRecipe(99))
        );
    }
}
