use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use lantern_core::{
    item::{calculate_bundle_weight, capacity_for_item},
    ItemStack,
};
use lantern_protocol::java::{
    server::{SClickContainer, SSelectBundleItem, SSetCreativeSlot, Serverbound},
    Slot,
};

use crate::{
    click::Click,
    context::InventoryContext,
    player::StateIds,
    slot::SlotType,
    translator::InventoryTranslator,
    window::Window,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ClickAction {
    click: Click,
    /// `None` for clicks outside the window.
    slot: Option<usize>,
    /// Java index of the bundle entry a [`Click::RightBundle`] takes out.
    bundle_entry: Option<usize>,
}

/// A sequence of Java clicks, simulated against a shadow copy of the window as it is built.
///
/// Nothing is sent or stored until [`ClickPlan::execute`] turns the plan into a
/// [`ClickOutcome`] and that outcome is committed.
pub struct ClickPlan<'a, T: ?Sized> {
    window: &'a Window<'a>,
    translator: &'a T,
    emulate_post_1_16: bool,
    clicks: Vec<ClickAction>,
    /// Predicted contents applied before the first click, e.g. a selected recipe's result.
    seeds: Vec<(usize, ItemStack)>,
    simulated: HashMap<usize, ItemStack>,
    cursor: ItemStack,
    changed: Option<BTreeMap<usize, ItemStack>>,
    state_ids: StateIds,
    queued: Vec<Serverbound>,
}

impl<'a, T: InventoryTranslator + ?Sized> ClickPlan<'a, T> {
    pub fn new(window: &'a Window<'a>, translator: &'a T, emulate_post_1_16: bool) -> Self {
        Self {
            window,
            translator,
            emulate_post_1_16,
            clicks: Vec::new(),
            seeds: Vec::new(),
            simulated: HashMap::new(),
            cursor: window.cursor().clone(),
            changed: None,
            state_ids: window.state_ids(),
            queued: Vec::new(),
        }
    }

    pub fn window(&self) -> &Window<'a> {
        self.window
    }

    pub fn item(&self, slot: usize) -> &ItemStack {
        self.simulated
            .get(&slot)
            .unwrap_or_else(|| self.window.item(slot))
    }

    pub fn cursor(&self) -> &ItemStack {
        &self.cursor
    }

    pub fn set_cursor(&mut self, item: ItemStack) {
        self.cursor = item;
    }

    pub fn is_empty(&self, slot: usize) -> bool {
        self.item(slot).is_empty()
    }

    pub fn can_stack(&self, slot: usize, item: &ItemStack) -> bool {
        self.item(slot).is_same_item(item)
    }

    /// Predicts `slot` holds `item` before any click runs.
    pub fn seed(&mut self, slot: usize, item: ItemStack) {
        self.simulated.insert(slot, item.clone());
        self.seeds.push((slot, item));
    }

    /// Sends `packet` after the clicks, if the plan is committed.
    pub fn queue(&mut self, packet: impl Into<Serverbound>) {
        self.queued.push(packet.into());
    }

    pub fn add(&mut self, click: Click, slot: usize) {
        let action = ClickAction {
            click,
            slot: (!click.is_outside()).then_some(slot),
            bundle_entry: None,
        };
        self.clicks.push(action);
        self.simulate(&action);
    }

    pub fn add_outside(&mut self, click: Click) {
        self.add(click, 0);
    }

    /// Right click on the bundle in `slot`, taking out the entry at Java index `entry`.
    pub fn add_bundle_extract(&mut self, slot: usize, entry: usize) {
        let action = ClickAction {
            click: Click::RightBundle,
            slot: Some(slot),
            bundle_entry: Some(entry),
        };
        self.clicks.push(action);
        self.simulate(&action);
    }

    pub fn clicks(&self) -> impl Iterator<Item = (Click, Option<usize>)> + '_ {
        self.clicks.iter().map(|action| (action.click, action.slot))
    }

    /// Moves `amount` items from `source` to `destination` with as few clicks as possible.
    ///
    /// Needs an empty cursor to take the shortcuts.
    pub fn transfer_slot(&mut self, source: usize, destination: usize, amount: u32) {
        let cursor_occupied = !self.cursor.is_empty();
        let source_amount = self.item(source).count;
        if amount == source_amount {
            self.add(Click::Left, source);
            self.add(Click::Left, destination);
            return;
        }

        let larger_half = source_amount - source_amount / 2;
        let holding = if !cursor_occupied && amount <= larger_half {
            self.add(Click::Right, source);
            larger_half
        } else {
            self.add(Click::Left, source);
            source_amount
        };
        if !cursor_occupied && amount > holding / 2 {
            for _ in 0..holding.saturating_sub(amount) {
                self.add(Click::Right, source);
            }
            self.add(Click::Left, destination);
        } else {
            for _ in 0..amount {
                self.add(Click::Right, destination);
            }
            self.add(Click::Left, source);
        }
    }

    /// A main inventory or hotbar slot to park `item` in, scanning backwards from
    /// the last main inventory slot and then the hotbar.
    ///
    /// Prefers empty slots; otherwise picks a slot that would not merge with `item`
    /// or with anything in `blacklist`.
    pub fn find_temp_slot(&self, item: &ItemStack, empty_only: bool, blacklist: &[usize]) -> Option<usize> {
        let hotbar = self.window.hotbar_offset();
        let candidates = (hotbar - 27..hotbar)
            .rev()
            .chain((hotbar..hotbar + 9).rev())
            .filter(|slot| !blacklist.contains(slot))
            .collect_vec();

        if let Some(slot) = candidates.iter().copied().find(|&slot| self.is_empty(slot)) {
            return Some(slot);
        }
        if empty_only {
            return None;
        }
        candidates.into_iter().find(|&slot| {
            !self.can_stack(slot, item)
                && blacklist
                    .iter()
                    .all(|&blacklisted| !self.can_stack(slot, self.item(blacklisted)))
        })
    }

    /// Normal slots the clicks touch, in click order.
    pub fn affected_slots(&self) -> Vec<usize> {
        let hotbar = self.window.hotbar_offset();
        self.clicks
            .iter()
            .filter_map(|action| Some((action.click, action.slot?)))
            .filter(|&(_, slot)| self.translator.slot_type(slot) == SlotType::Normal)
            .flat_map(|(click, slot)| match click {
                Click::SwapToHotbar(key) => vec![slot, hotbar + usize::from(key)],
                _ => vec![slot],
            })
            .unique()
            .collect()
    }

    /// Replays the clicks into container click packets.
    ///
    /// With `refresh` the last click carries an item the server cannot agree
    /// with, so it answers with the whole window.
    pub fn execute(mut self, mut refresh: bool) -> ClickOutcome {
        let affected = self.affected_slots();
        self.reset();
        let clicks = std::mem::take(&mut self.clicks);
        let window_id = self.window.java_id();
        let mut packets: Vec<Serverbound> = Vec::with_capacity(clicks.len());

        for (index, action) in clicks.iter().enumerate() {
            if action
                .slot
                .is_some_and(|slot| self.translator.slot_type(slot) != SlotType::Normal)
            {
                refresh = true;
            }
            self.changed = Some(BTreeMap::new());

            let state_id = if self.emulate_post_1_16 {
                let state_id = self.advance_state_id(action);
                self.simulate(action);
                state_id
            } else {
                self.state_ids.state_id
            };

            let carried = if index + 1 == clicks.len() && refresh {
                Slot::refresh()
            } else if self.emulate_post_1_16 {
                Slot::from(&self.cursor)
            } else {
                match action.slot {
                    Some(slot) if !action.click.is_drop() => Slot::from(self.item(slot)),
                    _ => Slot::EMPTY,
                }
            };

            if !self.emulate_post_1_16 {
                self.simulate(action);
            }

            let changed_slots = self
                .changed
                .take()
                .unwrap_or_default()
                .into_iter()
                .map(|(slot, item)| (slot as i16, Slot::from(&item)))
                .collect();

            if let (Some(slot), Some(entry)) = (action.slot, action.bundle_entry) {
                packets.push(SSelectBundleItem::new(slot as i32, entry as i32).into());
            }
            packets.push(
                SClickContainer::new(
                    window_id,
                    state_id,
                    action.slot.map_or(Click::OUTSIDE_SLOT, |slot| slot as i16),
                    action.click.button(),
                    action.click.mode(),
                    changed_slots,
                    carried,
                )
                .into(),
            );
        }
        packets.append(&mut self.queued);

        ClickOutcome {
            packets,
            cursor: self.cursor,
            items: self.simulated.into_iter().sorted_by_key(|(slot, _)| *slot).collect(),
            state_ids: Some(self.state_ids),
            affected,
        }
    }

    /// Commits the simulated state with creative slot writes instead of clicks.
    pub fn execute_creative(self) -> ClickOutcome {
        let window = self.window;
        let items = self
            .simulated
            .into_iter()
            .sorted_by_key(|(slot, _)| *slot)
            .collect_vec();
        let mut changed = Vec::new();
        let mut packets: Vec<Serverbound> = Vec::new();
        for (slot, item) in &items {
            if item != window.item(*slot) {
                changed.push(*slot);
                packets.push(SSetCreativeSlot::new(*slot as i16, Slot::from(item)).into());
            }
        }
        packets.extend(self.queued);

        ClickOutcome {
            packets,
            cursor: self.cursor,
            items,
            state_ids: None,
            affected: changed,
        }
    }

    fn reset(&mut self) {
        self.simulated.clear();
        self.cursor = self.window.cursor().clone();
        for (slot, item) in &self.seeds {
            self.simulated.insert(*slot, item.clone());
        }
        self.state_ids = self.window.state_ids();
    }

    /// Puts `item` in `slot` without a click, for creative edits.
    pub fn set_item(&mut self, slot: usize, item: ItemStack) {
        if let Some(changed) = self.changed.as_mut() {
            changed.insert(slot, item.clone());
        }
        self.simulated.insert(slot, item);
    }

    /// Crafting table grid clicks make the server bump its state id once more
    /// than a plain click, twice if an item is taken out of the grid.
    fn advance_state_id(&mut self, action: &ClickAction) -> i32 {
        let state_id = self.state_ids.for_click();
        if let Some(slot) = action.slot {
            if self.translator.is_crafting_grid(slot) {
                let clicked = self.item(slot);
                let increments = if action.click == Click::Left
                    && !clicked.is_empty()
                    && !self.cursor.is_same_item(clicked)
                {
                    2
                } else {
                    1
                };
                self.state_ids.increment(increments);
            }
        }
        state_id
    }

    fn simulate(&mut self, action: &ClickAction) {
        let Some(slot) = action.slot else {
            match action.click {
                Click::LeftOutside => self.cursor = ItemStack::EMPTY,
                Click::RightOutside => self.cursor.sub(1),
                _ => {}
            }
            return;
        };

        let mut clicked = self.item(slot).clone();
        if self.translator.slot_type(slot) == SlotType::Output {
            match action.click {
                Click::Left | Click::Right => {
                    if self.cursor.is_empty() && !clicked.is_empty() {
                        self.cursor = clicked;
                    } else if self.cursor.is_same_item(&clicked) && self.cursor.room() >= clicked.count {
                        self.cursor.add(clicked.count);
                    } else if !clicked.is_empty() {
                        // the result only leaves whole
                        return;
                    }
                    self.reduce_crafting_grid(false);
                    self.set_item(slot, ItemStack::EMPTY);
                }
                Click::LeftShift => self.reduce_crafting_grid(true),
                _ => {}
            }
            return;
        }

        match action.click {
            Click::Left => {
                if self.cursor.is_same_item(&clicked) {
                    let moved = self.cursor.count.min(clicked.room());
                    clicked.add(moved);
                    self.cursor.sub(moved);
                    self.set_item(slot, clicked);
                } else {
                    let cursor = std::mem::replace(&mut self.cursor, clicked);
                    self.set_item(slot, cursor);
                }
            }
            Click::Right => {
                if self.cursor.is_empty() && !clicked.is_empty() {
                    let smaller_half = clicked.count / 2;
                    self.cursor = clicked.copy_with_count(clicked.count - smaller_half);
                    self.set_item(slot, clicked.copy_with_count(smaller_half));
                } else if !self.cursor.is_empty() && clicked.is_empty() {
                    let one = self.cursor.copy_with_count(1);
                    self.cursor.sub(1);
                    self.set_item(slot, one);
                } else if clicked.can_stack_with(&self.cursor) {
                    self.cursor.sub(1);
                    clicked.add(1);
                    self.set_item(slot, clicked);
                }
            }
            Click::SwapToHotbar(key) => {
                let hotbar_slot = self.window.hotbar_offset() + usize::from(key);
                let hotbar_item = self.item(hotbar_slot).clone();
                self.set_item(slot, hotbar_item);
                self.set_item(hotbar_slot, clicked);
            }
            Click::DropOne => {
                if !clicked.is_empty() {
                    clicked.sub(1);
                    self.set_item(slot, clicked);
                }
            }
            Click::DropAll => self.set_item(slot, ItemStack::EMPTY),
            Click::LeftBundle => {
                if insert_into_bundle(&mut clicked, &mut self.cursor) > 0 {
                    self.set_item(slot, clicked);
                }
            }
            Click::LeftBundleFromCursor => {
                if insert_into_bundle(&mut self.cursor, &mut clicked) > 0 {
                    self.set_item(slot, clicked);
                }
            }
            Click::RightBundle => {
                if !self.cursor.is_empty() {
                    if clicked.is_empty() {
                        if let Some(entry) = take_bundle_entry(&mut self.cursor, 0) {
                            self.set_item(slot, entry);
                        }
                    }
                } else if let Some(entry) =
                    take_bundle_entry(&mut clicked, action.bundle_entry.unwrap_or(0))
                {
                    self.cursor = entry;
                    self.set_item(slot, clicked);
                }
            }
            Click::LeftShift | Click::LeftOutside | Click::RightOutside => {}
        }
    }

    fn reduce_crafting_grid(&mut self, make_all: bool) {
        let Some(grid_size) = self.translator.grid_size() else {
            return;
        };
        let crafted = if make_all {
            (1..=grid_size)
                .map(|slot| self.item(slot))
                .filter(|item| !item.is_empty())
                .map(|item| item.count)
                .min()
                .unwrap_or(0)
        } else {
            1
        };
        for slot in 1..=grid_size {
            let mut item = self.item(slot).clone();
            if !item.is_empty() {
                item.sub(crafted);
                self.set_item(slot, item);
            }
        }
    }
}

/// Moves as much of `source` into `bundle` as its weight allows. Merged entries move to the front.
fn insert_into_bundle(bundle: &mut ItemStack, source: &mut ItemStack) -> u32 {
    if source.is_empty() {
        return 0;
    }
    let Some(contents) = bundle.bundle_contents_mut() else {
        return 0;
    };
    let amount = capacity_for_item(calculate_bundle_weight(contents.as_slice()), source);
    if amount == 0 {
        return 0;
    }
    let moved = source.copy_with_count(amount);
    match contents.iter().position(|entry| entry.is_same_item(&moved)) {
        Some(index) => {
            let mut merged = contents.remove(index);
            merged.add(amount);
            contents.insert(0, merged);
        }
        None => contents.insert(0, moved),
    }
    source.sub(amount);
    amount
}

fn take_bundle_entry(bundle: &mut ItemStack, index: usize) -> Option<ItemStack> {
    let contents = bundle.bundle_contents_mut()?;
    (index < contents.len()).then(|| contents.remove(index))
}

/// The result of an executed plan: the packets to send and the state to store.
#[must_use]
#[derive(Debug)]
pub struct ClickOutcome {
    packets: Vec<Serverbound>,
    cursor: ItemStack,
    items: Vec<(usize, ItemStack)>,
    state_ids: Option<StateIds>,
    affected: Vec<usize>,
}

impl ClickOutcome {
    pub fn packets(&self) -> &[Serverbound] {
        &self.packets
    }

    pub fn cursor(&self) -> &ItemStack {
        &self.cursor
    }

    /// Content `slot` will hold once committed, if the plan touched it.
    pub fn item(&self, slot: usize) -> Option<&ItemStack> {
        self.items
            .iter()
            .find(|(candidate, _)| *candidate == slot)
            .map(|(_, item)| item)
    }

    pub fn affected_slots(&self) -> &[usize] {
        &self.affected
    }

    pub fn add_affected(&mut self, slot: usize) {
        if !self.affected.contains(&slot) {
            self.affected.push(slot);
        }
    }

    /// Overrides what `slot` holds after the commit.
    pub fn set_item(&mut self, slot: usize, item: ItemStack) {
        match self.items.iter_mut().find(|(candidate, _)| *candidate == slot) {
            Some((_, current)) => *current = item,
            None => self.items.push((slot, item)),
        }
    }

    /// Sends the packets and stores the simulated window. Returns the affected slots.
    pub fn commit(self, window: &mut Window, ctx: &mut InventoryContext) -> Vec<usize> {
        for packet in self.packets {
            ctx.send_java(packet);
        }
        window.set_cursor(self.cursor, &mut ctx.net_ids);
        for (slot, item) in self.items {
            window.set_item(slot, item, &mut ctx.net_ids);
        }
        if let Some(state_ids) = self.state_ids {
            window.state_ids_mut().next_state_id = state_ids.next_state_id;
        }
        self.affected
    }
}
