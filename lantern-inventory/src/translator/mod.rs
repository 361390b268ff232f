//! One translator per Java window kind.
//!
//! A translator knows how the kind's slots are addressed on both sides, how
//! the window is shown to the client and how item stack requests against it
//! become clicks. Everything shared lives in default methods and in
//! [`request`]; kinds only override what differs.

use std::collections::HashMap;

use lantern_core::ItemStack;
use lantern_protocol::bedrock::{
    ContainerSlotType, ItemStackRequest, ItemStackRequestAction, ItemStackRequestSlotData,
    ItemStackResponse,
};

use crate::{
    container::{Container, ContainerState},
    context::InventoryContext,
    error::InventoryError,
    holder::{BlockInventoryHolder, Prepare},
    slot::{java_to_storage, storage_to_java, BedrockContainerSlot, SlotType},
    updater::Updater,
    window::Window,
    WindowType,
};

pub mod anvil;
pub mod beacon;
pub mod brewing;
pub mod bundle;
pub mod cartography;
pub mod crafter;
pub mod crafting;
pub mod dispatch;
pub mod double_chest;
pub mod enchanting;
pub mod furnace;
pub mod generic;
pub mod grindstone;
pub mod lectern;
pub mod loom;
pub mod merchant;
pub mod player;
pub mod request;
pub mod smithing;
pub mod stonecutter;

pub type TranslateResult = Result<ItemStackResponse, InventoryError>;

pub trait InventoryTranslator: Send + Sync {
    /// Slots before the player's storage part of the Java window.
    fn size(&self) -> usize;

    /// Slots after the player's storage part.
    fn extra_slots(&self) -> usize {
        0
    }

    fn initial_state(&self) -> ContainerState {
        ContainerState::Plain
    }

    fn create_container(&self, java_id: u8, window_type: WindowType, title: &str) -> Container {
        Container::new(
            java_id,
            window_type,
            title,
            self.size(),
            self.extra_slots(),
            self.initial_state(),
        )
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        None
    }

    fn updater(&self) -> Updater {
        Updater::Container
    }

    fn prepare(&self, container: &mut Container, ctx: &mut InventoryContext) -> Prepare {
        self.holder()
            .map_or(Prepare::Ready, |holder| holder.prepare(container, ctx))
    }

    fn open(&self, container: &mut Container, ctx: &mut InventoryContext) {
        if let Some(holder) = self.holder() {
            holder.open(container, ctx);
        }
    }

    fn close(&self, container: &mut Container, ctx: &mut InventoryContext) {
        if let Some(holder) = self.holder() {
            holder.close(container, ctx);
        }
    }

    fn update_property(&self, _container: &mut Container, _ctx: &mut InventoryContext, _key: i16, _value: i16) {}

    fn update_inventory(&self, window: &mut Window, ctx: &mut InventoryContext) {
        self.updater().update_inventory(self, window, ctx);
    }

    fn update_slot(&self, window: &mut Window, ctx: &mut InventoryContext, slot: usize) {
        self.updater().update_slot(self, window, ctx, slot);
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        base_bedrock_slot_to_java(self.size(), slot)
    }

    /// Index the client uses for Java slot `slot` in inventory content packets.
    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        if slot < self.size() {
            return slot as i32;
        }
        java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot))
    }

    /// Region and index the client uses for Java slot `slot` in stack responses.
    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        base_java_slot_to_bedrock_container(self.size(), slot, ContainerSlotType::LevelEntity)
    }

    fn slot_type(&self, _slot: usize) -> SlotType {
        SlotType::Normal
    }

    /// Slots in the crafting grid, for windows that craft.
    fn grid_size(&self) -> Option<usize> {
        None
    }

    /// Clicks on this slot make the server bump its state id an extra time.
    fn is_crafting_grid(&self, _slot: usize) -> bool {
        false
    }

    /// Vetoes moving `item` between two slots the client allows but Java does not.
    fn should_reject_item_place(
        &self,
        _ctx: &InventoryContext,
        _item: &ItemStack,
        _source: BedrockContainerSlot,
        _destination: BedrockContainerSlot,
    ) -> bool {
        false
    }

    /// Routes requests starting with `action` to [`Self::translate_special_request`].
    fn should_handle_request_first(&self, _action: &ItemStackRequestAction, _window: &Window) -> bool {
        false
    }

    fn translate_special_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        request::translate_request(self, window, ctx, request, Vec::new())
    }

    fn translate_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        request::translate_request(self, window, ctx, request, Vec::new())
    }

    fn translate_crafting_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        request::translate_crafting_request(self, window, ctx, request)
    }

    fn translate_auto_crafting_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        request::translate_auto_crafting_request(self, window, ctx, request)
    }

    fn translate_creative_request(
        &self,
        _window: &mut Window,
        _ctx: &mut InventoryContext,
        _request: &ItemStackRequest,
    ) -> TranslateResult {
        Err(InventoryError::UnsupportedAction("CRAFT_CREATIVE"))
    }
}

/// Player storage regions map around the container part; everything else is
/// the container's own slot numbering.
pub fn base_bedrock_slot_to_java(size: usize, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
    if slot.container.is_player_storage() {
        return storage_to_java(size, slot.slot)
            .ok_or(InventoryError::InvalidSlot(slot.container, slot.slot));
    }
    Ok(usize::from(slot.slot))
}

pub fn base_java_slot_to_bedrock_container(
    size: usize,
    slot: usize,
    container: ContainerSlotType,
) -> BedrockContainerSlot {
    if slot < size {
        return BedrockContainerSlot::new(container, slot as u8);
    }
    java_to_storage(size, slot).unwrap_or(BedrockContainerSlot::new(container, slot as u8))
}

/// Read-only lookup of the translator for each window kind, shared by every session.
pub struct TranslatorRegistry {
    translators: HashMap<WindowType, Box<dyn InventoryTranslator>>,
    player: player::PlayerTranslator,
}

impl Default for TranslatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslatorRegistry {
    pub fn new() -> Self {
        let mut translators: HashMap<WindowType, Box<dyn InventoryTranslator>> = HashMap::new();
        for window_type in [
            WindowType::Generic9x1,
            WindowType::Generic9x2,
            WindowType::Generic9x3,
            WindowType::Generic9x4,
            WindowType::Generic9x5,
            WindowType::Generic9x6,
        ] {
            let Some(rows) = window_type.chest_rows() else {
                continue;
            };
            // the client only has single and double chest screens
            let translator: Box<dyn InventoryTranslator> = if rows <= 3 {
                Box::new(generic::GenericTranslator::chest(rows * 9))
            } else {
                Box::new(double_chest::DoubleChestTranslator::new(rows * 9))
            };
            translators.insert(window_type, translator);
        }
        translators.insert(WindowType::Generic3x3, Box::new(generic::GenericTranslator::dispenser()));
        translators.insert(WindowType::Hopper, Box::new(generic::GenericTranslator::hopper()));
        translators.insert(WindowType::ShulkerBox, Box::new(generic::GenericTranslator::shulker_box()));
        translators.insert(WindowType::Crafter3x3, Box::new(crafter::CrafterTranslator));
        translators.insert(WindowType::Anvil, Box::new(anvil::AnvilTranslator));
        translators.insert(WindowType::Beacon, Box::new(beacon::BeaconTranslator));
        translators.insert(WindowType::BrewingStand, Box::new(brewing::BrewingStandTranslator));
        translators.insert(WindowType::CraftingTable, Box::new(crafting::CraftingTableTranslator));
        translators.insert(WindowType::EnchantmentTable, Box::new(enchanting::EnchantingTranslator));
        translators.insert(WindowType::Furnace, Box::new(furnace::FurnaceTranslator::furnace()));
        translators.insert(WindowType::BlastFurnace, Box::new(furnace::FurnaceTranslator::blast_furnace()));
        translators.insert(WindowType::Smoker, Box::new(furnace::FurnaceTranslator::smoker()));
        translators.insert(WindowType::Grindstone, Box::new(grindstone::GrindstoneTranslator));
        translators.insert(WindowType::Lectern, Box::new(lectern::LecternTranslator));
        translators.insert(WindowType::Loom, Box::new(loom::LoomTranslator));
        translators.insert(WindowType::Merchant, Box::new(merchant::MerchantTranslator));
        translators.insert(WindowType::SmithingTable, Box::new(smithing::SmithingTableTranslator));
        translators.insert(WindowType::CartographyTable, Box::new(cartography::CartographyTranslator));
        translators.insert(WindowType::Stonecutter, Box::new(stonecutter::StonecutterTranslator));
        Self {
            translators,
            player: player::PlayerTranslator,
        }
    }

    /// Uses the three slot smithing table of servers before 1.20.
    pub fn with_legacy_smithing(mut self) -> Self {
        self.translators.insert(
            WindowType::SmithingTable,
            Box::new(smithing::OldSmithingTableTranslator),
        );
        self
    }

    pub fn get(&self, window_type: WindowType) -> Option<&dyn InventoryTranslator> {
        self.translators.get(&window_type).map(Box::as_ref)
    }

    pub fn player(&self) -> &player::PlayerTranslator {
        &self.player
    }
}
