use std::{collections::HashMap, ops::Range, sync::Arc, time::Duration};

use lantern_config::InventoryConfig;
use lantern_core::{
    item::ItemRegistry,
    math::{BlockPos, Vector3},
    GameMode, ItemStack,
};
use lantern_protocol::{
    bedrock::{self, client::CUpdateTrade, ItemData},
    java, BedrockSink, JavaSink,
};

/// Converts stacks between the two item spaces. May be lossy.
pub trait ItemTranslator: Send + Sync {
    fn to_bedrock(&self, stack: &ItemStack) -> ItemData;

    fn to_java(&self, item: &ItemData) -> ItemStack;

    /// Durability the client shows for this stack.
    fn durability(&self, _stack: &ItemStack) -> i32 {
        0
    }

    /// Custom name as plain text, without formatting.
    fn custom_name(&self, _stack: &ItemStack) -> Option<String> {
        None
    }

    fn bedrock_enchantment(&self, _java_enchantment: i32) -> Option<i32> {
        None
    }

    fn enchantment_name(&self, _java_enchantment: i32) -> Option<String> {
        None
    }

    /// Pages of a written or writable book.
    fn book_page_count(&self, _book: &ItemStack) -> i32 {
        0
    }

    /// Contents of a bundle-like item, read from its data components.
    fn bundle_contents(&self, _slot: &java::Slot) -> Option<Vec<java::Slot>> {
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockState {
    /// Java block identifier without properties, e.g. `minecraft:chest`.
    pub identifier: String,
    pub properties: Vec<(String, String)>,
    /// The client's runtime id for this exact state.
    pub runtime_id: u32,
}

impl BlockState {
    pub fn is(&self, identifier: &str) -> bool {
        self.identifier == identifier
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The block the player last used, and where they stood when they did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interaction {
    pub block: BlockPos,
    pub player_position: Vector3<f64>,
}

/// The slice of world state block-backed containers need.
pub trait WorldAccess: Send {
    fn block_at(&self, position: BlockPos) -> BlockState;

    /// Runtime id of the client-side block standing in for a container, e.g.
    /// `minecraft:furnace[facing=north,lit=false]`.
    fn placeholder_runtime_id(&self, block: &str) -> u32;

    fn player_position(&self) -> Vector3<f64>;

    fn last_interaction(&self) -> Option<Interaction>;

    fn height_range(&self) -> Range<i32>;

    fn player_entity_id(&self) -> i64;

    /// Allocates an id for a client-side-only entity.
    fn next_entity_id(&mut self) -> i64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecipeShape {
    Shaped { width: usize, height: usize },
    Shapeless,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CraftingRecipe {
    pub shape: RecipeShape,
    /// Row-major for shaped recipes; `None` marks an empty cell.
    pub ingredients: Vec<Option<i32>>,
    pub output: ItemStack,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StonecutterRecipe {
    pub button: u8,
    pub output: ItemStack,
}

/// Recipes advertised to the client, keyed by the net id it echoes back.
#[derive(Debug, Default)]
pub struct RecipeBook {
    pub crafting: HashMap<u32, CraftingRecipe>,
    pub stonecutter: HashMap<u32, StonecutterRecipe>,
    /// Creative item `n` is addressed by the client as net id `n + 1`.
    pub creative_items: Vec<ItemData>,
}

/// Per-session net id and bundle id counters.
#[derive(Debug)]
pub struct NetIds {
    next_item: i32,
    next_bundle: i32,
}

impl Default for NetIds {
    fn default() -> Self {
        // net id 1 is the refresh marker
        Self {
            next_item: 2,
            next_bundle: 1,
        }
    }
}

impl NetIds {
    pub fn next_item(&mut self) -> i32 {
        let id = self.next_item;
        self.next_item += 1;
        id
    }

    pub fn next_bundle(&mut self) -> i32 {
        let id = self.next_bundle;
        self.next_bundle += 1;
        id
    }

    /// Gives `new` its identity before it replaces `old` in a slot.
    ///
    /// The same item keeps its net id and bundle id; anything else is a new stack.
    pub fn assign(&mut self, old: &ItemStack, new: &mut ItemStack) {
        if new.is_empty() {
            return;
        }
        let same_item = !old.is_empty() && old.item_id == new.item_id;
        if same_item {
            new.net_id = old.net_id;
        } else {
            new.net_id = self.next_item();
        }
        let Some(bundle) = new.bundle.as_mut() else {
            return;
        };
        bundle.bundle_id = match &old.bundle {
            Some(old_bundle) if same_item && old_bundle.bundle_id >= 0 => old_bundle.bundle_id,
            _ => self.next_bundle(),
        };
        let mut previous: Vec<&ItemStack> = if same_item {
            old.bundle_contents().iter().collect()
        } else {
            Vec::new()
        };
        for content in &mut bundle.contents {
            let matching = previous
                .iter()
                .position(|candidate| candidate.item_id == content.item_id);
            let old_content = matching.map(|index| previous.remove(index));
            self.assign(old_content.unwrap_or(&ItemStack::EMPTY), content);
        }
    }
}

/// Work to run later on the session loop, cancelled when its window closes.
#[derive(Clone, Debug, PartialEq)]
pub struct Deferred {
    pub window_id: u8,
    pub delay: Duration,
    pub action: DeferredAction,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeferredAction {
    /// Open a window whose placeholder blocks needed time to render.
    OpenWindow,
    ResendTrades(CUpdateTrade),
}

/// Everything a translator needs besides the inventories themselves.
pub struct InventoryContext {
    pub config: InventoryConfig,
    pub registry: Arc<ItemRegistry>,
    pub items: Arc<dyn ItemTranslator>,
    pub world: Box<dyn WorldAccess>,
    pub recipes: RecipeBook,
    pub game_mode: GameMode,
    /// Dump request details on rejects.
    pub debug: bool,
    pub net_ids: NetIds,
    java: Box<dyn JavaSink>,
    bedrock: Box<dyn BedrockSink>,
    deferred: Vec<Deferred>,
}

impl InventoryContext {
    pub fn new(
        config: InventoryConfig,
        registry: Arc<ItemRegistry>,
        items: Arc<dyn ItemTranslator>,
        world: Box<dyn WorldAccess>,
        java: Box<dyn JavaSink>,
        bedrock: Box<dyn BedrockSink>,
    ) -> Self {
        Self {
            debug: config.dump_rejected_requests,
            config,
            registry,
            items,
            world,
            recipes: RecipeBook::default(),
            game_mode: GameMode::Survival,
            net_ids: NetIds::default(),
            java,
            bedrock,
            deferred: Vec::new(),
        }
    }

    pub fn send_java(&mut self, packet: impl Into<java::server::Serverbound>) {
        self.java.send_java(packet.into());
    }

    pub fn send_bedrock(&mut self, packet: impl Into<bedrock::client::Clientbound>) {
        self.bedrock.send_bedrock(packet.into());
    }

    /// The client's view of `stack`, tagged with its net id.
    pub fn item_data(&self, stack: &ItemStack) -> ItemData {
        if stack.is_empty() {
            return ItemData::AIR;
        }
        ItemData {
            net_id: stack.net_id,
            ..self.items.to_bedrock(stack)
        }
    }

    /// The bridge's stack for an item the server sent.
    pub fn java_stack(&self, slot: &java::Slot) -> ItemStack {
        if slot.is_empty() {
            return ItemStack::EMPTY;
        }
        let max_stack_size = self
            .registry
            .get(slot.item_id)
            .map_or(64, |definition| definition.max_stack_size);
        let stack = ItemStack::new(slot.item_id, slot.item_count, max_stack_size)
            .with_extra_data(slot.components.clone());
        match self.items.bundle_contents(slot) {
            Some(contents) => stack.with_bundle(contents.iter().map(|content| self.java_stack(content)).collect()),
            None => stack,
        }
    }

    pub fn defer(&mut self, window_id: u8, delay: Duration, action: DeferredAction) {
        self.deferred.push(Deferred {
            window_id,
            delay,
            action,
        });
    }

    /// Deferred work queued since the last call, for the session to schedule.
    pub fn take_deferred(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.deferred)
    }
}
