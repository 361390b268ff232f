//! Recording sinks, a flat world and request builders for translator tests.

use std::{ops::Range, sync::Arc};

use lantern_config::InventoryConfig;
use lantern_core::{
    item::{ItemDefinition, ItemRegistry},
    math::{BlockPos, Vector3},
    ItemStack,
};
use lantern_protocol::{
    bedrock::{
        self, ContainerSlotType, ItemData, ItemStackRequest, ItemStackRequestAction,
        ItemStackRequestSlotData,
    },
    java, BedrockSink, JavaSink,
};
use parking_lot::Mutex;

use crate::context::{BlockState, Interaction, InventoryContext, ItemTranslator, WorldAccess};

pub const STONE: i32 = 1;
pub const DIRT: i32 = 2;
pub const PLANKS: i32 = 3;
pub const ENDER_PEARL: i32 = 4;
pub const CRAFTING_TABLE: i32 = 5;
pub const STICK: i32 = 6;
pub const SWORD: i32 = 7;
pub const BANNER: i32 = 8;
pub const BUNDLE: i32 = 9;
pub const BLUE_DYE: i32 = 10;
pub const LAPIS: i32 = 11;
pub const WRITTEN_BOOK: i32 = 12;
pub const MAP: i32 = 13;
pub const FILLED_MAP: i32 = 14;
pub const EMERALD: i32 = 15;
pub const STONE_SLAB: i32 = 16;
pub const BLAZE_POWDER: i32 = 17;
pub const PAPER: i32 = 18;
pub const UPGRADE_TEMPLATE: i32 = 19;

const ITEMS: &[(i32, &str, u32)] = &[
    (STONE, "minecraft:stone", 64),
    (DIRT, "minecraft:dirt", 64),
    (PLANKS, "minecraft:oak_planks", 64),
    (ENDER_PEARL, "minecraft:ender_pearl", 16),
    (CRAFTING_TABLE, "minecraft:crafting_table", 64),
    (STICK, "minecraft:stick", 64),
    (SWORD, "minecraft:diamond_sword", 1),
    (BANNER, "minecraft:white_banner", 16),
    (BUNDLE, "minecraft:bundle", 1),
    (BLUE_DYE, "minecraft:blue_dye", 64),
    (LAPIS, "minecraft:lapis_lazuli", 64),
    (WRITTEN_BOOK, "minecraft:written_book", 16),
    (MAP, "minecraft:map", 64),
    (FILLED_MAP, "minecraft:filled_map", 64),
    (EMERALD, "minecraft:emerald", 64),
    (STONE_SLAB, "minecraft:stone_slab", 64),
    (BLAZE_POWDER, "minecraft:blaze_powder", 64),
    (PAPER, "minecraft:paper", 64),
    (UPGRADE_TEMPLATE, "minecraft:netherite_upgrade_smithing_template", 64),
];

/// `count` of item `id`, stacking to 64.
pub fn stack(id: i32, count: u32) -> ItemStack {
    ItemStack::new(id, count, 64)
}

pub fn registry() -> ItemRegistry {
    ItemRegistry::new(ITEMS.iter().map(|&(id, identifier, max_stack_size)| ItemDefinition {
        id,
        identifier: identifier.to_string(),
        max_stack_size,
    }))
}

/// Packets sent through a sink, shared with the test.
pub struct Recorder<T>(Arc<Mutex<Vec<T>>>);

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }
}

impl<T> Recorder<T> {
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.0.lock())
    }
}

impl JavaSink for Recorder<java::server::Serverbound> {
    fn send_java(&mut self, packet: java::server::Serverbound) {
        self.0.lock().push(packet);
    }
}

impl BedrockSink for Recorder<bedrock::client::Clientbound> {
    fn send_bedrock(&mut self, packet: bedrock::client::Clientbound) {
        self.0.lock().push(packet);
    }
}

/// Item data mirrors the Java stack; `name:` extra data is a custom name.
pub struct IdentityItems {
    registry: Arc<ItemRegistry>,
}

impl ItemTranslator for IdentityItems {
    fn to_bedrock(&self, stack: &ItemStack) -> ItemData {
        ItemData {
            definition_id: stack.item_id,
            count: stack.count,
            tag: stack.extra_data.clone(),
            ..ItemData::AIR
        }
    }

    fn to_java(&self, item: &ItemData) -> ItemStack {
        let max_stack_size = self
            .registry
            .get(item.definition_id)
            .map_or(64, |definition| definition.max_stack_size);
        ItemStack::new(item.definition_id, item.count, max_stack_size).with_extra_data(item.tag.clone())
    }

    fn custom_name(&self, stack: &ItemStack) -> Option<String> {
        let name = stack.extra_data.strip_prefix(b"name:")?;
        Some(String::from_utf8_lossy(name).into_owned())
    }

    fn bedrock_enchantment(&self, java_enchantment: i32) -> Option<i32> {
        (java_enchantment >= 0).then_some(java_enchantment + 100)
    }

    fn book_page_count(&self, book: &ItemStack) -> i32 {
        if book.is_empty() {
            0
        } else {
            10
        }
    }
}

#[derive(Default)]
struct WorldState {
    blocks: Vec<(BlockPos, String)>,
    player_position: Vector3<f64>,
    interaction: Option<Interaction>,
    next_entity_id: i64,
}

/// A world of air, plus the blocks a test places.
#[derive(Clone)]
pub struct TestWorld(Arc<Mutex<WorldState>>);

impl TestWorld {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(WorldState {
            player_position: Vector3::new(0.5, 64.0, 0.5),
            next_entity_id: 1000,
            ..WorldState::default()
        })))
    }

    pub fn set_player_position(&self, position: Vector3<f64>) {
        self.0.lock().player_position = position;
    }

    pub fn set_block(&self, position: BlockPos, identifier: &str) {
        let mut state = self.0.lock();
        state.blocks.retain(|(block, _)| *block != position);
        state.blocks.push((position, identifier.to_string()));
    }

    /// The player uses the block at `position` from where they stand.
    pub fn interact(&self, position: BlockPos) {
        let mut state = self.0.lock();
        state.interaction = Some(Interaction {
            block: position,
            player_position: state.player_position,
        });
    }

    pub fn air_runtime_id(&self) -> u32 {
        runtime_id("minecraft:air")
    }
}

/// Stable fake runtime ids, derived from the block state string.
pub fn runtime_id(state: &str) -> u32 {
    if state == "minecraft:air" {
        return 0;
    }
    state
        .bytes()
        .fold(17u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(u32::from(byte)))
}

impl WorldAccess for TestWorld {
    fn block_at(&self, position: BlockPos) -> BlockState {
        let state = self.0.lock();
        let stored = state
            .blocks
            .iter()
            .find(|(block, _)| *block == position)
            .map_or("minecraft:air", |(_, identifier)| identifier.as_str());
        let (identifier, properties) = match stored.split_once('[') {
            Some((identifier, rest)) => (
                identifier,
                rest.trim_end_matches(']')
                    .split(',')
                    .filter_map(|pair| pair.split_once('='))
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
            ),
            None => (stored, Vec::new()),
        };
        BlockState {
            identifier: identifier.to_string(),
            properties,
            runtime_id: runtime_id(stored),
        }
    }

    fn placeholder_runtime_id(&self, block: &str) -> u32 {
        runtime_id(block)
    }

    fn player_position(&self) -> Vector3<f64> {
        self.0.lock().player_position
    }

    fn last_interaction(&self) -> Option<Interaction> {
        self.0.lock().interaction
    }

    fn height_range(&self) -> Range<i32> {
        -64..320
    }

    fn player_entity_id(&self) -> i64 {
        1
    }

    fn next_entity_id(&mut self) -> i64 {
        let mut state = self.0.lock();
        state.next_entity_id += 1;
        state.next_entity_id
    }
}

pub struct TestSession {
    pub ctx: InventoryContext,
    pub java: Recorder<java::server::Serverbound>,
    pub bedrock: Recorder<bedrock::client::Clientbound>,
    pub world: TestWorld,
}

impl TestSession {
    pub fn new() -> Self {
        Self::with_config(InventoryConfig::default())
    }

    pub fn with_config(config: InventoryConfig) -> Self {
        let registry = Arc::new(registry());
        let java = Recorder::default();
        let bedrock = Recorder::default();
        let world = TestWorld::new();
        let ctx = InventoryContext::new(
            config,
            registry.clone(),
            Arc::new(IdentityItems { registry }),
            Box::new(world.clone()),
            Box::new(java.clone()),
            Box::new(bedrock.clone()),
        );
        Self {
            ctx,
            java,
            bedrock,
            world,
        }
    }
}

pub fn slot(container: ContainerSlotType, slot: u8, net_id: i32) -> ItemStackRequestSlotData {
    ItemStackRequestSlotData::new(container, slot, net_id)
}

pub fn cursor(net_id: i32) -> ItemStackRequestSlotData {
    slot(ContainerSlotType::Cursor, 0, net_id)
}

pub fn take(count: u32, source: ItemStackRequestSlotData, destination: ItemStackRequestSlotData) -> ItemStackRequestAction {
    ItemStackRequestAction::Take {
        count,
        source,
        destination,
    }
}

pub fn place(count: u32, source: ItemStackRequestSlotData, destination: ItemStackRequestSlotData) -> ItemStackRequestAction {
    ItemStackRequestAction::Place {
        count,
        source,
        destination,
    }
}

pub fn request(actions: Vec<ItemStackRequestAction>) -> ItemStackRequest {
    ItemStackRequest::new(1, actions)
}

/// Total items in the window and on the cursor.
pub fn total_items(window: &crate::Window) -> u32 {
    (0..window.len()).map(|slot| window.item(slot).count).sum::<u32>() + window.cursor().count
}
