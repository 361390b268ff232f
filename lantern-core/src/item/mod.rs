use bytes::Bytes;

mod bundle;
mod registry;

pub use bundle::{calculate_bundle_weight, capacity_for_item, item_weight, BUNDLE_IN_BUNDLE_WEIGHT};
pub use registry::{ItemDefinition, ItemRegistry};

/// Item id of the empty stack.
pub const AIR: i32 = 0;

/// The contents of a bundle-like item, in server order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BundleData {
    /// Session-unique id the Bedrock client uses to address this bundle's contents,
    /// `-1` until one is assigned.
    pub bundle_id: i32,
    pub contents: Vec<ItemStack>,
}

/// One stack of items.
///
/// The stack is in the authoritative (Java) item space; the net id is the
/// identity tag handed to the Bedrock client for this stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    pub item_id: i32,
    pub count: u32,
    pub max_stack_size: u32,
    /// Components, enchantments, custom data. Carried, never interpreted.
    pub extra_data: Bytes,
    pub net_id: i32,
    pub bundle: Option<BundleData>,
    /// Bee-carrying items weigh a whole bundle.
    pub has_bees: bool,
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl ItemStack {
    pub const EMPTY: ItemStack = ItemStack {
        item_id: AIR,
        count: 0,
        max_stack_size: 0,
        extra_data: Bytes::new(),
        net_id: 0,
        bundle: None,
        has_bees: false,
    };

    pub fn new(item_id: i32, count: u32, max_stack_size: u32) -> Self {
        if item_id == AIR || count == 0 {
            return Self::EMPTY;
        }
        Self {
            item_id,
            count,
            max_stack_size,
            ..Self::EMPTY
        }
    }

    pub fn with_extra_data(mut self, extra_data: impl Into<Bytes>) -> Self {
        self.extra_data = extra_data.into();
        self
    }

    pub fn with_bundle(mut self, contents: Vec<ItemStack>) -> Self {
        self.bundle = Some(BundleData {
            bundle_id: -1,
            contents,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.item_id == AIR
    }

    pub fn is_bundle(&self) -> bool {
        self.bundle.is_some()
    }

    /// Bundle id, or `-1` for anything that is not a bundle.
    pub fn bundle_id(&self) -> i32 {
        self.bundle.as_ref().map_or(-1, |bundle| bundle.bundle_id)
    }

    pub fn bundle_contents(&self) -> &[ItemStack] {
        self.bundle
            .as_ref()
            .map_or(&[][..], |bundle| bundle.contents.as_slice())
    }

    pub fn bundle_contents_mut(&mut self) -> Option<&mut Vec<ItemStack>> {
        self.bundle.as_mut().map(|bundle| &mut bundle.contents)
    }

    /// A copy of this stack holding `count` items. Keeps the net id.
    pub fn copy_with_count(&self, count: u32) -> ItemStack {
        if self.item_id == AIR || count == 0 {
            return Self::EMPTY;
        }
        ItemStack {
            count,
            ..self.clone()
        }
    }

    pub fn add(&mut self, amount: u32) {
        if self.item_id != AIR {
            self.count += amount;
        }
    }

    /// Removes up to `amount` items; a stack that runs out becomes [`ItemStack::EMPTY`].
    pub fn sub(&mut self, amount: u32) {
        self.set_count(self.count.saturating_sub(amount));
    }

    pub fn set_count(&mut self, count: u32) {
        if count == 0 {
            *self = Self::EMPTY;
        } else {
            self.count = count;
        }
    }

    /// Same item and same extra data. Empty stacks are never the same item.
    pub fn is_same_item(&self, other: &ItemStack) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.item_id == other.item_id
            && self.extra_data == other.extra_data
    }

    /// `other` could be merged onto this stack: same item, and this stack still has room.
    pub fn can_stack_with(&self, other: &ItemStack) -> bool {
        self.is_same_item(other) && self.count < self.max_stack_size
    }

    /// Items still fitting on this stack before it reaches its maximum.
    pub fn room(&self) -> u32 {
        self.max_stack_size.saturating_sub(self.count)
    }
}
