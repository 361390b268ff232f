use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ItemStack;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: i32,
    /// Namespaced identifier, e.g. `minecraft:blue_dye`.
    pub identifier: String,
    pub max_stack_size: u32,
}

/// Read-only table of Java item definitions, built once and shared by every session.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    by_id: HashMap<i32, ItemDefinition>,
    by_identifier: HashMap<String, i32>,
}

impl ItemRegistry {
    pub fn new(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut registry = Self::default();
        for definition in definitions {
            registry
                .by_identifier
                .insert(definition.identifier.clone(), definition.id);
            registry.by_id.insert(definition.id, definition);
        }
        registry
    }

    pub fn get(&self, id: i32) -> Option<&ItemDefinition> {
        self.by_id.get(&id)
    }

    pub fn by_identifier(&self, identifier: &str) -> Option<&ItemDefinition> {
        self.by_identifier
            .get(identifier)
            .and_then(|id| self.by_id.get(id))
    }

    /// Identifier of the stack's item, `minecraft:air` for empty stacks.
    pub fn identifier_of(&self, stack: &ItemStack) -> &str {
        if stack.is_empty() {
            return "minecraft:air";
        }
        self.get(stack.item_id)
            .map_or("minecraft:air", |definition| definition.identifier.as_str())
    }

    pub fn is(&self, stack: &ItemStack, identifier: &str) -> bool {
        !stack.is_empty() && self.identifier_of(stack) == identifier
    }

    /// Builds a stack of the named item; `None` for unknown identifiers.
    pub fn stack(&self, identifier: &str, count: u32) -> Option<ItemStack> {
        self.by_identifier(identifier)
            .map(|definition| ItemStack::new(definition.id, count, definition.max_stack_size))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
