use lantern_macros::packet;
use serde::Serialize;

use crate::bedrock::ItemData;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x31)]
pub struct CInventoryContent {
    pub container_id: i32,
    pub contents: Vec<ItemData>,
    /// Bundle id when `container_id` is the dynamic container.
    pub dynamic_id: Option<i32>,
}

impl CInventoryContent {
    pub fn new(container_id: i32, contents: Vec<ItemData>) -> Self {
        Self {
            container_id,
            contents,
            dynamic_id: None,
        }
    }

    pub fn dynamic(bundle_id: i32, contents: Vec<ItemData>) -> Self {
        Self {
            container_id: i32::from(crate::bedrock::container_id::DYNAMIC),
            contents,
            dynamic_id: Some(bundle_id),
        }
    }
}
