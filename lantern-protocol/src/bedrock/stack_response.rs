use serde::{Deserialize, Serialize};

use super::{ContainerSlotType, ItemStackRequest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStackResponseStatus {
    Ok,
    Error,
}

/// Post-request content of one slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStackResponseSlot {
    pub slot: u8,
    pub hotbar_slot: u8,
    pub count: u8,
    pub stack_network_id: i32,
    pub custom_name: String,
    pub durability: i32,
}

impl ItemStackResponseSlot {
    pub fn empty(slot: u8) -> Self {
        Self {
            slot,
            hotbar_slot: slot,
            count: 0,
            stack_network_id: 0,
            custom_name: String::new(),
            durability: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStackResponseContainer {
    pub container: ContainerSlotType,
    pub items: Vec<ItemStackResponseSlot>,
    /// Bundle id for dynamic containers.
    pub dynamic_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStackResponse {
    pub result: ItemStackResponseStatus,
    pub request_id: i32,
    pub containers: Vec<ItemStackResponseContainer>,
}

impl ItemStackResponse {
    pub fn accept(request: &ItemStackRequest, containers: Vec<ItemStackResponseContainer>) -> Self {
        Self {
            result: ItemStackResponseStatus::Ok,
            request_id: request.request_id,
            containers,
        }
    }

    pub fn error(request: &ItemStackRequest) -> Self {
        Self {
            result: ItemStackResponseStatus::Error,
            request_id: request.request_id,
            containers: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result == ItemStackResponseStatus::Ok
    }

    /// The entry for `container`, if the response carries one.
    pub fn container(&self, container: ContainerSlotType) -> Option<&ItemStackResponseContainer> {
        self.containers
            .iter()
            .find(|entry| entry.container == container)
    }
}
