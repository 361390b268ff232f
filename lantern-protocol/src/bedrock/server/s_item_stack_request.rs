use lantern_macros::packet;
use serde::Deserialize;

use crate::bedrock::ItemStackRequest;

#[derive(Clone, Debug, Deserialize)]
#[packet(0x93)]
pub struct SItemStackRequest {
    pub requests: Vec<ItemStackRequest>,
}

impl SItemStackRequest {
    pub fn new(requests: Vec<ItemStackRequest>) -> Self {
        Self { requests }
    }
}
