use lantern_macros::packet;
use serde::Serialize;

use crate::bedrock::ItemStackResponse;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[packet(0x94)]
pub struct CItemStackResponse {
    pub entries: Vec<ItemStackResponse>,
}

impl CItemStackResponse {
    pub fn new(entries: Vec<ItemStackResponse>) -> Self {
        Self { entries }
    }
}
