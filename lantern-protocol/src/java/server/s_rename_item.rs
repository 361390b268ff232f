use lantern_macros::packet;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[packet(0x2E)]
pub struct SRenameItem {
    pub item_name: String,
}

impl SRenameItem {
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
        }
    }
}
