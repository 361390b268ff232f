use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Inventory translation switches, handed to every session.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct InventoryConfig {
    /// Delay before a double chest made of placeholder blocks is opened,
    /// so the client has rendered both halves.
    pub double_chest_open_delay_ms: u64,
    /// Delay before trades are sent again after the merchant window opened.
    pub merchant_resync_delay_ms: u64,
    /// Click packets carry the predicted cursor and state id, as 1.17.1+ servers expect.
    pub emulate_post_1_16_logic: bool,
    /// Logs the full request and cached slots whenever a request is rejected.
    pub dump_rejected_requests: bool,
    /// Open block containers with client-side placeholder blocks when the
    /// player is not looking at a matching block.
    pub use_placeholder_blocks: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            double_chest_open_delay_ms: 200,
            merchant_resync_delay_ms: 100,
            emulate_post_1_16_logic: true,
            dump_rejected_requests: false,
            use_placeholder_blocks: true,
        }
    }
}

impl InventoryConfig {
    pub fn double_chest_open_delay(&self) -> Duration {
        Duration::from_millis(self.double_chest_open_delay_ms)
    }

    pub fn merchant_resync_delay(&self) -> Duration {
        Duration::from_millis(self.merchant_resync_delay_ms)
    }

    pub(crate) fn validate(&self) {
        assert!(
            self.double_chest_open_delay_ms <= 5_000,
            "double_chest_open_delay_ms must be at most 5000"
        );
        assert!(
            self.merchant_resync_delay_ms <= 5_000,
            "merchant_resync_delay_ms must be at most 5000"
        );
    }
}
