mod s_click_container;
mod s_close_container;
mod s_container_button_click;
mod s_rename_item;
mod s_select_bundle_item;
mod s_select_trade;
mod s_set_beacon;
mod s_set_creative_slot;

pub use s_click_container::*;
pub use s_close_container::*;
pub use s_container_button_click::*;
pub use s_rename_item::*;
pub use s_select_bundle_item::*;
pub use s_select_trade::*;
pub use s_set_beacon::*;
pub use s_set_creative_slot::*;

/// Everything the bridge sends to the Java server on the player's behalf.
#[derive(Clone, Debug, PartialEq, derive_more::From)]
pub enum Serverbound {
    ClickContainer(SClickContainer),
    SetCreativeSlot(SSetCreativeSlot),
    CloseContainer(SCloseContainer),
    ContainerButtonClick(SContainerButtonClick),
    RenameItem(SRenameItem),
    SetBeacon(SSetBeacon),
    SelectBundleItem(SSelectBundleItem),
    SelectTrade(SSelectTrade),
}
