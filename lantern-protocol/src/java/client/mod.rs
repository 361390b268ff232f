mod c_close_container;
mod c_merchant_offers;
mod c_open_screen;
mod c_set_container_content;
mod c_set_container_property;
mod c_set_container_slot;

pub use c_close_container::*;
pub use c_merchant_offers::*;
pub use c_open_screen::*;
pub use c_set_container_content::*;
pub use c_set_container_property::*;
pub use c_set_container_slot::*;

/// Container packets the Java server sends, as handed to the bridge.
#[derive(Clone, Debug, derive_more::From)]
pub enum Clientbound {
    OpenScreen(COpenScreen),
    SetContainerSlot(CSetContainerSlot),
    SetContainerContent(CSetContainerContent),
    SetContainerProperty(CSetContainerProperty),
    CloseContainer(CCloseContainer),
    MerchantOffers(CMerchantOffers),
}
