mod c_add_entity;
mod c_block_entity_data;
mod c_container_close;
mod c_container_open;
mod c_container_set_data;
mod c_inventory_content;
mod c_inventory_slot;
mod c_item_stack_response;
mod c_player_enchant_options;
mod c_remove_entity;
mod c_update_block;
mod c_update_trade;

pub use c_add_entity::*;
pub use c_block_entity_data::*;
pub use c_container_close::*;
pub use c_container_open::*;
pub use c_container_set_data::*;
pub use c_inventory_content::*;
pub use c_inventory_slot::*;
pub use c_item_stack_response::*;
pub use c_player_enchant_options::*;
pub use c_remove_entity::*;
pub use c_update_block::*;
pub use c_update_trade::*;

/// Everything the inventory layer sends to the Bedrock client.
#[derive(Clone, Debug, PartialEq, derive_more::From)]
pub enum Clientbound {
    ItemStackResponse(CItemStackResponse),
    InventoryContent(CInventoryContent),
    InventorySlot(CInventorySlot),
    ContainerOpen(CContainerOpen),
    ContainerClose(CContainerClose),
    ContainerSetData(CContainerSetData),
    UpdateBlock(CUpdateBlock),
    BlockEntityData(CBlockEntityData),
    PlayerEnchantOptions(CPlayerEnchantOptions),
    UpdateTrade(CUpdateTrade),
    AddEntity(CAddEntity),
    RemoveEntity(CRemoveEntity),
}
