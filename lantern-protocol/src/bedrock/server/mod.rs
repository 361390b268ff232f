mod s_container_close;
mod s_item_stack_request;

pub use s_container_close::*;
pub use s_item_stack_request::*;

/// Inventory packets the Bedrock client sends.
#[derive(Clone, Debug, derive_more::From)]
pub enum Serverbound {
    ItemStackRequest(SItemStackRequest),
    ContainerClose(SContainerClose),
}
