use lantern_protocol::{
    bedrock::{
        client::{CInventoryContent, CInventorySlot},
        container_id, ItemData,
    },
    java::server::SRenameItem,
};

use crate::{
    container::ContainerState,
    context::InventoryContext,
    slot::{storage_to_java, PLAYER_INVENTORY_SIZE},
    translator::{bundle, InventoryTranslator},
    window::Window,
};

/// Slot the client shows crafting and anvil results in.
pub const RESULT_SLOT: u32 = 50;

/// How a window's contents are pushed to the client.
///
/// The player's storage always goes out as the client's inventory container;
/// the variants differ in how the container's own slots are sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Updater {
    /// One content packet for the container window.
    Container,
    /// Like [`Updater::Container`], padded with air to the size the client's chest UI expects.
    PaddedChest(usize),
    /// One slot packet per own slot, into the client's UI container.
    Ui,
    /// UI style, skipping the result slot. Also clears the rename field when the input changes.
    Anvil,
    /// The grid as window content, the result as its own slot.
    Crafter,
}

impl Updater {
    pub fn update_inventory<T: InventoryTranslator + ?Sized>(
        self,
        translator: &T,
        window: &mut Window,
        ctx: &mut InventoryContext,
    ) {
        let size = translator.size();
        send_player_storage(size, window, ctx);
        let bedrock_id = i32::from(window.bedrock_id());
        match self {
            Self::Container | Self::PaddedChest(_) | Self::Crafter => {
                let grid = if self == Self::Crafter { size.min(9) } else { size };
                let mut contents: Vec<ItemData> =
                    (0..grid).map(|slot| ctx.item_data(window.item(slot))).collect();
                if let Self::PaddedChest(padded) = self {
                    contents.resize(padded.max(grid), ItemData::AIR);
                }
                ctx.send_bedrock(CInventoryContent::new(bedrock_id, contents));
                if self == Self::Crafter {
                    let result = ctx.item_data(window.item(size + PLAYER_INVENTORY_SIZE));
                    ctx.send_bedrock(CInventorySlot::new(bedrock_id, RESULT_SLOT, result));
                }
            }
            Self::Ui => {
                for slot in 0..size {
                    send_ui_slot(translator, window, ctx, slot);
                }
            }
            Self::Anvil => {
                check_anvil_input(window, ctx);
                for slot in 0..size {
                    if bedrock_index(translator, slot) != Some(RESULT_SLOT) {
                        send_ui_slot(translator, window, ctx, slot);
                    }
                }
            }
        }
        for slot in 0..window.len() {
            bundle::send_contents(ctx, window.item(slot));
        }
    }

    pub fn update_slot<T: InventoryTranslator + ?Sized>(
        self,
        translator: &T,
        window: &mut Window,
        ctx: &mut InventoryContext,
        slot: usize,
    ) {
        let size = translator.size();
        if (size..size + PLAYER_INVENTORY_SIZE).contains(&slot) {
            if let Some(index) = bedrock_index(translator, slot) {
                let item = ctx.item_data(window.item(slot));
                ctx.send_bedrock(CInventorySlot::new(
                    i32::from(container_id::INVENTORY),
                    index,
                    item,
                ));
            }
        } else {
            match self {
                Self::Container | Self::PaddedChest(_) | Self::Crafter => {
                    if let Some(index) = bedrock_index(translator, slot) {
                        let item = ctx.item_data(window.item(slot));
                        ctx.send_bedrock(CInventorySlot::new(i32::from(window.bedrock_id()), index, item));
                    }
                }
                Self::Ui => send_ui_slot(translator, window, ctx, slot),
                Self::Anvil => {
                    check_anvil_input(window, ctx);
                    send_ui_slot(translator, window, ctx, slot);
                }
            }
        }
        bundle::send_contents(ctx, window.item(slot));
    }
}

fn bedrock_index<T: InventoryTranslator + ?Sized>(translator: &T, slot: usize) -> Option<u32> {
    u32::try_from(translator.java_slot_to_bedrock(slot)).ok()
}

/// The client numbers its inventory hotbar first; each index is looked up in the window.
fn send_player_storage(size: usize, window: &Window, ctx: &mut InventoryContext) {
    let contents = (0..PLAYER_INVENTORY_SIZE as u8)
        .map(|index| {
            storage_to_java(size, index)
                .map_or(ItemData::AIR, |slot| ctx.item_data(window.item(slot)))
        })
        .collect();
    ctx.send_bedrock(CInventoryContent::new(
        i32::from(container_id::INVENTORY),
        contents,
    ));
}

fn send_ui_slot<T: InventoryTranslator + ?Sized>(
    translator: &T,
    window: &Window,
    ctx: &mut InventoryContext,
    slot: usize,
) {
    let Some(index) = bedrock_index(translator, slot) else {
        return;
    };
    let item = ctx.item_data(window.item(slot));
    ctx.send_bedrock(CInventorySlot::new(i32::from(container_id::UI), index, item));
}

/// A new anvil input resets the client's name field without it telling us.
fn check_anvil_input(window: &mut Window, ctx: &mut InventoryContext) {
    let input = window.item(0).clone();
    let Some(ContainerState::Anvil(anvil)) = window.container_mut().map(|container| &mut container.state)
    else {
        return;
    };
    if anvil.last_input == input {
        return;
    }
    anvil.last_input = input;
    anvil.use_java_level_cost = false;
    anvil.new_name = None;
    ctx.send_java(SRenameItem::new(""));
}
