use lantern_protocol::{
    bedrock::{
        client::CBlockEntityData, BedrockContainerType, BlockEntityData, ContainerSlotType, ItemStackRequest,
        ItemStackRequestAction, ItemStackRequestSlotData,
    },
    java::server::SSetBeacon,
};

use super::{
    base_bedrock_slot_to_java, base_java_slot_to_bedrock_container, request, InventoryTranslator,
    TranslateResult,
};
use crate::{
    container::{BeaconState, Container, ContainerState},
    context::InventoryContext,
    error::InventoryError,
    holder::BlockInventoryHolder,
    slot::BedrockContainerSlot,
    updater::Updater,
    window::Window,
    window_property::{Beacon, WindowProperty},
};

/// UI slot of the payment item.
const PAYMENT_SLOT: u8 = 27;

// the client draws the beacon screen from the block, so only a real one works
const HOLDER: BlockInventoryHolder =
    BlockInventoryHolder::new("minecraft:beacon", &["minecraft:beacon"], BedrockContainerType::Beacon)
        .real_block_only();

pub struct BeaconTranslator;

impl InventoryTranslator for BeaconTranslator {
    fn size(&self) -> usize {
        1
    }

    fn initial_state(&self) -> ContainerState {
        ContainerState::Beacon(BeaconState::default())
    }

    fn holder(&self) -> Option<&BlockInventoryHolder> {
        Some(&HOLDER)
    }

    fn updater(&self) -> Updater {
        Updater::Ui
    }

    fn update_property(&self, container: &mut Container, ctx: &mut InventoryContext, key: i16, value: i16) {
        let ContainerState::Beacon(beacon) = &mut container.state else {
            return;
        };
        let effect = if value == -1 { 0 } else { i32::from(value) };
        match Beacon::from_id(key) {
            Some(Beacon::FirstPotionEffect) => beacon.primary = effect,
            Some(Beacon::SecondPotionEffect) => beacon.secondary = effect,
            // the client works the power level out from the pyramid
            Some(Beacon::PowerLevel) | None => return,
        }
        ctx.send_bedrock(CBlockEntityData::new(BlockEntityData::Beacon {
            position: container.holder.position,
            primary: beacon.primary,
            secondary: beacon.secondary,
        }));
    }

    fn bedrock_slot_to_java(&self, slot: &ItemStackRequestSlotData) -> Result<usize, InventoryError> {
        if slot.container == ContainerSlotType::BeaconPayment {
            return Ok(0);
        }
        base_bedrock_slot_to_java(self.size(), slot)
    }

    fn java_slot_to_bedrock(&self, slot: usize) -> i32 {
        if slot == 0 {
            return i32::from(PAYMENT_SLOT);
        }
        crate::slot::java_to_storage(self.size(), slot).map_or(-1, |storage| i32::from(storage.slot))
    }

    fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        if slot == 0 {
            return BedrockContainerSlot::new(ContainerSlotType::BeaconPayment, PAYMENT_SLOT);
        }
        base_java_slot_to_bedrock_container(self.size(), slot, ContainerSlotType::LevelEntity)
    }

    fn should_handle_request_first(&self, action: &ItemStackRequestAction, _window: &Window) -> bool {
        matches!(action, ItemStackRequestAction::BeaconPayment { .. })
    }

    /// The server takes the payment itself once the effects are set.
    fn translate_special_request(
        &self,
        window: &mut Window,
        ctx: &mut InventoryContext,
        request: &ItemStackRequest,
    ) -> TranslateResult {
        let Some(ItemStackRequestAction::BeaconPayment {
            primary_effect,
            secondary_effect,
        }) = request.actions.first()
        else {
            return Err(InventoryError::InvalidCraftSequence("BEACON_PAYMENT"));
        };
        let effect = |choice: i32| (choice != 0).then_some(choice);
        ctx.send_java(SSetBeacon::new(effect(*primary_effect), effect(*secondary_effect)));
        Ok(request::accept(self, window, ctx, request, &[]))
    }
}
