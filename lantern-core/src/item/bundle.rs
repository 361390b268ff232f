use crate::math::Fraction;

use super::ItemStack;

/// Extra weight of a bundle stored inside another bundle.
pub const BUNDLE_IN_BUNDLE_WEIGHT: Fraction = Fraction::new_const(1, 16);

/// Total weight of a bundle's contents; a full bundle weighs one.
pub fn calculate_bundle_weight(contents: &[ItemStack]) -> Fraction {
    contents.iter().fold(Fraction::ZERO, |total, content| {
        total + item_weight(content) * Fraction::whole(i64::from(content.count))
    })
}

/// Weight of a single item of this stack.
pub fn item_weight(stack: &ItemStack) -> Fraction {
    if let Some(bundle) = &stack.bundle {
        return BUNDLE_IN_BUNDLE_WEIGHT + calculate_bundle_weight(&bundle.contents);
    }
    if stack.has_bees {
        return Fraction::ONE;
    }
    Fraction::new(1, i64::from(stack.max_stack_size.max(1)))
}

/// How many items of `candidate` fit into a bundle that already weighs `bundle_weight`.
///
/// Never more than the candidate holds.
pub fn capacity_for_item(bundle_weight: Fraction, candidate: &ItemStack) -> u32 {
    let free = Fraction::ONE - bundle_weight;
    let fitting = (free / item_weight(candidate)).trunc().max(0);
    u32::try_from(fitting)
        .unwrap_or(u32::MAX)
        .min(candidate.count)
}
