// GroupChunker: split a magnitude into (value, scale index) groups.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::ConvertError;
use crate::system::NumberingSystem;

/// One scale group of a magnitude. `value` is within the numbering system's
/// group range (0..999, 0..9999, or 0..99 for Indian sub-groups).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub value: u32,
    pub scale: usize,
}

/// Split a non-negative magnitude into groups, most-significant first.
///
/// Computed least-significant first by repeated exact divmod with the
/// per-index group radix (the radix varies by index in mixed systems such as
/// the Indian 3/2/2 grouping). Iteration is bounded by the scale table, never
/// by recursion over digits.
///
/// A zero magnitude never reaches the chunker: callers render the literal
/// zero word instead. If the magnitude still has digits left when the scale
/// table is exhausted, the chunker signals [`ConvertError::ScaleOverflow`]
/// rather than silently truncating.
pub fn chunk(magnitude: &BigUint, system: &NumberingSystem) -> Result<Vec<Group>, ConvertError> {
    debug_assert!(!magnitude.is_zero());

    let mut groups = Vec::new();
    let mut rest = magnitude.clone();
    let mut scale = 0usize;

    while !rest.is_zero() {
        if scale > system.scale_count() {
            return Err(ConvertError::ScaleOverflow {
                digits: magnitude.to_string().len(),
                max_exponent: system.max_exponent(),
            });
        }
        let radix = BigUint::from(system.group_radix(scale));
        let value = (&rest % &radix)
            .to_u32()
            .unwrap_or(0); // remainder < radix <= 10000, always fits
        rest /= &radix;
        groups.push(Group { value, scale });
        scale += 1;
    }

    groups.reverse();
    Ok(groups)
}
