pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Proportional integer rescale: `value * new_ref / old_ref`, truncating.
///
/// The product is taken in `u64`; `None` when the quotient does not fit in `u32`
/// or `old_ref` is zero.
pub(crate) fn scale_truncating(value: u32, new_ref: u32, old_ref: u32) -> Option<u32> {
    let scaled = (u64::from(value) * u64::from(new_ref)).checked_div(u64::from(old_ref))?;
    u32::try_from(scaled).ok()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
