/// Converts a shift amount to `u32` if it is a valid shift for a 64-bit
/// integer (`0..64`).
///
/// ## Example
/// ```
/// use shunt::util::num::shift_amount;
///
/// assert_eq!(shift_amount(3), Some(3));
/// assert_eq!(shift_amount(64), None);
/// assert_eq!(shift_amount(-1), None);
/// ```
#[must_use]
pub fn shift_amount(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|&n| n < i64::BITS)
}
