/// Numeric conversion helpers.
///
/// Checked conversion of shift amounts to `u32`.
pub mod num;
