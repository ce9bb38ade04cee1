/// Dispatch of binary operators to their families.
pub mod core;

/// `+ - * / %` over integers and reals.
pub mod arithmetic;

/// `& | ^ << >>` over integers.
pub mod bitwise;

/// `&&` and `||` over booleans.
pub mod logic;

/// `== != < > <= >=`.
pub mod comparison;
