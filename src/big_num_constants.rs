/// Radix of one block of the magnitude.
pub const BASE: u32 = 10000;

/// Decimal digits held by one block.
pub const BLOCK_DIGITS: usize = 4;

/// Digit bound used when a `BigInt` is written without its parameter.
pub const DEFAULT_DIGITS: usize = 40000;

pub const POW10: [u32; BLOCK_DIGITS + 1] = [1, 10, 100, 1000, 10000];

/// Number of blocks a `BigInt` bounded to `digits` decimal digits may use.
pub const fn capacity_for(digits: usize) -> usize {
    digits / BLOCK_DIGITS + 1
}

/// Decimal digits of a single block, without leading zeros.
pub fn block_digit_len(block: u32) -> usize {
    match block {
        0..=9 => 1,
        10..=99 => 2,
        100..=999 => 3,
        _ => 4,
    }
}
