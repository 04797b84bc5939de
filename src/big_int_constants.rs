/// Mask of the sign bit in the most-significant limb.
pub const SIGN_BIT: u32 = 1 << 31;

/// Decimal digits consumed per parser block.
pub const DIGITS_PER_BLOCK: usize = 9;

/// `10^DIGITS_PER_BLOCK`, the radix the parser advances by per block.
pub const BLOCK_RADIX: u32 = 1_000_000_000;

/// Largest magnitude served from the small-value caches.
pub const MAX_CONSTANT: usize = 16;
