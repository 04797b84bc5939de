use lazy_static::*;

use crate::big_int::BigInt;
use crate::big_int_constants::*;

lazy_static! {
    pub(crate) static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::from_raw_limb(i as u32));
    pub(crate) static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::from_raw_limb((i as u32).wrapping_neg()));
}
